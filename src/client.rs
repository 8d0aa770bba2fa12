use std::path::Path;
use std::time::Duration;

use crate::models::Quote;
use crate::{AppError, Result};

/// Клиент сервера котировок
pub struct RateClient {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}
impl RateClient {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }
    pub async fn get_quote(&self) -> Result<Quote> {
        tracing::info!("Получаю курс доллара из {}", self.url);
        let body = tokio::time::timeout(self.timeout, self.download())
            .await
            .map_err(|_| AppError::Timeout {
                stage: "quote request",
                budget: self.timeout,
            })??;
        Ok(serde_json::from_slice(&body)?)
    }
    async fn download(&self) -> Result<bytes::Bytes> {
        let response = self.client.get(&self.url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::RequestError(format!(
                "server responded with {}",
                response.status()
            )));
        }
        Ok(response.bytes().await?)
    }
}

pub fn render(quote: &Quote) -> String {
    format!("Dólar: {}", quote.bid)
}

/// Перезаписывает файл строкой `Dólar: <bid>`
pub async fn write_quote(path: &Path, quote: &Quote) -> Result<()> {
    tokio::fs::write(path, render(quote)).await?;
    tracing::info!("Курс записан в {}", path.display());
    Ok(())
}
