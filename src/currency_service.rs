use std::time::Duration;

use crate::models::{AwesomeApiResponse, ExchangeRate, Quote};
use crate::storage::CurrencyStorage;
use crate::{AppError, Result};

// url для получения курса USD-BRL
pub const AWESOME_API_URI: &str = "https://economia.awesomeapi.com.br/json/last/USD-BRL";

#[derive(Clone)]
pub struct CurrencyService {
    client: reqwest::Client,
    uri: String,
    fetch_timeout: Duration,
    storage: CurrencyStorage,
}

impl CurrencyService {
    pub fn new(
        uri: impl Into<String>,
        fetch_timeout: Duration,
        storage: CurrencyStorage,
    ) -> Result<Self> {
        let client = reqwest::Client::builder().gzip(true).build()?;
        Ok(Self {
            client,
            uri: uri.into(),
            fetch_timeout,
            storage,
        })
    }
    /// Запрашивает курс, сохраняет его и возвращает значение ask
    pub async fn quote(&self) -> Result<Quote> {
        let rate = self.fetch().await?;
        let id = self.storage.save(&rate).await?;
        tracing::info!("Сохранила курс {}-{} с id {id}", rate.code, rate.code_in);
        Ok(Quote::from(&rate))
    }
    /// Один запрос к upstream без повторов. Таймаут покрывает и отправку, и чтение тела.
    pub async fn fetch(&self) -> Result<ExchangeRate> {
        tracing::info!("Запрашиваю курс из {}", self.uri);
        let body = tokio::time::timeout(self.fetch_timeout, self.download())
            .await
            .map_err(|_| AppError::Timeout {
                stage: "upstream fetch",
                budget: self.fetch_timeout,
            })??;
        let response: AwesomeApiResponse = serde_json::from_slice(&body)?;
        let rate = response.usdbrl;
        match rate.quoted_at() {
            Some(t) => tracing::info!("Получен курс ask={} на {t}", rate.ask),
            None => tracing::info!("Получен курс ask={}", rate.ask),
        }
        Ok(rate)
    }
    #[cfg(test)]
    pub fn storage(&self) -> &CurrencyStorage {
        &self.storage
    }
    async fn download(&self) -> Result<bytes::Bytes> {
        let response = self.client.get(&self.uri).send().await?;
        if !response.status().is_success() {
            return Err(AppError::RequestError(format!(
                "upstream responded with {}",
                response.status()
            )));
        }
        Ok(response.bytes().await?)
    }
}
