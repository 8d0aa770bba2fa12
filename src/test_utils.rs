use std::net::SocketAddr;

use axum::Router;

use crate::models::ExchangeRate;

pub fn sample_rate() -> ExchangeRate {
    ExchangeRate {
        code: "USD".to_string(),
        code_in: "BRL".to_string(),
        high: "5.4601".to_string(),
        low: "5.4012".to_string(),
        bid: "5.4310".to_string(),
        ask: "5.4320".to_string(),
        timestamp: "1718035200".to_string(),
    }
}

pub fn sample_payload() -> String {
    format!(
        r#"{{"USDBRL":{}}}"#,
        serde_json::json!({
            "code": "USD",
            "codein": "BRL",
            "name": "Dólar Americano/Real Brasileiro",
            "high": "5.4601",
            "low": "5.4012",
            "bid": "5.4310",
            "ask": "5.4320",
            "timestamp": "1718035200",
        })
    )
}

/// Поднимает роутер на свободном локальном порту
pub async fn serve(router: Router) -> anyhow::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("{e:?}");
        }
    });
    Ok(addr)
}
