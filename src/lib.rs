mod error;

pub use error::{AppError, Result};
pub mod client;
pub mod config;
pub mod currency_service;
pub mod models;
pub mod routes;
pub mod storage;
#[cfg(test)]
mod test_utils;

use config::ServerConfig;

/// Готовит базу, собирает сервис и обслуживает запросы до остановки
pub async fn run(cfg: ServerConfig) -> Result<()> {
    tracing::info!("Инициализирую базу данных");
    let pool = storage::connect(&cfg.database, !cfg.keep_history).await?;
    let storage = storage::CurrencyStorage::new(pool, cfg.persist_timeout());
    if cfg.keep_history {
        log_history(&storage).await?;
    }
    let currency_service = currency_service::CurrencyService::new(
        cfg.upstream_url.clone(),
        cfg.upstream_timeout(),
        storage,
    )?;
    let state = models::AppState::new(currency_service);
    let app = routes::init(state, cfg.request_timeout());
    let listener = tokio::net::TcpListener::bind(cfg.listen).await?;
    tracing::info!("Сервер слушает {}", cfg.listen);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn log_history(storage: &storage::CurrencyStorage) -> Result<()> {
    let count = storage.count().await?;
    match storage.latest().await? {
        Some(last) => tracing::info!(
            "В базе {count} курсов, последний ask={} (id {})",
            last.ask,
            last.id
        ),
        None => tracing::info!("База пуста"),
    }
    Ok(())
}
