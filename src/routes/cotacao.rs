use crate::models::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

pub fn init(state: AppState) -> Router {
    Router::new()
        .route("/cotacao", get(cotacao))
        .with_state(state)
}

/// Курс доллара: ask под ключом "bid", при любой ошибке 500 без тела
async fn cotacao(State(state): State<AppState>) -> impl IntoResponse {
    match state.currency_service.quote().await {
        Ok(quote) => (StatusCode::OK, Json(quote)).into_response(),
        Err(e) => {
            tracing::error!("Не удалось получить курс доллара: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
