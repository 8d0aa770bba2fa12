use crate::models::AppState;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;
use http::{Request, Response, StatusCode};
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

mod cotacao;

/// Собирает роутер. Общий таймаут запроса отвечает 500, как и любая другая ошибка.
pub fn init(state: AppState, request_timeout: Duration) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<axum::body::Body>| {
            tracing::info_span!("request", method = %request.method(), path = %request.uri().path())
        })
        .on_request(|_request: &Request<axum::body::Body>, _span: &Span| {
            tracing::debug!("запрос принят")
        })
        .on_response(|response: &Response<axum::body::Body>, latency: Duration, _span: &Span| {
            tracing::debug!(status = %response.status(), ?latency, "ответ отправлен")
        })
        .on_failure(|error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
            tracing::error!("запрос завершился ошибкой {error} за {latency:?}")
        });
    Router::new()
        .route("/health", get(health_check))
        .merge(cotacao::init(state))
        .layer(trace)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::INTERNAL_SERVER_ERROR,
            request_timeout,
        ))
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "ok").into_response()
}
