// Liveness probe. The envelope middleware wraps this like any other response.

use axum::http::StatusCode;
use serde_json::json;

use crate::shared::response_handler::HandlerResponse;

#[tracing::instrument]
pub async fn health_handler() -> HandlerResponse {
    HandlerResponse::new(StatusCode::OK).data(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
