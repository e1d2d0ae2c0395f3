use axum::{routing::get, Router};

use crate::api::health::handler::health_handler;
use crate::config::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}
