// Start of file: /src/api/webhook/routes.rs

/*
    * This file defines the route(s) for the webhook endpoint.
    * We register one POST route at `/webhook` that calls `webhook_handler`.
*/

use axum::{routing::post, Router};

use crate::api::webhook::handler::webhook_handler;
use crate::config::state::AppState;

pub fn webhook_routes() -> Router<AppState> {
    Router::new().route("/webhook", post(webhook_handler))
}

// End of file: /src/api/webhook/routes.rs
