// Start of file: /src/main.rs

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;

use ryuu::config::state::AppState;
use ryuu::core::{logging, server};
use ryuu::discord::client::CurrentUser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    logging::init_tracing();

    let state: &'static AppState = AppState::instance();

    // Validate the token before accepting any deliveries
    let user: CurrentUser = state
        .discord
        .current_user()
        .await
        .context("Discord token validation failed")?;
    tracing::info!("Bot is online as {} ({})", user.username, user.id);

    let app: Router = server::create_app();
    let listener: TcpListener = server::setup_listener(&state.environment).await?;

    tracing::info!("Webhook server started on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: /src/main.rs
