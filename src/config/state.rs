// Application state management with singleton pattern

use std::sync::Arc;
use once_cell::sync::Lazy;
use crate::config::environment::EnvironmentVariables;
use crate::discord::client::DiscordClient;

// AppState singleton
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub discord: Arc<DiscordClient>,
}

impl AppState {
    /// Creates a new AppState from the environment. Tests build the struct
    /// directly instead, pointing the Discord client at a mock server.
    pub fn new() -> anyhow::Result<Self> {
        let environment: Arc<EnvironmentVariables> = Arc::new(EnvironmentVariables::load()?);
        let discord: Arc<DiscordClient> =
            Arc::new(DiscordClient::new(environment.discord_token.as_ref()));

        Ok(Self {
            environment,
            discord,
        })
    }

    /// Returns the singleton instance
    pub fn instance() -> &'static Self {
        static INSTANCE: Lazy<AppState> = Lazy::new(|| {
            AppState::new().expect("Failed to initialize AppState")
        });
        &INSTANCE
    }
}
