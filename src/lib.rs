// Library root for the ryuu GitHub-to-Discord webhook relay.

pub mod api;
pub mod config;
pub mod core;
pub mod discord;
pub mod github;
pub mod shared;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::discord::client::DiscordClient;
