// Start of file: /src/config/environment.rs

// * Environment configuration for the relay.
// * Values come from the process environment, topped up from .env via dotenv.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{bail, Context, Result};
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 10; // 10 seconds

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    // ! Bot token used as `Authorization: Bot <token>` on every Discord call
    pub discord_token: Cow<'static, str>,
    // ! Snowflake of the channel that receives the webhook embeds
    pub channel_id: Cow<'static, str>,
    // ? When set, incoming deliveries must carry a valid X-Hub-Signature-256
    pub github_webhook_secret: Option<String>,
}

impl EnvironmentVariables {
    // * Loads environment variables once.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        // * A small helper closure to fetch a variable by key.
        // * Empty values count as missing, matching how the bot treats them.
        let get_var = |key: &str| {
            vars.get(key)
                .map(String::as_str)
                .filter(|value| !value.is_empty())
        };

        let discord_token: Cow<'static, str> = match get_var("DISCORD_TOKEN") {
            Some(token) => Cow::Owned(token.into()),
            None => bail!("DISCORD_TOKEN not found in the environment or .env file"),
        };

        let channel_id: Cow<'static, str> = match get_var("CHANNEL_ID") {
            Some(id) => Cow::Owned(id.into()),
            None => bail!("CHANNEL_ID not found in the environment or .env file"),
        };

        // * Build our EnvironmentVariables, providing defaults if missing
        let config: Self = Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),

            discord_token,
            channel_id,

            github_webhook_secret: match get_var("GITHUB_WEBHOOK_SECRET") {
                Some(secret) => Some(secret.into()),
                None => {
                    warn!("Missing GITHUB_WEBHOOK_SECRET, webhook signatures will not be verified");
                    None
                }
            },
        };

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded environment configuration: {:#?}", config);
        }

        Ok(config)
    }
}

// End of file: /src/config/environment.rs
