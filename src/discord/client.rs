// Start of file: /src/discord/client.rs

/*
    * Minimal Discord REST client. The relay only ever needs two calls:
    * posting a message with embeds to a channel, and fetching the bot's
    * own identity at startup to confirm the token is valid.
*/

use std::time::Duration;

use anyhow::{bail, Context, Result};
use reqwest::{header::AUTHORIZATION, Response, StatusCode};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::discord::embeds::Embed;

pub const DISCORD_API_BASE: &str = "https://discord.com/api/v10";

// ! Fallback wait when Discord rate limits us without a usable Retry-After
const DEFAULT_RETRY_AFTER_SECONDS: f64 = 1.0;

#[derive(Debug, Clone)]
pub struct DiscordClient {
    http: reqwest::Client,
    token: String,
    api_base: String,
}

// * The subset of GET /users/@me we care about
#[derive(Debug, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

impl DiscordClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, DISCORD_API_BASE)
    }

    // * Tests point this at a local mock server
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        let api_base: String = api_base.into();

        Self {
            http: reqwest::Client::new(),
            token: token.into(),
            api_base: api_base.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the bot identity behind the configured token. Used once at
    /// startup so a bad token fails loudly instead of on the first delivery.
    pub async fn current_user(&self) -> Result<CurrentUser> {
        let url: String = format!("{}/users/@me", self.api_base);

        let response: Response = self
            .http
            .get(&url)
            .header(AUTHORIZATION, self.auth_header())
            .send()
            .await
            .context("Failed to reach the Discord API")?;

        if !response.status().is_success() {
            bail!("Discord rejected the bot token: HTTP {}", response.status());
        }

        response
            .json::<CurrentUser>()
            .await
            .context("Unexpected response from GET /users/@me")
    }

    /// Posts a single embed to the given channel, retrying exactly once when
    /// Discord answers 429, honoring its Retry-After header.
    pub async fn send_embed(&self, channel_id: &str, embed: &Embed) -> Result<()> {
        let url: String = format!("{}/channels/{}/messages", self.api_base, channel_id);
        let body: Value = json!({ "embeds": [embed] });

        let mut response: Response = self.post_json(&url, &body).await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            let wait_seconds: f64 = retry_after_seconds(&response);
            warn!("Discord rate limit hit, retrying in {wait_seconds:.2}s");

            tokio::time::sleep(Duration::from_secs_f64(wait_seconds)).await;
            response = self.post_json(&url, &body).await?;
        }

        if response.status().is_success() {
            debug!(channel_id, "Posted embed to Discord");
            return Ok(());
        }

        let status: StatusCode = response.status();
        let detail: String = response.text().await.unwrap_or_default();
        bail!(
            "Discord API returned {status} for channel {channel_id}: {}",
            snippet(&detail)
        );
    }

    async fn post_json(&self, url: &str, body: &Value) -> Result<Response> {
        self.http
            .post(url)
            .header(AUTHORIZATION, self.auth_header())
            .json(body)
            .send()
            .await
            .context("Failed to reach the Discord API")
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.token)
    }
}

fn retry_after_seconds(response: &Response) -> f64 {
    response
        .headers()
        .get("Retry-After")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECONDS)
}

// * Keep error messages readable when Discord returns a large body
fn snippet(detail: &str) -> &str {
    let cut: usize = detail
        .char_indices()
        .nth(200)
        .map(|(index, _)| index)
        .unwrap_or(detail.len());
    &detail[..cut]
}


// End of file: /src/discord/client.rs
