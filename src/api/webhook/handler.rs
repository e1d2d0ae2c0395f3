// Start of file: /src/api/webhook/handler.rs

/*
    * Intake for GitHub webhook deliveries. The handler validates the request
    * (event header, optional HMAC signature), decodes the payload into the
    * matching typed event, renders an embed and relays it to Discord.
    *
    * Recognized-but-filtered deliveries (a removed star, a draft release)
    * answer 200 with `delivered: false` so GitHub never retries them.
*/

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use serde_json::json;
use tracing::{error, info, warn};

use crate::config::state::AppState;
use crate::discord::embeds::{self, CommitInfo, Embed};
use crate::github::events::{
    ForkEvent, IssuesEvent, PullRequestEvent, PushEvent, ReleaseEvent, StarEvent,
};
use crate::github::signature;
use crate::shared::response_handler::HandlerResponse;

const EVENT_HEADER: &str = "X-GitHub-Event";
const SIGNATURE_HEADER: &str = "X-Hub-Signature-256";
const DELIVERY_HEADER: &str = "X-GitHub-Delivery";

// * PR and issue actions worth announcing; sync edits, labels etc. are noise
const ANNOUNCED_ACTIONS: [&str; 3] = ["opened", "closed", "reopened"];

#[tracing::instrument(skip(state, headers, body))]
pub async fn webhook_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> HandlerResponse {
    let Some(event) = header_value(&headers, EVENT_HEADER) else {
        return HandlerResponse::new(StatusCode::BAD_REQUEST)
            .message("Missing X-GitHub-Event header");
    };

    if let Some(secret) = state.environment.github_webhook_secret.as_deref() {
        let valid: bool = header_value(&headers, SIGNATURE_HEADER)
            .map(|header| signature::verify(secret, &body, header))
            .unwrap_or(false);

        if !valid {
            warn!(event, "Rejected delivery with missing or invalid signature");
            return HandlerResponse::new(StatusCode::UNAUTHORIZED)
                .message("Invalid webhook signature");
        }
    }

    let delivery: &str = header_value(&headers, DELIVERY_HEADER).unwrap_or("unknown");
    info!(delivery, event, "Received GitHub webhook");

    let embed: Embed = match build_embed(event, &body) {
        Ok(Some(embed)) => embed,
        Ok(None) => {
            return HandlerResponse::new(StatusCode::OK)
                .data(json!({ "event": event, "delivered": false }))
                .message("Webhook received");
        }
        Err(err) => {
            warn!(event, "Failed to decode payload: {err:#}");
            return HandlerResponse::new(StatusCode::BAD_REQUEST)
                .message(format!("Malformed {event} payload"));
        }
    };

    match state
        .discord
        .send_embed(&state.environment.channel_id, &embed)
        .await
    {
        Ok(()) => HandlerResponse::new(StatusCode::OK)
            .data(json!({ "event": event, "delivered": true }))
            .message("Webhook received"),
        Err(err) => {
            error!(event, delivery, "Failed to deliver notification: {err:#}");
            HandlerResponse::new(StatusCode::BAD_GATEWAY)
                .message("Failed to deliver Discord notification")
        }
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

/// Decodes the payload for `event` and renders it as an embed.
/// `Ok(None)` means the delivery is understood but carries nothing to relay.
fn build_embed(event: &str, body: &[u8]) -> anyhow::Result<Option<Embed>> {
    let embed: Option<Embed> = match event {
        // GitHub sends a ping when the hook is first configured
        "ping" => {
            info!("Received ping from GitHub");
            None
        }

        "push" => {
            let payload: PushEvent = serde_json::from_slice(body)?;

            if payload.commits.is_empty() {
                // Branch deletion or tag push
                None
            } else {
                let commits: Vec<CommitInfo> = payload
                    .commits
                    .iter()
                    .map(|commit| CommitInfo {
                        id: commit.id.clone(),
                        message: commit.message.clone(),
                        url: commit.url.clone(),
                    })
                    .collect();

                Some(embeds::push_embed(
                    &payload.pusher.name,
                    &commits,
                    &payload.repository.full_name,
                    payload.branch(),
                    &payload.compare,
                ))
            }
        }

        "star" => {
            let payload: StarEvent = serde_json::from_slice(body)?;

            if payload.action == "created" {
                Some(embeds::star_embed(
                    &payload.sender.login,
                    &payload.repository.full_name,
                    &payload.repository.html_url,
                    payload.repository.stargazers_count,
                ))
            } else {
                None
            }
        }

        "fork" => {
            let payload: ForkEvent = serde_json::from_slice(body)?;

            Some(embeds::fork_embed(
                &payload.sender.login,
                &payload.repository.full_name,
                &payload.forkee.full_name,
                &payload.forkee.html_url,
                payload.repository.forks_count,
            ))
        }

        "release" => {
            let payload: ReleaseEvent = serde_json::from_slice(body)?;

            if payload.action == "published" {
                Some(embeds::release_embed(
                    &payload.repository.full_name,
                    &payload.release.tag_name,
                    &payload.release.author.login,
                    &payload.release.html_url,
                    payload.release.body.as_deref().unwrap_or_default(),
                    payload.release.prerelease,
                ))
            } else {
                None
            }
        }

        "pull_request" => {
            let payload: PullRequestEvent = serde_json::from_slice(body)?;

            if ANNOUNCED_ACTIONS.contains(&payload.action.as_str()) {
                Some(embeds::pull_request_embed(
                    &payload.pull_request.title,
                    &payload.pull_request.user.login,
                    &payload.pull_request.html_url,
                    &payload.action,
                    payload.pull_request.body.as_deref().unwrap_or_default(),
                ))
            } else {
                None
            }
        }

        "issues" => {
            let payload: IssuesEvent = serde_json::from_slice(body)?;

            if ANNOUNCED_ACTIONS.contains(&payload.action.as_str()) {
                Some(embeds::issue_embed(
                    &payload.issue.title,
                    &payload.issue.user.login,
                    &payload.issue.html_url,
                    &payload.action,
                    payload.issue.body.as_deref().unwrap_or_default(),
                ))
            } else {
                None
            }
        }

        other => {
            info!("Ignoring unhandled event type: {other}");
            None
        }
    };

    Ok(embed)
}


// End of file: /src/api/webhook/handler.rs
