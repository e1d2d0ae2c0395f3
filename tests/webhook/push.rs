//! tests/webhook/push.rs
//! Push deliveries become commit-list embeds; pushes without commits
//! (branch deletions, tag pushes) are acknowledged but not relayed.

#[path = "../common/mod.rs"]
mod common;

use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn push_delivery_posts_an_embed_to_discord() {
    let server: MockServer = MockServer::start_async().await;

    let discord_mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/channels/123456789/messages")
                .header("authorization", "Bot test-token");
            then.status(200).json_body(serde_json::json!({ "id": "1" }));
        })
        .await;

    let base_url: String = common::spawn_app(&server.base_url(), None);
    let resp: reqwest::Response =
        common::post_webhook(&base_url, "push", &common::push_payload()).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "OK");
    assert_eq!(json["data"]["event"], "push");
    assert_eq!(json["data"]["delivered"], true);

    discord_mock.assert_async().await;
}

#[tokio::test]
async fn branch_deletion_is_acknowledged_without_delivery() {
    let server: MockServer = MockServer::start_async().await;

    let discord_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/channels/123456789/messages");
            then.status(200).json_body(serde_json::json!({ "id": "1" }));
        })
        .await;

    let base_url: String = common::spawn_app(&server.base_url(), None);
    let resp: reqwest::Response =
        common::post_webhook(&base_url, "push", &common::branch_delete_payload()).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["data"]["delivered"], false);

    assert_eq!(discord_mock.hits_async().await, 0);
}
