//! tests/webhook/delivery.rs
//! Failure behavior of the Discord leg: server errors surface as 502, and
//! rate limits are retried exactly once.

#[path = "../common/mod.rs"]
mod common;

use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn discord_server_error_maps_to_502() {
    let server: MockServer = MockServer::start_async().await;

    let discord_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/channels/123456789/messages");
            then.status(500).body("upstream exploded");
        })
        .await;

    let base_url: String = common::spawn_app(&server.base_url(), None);
    let resp: reqwest::Response =
        common::post_webhook(&base_url, "push", &common::push_payload()).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "BAD_GATEWAY");
    assert_eq!(json["messages"][0], "Failed to deliver Discord notification");

    discord_mock.assert_async().await;
}

#[tokio::test]
async fn rate_limit_is_retried_exactly_once() {
    let server: MockServer = MockServer::start_async().await;

    let discord_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/channels/123456789/messages");
            then.status(429)
                .header("Retry-After", "0")
                .json_body(serde_json::json!({ "retry_after": 0.0 }));
        })
        .await;

    let base_url: String = common::spawn_app(&server.base_url(), None);
    let resp: reqwest::Response =
        common::post_webhook(&base_url, "star", &common::star_payload("created")).await;

    // Both attempts rate limited: the delivery fails and was tried twice.
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(discord_mock.hits_async().await, 2);
}
