//! tests/webhook/pull_request.rs
//! Opened/closed/reopened pull requests are announced; the rest of the
//! pull_request action set (labeled, synchronize, ...) is noise.

#[path = "../common/mod.rs"]
mod common;

use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn opened_pull_request_is_relayed() {
    let server: MockServer = MockServer::start_async().await;

    let discord_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/channels/123456789/messages");
            then.status(200).json_body(serde_json::json!({ "id": "1" }));
        })
        .await;

    let base_url: String = common::spawn_app(&server.base_url(), None);
    let resp: reqwest::Response = common::post_webhook(
        &base_url,
        "pull_request",
        &common::pull_request_payload("opened"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["data"]["delivered"], true);

    discord_mock.assert_async().await;
}

#[tokio::test]
async fn labeled_pull_request_is_filtered() {
    let server: MockServer = MockServer::start_async().await;

    let discord_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/channels/123456789/messages");
            then.status(200).json_body(serde_json::json!({ "id": "1" }));
        })
        .await;

    let base_url: String = common::spawn_app(&server.base_url(), None);
    let resp: reqwest::Response = common::post_webhook(
        &base_url,
        "pull_request",
        &common::pull_request_payload("labeled"),
    )
    .await;

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["data"]["delivered"], false);

    assert_eq!(discord_mock.hits_async().await, 0);
}
