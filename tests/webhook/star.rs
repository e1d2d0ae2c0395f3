//! tests/webhook/star.rs
//! Only newly-created stars are announced; removals stay quiet.

#[path = "../common/mod.rs"]
mod common;

use httpmock::prelude::*;
use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn new_star_is_relayed() {
    let server: MockServer = MockServer::start_async().await;

    let discord_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/channels/123456789/messages");
            then.status(200).json_body(serde_json::json!({ "id": "1" }));
        })
        .await;

    let base_url: String = common::spawn_app(&server.base_url(), None);
    let resp: reqwest::Response =
        common::post_webhook(&base_url, "star", &common::star_payload("created")).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["data"]["delivered"], true);

    discord_mock.assert_async().await;
}

#[tokio::test]
async fn removed_star_is_filtered() {
    let server: MockServer = MockServer::start_async().await;

    let discord_mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/channels/123456789/messages");
            then.status(200).json_body(serde_json::json!({ "id": "1" }));
        })
        .await;

    let base_url: String = common::spawn_app(&server.base_url(), None);
    let resp: reqwest::Response =
        common::post_webhook(&base_url, "star", &common::star_payload("deleted")).await;

    assert_eq!(resp.status(), StatusCode::OK);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["data"]["delivered"], false);

    assert_eq!(discord_mock.hits_async().await, 0);
}
