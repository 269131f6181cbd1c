mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_resolve_round_trip() {
    let server = common::create_server(common::create_test_state());

    let created = server
        .post("/shorten")
        .json(&json!({ "long_url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    let token = common::token_of(created["short_url"].as_str().unwrap()).to_string();

    let response = server.get(&format!("/short/{token}")).await;

    response.assert_status_ok();
    response.assert_json(&json!({ "long_url": "https://example.com/a" }));
}

#[tokio::test]
async fn test_resolve_accepts_dot_com_suffix() {
    let server = common::create_server(common::create_test_state());

    let created = server
        .post("/shorten")
        .json(&json!({ "long_url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    let token = common::token_of(created["short_url"].as_str().unwrap()).to_string();

    let response = server.get(&format!("/short/{token}.com")).await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_resolve_unknown_token() {
    let server = common::create_server(common::create_test_state());

    server
        .post("/shorten")
        .json(&json!({ "long_url": "https://example.com/a" }))
        .await
        .assert_status_ok();

    let response = server.get("/short/zzzzzzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["token"], "zzzzzzzzzz");
}

#[tokio::test]
async fn test_resolve_malformed_token() {
    let server = common::create_server(common::create_test_state());

    let response = server.get("/short/short").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_resolve_backend_failure() {
    let state = common::create_state(std::sync::Arc::new(common::UnreachableStore));
    let server = common::create_server(state);

    let response = server.get("/short/abcdefghij").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_resolve_is_repeatable() {
    let server = common::create_server(common::create_test_state());

    let created = server
        .post("/shorten")
        .json(&json!({ "long_url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    let token = common::token_of(created["short_url"].as_str().unwrap()).to_string();

    for _ in 0..3 {
        server
            .get(&format!("/short/{token}"))
            .await
            .assert_json(&json!({ "long_url": "https://example.com/a" }));
    }
}
