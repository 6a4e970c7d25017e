mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_with_requested_alias() {
    let state = common::create_memory_state();
    let server = common::create_server(state.clone());

    let response = server
        .post("/urls/shorten")
        .add_header(common::IDENTITY_HEADER, "aaa@bbb.com")
        .json(&json!({ "url": "https://example.com/long", "alias": "promo" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["alias"], "promo");
    assert_eq!(body["short_url"], "http://sho.rt/r/promo");

    assert_eq!(
        state.alias_service.resolve_url("promo").as_deref(),
        Some("https://example.com/long")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_with_random_alias() {
    let server = common::create_server(common::create_memory_state());

    let response = server
        .post("/urls/shorten")
        .add_header(common::IDENTITY_HEADER, "aaa@bbb.com")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    let alias = body["alias"].as_str().unwrap();
    assert_eq!(alias.len(), 8);
    assert!(alias.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_eq!(body["short_url"], format!("http://sho.rt/r/{}", alias));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_taken_alias_conflicts() {
    let state = common::create_memory_state();
    common::seed_alias(&state, "aaa@bbb.com", "promo", "https://first.com");
    let server = common::create_server(state);

    let response = server
        .post("/urls/shorten")
        .add_header(common::IDENTITY_HEADER, "ccc@ddd.com")
        .json(&json!({ "url": "https://second.com", "alias": "promo" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "conflict");
    assert_eq!(body["error"]["details"]["alias"], "promo");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_rejects_invalid_url() {
    let server = common::create_server(common::create_memory_state());

    let response = server
        .post("/urls/shorten")
        .add_header(common::IDENTITY_HEADER, "aaa@bbb.com")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_rejects_non_http_scheme() {
    let server = common::create_server(common::create_memory_state());

    let response = server
        .post("/urls/shorten")
        .add_header(common::IDENTITY_HEADER, "aaa@bbb.com")
        .json(&json!({ "url": "ftp://files.example.com/a" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_rejects_malformed_alias() {
    let server = common::create_server(common::create_memory_state());

    let response = server
        .post("/urls/shorten")
        .add_header(common::IDENTITY_HEADER, "aaa@bbb.com")
        .json(&json!({ "url": "https://example.com", "alias": "has space" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_requires_identity() {
    let server = common::create_server(common::create_memory_state());

    let response = server
        .post("/urls/shorten")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_persists_with_file_backend() {
    let dir = tempfile::TempDir::new().unwrap();
    let server = common::create_server(common::create_file_state(dir.path()));

    server
        .post("/urls/shorten")
        .add_header(common::IDENTITY_HEADER, "aaa@bbb.com")
        .json(&json!({ "url": "https://example.com", "alias": "saved" }))
        .await
        .assert_status(StatusCode::CREATED);

    let reopened = common::create_file_state(dir.path());
    assert_eq!(
        reopened.alias_service.resolve_url("saved").as_deref(),
        Some("https://example.com")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_rejects_alias_reserved_by_routes() {
    let state = common::create_memory_state();
    let server = common::create_server(state.clone());

    let response = server
        .post("/urls/shorten")
        .add_header(common::IDENTITY_HEADER, "aaa@bbb.com")
        .json(&json!({ "url": "https://example.com", "alias": "shorten" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "validation_error"
    );
    assert_eq!(state.alias_service.resolve_url("shorten"), None);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_shorten_rejects_url_with_embedded_newline() {
    let server = common::create_server(common::create_memory_state());

    let response = server
        .post("/urls/shorten")
        .add_header(common::IDENTITY_HEADER, "aaa@bbb.com")
        .json(&json!({ "url": "https://example.com/a\nb", "alias": "nl" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    server.get("/r/nl").await.assert_status_not_found();
}
