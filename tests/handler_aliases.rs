mod common;

use axum::http::StatusCode;

#[tokio::test(flavor = "multi_thread")]
async fn test_list_returns_only_callers_aliases() {
    let state = common::create_memory_state();
    common::seed_alias(&state, "a@x.com", "s2", "https://two.com");
    common::seed_alias(&state, "a@x.com", "s1", "https://one.com");
    common::seed_alias(&state, "b@x.com", "s3", "https://three.com");
    let server = common::create_server(state);

    let response = server
        .get("/urls")
        .add_header(common::IDENTITY_HEADER, "a@x.com")
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total"], 2);

    let items = body["items"].as_array().unwrap();
    assert_eq!(items[0]["alias"], "s1");
    assert_eq!(items[0]["url"], "https://one.com");
    assert_eq!(items[0]["owner"], "a@x.com");
    assert_eq!(items[0]["short_url"], "http://sho.rt/r/s1");
    assert_eq!(items[1]["alias"], "s2");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_empty() {
    let server = common::create_server(common::create_memory_state());

    let response = server
        .get("/urls")
        .add_header(common::IDENTITY_HEADER, "c@x.com")
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["total"], 0);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_requires_identity() {
    let server = common::create_server(common::create_memory_state());

    let response = server.get("/urls").await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.headers().contains_key("www-authenticate"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blank_identity_is_rejected() {
    let server = common::create_server(common::create_memory_state());

    server
        .get("/urls")
        .add_header(common::IDENTITY_HEADER, "   ")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_own_alias() {
    let state = common::create_memory_state();
    common::seed_alias(&state, "a@x.com", "mine", "https://example.com");
    let server = common::create_server(state.clone());

    server
        .delete("/urls/mine")
        .add_header(common::IDENTITY_HEADER, "a@x.com")
        .await
        .assert_status(StatusCode::NO_CONTENT);

    assert_eq!(state.alias_service.resolve_url("mine"), None);

    server
        .delete("/urls/mine")
        .add_header(common::IDENTITY_HEADER, "a@x.com")
        .await
        .assert_status_not_found();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_foreign_alias_looks_missing() {
    let state = common::create_memory_state();
    common::seed_alias(&state, "a@x.com", "theirs", "https://example.com");
    let server = common::create_server(state.clone());

    let foreign = server
        .delete("/urls/theirs")
        .add_header(common::IDENTITY_HEADER, "b@x.com")
        .await;
    let missing = server
        .delete("/urls/nothing")
        .add_header(common::IDENTITY_HEADER, "b@x.com")
        .await;

    foreign.assert_status_not_found();
    missing.assert_status_not_found();
    assert_eq!(
        foreign.json::<serde_json::Value>()["error"]["message"],
        missing.json::<serde_json::Value>()["error"]["message"]
    );
    assert!(state.alias_service.resolve_url("theirs").is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_requires_identity() {
    let state = common::create_memory_state();
    common::seed_alias(&state, "a@x.com", "mine", "https://example.com");
    let server = common::create_server(state.clone());

    server
        .delete("/urls/mine")
        .await
        .assert_status(StatusCode::UNAUTHORIZED);

    assert!(state.alias_service.resolve_url("mine").is_some());
}
