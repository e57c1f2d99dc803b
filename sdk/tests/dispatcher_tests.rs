//! Dispatcher behavior against a mock API.

mod common;

use common::{authed_sdk_for, into_api, sdk_for, setup_mock_server, truncated_body_server};
use fury_sdk::{ClientConfig, ClientError, Dispatcher, FurySdk, SdkError};
use reqwest::Method;
use serde_json::json;
use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_health_check() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let health = assert_ok!(sdk_for(&server).health_check().await);
    assert_eq!(health, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_trailing_slash_on_base_url() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = assert_ok!(FurySdk::new(format!("{}/", server.uri()), None));
    assert_ok!(sdk.health_check().await);
}

#[tokio::test]
async fn test_request_passes_body_through() {
    let server = setup_mock_server().await;
    Mock::given(method("PUT"))
        .and(path("/api/custom"))
        .and(body_json(json!({"a": 1})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"done": true})))
        .expect(1)
        .mount(&server)
        .await;

    let dispatcher = assert_ok!(Dispatcher::new(ClientConfig::new(server.uri())));
    let response = dispatcher
        .request(Method::PUT, "api/custom", Some(&json!({"a": 1})))
        .await;
    assert_eq!(assert_ok!(response), json!({"done": true}));
}

#[tokio::test]
async fn test_json_headers() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/tokens/burn"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let sdk = sdk_for(&server);
    assert_ok!(sdk.tokens().burn(fury_sdk::BurnRequest::new("A", "Mint", "1")).await);
    assert_ok!(sdk.health_check().await);
}

#[tokio::test]
async fn test_bearer_header_sent_when_configured() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .and(header("authorization", "Bearer secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    assert_ok!(authed_sdk_for(&server, "secret-key").health_check().await);
}

#[tokio::test]
async fn test_no_bearer_header_without_key() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    assert_ok!(sdk_for(&server).health_check().await);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_json_error_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/api/tokens/burn"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "insufficient balance"})),
        )
        .mount(&server)
        .await;

    let request = fury_sdk::BurnRequest::new("A", "Mint", "10");
    let err = assert_err!(sdk_for(&server).tokens().burn(request).await);

    let api = into_api(err);
    assert_eq!(api.status, Some(400));
    assert_eq!(api.message, "insufficient balance");
    assert_eq!(
        serde_json::Value::Object(api.payload),
        json!({"message": "insufficient balance"})
    );
}

#[tokio::test]
async fn test_text_error_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&server)
        .await;

    let err = assert_err!(sdk_for(&server).health_check().await);

    let api = into_api(err);
    assert_eq!(api.status, Some(500));
    assert_eq!(api.message, "internal failure");
    assert!(api.payload.is_empty());
}

#[tokio::test]
async fn test_transport_failure_has_no_status() {
    // Nothing listens on port 1.
    let sdk = assert_ok!(FurySdk::new("http://127.0.0.1:1", None));
    let err = assert_err!(sdk.health_check().await);

    let api = into_api(err);
    assert_eq!(api.status, None);
    assert!(!api.message.is_empty());
    assert!(api.payload.is_empty());
}

#[tokio::test]
async fn test_non_json_success_body() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .mount(&server)
        .await;

    let err = assert_err!(sdk_for(&server).health_check().await);
    assert!(matches!(err, ClientError::Sdk(SdkError::Deserialization(_))));
}

#[tokio::test]
async fn test_truncated_success_body_is_api_error() {
    let base_url = truncated_body_server("200 OK").await;
    let sdk = assert_ok!(FurySdk::new(base_url, None));

    let api = into_api(assert_err!(sdk.health_check().await));
    assert_eq!(api.status, Some(200));
    assert!(!api.message.is_empty());
    assert!(api.payload.is_empty());
}

#[tokio::test]
async fn test_truncated_error_body_is_not_swallowed() {
    let base_url = truncated_body_server("400 Bad Request").await;
    let sdk = assert_ok!(FurySdk::new(base_url, None));

    let api = into_api(assert_err!(sdk.health_check().await));
    assert_eq!(api.status, Some(400));
    assert!(!api.message.is_empty());
    assert_ne!(api.message, "400 Bad Request");
    assert!(api.payload.is_empty());
}
