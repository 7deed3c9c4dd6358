//! Tests for the Violet client: login, headers and error classification.

use serde_json::json;
use std::time::Duration;
use violet_client::{
    ApiError, AuthError, ClientConfig, Credentials, Method, VioletClient, APP_ID_HEADER,
    APP_SECRET_HEADER, TOKEN_HEADER,
};
use violet_testing::FakeVioletApi;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn credentials() -> Credentials {
    Credentials::new("user", "pass", "11", "secret")
}

fn client_for(server: &MockServer) -> VioletClient {
    let config = ClientConfig::builder()
        .base_url(format!("{}/v1", server.uri()))
        .build();
    VioletClient::new(config, credentials()).unwrap()
}

async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/v1/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": token })))
        .mount(server)
        .await;
}

// ============================================================================
// Login
// ============================================================================

#[tokio::test]
async fn test_login_sends_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/login"))
        .and(header("Content-Type", "application/json"))
        .and(header(APP_ID_HEADER, "11"))
        .and(header(APP_SECRET_HEADER, "secret"))
        .and(body_json(json!({ "username": "user", "password": "pass" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok-1" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login().await.unwrap();

    assert!(client.is_authenticated());
    assert_eq!(client.session().token(), Some("tok-1"));
}

#[tokio::test]
async fn test_login_empty_token() {
    let server = MockServer::start().await;
    mount_login(&server, "").await;

    let mut client = client_for(&server);
    let err = client.login().await.unwrap_err();

    assert!(matches!(err, AuthError::EmptyToken));
    assert!(!client.is_authenticated());
}

#[tokio::test]
async fn test_login_missing_token_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "user": {} })))
        .mount(&server)
        .await;

    let err = client_for(&server).login().await.unwrap_err();
    assert!(matches!(err, AuthError::EmptyToken));
}

#[tokio::test]
async fn test_login_rejected_keeps_remote_diagnostic() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string(r#"{"message":"bad credentials"}"#))
        .mount(&server)
        .await;

    let err = client_for(&server).login().await.unwrap_err();

    match err {
        AuthError::Transport(ApiError::Remote { status, body, .. }) => {
            assert_eq!(status, 401);
            assert!(body.contains("bad credentials"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_login_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).login().await.unwrap_err();
    assert!(matches!(err, AuthError::Decode(_)));
}

#[tokio::test]
async fn test_wrong_password_leaves_client_unauthenticated() {
    let api = FakeVioletApi::start().await;
    let account = api.account();
    let config = ClientConfig::builder().base_url(api.base_url()).build();

    let mut client = VioletClient::connect(
        config.clone(),
        Credentials::new(
            account.username.clone(),
            account.password.clone(),
            account.app_id.to_string(),
            account.app_secret.clone(),
        ),
    )
    .await
    .unwrap();
    assert!(client.is_authenticated());

    let mut wrong = VioletClient::new(
        config,
        Credentials::new(account.username, "wrong", account.app_id.to_string(), account.app_secret),
    )
    .unwrap();
    assert!(wrong.login().await.is_err());
    assert!(!wrong.is_authenticated());

    client.login().await.unwrap();
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn test_invalid_header_value_is_configuration_error() {
    let server = MockServer::start().await;
    mount_login(&server, "tok").await;

    let config = ClientConfig::builder()
        .base_url(format!("{}/v1", server.uri()))
        .build();
    let mut client =
        VioletClient::new(config, Credentials::new("user", "pass", "11", "sec\nret")).unwrap();

    let err = client.login().await.unwrap_err();
    match err {
        AuthError::Transport(ApiError::Configuration(_)) => {}
        other => panic!("unexpected error: {other}"),
    }
}

// ============================================================================
// Requests
// ============================================================================

#[tokio::test]
async fn test_request_attaches_token_and_app_headers() {
    let server = MockServer::start().await;
    mount_login(&server, "tok-2").await;

    Mock::given(method("GET"))
        .and(path("/v1/events/webhooks/42"))
        .and(header(APP_ID_HEADER, "11"))
        .and(header(APP_SECRET_HEADER, "secret"))
        .and(header(TOKEN_HEADER, "tok-2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":42}"#))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login().await.unwrap();

    let body = client
        .request(Method::GET, "events/webhooks/42", None)
        .await
        .unwrap();
    assert_eq!(&body[..], br#"{"id":42}"#);
}

#[tokio::test]
async fn test_request_returns_body_unparsed() {
    let server = MockServer::start().await;
    mount_login(&server, "tok").await;
    Mock::given(method("DELETE"))
        .and(path("/v1/apps/11/webhooks/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login().await.unwrap();

    let body = client
        .request(Method::DELETE, "apps/11/webhooks/7", None)
        .await
        .unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_remote_error_carries_status_and_body() {
    let server = MockServer::start().await;
    mount_login(&server, "tok").await;
    Mock::given(method("GET"))
        .and(path("/v1/events/webhooks/9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"code":404,"message":"not found"}"#),
        )
        .mount(&server)
        .await;

    let mut client = client_for(&server);
    client.login().await.unwrap();

    let err = client
        .request(Method::GET, "events/webhooks/9", None)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.remote_body(), Some(r#"{"code":404,"message":"not found"}"#));
    assert!(
        err.to_string()
            .starts_with("Error performing request. Response status 404 Not Found.")
    );
}

#[tokio::test]
async fn test_request_refused_without_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client
        .request(Method::GET, "events/webhooks/1", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MissingToken { .. }));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let config = ClientConfig::builder()
        .base_url("http://127.0.0.1:9/v1/")
        .connect_timeout(Duration::from_millis(500))
        .timeout(Duration::from_secs(2))
        .build();
    let mut client = VioletClient::new(config, credentials()).unwrap();

    let err = client.login().await.unwrap_err();
    match err {
        AuthError::Transport(e) => assert!(e.is_transport()),
        other => panic!("unexpected error: {other}"),
    }
}
