// Integration tests for `AuthClient` using wiremock.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use oasis_api::{AuthClient, Error};

async fn setup() -> (MockServer, AuthClient) {
    let server = MockServer::start().await;
    let base = url::Url::parse(&server.uri()).unwrap();
    let client = AuthClient::with_client(reqwest::Client::new(), base);
    (server, client)
}

#[tokio::test]
async fn test_login_returns_token() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_partial_json(json!({ "email": "admin@example.org" })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": 200, "token": "tok-1" })),
        )
        .mount(&server)
        .await;

    let token = client
        .login("admin@example.org", &SecretString::from("hunter2"))
        .await
        .unwrap();
    assert_eq!(token.expose_secret(), "tok-1");
}

#[tokio::test]
async fn test_login_failure_is_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": 401, "message": "bad credentials" })),
        )
        .mount(&server)
        .await;

    let err = client
        .login("admin@example.org", &SecretString::from("wrong"))
        .await
        .unwrap_err();
    match err {
        Error::Api { message, code } => {
            assert_eq!(message, "bad credentials");
            assert_eq!(code, 401);
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_sends_fixed_role_fields() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_partial_json(json!({
            "email": "new@example.org",
            "role": "admin",
            "questionIdx": 0,
            "answer": "_",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "status": 200, "token": "tok-2" })),
        )
        .mount(&server)
        .await;

    let token = client
        .register("new@example.org", &SecretString::from("hunter2"))
        .await
        .unwrap();
    assert_eq!(token.expose_secret(), "tok-2");
}

#[tokio::test]
async fn test_verify_checks_envelope_status() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/verify"))
        .and(header("token", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 200 })))
        .mount(&server)
        .await;

    assert!(client.verify(&SecretString::from("tok-1")).await.unwrap());
}

#[tokio::test]
async fn test_verify_rejected_token_is_false() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/verify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 401 })))
        .mount(&server)
        .await;

    assert!(!client.verify(&SecretString::from("stale")).await.unwrap());
}

#[tokio::test]
async fn test_saved_resource_ids() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/savedResources"))
        .and(header("token", "tok-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "status": 200, "result": ["a", "b"] })),
        )
        .mount(&server)
        .await;

    let ids = client
        .saved_resource_ids(&SecretString::from("tok-1"))
        .await
        .unwrap();
    assert_eq!(ids, ["a", "b"]);
}

#[tokio::test]
async fn test_save_and_unsave_resource() {
    let (server, client) = setup().await;
    let token = SecretString::from("tok-1");

    Mock::given(method("POST"))
        .and(path("/savedResources/5e4e"))
        .and(header("token", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 200 })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/savedResources/5e4e"))
        .and(header("token", "tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": 200 })))
        .mount(&server)
        .await;

    client.save_resource(&token, "5e4e").await.unwrap();
    client.unsave_resource(&token, "5e4e").await.unwrap();
}

#[tokio::test]
async fn test_expired_token_is_authentication_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/savedResources"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client
        .saved_resource_ids(&SecretString::from("stale"))
        .await
        .unwrap_err();
    assert!(err.is_auth_expired());
}
