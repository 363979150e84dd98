//! Integration tests of the request executor: token attachment,
//! pre-request validation, and response classification.

use msgraph_client::{Error, GraphClient, LoginOutcome, TokenBundle, TokenStore};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/consumers/oauth2/v2.0/token";

async fn client_with_bundle(
    dir: &tempfile::TempDir,
    auth_server: &MockServer,
    resource_server: &MockServer,
    access_ttl: i64,
) -> GraphClient {
    TokenStore::new(dir.path().join("credentials.json"))
        .save(&TokenBundle::from_wire(
            "live-access".into(),
            "refresh-token".into(),
            None,
            access_ttl,
            86400,
        ))
        .unwrap();

    let client = GraphClient::builder()
        .client_id("client-id")
        .client_secret("client-secret")
        .redirect_uri("https://localhost/redirect")
        .scope("User.Read")
        .scope("offline_access")
        .credentials_path(dir.path().join("credentials.json"))
        .authority_base(auth_server.uri())
        .resource_root(resource_server.uri())
        .build()
        .unwrap();

    assert!(matches!(
        client.login().await.unwrap(),
        LoginOutcome::Authenticated
    ));
    client
}

#[tokio::test]
async fn bearer_token_is_attached_and_body_returned() {
    let auth_server = MockServer::start().await;
    let resource_server = MockServer::start().await;
    let body = serde_json::json!({"value": [{"displayName": "Ada"}]});
    Mock::given(method("GET"))
        .and(path("/v1.0/users"))
        .and(header("authorization", "Bearer live-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
        .expect(1)
        .mount(&resource_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_with_bundle(&dir, &auth_server, &resource_server, 3600).await;

    let result = client.users().list_users().await.unwrap();
    assert_eq!(result, body);
}

#[tokio::test]
async fn live_token_does_not_touch_the_token_endpoint() {
    let auth_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&auth_server)
        .await;

    let resource_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": []})))
        .mount(&resource_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_with_bundle(&dir, &auth_server, &resource_server, 3600).await;
    client.groups().list_groups().await.unwrap();
}

#[tokio::test]
async fn token_under_threshold_is_refreshed_before_the_call() {
    let auth_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(body_string_contains("grant_type=refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "fresh-access",
            "refresh_token": "rotated-refresh",
            "expires_in": 3600,
            "ext_expires_in": 7200,
        })))
        .expect(1)
        .mount(&auth_server)
        .await;

    let resource_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/users"))
        .and(header("authorization", "Bearer fresh-access"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"value": []})))
        .expect(1)
        .mount(&resource_server)
        .await;

    // 90s of raw TTL is 30s of usable lifetime after the safety
    // margin: enough to count as live at login, not enough to pass
    // pre-request validation.
    let dir = tempfile::tempdir().unwrap();
    let client = client_with_bundle(&dir, &auth_server, &resource_server, 90).await;

    client.users().list_users().await.unwrap();
}

#[tokio::test]
async fn empty_body_requests_return_the_status_marker() {
    let auth_server = MockServer::start().await;
    let resource_server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/me/messages/m1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&resource_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_with_bundle(&dir, &auth_server, &resource_server, 3600).await;

    let result = client.mail().delete_my_message("m1").await.unwrap();
    assert_eq!(result, serde_json::json!({"status_code": 204}));
}

#[tokio::test]
async fn successful_response_without_body_returns_success_marker() {
    let auth_server = MockServer::start().await;
    let resource_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/groups"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&resource_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_with_bundle(&dir, &auth_server, &resource_server, 3600).await;

    let result = client.groups().list_groups().await.unwrap();
    assert_eq!(
        result,
        serde_json::json!({"message": "success", "status_code": 200})
    );
}

#[tokio::test]
async fn non_success_responses_surface_as_structured_errors() {
    let auth_server = MockServer::start().await;
    let resource_server = MockServer::start().await;
    let error_body = serde_json::json!({
        "error": {"code": "itemNotFound", "message": "The resource could not be found."}
    });
    Mock::given(method("GET"))
        .and(path("/v1.0/users"))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body.clone()))
        .mount(&resource_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_with_bundle(&dir, &auth_server, &resource_server, 3600).await;

    match client.users().list_users().await.unwrap_err() {
        Error::Api {
            status,
            method,
            url,
            body,
        } => {
            assert_eq!(status, 404);
            assert_eq!(method, "GET");
            assert!(url.ends_with("/v1.0/users"));
            assert_eq!(body, error_body);
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn unparseable_success_body_is_a_response_error_not_a_state_error() {
    let auth_server = MockServer::start().await;
    let resource_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html>surprise maintenance page</html>"),
        )
        .mount(&resource_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_with_bundle(&dir, &auth_server, &resource_server, 3600).await;

    let err = client.users().list_users().await.unwrap_err();
    // A broken response body must not read as a broken credential file.
    assert!(!err.is_recoverable_state());
    match err {
        Error::MalformedResponse { url, .. } => assert!(url.ends_with("/v1.0/users")),
        other => panic!("expected MalformedResponse, got {:?}", other),
    }
}

#[tokio::test]
async fn non_json_error_bodies_are_preserved_as_text() {
    let auth_server = MockServer::start().await;
    let resource_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/users"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&resource_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let client = client_with_bundle(&dir, &auth_server, &resource_server, 3600).await;

    match client.users().list_users().await.unwrap_err() {
        Error::Api { status, body, .. } => {
            assert_eq!(status, 502);
            assert_eq!(body, serde_json::Value::String("Bad Gateway".into()));
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}
