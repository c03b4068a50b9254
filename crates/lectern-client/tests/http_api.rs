use lectern_client::{ApiClient, ApiError, AvatarFile, IdentityApi};
use lectern_config::ApiConfig;
use lectern_core::ProfileField;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: server.uri(),
        ..Default::default()
    })
}

// ── identity read ───────────────────────────────────────────────

#[tokio::test]
async fn fetch_identity_sends_bearer_and_normalizes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/6c1f"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ID": "6c1f",
            "Username": "alice",
            "Email": "alice@example.com",
            "IsAdmin": false,
            "ProfilePicID": { "String": "pic-3", "Valid": true }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let identity = client_for(&server)
        .fetch_identity("tok-1", "6c1f")
        .await
        .expect("fetch");

    assert_eq!(identity.username, "alice");
    assert_eq!(identity.profile_pic_id.as_deref(), Some("pic-3"));
}

#[tokio::test]
async fn fetch_identity_non_success_is_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("User not found\n"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .fetch_identity("tok", "missing")
        .await
        .unwrap_err();

    assert_eq!(error.status(), Some(404));
    assert_eq!(error.to_string(), "fetch identity: HTTP 404: User not found");
}

#[tokio::test]
async fn fetch_identity_malformed_body_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Email": "x@y.zz" })))
        .mount(&server)
        .await;

    let error = client_for(&server).fetch_identity("tok", "u1").await.unwrap_err();
    assert!(matches!(error, ApiError::Decode { .. }), "got {error:?}");
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let client = ApiClient::new(&ApiConfig {
        base_url: "http://127.0.0.1:9".into(),
        ..Default::default()
    });
    let error = client.fetch_identity("tok", "u1").await.unwrap_err();
    assert!(matches!(error, ApiError::Transport { .. }), "got {error:?}");
}

// ── field update ────────────────────────────────────────────────

#[tokio::test]
async fn update_field_targets_single_field() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users"))
        .and(query_param("id", "u1"))
        .and(query_param("target_field", "email"))
        .and(header("authorization", "Bearer tok"))
        .and(body_json(json!({ "email": "alice@new.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .update_field("tok", "u1", ProfileField::Email, "alice@new.com")
        .await
        .expect("update");
}

#[tokio::test]
async fn update_profile_pic_uses_body_key() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users"))
        .and(query_param("target_field", "profile_pic"))
        .and(body_json(json!({ "profilePicID": "pic-4" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .update_field("tok", "u1", ProfileField::ProfilePic, "pic-4")
        .await
        .expect("update");
}

#[tokio::test]
async fn update_field_rejection_reports_operation() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(501).set_body_string("not implemented"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .update_field("tok", "u1", ProfileField::Username, "alice")
        .await
        .unwrap_err();
    assert_eq!(error.status(), Some(501));
    assert!(error.to_string().starts_with("update field"));
}

// ── upload ──────────────────────────────────────────────────────

#[tokio::test]
async fn upload_sends_multipart_with_category() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(query_param("location", "profile_pictures"))
        .and(header("authorization", "Bearer tok"))
        .and(body_string_contains("name=\"location\""))
        .and(body_string_contains("profile_pictures"))
        .and(body_string_contains("filename=\"me.png\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "fileID": "f-77" })))
        .expect(1)
        .mount(&server)
        .await;

    let receipt = client_for(&server)
        .upload_avatar("tok", &AvatarFile::new("me.png", b"not-really-png".to_vec()))
        .await
        .expect("upload");
    assert_eq!(receipt.asset_id.as_deref(), Some("f-77"));
}

#[tokio::test]
async fn upload_failure_keeps_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad Request"))
        .mount(&server)
        .await;

    let error = client_for(&server)
        .upload_avatar("tok", &AvatarFile::new("me.png", vec![1, 2, 3]))
        .await
        .unwrap_err();
    assert!(error.to_string().contains("Bad Request"));
}

// ── assets & login ──────────────────────────────────────────────

#[tokio::test]
async fn fetch_asset_returns_size() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/files/pic-1"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8; 128]))
        .mount(&server)
        .await;

    let size = client_for(&server).fetch_asset("pic-1").await.expect("asset");
    assert_eq!(size, 128);
}

#[tokio::test]
async fn login_posts_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "email": "a@b.co", "password": "secret1" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "auth_token": "h.p.s", "refresh_token": "r-1" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let tokens = client_for(&server).login("a@b.co", "secret1").await.expect("login");
    assert_eq!(tokens.auth_token, "h.p.s");
    assert_eq!(tokens.refresh_token.as_deref(), Some("r-1"));
}

#[tokio::test]
async fn login_rejected_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid email or password"))
        .mount(&server)
        .await;

    let error = client_for(&server).login("a@b.co", "nope").await.unwrap_err();
    assert_eq!(error.status(), Some(401));
}
