mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::json;
use uuid::Uuid;

use common::{TEST_SECRET, TestApp, empty_request, expect_message, json_request};
use glassdesk_api::token::TokenAuthority;

#[tokio::test]
async fn register_same_username_twice() {
    let app = TestApp::new().await;

    let (status, body) = app.register("ada", "first-password").await;
    assert_eq!(status, StatusCode::CREATED);
    expect_message(&body, "User registered successfully");
    assert!(body["userId"].as_str().unwrap().parse::<Uuid>().is_ok());

    let (status, body) = app.register("ada", "second-password").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    expect_message(&body, "Username already exists");

    // The first registration still owns the name.
    let (status, _) = app.login("ada", "first-password").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn login_outcomes() {
    let app = TestApp::new().await;
    app.register("ada", "right").await;

    let (status, body) = app.login("nobody", "right").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    expect_message(&body, "User not found");

    let (status, body) = app.login("ada", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    expect_message(&body, "Invalid credentials");

    let (status, body) = app.login("ada", "right").await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();

    let claims = TokenAuthority::new(TEST_SECRET, chrono::Duration::hours(1))
        .verify(token)
        .unwrap();
    assert_eq!(claims.username, "ada");
    // Roughly 10000 hours of validity.
    assert!(claims.exp - claims.iat >= 10_000 * 3600 - 5);

    let (status, _) = app.send(empty_request("GET", "/api/notes", Some(token))).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn registration_requires_credentials() {
    let app = TestApp::new().await;
    let (status, body) = app
        .send(json_request("POST", "/api/register", None, json!({ "username": "ada" })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("password"));
}

#[tokio::test]
async fn missing_token() {
    let app = TestApp::new().await;
    for (method, uri) in [
        ("GET", "/api/notes"),
        ("POST", "/api/notes"),
        ("PUT", "/api/users"),
        ("PUT", "/api/notes/whatever"),
        ("DELETE", "/api/notes/whatever"),
    ] {
        let (status, body) = app.send(empty_request(method, uri, None)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{method} {uri}");
        expect_message(&body, "Unauthorized: No token provided");
    }
}

#[tokio::test]
async fn invalid_tokens() {
    let app = TestApp::new().await;
    let forged = TokenAuthority::new("not-the-server-secret", chrono::Duration::hours(1))
        .issue(Uuid::new_v4(), "ada")
        .unwrap();
    let expired = TokenAuthority::new(TEST_SECRET, chrono::Duration::hours(-2))
        .issue(Uuid::new_v4(), "ada")
        .unwrap();

    for value in [
        "Bearer garbage".to_string(),
        format!("Bearer {forged}"),
        format!("Bearer {expired}"),
        "Basic YWRhOnBhc3N3b3Jk".to_string(),
    ] {
        let req = Request::builder()
            .uri("/api/notes")
            .header(header::AUTHORIZATION, &value)
            .body(Body::empty())
            .unwrap();
        let (status, body) = app.send(req).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{value}");
        expect_message(&body, "Unauthorized: Invalid token");
    }
}

#[tokio::test]
async fn rejected_request_has_no_side_effects() {
    let app = TestApp::new().await;
    let token = app.signup("ada").await;

    let (status, _) = app
        .send(json_request(
            "POST",
            "/api/notes",
            Some("tampered.token.value"),
            json!({ "content": "should not exist" }),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (_, notes) = app.send(empty_request("GET", "/api/notes", Some(&token))).await;
    assert_eq!(notes, json!([]));
}

#[tokio::test]
async fn music_catalog_is_public_and_stable() {
    let app = TestApp::new().await;
    let (status, first) = app.send(empty_request("GET", "/api/music", None)).await;
    assert_eq!(status, StatusCode::OK);
    let (_, second) = app.send(empty_request("GET", "/api/music", None)).await;

    let tracks = first.as_array().unwrap();
    assert_eq!(tracks.len(), 10);
    assert_eq!(first, second);
    assert_eq!(
        tracks[0],
        json!({
            "id": 1,
            "title": "Bohemian Rhapsody",
            "author": "Queen",
            "year": 1975,
            "cover": "https://upload.wikimedia.org/wikipedia/en/9/9f/Bohemian_Rhapsody.png",
        })
    );
}
