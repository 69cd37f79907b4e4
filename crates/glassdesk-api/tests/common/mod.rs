#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use bytes::Bytes;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use glassdesk_api::auth::AppStateInner;
use glassdesk_api::config::Config;

pub const TEST_SECRET: &str = "integration-test-secret";
pub const BOUNDARY: &str = "glassdesk-test-boundary";

/// A router over fresh in-memory state. Media directories live in `_dir` and
/// vanish when the value is dropped.
pub struct TestApp {
    pub router: Router,
    pub config: Config,
    _dir: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::from_vars(|_| None).unwrap();
        config.jwt_secret = TEST_SECRET.into();
        config.upload_dir = dir.path().join("uploads");
        config.wallpaper_dir = dir.path().join("wallpapers");

        let state = AppStateInner::in_memory(config.clone()).await.unwrap();
        Self {
            router: glassdesk_api::router(state),
            config,
            _dir: dir,
        }
    }

    pub async fn raw(&self, req: Request<Body>) -> (StatusCode, Bytes) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        (status, body)
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let (status, body) = self.raw(req).await;
        let value = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, value)
    }

    pub async fn register(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.send(json_request(
            "POST",
            "/api/register",
            None,
            json!({
                "username": username,
                "password": password,
                "fullName": format!("{username} Example"),
                "email": format!("{username}@example.com"),
                "birthMonth": "March",
                "birthDate": "14",
                "birthYear": "1990",
                "gender": "other",
                "registrationDate": "2024-01-01",
            }),
        ))
        .await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.send(json_request(
            "POST",
            "/api/login",
            None,
            json!({ "username": username, "password": password }),
        ))
        .await
    }

    /// Register and log in, returning the bearer token.
    pub async fn signup(&self, username: &str) -> String {
        let (status, _) = self.register(username, "pa55word").await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, body) = self.login(username, "pa55word").await;
        assert_eq!(status, StatusCode::OK);
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn user(&self, username: &str) -> Value {
        let (_, users) = self.send(empty_request("GET", "/api/users", None)).await;
        users
            .as_array()
            .unwrap()
            .iter()
            .find(|u| u["username"] == username)
            .cloned()
            .unwrap()
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File {
        name: &'a str,
        file_name: &'a str,
        content_type: &'a str,
        data: &'a [u8],
    },
}

pub fn multipart_request(uri: &str, token: &str, parts: &[Part<'_>]) -> Request<Body> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                        .as_bytes(),
                );
            }
            Part::File {
                name,
                file_name,
                content_type,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
                body.extend_from_slice(b"\r\n");
            }
        }
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("PUT")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap()
}

/// Local path part of an absolute asset URL.
pub fn url_path(url: &str) -> &str {
    let without_scheme = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    without_scheme
        .find('/')
        .map(|i| &without_scheme[i..])
        .unwrap_or("/")
}

pub fn expect_message(body: &Value, message: &str) {
    assert_eq!(body["message"], json!(message), "body: {body}");
}
