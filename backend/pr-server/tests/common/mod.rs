#![allow(dead_code)]

//! Test infrastructure for pr-server API tests

use pr_auth::{Argon2PasswordHasher, JwtValidator};
use pr_core::{PersonService, UploadPolicy};
use pr_db::SqlitePersonRepository;
use pr_server::{AppState, FsBlobStore, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::Serialize;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_SECRET: &[u8] = b"api-test-secret-at-least-32-bytes!";
pub const TEST_MIN_PICTURE_BYTES: u64 = 1000;
pub const TEST_MAX_UPLOAD_BYTES: usize = 64 * 1024;

/// Router plus the temp directory backing its picture store
pub struct TestApp {
    pub router: Router,
    pub pictures: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = pr_db::open_in_memory()
            .await
            .expect("Failed to create test database");
        let pictures = TempDir::new().expect("Failed to create picture dir");

        let service = PersonService::new(
            Arc::new(SqlitePersonRepository::new(pool.clone())),
            Arc::new(Argon2PasswordHasher::new()),
            Arc::new(FsBlobStore::new(pictures.path())),
            UploadPolicy::new(TEST_MIN_PICTURE_BYTES, "png"),
        );

        let state = AppState {
            service: Arc::new(service),
            jwt_validator: Arc::new(JwtValidator::with_hs256(TEST_SECRET)),
            pool,
            upload_dir: pictures.path().to_path_buf(),
            max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
        };

        Self {
            router: build_router(state),
            pictures,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    pub async fn send_json(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.send(request).await;
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    /// Register a person through the API and return its id
    pub async fn register(&self, name: &str, email: &str, password: &str) -> i64 {
        let (status, json) = self
            .send_json(json_request(
                "POST",
                "/api/v1/people",
                None,
                serde_json::json!({ "name": name, "email": email, "password": password }),
            ))
            .await;
        assert_eq!(status, StatusCode::CREATED, "registration failed: {json}");
        json["person"]["id"].as_i64().unwrap()
    }
}

#[derive(Serialize)]
struct TestClaims {
    sub: String,
    exp: i64,
    iat: i64,
}

/// HS256 token for `person_id`, valid for an hour
pub fn token_for(person_id: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    encode(
        &Header::default(),
        &TestClaims {
            sub: person_id.to_string(),
            exp: now + 3600,
            iat: now,
        },
        &EncodingKey::from_secret(TEST_SECRET),
    )
    .unwrap()
}

pub fn json_request(
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
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

const BOUNDARY: &str = "pr-test-boundary";

/// Multipart request with a single part named `field`
pub fn multipart_request(field: &str, bytes: &[u8], token: Option<&str>) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"avatar.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/v1/people/picture")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        );
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body)).unwrap()
}
