#![allow(dead_code)]

use std::fs;

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use server::{app, cli::Cli, db::Storage, AppState};
use shared::api::Object;
use tempfile::TempDir;
use tower::ServiceExt;

pub const INDEX_HTML: &str = "<h1>Exercise tracker</h1>";
pub const STYLE_CSS: &str = "body { color: #222; }";

/// Router backed by a fresh database and asset dirs in a temp dir
pub struct TestApp {
    pub router: Router,
    pub storage: Storage,
    _dir: TempDir,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body)
            .unwrap_or_else(|e| panic!("Body isn't json ({e}): {}", self.body))
    }
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let views_dir = dir.path().join("views");
        let public_dir = dir.path().join("public");
        fs::create_dir(&views_dir).unwrap();
        fs::create_dir(&public_dir).unwrap();
        fs::write(views_dir.join("index.html"), INDEX_HTML).unwrap();
        fs::write(public_dir.join("style.css"), STYLE_CSS).unwrap();

        let database_uri = dir
            .path()
            .join("test.sqlite")
            .to_str()
            .unwrap()
            .to_owned();
        let storage = Storage::open(&database_uri).unwrap();

        let args = Cli {
            database_uri,
            port: 0,
            bind_addr: "127.0.0.1".to_owned(),
            views_dir,
            public_dir,
        };

        Self {
            router: app(AppState::new(storage.clone(), args)),
            storage,
            _dir: dir,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .map(|v| v.to_str().unwrap().to_owned());
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        TestResponse {
            status,
            content_type,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Request::get(uri).body(Body::empty()).unwrap()).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, body: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_owned()))
                .unwrap(),
        )
        .await
    }

    /// Registers a user and returns its id
    pub async fn create_user(&self, username: &str) -> String {
        let res = self
            .post_json(Object::NewUser.path(), serde_json::json!({ "username": username }))
            .await;
        assert_eq!(res.status, StatusCode::OK, "{}", res.body);
        res.json()["_id"].as_str().unwrap().to_owned()
    }

    pub async fn add_exercise(
        &self,
        user_id: &str,
        description: &str,
        duration: Value,
        date: Option<&str>,
    ) -> TestResponse {
        let mut body = serde_json::json!({
            "userId": user_id,
            "description": description,
            "duration": duration,
        });
        if let Some(date) = date {
            body["date"] = date.into();
        }
        self.post_json(Object::AddExercise.path(), body).await
    }
}
