#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use hotel_server::api::build_app;
use hotel_server::{Config, DbService, ServerState};

pub struct TestApp {
    pub router: Router,
    pub db: DbService,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// Full application over a fresh in-memory database
    pub async fn spawn() -> Self {
        let db = DbService::in_memory().await.unwrap();
        let state = ServerState::new(Config::default(), db.clone());
        Self {
            router: build_app(state),
            db,
        }
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        TestResponse {
            status,
            headers,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.send_json("POST", uri, body.to_string()).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.send_json("PUT", uri, body.to_string()).await
    }

    /// Send a raw body with a JSON content type
    pub async fn send_json(&self, method: &str, uri: &str, body: String) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        self.request(request).await
    }

    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.db.pool)
            .await
            .unwrap()
    }
}

pub fn grand_palace() -> Value {
    json!({
        "name": "Grand Palace",
        "location": "Bangkok",
        "rating": 4.5,
        "contact": "0812345678"
    })
}

pub fn deluxe_room() -> Value {
    json!({
        "RoomNumber": "101",
        "Type": "Deluxe",
        "Price": 1500.0,
        "Status": "Available"
    })
}

/// Field paths of a validation response
pub fn error_paths(body: &Value) -> Vec<String> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["path"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
