//! Shared helpers for HTTP integration tests.
//!
//! Every test gets its own SQLite file in a temp dir and the same router
//! (middleware included) that production builds.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use storefront_api::auth::{Authorizer, AutoGrant};
use storefront_api::config::ServerConfig;
use storefront_api::router::build_app_router;
use storefront_api::state::AppState;
use storefront_core::product::ProductDraft;
use storefront_db::models::product::Product;
use storefront_db::repositories::ProductRepo;
use storefront_db::Database;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub db: Database,
    _dir: TempDir,
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(database_path: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_path,
        seed_on_start: false,
        cors_origins: vec!["http://localhost:5000".to_string()],
    }
}

/// Empty store, admin gate wide open.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(AutoGrant), false).await
}

/// Store holding the 80 demo products.
pub async fn seeded_app() -> TestApp {
    spawn_app_with(Arc::new(AutoGrant), true).await
}

pub async fn spawn_app_with(authorizer: Arc<dyn Authorizer>, seed: bool) -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("store.db");
    let db = Database::new(path.clone());
    storefront_db::init(&db, seed).await.expect("init store");

    let config = test_config(path);
    let state = AppState {
        db: db.clone(),
        config: Arc::new(config.clone()),
        authorizer,
    };

    TestApp {
        router: build_app_router(state, &config),
        db,
        _dir: dir,
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response {
        self.send(
            Request::get(uri)
                .header(COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// POST an `application/x-www-form-urlencoded` body.
    pub async fn post_form(&self, uri: &str, body: &str) -> Response {
        self.send(
            Request::post(uri)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn insert(&self, name: &str, brand: &str, price: f64) -> Product {
        let mut conn = self.db.connect().await.unwrap();
        let draft = ProductDraft {
            name: name.to_string(),
            brand: brand.to_string(),
            category: brand.to_string(),
            description: format!("{name} description"),
            price,
            image_url: Some(format!("https://img.example/{name}.png")),
        };
        ProductRepo::create(&mut conn, &draft).await.unwrap()
    }

    pub async fn find(&self, id: i64) -> Option<Product> {
        let mut conn = self.db.connect().await.unwrap();
        ProductRepo::find_by_id(&mut conn, id).await.unwrap()
    }

    pub async fn count(&self) -> i64 {
        let mut conn = self.db.connect().await.unwrap();
        ProductRepo::count(&mut conn).await.unwrap()
    }
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is JSON")
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect has a Location header")
        .to_str()
        .unwrap()
}

pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

/// True if the response sets `name=value` (ignoring attributes).
pub fn sets_cookie(response: &Response, name: &str, value: &str) -> bool {
    let prefix = format!("{name}={value};");
    set_cookies(response).iter().any(|c| c.starts_with(&prefix))
}

/// True if the response expires cookie `name`.
pub fn expires_cookie(response: &Response, name: &str) -> bool {
    let prefix = format!("{name}=;");
    set_cookies(response)
        .iter()
        .any(|c| c.starts_with(&prefix) && c.contains("Max-Age=0"))
}
