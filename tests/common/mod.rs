#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use serde_json::Value;
use shop_backend_rs::{
    app::App,
    modules::{
        auth::repository::session::{self, Session},
        product::repository::{self as product, Product},
        user::repository::{self as user, CartItems, User},
    },
    types::{AppContext, AppEnvironment, Context, StorageContext},
};
use sqlx::types::BigDecimal;
use std::{str::FromStr, sync::Arc};
use tempfile::TempDir;
use tower::ServiceExt;
use ulid::Ulid;

pub struct TestApp {
    pub users: Arc<user::MemoryRepository>,
    pub products: Arc<product::MemoryRepository>,
    pub sessions: Arc<session::MemoryRepository>,
    pub upload_dir: TempDir,
    router: Router,
}

pub struct Seeded {
    pub id: String,
    pub token: String,
}

const BOUNDARY: &str = "X-SHOP-TEST-BOUNDARY";

impl TestApp {
    pub fn new() -> Self {
        let users = Arc::new(user::MemoryRepository::default());
        let products = Arc::new(product::MemoryRepository::default());
        let sessions = Arc::new(session::MemoryRepository::default());
        let upload_dir = TempDir::new().unwrap();

        let ctx = Context {
            app: AppContext {
                host: String::from("127.0.0.1"),
                environment: AppEnvironment::Development,
                port: 0,
                url: String::from("http://127.0.0.1"),
            },
            storage: StorageContext {
                upload_dir: upload_dir.path().to_path_buf(),
            },
            users: users.clone(),
            products: products.clone(),
            sessions: sessions.clone(),
        };

        let router = App::new(Arc::new(ctx)).router();

        Self {
            users,
            products,
            sessions,
            upload_dir,
            router,
        }
    }

    pub async fn seed_user(&self, email: &str, is_admin: bool) -> Seeded {
        let id = Ulid::new().to_string();
        self.users
            .insert(User {
                id: id.clone(),
                email: email.to_string(),
                phone: None,
                profile_picture: None,
                first_name: String::from("Ada"),
                last_name: String::from("Obi"),
                is_admin,
                cart: CartItems::default(),
                created_at: Utc::now().naive_utc(),
                updated_at: None,
            })
            .await;

        let token = self.seed_session(&id, Duration::hours(1)).await;
        Seeded { id, token }
    }

    /// A negative `ttl` yields an already expired session.
    pub async fn seed_session(&self, user_id: &str, ttl: Duration) -> String {
        let now = Utc::now().naive_utc();
        let token = Ulid::new().to_string();
        self.sessions
            .insert(Session {
                id: Ulid::new().to_string(),
                user_id: user_id.to_string(),
                access_token: token.clone(),
                refresh_token: Ulid::new().to_string(),
                access_token_expires_at: now + ttl,
                refresh_token_expires_at: now + ttl + Duration::days(7),
                created_at: now,
                updated_at: None,
            })
            .await;
        token
    }

    pub async fn seed_product(&self, name: &str, price: &str) -> String {
        let id = Ulid::new().to_string();
        self.products
            .insert(Product {
                id: id.clone(),
                name: name.to_string(),
                description: format!("A {}", name),
                price: BigDecimal::from_str(price).unwrap(),
                image: None,
                created_at: Utc::now().naive_utc(),
                updated_at: None,
            })
            .await;
        id
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn call(&self, method: Method, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.send(builder(method, uri, token).body(Body::empty()).unwrap())
            .await
    }

    pub async fn call_json(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Value,
    ) -> (StatusCode, Value) {
        self.send(
            builder(method, uri, token)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn call_multipart(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        parts: &[Part<'_>],
    ) -> (StatusCode, Value) {
        self.send(
            builder(method, uri, token)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(multipart_body(parts)))
                .unwrap(),
        )
        .await
    }
}

pub enum Part<'a> {
    Text(&'a str, &'a str),
    File(&'a str, &'a str, &'a [u8]),
}

fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match part {
            Part::Text(name, value) => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name)
                        .as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File(name, file_name, contents) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                        name, file_name
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(contents);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn builder(method: Method, uri: &str, token: Option<&str>) -> axum::http::request::Builder {
    let builder = Request::builder().method(method).uri(uri);
    match token {
        Some(token) => builder.header(header::AUTHORIZATION, format!("Bearer {}", token)),
        None => builder,
    }
}
