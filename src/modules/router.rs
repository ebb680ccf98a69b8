use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde_json::json;

use super::user;
use crate::types::Context;
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "message": "Welcome to the Shop API" })))
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/users", user::get_router())
}
