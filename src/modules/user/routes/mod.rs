mod admin;
mod cart;
mod preview;
mod profile;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(profile::get_router())
        .merge(cart::get_router())
        .merge(admin::get_router())
        .merge(preview::get_router())
}
