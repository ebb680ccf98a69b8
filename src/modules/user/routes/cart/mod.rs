mod add;
mod get;
mod remove;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest(
        "/cart",
        Router::new()
            .merge(get::get_router())
            .merge(add::get_router())
            .merge(remove::get_router()),
    )
}
