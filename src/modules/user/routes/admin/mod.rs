mod bootstrap;
mod check;
mod promote;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest(
        "/admin",
        Router::new()
            .merge(check::get_router())
            .merge(promote::get_router())
            .merge(bootstrap::get_router()),
    )
}
