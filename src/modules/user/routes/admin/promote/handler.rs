use super::{service::service, types::request};
use crate::{modules::auth::middleware::Auth, types::Context};
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    auth: Auth,
    body: Result<Json<request::Body>, JsonRejection>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            auth,
            body: body.map(|Json(body)| body),
        },
    )
    .await
}
