use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::{rejection::JsonRejection, Json, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    body: Result<Json<request::Body>, JsonRejection>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            body: body.map(|Json(body)| body),
        },
    )
    .await
}
