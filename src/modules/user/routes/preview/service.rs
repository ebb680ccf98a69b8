use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.users
        .find_by_id(&payload.id)
        .await
        .map_err(|_| response::Error::FailedToPreviewUser)
        .map(response::Success::User)
}
