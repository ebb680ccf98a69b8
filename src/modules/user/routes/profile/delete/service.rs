use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.users
        .delete_by_id(&payload.auth.user_id)
        .await
        .map_err(|_| response::Error::FailedToDeleteAccount)
        .map(|_| response::Success::AccountDeleted)
}
