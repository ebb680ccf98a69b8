use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.users
        .find_by_id(&payload.auth.user_id)
        .await
        .map_err(|_| response::Error::FailedToCheckAdminStatus)
        .map(|user| {
            response::Success::AdminStatus(user.as_ref().is_some_and(repository::is_admin))
        })
}
