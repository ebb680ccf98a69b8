use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let caller = ctx
        .users
        .find_by_id(&payload.auth.user_id)
        .await
        .map_err(|_| response::Error::FailedToPromoteUser)?;

    // non-admins are refused before the body is even looked at
    if !caller.as_ref().is_some_and(repository::is_admin) {
        return Err(response::Error::NotAnAdmin);
    }

    let body = payload.body.map_err(response::Error::InvalidBody)?;
    body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let user = ctx
        .users
        .promote_by_email(&body.email)
        .await
        .map_err(|_| response::Error::FailedToPromoteUser)?
        .ok_or(response::Error::UserNotFound)?;

    tracing::info!("User {} promoted {} to admin", payload.auth.user_id, user.id);

    Ok(response::Success::UserPromoted(user.into()))
}
