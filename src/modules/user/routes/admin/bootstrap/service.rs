use super::types::{request, response};
use crate::{modules::user::repository::FirstAdminOutcome, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    // inert once any admin exists, whatever the request carries
    if ctx
        .users
        .any_admin_exists()
        .await
        .map_err(|_| response::Error::FailedToCreateFirstAdmin)?
    {
        return Err(response::Error::AdminsAlreadyExist);
    }

    let body = payload.body.map_err(response::Error::InvalidBody)?;
    body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    match ctx
        .users
        .promote_first_admin(&body.email)
        .await
        .map_err(|_| response::Error::FailedToCreateFirstAdmin)?
    {
        FirstAdminOutcome::Promoted(user) => {
            tracing::info!("User {} promoted to first admin", user.id);
            Ok(response::Success::FirstAdminCreated(user.into()))
        }
        FirstAdminOutcome::AdminsExist => Err(response::Error::AdminsAlreadyExist),
        FirstAdminOutcome::UserNotFound => Err(response::Error::UserNotFound),
    }
}
