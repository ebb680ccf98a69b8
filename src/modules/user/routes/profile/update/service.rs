use super::types::{request, response};
use crate::{modules::user::repository::UpdateProfilePayload, types::Context, utils::storage};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let profile_picture = match payload.body.profile_picture {
        Some(file) => Some(
            storage::upload_file(&ctx.storage, file)
                .await
                .map_err(|err| {
                    tracing::error!("Failed to store the uploaded profile picture: {}", err);
                    response::Error::FailedToUploadProfilePicture
                })?,
        ),
        None => None,
    };

    let updated = ctx
        .users
        .update_profile(
            &payload.auth.user_id,
            UpdateProfilePayload {
                phone: payload.body.phone,
                profile_picture: profile_picture.clone(),
            },
        )
        .await;

    // the stored picture is only kept when a record now points at it
    if let (Some(path), Ok(None) | Err(_)) = (&profile_picture, &updated) {
        storage::discard_file(path).await;
    }

    updated
        .map_err(|_| response::Error::FailedToUpdateUser)
        .map(response::Success::UserUpdated)
}
