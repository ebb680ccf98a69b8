use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    ctx.users
        .remove_cart_item(&payload.auth.user_id, &payload.product_id)
        .await
        .map_err(|_| response::Error::FailedToRemoveProductFromCart)?
        .ok_or(response::Error::UserNotFound)
        .map(response::Success::ProductRemovedFromCart)
}
