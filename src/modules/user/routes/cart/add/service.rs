use super::types::{request, response};
use crate::{modules::user::repository::AddCartItemOutcome, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    match ctx
        .users
        .add_cart_item(&payload.auth.user_id, &payload.product_id)
        .await
        .map_err(|_| response::Error::FailedToAddProductToCart)?
    {
        AddCartItemOutcome::Added(cart) => Ok(response::Success::ProductAddedToCart(cart)),
        AddCartItemOutcome::AlreadyInCart => Err(response::Error::ProductAlreadyInCart),
        AddCartItemOutcome::UserNotFound => Err(response::Error::UserNotFound),
    }
}
