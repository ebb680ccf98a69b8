use super::types::{request, response};
use crate::types::Context;
use itertools::Itertools;
use std::{collections::HashMap, sync::Arc};

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = ctx
        .users
        .find_by_id(&payload.auth.user_id)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?
        .ok_or(response::Error::UserNotFound)?;

    let product_ids = user
        .cart
        .iter()
        .map(|item| item.product_id.clone())
        .unique()
        .collect::<Vec<_>>();

    let products = ctx
        .products
        .find_many_by_ids(product_ids)
        .await
        .map_err(|_| response::Error::FailedToFetchCart)?
        .into_iter()
        .map(|product| (product.id.clone(), product))
        .collect::<HashMap<_, _>>();

    let items = user
        .cart
        .0
        .into_iter()
        .map(|item| response::PopulatedCartItem {
            product: products.get(&item.product_id).cloned(),
            product_id: item.product_id,
        })
        .collect::<Vec<_>>();

    Ok(response::Success::Cart(items))
}
