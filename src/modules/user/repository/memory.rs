use super::{
    validate_id, AddCartItemOutcome, CartItem, CartItems, FirstAdminOutcome, Result,
    UpdateProfilePayload, User, UserRepository,
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// Keeps users in process memory. Every operation runs under a single lock,
/// which is what makes the cart and bootstrap operations atomic here.
#[derive(Default)]
pub struct MemoryRepository {
    users: Mutex<HashMap<String, User>>,
}

impl MemoryRepository {
    pub async fn insert(&self, user: User) {
        self.users.lock().await.insert(user.id.clone(), user);
    }
}

#[async_trait]
impl UserRepository for MemoryRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        validate_id(id)?;
        Ok(self.users.lock().await.get(id).cloned())
    }

    async fn update_profile(
        &self,
        id: &str,
        payload: UpdateProfilePayload,
    ) -> Result<Option<User>> {
        validate_id(id)?;
        let mut users = self.users.lock().await;

        Ok(users.get_mut(id).map(|user| {
            user.phone = payload.phone;
            if let Some(profile_picture) = payload.profile_picture {
                user.profile_picture = Some(profile_picture);
            }
            user.updated_at = Some(Utc::now().naive_utc());
            user.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        validate_id(id)?;
        self.users.lock().await.remove(id);
        Ok(())
    }

    async fn add_cart_item(&self, id: &str, product_id: &str) -> Result<AddCartItemOutcome> {
        validate_id(id)?;
        validate_id(product_id)?;
        let mut users = self.users.lock().await;

        let Some(user) = users.get_mut(id) else {
            return Ok(AddCartItemOutcome::UserNotFound);
        };

        if user.cart.contains(product_id) {
            return Ok(AddCartItemOutcome::AlreadyInCart);
        }

        user.cart.push(CartItem {
            product_id: product_id.to_string(),
        });
        user.updated_at = Some(Utc::now().naive_utc());

        Ok(AddCartItemOutcome::Added(user.cart.clone()))
    }

    async fn remove_cart_item(&self, id: &str, product_id: &str) -> Result<Option<CartItems>> {
        validate_id(id)?;
        let mut users = self.users.lock().await;

        Ok(users.get_mut(id).map(|user| {
            user.cart.retain(|item| item.product_id != product_id);
            user.updated_at = Some(Utc::now().naive_utc());
            user.cart.clone()
        }))
    }

    async fn promote_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut users = self.users.lock().await;

        Ok(users
            .values_mut()
            .find(|user| user.email == email)
            .map(|user| {
                user.is_admin = true;
                user.updated_at = Some(Utc::now().naive_utc());
                user.clone()
            }))
    }

    async fn any_admin_exists(&self) -> Result<bool> {
        Ok(self.users.lock().await.values().any(|user| user.is_admin))
    }

    async fn promote_first_admin(&self, email: &str) -> Result<FirstAdminOutcome> {
        let mut users = self.users.lock().await;

        if users.values().any(|user| user.is_admin) {
            return Ok(FirstAdminOutcome::AdminsExist);
        }

        Ok(match users.values_mut().find(|user| user.email == email) {
            Some(user) => {
                user.is_admin = true;
                user.updated_at = Some(Utc::now().naive_utc());
                FirstAdminOutcome::Promoted(user.clone())
            }
            None => FirstAdminOutcome::UserNotFound,
        })
    }
}
