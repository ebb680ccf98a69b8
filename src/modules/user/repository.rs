mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use ulid::Ulid;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed id: {0}")]
    InvalidId(String),
    #[error("unexpected store error")]
    UnexpectedError,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CartItem {
    pub product_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CartItems(pub Vec<CartItem>);

impl CartItems {
    pub fn contains(&self, product_id: &str) -> bool {
        self.0.iter().any(|item| item.product_id == product_id)
    }
}

impl Deref for CartItems {
    type Target = Vec<CartItem>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CartItems {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct User {
    pub id: String,
    pub email: String,
    pub phone: Option<String>,
    pub profile_picture: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
    pub cart: CartItems,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// The fields of a user that are safe to hand back from admin endpoints.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub is_admin: bool,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            is_admin: user.is_admin,
        }
    }
}

pub struct UpdateProfilePayload {
    /// Always written, `None` clears the stored phone number.
    pub phone: Option<String>,
    /// Only written when a new picture was uploaded.
    pub profile_picture: Option<String>,
}

#[derive(Debug)]
pub enum AddCartItemOutcome {
    Added(CartItems),
    AlreadyInCart,
    UserNotFound,
}

#[derive(Debug)]
pub enum FirstAdminOutcome {
    Promoted(User),
    AdminsExist,
    UserNotFound,
}

pub fn validate_id(id: &str) -> Result<()> {
    Ulid::from_string(id).map(|_| ()).map_err(|err| {
        tracing::error!("Rejected malformed id {:?}: {}", id, err);
        Error::InvalidId(id.to_string())
    })
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Returns the record as it is after the update, `None` if no user has this id.
    async fn update_profile(&self, id: &str, payload: UpdateProfilePayload)
        -> Result<Option<User>>;

    /// Succeeds whether or not the record existed.
    async fn delete_by_id(&self, id: &str) -> Result<()>;

    /// Appends the product to the cart unless it is already there, as one
    /// atomic step.
    async fn add_cart_item(&self, id: &str, product_id: &str) -> Result<AddCartItemOutcome>;

    /// Removes every cart entry for the product. `None` if no user has this id.
    /// Product ids are matched as plain strings, an unknown one removes nothing.
    async fn remove_cart_item(&self, id: &str, product_id: &str) -> Result<Option<CartItems>>;

    async fn promote_by_email(&self, email: &str) -> Result<Option<User>>;

    async fn any_admin_exists(&self) -> Result<bool>;

    /// Promotes the user only while no admin exists; the check and the write
    /// cannot interleave with another bootstrap.
    async fn promote_first_admin(&self, email: &str) -> Result<FirstAdminOutcome>;
}

pub fn is_admin(user: &User) -> bool {
    user.is_admin
}
