use super::{
    validate_id, AddCartItemOutcome, CartItem, CartItems, Error, FirstAdminOutcome, Result,
    UpdateProfilePayload, User, UserRepository,
};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{types::Json, FromRow, PgPool};

/// Key of the transaction scoped advisory lock serializing admin bootstraps.
const FIRST_ADMIN_LOCK: i64 = 0x6669_7273_7461_646d;

#[derive(FromRow)]
struct UserRow {
    id: String,
    email: String,
    phone: Option<String>,
    profile_picture: Option<String>,
    first_name: String,
    last_name: String,
    is_admin: bool,
    cart: Json<Vec<CartItem>>,
    created_at: NaiveDateTime,
    updated_at: Option<NaiveDateTime>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            phone: row.phone,
            profile_picture: row.profile_picture,
            first_name: row.first_name,
            last_name: row.last_name,
            is_admin: row.is_admin,
            cart: CartItems(row.cart.0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn cart_entry(product_id: &str) -> Json<Vec<CartItem>> {
    Json(vec![CartItem {
        product_id: product_id.to_string(),
    }])
}

#[async_trait]
impl UserRepository for PgRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        validate_id(id)?;

        sqlx::query_as::<_, UserRow>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(User::from))
            .map_err(|err| {
                tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn update_profile(
        &self,
        id: &str,
        payload: UpdateProfilePayload,
    ) -> Result<Option<User>> {
        validate_id(id)?;

        sqlx::query_as::<_, UserRow>(
            "
            UPDATE users SET
                phone = $1,
                profile_picture = COALESCE($2, profile_picture),
                updated_at = NOW()
            WHERE
                id = $3
            RETURNING *
            ",
        )
        .bind(payload.phone)
        .bind(payload.profile_picture)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(User::from))
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update a user by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn delete_by_id(&self, id: &str) -> Result<()> {
        validate_id(id)?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map(|_| ())
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to delete a user by id {}: {}",
                    id,
                    err
                );
                Error::UnexpectedError
            })
    }

    async fn add_cart_item(&self, id: &str, product_id: &str) -> Result<AddCartItemOutcome> {
        validate_id(id)?;
        validate_id(product_id)?;

        // A concurrent writer to the same row makes this statement re-check the
        // containment condition against the committed cart before appending.
        let added = sqlx::query_scalar::<_, Json<Vec<CartItem>>>(
            "
            UPDATE users SET
                cart = cart || $2::jsonb,
                updated_at = NOW()
            WHERE
                id = $1
                AND NOT cart @> $2::jsonb
            RETURNING cart
            ",
        )
        .bind(id)
        .bind(cart_entry(product_id))
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while adding product {} to the cart of user {}: {}",
                product_id,
                id,
                err
            );
            Error::UnexpectedError
        })?;

        if let Some(cart) = added {
            return Ok(AddCartItemOutcome::Added(CartItems(cart.0)));
        }

        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while checking user {} exists: {}", id, err);
                Error::UnexpectedError
            })?;

        Ok(match exists {
            true => AddCartItemOutcome::AlreadyInCart,
            false => AddCartItemOutcome::UserNotFound,
        })
    }

    async fn remove_cart_item(&self, id: &str, product_id: &str) -> Result<Option<CartItems>> {
        validate_id(id)?;

        sqlx::query_scalar::<_, Json<Vec<CartItem>>>(
            "
            UPDATE users SET
                cart = COALESCE(
                    (
                        SELECT jsonb_agg(item ORDER BY position)
                        FROM jsonb_array_elements(cart) WITH ORDINALITY AS items(item, position)
                        WHERE item->>'product_id' <> $2
                    ),
                    '[]'::jsonb
                ),
                updated_at = NOW()
            WHERE
                id = $1
            RETURNING cart
            ",
        )
        .bind(id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map(|cart| cart.map(|cart| CartItems(cart.0)))
        .map_err(|err| {
            tracing::error!(
                "Error occurred while removing product {} from the cart of user {}: {}",
                product_id,
                id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn promote_by_email(&self, email: &str) -> Result<Option<User>> {
        sqlx::query_as::<_, UserRow>(
            "UPDATE users SET is_admin = true, updated_at = NOW() WHERE email = $1 RETURNING *",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map(|row| row.map(User::from))
        .map_err(|err| {
            tracing::error!("Error occurred while promoting user {}: {}", email, err);
            Error::UnexpectedError
        })
    }

    async fn any_admin_exists(&self) -> Result<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE is_admin)")
            .fetch_one(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while looking for admins: {}", err);
                Error::UnexpectedError
            })
    }

    async fn promote_first_admin(&self, email: &str) -> Result<FirstAdminOutcome> {
        let mut tx = self.pool.begin().await.map_err(|err| {
            tracing::error!("Failed to start database transaction: {:?}", err);
            Error::UnexpectedError
        })?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(FIRST_ADMIN_LOCK)
            .execute(&mut *tx)
            .await
            .map_err(|err| {
                tracing::error!("Failed to acquire the first admin lock: {}", err);
                Error::UnexpectedError
            })?;

        let admins_exist =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE is_admin)")
                .fetch_one(&mut *tx)
                .await
                .map_err(|err| {
                    tracing::error!("Error occurred while looking for admins: {}", err);
                    Error::UnexpectedError
                })?;

        if admins_exist {
            return Ok(FirstAdminOutcome::AdminsExist);
        }

        let promoted = sqlx::query_as::<_, UserRow>(
            "UPDATE users SET is_admin = true, updated_at = NOW() WHERE email = $1 RETURNING *",
        )
        .bind(email)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while promoting first admin {}: {}", email, err);
            Error::UnexpectedError
        })?;

        tx.commit().await.map_err(|err| {
            tracing::error!("Failed to commit database transaction: {:?}", err);
            Error::UnexpectedError
        })?;

        Ok(match promoted {
            Some(row) => FirstAdminOutcome::Promoted(row.into()),
            None => FirstAdminOutcome::UserNotFound,
        })
    }
}
