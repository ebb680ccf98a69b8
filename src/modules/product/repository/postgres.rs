use super::{Error, Product, ProductRepository, Result};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgRepository {
    async fn find_many_by_ids(&self, ids: Vec<String>) -> Result<Vec<Product>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        sqlx::query_as::<_, Product>("SELECT * FROM products WHERE id = ANY($1)")
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while fetching products {:?}: {}", ids, err);
                Error::UnexpectedError
            })
    }
}
