use super::{Error, Result, Session, SessionRepository};
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
impl SessionRepository for PgRepository {
    async fn find_by_access_token(&self, access_token: &str) -> Result<Option<Session>> {
        sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE access_token = $1")
            .bind(access_token)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while fetching session by access token: {}", err);
                Error::UnexpectedError
            })
    }
}
