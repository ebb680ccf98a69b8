use super::{Result, Session, SessionRepository};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

#[derive(Default)]
pub struct MemoryRepository {
    sessions: Mutex<HashMap<String, Session>>,
}

impl MemoryRepository {
    pub async fn insert(&self, session: Session) {
        self.sessions
            .lock()
            .await
            .insert(session.access_token.clone(), session);
    }
}

#[async_trait]
impl SessionRepository for MemoryRepository {
    async fn find_by_access_token(&self, access_token: &str) -> Result<Option<Session>> {
        Ok(self.sessions.lock().await.get(access_token).cloned())
    }
}
