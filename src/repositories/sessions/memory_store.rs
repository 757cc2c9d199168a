//! 인메모리 세션 저장소

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use async_trait::async_trait;
use crate::{
    domain::models::auth::SessionData,
    errors::{AppResult, ErrorContext},
    repositories::sessions::SessionStore,
};

struct Entry {
    data: SessionData,
    expires_at: Instant,
}

/// 프로세스 메모리 세션 테이블
///
/// 만료된 세션은 조회 시점과 저장 시점에 정리됩니다.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Entry>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 만료되지 않은 세션 수
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.sessions
            .read()
            .map(|sessions| sessions.values().filter(|e| e.expires_at > now).count())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionData>> {
        let sessions = self.sessions.read().context("세션 저장소 잠금 실패")?;

        Ok(sessions
            .get(session_id)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.data.clone()))
    }

    async fn save(&self, session_id: &str, data: &SessionData, ttl_seconds: u64) -> AppResult<()> {
        let mut sessions = self.sessions.write().context("세션 저장소 잠금 실패")?;

        let now = Instant::now();
        sessions.retain(|_, entry| entry.expires_at > now);
        sessions.insert(
            session_id.to_string(),
            Entry {
                data: data.clone(),
                expires_at: now + Duration::from_secs(ttl_seconds),
            },
        );

        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        let mut sessions = self.sessions.write().context("세션 저장소 잠금 실패")?;
        sessions.remove(session_id);
        Ok(())
    }
}
