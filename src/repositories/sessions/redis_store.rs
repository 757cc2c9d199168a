//! Redis 세션 저장소
//!
//! 키 형식은 `session:{session_id}`이며 TTL은 Redis `SETEX`로 관리합니다.

use std::sync::Arc;
use async_trait::async_trait;
use crate::{
    caching::redis::RedisClient,
    domain::models::auth::SessionData,
    errors::AppResult,
    repositories::sessions::SessionStore,
};

const KEY_PREFIX: &str = "session:";

pub struct RedisSessionStore {
    redis: Arc<RedisClient>,
}

impl RedisSessionStore {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }

    fn key(session_id: &str) -> String {
        format!("{}{}", KEY_PREFIX, session_id)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, session_id: &str) -> AppResult<Option<SessionData>> {
        Ok(self.redis.get::<SessionData>(&Self::key(session_id)).await?)
    }

    async fn save(&self, session_id: &str, data: &SessionData, ttl_seconds: u64) -> AppResult<()> {
        // SETEX는 0초를 허용하지 않습니다.
        let ttl = ttl_seconds.max(1);
        self.redis.set_with_expiry(&Self::key(session_id), data, ttl).await?;
        Ok(())
    }

    async fn destroy(&self, session_id: &str) -> AppResult<()> {
        self.redis.del(&Self::key(session_id)).await?;
        Ok(())
    }
}
