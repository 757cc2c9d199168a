//! 서버 측 세션 저장소
//!
//! 쿠키에는 서명된 세션 ID만 담기고, [`SessionData`](crate::domain::SessionData)는
//! 여기 정의된 저장소에 TTL과 함께 보관됩니다.
//!
//! - [`MemorySessionStore`](memory_store::MemorySessionStore) - 기본값, 단일 프로세스
//! - [`RedisSessionStore`](redis_store::RedisSessionStore) - `SESSION_STORE=redis`

pub mod session_store;
pub mod memory_store;
pub mod redis_store;

pub use session_store::SessionStore;
pub use memory_store::MemorySessionStore;
pub use redis_store::RedisSessionStore;
