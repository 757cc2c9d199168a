//! Redis 연동 모듈
//!
//! `SESSION_STORE=redis`일 때 세션 저장소가 사용하는 Redis 클라이언트를 제공합니다.
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
