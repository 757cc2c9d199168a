//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 저장소는 trait으로 추상화되어 있고, 애플리케이션 시작 시 설정에 따라
//! 구현체를 골라 [`AppContext`](crate::core::AppContext)에 조립합니다.
//!
//! - [`users`] - 사용자(Credential Store): MongoDB, 인메모리
//! - [`sessions`] - 서버 측 세션 테이블: 인메모리, Redis
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{InMemoryUserRepository, UserStore};
//!
//! let users: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
//! let candidates = users.find_by_username("alice").await?;
//! ```

pub mod users;
pub mod sessions;
