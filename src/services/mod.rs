//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소 trait 객체를 생성자로 주입받으며,
//! 애플리케이션 시작 시 [`AppContext`](crate::core::AppContext)에 한 번 조립됩니다.
//!
//! # Features
//!
//! - 로컬 가입/로그인, 시크릿 제출 ([`users`])
//! - 세션 쿠키, Google/Twitter OAuth 2.0 ([`auth`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_store, PasswordConfig::bcrypt_cost());
//! ```

pub mod users;
pub mod auth;
