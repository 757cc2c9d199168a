//! Users Entity Module
//!
//! 로컬/페더레이션 인증을 모두 지원하는 `User` 엔티티를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::config::AuthProvider;
//! use crate::domain::entities::users::user::User;
//!
//! // 로컬 사용자 생성
//! let user = User::new_local("alice".to_string(), hashed_password);
//!
//! // 첫 Google 로그인 사용자 생성 (사용자명 = Google ID)
//! let federated = User::new_federated(AuthProvider::Google, "10769150350006150715113082367".to_string());
//! ```

pub mod user;

pub use user::User;
