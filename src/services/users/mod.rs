//! 사용자 관리 서비스 모듈
//!
//! 로컬 가입/로그인, 페더레이션 사용자 find-or-create, 시크릿 제출을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (cost는 [`PasswordConfig`](crate::config::PasswordConfig))
//! - 로그인 실패 사유를 외부에 노출하지 않음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user = ctx.user_service.authenticate(&form).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
