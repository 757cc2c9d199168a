//! 사용자 관련 DTO
//!
//! - [`request`] - 로그인, 회원가입, 시크릿 제출 폼과 OAuth 콜백 쿼리
//! - [`response`] - OAuth 프로바이더의 토큰/프로필 응답

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
