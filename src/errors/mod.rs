//! 에러 모듈
//!
//! [`errors::AppError`]와 결과 타입 별칭을 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, ErrorContext};
