//! 요청/응답 DTO 모듈

pub mod users;

pub use users::*;
