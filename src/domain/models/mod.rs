//! 런타임 도메인 모델

pub mod auth;
pub mod oauth;
