//! 외부 API 응답 DTO 모듈

pub mod oauth_response;

pub use oauth_response::{OAuthTokenResponse, TwitterUserEnvelope};
