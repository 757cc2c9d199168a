//! 요청 DTO 모듈

pub mod auth_request;
pub mod secret_request;

pub use auth_request::{CredentialsForm, OAuthCallbackQuery};
pub use secret_request::SubmitSecretForm;
