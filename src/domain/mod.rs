//! # Domain Layer
//!
//! 서비스의 도메인 모델을 정의합니다.
//!
//! - [`entities`] - 영속화되는 엔티티 (`User`)
//! - [`dto`] - HTML 폼 요청과 외부 API 응답 매핑
//! - [`models`] - 세션, 인증 사용자, OAuth 프로필 등 런타임 모델

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::users::User;
pub use dto::users::request::{CredentialsForm, OAuthCallbackQuery, SubmitSecretForm};
pub use models::auth::{
    AuthenticatedUser, CurrentSession, OptionalUser, PendingOAuth, SessionContext, SessionData,
};
pub use models::oauth::ProviderProfile;
