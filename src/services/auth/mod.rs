//! 인증 서비스 모듈
//!
//! 세션 쿠키 관리와 OAuth 2.0 페더레이션 로그인을 담당합니다.
//!
//! # Security
//!
//! - HMAC 서명된 세션 쿠키 (`SESSION_SECRET`)
//! - CSRF 방지 (OAuth state 매개변수, 1회용)
//! - PKCE S256 (Twitter)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::OAuthProvider;
//!
//! let provider = ctx.oauth_provider(AuthProvider::Google)?;
//! let url = provider.authorization_url(&state, None);
//! ```

pub mod session_service;
pub mod oauth_provider;
pub mod pkce;
pub mod google_auth_service;
pub mod twitter_auth_service;

pub use session_service::SessionService;
pub use oauth_provider::OAuthProvider;
pub use google_auth_service::GoogleAuthService;
pub use twitter_auth_service::TwitterAuthService;
