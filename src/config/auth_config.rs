//! # Authentication Configuration Module
//!
//! OAuth 프로바이더와 세션 쿠키 관련 설정을 관리하는 모듈입니다.
//!
//! ## 지원하는 인증 방식
//!
//! 1. **로컬 인증**: 사용자명/패스워드 기반 인증
//! 2. **Google OAuth 2.0**: Authorization Code 플로우
//! 3. **Twitter OAuth 2.0**: Authorization Code + PKCE 플로우
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export SESSION_SECRET="a-long-random-session-secret"
//!
//! export GOOGLE_CLIENT_ID="your-google-client-id"
//! export GOOGLE_CLIENT_SECRET="your-google-client-secret"
//! export GOOGLE_REDIRECT_URI="http://localhost:3000/auth/google/secrets"
//!
//! export TWITTER_CLIENT_ID="your-twitter-client-id"
//! export TWITTER_CLIENT_SECRET="your-twitter-client-secret"
//! export TWITTER_REDIRECT_URI="http://localhost:3000/auth/twitter/secrets"
//! ```

use std::env;

use crate::config::Environment;
use crate::errors::{AppError, AppResult};

const DEFAULT_SESSION_SECRET: &str = "secrets-web-session-secret";

/// OAuth 클라이언트 한 개를 구성하는 값 묶음
///
/// 프로바이더 서비스는 생성 시점에 이 값을 받아 보관하므로
/// 요청마다 환경 변수를 다시 읽지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct OAuthClientSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub auth_uri: String,
    pub token_uri: String,
    pub profile_uri: String,
    pub scope: String,
}

/// Google OAuth 2.0 설정
pub struct GoogleOAuthConfig;

impl GoogleOAuthConfig {
    pub fn client_id() -> String {
        required_or_empty("GOOGLE_CLIENT_ID")
    }

    pub fn client_secret() -> String {
        required_or_empty("GOOGLE_CLIENT_SECRET")
    }

    pub fn redirect_uri() -> String {
        env::var("GOOGLE_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/auth/google/secrets".to_string())
    }

    pub fn auth_uri() -> String {
        env::var("GOOGLE_AUTH_URI")
            .unwrap_or_else(|_| "https://accounts.google.com/o/oauth2/v2/auth".to_string())
    }

    pub fn token_uri() -> String {
        env::var("GOOGLE_TOKEN_URI")
            .unwrap_or_else(|_| "https://oauth2.googleapis.com/token".to_string())
    }

    /// OpenID userinfo v3 엔드포인트 (`sub` 필드가 사용자 ID)
    pub fn userinfo_uri() -> String {
        env::var("GOOGLE_USERINFO_URI")
            .unwrap_or_else(|_| "https://www.googleapis.com/oauth2/v3/userinfo".to_string())
    }

    pub fn settings() -> OAuthClientSettings {
        OAuthClientSettings {
            client_id: Self::client_id(),
            client_secret: Self::client_secret(),
            redirect_uri: Self::redirect_uri(),
            auth_uri: Self::auth_uri(),
            token_uri: Self::token_uri(),
            profile_uri: Self::userinfo_uri(),
            scope: "profile".to_string(),
        }
    }
}

/// Twitter OAuth 2.0 (PKCE) 설정
pub struct TwitterOAuthConfig;

impl TwitterOAuthConfig {
    pub fn client_id() -> String {
        required_or_empty("TWITTER_CLIENT_ID")
    }

    pub fn client_secret() -> String {
        required_or_empty("TWITTER_CLIENT_SECRET")
    }

    pub fn redirect_uri() -> String {
        env::var("TWITTER_REDIRECT_URI")
            .unwrap_or_else(|_| "http://localhost:3000/auth/twitter/secrets".to_string())
    }

    pub fn auth_uri() -> String {
        env::var("TWITTER_AUTH_URI")
            .unwrap_or_else(|_| "https://twitter.com/i/oauth2/authorize".to_string())
    }

    pub fn token_uri() -> String {
        env::var("TWITTER_TOKEN_URI")
            .unwrap_or_else(|_| "https://api.twitter.com/2/oauth2/token".to_string())
    }

    pub fn profile_uri() -> String {
        env::var("TWITTER_PROFILE_URI")
            .unwrap_or_else(|_| "https://api.twitter.com/2/users/me".to_string())
    }

    pub fn settings() -> OAuthClientSettings {
        OAuthClientSettings {
            client_id: Self::client_id(),
            client_secret: Self::client_secret(),
            redirect_uri: Self::redirect_uri(),
            auth_uri: Self::auth_uri(),
            token_uri: Self::token_uri(),
            profile_uri: Self::profile_uri(),
            scope: "users.read tweet.read".to_string(),
        }
    }
}

/// 세션 쿠키 및 저장소 설정
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// 쿠키 서명 키를 유도할 비밀 값
    pub secret: String,
    pub cookie_name: String,
    pub ttl_seconds: u64,
    /// HTTPS 환경에서만 `Secure` 속성을 붙입니다.
    pub secure_cookie: bool,
}

pub struct SessionConfig;

impl SessionConfig {
    /// 운영 환경에서 `SESSION_SECRET`이 없으면 에러로 기동을 중단합니다.
    pub fn secret() -> AppResult<String> {
        Self::secret_for_env(env::var("SESSION_SECRET").ok(), &Environment::current())
    }

    pub fn secret_for_env(value: Option<String>, environment: &Environment) -> AppResult<String> {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(secret) => Ok(secret),
            None if *environment == Environment::Production => Err(AppError::InternalError(
                "SESSION_SECRET must be set in production".to_string(),
            )),
            None => {
                log::warn!("SESSION_SECRET not set, using default (not secure for production!)");
                Ok(DEFAULT_SESSION_SECRET.to_string())
            }
        }
    }

    /// HTTPS로 서비스되는 스테이징/운영 환경에서 `Secure` 쿠키를 사용합니다.
    pub fn secure_cookie_for_env(environment: &Environment) -> bool {
        matches!(environment, Environment::Staging | Environment::Production)
    }

    pub fn cookie_name() -> String {
        env::var("SESSION_COOKIE_NAME").unwrap_or_else(|_| "secrets.sid".to_string())
    }

    pub fn ttl_seconds() -> u64 {
        env::var("SESSION_TTL_SECONDS")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .unwrap_or(86400)
    }

    pub fn settings() -> AppResult<SessionSettings> {
        let environment = Environment::current();

        Ok(SessionSettings {
            secret: Self::secret()?,
            cookie_name: Self::cookie_name(),
            ttl_seconds: Self::ttl_seconds(),
            secure_cookie: Self::secure_cookie_for_env(&environment),
        })
    }
}

/// 인증 프로바이더 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// 사용자명/패스워드
    Local,

    Google,

    Twitter,
}

impl AuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "local" => Ok(AuthProvider::Local),
            "google" => Ok(AuthProvider::Google),
            "twitter" => Ok(AuthProvider::Twitter),
            _ => Err(format!("Unsupported auth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::Local => "local",
            AuthProvider::Google => "google",
            AuthProvider::Twitter => "twitter",
        }
    }

    /// 프로바이더 ID가 저장되는 User 문서 필드명
    ///
    /// 로컬 인증은 외부 ID가 없으므로 `None`입니다.
    pub fn id_field(&self) -> Option<&'static str> {
        match self {
            AuthProvider::Local => None,
            AuthProvider::Google => Some("google_id"),
            AuthProvider::Twitter => Some("twitter_id"),
        }
    }
}

fn required_or_empty(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| {
        log::warn!("{} not set, OAuth login with this provider will fail", key);
        String::new()
    })
}
