//! # Google OAuth 사용자 정보 모델
//!
//! OpenID Connect userinfo v3 엔드포인트 응답입니다.
//! `profile` 스코프만 요청하므로 이메일 필드는 없습니다.

use serde::Deserialize;
use crate::config::AuthProvider;
use crate::domain::models::oauth::ProviderProfile;

#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google 계정 고유 ID
    pub sub: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub picture: Option<String>,
}

impl From<GoogleUserInfo> for ProviderProfile {
    fn from(info: GoogleUserInfo) -> Self {
        ProviderProfile {
            provider: AuthProvider::Google,
            id: info.sub,
            display_name: info.name,
        }
    }
}
