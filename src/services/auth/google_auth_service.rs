//! # Google OAuth 2.0 인증 서비스
//!
//! Authorization Code 플로우로 Google 계정을 확인합니다.
//!
//! | 용도 | 엔드포인트 | 메서드 |
//! |------|------------|--------|
//! | **Authorization** | `https://accounts.google.com/o/oauth2/v2/auth` | GET |
//! | **Token Exchange** | `https://oauth2.googleapis.com/token` | POST |
//! | **User Info** | `https://www.googleapis.com/oauth2/v3/userinfo` | GET |
//!
//! `profile` 스코프만 요청하며, 사용자 식별에는 userinfo의 `sub`를 사용합니다.

use async_trait::async_trait;
use crate::{
    config::{AuthProvider, OAuthClientSettings},
    domain::{
        dto::users::response::OAuthTokenResponse,
        models::oauth::{google_user::GoogleUserInfo, ProviderProfile},
    },
    errors::{AppError, AppResult},
    services::auth::oauth_provider::{build_url, OAuthProvider},
};

pub struct GoogleAuthService {
    settings: OAuthClientSettings,
    http: reqwest::Client,
}

impl GoogleAuthService {
    pub fn new(settings: OAuthClientSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
        }
    }

    async fn exchange_code_for_token(&self, auth_code: &str) -> AppResult<OAuthTokenResponse> {
        let params = [
            ("code", auth_code),
            ("client_id", self.settings.client_id.as_str()),
            ("client_secret", self.settings.client_secret.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(&self.settings.token_uri)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<OAuthTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 토큰 응답 파싱 실패: {}", e)))
    }

    async fn get_user_info(&self, access_token: &str) -> AppResult<GoogleUserInfo> {
        let response = self.http
            .get(&self.settings.profile_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Google 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Google 사용자 정보 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl OAuthProvider for GoogleAuthService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    fn authorization_url(&self, state: &str, _pkce_challenge: Option<&str>) -> String {
        build_url(
            &self.settings.auth_uri,
            &[
                ("client_id", self.settings.client_id.as_str()),
                ("redirect_uri", self.settings.redirect_uri.as_str()),
                ("response_type", "code"),
                ("scope", self.settings.scope.as_str()),
                ("state", state),
            ],
        )
    }

    async fn fetch_profile(&self, code: &str, _pkce_verifier: Option<&str>) -> AppResult<ProviderProfile> {
        let token = self.exchange_code_for_token(code).await?;
        let user_info = self.get_user_info(&token.access_token).await?;

        Ok(ProviderProfile::from(user_info))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> OAuthClientSettings {
        OAuthClientSettings {
            client_id: "google-client".to_string(),
            client_secret: "shh".to_string(),
            redirect_uri: "http://localhost:3000/auth/google/secrets".to_string(),
            auth_uri: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_uri: "https://oauth2.googleapis.com/token".to_string(),
            profile_uri: "https://www.googleapis.com/oauth2/v3/userinfo".to_string(),
            scope: "profile".to_string(),
        }
    }

    #[test]
    fn test_authorization_url_contains_state_and_scope() {
        let service = GoogleAuthService::new(settings());
        let url = service.authorization_url("state-123", None);

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=google-client"));
        assert!(url.contains("scope=profile"));
        assert!(url.contains("state=state-123"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fgoogle%2Fsecrets"));
        assert!(!url.contains("code_challenge"));
        assert!(!service.uses_pkce());
    }
}
