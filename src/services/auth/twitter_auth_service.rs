//! # Twitter OAuth 2.0 (PKCE) 인증 서비스
//!
//! Twitter API v2의 Authorization Code + PKCE 플로우입니다.
//! 토큰 교환은 기밀 클라이언트로서 HTTP Basic 인증을 사용하고,
//! 프로필은 `/2/users/me`의 `data.id`로 식별합니다.

use async_trait::async_trait;
use crate::{
    config::{AuthProvider, OAuthClientSettings},
    domain::{
        dto::users::response::{OAuthTokenResponse, TwitterUserEnvelope},
        models::oauth::ProviderProfile,
    },
    errors::{AppError, AppResult},
    services::auth::oauth_provider::{build_url, OAuthProvider},
};

pub struct TwitterAuthService {
    settings: OAuthClientSettings,
    http: reqwest::Client,
}

impl TwitterAuthService {
    pub fn new(settings: OAuthClientSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
        }
    }

    async fn exchange_code_for_token(&self, auth_code: &str, verifier: &str) -> AppResult<OAuthTokenResponse> {
        let params = [
            ("code", auth_code),
            ("grant_type", "authorization_code"),
            ("client_id", self.settings.client_id.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("code_verifier", verifier),
        ];

        let response = self.http
            .post(&self.settings.token_uri)
            .basic_auth(&self.settings.client_id, Some(&self.settings.client_secret))
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Twitter 토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Twitter 토큰 교환 실패: {}", error_text
            )));
        }

        response
            .json::<OAuthTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Twitter 토큰 응답 파싱 실패: {}", e)))
    }

    async fn get_user_info(&self, access_token: &str) -> AppResult<TwitterUserEnvelope> {
        let response = self.http
            .get(&self.settings.profile_uri)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Twitter 사용자 정보 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "Twitter 사용자 정보 조회 실패: {}", error_text
            )));
        }

        response
            .json::<TwitterUserEnvelope>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("Twitter 사용자 정보 파싱 실패: {}", e)))
    }
}

#[async_trait]
impl OAuthProvider for TwitterAuthService {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Twitter
    }

    fn uses_pkce(&self) -> bool {
        true
    }

    fn authorization_url(&self, state: &str, pkce_challenge: Option<&str>) -> String {
        let mut params = vec![
            ("response_type", "code"),
            ("client_id", self.settings.client_id.as_str()),
            ("redirect_uri", self.settings.redirect_uri.as_str()),
            ("scope", self.settings.scope.as_str()),
            ("state", state),
        ];

        if let Some(challenge) = pkce_challenge {
            params.push(("code_challenge", challenge));
            params.push(("code_challenge_method", "S256"));
        }

        build_url(&self.settings.auth_uri, &params)
    }

    async fn fetch_profile(&self, code: &str, pkce_verifier: Option<&str>) -> AppResult<ProviderProfile> {
        let verifier = pkce_verifier.ok_or_else(|| {
            AppError::ExternalServiceError("Twitter 로그인에 PKCE verifier가 없습니다".to_string())
        })?;

        let token = self.exchange_code_for_token(code, verifier).await?;
        let envelope = self.get_user_info(&token.access_token).await?;

        Ok(ProviderProfile::from(envelope.data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> OAuthClientSettings {
        OAuthClientSettings {
            client_id: "twitter-client".to_string(),
            client_secret: "shh".to_string(),
            redirect_uri: "http://localhost:3000/auth/twitter/secrets".to_string(),
            auth_uri: "https://twitter.com/i/oauth2/authorize".to_string(),
            token_uri: "https://api.twitter.com/2/oauth2/token".to_string(),
            profile_uri: "https://api.twitter.com/2/users/me".to_string(),
            scope: "users.read tweet.read".to_string(),
        }
    }

    #[test]
    fn test_authorization_url_includes_pkce_challenge() {
        let service = TwitterAuthService::new(settings());
        let url = service.authorization_url("st", Some("challenge-abc"));

        assert!(service.uses_pkce());
        assert!(url.starts_with("https://twitter.com/i/oauth2/authorize?"));
        assert!(url.contains("code_challenge=challenge-abc"));
        assert!(url.contains("code_challenge_method=S256"));
        assert!(url.contains("scope=users.read%20tweet.read"));
    }

    #[actix_web::test]
    async fn test_fetch_profile_requires_verifier() {
        let service = TwitterAuthService::new(settings());

        let result = service.fetch_profile("code", None).await;
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }
}
