//! # 페더레이션 인증 프로바이더 인터페이스
//!
//! 핸들러는 프로바이더 구현을 모른 채 이 trait만으로 OAuth 시작과 콜백을 처리합니다.
//!
//! ```text
//! GET /auth/{p}          ──► authorization_url(state, challenge) ──► 302 동의 화면
//! GET /auth/{p}/secrets  ──► fetch_profile(code, verifier)       ──► ProviderProfile
//! ```

use async_trait::async_trait;
use crate::config::AuthProvider;
use crate::domain::models::oauth::ProviderProfile;
use crate::errors::AppResult;

#[async_trait]
pub trait OAuthProvider: Send + Sync {
    fn provider(&self) -> AuthProvider;

    /// PKCE를 사용하는 프로바이더면 `true`
    fn uses_pkce(&self) -> bool {
        false
    }

    /// 사용자를 보낼 동의 화면 URL
    fn authorization_url(&self, state: &str, pkce_challenge: Option<&str>) -> String;

    /// Authorization Code를 액세스 토큰으로 교환하고 프로필을 조회합니다.
    ///
    /// 네트워크, 토큰 교환, 응답 파싱 실패는 모두 `ExternalServiceError`
    async fn fetch_profile(&self, code: &str, pkce_verifier: Option<&str>) -> AppResult<ProviderProfile>;
}

/// `base?k=v&...` 형태로 쿼리 문자열을 붙입니다. 값은 URL 인코딩됩니다.
pub fn build_url(base: &str, params: &[(&str, &str)]) -> String {
    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base, query_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_encodes_values() {
        let url = build_url(
            "https://example.com/auth",
            &[("scope", "users.read tweet.read"), ("redirect_uri", "http://localhost:3000/cb")],
        );

        assert_eq!(
            url,
            "https://example.com/auth?scope=users.read%20tweet.read&redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcb"
        );
    }
}
