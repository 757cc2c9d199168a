//! OAuth 응답 DTO 모듈
//!
//! Authorization Code 교환 결과와 프로바이더별 프로필 응답 래퍼를 정의합니다.

use serde::Deserialize;
use crate::domain::models::oauth::twitter_user::TwitterUserInfo;

/// 토큰 엔드포인트 응답 (Google, Twitter 공통 필드)
#[derive(Debug, Deserialize)]
pub struct OAuthTokenResponse {
    pub access_token: String,
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Twitter `/2/users/me` 응답은 `data` 필드로 감싸져 있습니다.
#[derive(Debug, Deserialize)]
pub struct TwitterUserEnvelope {
    pub data: TwitterUserInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_without_optional_fields() {
        let json = r#"{"access_token":"at","token_type":"bearer"}"#;
        let token: OAuthTokenResponse = serde_json::from_str(json).unwrap();

        assert_eq!(token.access_token, "at");
        assert!(token.refresh_token.is_none());
    }

    #[test]
    fn test_twitter_envelope() {
        let json = r#"{"data":{"id":"2244994945","name":"X Dev","username":"XDevelopers"}}"#;
        let envelope: TwitterUserEnvelope = serde_json::from_str(json).unwrap();

        assert_eq!(envelope.data.id, "2244994945");
        assert_eq!(envelope.data.username.as_deref(), Some("XDevelopers"));
    }
}
