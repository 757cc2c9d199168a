//! 서버 측 세션 데이터
//!
//! 쿠키에는 서명된 세션 ID만 담기고, 아래 데이터는 세션 저장소에 보관됩니다.

use std::future::{ready, Ready};
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::errors::AppError;

/// 세션 저장소에 직렬화되는 값
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    /// 로그인한 사용자의 ID (ObjectId hex)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// 진행 중인 OAuth 핸드셰이크
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_oauth: Option<PendingOAuth>,
}

impl SessionData {
    pub fn for_user(user_id: String) -> Self {
        Self {
            user_id: Some(user_id),
            pending_oauth: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.user_id.is_none() && self.pending_oauth.is_none()
    }
}

/// 동의 화면으로 보내기 전에 저장해 두는 OAuth 상태
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PendingOAuth {
    pub provider: AuthProvider,
    /// CSRF 방지용 state 값
    pub state: String,
    /// PKCE code_verifier (PKCE를 사용하는 프로바이더만)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pkce_verifier: Option<String>,
}

impl PendingOAuth {
    /// 콜백으로 돌아온 프로바이더와 state가 일치하는지 확인
    pub fn matches(&self, provider: AuthProvider, state: &str) -> bool {
        self.provider == provider && self.state == state
    }
}

/// 미들웨어가 해석한 현재 요청의 세션
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: String,
    pub data: SessionData,
}

/// 현재 세션이 없으면 `None`을 담는 추출기
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<SessionContext>);

impl CurrentSession {
    pub fn session_id(&self) -> Option<&str> {
        self.0.as_ref().map(|ctx| ctx.session_id.as_str())
    }
}

impl FromRequest for CurrentSession {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(CurrentSession(req.extensions().get::<SessionContext>().cloned())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_oauth_matches_provider_and_state() {
        let pending = PendingOAuth {
            provider: AuthProvider::Google,
            state: "abc".to_string(),
            pkce_verifier: None,
        };

        assert!(pending.matches(AuthProvider::Google, "abc"));
        assert!(!pending.matches(AuthProvider::Twitter, "abc"));
        assert!(!pending.matches(AuthProvider::Google, "abd"));
    }

    #[test]
    fn test_session_data_json_roundtrip_omits_empty_fields() {
        let data = SessionData::for_user("65f0c0ffee0000000000beef".to_string());
        let json = serde_json::to_string(&data).unwrap();

        assert_eq!(json, r#"{"user_id":"65f0c0ffee0000000000beef"}"#);
        assert!(SessionData::default().is_empty());
    }
}
