//! 인증 요청관련 DTO
//!
//! 로그인/회원가입 폼과 OAuth 콜백 쿼리를 매핑합니다.

use serde::Deserialize;
use validator::Validate;

/// `POST /login`, `POST /register` 폼 본문
///
/// 필드가 빠진 폼도 역직렬화되며, 빈 값은 검증 단계에서 걸러집니다.
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "사용자명을 입력해주세요"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// OAuth 프로바이더가 콜백 URL로 전달하는 쿼리 파라미터
///
/// 사용자가 동의를 거부하면 `code` 없이 `error`만 전달됩니다.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl OAuthCallbackQuery {
    /// 성공 콜백이면 `(code, state)`를 반환합니다.
    pub fn code_and_state(&self) -> Option<(&str, &str)> {
        if self.error.is_some() {
            return None;
        }

        match (self.code.as_deref(), self.state.as_deref()) {
            (Some(code), Some(state)) if !code.is_empty() && !state.is_empty() => Some((code, state)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_form_requires_both_fields() {
        let form = CredentialsForm {
            username: "alice".to_string(),
            password: "p1".to_string(),
        };
        assert!(form.validate().is_ok());

        let form = CredentialsForm {
            username: "".to_string(),
            password: "p1".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_callback_with_error_has_no_code() {
        let query = OAuthCallbackQuery {
            code: Some("abc".to_string()),
            state: Some("xyz".to_string()),
            error: Some("access_denied".to_string()),
            error_description: None,
        };
        assert!(query.code_and_state().is_none());

        let query = OAuthCallbackQuery {
            code: Some("abc".to_string()),
            state: Some("xyz".to_string()),
            error: None,
            error_description: None,
        };
        assert_eq!(query.code_and_state(), Some(("abc", "xyz")));
    }
}
