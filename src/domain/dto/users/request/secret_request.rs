//! 시크릿 제출 DTO

use serde::Deserialize;
use validator::Validate;

/// `POST /submit` 폼 본문
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitSecretForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "시크릿을 입력해주세요"))]
    pub secret: String,
}
