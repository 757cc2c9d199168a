//! HTML 페이지 렌더링
//!
//! 템플릿 엔진 없이 최소한의 HTML 문자열을 만듭니다.
//! 사용자 입력은 모두 [`escape_html`](crate::utils::string_utils::escape_html)을 거칩니다.

pub mod pages;

pub use pages::*;
