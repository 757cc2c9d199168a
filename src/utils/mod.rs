//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - HTML 이스케이프, 공백 검사
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::escape_html;
//!
//! let safe = escape_html(&secret);
//! ```

pub mod string_utils;
