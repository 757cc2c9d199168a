//! # 문자열 유틸리티
//!
//! HTML 렌더링과 폼 입력 처리에 쓰이는 문자열 함수들입니다.

/// HTML 본문/속성에 넣기 위해 특수문자를 이스케이프합니다.
///
/// 시크릿과 사용자명은 모두 사용자 입력이므로 페이지에 넣기 전에 반드시 거칩니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::escape_html;
///
/// assert_eq!(escape_html("<b>hi</b>"), "&lt;b&gt;hi&lt;/b&gt;");
/// ```
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());

    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

/// 빈 문자열이거나 공백만 있는지 확인
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("hi"), "hi");
        assert_eq!(
            escape_html(r#"<script>alert("x")</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_html("Tom & Jerry's"), "Tom &amp; Jerry&#x27;s");
        assert_eq!(escape_html("안녕 <3"), "안녕 &lt;3");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n"));
        assert!(!is_blank("  hi  "));
    }
}
