use crate::utils::string_utils::escape_html;

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
</head>
<body>
{body}
</body>
</html>
"#,
        title = escape_html(title),
        body = body,
    )
}

fn credentials_form(action: &str, submit_label: &str) -> String {
    format!(
        r#"  <form action="{action}" method="POST">
    <label for="username">Username</label>
    <input type="text" id="username" name="username" required>
    <label for="password">Password</label>
    <input type="password" id="password" name="password" required>
    <button type="submit">{submit_label}</button>
  </form>"#
    )
}

fn federated_links() -> &'static str {
    r#"  <p>
    <a href="/auth/google">Sign In with Google</a>
    <a href="/auth/twitter">Sign In with Twitter</a>
  </p>"#
}

pub fn home_page() -> String {
    layout(
        "Secrets",
        r#"  <h1>Secrets</h1>
  <p>Don't keep your secrets, share them anonymously!</p>
  <p>
    <a href="/register">Register</a>
    <a href="/login">Login</a>
  </p>"#,
    )
}

pub fn login_page() -> String {
    let body = format!(
        "  <h1>Login</h1>\n{}\n{}",
        credentials_form("/login", "Login"),
        federated_links(),
    );
    layout("Login", &body)
}

pub fn register_page() -> String {
    let body = format!(
        "  <h1>Register</h1>\n{}\n{}",
        credentials_form("/register", "Register"),
        federated_links(),
    );
    layout("Register", &body)
}

/// 공개 시크릿 목록
///
/// 로그인한 사용자에게만 로그아웃/제출 링크를 보여줍니다.
pub fn secrets_page(secrets: &[String], authenticated: bool) -> String {
    let mut body = String::from("  <h1>You've Discovered My Secret!</h1>\n");

    if secrets.is_empty() {
        body.push_str("  <p>No secrets yet.</p>\n");
    } else {
        body.push_str("  <ul>\n");
        for secret in secrets {
            body.push_str(&format!("    <li>{}</li>\n", escape_html(secret)));
        }
        body.push_str("  </ul>\n");
    }

    if authenticated {
        body.push_str(
            r#"  <p>
    <a href="/logout">Log Out</a>
    <a href="/submit">Submit a Secret</a>
  </p>"#,
        );
    } else {
        body.push_str(r#"  <p><a href="/login">Login to share a secret</a></p>"#);
    }

    layout("Secrets", &body)
}

pub fn submit_page() -> String {
    layout(
        "Submit a Secret",
        r#"  <h1>Secrets</h1>
  <p>Don't keep your secrets, share them anonymously!</p>
  <form action="/submit" method="POST">
    <input type="text" name="secret" placeholder="What's your secret?" required>
    <button type="submit">Submit</button>
  </form>"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secrets_are_escaped() {
        let page = secrets_page(&["<b>hi</b>".to_string()], false);

        assert!(page.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(!page.contains("<b>hi</b>"));
        assert!(!page.contains("/logout"));
    }

    #[test]
    fn test_authenticated_secrets_page_has_links() {
        let page = secrets_page(&[], true);

        assert!(page.contains("href=\"/logout\""));
        assert!(page.contains("href=\"/submit\""));
        assert!(page.contains("No secrets yet."));
    }

    #[test]
    fn test_login_page_offers_federated_login() {
        let page = login_page();

        assert!(page.contains(r#"action="/login""#));
        assert!(page.contains("/auth/google"));
        assert!(page.contains("/auth/twitter"));
    }
}
