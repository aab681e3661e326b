//! Cookie Helpers
//!
//! Reading request cookies and building `Set-Cookie` values for
//! session-lifetime cookies (no `Max-Age`, cleared when the browser closes).

use axum::http::{HeaderMap, HeaderValue, header, header::InvalidHeaderValue};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Attributes of a cookie the server sets
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
}

impl CookieConfig {
    /// `Set-Cookie` value carrying `value`
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut parts = vec![format!("{}={}", self.name, value)];
        if self.http_only {
            parts.push("HttpOnly".to_string());
        }
        if self.secure {
            parts.push("Secure".to_string());
        }
        parts.push(format!("SameSite={}", self.same_site.as_str()));
        parts.push(format!("Path={}", self.path));
        parts.join("; ")
    }

    pub fn header_value(&self, value: &str) -> Result<HeaderValue, InvalidHeaderValue> {
        HeaderValue::from_str(&self.build_set_cookie(value))
    }
}

/// Value of cookie `name`, searching every `Cookie` header
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csrf_cookie(secure: bool) -> CookieConfig {
        CookieConfig {
            name: "_csrf".to_string(),
            secure,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
        }
    }

    #[test]
    fn test_build_set_cookie() {
        assert_eq!(
            csrf_cookie(true).build_set_cookie("abc"),
            "_csrf=abc; HttpOnly; Secure; SameSite=Lax; Path=/"
        );
        assert_eq!(
            csrf_cookie(false).build_set_cookie("abc"),
            "_csrf=abc; HttpOnly; SameSite=Lax; Path=/"
        );
    }

    #[test]
    fn test_header_value_rejects_control_characters() {
        assert!(csrf_cookie(true).header_value("abc").is_ok());
        assert!(csrf_cookie(true).header_value("a\nb").is_err());
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; _csrf=abc123; other=xyz"),
        );

        assert_eq!(extract_cookie(&headers, "_csrf"), Some("abc123".to_string()));
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("foo=bar"));
        headers.append(header::COOKIE, HeaderValue::from_static("_csrf=abc123"));

        assert_eq!(extract_cookie(&headers, "_csrf"), Some("abc123".to_string()));
    }
}
