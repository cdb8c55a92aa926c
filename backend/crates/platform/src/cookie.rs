//! Cookie Management Infrastructure
//!
//! Parsing of the request `Cookie` header(s) and building of `Set-Cookie` values.

use std::collections::BTreeMap;

use axum::http::{HeaderMap, HeaderValue, header};

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

/// Cookie configuration
#[derive(Debug, Clone)]
pub struct CookieConfig {
    pub name: String,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub path: String,
    pub max_age_secs: Option<i64>,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            name: "session".to_string(),
            secure: true,
            http_only: true,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

impl CookieConfig {
    /// Build Set-Cookie header value
    pub fn build_set_cookie(&self, value: &str) -> String {
        let mut cookie = format!("{}={}", self.name, value);

        if self.http_only {
            cookie.push_str("; HttpOnly");
        }
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie.push_str(&format!("; SameSite={}", self.same_site.as_str()));
        cookie.push_str(&format!("; Path={}", self.path));

        if let Some(max_age) = self.max_age_secs {
            cookie.push_str(&format!("; Max-Age={}", max_age));
        }

        cookie
    }
}

/// Iterate over `name=value` pairs of every `Cookie` header, in order.
fn cookie_pairs(headers: &HeaderMap) -> impl Iterator<Item = (&str, &str)> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                None
            } else {
                Some((key, value.trim()))
            }
        })
}

/// Extract a cookie value from headers (first occurrence wins)
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    cookie_pairs(headers).find_map(|(key, value)| (key == name).then(|| value.to_string()))
}

/// Collect every request cookie into a map (a later duplicate overwrites an earlier one)
pub fn collect_cookies(headers: &HeaderMap) -> BTreeMap<String, String> {
    cookie_pairs(headers)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Create a Set-Cookie header value
///
/// Returns `None` when the cookie value contains bytes that are not valid in a header.
pub fn set_cookie_header(config: &CookieConfig, value: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(&config.build_set_cookie(value)).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_config_build() {
        let config = CookieConfig {
            name: "SESSIONID".to_string(),
            secure: false,
            http_only: false,
            same_site: SameSite::Lax,
            path: "/".to_string(),
            max_age_secs: Some(3600),
        };

        let cookie = config.build_set_cookie("value123");
        assert!(cookie.starts_with("SESSIONID=value123"));
        assert!(!cookie.contains("HttpOnly"));
        assert!(!cookie.contains("Secure"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=3600"));
    }

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; SESSIONID=abc123; other=xyz"),
        );

        assert_eq!(
            extract_cookie(&headers, "SESSIONID"),
            Some("abc123".to_string())
        );
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_empty_value() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("SESSIONID=; a=1"));

        assert_eq!(extract_cookie(&headers, "SESSIONID"), Some(String::new()));
    }

    #[test]
    fn test_collect_cookies_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("a=1; b=2"));
        headers.append(header::COOKIE, HeaderValue::from_static("c=3; a=4; broken"));

        let cookies = collect_cookies(&headers);
        assert_eq!(cookies.len(), 3);
        assert_eq!(cookies["a"], "4");
        assert_eq!(cookies["b"], "2");
        assert_eq!(cookies["c"], "3");
    }

    #[test]
    fn test_value_keeps_equals_sign() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("token=abc=="));

        assert_eq!(extract_cookie(&headers, "token"), Some("abc==".to_string()));
    }
}
