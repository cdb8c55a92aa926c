//! Runtime Configuration
//!
//! Validated settings consumed by the router, controllers and middleware.

use axum::http::HeaderValue;
use serde::Deserialize;
use std::path::PathBuf;

pub use platform::cookie::SameSite;
use platform::cookie::CookieConfig;

/// Cookie carrying the session token; its presence triggers session tracking
pub const SESSION_COOKIE_NAME: &str = "SESSIONID";

/// What the session middleware does when the session upsert fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum SessionPolicy {
    /// Log a warning and serve the request anyway
    #[default]
    BestEffort,
    /// Answer 503 without running the router
    FailRequest,
}

/// Work-hour application configuration
#[derive(Debug, Clone)]
pub struct WorkhourConfig {
    /// Value of `Access-Control-Allow-Origin` on every response
    pub allowed_origin: HeaderValue,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// File served at `/`
    pub index_file: PathBuf,
    pub session_policy: SessionPolicy,
    /// Session token secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    pub cookie_same_site: SameSite,
}

impl Default for WorkhourConfig {
    fn default() -> Self {
        Self {
            allowed_origin: HeaderValue::from_static("http://localhost:3000"),
            static_dir: PathBuf::from("./../template/build/static"),
            index_file: PathBuf::from("./../template/build/index.html"),
            session_policy: SessionPolicy::default(),
            session_secret: [0u8; 32],
            cookie_secure: false,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl WorkhourConfig {
    /// `SESSIONID` cookie settings. The web client reads the cookie, so it is not HttpOnly.
    pub fn session_cookie(&self) -> CookieConfig {
        CookieConfig {
            name: SESSION_COOKIE_NAME.to_string(),
            secure: self.cookie_secure,
            http_only: false,
            same_site: self.cookie_same_site,
            path: "/".to_string(),
            max_age_secs: None,
        }
    }
}

pub(crate) fn random_secret() -> [u8; 32] {
    let mut secret = [0u8; 32];
    secret.copy_from_slice(&platform::crypto::random_bytes(32));
    secret
}
