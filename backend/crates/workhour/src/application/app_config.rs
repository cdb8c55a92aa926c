//! Configuration File Loader
//!
//! Reads the JSON configuration file (PascalCase keys). Every key may be
//! omitted; malformed values fail the load.

use axum::http::HeaderValue;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::{Path, PathBuf};
use store::DatabaseConfig;
use thiserror::Error;

use crate::application::config::{SameSite, SessionPolicy, WorkhourConfig, random_secret};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Process configuration as stored on disk
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AppConfig {
    pub port: u16,
    /// Inline object, or a string holding the JSON object
    #[serde(
        rename = "DBConfig",
        alias = "DatabaseConfig",
        deserialize_with = "inline_or_encoded"
    )]
    pub database: DatabaseConfig,
    pub allowed_origin: String,
    pub static_dir: PathBuf,
    pub index_file: PathBuf,
    pub session_policy: SessionPolicy,
    /// Base64 of 32 bytes; a random secret is generated when absent
    pub session_secret: Option<String>,
    pub cookie_secure: bool,
    /// Additional log file
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let runtime = WorkhourConfig::default();
        Self {
            port: 8080,
            database: DatabaseConfig::default(),
            allowed_origin: "http://localhost:3000".to_string(),
            static_dir: runtime.static_dir,
            index_file: runtime.index_file,
            session_policy: runtime.session_policy,
            session_secret: None,
            cookie_secure: runtime.cookie_secure,
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate and convert into the runtime configuration
    pub fn workhour_config(&self) -> Result<WorkhourConfig, ConfigError> {
        let allowed_origin = HeaderValue::from_str(&self.allowed_origin).map_err(|_| {
            ConfigError::Invalid(format!(
                "AllowedOrigin is not a valid header value: {:?}",
                self.allowed_origin
            ))
        })?;

        let session_secret = match &self.session_secret {
            Some(encoded) => decode_secret(encoded)?,
            None => {
                tracing::warn!("SessionSecret not set, session tokens will not survive a restart");
                random_secret()
            }
        };

        Ok(WorkhourConfig {
            allowed_origin,
            static_dir: self.static_dir.clone(),
            index_file: self.index_file.clone(),
            session_policy: self.session_policy,
            session_secret,
            cookie_secure: self.cookie_secure,
            cookie_same_site: SameSite::Lax,
        })
    }
}

fn decode_secret(encoded: &str) -> Result<[u8; 32], ConfigError> {
    let bytes = platform::crypto::from_base64(encoded)
        .map_err(|e| ConfigError::Invalid(format!("SessionSecret is not base64: {e}")))?;

    bytes.try_into().map_err(|bytes: Vec<u8>| {
        ConfigError::Invalid(format!(
            "SessionSecret must decode to 32 bytes, got {}",
            bytes.len()
        ))
    })
}

fn inline_or_encoded<'de, D>(deserializer: D) -> Result<DatabaseConfig, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Value::deserialize(deserializer)? {
        Value::String(encoded) => serde_json::from_str(&encoded).map_err(D::Error::custom),
        inline => serde_json::from_value(inline).map_err(D::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let file = write_config("{}");
        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.database.database, "workhour");
        assert_eq!(config.database.timeout, Duration::from_secs(10));
        assert_eq!(config.session_policy, SessionPolicy::BestEffort);
    }

    #[test]
    fn test_full_config() {
        let file = write_config(
            r#"{
                "Port": 9000,
                "DBConfig": { "Addrs": ["db:5432"], "Database": "hours", "Timeout": 2000000000 },
                "AllowedOrigin": "https://hours.example.com",
                "StaticDir": "/srv/static",
                "IndexFile": "/srv/index.html",
                "SessionPolicy": "FailRequest",
                "CookieSecure": true,
                "LogPath": "/var/log/workhour.log"
            }"#,
        );
        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.database.addrs, vec!["db:5432"]);
        assert_eq!(config.database.database, "hours");
        assert_eq!(config.database.timeout, Duration::from_secs(2));
        assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(config.session_policy, SessionPolicy::FailRequest);
        assert!(config.cookie_secure);
        assert_eq!(config.log_path, Some(PathBuf::from("/var/log/workhour.log")));
    }

    #[test]
    fn test_string_encoded_database_config() {
        let file = write_config(
            r#"{ "DatabaseConfig": "{\"Addrs\": [\"a\", \"b\"], \"Username\": \"worker\"}" }"#,
        );
        let config = AppConfig::load(file.path()).unwrap();

        assert_eq!(config.database.addrs, vec!["a", "b"]);
        assert_eq!(config.database.username, "worker");
        assert_eq!(config.database.database, "workhour");
    }

    #[test]
    fn test_malformed_nested_config_fails() {
        let file = write_config(r#"{ "DBConfig": "{not json" }"#);
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let file = write_config(r#"{ "DBConfig": { "Timeout": "soon" } }"#);
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_invalid_json_and_missing_file() {
        let file = write_config("Port = 8080");
        assert!(matches!(
            AppConfig::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AppConfig::load(dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_workhour_config_validation() {
        let config = AppConfig {
            session_secret: Some(platform::crypto::to_base64(&[7u8; 32])),
            ..AppConfig::default()
        };
        let runtime = config.workhour_config().unwrap();
        assert_eq!(runtime.session_secret, [7u8; 32]);
        assert_eq!(runtime.allowed_origin, "http://localhost:3000");

        let short_secret = AppConfig {
            session_secret: Some(platform::crypto::to_base64(&[7u8; 16])),
            ..AppConfig::default()
        };
        assert!(matches!(
            short_secret.workhour_config(),
            Err(ConfigError::Invalid(_))
        ));

        let bad_origin = AppConfig {
            allowed_origin: "http://bad\norigin".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            bad_origin.workhour_config(),
            Err(ConfigError::Invalid(_))
        ));
    }
}
