//! Database connection parameters

use serde::{Deserialize, Deserializer};
use std::fmt;
use std::time::Duration;

/// Connection parameters of the document store.
///
/// Keys are PascalCase in the configuration file. Every field may be omitted.
/// `Timeout` is an integer number of nanoseconds.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DatabaseConfig {
    /// `host` or `host:port`, tried in order
    pub addrs: Vec<String>,
    pub database: String,
    #[serde(deserialize_with = "duration_from_nanos")]
    pub timeout: Duration,
    pub username: String,
    pub password: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            addrs: Vec::new(),
            database: "workhour".to_string(),
            timeout: Duration::from_secs(10),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("addrs", &self.addrs)
            .field("database", &self.database)
            .field("timeout", &self.timeout)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

fn duration_from_nanos<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    u64::deserialize(deserializer).map(Duration::from_nanos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_empty() {
        let config: DatabaseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DatabaseConfig::default());
        assert!(config.addrs.is_empty());
        assert_eq!(config.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_full_config() {
        let config: DatabaseConfig = serde_json::from_str(
            r#"{
                "Addrs": ["db1:5432", "db2"],
                "Database": "hours",
                "Timeout": 5000000000,
                "Username": "worker",
                "Password": "secret"
            }"#,
        )
        .unwrap();

        assert_eq!(config.addrs, vec!["db1:5432", "db2"]);
        assert_eq!(config.database, "hours");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.username, "worker");
        assert_eq!(config.password, "secret");
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = DatabaseConfig {
            password: "secret".to_string(),
            ..DatabaseConfig::default()
        };
        assert!(!format!("{:?}", config).contains("secret"));
    }

    #[test]
    fn test_rejects_non_numeric_timeout() {
        let result = serde_json::from_str::<DatabaseConfig>(r#"{"Timeout": "5s"}"#);
        assert!(result.is_err());
    }
}
