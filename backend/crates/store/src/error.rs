//! Store Error Types

use thiserror::Error;

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// None of the configured addresses accepted a connection
    #[error("Cannot connect to document store at {addr}: {source}")]
    Connection {
        addr: String,
        #[source]
        source: sqlx::Error,
    },

    /// Address is not `host` or `host:port`
    #[error("Invalid database address: {0}")]
    InvalidAddress(String),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A find/upsert/insert failed at request time
    #[error("{operation} on collection `{collection}` failed: {source}")]
    Operation {
        collection: String,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Document serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document must be a JSON object")]
    NotAnObject,

    /// Upserts are keyed by their filter, which therefore cannot be empty
    #[error("Upsert filter must not be empty")]
    EmptyFilter,
}

impl StoreError {
    /// Whether the store itself is unreachable (as opposed to a bad document or query)
    pub fn is_unavailable(&self) -> bool {
        match self {
            StoreError::Connection { .. } => true,
            StoreError::Operation { source, .. } => matches!(
                source,
                sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_unavailable() {
        let err = StoreError::Operation {
            collection: "sessions".to_string(),
            operation: "upsert",
            source: sqlx::Error::PoolTimedOut,
        };
        assert!(err.is_unavailable());
        assert!(err.to_string().contains("sessions"));

        assert!(!StoreError::EmptyFilter.is_unavailable());
    }
}
