//! PostgreSQL Document Store
//!
//! Collections live in a single `documents` table holding JSONB bodies.

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::types::Json;

use crate::config::DatabaseConfig;
use crate::document::{Document, DocumentStore, upsert_key};
use crate::error::{StoreError, StoreResult};

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5432;
const MAX_CONNECTIONS: u32 = 10;

/// Live connection to the document store
///
/// Shared by every request for the lifetime of the process. Use
/// [`Database::scoped`] so the pool is closed on every exit path.
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Connect using the first reachable address of `config.addrs`
    pub async fn open(config: &DatabaseConfig) -> StoreResult<Self> {
        let addrs = if config.addrs.is_empty() {
            vec![format!("{}:{}", DEFAULT_HOST, DEFAULT_PORT)]
        } else {
            config.addrs.clone()
        };

        let mut last_error = None;

        for addr in addrs {
            let (host, port) = parse_addr(&addr)?;

            let result = PgPoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .acquire_timeout(config.timeout)
                .connect_with(connect_options(config, &host, port))
                .await;

            match result {
                Ok(pool) => {
                    tracing::info!(addr = %addr, database = %config.database, "Connected to document store");
                    return Ok(Self { pool });
                }
                Err(e) => {
                    tracing::warn!(addr = %addr, error = %e, "Document store address unreachable");
                    last_error = Some(StoreError::Connection { addr, source: e });
                }
            }
        }

        Err(last_error.unwrap_or_else(|| StoreError::InvalidAddress(String::new())))
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("Document store migrations completed");
        Ok(())
    }

    pub fn document_store(&self) -> PgDocumentStore {
        PgDocumentStore::new(self.pool.clone())
    }

    /// Run `f` against the database, then close it whatever `f` returned
    pub async fn scoped<T>(self, f: impl AsyncFnOnce(&Database) -> T) -> T {
        let output = f(&self).await;
        self.close().await;
        output
    }

    /// Release every pooled connection
    pub async fn close(self) {
        self.pool.close().await;
        tracing::info!("Document store connection closed");
    }
}

fn parse_addr(addr: &str) -> StoreResult<(String, u16)> {
    let addr = addr.trim();

    let (host, port) = match addr.rsplit_once(':') {
        Some((host, port)) => {
            let port = port
                .parse::<u16>()
                .map_err(|_| StoreError::InvalidAddress(addr.to_string()))?;
            (host, port)
        }
        None => (addr, DEFAULT_PORT),
    };

    if host.is_empty() {
        return Err(StoreError::InvalidAddress(addr.to_string()));
    }

    Ok((host.to_string(), port))
}

fn connect_options(config: &DatabaseConfig, host: &str, port: u16) -> PgConnectOptions {
    let mut options = PgConnectOptions::new()
        .host(host)
        .port(port)
        .database(&config.database);

    if !config.username.is_empty() {
        options = options.username(&config.username);
    }
    if !config.password.is_empty() {
        options = options.password(&config.password);
    }

    options
}

/// PostgreSQL-backed [`DocumentStore`]
#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn operation_error(
    collection: &str,
    operation: &'static str,
) -> impl FnOnce(sqlx::Error) -> StoreError {
    let collection = collection.to_string();
    move |source| StoreError::Operation {
        collection,
        operation,
        source,
    }
}

impl DocumentStore for PgDocumentStore {
    async fn find(&self, collection: &str, filter: &Document) -> StoreResult<Vec<Document>> {
        let rows = sqlx::query_scalar::<_, Json<Document>>(
            r#"
            SELECT body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY document_id
            "#,
        )
        .bind(collection)
        .bind(Json(filter))
        .fetch_all(&self.pool)
        .await
        .map_err(operation_error(collection, "find"))?;

        Ok(rows.into_iter().map(|Json(document)| document).collect())
    }

    async fn upsert(
        &self,
        collection: &str,
        filter: &Document,
        document: &Document,
    ) -> StoreResult<()> {
        let upsert_key = upsert_key(filter)?;

        sqlx::query(
            r#"
            INSERT INTO documents (collection, upsert_key, body)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, upsert_key)
            DO UPDATE SET body = EXCLUDED.body, updated_at = now()
            "#,
        )
        .bind(collection)
        .bind(&upsert_key)
        .bind(Json(document))
        .execute(&self.pool)
        .await
        .map_err(operation_error(collection, "upsert"))?;

        tracing::debug!(collection = %collection, key = %upsert_key, "Document upserted");
        Ok(())
    }

    async fn insert(&self, collection: &str, document: &Document) -> StoreResult<()> {
        sqlx::query("INSERT INTO documents (collection, body) VALUES ($1, $2)")
            .bind(collection)
            .bind(Json(document))
            .execute(&self.pool)
            .await
            .map_err(operation_error(collection, "insert"))?;

        tracing::debug!(collection = %collection, "Document inserted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_addr() {
        assert_eq!(parse_addr("db:6543").unwrap(), ("db".to_string(), 6543));
        assert_eq!(parse_addr("db").unwrap(), ("db".to_string(), 5432));
        assert_eq!(
            parse_addr(" 10.0.0.5:5432 ").unwrap(),
            ("10.0.0.5".to_string(), 5432)
        );
    }

    #[test]
    fn test_parse_addr_invalid() {
        assert!(matches!(
            parse_addr("db:notaport"),
            Err(StoreError::InvalidAddress(_))
        ));
        assert!(matches!(parse_addr(":5432"), Err(StoreError::InvalidAddress(_))));
        assert!(matches!(parse_addr(""), Err(StoreError::InvalidAddress(_))));
    }

    #[tokio::test]
    async fn test_scoped_closes_pool_when_body_fails() {
        let pool = PgPoolOptions::new()
            .connect_lazy_with(connect_options(&DatabaseConfig::default(), "localhost", 5432));
        let database = Database { pool: pool.clone() };

        let result: Result<(), &str> = database
            .scoped(async |_database: &Database| Err("bind failed"))
            .await;

        assert_eq!(result, Err("bind failed"));
        assert!(pool.is_closed());
    }

    #[tokio::test]
    async fn test_scoped_closes_pool_after_success() {
        let pool = PgPoolOptions::new()
            .connect_lazy_with(connect_options(&DatabaseConfig::default(), "localhost", 5432));
        let database = Database { pool: pool.clone() };

        let value = database.scoped(async |_database: &Database| 42).await;

        assert_eq!(value, 42);
        assert!(pool.is_closed());
    }

    #[test]
    fn test_connect_options_skip_empty_credentials() {
        let config = DatabaseConfig {
            database: "hours".to_string(),
            ..DatabaseConfig::default()
        };
        let options = connect_options(&config, "db", 5432);
        assert_eq!(options.get_host(), "db");
        assert_eq!(options.get_port(), 5432);
        assert_eq!(options.get_database(), Some("hours"));
    }
}
