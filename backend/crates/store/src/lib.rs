//! Document Store
//!
//! A small key-document store abstraction with upsert-by-filter semantics:
//! - `document` - the [`DocumentStore`] trait and per-name [`Collection`] handles
//! - `postgres` - the [`Database`] handle backed by PostgreSQL JSONB
//! - `memory` - an in-process implementation with the same semantics
//!
//! Filters are top-level equality matches. An empty filter matches every document.

pub mod config;
pub mod document;
pub mod error;
pub mod memory;
pub mod postgres;

pub use config::DatabaseConfig;
pub use document::{Collection, Document, DocumentStore, from_document, to_document, upsert_key};
pub use error::{StoreError, StoreResult};
pub use memory::MemoryDocumentStore;
pub use postgres::{Database, PgDocumentStore};
