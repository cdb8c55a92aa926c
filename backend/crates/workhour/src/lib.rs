//! Work-Hour Tracking Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, weekly averaging, repository traits
//! - `application/` - Configuration and use cases
//! - `infra/` - Repositories over the document store
//! - `presentation/` - Controllers, middleware chain, router
//!
//! ## Request pipeline
//! CORS -> session tracking -> router. Every response carries the CORS headers;
//! every request with a non-empty `SESSIONID` cookie upserts its cookies into the
//! `sessions` collection before routing; unmatched paths redirect to `/#!<path>`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::app_config::{AppConfig, ConfigError};
pub use application::config::{SESSION_COOKIE_NAME, SessionPolicy, WorkhourConfig};
pub use error::{WorkhourError, WorkhourResult};
pub use infra::document::DocumentRepository;
pub use presentation::router::{AppRepository, build_app};
