//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every backend crate agrees on:
//! - The unified [`error::app_error::AppError`] type and its result alias
//! - The [`error::kind::ErrorKind`] classification that maps onto HTTP status codes
//! - RFC 7807 rendering of errors for the HTTP layer (feature `axum`)
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
