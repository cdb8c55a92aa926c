//! Presentation Layer
//!
//! Controllers, request extraction, middleware chain and router.

pub mod controllers;
pub mod dto;
pub mod extract;
pub mod middleware;
pub mod router;
