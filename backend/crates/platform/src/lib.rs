//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cookie parsing and `Set-Cookie` building
//! - Cryptographic utilities (HMAC-SHA256, Base64, random bytes)

pub mod cookie;
pub mod crypto;
