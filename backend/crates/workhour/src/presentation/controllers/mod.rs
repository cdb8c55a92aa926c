//! HTTP Controllers
//!
//! Each controller is the router state of its routes; handlers are its
//! associated functions.

pub mod auth;
pub mod sapi;
pub mod work;

pub use auth::AuthController;
pub use sapi::SapiController;
pub use work::WorkController;
