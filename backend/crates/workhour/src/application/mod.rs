//! Application Layer
//!
//! Configuration, session tokens and use cases.

pub mod app_config;
pub mod authenticate;
pub mod average_work_hour;
pub mod config;
pub mod query_work;
pub mod record_work;
pub mod session_token;
pub mod track_session;

// Re-exports
pub use authenticate::{AuthenticateOutput, AuthenticateUseCase};
pub use average_work_hour::AverageWorkHourUseCase;
pub use config::{SESSION_COOKIE_NAME, SessionPolicy, WorkhourConfig};
pub use query_work::QueryWorkUseCase;
pub use record_work::{RecordWorkInput, RecordWorkUseCase};
pub use session_token::SessionTokens;
pub use track_session::TrackSessionUseCase;
