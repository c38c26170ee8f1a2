//! # SRMS Config
//!
//! Configuration types for the SRMS client.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`api`]: Backend base URL and optional request timeout
//! - [`session`]: Location of the persisted session file
//! - [`log`]: Log level and optional log directory
//!
//! # Example
//!
//! ```ignore
//! use srms_config::{ApiConfig, LogConfig, SessionConfig};
//!
//! let api_config = ApiConfig::from_env();
//! let session_config = SessionConfig::from_env();
//! let log_config = LogConfig::from_env();
//! ```

pub mod api;
pub mod log;
pub mod session;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use log::LogConfig;
pub use session::SessionConfig;
