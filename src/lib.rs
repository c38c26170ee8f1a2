//! # SRMS client
//!
//! A terminal client for the Student Result Management System backend.
//! It signs users in, keeps the session token, and drives one screen per
//! role against the backend's JSON API.
//!
//! ## Architecture
//!
//! ```text
//! src/
//! ├── cli/          # clap commands and comfy-table renderers
//! ├── modules/      # Feature modules
//! │   ├── auth/    # Login flow, the only writer of the session token
//! │   ├── admin/   # Subjects, users, teacher assignment
//! │   ├── teacher/ # Assigned subject, mark submission
//! │   └── student/ # Profile, transcript, CGPA
//! ├── client.rs     # API client: base URL, bearer token, error mapping
//! ├── view.rs       # View states, renderers, notices
//! ├── state.rs      # Wiring of session, client and services
//! └── logging.rs    # tracing subscriber setup
//! ```
//!
//! Workspace crates:
//!
//! - `srms-core`: error types and serde helpers
//! - `srms-config`: environment-driven configuration
//! - `srms-auth`: session store and token claims
//! - `srms-models`: wire types of the backend API
//!
//! ## Environment Variables
//!
//! ```bash
//! SRMS_API_BASE=http://127.0.0.1:8000
//! SRMS_HTTP_TIMEOUT_SECS=30
//! SRMS_SESSION_FILE=~/.config/srms/session.json
//! LOG_LEVEL=warn
//! SRMS_LOG_DIR=./logs
//! ```

pub mod cli;
pub mod client;
pub mod logging;
pub mod modules;
pub mod state;
pub mod view;

// Re-export workspace crates for convenience
pub use srms_auth;
pub use srms_config;
pub use srms_core;
pub use srms_models;
