//! # SRMS Core
//!
//! Core types shared by every crate of the SRMS client.
//!
//! - [`errors`]: The client error taxonomy (request, transport, session, authentication)
//! - [`serde`]: Custom serde deserialization helpers for loosely typed server payloads
//!
//! # Example
//!
//! ```ignore
//! use srms_core::errors::ApiError;
//!
//! match client.get::<Vec<Subject>>("/admin/subjects").await {
//!     Ok(subjects) => render(subjects),
//!     Err(err) => eprintln!("{}", err.user_message()),
//! }
//! ```

pub mod errors;
pub mod serde;

// Re-export commonly used types at crate root
pub use errors::{ApiError, AuthError, CONNECTIVITY_MESSAGE, SessionError};
