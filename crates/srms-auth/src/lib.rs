//! # SRMS Auth
//!
//! Session handling for the SRMS client.
//!
//! - [`store`]: The Session Store. Holds the bearer token and persists it
//!   per backend origin. Every other component reads the token through a
//!   [`SharedSession`] handed to it at construction.
//! - [`claims`]: Reads claims (role, subject, expiry) out of a session token
//!   without verifying its signature. The client never holds the signing
//!   secret; the server remains the only verifier.
//!
//! # Example
//!
//! ```ignore
//! use srms_auth::{FileSessionStore, SessionStore, peek_claims};
//! use std::sync::Arc;
//!
//! let session = Arc::new(FileSessionStore::open(path, "http://127.0.0.1:8000")?);
//! session.set_token(&token)?;
//!
//! if let Some(claims) = session.token().and_then(|t| peek_claims(&t)) {
//!     println!("signed in as {:?}", claims.role);
//! }
//! ```

pub mod claims;
pub mod store;

pub use claims::{TokenClaims, peek_claims};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore, SharedSession};
