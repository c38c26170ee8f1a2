//! Error taxonomy for the SRMS client.
//!
//! Three layers can fail:
//!
//! - [`ApiError`]: a call to the backend failed, either with a non-success
//!   HTTP status ([`ApiError::Request`]) or before a response arrived
//!   ([`ApiError::Transport`]).
//! - [`SessionError`]: the persisted session token could not be read or written.
//! - [`AuthError`]: the login flow failed. A rejected login is
//!   [`AuthError::Rejected`], never an [`ApiError`].
//!
//! The API client never recovers from any of these. View controllers translate
//! them into user-visible text with [`ApiError::user_message`].

use std::path::PathBuf;

use thiserror::Error;

/// Message shown to the user for any transport-level fault.
pub const CONNECTIVITY_MESSAGE: &str =
    "Unable to reach the server. Check your connection and try again.";

/// Failure of a single backend call.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a status outside `200..=299`.
    ///
    /// Displays as the raw response body so it can be surfaced verbatim.
    #[error("{body}")]
    Request { status: u16, body: String },

    /// DNS failure, refused connection, timeout, or a broken body stream.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a success status but the body was not the
    /// expected JSON shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn request(status: u16, body: impl Into<String>) -> Self {
        Self::Request {
            status,
            body: body.into(),
        }
    }

    /// HTTP status of a request error, `None` for transport and decode errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Text to show the user for this error.
    ///
    /// Request errors are surfaced verbatim; transport errors become a
    /// generic connectivity message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Request { body, .. } => body.clone(),
            Self::Transport(_) => CONNECTIVITY_MESSAGE.to_string(),
            Self::Decode(err) => format!("Unexpected response from server: {err}"),
        }
    }
}

/// Failure to read or persist the session token.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("failed to access session file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("session file {path} is not valid JSON: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SessionError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn format(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Format {
            path: path.into(),
            source,
        }
    }
}

/// Failure of the login flow.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend refused the credentials. Recoverable: prompt again.
    #[error("Invalid username or password")]
    Rejected,

    /// The backend accepted the credentials but neither the response body nor
    /// the token claims named a role.
    #[error("login response did not identify a role")]
    MissingRole,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl AuthError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(err) => err.user_message(),
            other => other.to_string(),
        }
    }
}
