//! Authentication request and response models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::users::Role;

/// Body of `POST /auth/login`.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"********")
            .finish()
    }
}

/// Successful login response.
///
/// The backend answers `{access_token, token_type}` and carries the role in
/// the token claims; other deployments answer `{token, role}`. Both decode here.
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access_token")]
    pub token: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub token_type: Option<String>,
}

impl fmt::Debug for LoginResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginResponse")
            .field("token", &"<redacted>")
            .field("role", &self.role)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// Generic acknowledgement such as `{"status": "ok"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    #[serde(default)]
    pub status: Option<String>,
}
