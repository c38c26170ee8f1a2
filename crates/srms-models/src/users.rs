//! User account models and the parameters for creating one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use srms_core::serde::deserialize_optional_non_blank;

use crate::ids::{StudentId, UserId};

/// Role of a login account. Determines which screen and backend paths apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
    Student,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Teacher, Role::Student];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseRoleError(String);

impl fmt::Display for ParseRoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown role '{}', expected one of: admin, teacher, student",
            self.0
        )
    }
}

impl std::error::Error for ParseRoleError {}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "teacher" => Ok(Role::Teacher),
            "student" => Ok(Role::Student),
            _ => Err(ParseRoleError(s.to_string())),
        }
    }
}

/// A login account as listed by `GET /admin/students`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub username: String,
    #[serde(default, deserialize_with = "deserialize_optional_non_blank")]
    pub full_name: Option<String>,
    pub role: Role,
}

/// Query parameters of `POST /admin/create-user`.
///
/// Absent optional fields are left out of the query string entirely. The
/// backend requires `student_id` when `role` is `student`; the client leaves
/// that rule to the server.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct CreateUserParams {
    pub username: String,
    pub password: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_id: Option<StudentId>,
}

impl fmt::Debug for CreateUserParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateUserParams")
            .field("username", &self.username)
            .field("password", &"********")
            .field("role", &self.role)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("student_id", &self.student_id)
            .finish()
    }
}

impl CreateUserParams {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            role,
            full_name: None,
            email: None,
            student_id: None,
        }
    }

    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_student_id(mut self, student_id: StudentId) -> Self {
        self.student_id = Some(student_id);
        self
    }
}
