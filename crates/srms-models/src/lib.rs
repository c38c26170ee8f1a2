//! # SRMS Models
//!
//! Wire models for the SRMS backend API.
//!
//! Read models mirror the JSON the backend returns. Write operations take an
//! explicit parameter struct that is serialized at the HTTP boundary, never
//! assembled into query strings by hand.
//!
//! # Modules
//!
//! - [`auth`]: Login request/response and generic acknowledgements
//! - [`ids`]: Strongly-typed integer IDs
//! - [`marks`]: Mark submission, transcript entries and the grade scale
//! - [`students`]: Student profile
//! - [`subjects`]: Subjects and admin subject operations
//! - [`users`]: Roles, user accounts and admin user creation
//!
//! # Example
//!
//! ```ignore
//! use srms_models::{CreateSubjectParams, Role};
//!
//! let params = CreateSubjectParams::new("CS301", "Algorithms");
//! assert_eq!(params.credits, 4);
//! assert_eq!("teacher".parse::<Role>()?, Role::Teacher);
//! ```

pub mod auth;
pub mod ids;
pub mod marks;
pub mod students;
pub mod subjects;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{LoginRequest, LoginResponse, StatusResponse};
pub use ids::{StudentId, SubjectId, UserId};
pub use marks::{MarkRecord, Transcript, TranscriptEntry, grade_for_marks};
pub use students::StudentProfile;
pub use subjects::{
    AssignTeacherParams, AssignedSubject, CreateSubjectParams, DEFAULT_CREDITS, MySubjectResponse,
    Subject,
};
pub use users::{CreateUserParams, ParseRoleError, Role, UserAccount};
