//! Strongly-typed ID newtypes for backend entities.
//!
//! The backend uses integer primary keys. Wrapping them prevents passing a
//! `StudentId` (a student profile) where a `UserId` (a login account) is
//! expected, which is an easy mistake since a student has both.
//!
//! # Example
//!
//! ```ignore
//! use srms_models::ids::{SubjectId, UserId};
//!
//! fn assign(subject: SubjectId, teacher: UserId) { /* ... */ }
//!
//! assign(SubjectId::new(3), UserId::new(7));    // OK
//! // assign(UserId::new(7), SubjectId::new(3)); // Compile error! Type mismatch.
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to define a strongly-typed ID newtype over `i64`.
///
/// Serializes transparently so the wire format is a bare integer, both in
/// JSON bodies and in query strings.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            #[inline]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            #[inline]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            #[inline]
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            #[inline]
            fn from(id: $name) -> i64 {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim().parse::<i64>().map(Self)
            }
        }
    };
}

define_id!(
    /// ID of a subject (course).
    SubjectId
);

define_id!(
    /// ID of a login account of any role.
    UserId
);

define_id!(
    /// ID of a student profile, distinct from the student's login account.
    StudentId
);
