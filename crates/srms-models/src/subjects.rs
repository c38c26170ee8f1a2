//! Subject models and the parameters of the admin subject operations.

use serde::{Deserialize, Serialize};

use crate::ids::{SubjectId, UserId};

/// Credits given to a new subject when none are specified.
pub const DEFAULT_CREDITS: i32 = 4;

/// A subject as listed by `GET /admin/subjects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: SubjectId,
    pub code: String,
    pub name: String,
    pub credits: i32,
    /// Account ID of the assigned teacher.
    #[serde(default)]
    pub teacher_id: Option<UserId>,
}

/// The subject assigned to the signed-in teacher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignedSubject {
    pub id: SubjectId,
    pub code: String,
    pub name: String,
}

/// Body of `GET /teacher/my-subject`.
///
/// The backend answers `{"message": "No subject assigned"}` rather than
/// `null` when the teacher has no subject.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MySubjectResponse {
    Assigned(AssignedSubject),
    Unassigned {
        #[serde(default)]
        message: Option<String>,
    },
}

impl MySubjectResponse {
    pub fn into_subject(self) -> Option<AssignedSubject> {
        match self {
            Self::Assigned(subject) if !subject.code.is_empty() => Some(subject),
            _ => None,
        }
    }
}

/// Query parameters of `POST /admin/subjects`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateSubjectParams {
    pub code: String,
    pub name: String,
    pub credits: i32,
}

impl CreateSubjectParams {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits: DEFAULT_CREDITS,
        }
    }

    pub fn with_credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }
}

/// Query parameters of `POST /admin/assign-teacher`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AssignTeacherParams {
    pub subject_id: SubjectId,
    pub teacher_user_id: UserId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_without_teacher() {
        let json = r#"{"id": 1, "code": "CS101", "name": "Programming Fundamentals", "credits": 4, "teacher_id": null}"#;
        let subject: Subject = serde_json::from_str(json).unwrap();
        assert_eq!(subject.id, SubjectId::new(1));
        assert!(subject.teacher_id.is_none());
    }

    #[test]
    fn test_my_subject_assigned() {
        let json = r#"{"id": 3, "code": "CS301", "name": "Algorithms"}"#;
        let response: MySubjectResponse = serde_json::from_str(json).unwrap();
        let subject = response.into_subject().unwrap();
        assert_eq!(subject.code, "CS301");
        assert_eq!(subject.id, SubjectId::new(3));
    }

    #[test]
    fn test_my_subject_unassigned_message() {
        let json = r#"{"message": "No subject assigned"}"#;
        let response: MySubjectResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_subject().is_none());
    }

    #[test]
    fn test_my_subject_null() {
        let response: Option<MySubjectResponse> = serde_json::from_str("null").unwrap();
        assert!(response.is_none());
    }

    #[test]
    fn test_create_subject_defaults_to_four_credits() {
        let params = CreateSubjectParams::new("CS301", "Algorithms");
        assert_eq!(params.credits, DEFAULT_CREDITS);
        assert_eq!(params.with_credits(3).credits, 3);
    }
}
