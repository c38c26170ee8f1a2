//! Student profile model.

use serde::{Deserialize, Serialize};

use srms_core::serde::deserialize_optional_non_blank;

use crate::ids::StudentId;

/// Body of `GET /student/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub id: Option<StudentId>,
    pub name: String,
    pub roll_no: String,
    pub student_code: String,
    #[serde(default)]
    pub division_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_non_blank")]
    pub batch: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_non_blank")]
    pub elective: Option<String>,
}
