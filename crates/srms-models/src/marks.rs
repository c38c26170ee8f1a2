//! Mark submission and transcript models.

use serde::{Deserialize, Serialize};

use crate::ids::{StudentId, SubjectId};

/// Body of `POST /teacher/marks`.
///
/// The server keeps one record per (student, subject) pair and overwrites
/// on resubmission; the client does not enforce uniqueness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkRecord {
    pub student_id: StudentId,
    pub subject_id: SubjectId,
    pub marks: i32,
}

/// One subject result in a transcript. Computed by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub subject_code: String,
    pub subject_name: String,
    pub marks: i32,
    pub grade: String,
    pub grade_points: f64,
}

/// Body of `GET /student/me/marks`.
///
/// The response also embeds the student profile, which is ignored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    #[serde(rename = "marks", default)]
    pub entries: Vec<TranscriptEntry>,
    pub cgpa: f64,
}

/// Grade letter and grade points for a mark, on the backend's scale.
///
/// Lets the teacher screen preview the grade a submission will receive.
/// Transcripts always show the server's values.
pub fn grade_for_marks(marks: i32) -> (&'static str, f64) {
    match marks {
        m if m >= 90 => ("O", 10.0),
        m if m >= 80 => ("A+", 9.0),
        m if m >= 70 => ("A", 8.0),
        m if m >= 60 => ("B+", 7.0),
        m if m >= 50 => ("B", 6.0),
        m if m >= 40 => ("C", 5.0),
        _ => ("F", 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_record_body() {
        let record = MarkRecord {
            student_id: StudentId::new(12),
            subject_id: SubjectId::new(3),
            marks: 87,
        };
        assert_eq!(
            serde_json::to_value(record).unwrap(),
            serde_json::json!({ "student_id": 12, "subject_id": 3, "marks": 87 })
        );
    }

    #[test]
    fn test_transcript_ignores_embedded_student() {
        let json = r#"{
            "student": {"id": 1, "student_code": "S1001", "roll_no": "R01", "name": "Asha"},
            "marks": [
                {"subject_code": "CS101", "subject_name": "Programming Fundamentals", "marks": 91, "grade": "O", "grade_points": 10.0}
            ],
            "cgpa": 10.0
        }"#;
        let transcript: Transcript = serde_json::from_str(json).unwrap();
        assert_eq!(transcript.entries.len(), 1);
        assert_eq!(transcript.entries[0].grade, "O");
        assert_eq!(transcript.cgpa, 10.0);
    }

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(grade_for_marks(100), ("O", 10.0));
        assert_eq!(grade_for_marks(90), ("O", 10.0));
        assert_eq!(grade_for_marks(89), ("A+", 9.0));
        assert_eq!(grade_for_marks(70), ("A", 8.0));
        assert_eq!(grade_for_marks(60), ("B+", 7.0));
        assert_eq!(grade_for_marks(50), ("B", 6.0));
        assert_eq!(grade_for_marks(40), ("C", 5.0));
        assert_eq!(grade_for_marks(39), ("F", 0.0));
        assert_eq!(grade_for_marks(0), ("F", 0.0));
    }
}
