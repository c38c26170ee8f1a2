use srms_models::{StudentProfile, Transcript};

use crate::view::{Table, fixed};

/// The student screen. Read-only; there are no student write operations.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentView {
    pub profile: StudentProfile,
    pub transcript: Transcript,
}

impl StudentView {
    /// `(label, value)` pairs of the profile card.
    pub fn profile_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("Name", self.profile.name.as_str()),
            ("Roll No", self.profile.roll_no.as_str()),
            ("Code", self.profile.student_code.as_str()),
        ]
    }

    /// Server-reported CGPA with exactly two decimal places.
    pub fn cgpa_display(&self) -> String {
        fixed(self.transcript.cgpa, 2)
    }

    pub fn marks_table(&self) -> Table {
        let mut table = Table::new(["Subject", "Marks", "Grade", "Points"]);
        for entry in &self.transcript.entries {
            table.push_row(vec![
                format!("{} — {}", entry.subject_code, entry.subject_name),
                entry.marks.to_string(),
                entry.grade.clone(),
                fixed(entry.grade_points, 1),
            ]);
        }
        table
    }
}
