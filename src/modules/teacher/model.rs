use srms_models::AssignedSubject;

pub const NO_SUBJECT_LABEL: &str = "No subject assigned";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeacherView {
    pub subject: Option<AssignedSubject>,
}

impl TeacherView {
    /// `"CS301 — Algorithms (id=3)"`, or [`NO_SUBJECT_LABEL`].
    pub fn subject_label(&self) -> String {
        match &self.subject {
            Some(subject) => format!("{} — {} (id={})", subject.code, subject.name, subject.id),
            None => NO_SUBJECT_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srms_models::SubjectId;

    #[test]
    fn test_subject_label() {
        let view = TeacherView {
            subject: Some(AssignedSubject {
                id: SubjectId::new(3),
                code: "CS301".to_string(),
                name: "Algorithms".to_string(),
            }),
        };
        assert_eq!(view.subject_label(), "CS301 — Algorithms (id=3)");
    }

    #[test]
    fn test_no_subject_label() {
        assert_eq!(TeacherView::default().subject_label(), "No subject assigned");
    }
}
