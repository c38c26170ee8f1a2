use srms_models::{Subject, UserAccount};

use crate::view::Table;

/// The admin screen: both lists as last fetched from the server.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdminView {
    pub subjects: Vec<Subject>,
    pub users: Vec<UserAccount>,
}

/// The list a write invalidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminList {
    Subjects,
    Users,
}

impl AdminView {
    pub fn subjects_table(&self) -> Table {
        subjects_table(&self.subjects)
    }

    pub fn users_table(&self) -> Table {
        users_table(&self.users)
    }
}

pub fn subjects_table(subjects: &[Subject]) -> Table {
    let mut table = Table::new(["ID", "Code", "Name", "Credits", "TeacherID"]);
    for subject in subjects {
        table.push_row(vec![
            subject.id.to_string(),
            subject.code.clone(),
            subject.name.clone(),
            subject.credits.to_string(),
            subject
                .teacher_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        ]);
    }
    table
}

pub fn users_table(users: &[UserAccount]) -> Table {
    let mut table = Table::new(["ID", "Username", "Full Name", "Role"]);
    for user in users {
        table.push_row(vec![
            user.id.to_string(),
            user.username.clone(),
            user.full_name.clone().unwrap_or_default(),
            user.role.to_string(),
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use srms_models::{Role, SubjectId, UserId};

    #[test]
    fn test_empty_subjects_render_header_only() {
        let table = subjects_table(&[]);
        assert_eq!(table.header, vec!["ID", "Code", "Name", "Credits", "TeacherID"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_unassigned_teacher_renders_blank() {
        let table = subjects_table(&[Subject {
            id: SubjectId::new(1),
            code: "CS101".to_string(),
            name: "Programming Fundamentals".to_string(),
            credits: 4,
            teacher_id: None,
        }]);
        assert_eq!(
            table.rows,
            vec![vec!["1", "CS101", "Programming Fundamentals", "4", ""]]
        );
    }

    #[test]
    fn test_user_rows_keep_server_order() {
        let users = vec![
            UserAccount {
                id: UserId::new(9),
                username: "s1009".to_string(),
                full_name: Some("Ravi".to_string()),
                role: Role::Student,
            },
            UserAccount {
                id: UserId::new(2),
                username: "s1002".to_string(),
                full_name: None,
                role: Role::Student,
            },
        ];
        let table = users_table(&users);
        assert_eq!(table.rows[0], vec!["9", "s1009", "Ravi", "student"]);
        assert_eq!(table.rows[1], vec!["2", "s1002", "", "student"]);
    }
}
