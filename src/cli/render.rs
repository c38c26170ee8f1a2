//! Terminal renderers for the role screens.

use comfy_table::{ContentArrangement, Table as TextTable};

use crate::modules::{AdminView, StudentView, TeacherView};
use crate::view::{Table, ViewState};

/// Draw a [`Table`] with comfy-table.
pub fn to_text(table: &Table) -> String {
    let mut text = TextTable::new();
    text.set_content_arrangement(ContentArrangement::Dynamic);
    text.set_header(&table.header);
    for row in &table.rows {
        text.add_row(row);
    }
    text.to_string()
}

pub fn admin(state: &ViewState<AdminView>) {
    match state {
        ViewState::Uninitialized => {}
        ViewState::Loading => loading("subjects and users"),
        ViewState::Ready(view) => {
            println!("\n📚 Subjects");
            println!("{}", to_text(&view.subjects_table()));
            println!("\n👥 Users");
            println!("{}", to_text(&view.users_table()));
        }
        ViewState::Failed(message) => failed(message),
    }
}

pub fn teacher(state: &ViewState<TeacherView>) {
    match state {
        ViewState::Uninitialized => {}
        ViewState::Loading => loading("assigned subject"),
        ViewState::Ready(view) => println!("\n📘 My subject: {}", view.subject_label()),
        ViewState::Failed(message) => failed(message),
    }
}

pub fn student(state: &ViewState<StudentView>) {
    match state {
        ViewState::Uninitialized => {}
        ViewState::Loading => loading("profile and marks"),
        ViewState::Ready(view) => {
            println!();
            for (label, value) in view.profile_fields() {
                println!("{:<8} {}", format!("{label}:"), value);
            }
            println!("\n{}", to_text(&view.marks_table()));
            println!("CGPA: {}", view.cgpa_display());
        }
        ViewState::Failed(message) => failed(message),
    }
}

fn loading(what: &str) {
    eprintln!("⏳ Loading {what}...");
}

fn failed(message: &str) {
    eprintln!("❌ {message}");
}
