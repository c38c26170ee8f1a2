mod common;

use common::MockBackend;
use serde_json::json;
use srms::client::paths;
use srms::modules::{StudentController, StudentView};
use srms::view::{ViewController, ViewState};

fn ignore(_: &ViewState<StudentView>) {}

fn profile() -> serde_json::Value {
    json!({
        "id": 4,
        "name": "Asha Rao",
        "roll_no": "R01",
        "student_code": "S1001",
        "division_id": 1,
        "batch": "2024",
        "elective": null
    })
}

#[tokio::test]
async fn test_profile_then_transcript() {
    let mock = MockBackend::start().await;
    mock.reply_json("GET", paths::STUDENT_ME, 200, profile());
    mock.reply_json(
        "GET",
        paths::STUDENT_MARKS,
        200,
        json!({
            "student": profile(),
            "marks": [
                {"subject_code": "CS101", "subject_name": "Programming Fundamentals", "marks": 91, "grade": "O", "grade_points": 10},
                {"subject_code": "MA101", "subject_name": "Mathematics I", "marks": 78, "grade": "A", "grade_points": 8}
            ],
            "cgpa": 9
        }),
    );

    let state = mock.signed_in_state("student-token");
    let mut controller = StudentController::new(state.student(), ignore);
    let view = controller.activate().await.ready().unwrap().clone();

    assert_eq!(mock.calls(), vec!["GET /student/me", "GET /student/me/marks"]);
    assert_eq!(view.profile_fields()[0], ("Name", "Asha Rao"));
    assert_eq!(view.cgpa_display(), "9.00");

    let table = view.marks_table();
    assert_eq!(table.rows.len(), 2);
    assert_eq!(table.rows[0][3], "10.0");
    assert_eq!(table.rows[1], vec!["MA101 — Mathematics I", "78", "A", "8.0"]);
}

#[tokio::test]
async fn test_empty_transcript() {
    let mock = MockBackend::start().await;
    mock.reply_json("GET", paths::STUDENT_ME, 200, profile());
    mock.reply_json(
        "GET",
        paths::STUDENT_MARKS,
        200,
        json!({"student": profile(), "marks": [], "cgpa": 0.0}),
    );

    let state = mock.signed_in_state("student-token");
    let mut controller = StudentController::new(state.student(), ignore);
    let view = controller.activate().await.ready().unwrap().clone();

    assert!(view.marks_table().is_empty());
    assert_eq!(view.cgpa_display(), "0.00");
}

#[tokio::test]
async fn test_missing_profile_fails_without_fetching_marks() {
    let mock = MockBackend::start().await;
    mock.reply_text("GET", paths::STUDENT_ME, 404, "Student profile not found");

    let state = mock.signed_in_state("student-token");
    let mut seen = Vec::new();
    let mut controller = StudentController::new(state.student(), |state: &ViewState<StudentView>| {
        seen.push(state.clone())
    });

    let error = controller.activate().await.error().map(str::to_string);
    drop(controller);

    assert_eq!(error.as_deref(), Some("Student profile not found"));
    assert_eq!(mock.calls(), vec!["GET /student/me"]);
    assert_eq!(seen.len(), 2);
    assert!(seen[1].is_failed());
}
