//! The `srms` command-line interface.
//!
//! Each role command activates the matching view controller with a terminal
//! renderer, then runs the requested write (if any).

pub mod render;

use anyhow::{Context, bail};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use srms_auth::TokenClaims;
use srms_core::AuthError;
use srms_models::{
    AssignTeacherParams, CreateSubjectParams, CreateUserParams, DEFAULT_CREDITS, MarkRecord, Role,
    StudentId, SubjectId, UserId, grade_for_marks,
};

use crate::modules::{AdminController, StudentController, TeacherController};
use crate::state::AppState;
use crate::view::{Notice, ViewController};

#[derive(Parser)]
#[command(name = "srms")]
#[command(about = "SRMS client - Student Result Management System from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in and store the session token
    Login {
        /// Username (prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,
    },
    /// Forget the stored session token
    Logout,
    /// Show who the stored session belongs to
    Whoami,
    /// Subject and user management
    Admin {
        #[command(subcommand)]
        command: AdminCommand,
    },
    /// Assigned subject and mark entry
    Teacher {
        #[command(subcommand)]
        command: TeacherCommand,
    },
    /// Profile and transcript
    Student {
        #[command(subcommand)]
        command: StudentCommand,
    },
}

#[derive(Subcommand)]
pub enum AdminCommand {
    /// List subjects and users
    Show,
    /// Create a subject
    CreateSubject {
        #[arg(long)]
        code: String,

        #[arg(long)]
        name: String,

        #[arg(long, default_value_t = DEFAULT_CREDITS)]
        credits: i32,
    },
    /// Create a user account
    CreateUser {
        #[arg(long)]
        username: String,

        /// Password (will be prompted securely if not provided)
        #[arg(long)]
        password: Option<String>,

        /// admin, teacher or student
        #[arg(long)]
        role: Role,

        #[arg(long)]
        full_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        /// Student profile ID, required by the server for student accounts
        #[arg(long)]
        student_id: Option<StudentId>,
    },
    /// Assign a teacher to a subject
    AssignTeacher {
        #[arg(long)]
        subject_id: SubjectId,

        #[arg(long)]
        teacher_user_id: UserId,
    },
}

#[derive(Subcommand)]
pub enum TeacherCommand {
    /// Show the assigned subject
    Show,
    /// Submit or update a student's mark
    SubmitMark {
        #[arg(long)]
        student_id: StudentId,

        #[arg(long)]
        subject_id: SubjectId,

        #[arg(long)]
        marks: i32,
    },
}

#[derive(Subcommand)]
pub enum StudentCommand {
    /// Show profile, transcript and CGPA
    Show,
}

pub async fn run(cli: Cli, state: &AppState) -> anyhow::Result<()> {
    match cli.command {
        Commands::Login { username, password } => handle_login(state, username, password).await,
        Commands::Logout => handle_logout(state),
        Commands::Whoami => handle_whoami(state),
        Commands::Admin { command } => handle_admin(state, command).await,
        Commands::Teacher { command } => handle_teacher(state, command).await,
        Commands::Student { command } => handle_student(state, command).await,
    }
}

async fn handle_login(
    state: &AppState,
    username: Option<String>,
    password: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };

    let password = match password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .context("Failed to read password")?,
    };

    match state.auth().login(&username, &password).await {
        Ok(role) => {
            println!("\n✅ Signed in as {}", username);
            println!("   Role: {}", role);
            println!("   Next: srms {} show", role);
            Ok(())
        }
        Err(AuthError::Rejected) => bail!("Login failed: invalid username or password"),
        Err(e) => bail!("Login failed: {}", e.user_message()),
    }
}

fn handle_logout(state: &AppState) -> anyhow::Result<()> {
    state.auth().logout().context("Failed to clear session")?;
    println!("✅ Signed out");
    Ok(())
}

fn handle_whoami(state: &AppState) -> anyhow::Result<()> {
    let auth = state.auth();
    if !auth.is_authenticated() {
        bail!("Not signed in. Run `srms login` first.");
    }

    println!("Server: {}", state.api_config.base_url);
    match auth.current_claims() {
        Some(claims) => {
            for (label, value) in session_details(&claims, Utc::now().timestamp()) {
                println!("{:<7} {}", format!("{label}:"), value);
            }
        }
        None => println!("Session token is opaque; no details available"),
    }
    Ok(())
}

/// `(label, value)` lines describing the claims of the stored token.
fn session_details(claims: &TokenClaims, now_unix: i64) -> Vec<(&'static str, String)> {
    let mut details = Vec::new();
    if let Some(role) = claims.role {
        details.push(("Role", role.to_string()));
    }
    if let Some(sub) = &claims.sub {
        details.push(("User", sub.clone()));
    }
    if let Some(exp) = claims.exp {
        let when = DateTime::<Utc>::from_timestamp(exp, 0)
            .map(|at| at.to_rfc3339())
            .unwrap_or_else(|| exp.to_string());
        let suffix = if claims.is_expired_at(now_unix) {
            " (expired)"
        } else {
            ""
        };
        details.push(("Expiry", format!("{when}{suffix}")));
    }
    details
}

async fn handle_admin(state: &AppState, command: AdminCommand) -> anyhow::Result<()> {
    let mut controller = AdminController::new(state.admin(), render::admin);
    ensure_ready(controller.activate().await.error())?;

    let notice = match command {
        AdminCommand::Show => return Ok(()),
        AdminCommand::CreateSubject {
            code,
            name,
            credits,
        } => {
            let params = CreateSubjectParams::new(code.trim(), name.trim()).with_credits(credits);
            controller.create_subject(params).await
        }
        AdminCommand::CreateUser {
            username,
            password,
            role,
            full_name,
            email,
            student_id,
        } => {
            let password = match password {
                Some(password) => password,
                None => Password::new()
                    .with_prompt("Password for new user")
                    .with_confirmation("Confirm password", "Passwords don't match")
                    .interact()
                    .context("Failed to read password")?,
            };

            let mut params = CreateUserParams::new(username, password, role);
            if let Some(full_name) = full_name {
                params = params.with_full_name(full_name);
            }
            if let Some(email) = email {
                params = params.with_email(email);
            }
            if let Some(student_id) = student_id {
                params = params.with_student_id(student_id);
            }
            controller.create_user(params).await
        }
        AdminCommand::AssignTeacher {
            subject_id,
            teacher_user_id,
        } => {
            controller
                .assign_teacher(AssignTeacherParams {
                    subject_id,
                    teacher_user_id,
                })
                .await
        }
    };

    report(&notice)?;
    ensure_ready(controller.state().error())
}

async fn handle_teacher(state: &AppState, command: TeacherCommand) -> anyhow::Result<()> {
    let mut controller = TeacherController::new(state.teacher(), render::teacher);
    ensure_ready(controller.activate().await.error())?;

    match command {
        TeacherCommand::Show => Ok(()),
        TeacherCommand::SubmitMark {
            student_id,
            subject_id,
            marks,
        } => {
            let (grade, points) = grade_for_marks(marks);
            println!("Submitting {} marks (expected grade {} / {:.1})", marks, grade, points);

            let notice = controller
                .submit_mark(MarkRecord {
                    student_id,
                    subject_id,
                    marks,
                })
                .await;
            report(&notice)
        }
    }
}

async fn handle_student(state: &AppState, command: StudentCommand) -> anyhow::Result<()> {
    match command {
        StudentCommand::Show => {
            let mut controller = StudentController::new(state.student(), render::student);
            ensure_ready(controller.activate().await.error())
        }
    }
}

fn ensure_ready(error: Option<&str>) -> anyhow::Result<()> {
    match error {
        Some(message) => bail!("{}", message),
        None => Ok(()),
    }
}

fn report(notice: &Notice) -> anyhow::Result<()> {
    if notice.is_success() {
        println!("\n✅ {}", notice);
        Ok(())
    } else {
        bail!("{}", notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_submit_mark_parses_typed_ids() {
        let cli = Cli::try_parse_from([
            "srms",
            "teacher",
            "submit-mark",
            "--student-id",
            "4",
            "--subject-id",
            "3",
            "--marks",
            "87",
        ])
        .unwrap();

        match cli.command {
            Commands::Teacher {
                command:
                    TeacherCommand::SubmitMark {
                        student_id,
                        subject_id,
                        marks,
                    },
            } => {
                assert_eq!(student_id, StudentId::new(4));
                assert_eq!(subject_id, SubjectId::new(3));
                assert_eq!(marks, 87);
            }
            _ => panic!("expected teacher submit-mark"),
        }
    }

    #[test]
    fn test_create_subject_defaults_credits() {
        let cli = Cli::try_parse_from([
            "srms",
            "admin",
            "create-subject",
            "--code",
            "CS101",
            "--name",
            "Programming Fundamentals",
        ])
        .unwrap();

        match cli.command {
            Commands::Admin {
                command: AdminCommand::CreateSubject { credits, .. },
            } => assert_eq!(credits, DEFAULT_CREDITS),
            _ => panic!("expected admin create-subject"),
        }
    }

    #[test]
    fn test_session_details_from_claims() {
        let claims = TokenClaims {
            sub: Some("7".to_string()),
            role: Some(Role::Teacher),
            exp: Some(1_700_000_000),
        };

        let details = session_details(&claims, 1_600_000_000);
        assert_eq!(details[0], ("Role", "teacher".to_string()));
        assert_eq!(details[1], ("User", "7".to_string()));
        assert_eq!(details[2], ("Expiry", "2023-11-14T22:13:20+00:00".to_string()));

        let expired = session_details(&claims, 1_700_000_001);
        assert!(expired[2].1.ends_with(" (expired)"));
    }

    #[test]
    fn test_session_details_skip_missing_claims() {
        let claims = TokenClaims {
            sub: None,
            role: None,
            exp: None,
        };
        assert!(session_details(&claims, 0).is_empty());
    }

    #[test]
    fn test_create_user_rejects_unknown_role() {
        let result = Cli::try_parse_from([
            "srms",
            "admin",
            "create-user",
            "--username",
            "s1001",
            "--password",
            "pw",
            "--role",
            "janitor",
        ]);
        assert!(result.is_err());
    }
}
