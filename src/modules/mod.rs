//! Feature modules, one per backend area.
//!
//! - [`auth`]: Login flow that populates the session
//! - [`admin`]: Subject and user management screen
//! - [`teacher`]: Assigned subject and mark submission screen
//! - [`student`]: Profile and transcript screen
//!
//! Each role module follows the same structure:
//!
//! - `service.rs`: Typed calls to the backend through the API client
//! - `model.rs`: The view model and its renderable projections
//! - `controller.rs`: Orchestrates service calls into view state transitions

pub mod admin;
pub mod auth;
pub mod student;
pub mod teacher;

pub use self::admin::controller::AdminController;
pub use self::auth::service::AuthService;
pub use self::student::controller::StudentController;
pub use self::teacher::controller::TeacherController;

pub use self::admin::model::AdminView;
pub use self::student::model::StudentView;
pub use self::teacher::model::TeacherView;
