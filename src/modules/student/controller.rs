use srms_core::ApiError;
use tracing::error;

use super::model::StudentView;
use super::service::StudentService;
use crate::view::{Render, ViewController, ViewState};

/// Drives the student screen: profile, then transcript.
pub struct StudentController<R> {
    service: StudentService,
    renderer: R,
    state: ViewState<StudentView>,
}

impl<R> StudentController<R>
where
    R: Render<StudentView>,
{
    pub fn new(service: StudentService, renderer: R) -> Self {
        Self {
            service,
            renderer,
            state: ViewState::Uninitialized,
        }
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    async fn load(&self) -> Result<StudentView, ApiError> {
        let profile = self.service.profile().await?;
        let transcript = self.service.transcript().await?;
        Ok(StudentView {
            profile,
            transcript,
        })
    }
}

impl<R> ViewController for StudentController<R>
where
    R: Render<StudentView>,
{
    type View = StudentView;

    fn state(&self) -> &ViewState<StudentView> {
        &self.state
    }

    async fn activate(&mut self) -> &ViewState<StudentView> {
        self.state = ViewState::Loading;
        self.renderer.render(&self.state);

        let result = self.load().await;
        if let Err(err) = &result {
            error!(error = %err, "Student screen failed to load");
        }

        self.state = ViewState::from_result(result);
        self.renderer.render(&self.state);
        &self.state
    }
}
