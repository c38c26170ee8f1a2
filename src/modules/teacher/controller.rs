use srms_models::MarkRecord;
use tracing::{error, info, warn};

use super::model::TeacherView;
use super::service::TeacherService;
use crate::view::{Notice, Render, ViewController, ViewState};

pub const SAVED_MESSAGE: &str = "Saved!";

/// Drives the teacher screen.
pub struct TeacherController<R> {
    service: TeacherService,
    renderer: R,
    state: ViewState<TeacherView>,
}

impl<R> TeacherController<R>
where
    R: Render<TeacherView>,
{
    pub fn new(service: TeacherService, renderer: R) -> Self {
        Self {
            service,
            renderer,
            state: ViewState::Uninitialized,
        }
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Submits a mark and reports the outcome.
    ///
    /// The displayed subject does not depend on marks, so nothing is
    /// re-fetched and the view state is left as it is.
    pub async fn submit_mark(&self, record: MarkRecord) -> Notice {
        match self.service.submit_mark(&record).await {
            Ok(_) => {
                info!(
                    student_id = %record.student_id,
                    subject_id = %record.subject_id,
                    "Mark saved"
                );
                Notice::success(SAVED_MESSAGE)
            }
            Err(err) => {
                warn!(error = %err, "Mark submission failed");
                Notice::from(&err)
            }
        }
    }
}

impl<R> ViewController for TeacherController<R>
where
    R: Render<TeacherView>,
{
    type View = TeacherView;

    fn state(&self) -> &ViewState<TeacherView> {
        &self.state
    }

    async fn activate(&mut self) -> &ViewState<TeacherView> {
        self.state = ViewState::Loading;
        self.renderer.render(&self.state);

        let result = self
            .service
            .my_subject()
            .await
            .map(|subject| TeacherView { subject });

        if let Err(err) = &result {
            error!(error = %err, "Teacher screen failed to load");
        }

        self.state = ViewState::from_result(result);
        self.renderer.render(&self.state);
        &self.state
    }
}
