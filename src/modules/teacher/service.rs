use srms_core::ApiError;
use srms_models::{AssignedSubject, MarkRecord, MySubjectResponse, StatusResponse};
use tracing::instrument;

use crate::client::{ApiClient, paths};

#[derive(Clone, Debug)]
pub struct TeacherService {
    client: ApiClient,
}

impl TeacherService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// The subject assigned to the signed-in teacher, `None` if there is none.
    #[instrument(skip(self))]
    pub async fn my_subject(&self) -> Result<Option<AssignedSubject>, ApiError> {
        let response: Option<MySubjectResponse> =
            self.client.get(paths::TEACHER_MY_SUBJECT).await?;
        Ok(response.and_then(MySubjectResponse::into_subject))
    }

    #[instrument(skip(self))]
    pub async fn submit_mark(&self, record: &MarkRecord) -> Result<StatusResponse, ApiError> {
        self.client.post(paths::TEACHER_MARKS, record).await
    }
}
