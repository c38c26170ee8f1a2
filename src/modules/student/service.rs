use srms_core::ApiError;
use srms_models::{StudentProfile, Transcript};
use tracing::instrument;

use crate::client::{ApiClient, paths};

#[derive(Clone, Debug)]
pub struct StudentService {
    client: ApiClient,
}

impl StudentService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<StudentProfile, ApiError> {
        self.client.get(paths::STUDENT_ME).await
    }

    #[instrument(skip(self))]
    pub async fn transcript(&self) -> Result<Transcript, ApiError> {
        self.client.get(paths::STUDENT_MARKS).await
    }
}
