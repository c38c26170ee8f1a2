use srms_core::ApiError;
use srms_models::{
    AssignTeacherParams, CreateSubjectParams, CreateUserParams, StatusResponse, Subject,
    UserAccount,
};
use tracing::instrument;

use crate::client::{ApiClient, paths};

#[derive(Clone, Debug)]
pub struct AdminService {
    client: ApiClient,
}

impl AdminService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    #[instrument(skip(self))]
    pub async fn list_subjects(&self) -> Result<Vec<Subject>, ApiError> {
        self.client.get(paths::ADMIN_SUBJECTS).await
    }

    /// Lists the accounts exposed by `/admin/students`.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.client.get(paths::ADMIN_STUDENTS).await
    }

    #[instrument(skip(self))]
    pub async fn create_subject(&self, params: &CreateSubjectParams) -> Result<Subject, ApiError> {
        self.client.post_query(paths::ADMIN_SUBJECTS, params).await
    }

    #[instrument(skip(self, params), fields(username = %params.username, role = %params.role))]
    pub async fn create_user(&self, params: &CreateUserParams) -> Result<UserAccount, ApiError> {
        self.client.post_query(paths::ADMIN_CREATE_USER, params).await
    }

    #[instrument(skip(self))]
    pub async fn assign_teacher(
        &self,
        params: &AssignTeacherParams,
    ) -> Result<StatusResponse, ApiError> {
        self.client
            .post_query(paths::ADMIN_ASSIGN_TEACHER, params)
            .await
    }
}
