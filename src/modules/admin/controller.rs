use std::future::Future;

use srms_core::ApiError;
use srms_models::{AssignTeacherParams, CreateSubjectParams, CreateUserParams};
use tracing::{error, info, warn};

use super::model::{AdminList, AdminView};
use super::service::AdminService;
use crate::view::{Notice, Render, ViewController, ViewState};

/// Drives the admin screen.
///
/// Every write is a mutate-then-refresh: the POST is followed by an
/// unconditional re-fetch of the list it affects, so the displayed lists
/// always come from the server and never from a local edit.
pub struct AdminController<R> {
    service: AdminService,
    renderer: R,
    state: ViewState<AdminView>,
}

impl<R> AdminController<R>
where
    R: Render<AdminView>,
{
    pub fn new(service: AdminService, renderer: R) -> Self {
        Self {
            service,
            renderer,
            state: ViewState::Uninitialized,
        }
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Creates a subject, then reloads the subject list.
    pub async fn create_subject(&mut self, params: CreateSubjectParams) -> Notice {
        let service = self.service.clone();
        let result = self
            .mutate_then_refresh(AdminList::Subjects, async move {
                service.create_subject(&params).await
            })
            .await;

        match result {
            Ok(subject) => Notice::success(format!("Subject {} created", subject.code)),
            Err(err) => Notice::from(&err),
        }
    }

    /// Creates a user account, then reloads the user list.
    pub async fn create_user(&mut self, params: CreateUserParams) -> Notice {
        let service = self.service.clone();
        let result = self
            .mutate_then_refresh(AdminList::Users, async move {
                service.create_user(&params).await
            })
            .await;

        match result {
            Ok(user) => Notice::success(format!("User {} created", user.username)),
            Err(err) => Notice::from(&err),
        }
    }

    /// Assigns a teacher to a subject, then reloads the subject list.
    pub async fn assign_teacher(&mut self, params: AssignTeacherParams) -> Notice {
        let service = self.service.clone();
        let result = self
            .mutate_then_refresh(AdminList::Subjects, async move {
                service.assign_teacher(&params).await
            })
            .await;

        match result {
            Ok(_) => Notice::success("Assigned!"),
            Err(err) => Notice::from(&err),
        }
    }

    /// Runs `write`; on success reloads `list` and returns the write's result.
    ///
    /// A failed write leaves the state untouched and triggers no request.
    /// A failed reload moves the screen to `Failed` but the write result is
    /// still returned, since the server has applied it.
    async fn mutate_then_refresh<T, W>(&mut self, list: AdminList, write: W) -> Result<T, ApiError>
    where
        W: Future<Output = Result<T, ApiError>>,
    {
        let written = write.await.inspect_err(|err| {
            warn!(list = ?list, error = %err, "Admin write rejected");
        })?;
        self.refresh(list).await;
        Ok(written)
    }

    async fn refresh(&mut self, list: AdminList) {
        let previous = std::mem::replace(&mut self.state, ViewState::Loading);
        self.renderer.render(&self.state);

        let result = match previous {
            ViewState::Ready(mut view) => match list {
                AdminList::Subjects => self.service.list_subjects().await.map(|subjects| {
                    view.subjects = subjects;
                    view
                }),
                AdminList::Users => self.service.list_users().await.map(|users| {
                    view.users = users;
                    view
                }),
            },
            // Nothing trustworthy to keep; reload everything.
            _ => self.load().await,
        };

        self.finish(result);
    }

    async fn load(&self) -> Result<AdminView, ApiError> {
        let subjects = self.service.list_subjects().await?;
        let users = self.service.list_users().await?;
        Ok(AdminView { subjects, users })
    }

    fn finish(&mut self, result: Result<AdminView, ApiError>) {
        match &result {
            Ok(view) => info!(
                subjects = view.subjects.len(),
                users = view.users.len(),
                "Admin dashboard loaded"
            ),
            Err(err) => error!(error = %err, "Admin dashboard failed to load"),
        }
        self.state = ViewState::from_result(result);
        self.renderer.render(&self.state);
    }
}

impl<R> ViewController for AdminController<R>
where
    R: Render<AdminView>,
{
    type View = AdminView;

    fn state(&self) -> &ViewState<AdminView> {
        &self.state
    }

    /// Loads the subject list, then the user list, in that order.
    async fn activate(&mut self) -> &ViewState<AdminView> {
        self.state = ViewState::Loading;
        self.renderer.render(&self.state);

        let result = self.load().await;
        self.finish(result);
        &self.state
    }
}
