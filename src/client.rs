//! Authenticated HTTP access to the SRMS backend.
//!
//! [`ApiClient`] is the only component that talks to the network. It reads
//! the bearer token from the injected session on every call and never
//! writes it; the login flow does that. Errors are returned to the caller
//! unchanged. The client does not retry and does not swallow failures.

use std::time::Instant;

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use srms_auth::SharedSession;
use srms_config::ApiConfig;
use srms_core::ApiError;
use srms_models::{LoginRequest, LoginResponse};
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Backend paths consumed by the client.
pub mod paths {
    pub const LOGIN: &str = "/auth/login";
    pub const ADMIN_SUBJECTS: &str = "/admin/subjects";
    pub const ADMIN_STUDENTS: &str = "/admin/students";
    pub const ADMIN_CREATE_USER: &str = "/admin/create-user";
    pub const ADMIN_ASSIGN_TEACHER: &str = "/admin/assign-teacher";
    pub const TEACHER_MY_SUBJECT: &str = "/teacher/my-subject";
    pub const TEACHER_MARKS: &str = "/teacher/marks";
    pub const STUDENT_ME: &str = "/student/me";
    pub const STUDENT_MARKS: &str = "/student/me/marks";
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: SharedSession,
}

impl ApiClient {
    /// Builds a client for `config.base_url` that authenticates with the
    /// token held by `session`.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be initialized
    /// (for example, when no TLS backend is available).
    pub fn new(config: ApiConfig, session: SharedSession) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config,
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// `GET base_url + path`, decoding the JSON response.
    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self.authorize(self.http.get(self.config.url(path)));
        self.execute(Method::GET, path, request).await
    }

    /// `POST base_url + path` with a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.authorize(self.http.post(self.config.url(path)).json(body));
        self.execute(Method::POST, path, request).await
    }

    /// `POST base_url + path` with `params` serialized into the query string
    /// and an empty JSON object as the body.
    pub async fn post_query<Q, T>(&self, path: &str, params: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.authorize(
            self.http
                .post(self.config.url(path))
                .query(params)
                .json(&serde_json::json!({})),
        );
        self.execute(Method::POST, path, request).await
    }

    /// Exchanges credentials for a session token.
    ///
    /// Returns `Ok(None)` when the server rejects the login with any
    /// non-success status, so callers can tell bad credentials apart from a
    /// network or server fault. Never sends an `Authorization` header.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<LoginResponse>, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        let request = self.http.post(self.config.url(paths::LOGIN)).json(&body);

        match self.execute(Method::POST, paths::LOGIN, request).await {
            Ok(response) => Ok(Some(response)),
            Err(ApiError::Request { status, .. }) => {
                info!(username = %username, status, "Login rejected");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn execute<T>(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request_id = Uuid::new_v4().to_string();
        let start = Instant::now();

        debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "Sending request"
        );

        let response = request.send().await.map_err(|err| {
            error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %err,
                "Transport failure"
            );
            ApiError::Transport(err)
        })?;

        let status = response.status();
        let body = response.text().await?;
        let latency = start.elapsed();

        match status.as_u16() {
            400..=499 => {
                warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Client error"
                );
            }
            500..=599 => {
                error!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Server error"
                );
            }
            _ => {
                info!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = %status.as_u16(),
                    latency_ms = %latency.as_millis(),
                    "Request completed"
                );
            }
        }

        if !status.is_success() {
            return Err(ApiError::request(status.as_u16(), body));
        }

        decode_body(&body)
    }
}

/// Decodes a success body. An empty body decodes as JSON `null`.
fn decode_body<T>(body: &str) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let body = if body.trim().is_empty() { "null" } else { body };
    Ok(serde_json::from_str(body)?)
}
