use anyhow::Context;
use reqwest::Url;
use srms_auth::{FileSessionStore, SharedSession};
use srms_config::{ApiConfig, SessionConfig};

use crate::client::ApiClient;
use crate::modules::admin::AdminService;
use crate::modules::auth::AuthService;
use crate::modules::student::StudentService;
use crate::modules::teacher::TeacherService;

/// Wiring of the client: one session, one API client, shared by every service.
#[derive(Clone, Debug)]
pub struct AppState {
    pub api_config: ApiConfig,
    pub session: SharedSession,
    pub client: ApiClient,
}

impl AppState {
    pub fn new(api_config: ApiConfig, session: SharedSession) -> anyhow::Result<Self> {
        let client = ApiClient::new(api_config.clone(), session.clone())
            .context("Failed to initialize HTTP client")?;

        Ok(Self {
            api_config,
            session,
            client,
        })
    }

    pub fn auth(&self) -> AuthService {
        AuthService::new(self.client.clone())
    }

    pub fn admin(&self) -> AdminService {
        AdminService::new(self.client.clone())
    }

    pub fn teacher(&self) -> TeacherService {
        TeacherService::new(self.client.clone())
    }

    pub fn student(&self) -> StudentService {
        StudentService::new(self.client.clone())
    }
}

/// Builds the state from the environment, with the session persisted to
/// the configured file under the backend's origin.
pub fn init_app_state() -> anyhow::Result<AppState> {
    let api_config = ApiConfig::from_env();
    let session_config = SessionConfig::from_env();

    let origin = origin_of(&api_config.base_url)?;
    let session = FileSessionStore::open(&session_config.file, origin)
        .context("Failed to open session store")?
        .shared();

    AppState::new(api_config, session)
}

/// `scheme://host[:port]` of a base URL, used to scope the stored session.
pub fn origin_of(base_url: &str) -> anyhow::Result<String> {
    let url = Url::parse(base_url).with_context(|| format!("Invalid API base URL: {base_url}"))?;
    Ok(url.origin().ascii_serialization())
}

#[cfg(test)]
mod tests {
    use super::*;
    use srms_auth::MemorySessionStore;

    #[test]
    fn test_origin_drops_path() {
        assert_eq!(
            origin_of("http://127.0.0.1:8000/api").unwrap(),
            "http://127.0.0.1:8000"
        );
        assert_eq!(
            origin_of("https://srms.example.edu").unwrap(),
            "https://srms.example.edu"
        );
    }

    #[test]
    fn test_origin_rejects_garbage() {
        assert!(origin_of("not a url").is_err());
    }

    #[test]
    fn test_services_share_one_session() {
        let session = MemorySessionStore::with_token("abc").shared();
        let state = AppState::new(ApiConfig::default(), session.clone()).unwrap();
        assert_eq!(state.client.session().token().as_deref(), Some("abc"));

        session.clear().unwrap();
        assert!(!state.auth().is_authenticated());
    }
}
