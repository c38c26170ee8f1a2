use std::env;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Base URL without a trailing slash; request paths start with `/`.
    pub base_url: String,
    /// No timeout is applied unless one is configured.
    pub timeout: Option<Duration>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url = env::var("SRMS_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let timeout = env::var("SRMS_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        Self::new(base_url).with_timeout(timeout)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins the base URL and an absolute request path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
