use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct LogConfig {
    pub level: String,
    /// Daily rolling JSON logs are written here when set.
    pub dir: Option<PathBuf>,
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            dir: env::var("SRMS_LOG_DIR")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            dir: None,
        }
    }
}
