use std::env;
use std::path::PathBuf;

const SESSION_FILE_NAME: &str = "session.json";
const APP_DIR: &str = "srms";

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub file: PathBuf,
}

impl SessionConfig {
    pub fn from_env() -> Self {
        let file = env::var("SRMS_SESSION_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(default_session_file);

        Self { file }
    }
}

/// `<config dir>/srms/session.json`, or `.srms/session.json` when the
/// platform has no config directory.
pub fn default_session_file() -> PathBuf {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(format!(".{APP_DIR}")))
        .join(SESSION_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_file_name() {
        let path = default_session_file();
        assert_eq!(path.file_name().unwrap(), SESSION_FILE_NAME);
        assert!(path.parent().unwrap().ends_with("srms"));
    }
}
