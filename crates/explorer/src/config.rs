//! Configuration for jupyter-explorer.
//!
//! Reads config from ~/.config/jupyter-explorer/config.toml. Any value
//! missing here is asked for interactively when connecting.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Startup configuration. All fields optional; missing connection values
/// trigger prompts, a missing workspace falls back to the host's choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Jupyter server base URL, e.g. `https://example.com/jupyter`.
    pub server_url: Option<String>,
    /// Static API token sent as `Authorization: token <token>`.
    pub token: Option<String>,
    /// Remote path to treat as the tree root.
    pub remote_path: Option<String>,
    /// Local directory scratch files are written into.
    pub workspace: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default path, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from_path(&Self::default_config_path()).unwrap_or_default()
    }

    /// Get default config path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jupyter-explorer")
            .join("config.toml")
    }

    /// Load from a specific path. `None` when the file is missing or does
    /// not parse (a broken config file should not prevent startup).
    pub fn load_from_path(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(path = %path.display(), "ignoring unparsable config: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
server_url = "http://localhost:8888"
token = "abc123"
remote_path = "work"
workspace = "/tmp/scratch"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.server_url.as_deref(), Some("http://localhost:8888"));
        assert_eq!(config.token.as_deref(), Some("abc123"));
        assert_eq!(config.remote_path.as_deref(), Some("work"));
        assert_eq!(config.workspace, Some(PathBuf::from("/tmp/scratch")));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "server_url = \"http://localhost:8888\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.token.is_none());
        assert!(config.remote_path.is_none());
    }

    #[test]
    fn missing_file_yields_none() {
        assert!(Config::load_from_path(Path::new("/nonexistent/config.toml")).is_none());
    }
}
