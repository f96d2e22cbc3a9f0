//! Game configuration
//!
//! Loaded from TOML, then overridden by environment variables and finally
//! by command-line flags in `main`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::Difficulty;
use crate::sync::http::DEFAULT_TIMEOUT_SECS;

const LOCAL_CONFIG: &str = "word_scramble.toml";
const ENV_BACKEND_URL: &str = "WORD_SCRAMBLE_BACKEND_URL";
const ENV_USER: &str = "WORD_SCRAMBLE_USER";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Identity reported to the backend.
    #[serde(default = "default_user")]
    pub user: String,
    /// Base URL of the score/hint service; None plays offline.
    #[serde(default)]
    pub backend_url: Option<String>,
    /// HTTP timeout for sync requests.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Tier a new session starts on.
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Directory with `easy.txt`, `medium.txt` and `long.txt`.
    #[serde(default)]
    pub words_dir: Option<PathBuf>,
    /// Where the TUI writes logs.
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

fn default_user() -> String {
    "guest".to_string()
}

const fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            backend_url: None,
            timeout_secs: default_timeout(),
            difficulty: Difficulty::default(),
            words_dir: None,
            log_file: None,
        }
    }
}

impl GameConfig {
    /// Apply overrides from a lookup function (normally `std::env::var`).
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_BACKEND_URL).filter(|u| !u.trim().is_empty()) {
            self.backend_url = Some(url);
        }
        if let Some(user) = lookup(ENV_USER).filter(|u| !u.trim().is_empty()) {
            self.user = user;
        }
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `path`, if given (must exist)
/// 2. `word_scramble.toml` in the current directory
/// 3. `~/.config/word_scramble/config.toml`
///
/// Environment variable overrides: `WORD_SCRAMBLE_BACKEND_URL`, `WORD_SCRAMBLE_USER`.
///
/// # Errors
///
/// Returns an error if an explicit path is missing or a config file cannot
/// be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            Some(local)
        } else {
            global_config_path().filter(|p| p.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => parse_config_file(&path)?,
        None => GameConfig::default(),
    };

    config.apply_env(|key| std::env::var(key).ok());
    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<GameConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str::<GameConfig>(&content)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|h| {
        PathBuf::from(h)
            .join(".config")
            .join("word_scramble")
            .join("config.toml")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.user, "guest");
        assert_eq!(config.difficulty, Difficulty::Medium);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.backend_url.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
user = "ana@example.com"
backend_url = "http://localhost:5000/"
timeout_secs = 3
difficulty = "hard"
words_dir = "lists"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.user, "ana@example.com");
        assert_eq!(config.backend_url.as_deref(), Some("http://localhost:5000/"));
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.words_dir, Some(PathBuf::from("lists")));
    }

    #[test]
    fn partial_config_uses_defaults() {
        let config: GameConfig = toml::from_str("difficulty = \"easy\"").unwrap();
        assert_eq!(config.user, "guest");
        assert_eq!(config.difficulty, Difficulty::Easy);
    }

    #[test]
    fn unknown_difficulty_rejected() {
        assert!(toml::from_str::<GameConfig>("difficulty = \"expert\"").is_err());
    }

    #[test]
    fn env_overrides() {
        let mut config = GameConfig::default();
        config.apply_env(|key| match key {
            ENV_BACKEND_URL => Some("http://backend".to_string()),
            ENV_USER => Some("ben".to_string()),
            _ => None,
        });
        assert_eq!(config.backend_url.as_deref(), Some("http://backend"));
        assert_eq!(config.user, "ben");
    }

    #[test]
    fn blank_env_values_ignored() {
        let mut config = GameConfig::default();
        config.apply_env(|_| Some("  ".to_string()));
        assert!(config.backend_url.is_none());
        assert_eq!(config.user, "guest");
    }

    #[test]
    fn explicit_path_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "user = \"carla\"\ntimeout_secs = 7\n").unwrap();

        let config = parse_config_file(&path).unwrap();
        assert_eq!(config.user, "carla");
        assert_eq!(config.timeout_secs, 7);
    }

    #[test]
    fn missing_explicit_path_errors() {
        let err = load_config(Some(Path::new("/no/such/word_scramble.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "timeout_secs = \"soon\"").unwrap();
        assert!(parse_config_file(&path).is_err());
    }
}
