//! Quiz defaults from a config file and the environment.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable that overrides the configured time limit.
pub const TIME_LIMIT_ENV: &str = "QUIZCLOCK_TIME_LIMIT";

/// Top-level quizclock configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizclockConfig {
    /// Quiz table to load.
    #[serde(default = "default_csv")]
    pub csv: PathBuf,
    /// Session time limit in whole seconds.
    #[serde(default = "default_time_limit")]
    pub time_limit_secs: u64,
    /// Shuffle question order before starting.
    #[serde(default)]
    pub shuffle: bool,
    /// Fixed shuffle seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_csv() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_time_limit() -> u64 {
    30
}

impl Default for QuizclockConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            time_limit_secs: default_time_limit(),
            shuffle: false,
            seed: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizclock.toml` in the current directory
/// 2. `~/.config/quizclock/config.toml`
///
/// `QUIZCLOCK_TIME_LIMIT` is applied on top of whatever was found.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizclockConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizclock.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<QuizclockConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => QuizclockConfig::default(),
    };

    apply_env_overrides(config, |key| std::env::var(key).ok())
}

fn apply_env_overrides(
    mut config: QuizclockConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<QuizclockConfig> {
    if let Some(value) = lookup(TIME_LIMIT_ENV) {
        config.time_limit_secs = value
            .trim()
            .parse()
            .with_context(|| format!("{TIME_LIMIT_ENV} must be whole seconds, got '{value}'"))?;
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizclock"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = QuizclockConfig::default();
        assert_eq!(config.csv, PathBuf::from("problems.csv"));
        assert_eq!(config.time_limit_secs, 30);
        assert!(!config.shuffle);
        assert!(config.seed.is_none());
    }

    #[test]
    fn parse_partial_config() {
        let config: QuizclockConfig = toml::from_str("time_limit_secs = 90\nshuffle = true\n").unwrap();
        assert_eq!(config.time_limit_secs, 90);
        assert!(config.shuffle);
        assert_eq!(config.csv, PathBuf::from("problems.csv"));
    }

    #[test]
    fn load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        std::fs::write(&path, "csv = \"capitals.csv\"\nseed = 9\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.csv, PathBuf::from("capitals.csv"));
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn missing_explicit_path_fails() {
        let err = load_config_from(Some(Path::new("no/such/quizclock.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn env_overrides_time_limit() {
        let config = apply_env_overrides(QuizclockConfig::default(), |key| {
            (key == TIME_LIMIT_ENV).then(|| "5".to_string())
        })
        .unwrap();
        assert_eq!(config.time_limit_secs, 5);
    }

    #[test]
    fn env_override_must_be_numeric() {
        let err = apply_env_overrides(QuizclockConfig::default(), |_| Some("soon".into()))
            .unwrap_err();
        assert!(err.to_string().contains(TIME_LIMIT_ENV));
    }
}
