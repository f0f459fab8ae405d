//! Optional `dyncast.toml` settings.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::filter::Directive;

pub const DEFAULT_CONFIG_FILE: &str = "dyncast.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid log_level '{0}'")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Default tracing directive, overridden by `RUST_LOG`.
    pub log_level: String,
    /// Treat every `convert`/`xfloat` run as `--strict`.
    pub strict: bool,
    /// Treat every `convert` run as `--json`.
    pub json_input: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            strict: false,
            json_input: false,
        }
    }
}

impl CliConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// The explicit file if given, else `dyncast.toml` in `dir` when it
    /// exists, else defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Self::load(fallback);
        }
        Ok(Self::default())
    }

    pub fn log_directive(&self) -> Result<Directive, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn reads_all_keys() {
        let config = CliConfig::parse(
            r#"
log_level = "debug"
strict = true
json_input = true
"#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert!(config.strict);
        assert!(config.json_input);
    }

    #[test]
    fn rejects_unknown_keys() {
        let err = CliConfig::parse("verbose = true").unwrap_err();
        assert!(err.to_string().contains("verbose"));
    }

    #[test]
    fn log_level_must_be_a_directive() {
        let config = CliConfig {
            log_level: "dyncast=trace".to_string(),
            ..CliConfig::default()
        };
        assert!(config.log_directive().is_ok());
        let config = CliConfig {
            log_level: "dyncast=loud".to_string(),
            ..CliConfig::default()
        };
        assert!(matches!(config.log_directive(), Err(ConfigError::LogLevel(_))));
    }

    #[test]
    fn missing_default_file_is_fine() {
        let dir = std::env::temp_dir().join(format!("dyncast-config-{}", std::process::id()));
        let config = CliConfig::discover(None, &dir).unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(matches!(
            CliConfig::discover(Some(&dir.join("absent.toml")), &dir),
            Err(ConfigError::Read { .. })
        ));
    }
}
