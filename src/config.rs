use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file picked up from the current directory when none is given.
pub const CONFIG_FILE_NAME: &str = "analysis-render.toml";

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Emit a complete HTML page instead of a fragment.
    pub standalone: bool,
    /// Page title, only used for standalone output.
    pub title: String,
    /// Class of a `<div>` wrapping the fragment.
    pub container_class: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            title: "Analysis".to_string(),
            container_class: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Config {
    /// Config bundled with the binary (`src/default_config.toml`).
    pub fn compiled_default() -> Self {
        // Syntax is checked by build.rs
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load and validate config from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, and
    /// `Parse` or `Validation` for invalid content.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `analysis-render.toml` from the current directory, or fall back
    /// to the compiled default when there is none.
    pub fn discover() -> Result<Self, ConfigError> {
        let path = Path::new(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::compiled_default())
        }
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `output.container_class` is empty
    /// or contains characters other than ASCII alphanumerics, `-`, `_` and spaces.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(class) = &self.output.container_class {
            if class.trim().is_empty() {
                return Err(ConfigError::Validation(
                    "output.container_class cannot be empty".to_string(),
                ));
            }
            if !class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | ' '))
            {
                return Err(ConfigError::Validation(format!(
                    "output.container_class contains invalid characters: {class:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn compiled_default_matches_default() {
        assert_eq!(Config::compiled_default(), Config::default());
    }

    #[test]
    fn load_partial_config() {
        let file = write_config("[output]\nstandalone = true\n");
        let config = Config::load(file.path()).unwrap();
        assert!(config.output.standalone);
        assert_eq!(config.output.title, "Analysis");
        assert_eq!(config.output.container_class, None);
    }

    #[test]
    fn load_container_class() {
        let file = write_config("[output]\ncontainer_class = \"analysis-output md\"\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(
            config.output.container_class.as_deref(),
            Some("analysis-output md")
        );
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn load_invalid_toml() {
        let file = write_config("[output\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn rejects_quote_in_container_class() {
        let file = write_config("[output]\ncontainer_class = 'x\" onclick=\"y'\n");
        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn rejects_blank_container_class() {
        let config = Config {
            output: OutputConfig {
                container_class: Some("  ".to_string()),
                ..OutputConfig::default()
            },
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }
}
