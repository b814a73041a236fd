//! Configuration management for the CLI
//!
//! Settings come from, in increasing precedence:
//! - Default values
//! - The first configuration file found (TOML/YAML/JSON)
//! - Environment variables
//! - Command-line arguments

use crate::cli::OutputFormat;
use crate::error::{Error, Result};
use clap::ValueEnum;
use paramcheck_core::ValidationMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Defaults for the validate command
    pub validation: ValidationDefaults,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingSettings,
}

/// Defaults applied when validate flags are absent
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationDefaults {
    /// Registry file used when neither --registry nor --preset is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry: Option<PathBuf>,

    /// Preset used when neither --registry nor --preset is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    pub mode: ValidationMode,

    pub fail_fast: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_errors: Option<usize>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: String,

    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration file section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level used when no -v flag is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Log format (compact, full, json)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Log file path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "human".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)
                .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?,
            _ => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        eprintln!("Warning: Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        match file {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Default configuration file paths to check, in order
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".paramcheck.toml"),
            PathBuf::from(".paramcheck.yaml"),
            PathBuf::from(".paramcheck.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let dir = config_dir.join("paramcheck");
            paths.push(dir.join("config.toml"));
            paths.push(dir.join("config.yaml"));
            paths.push(dir.join("config.json"));
        }

        paths
    }

    /// Output format from the configuration file, if it names a valid one
    pub fn output_format(&self) -> Option<OutputFormat> {
        OutputFormat::from_str(&self.output.format, true).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(suffix: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.validation.mode, ValidationMode::Strict);
        assert!(!config.validation.fail_fast);
        assert_eq!(config.output_format(), Some(OutputFormat::Human));
        assert!(config.logging.level.is_none());
    }

    #[test]
    fn test_toml_config() {
        let file = write_config(
            ".toml",
            r#"
[validation]
preset = "java-gateway"
mode = "lenient"
max_errors = 5

[output]
format = "json-pretty"
color = false
"#,
        );
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.validation.preset.as_deref(), Some("java-gateway"));
        assert_eq!(config.validation.mode, ValidationMode::Lenient);
        assert_eq!(config.validation.max_errors, Some(5));
        assert_eq!(config.output_format(), Some(OutputFormat::JsonPretty));
        assert!(!config.output.color);
    }

    #[test]
    fn test_yaml_config_partial() {
        let file = write_config(".yaml", "logging:\n  format: json\n");
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.logging.format.as_deref(), Some("json"));
        assert_eq!(config.output.format, "human");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_with_file(Some(&dir.path().join("none.toml"))).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_round_trips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.output.format, config.output.format);
    }
}
