//! Error types for the paramcheck core library
//!
//! Everything in this module is a configuration-time fault: a validator or a
//! registry was described with inconsistent parameters. Rejected candidate
//! values are not errors here; they are reported as [`crate::Verdict`]s or as
//! [`crate::validation::ValidationError`]s.
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use crate::value::ValueKind;
use thiserror::Error;

/// Main error type for paramcheck construction and configuration
#[derive(Error, Debug)]
pub enum Error {
    /// Range validator built with `min > max` or non-finite bounds
    #[error("Invalid validation bounds: {min} and {max}")]
    InvalidBounds { min: String, max: String },

    /// String validator built with a pattern that does not compile
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// String validator built with a zero maximum length
    #[error("Invalid maximum length: {max_length}")]
    InvalidLength { max_length: usize },

    /// Enumeration validator built without any allowed value
    #[error("Allowed value set cannot be empty")]
    EmptyAllowedSet,

    /// Enumeration validator given a value kind it cannot compare
    #[error("Unsupported allowed value of kind {kind}")]
    UnsupportedAllowedValue { kind: String },

    /// Combinator built without members
    #[error("Combinator '{combinator}' requires at least one validator")]
    EmptyComposite { combinator: &'static str },

    /// Two parameters registered under the same name
    #[error("Parameter '{name}' is already registered")]
    DuplicateParameter { name: String },

    /// Declared kind that the validator or the default contradicts
    #[error("Parameter '{parameter}' is declared {declared} but {found}")]
    KindMismatch {
        parameter: String,
        declared: ValueKind,
        found: String,
    },

    /// Default value rejected by the parameter's own validator
    #[error("Invalid default for parameter '{parameter}': {message}")]
    InvalidDefault { parameter: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parsing errors
    #[error("YAML error: {message}")]
    Yaml {
        message: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// TOML parsing errors
    #[error("TOML error: {message}")]
    Toml {
        message: String,
        #[source]
        source: toml::de::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error without an underlying cause
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error wrapping a cause
    pub fn configuration_with(message: impl Into<String>, source: anyhow::Error) -> Self {
        Error::Configuration {
            message: message.into(),
            source: Some(source),
        }
    }
}

// Conversion implementations
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Yaml {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_error_display() {
        let err = Error::InvalidBounds {
            min: "10".to_string(),
            max: "1".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid validation bounds: 10 and 1");
    }

    #[test]
    fn test_configuration_error_keeps_source() {
        let err = Error::configuration_with("bad registry", anyhow::anyhow!("missing field"));
        assert!(err.to_string().contains("bad registry"));
        assert!(std::error::Error::source(&err).is_some());

        let err = Error::configuration("no source");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io { .. }));
    }
}
