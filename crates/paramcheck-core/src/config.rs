//! Registry configuration files
//!
//! A registry is described declaratively and built once at startup or on
//! reload. Building is the configuration-time step: every inconsistency in
//! the description surfaces here as an [`Error`], never later while values
//! are being validated.
//!
//! ```toml
//! [parameters.timeout]
//! kind = "integer"
//! default = 3
//! validator = { type = "integer_range", min = 1, max = 30 }
//! ```
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::registry::{Parameter, ValidatorRegistry};
use crate::validation::{
    shared, AllOf, AnyOf, EnumValidator, FloatRangeValidator, IntegerRangeValidator,
    SharedValidator, StringValidator,
};
use crate::value::{Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick a format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => ConfigFormat::Yaml,
            Some("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Declarative description of a [`ValidatorRegistry`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterConfig>,
}

/// One parameter entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterConfig {
    /// Kind used to decode raw text input
    pub kind: ValueKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub validator: ValidatorConfig,
}

/// Validator description, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidatorConfig {
    IntegerRange {
        min: i64,
        max: i64,
    },
    FloatRange {
        min: f64,
        max: f64,
    },
    String {
        #[serde(default)]
        allow_empty: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pattern: Option<String>,
    },
    OneOf {
        values: Vec<serde_json::Value>,
    },
    AllOf {
        validators: Vec<ValidatorConfig>,
    },
    AnyOf {
        validators: Vec<ValidatorConfig>,
    },
}

impl ValidatorConfig {
    /// Construct the described validator
    pub fn build(&self) -> Result<SharedValidator> {
        let validator = match self {
            ValidatorConfig::IntegerRange { min, max } => {
                shared(IntegerRangeValidator::new(*min, *max)?)
            }
            ValidatorConfig::FloatRange { min, max } => {
                shared(FloatRangeValidator::new(*min, *max)?)
            }
            ValidatorConfig::String {
                allow_empty,
                max_length,
                pattern,
            } => {
                let mut validator = StringValidator::new().allow_empty(*allow_empty);
                if let Some(max_length) = max_length {
                    validator = validator.max_length(*max_length)?;
                }
                if let Some(pattern) = pattern {
                    validator = validator.pattern(pattern)?;
                }
                shared(validator)
            }
            ValidatorConfig::OneOf { values } => shared(EnumValidator::new(
                values.iter().cloned().map(Value::from),
            )?),
            ValidatorConfig::AllOf { validators } => {
                shared(AllOf::new(build_all(validators)?)?)
            }
            ValidatorConfig::AnyOf { validators } => {
                shared(AnyOf::new(build_all(validators)?)?)
            }
        };
        Ok(validator)
    }
}

fn build_all(configs: &[ValidatorConfig]) -> Result<Vec<SharedValidator>> {
    configs.iter().map(ValidatorConfig::build).collect()
}

impl ParameterConfig {
    /// Construct the parameter definition named `name`
    pub fn build(&self, name: &str) -> Result<Parameter> {
        let mut parameter = Parameter::with_shared(name, self.kind, self.validator.build()?);
        if self.required {
            parameter = parameter.required();
        }
        if let Some(default) = &self.default {
            parameter = parameter.with_default(Value::from(default.clone()));
        }
        if let Some(description) = &self.description {
            parameter = parameter.with_description(description.clone());
        }
        Ok(parameter)
    }
}

impl RegistryConfig {
    /// Load a registry description from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration_with(
                format!("Cannot read registry file {}", path.display()),
                e.into(),
            )
        })?;
        Self::from_str(&content, ConfigFormat::from_path(path))
    }

    /// Parse a registry description
    pub fn from_str(content: &str, format: ConfigFormat) -> Result<Self> {
        let config = match format {
            ConfigFormat::Json => serde_json::from_str(content)?,
            ConfigFormat::Yaml => serde_yaml::from_str(content)?,
            ConfigFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Build every parameter and assemble the registry.
    ///
    /// The first faulty parameter aborts the build; the error names it and
    /// keeps the underlying fault as its source.
    pub fn build(&self) -> Result<ValidatorRegistry> {
        let mut builder = ValidatorRegistry::builder();
        for (name, parameter) in &self.parameters {
            builder = parameter
                .build(name)
                .and_then(|p| builder.register(p))
                .map_err(|e| {
                    Error::configuration_with(format!("Invalid parameter '{}'", name), e.into())
                })?;
        }
        Ok(builder.build())
    }
}

/// Load and build a registry from a file in one step
pub fn load_registry(path: &Path) -> Result<ValidatorRegistry> {
    RegistryConfig::from_file(path)?.build()
}
