//! Parameter registry: maps parameter names to validators
//!
//! A [`ValidatorRegistry`] is immutable once built. Runtime reloads go through
//! [`SharedRegistry`], which swaps whole snapshots.
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

pub mod parameter;
pub mod resolved;
pub mod snapshot;

pub use parameter::Parameter;
pub use resolved::ResolvedParams;
pub use snapshot::SharedRegistry;

use crate::error::{Error, Result};
use crate::validation::{
    ValidationConfig, ValidationError, ValidationErrors, ValidationMode, ValidationResult, Validator,
    Verdict,
};
use crate::value::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Immutable mapping from parameter name to [`Parameter`]
#[derive(Debug, Clone, Default)]
pub struct ValidatorRegistry {
    parameters: BTreeMap<String, Parameter>,
}

/// Builder that checks each registration before it lands in the registry
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    parameters: BTreeMap<String, Parameter>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter.
    ///
    /// Fails on a duplicate name, on a declared kind the validator can never
    /// accept, and on a default of another kind or one its own validator
    /// rejects.
    pub fn register(mut self, parameter: Parameter) -> Result<Self> {
        if self.parameters.contains_key(parameter.name()) {
            return Err(Error::DuplicateParameter {
                name: parameter.name().to_string(),
            });
        }

        let declared = parameter.kind();
        if !parameter.validator().accepts_kind(declared) {
            return Err(Error::KindMismatch {
                parameter: parameter.name().to_string(),
                declared,
                found: format!("its rule is {}", parameter.validator().describe()),
            });
        }

        if let Some(default) = parameter.default_value() {
            if default.kind() != declared {
                return Err(Error::KindMismatch {
                    parameter: parameter.name().to_string(),
                    declared,
                    found: format!("its default is {}", default.kind()),
                });
            }

            let verdict = parameter.check(default);
            if verdict.is_rejected() {
                return Err(Error::InvalidDefault {
                    parameter: parameter.name().to_string(),
                    message: verdict.to_string(),
                });
            }
        }

        debug!(
            parameter = parameter.name(),
            rule = %parameter.validator().describe(),
            "Registered parameter"
        );
        self.parameters.insert(parameter.name().to_string(), parameter);
        Ok(self)
    }

    pub fn build(self) -> ValidatorRegistry {
        debug!(parameters = self.parameters.len(), "Built validator registry");
        ValidatorRegistry {
            parameters: self.parameters,
        }
    }
}

impl ValidatorRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values()
    }

    /// Verdict for `value` under the named parameter, `None` if unknown
    pub fn check(&self, name: &str, value: &Value) -> Option<Verdict> {
        self.get(name).map(|p| p.check(value))
    }

    /// `true` iff the parameter exists and accepts `value`
    pub fn validate(&self, name: &str, value: &Value) -> bool {
        self.check(name, value).is_some_and(|v| v.is_accepted())
    }

    /// Resolve one parameter into a value usable downstream.
    ///
    /// An absent value falls back to the default; an absent required value is
    /// a rejection. `Ok(None)` means an optional parameter without default was
    /// not supplied.
    pub fn resolve(&self, name: &str, value: Option<&Value>) -> ValidationResult<Option<Value>> {
        let parameter = self.get(name).ok_or_else(|| unknown_parameter(name))?;

        match value {
            Some(value) => {
                parameter.check(value).into_result(name, value)?;
                Ok(Some(value.clone()))
            }
            None => match parameter.default_value() {
                Some(default) => Ok(Some(default.clone())),
                None if parameter.is_required() => Err(missing_parameter(name)),
                None => Ok(None),
            },
        }
    }

    /// Decode raw text by the parameter's kind, then resolve it
    pub fn resolve_raw(&self, name: &str, raw: &str) -> ValidationResult<Value> {
        let parameter = self.get(name).ok_or_else(|| unknown_parameter(name))?;
        let value = parameter.decode(raw);
        parameter.check(&value).into_result(name, &value)?;
        Ok(value)
    }

    /// Validate a whole parameter set.
    ///
    /// Supplied values are checked in name order, then defaults fill in
    /// whatever was not supplied. Collection stops early according to
    /// `config`.
    pub fn validate_params(
        &self,
        params: &BTreeMap<String, Value>,
        config: &ValidationConfig,
    ) -> std::result::Result<ResolvedParams, ValidationErrors> {
        let mut resolved = ResolvedParams::default();
        let mut errors = ValidationErrors::new();

        for (name, value) in params {
            let Some(parameter) = self.get(name) else {
                match config.mode {
                    ValidationMode::Strict => {
                        debug!(parameter = %name, "Rejected unknown parameter");
                        errors.add(unknown_parameter(name));
                    }
                    ValidationMode::Lenient => {
                        debug!(parameter = %name, "Ignoring unknown parameter");
                        continue;
                    }
                }
                if config.should_stop(errors.len()) {
                    return Err(errors);
                }
                continue;
            };

            match parameter.check(value).into_result(name, value) {
                Ok(()) => resolved.insert(name, value.clone()),
                Err(error) => {
                    debug!(parameter = %name, reason = %error.message, "Rejected parameter");
                    errors.add(error);
                    if config.should_stop(errors.len()) {
                        return Err(errors);
                    }
                }
            }
        }

        for parameter in self.parameters() {
            if params.contains_key(parameter.name()) {
                continue;
            }
            match (parameter.default_value(), parameter.is_required()) {
                (Some(default), _) => resolved.insert_default(parameter.name(), default.clone()),
                (None, true) => {
                    errors.add(missing_parameter(parameter.name()));
                    if config.should_stop(errors.len()) {
                        break;
                    }
                }
                (None, false) => {}
            }
        }

        errors.into_result().map(|()| resolved)
    }
}

fn unknown_parameter(name: &str) -> ValidationError {
    ValidationError::with_violations(
        name,
        "No validator registered for parameter",
        vec![ValidationError::create_violation(
            "known_parameter",
            "a registered parameter",
            name,
        )],
    )
}

fn missing_parameter(name: &str) -> ValidationError {
    ValidationError::with_violations(
        name,
        "Required parameter is missing",
        vec![ValidationError::create_violation("required", "a value", "nothing")],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{IntegerRangeValidator, StringValidator};
    use crate::value::ValueKind;

    fn registry() -> ValidatorRegistry {
        ValidatorRegistry::builder()
            .register(
                Parameter::new(
                    "timeout",
                    ValueKind::Integer,
                    IntegerRangeValidator::new(1, 30).unwrap(),
                )
                .with_default(3),
            )
            .unwrap()
            .register(
                Parameter::new("jmx_endpoint", ValueKind::Text, StringValidator::new()).required(),
            )
            .unwrap()
            .register(Parameter::new(
                "username",
                ValueKind::Text,
                StringValidator::new().allow_empty(true),
            ))
            .unwrap()
            .build()
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let err = ValidatorRegistry::builder()
            .register(Parameter::new("a", ValueKind::Integer, IntegerRangeValidator::port()))
            .unwrap()
            .register(Parameter::new("a", ValueKind::Integer, IntegerRangeValidator::port()))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateParameter { name } if name == "a"));
    }

    #[test]
    fn test_invalid_default_fails() {
        let err = ValidatorRegistry::builder()
            .register(
                Parameter::new(
                    "timeout",
                    ValueKind::Integer,
                    IntegerRangeValidator::new(1, 30).unwrap(),
                )
                .with_default(60),
            )
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDefault { .. }));
    }

    #[test]
    fn test_kind_the_validator_cannot_accept_fails() {
        let err = ValidatorRegistry::builder()
            .register(Parameter::new(
                "timeout",
                ValueKind::Text,
                IntegerRangeValidator::new(1, 30).unwrap(),
            ))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::KindMismatch { ref parameter, declared: ValueKind::Text, .. } if parameter == "timeout"
        ));
        assert!(err.to_string().contains("integer in [1, 30]"));
    }

    #[test]
    fn test_default_of_another_kind_fails() {
        let err = ValidatorRegistry::builder()
            .register(
                Parameter::new("jmx_endpoint", ValueKind::Text, StringValidator::new())
                    .with_default(3),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            Error::KindMismatch { declared: ValueKind::Text, ref found, .. } if found == "its default is integer"
        ));
    }

    #[test]
    fn test_check_and_validate() {
        let registry = registry();
        assert_eq!(registry.check("timeout", &Value::Integer(3)), Some(Verdict::Accepted));
        assert!(registry.check("nope", &Value::Integer(3)).is_none());
        assert!(!registry.validate("nope", &Value::Integer(3)));
        assert!(!registry.validate("timeout", &Value::Integer(31)));
    }

    #[test]
    fn test_resolve_defaults_and_required() {
        let registry = registry();
        assert_eq!(registry.resolve("timeout", None).unwrap(), Some(Value::Integer(3)));
        assert_eq!(registry.resolve("username", None).unwrap(), None);

        let err = registry.resolve("jmx_endpoint", None).unwrap_err();
        assert_eq!(err.rule(), Some("required"));

        let err = registry.resolve("unknown", Some(&Value::Null)).unwrap_err();
        assert_eq!(err.rule(), Some("known_parameter"));
    }

    #[test]
    fn test_resolve_raw_decodes_by_kind() {
        let registry = registry();
        assert_eq!(registry.resolve_raw("timeout", "10").unwrap(), Value::Integer(10));

        let err = registry.resolve_raw("timeout", "ten").unwrap_err();
        assert_eq!(err.rule(), Some("type"));

        let err = registry.resolve_raw("timeout", "31").unwrap_err();
        assert_eq!(err.rule(), Some("range"));
    }

    #[test]
    fn test_validate_params_fills_defaults() {
        let registry = registry();
        let params = BTreeMap::from([("jmx_endpoint".to_string(), Value::from("service:jmx"))]);

        let resolved = registry
            .validate_params(&params, &ValidationConfig::strict())
            .unwrap();
        assert_eq!(resolved.integer("timeout"), Some(3));
        assert!(resolved.is_default("timeout"));
        assert_eq!(resolved.text("jmx_endpoint"), Some("service:jmx"));
        assert!(!resolved.is_default("jmx_endpoint"));
        assert!(resolved.get("username").is_none());
    }

    #[test]
    fn test_validate_params_collects_errors() {
        let registry = registry();
        let params = BTreeMap::from([
            ("timeout".to_string(), Value::Integer(99)),
            ("extra".to_string(), Value::Bool(true)),
        ]);

        let errors = registry
            .validate_params(&params, &ValidationConfig::strict())
            .unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.for_path("extra").and_then(|e| e.rule()), Some("known_parameter"));
        assert_eq!(errors.for_path("timeout").and_then(|e| e.rule()), Some("range"));
        assert_eq!(errors.for_path("jmx_endpoint").and_then(|e| e.rule()), Some("required"));

        let errors = registry
            .validate_params(&params, &ValidationConfig::lenient())
            .unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.for_path("extra").is_none());

        let errors = registry
            .validate_params(&params, &ValidationConfig::strict().with_fail_fast())
            .unwrap_err();
        assert_eq!(errors.len(), 1);
    }
}
