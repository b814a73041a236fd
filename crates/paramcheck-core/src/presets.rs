//! Built-in registries
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use crate::registry::{Parameter, ValidatorRegistry};
use crate::validation::IntegerRangeValidator;
use crate::value::ValueKind;

/// Names accepted by [`by_name`]
pub const PRESET_NAMES: &[&str] = &["java-gateway"];

/// Startup parameters of the Java gateway process
pub fn java_gateway() -> Result<ValidatorRegistry> {
    ValidatorRegistry::builder()
        .register(
            Parameter::new(
                "listen_port",
                ValueKind::Integer,
                IntegerRangeValidator::new(1024, 32767)?,
            )
            .with_default(10052)
            .with_description("Port the gateway listens on"),
        )?
        .register(
            Parameter::new(
                "start_pollers",
                ValueKind::Integer,
                IntegerRangeValidator::new(1, 1000)?,
            )
            .with_default(5)
            .with_description("Number of worker threads to start"),
        )?
        .register(
            Parameter::new("timeout", ValueKind::Integer, IntegerRangeValidator::new(1, 30)?)
                .with_default(3)
                .with_description("Seconds to wait for network operations"),
        )
        .map(|builder| builder.build())
}

/// Look up a preset by its CLI name
pub fn by_name(name: &str) -> Option<Result<ValidatorRegistry>> {
    match name {
        "java-gateway" => Some(java_gateway()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    #[test]
    fn test_java_gateway_bounds() {
        let registry = java_gateway().unwrap();
        assert_eq!(registry.len(), 3);

        assert!(registry.validate("listen_port", &Value::Integer(1024)));
        assert!(registry.validate("listen_port", &Value::Integer(32767)));
        assert!(!registry.validate("listen_port", &Value::Integer(1023)));
        assert!(!registry.validate("listen_port", &Value::Integer(32768)));

        assert!(!registry.validate("start_pollers", &Value::Integer(0)));
        assert!(registry.validate("start_pollers", &Value::Integer(1000)));

        assert!(registry.validate("timeout", &Value::Integer(30)));
        assert!(!registry.validate("timeout", &Value::Integer(31)));
    }

    #[test]
    fn test_java_gateway_defaults() {
        let registry = java_gateway().unwrap();
        assert_eq!(
            registry.resolve("listen_port", None).unwrap(),
            Some(Value::Integer(10052))
        );
        assert_eq!(registry.resolve("start_pollers", None).unwrap(), Some(Value::Integer(5)));
        assert_eq!(registry.resolve("timeout", None).unwrap(), Some(Value::Integer(3)));
    }

    #[test]
    fn test_by_name() {
        assert!(by_name("java-gateway").is_some());
        assert!(by_name("server").is_none());
        for name in PRESET_NAMES {
            assert!(by_name(name).unwrap().is_ok());
        }
    }
}
