//! Registry integration tests: loading descriptions from disk, batch
//! validation and snapshot reloads under concurrent readers.

use paramcheck_core::{
    load_registry, presets, Error, IntegerRangeValidator, Parameter, SharedRegistry,
    ValidationConfig, Validator, ValidatorRegistry, Value, ValueKind,
};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::Arc;
use tempfile::NamedTempFile;

fn write_temp(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn timeout_registry(max: i64) -> ValidatorRegistry {
    ValidatorRegistry::builder()
        .register(
            Parameter::new(
                "timeout",
                ValueKind::Integer,
                IntegerRangeValidator::new(1, max).unwrap(),
            )
            .with_default(3),
        )
        .unwrap()
        .build()
}

#[test]
fn test_load_yaml_registry_from_file() {
    let file = write_temp(
        ".yaml",
        r#"
parameters:
  listen_port:
    kind: integer
    default: 10052
    validator: { type: integer_range, min: 1024, max: 32767 }
  jmx_endpoint:
    kind: text
    required: true
    validator:
      type: string
      pattern: "^service:jmx:"
"#,
    );

    let registry = load_registry(file.path()).unwrap();
    assert_eq!(registry.names().collect::<Vec<_>>(), vec!["jmx_endpoint", "listen_port"]);
    assert!(registry.validate("listen_port", &Value::Integer(10052)));
    assert!(!registry.validate("jmx_endpoint", &Value::from("rmi://host")));
}

#[test]
fn test_load_missing_file_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_registry(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_invalid_default_in_file_is_rejected() {
    let file = write_temp(
        ".toml",
        r#"
[parameters.timeout]
kind = "integer"
default = 99
validator = { type = "integer_range", min = 1, max = 30 }
"#,
    );
    let err = load_registry(file.path()).unwrap_err();
    assert!(err.to_string().contains("timeout"));
}

#[test]
fn test_batch_validation_against_preset() {
    let registry = presets::java_gateway().unwrap();
    let params = BTreeMap::from([
        ("listen_port".to_string(), Value::Integer(80)),
        ("start_pollers".to_string(), Value::Integer(10)),
    ]);

    let errors = registry
        .validate_params(&params, &ValidationConfig::strict())
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    let error = errors.for_path("listen_port").unwrap();
    assert_eq!(error.rule(), Some("range"));
    assert_eq!(error.violations[0].expected, "value in [1024, 32767]");

    let params = BTreeMap::from([("start_pollers".to_string(), Value::Integer(10))]);
    let resolved = registry
        .validate_params(&params, &ValidationConfig::strict())
        .unwrap();
    assert_eq!(resolved.integer("start_pollers"), Some(10));
    assert_eq!(resolved.integer("listen_port"), Some(10052));
    assert!(resolved.is_default("timeout"));
}

#[test]
fn test_max_errors_caps_collection() {
    let registry = presets::java_gateway().unwrap();
    let params = BTreeMap::from([
        ("listen_port".to_string(), Value::Integer(0)),
        ("start_pollers".to_string(), Value::Integer(0)),
        ("timeout".to_string(), Value::Integer(0)),
    ]);
    let errors = registry
        .validate_params(&params, &ValidationConfig::strict().with_max_errors(2))
        .unwrap_err();
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_shared_validator_across_threads() {
    let validator = Arc::new(IntegerRangeValidator::new(0, 100).unwrap());

    std::thread::scope(|scope| {
        for t in 0..8i64 {
            let validator = Arc::clone(&validator);
            scope.spawn(move || {
                for v in -50..150i64 {
                    let candidate = v + t;
                    let expected = (0..=100).contains(&candidate);
                    assert_eq!(validator.validate(&Value::Integer(candidate)), expected);
                }
            });
        }
    });
}

#[test]
fn test_readers_see_whole_snapshots_during_reload() {
    let shared = SharedRegistry::new(timeout_registry(30));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..500 {
                    let snapshot = shared.snapshot();
                    let max = snapshot
                        .get("timeout")
                        .map(|p| p.validator().describe())
                        .unwrap();
                    // Either the old or the new rule, never a missing entry
                    assert!(max == "integer in [1, 30]" || max == "integer in [1, 60]");
                    assert!(snapshot.validate("timeout", &Value::Integer(30)));
                }
            });
        }

        scope.spawn(|| {
            for i in 0..50 {
                let max = if i % 2 == 0 { 60 } else { 30 };
                shared.reload(|| Ok(timeout_registry(max))).unwrap();
            }
        });
    });

    assert_eq!(shared.generation(), 50);
}
