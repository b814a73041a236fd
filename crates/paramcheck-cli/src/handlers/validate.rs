//! Validate command handler

use super::read_document;
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::{current_request_id, timing::Timer};
use crate::output::{OutputWriter, ParameterOutcome, Status, ValidationReport};
use paramcheck_core::{
    presets, ValidationConfig, ValidationError, ValidationMode, ValidatorRegistry, Value,
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Handle the validate command
#[instrument(skip(config, output), fields(registry = ?args.registry, preset = ?args.preset))]
pub fn handle_validate(
    args: ValidateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let _timer = Timer::new("validate_command");

    let (registry, source) = {
        let _load_timer = Timer::new("registry_loading");
        resolve_registry(&args, config)?
    };
    output.info(&format!("Validating against {}", source))?;

    let params = collect_params(&args, &registry)?;
    let validation = validation_config(&args, config);
    debug!(
        parameters = params.len(),
        mode = ?validation.mode,
        fail_fast = validation.fail_fast,
        max_errors = validation.max_errors,
        "Validating parameter set"
    );

    let mut report = build_report(&registry, &source, &params, &validation);
    report.redact();
    output.validation_report(&report)?;

    let ignored = report
        .parameters
        .iter()
        .filter(|p| p.status == Status::Ignored)
        .count();
    if ignored > 0 {
        output.warning(&format!("Ignored {} unknown parameter(s)", ignored))?;
    }

    if report.valid {
        info!("All parameters accepted");
        output.success("✓ All parameters accepted")?;
        Ok(())
    } else {
        let count = report.rejected();
        warn!(rejected = count, "Parameter validation failed");
        output.error(&format!("✗ {} parameter(s) rejected", count))?;
        Err(Error::Rejected { count })
    }
}

/// Pick the registry: flags first, then the configuration file
fn resolve_registry(args: &ValidateArgs, config: &Config) -> Result<(ValidatorRegistry, String)> {
    if let Some(path) = &args.registry {
        return load_file(path);
    }
    if let Some(preset) = args.preset {
        return load_preset(preset.name());
    }
    if let Some(path) = &config.validation.registry {
        return load_file(path);
    }
    if let Some(name) = &config.validation.preset {
        return load_preset(name);
    }
    Err(Error::invalid_args(
        "no registry given, pass --registry FILE or --preset NAME",
    ))
}

fn load_file(path: &Path) -> Result<(ValidatorRegistry, String)> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let registry = paramcheck_core::load_registry(path)?;
    Ok((registry, path.display().to_string()))
}

fn load_preset(name: &str) -> Result<(ValidatorRegistry, String)> {
    let registry = presets::by_name(name).ok_or_else(|| Error::UnknownPreset {
        name: name.to_string(),
    })??;
    Ok((registry, format!("preset {}", name)))
}

/// Parameters from the document, then `-p` overrides decoded by kind
fn collect_params(
    args: &ValidateArgs,
    registry: &ValidatorRegistry,
) -> Result<BTreeMap<String, Value>> {
    let mut params = BTreeMap::new();

    if let Some(path) = &args.params_file {
        let serde_json::Value::Object(document) = read_document(path)? else {
            return Err(Error::InvalidFormat {
                path: path.clone(),
                expected: "a table of parameters".to_string(),
            });
        };
        params.extend(
            document
                .into_iter()
                .map(|(name, value)| (name, Value::from(value))),
        );
    }

    for (name, raw) in &args.params {
        let value = match registry.get(name) {
            Some(parameter) => parameter.decode(raw),
            None => Value::Text(raw.clone()),
        };
        debug!(parameter = %name, kind = %value.kind(), "Applied override");
        params.insert(name.clone(), value);
    }

    Ok(params)
}

fn validation_config(args: &ValidateArgs, config: &Config) -> ValidationConfig {
    let defaults = &config.validation;
    ValidationConfig {
        mode: args.mode.map(Into::into).unwrap_or(defaults.mode),
        fail_fast: !args.no_fail_fast && (args.fail_fast || defaults.fail_fast),
        max_errors: args.max_errors.or(defaults.max_errors).unwrap_or(0),
    }
}

/// Run batch validation and describe every parameter involved.
///
/// Supplied parameters are listed first in name order, then registry
/// parameters that were filled from defaults or reported missing.
fn build_report(
    registry: &ValidatorRegistry,
    source: &str,
    params: &BTreeMap<String, Value>,
    validation: &ValidationConfig,
) -> ValidationReport {
    let result = registry.validate_params(params, validation);
    let errors = result.as_ref().err();
    let stopped_early = errors.is_some();

    let mut parameters = Vec::new();
    for (name, value) in params {
        let row = match (errors.and_then(|e| e.for_path(name)), registry.check(name, value)) {
            (Some(error), _) => rejected(name, Some(value), error),
            (None, Some(verdict)) if verdict.is_accepted() => {
                outcome(name, Status::Accepted, Some(value))
            }
            // Rejected but not collected: collection stopped before it
            (None, Some(_)) => outcome(name, Status::Skipped, Some(value)),
            (None, None) if validation.mode == ValidationMode::Strict && stopped_early => {
                outcome(name, Status::Skipped, Some(value))
            }
            (None, None) => outcome(name, Status::Ignored, Some(value)),
        };
        parameters.push(row);
    }

    for parameter in registry.parameters() {
        let name = parameter.name();
        if params.contains_key(name) {
            continue;
        }
        match (errors.and_then(|e| e.for_path(name)), parameter.default_value()) {
            (Some(error), _) => parameters.push(rejected(name, None, error)),
            (None, Some(default)) => parameters.push(outcome(name, Status::Defaulted, Some(default))),
            (None, None) => {}
        }
    }

    ValidationReport {
        request_id: current_request_id().map(str::to_string),
        registry: source.to_string(),
        valid: result.is_ok(),
        parameters,
    }
}

fn outcome(name: &str, status: Status, value: Option<&Value>) -> ParameterOutcome {
    ParameterOutcome {
        name: name.to_string(),
        status,
        value: value.and_then(|v| serde_json::to_value(v).ok()),
        rule: None,
        message: None,
    }
}

fn rejected(
    name: &str,
    value: Option<&Value>,
    error: &ValidationError,
) -> ParameterOutcome {
    ParameterOutcome {
        rule: error.rule().map(str::to_string),
        message: Some(error.message.clone()),
        ..outcome(name, Status::Rejected, value)
    }
}
