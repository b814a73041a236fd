//! Registry check command handler

use crate::cli::CheckArgs;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{OutputWriter, ParameterSummary, RegistrySummary};
use paramcheck_core::{RegistryConfig, Validator, ValidatorRegistry};
use tracing::{info, instrument, warn};

/// Handle the check command
#[instrument(skip(output), fields(registry = %args.registry.display()))]
pub fn handle_check(args: CheckArgs, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("check_command", &args.registry.display().to_string());

    if !args.registry.exists() {
        return Err(Error::FileNotFound {
            path: args.registry.clone(),
        });
    }

    output.info(&format!("Checking registry: {}", args.registry.display()))?;

    let registry = RegistryConfig::from_file(&args.registry)
        .and_then(|config| config.build())
        .map_err(|e| {
            warn!(error = %e, "Registry rejected");
            e
        })?;

    info!(parameters = registry.len(), "Registry is valid");
    output.success(&format!(
        "✓ Registry is valid: {} parameter(s)",
        registry.len()
    ))?;
    output.registry_summary(&summarize(&args.registry.display().to_string(), &registry))
}

/// Describe every parameter of a registry for display
pub(crate) fn summarize(source: &str, registry: &ValidatorRegistry) -> RegistrySummary {
    RegistrySummary {
        registry: source.to_string(),
        parameters: registry
            .parameters()
            .map(|p| ParameterSummary {
                name: p.name().to_string(),
                kind: p.kind().to_string(),
                required: p.is_required(),
                default: p
                    .default_value()
                    .and_then(|v| serde_json::to_value(v).ok()),
                rule: p.validator().describe(),
                description: p.description().map(str::to_string),
            })
            .collect(),
    }
}
