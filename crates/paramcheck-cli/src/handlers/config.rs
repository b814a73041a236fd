//! Configuration command handlers

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigShowArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::OutputWriter;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
    }
}

/// Print the effective configuration
fn handle_config_show(
    args: ConfigShowArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let content = render(config, args.format)?;
    output.writeln(content.trim_end())
}

fn render(config: &Config, format: ConfigFormat) -> Result<String> {
    Ok(match format {
        ConfigFormat::Toml => toml::to_string_pretty(config)?,
        ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_formats() {
        let mut config = Config::default();
        config.validation.preset = Some("java-gateway".to_string());

        let toml_text = render(&config, ConfigFormat::Toml).unwrap();
        assert!(toml_text.contains("[validation]"));
        assert!(toml_text.contains("preset = \"java-gateway\""));
        assert!(toml_text.contains("mode = \"strict\""));

        let json: serde_json::Value =
            serde_json::from_str(&render(&config, ConfigFormat::Json).unwrap()).unwrap();
        assert_eq!(json["output"]["format"], "human");

        let yaml = render(&config, ConfigFormat::Yaml).unwrap();
        assert!(yaml.contains("fail_fast: false"));
    }
}
