//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand,
//! plus the file loading they share.

mod check;
mod completions;
mod config;
mod validate;

pub use check::handle_check;
pub use completions::handle_completions;
pub use config::handle_config;
pub use validate::handle_validate;

use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Read a JSON, YAML or TOML document into a JSON value, chosen by extension
fn read_document(path: &Path) -> Result<serde_json::Value> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = content.len(), "Read document");

    let invalid = |expected: &str| Error::InvalidFormat {
        path: path.to_path_buf(),
        expected: expected.to_string(),
    };

    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|_| invalid("YAML")),
        Some("toml") => toml::from_str(&content).map_err(|_| invalid("TOML")),
        _ => serde_json::from_str(&content).map_err(|_| invalid("JSON")),
    }
}
