//! Validator contract and built-in variants
//!
//! Every variant implements [`Validator`], so a registry can hold them as
//! [`SharedValidator`] trait objects without knowing their concrete types:
//!
//! - **IntegerRangeValidator**: inclusive integer bounds
//! - **FloatRangeValidator**: inclusive float bounds
//! - **StringValidator**: emptiness, maximum length and regex rules
//! - **EnumValidator**: membership in a fixed set
//! - **AllOf / AnyOf**: combinators over other validators
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod composite;
pub mod enumeration;
pub mod error;
pub mod float;
pub mod integer;
pub mod string;
pub mod verdict;

// Re-export commonly used types
pub use base::{shared, SharedValidator, Validator};
pub use composite::{AllOf, AnyOf};
pub use enumeration::EnumValidator;
pub use error::{ValidationError, ValidationErrors, ValidationResult, Violation};
pub use float::FloatRangeValidator;
pub use integer::IntegerRangeValidator;
pub use string::StringValidator;
pub use verdict::Verdict;

/// How batch validation treats parameters that have no registered validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Unknown parameters are rejected
    #[default]
    Strict,
    /// Unknown parameters are ignored
    Lenient,
}

/// Validation configuration for batch operations
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Validation mode to use
    pub mode: ValidationMode,
    /// Whether to stop on first error or collect all errors
    pub fail_fast: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Strict,
            fail_fast: false,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration for strict validation
    pub fn strict() -> Self {
        Self::default()
    }

    /// Create a configuration that ignores unknown parameters
    pub fn lenient() -> Self {
        Self {
            mode: ValidationMode::Lenient,
            ..Self::default()
        }
    }

    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }

    /// Whether collection should stop after `collected` errors
    pub(crate) fn should_stop(&self, collected: usize) -> bool {
        (self.fail_fast && collected > 0) || (self.max_errors > 0 && collected >= self.max_errors)
    }
}
