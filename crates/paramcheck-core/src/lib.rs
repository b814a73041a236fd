//! Paramcheck Core - input validation for gateway configuration parameters
//!
//! Candidate values arrive as a tagged [`Value`]. Validators are pure
//! predicates over those values, fixed at construction, and a
//! [`ValidatorRegistry`] maps parameter names to the validator, kind and
//! default that govern them.
//!
//! # Main Components
//!
//! - **Validation**: the [`Validator`] contract, [`Verdict`] and the built-in
//!   variants (integer and float ranges, strings, enumerations, combinators)
//! - **Registry**: name-to-validator lookup, defaults and batch validation,
//!   plus [`SharedRegistry`] for snapshot reloads
//! - **Config**: JSON, YAML and TOML registry descriptions
//! - **Error Handling**: configuration-time faults using `thiserror` and `anyhow`
//!
//! # Example
//!
//! ```
//! use paramcheck_core::{IntegerRangeValidator, Validator, Value};
//!
//! let percent = IntegerRangeValidator::new(0, 100)?;
//! assert!(percent.validate(&Value::Integer(100)));
//! assert!(!percent.validate(&Value::Integer(101)));
//! assert!(!percent.validate(&Value::from("50")));
//! # Ok::<(), paramcheck_core::Error>(())
//! ```
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

pub mod config;
pub mod error;
pub mod presets;
pub mod registry;
pub mod validation;
pub mod value;

// Re-export main types for convenience
pub use config::{load_registry, ConfigFormat, ParameterConfig, RegistryConfig, ValidatorConfig};
pub use error::{Error, Result};
pub use registry::{Parameter, RegistryBuilder, ResolvedParams, SharedRegistry, ValidatorRegistry};
pub use validation::{
    shared, AllOf, AnyOf, EnumValidator, FloatRangeValidator, IntegerRangeValidator,
    SharedValidator, StringValidator, ValidationConfig, ValidationError, ValidationErrors,
    ValidationMode, ValidationResult, Validator, Verdict, Violation,
};
pub use value::{Value, ValueKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
