//! Parameter definitions held by a registry
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use crate::validation::{SharedValidator, Validator, Verdict};
use crate::value::{Value, ValueKind};
use std::sync::Arc;

/// A named parameter: its expected kind, default and validator
#[derive(Debug, Clone)]
pub struct Parameter {
    name: String,
    kind: ValueKind,
    required: bool,
    default: Option<Value>,
    description: Option<String>,
    validator: SharedValidator,
}

impl Parameter {
    pub fn new<V>(name: impl Into<String>, kind: ValueKind, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        Self::with_shared(name, kind, Arc::new(validator))
    }

    pub fn with_shared(name: impl Into<String>, kind: ValueKind, validator: SharedValidator) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            default: None,
            description: None,
            validator,
        }
    }

    /// Mark the parameter as mandatory when it has no default
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn validator(&self) -> &SharedValidator {
        &self.validator
    }

    pub fn check(&self, value: &Value) -> Verdict {
        self.validator.check(value)
    }

    /// Decode raw text according to this parameter's kind
    pub fn decode(&self, raw: &str) -> Value {
        Value::decode(self.kind, raw)
    }
}
