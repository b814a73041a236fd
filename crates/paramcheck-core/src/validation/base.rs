//! Base validator trait
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use super::error::ValidationResult;
use super::verdict::Verdict;
use crate::value::{Value, ValueKind};
use std::fmt;
use std::sync::Arc;

/// A pure predicate over a candidate [`Value`].
///
/// Implementations are immutable after construction. `check` never panics:
/// a value of the wrong kind is a [`Verdict::RejectedWrongType`], not a fault.
pub trait Validator: fmt::Debug + Send + Sync {
    /// Decide whether `value` is acceptable and say why not if it isn't
    fn check(&self, value: &Value) -> Verdict;

    /// Human-readable description of the rule, e.g. `integer in [1, 30]`
    fn describe(&self) -> String;

    /// Whether any value of `kind` could pass this validator
    fn accepts_kind(&self, kind: ValueKind) -> bool;

    /// `true` iff [`Validator::check`] accepts the value
    fn validate(&self, value: &Value) -> bool {
        self.check(value).is_accepted()
    }

    /// Check and report a rejection as an error attributed to `path`
    fn validate_at(&self, path: &str, value: &Value) -> ValidationResult<()> {
        self.check(value).into_result(path, value)
    }
}

/// Validators held by registries and combinators
pub type SharedValidator = Arc<dyn Validator>;

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn accepts_kind(&self, kind: ValueKind) -> bool {
        (**self).accepts_kind(kind)
    }

    fn check(&self, value: &Value) -> Verdict {
        (**self).check(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn accepts_kind(&self, kind: ValueKind) -> bool {
        (**self).accepts_kind(kind)
    }

    fn check(&self, value: &Value) -> Verdict {
        (**self).check(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Wrap a concrete validator for storage in a registry
pub fn shared<V: Validator + 'static>(validator: V) -> SharedValidator {
    Arc::new(validator)
}
