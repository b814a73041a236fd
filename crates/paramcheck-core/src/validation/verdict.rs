//! Validation outcomes
//!
//! A [`Verdict`] keeps the reason a value was rejected. Code that only wants
//! the old yes/no answer can call [`Verdict::is_accepted`] or convert it into
//! a `bool`.
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use super::error::{ValidationError, ValidationResult};
use crate::value::{Value, ValueKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome of one validate call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Accepted,
    RejectedWrongType {
        expected: Vec<ValueKind>,
        actual: ValueKind,
    },
    RejectedOutOfRange {
        min: Value,
        max: Value,
        actual: Value,
    },
    RejectedPattern {
        pattern: String,
    },
    RejectedLength {
        max: usize,
        actual: usize,
    },
    RejectedEmpty,
    RejectedNotAllowed {
        allowed: Vec<Value>,
    },
}

impl Verdict {
    /// Shorthand for a single expected kind
    pub fn wrong_type(expected: ValueKind, actual: ValueKind) -> Self {
        Verdict::RejectedWrongType {
            expected: vec![expected],
            actual,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    /// Short name of the rule behind a rejection
    pub fn rule(&self) -> Option<&'static str> {
        match self {
            Verdict::Accepted => None,
            Verdict::RejectedWrongType { .. } => Some("type"),
            Verdict::RejectedOutOfRange { .. } => Some("range"),
            Verdict::RejectedPattern { .. } => Some("pattern"),
            Verdict::RejectedLength { .. } => Some("max_length"),
            Verdict::RejectedEmpty => Some("non_empty"),
            Verdict::RejectedNotAllowed { .. } => Some("allowed_values"),
        }
    }

    /// Turn a rejection into a [`ValidationError`] for `path`.
    ///
    /// `value` is the candidate that produced this verdict and only feeds the
    /// "actual" side of the violation.
    pub fn into_result(self, path: &str, value: &Value) -> ValidationResult<()> {
        let Some(rule) = self.rule() else {
            return Ok(());
        };

        let (expected, actual) = match &self {
            Verdict::Accepted => return Ok(()),
            Verdict::RejectedWrongType { expected, actual } => {
                (join(expected.iter()), actual.to_string())
            }
            Verdict::RejectedOutOfRange { min, max, actual } => {
                (format!("value in [{}, {}]", min, max), actual.to_string())
            }
            Verdict::RejectedPattern { pattern } => {
                (format!("text matching /{}/", pattern), value.to_string())
            }
            Verdict::RejectedLength { max, actual } => (
                format!("at most {} character(s)", max),
                format!("{} character(s)", actual),
            ),
            Verdict::RejectedEmpty => ("non-empty text".to_string(), "empty text".to_string()),
            Verdict::RejectedNotAllowed { allowed } => {
                (format!("one of {}", join(allowed.iter())), value.to_string())
            }
        };

        Err(ValidationError::with_violations(
            path,
            self.to_string(),
            vec![ValidationError::create_violation(rule, expected, actual)],
        ))
    }
}

fn join<T: fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|i| i.to_string()).collect::<Vec<_>>().join(" | ")
}

impl From<Verdict> for bool {
    fn from(verdict: Verdict) -> Self {
        verdict.is_accepted()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted => write!(f, "accepted"),
            Verdict::RejectedWrongType { expected, actual } => {
                write!(f, "expected {}, got {}", join(expected.iter()), actual)
            }
            Verdict::RejectedOutOfRange { min, max, actual } => {
                write!(f, "{} is outside [{}, {}]", actual, min, max)
            }
            Verdict::RejectedPattern { pattern } => {
                write!(f, "text does not match /{}/", pattern)
            }
            Verdict::RejectedLength { max, actual } => {
                write!(f, "text is {} character(s) long, limit is {}", actual, max)
            }
            Verdict::RejectedEmpty => write!(f, "text cannot be empty"),
            Verdict::RejectedNotAllowed { allowed } => {
                write!(f, "value is not one of {}", join(allowed.iter()))
            }
        }
    }
}
