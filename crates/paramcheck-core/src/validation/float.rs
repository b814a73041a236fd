//! Floating-point range validator
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use super::base::Validator;
use super::verdict::Verdict;
use crate::error::{Error, Result};
use crate::value::{Value, ValueKind};

/// Accepts floats inside an inclusive `[min, max]` range.
///
/// Integers are not widened: a float parameter must arrive as a float.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRangeValidator {
    min: f64,
    max: f64,
}

impl FloatRangeValidator {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::InvalidBounds {
                min: min.to_string(),
                max: max.to_string(),
            });
        }

        tracing::debug!(min, max, "Built float range validator");
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}

impl Validator for FloatRangeValidator {
    fn accepts_kind(&self, kind: ValueKind) -> bool {
        kind == ValueKind::Float
    }

    fn check(&self, value: &Value) -> Verdict {
        let Value::Float(v) = value else {
            return Verdict::wrong_type(ValueKind::Float, value.kind());
        };

        // NaN fails both comparisons
        if self.min <= *v && *v <= self.max {
            Verdict::Accepted
        } else {
            Verdict::RejectedOutOfRange {
                min: Value::Float(self.min),
                max: Value::Float(self.max),
                actual: Value::Float(*v),
            }
        }
    }

    fn describe(&self) -> String {
        format!("float in [{}, {}]", self.min, self.max)
    }
}
