//! Bounded-integer validator
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use super::base::Validator;
use super::verdict::Verdict;
use crate::error::{Error, Result};
use crate::value::{Value, ValueKind};

/// Accepts integers inside an inclusive `[min, max]` range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerRangeValidator {
    min: i64,
    max: i64,
}

impl IntegerRangeValidator {
    /// Build a validator for `[min, max]`.
    ///
    /// Fails with [`Error::InvalidBounds`] when `min > max`; the bounds are
    /// never swapped.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidBounds {
                min: min.to_string(),
                max: max.to_string(),
            });
        }

        tracing::debug!(min, max, "Built integer range validator");
        Ok(Self { min, max })
    }

    /// TCP/UDP port numbers, `[1, 65535]`
    pub fn port() -> Self {
        Self { min: 1, max: 65535 }
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Validator for IntegerRangeValidator {
    fn accepts_kind(&self, kind: ValueKind) -> bool {
        kind == ValueKind::Integer
    }

    fn check(&self, value: &Value) -> Verdict {
        let Value::Integer(v) = value else {
            return Verdict::wrong_type(ValueKind::Integer, value.kind());
        };

        if self.contains(*v) {
            Verdict::Accepted
        } else {
            Verdict::RejectedOutOfRange {
                min: Value::Integer(self.min),
                max: Value::Integer(self.max),
                actual: Value::Integer(*v),
            }
        }
    }

    fn describe(&self) -> String {
        format!("integer in [{}, {}]", self.min, self.max)
    }
}
