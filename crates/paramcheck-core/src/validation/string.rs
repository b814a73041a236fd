//! Text validator with emptiness, length and pattern rules
//!
//! Rules are applied in order: emptiness, maximum length, pattern. Empty text
//! that is allowed is accepted without looking at the remaining rules.
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use super::base::Validator;
use super::verdict::Verdict;
use crate::error::{Error, Result};
use crate::value::{Value, ValueKind};
use regex::Regex;

/// Accepts text values
#[derive(Debug, Clone)]
pub struct StringValidator {
    allow_empty: bool,
    max_length: Option<usize>,
    pattern: Option<Regex>,
}

impl StringValidator {
    /// Any non-empty text
    pub fn new() -> Self {
        Self {
            allow_empty: false,
            max_length: None,
            pattern: None,
        }
    }

    /// Accept the empty string
    pub fn allow_empty(mut self, allow: bool) -> Self {
        self.allow_empty = allow;
        self
    }

    /// Limit the length in characters; zero is rejected
    pub fn max_length(mut self, max_length: usize) -> Result<Self> {
        if max_length == 0 {
            return Err(Error::InvalidLength { max_length });
        }
        self.max_length = Some(max_length);
        Ok(self)
    }

    /// Require the text to contain a match of `pattern`
    pub fn pattern(mut self, pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        self.pattern = Some(regex);
        Ok(self)
    }
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for StringValidator {
    fn accepts_kind(&self, kind: ValueKind) -> bool {
        kind == ValueKind::Text
    }

    fn check(&self, value: &Value) -> Verdict {
        let Value::Text(text) = value else {
            return Verdict::wrong_type(ValueKind::Text, value.kind());
        };

        if text.is_empty() {
            return if self.allow_empty {
                Verdict::Accepted
            } else {
                Verdict::RejectedEmpty
            };
        }

        if let Some(max) = self.max_length {
            let length = text.chars().count();
            if length > max {
                return Verdict::RejectedLength {
                    max,
                    actual: length,
                };
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(text) {
                return Verdict::RejectedPattern {
                    pattern: pattern.as_str().to_string(),
                };
            }
        }

        Verdict::Accepted
    }

    fn describe(&self) -> String {
        let mut parts = vec![if self.allow_empty {
            "text".to_string()
        } else {
            "non-empty text".to_string()
        }];
        if let Some(max) = self.max_length {
            parts.push(format!("at most {} chars", max));
        }
        if let Some(pattern) = &self.pattern {
            parts.push(format!("matching /{}/", pattern.as_str()));
        }
        parts.join(", ")
    }
}
