//! Fixed-enumeration validator
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use super::base::Validator;
use super::verdict::Verdict;
use crate::error::{Error, Result};
use crate::value::{Value, ValueKind};

/// Accepts values from a fixed set of booleans, integers or texts
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValidator {
    allowed: Vec<Value>,
    kinds: Vec<ValueKind>,
}

impl EnumValidator {
    pub fn new<I, V>(allowed: I) -> Result<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut values: Vec<Value> = Vec::new();
        for value in allowed.into_iter().map(Into::into) {
            match value.kind() {
                ValueKind::Bool | ValueKind::Integer | ValueKind::Text => {}
                kind => {
                    return Err(Error::UnsupportedAllowedValue {
                        kind: kind.to_string(),
                    })
                }
            }
            if !values.contains(&value) {
                values.push(value);
            }
        }

        if values.is_empty() {
            return Err(Error::EmptyAllowedSet);
        }

        let mut kinds: Vec<ValueKind> = values.iter().map(Value::kind).collect();
        kinds.sort();
        kinds.dedup();

        tracing::debug!(count = values.len(), "Built enumeration validator");
        Ok(Self {
            allowed: values,
            kinds,
        })
    }

    pub fn allowed(&self) -> &[Value] {
        &self.allowed
    }
}

impl Validator for EnumValidator {
    fn accepts_kind(&self, kind: ValueKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn check(&self, value: &Value) -> Verdict {
        if !self.kinds.contains(&value.kind()) {
            return Verdict::RejectedWrongType {
                expected: self.kinds.clone(),
                actual: value.kind(),
            };
        }

        if self.allowed.contains(value) {
            Verdict::Accepted
        } else {
            Verdict::RejectedNotAllowed {
                allowed: self.allowed.clone(),
            }
        }
    }

    fn describe(&self) -> String {
        let items = self
            .allowed
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("one of {{{}}}", items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_membership() {
        let v = EnumValidator::new(["jmx", "web"]).unwrap();
        assert!(v.validate(&Value::from("jmx")));
        assert!(matches!(
            v.check(&Value::from("snmp")),
            Verdict::RejectedNotAllowed { .. }
        ));
    }

    #[test]
    fn test_kind_mismatch_is_wrong_type() {
        let v = EnumValidator::new([1i64, 2, 3]).unwrap();
        assert_eq!(
            v.check(&Value::from("1")),
            Verdict::wrong_type(ValueKind::Integer, ValueKind::Text)
        );
    }

    #[test]
    fn test_mixed_kinds() {
        let v = EnumValidator::new(vec![Value::from("auto"), Value::Integer(0)]).unwrap();
        assert!(v.validate(&Value::Integer(0)));
        assert!(v.validate(&Value::from("auto")));
        assert!(!v.validate(&Value::Bool(false)));
    }

    #[test]
    fn test_duplicates_collapsed() {
        let v = EnumValidator::new(["a", "a", "b"]).unwrap();
        assert_eq!(v.allowed().len(), 2);
        assert_eq!(v.describe(), "one of {\"a\", \"b\"}");
    }

    #[test]
    fn test_construction_faults() {
        assert!(matches!(
            EnumValidator::new(Vec::<Value>::new()),
            Err(Error::EmptyAllowedSet)
        ));
        assert!(matches!(
            EnumValidator::new(vec![Value::Float(1.0)]),
            Err(Error::UnsupportedAllowedValue { .. })
        ));
    }
}
