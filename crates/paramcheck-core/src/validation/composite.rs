//! `all-of` / `any-of` combinators
//!
//! Copyright (c) 2025 Paramcheck Team
//! Licensed under the Apache-2.0 license

use super::base::{SharedValidator, Validator};
use super::verdict::Verdict;
use crate::error::{Error, Result};
use crate::value::{Value, ValueKind};

/// Accepts a value only if every member accepts it.
/// The first rejecting member decides the verdict.
#[derive(Debug, Clone)]
pub struct AllOf {
    members: Vec<SharedValidator>,
}

/// Accepts a value if at least one member accepts it.
/// When all reject, the first member's verdict is reported.
#[derive(Debug, Clone)]
pub struct AnyOf {
    members: Vec<SharedValidator>,
}

impl AllOf {
    pub fn new(members: Vec<SharedValidator>) -> Result<Self> {
        if members.is_empty() {
            return Err(Error::EmptyComposite { combinator: "all_of" });
        }
        Ok(Self { members })
    }

    pub fn members(&self) -> &[SharedValidator] {
        &self.members
    }
}

impl AnyOf {
    pub fn new(members: Vec<SharedValidator>) -> Result<Self> {
        if members.is_empty() {
            return Err(Error::EmptyComposite { combinator: "any_of" });
        }
        Ok(Self { members })
    }

    pub fn members(&self) -> &[SharedValidator] {
        &self.members
    }
}

fn describe_members(members: &[SharedValidator], joiner: &str) -> String {
    members
        .iter()
        .map(|m| format!("({})", m.describe()))
        .collect::<Vec<_>>()
        .join(joiner)
}

impl Validator for AllOf {
    fn accepts_kind(&self, kind: ValueKind) -> bool {
        self.members.iter().all(|m| m.accepts_kind(kind))
    }

    fn check(&self, value: &Value) -> Verdict {
        self.members
            .iter()
            .map(|m| m.check(value))
            .find(Verdict::is_rejected)
            .unwrap_or(Verdict::Accepted)
    }

    fn describe(&self) -> String {
        describe_members(&self.members, " and ")
    }
}

impl Validator for AnyOf {
    fn accepts_kind(&self, kind: ValueKind) -> bool {
        self.members.iter().any(|m| m.accepts_kind(kind))
    }

    fn check(&self, value: &Value) -> Verdict {
        let mut first_rejection = None;
        for member in &self.members {
            let verdict = member.check(value);
            if verdict.is_accepted() {
                return verdict;
            }
            first_rejection.get_or_insert(verdict);
        }
        first_rejection.unwrap_or(Verdict::Accepted)
    }

    fn describe(&self) -> String {
        describe_members(&self.members, " or ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{shared, EnumValidator, IntegerRangeValidator, StringValidator};

    #[test]
    fn test_all_of_requires_every_member() {
        let v = AllOf::new(vec![
            shared(IntegerRangeValidator::new(0, 100).unwrap()),
            shared(EnumValidator::new([10i64, 20, 200]).unwrap()),
        ])
        .unwrap();
        assert!(v.validate(&Value::Integer(10)));
        assert!(matches!(
            v.check(&Value::Integer(15)),
            Verdict::RejectedNotAllowed { .. }
        ));
        assert!(matches!(
            v.check(&Value::Integer(200)),
            Verdict::RejectedOutOfRange { .. }
        ));
    }

    #[test]
    fn test_any_of_accepts_alternatives() {
        let v = AnyOf::new(vec![
            shared(IntegerRangeValidator::port()),
            shared(StringValidator::new().pattern("^[a-z]+$").unwrap()),
        ])
        .unwrap();
        assert!(v.validate(&Value::Integer(8080)));
        assert!(v.validate(&Value::from("http")));
        assert_eq!(
            v.check(&Value::Bool(true)),
            Verdict::wrong_type(ValueKind::Integer, ValueKind::Bool)
        );
    }

    #[test]
    fn test_nested_and_describe() {
        let inner = AnyOf::new(vec![shared(IntegerRangeValidator::new(1, 2).unwrap())]).unwrap();
        let v = AllOf::new(vec![shared(inner)]).unwrap();
        assert_eq!(v.describe(), "((integer in [1, 2]))");
        assert!(v.validate(&Value::Integer(2)));
    }

    #[test]
    fn test_empty_combinators_rejected() {
        assert!(matches!(
            AllOf::new(vec![]),
            Err(Error::EmptyComposite { combinator: "all_of" })
        ));
        assert!(matches!(
            AnyOf::new(vec![]),
            Err(Error::EmptyComposite { combinator: "any_of" })
        ));
    }

    #[test]
    fn test_accepted_kinds_follow_members() {
        let any = AnyOf::new(vec![
            shared(IntegerRangeValidator::port()),
            shared(StringValidator::new()),
        ])
        .unwrap();
        assert!(any.accepts_kind(ValueKind::Integer));
        assert!(any.accepts_kind(ValueKind::Text));
        assert!(!any.accepts_kind(ValueKind::Float));

        let all = AllOf::new(vec![
            shared(IntegerRangeValidator::port()),
            shared(EnumValidator::new([Value::Integer(80), Value::from("http")]).unwrap()),
        ])
        .unwrap();
        assert!(all.accepts_kind(ValueKind::Integer));
        assert!(!all.accepts_kind(ValueKind::Text));
    }
}
