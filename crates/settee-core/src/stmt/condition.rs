use super::{Comparison, ComparisonOp, Operand, Value, ValueRange};
use crate::schema::FieldId;
use std::ops;

/// A boolean tree of field comparisons.
///
/// Operations are kept exactly as built: a single-operand `And`/`Or` is a
/// valid node and is collapsed only when compiled.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    Comparison(Comparison),
    And(ConditionAnd),
    Or(ConditionOr),
    Not(ConditionNot),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionAnd {
    pub operands: Vec<Condition>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConditionOr {
    pub operands: Vec<Condition>,
}

/// Negates exactly one condition.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionNot {
    pub operand: Box<Condition>,
}

impl Condition {
    /// Conjunction of two conditions, merging into an existing `And` where
    /// possible.
    pub fn and(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut lhs = lhs.into();
        let rhs = rhs.into();

        match (&mut lhs, rhs) {
            (Self::And(lhs_and), Self::And(rhs_and)) => {
                lhs_and.operands.extend(rhs_and.operands);
                lhs
            }
            (Self::And(lhs_and), rhs) => {
                lhs_and.operands.push(rhs);
                lhs
            }
            (_, Self::And(mut rhs_and)) => {
                rhs_and.operands.insert(0, lhs);
                rhs_and.into()
            }
            (_, rhs) => ConditionAnd {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }

    pub fn and_from_vec(operands: Vec<Self>) -> Self {
        ConditionAnd { operands }.into()
    }

    /// Disjunction of two conditions, merging into an existing `Or` where
    /// possible.
    pub fn or(lhs: impl Into<Self>, rhs: impl Into<Self>) -> Self {
        let mut lhs = lhs.into();
        let rhs = rhs.into();

        match (&mut lhs, rhs) {
            (Self::Or(lhs_or), Self::Or(rhs_or)) => {
                lhs_or.operands.extend(rhs_or.operands);
                lhs
            }
            (Self::Or(lhs_or), rhs) => {
                lhs_or.operands.push(rhs);
                lhs
            }
            (_, Self::Or(mut rhs_or)) => {
                rhs_or.operands.insert(0, lhs);
                rhs_or.into()
            }
            (_, rhs) => ConditionOr {
                operands: vec![lhs, rhs],
            }
            .into(),
        }
    }

    pub fn or_from_vec(operands: Vec<Self>) -> Self {
        ConditionOr { operands }.into()
    }

    pub fn not(operand: impl Into<Self>) -> Self {
        ConditionNot {
            operand: Box::new(operand.into()),
        }
        .into()
    }

    pub fn eq(subject: FieldId, value: impl Into<Value>) -> Self {
        Comparison::new(subject, ComparisonOp::Eq, value.into()).into()
    }

    pub fn ne(subject: FieldId, value: impl Into<Value>) -> Self {
        Comparison::new(subject, ComparisonOp::Ne, value.into()).into()
    }

    pub fn gt(subject: FieldId, value: impl Into<Value>) -> Self {
        Comparison::new(subject, ComparisonOp::Gt, value.into()).into()
    }

    pub fn ge(subject: FieldId, value: impl Into<Value>) -> Self {
        Comparison::new(subject, ComparisonOp::Ge, value.into()).into()
    }

    pub fn lt(subject: FieldId, value: impl Into<Value>) -> Self {
        Comparison::new(subject, ComparisonOp::Lt, value.into()).into()
    }

    pub fn le(subject: FieldId, value: impl Into<Value>) -> Self {
        Comparison::new(subject, ComparisonOp::Le, value.into()).into()
    }

    /// Membership in a discrete set.
    pub fn in_list<T: Into<Value>>(subject: FieldId, values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        Comparison::new(subject, ComparisonOp::In, values).into()
    }

    /// Membership in a continuous range.
    pub fn in_range(subject: FieldId, range: ValueRange) -> Self {
        Comparison::new(subject, ComparisonOp::In, range).into()
    }

    /// SQL-style pattern match.
    pub fn like(subject: FieldId, pattern: impl Into<String>) -> Self {
        Comparison::new(subject, ComparisonOp::Like, Value::String(pattern.into())).into()
    }

    /// Regular-expression match. `source` is the expression body, without
    /// delimiters.
    pub fn regexp(subject: FieldId, source: impl Into<String>) -> Self {
        Comparison::new(subject, ComparisonOp::Regexp, Operand::Regex(source.into())).into()
    }

    /// Returns the comparison at the heart of this condition, looking through
    /// single-operand `And`/`Or` wrappers. `Not` is not looked through.
    pub fn as_sole_comparison(&self) -> Option<&Comparison> {
        match self {
            Self::Comparison(comparison) => Some(comparison),
            Self::And(ConditionAnd { operands }) | Self::Or(ConditionOr { operands })
                if operands.len() == 1 =>
            {
                operands[0].as_sole_comparison()
            }
            _ => None,
        }
    }
}

impl ops::Deref for ConditionAnd {
    type Target = [Condition];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl ops::Deref for ConditionOr {
    type Target = [Condition];

    fn deref(&self) -> &Self::Target {
        self.operands.deref()
    }
}

impl<'a> IntoIterator for &'a ConditionAnd {
    type IntoIter = std::slice::Iter<'a, Condition>;
    type Item = &'a Condition;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl<'a> IntoIterator for &'a ConditionOr {
    type IntoIter = std::slice::Iter<'a, Condition>;
    type Item = &'a Condition;

    fn into_iter(self) -> Self::IntoIter {
        self.operands.iter()
    }
}

impl From<ConditionAnd> for Condition {
    fn from(value: ConditionAnd) -> Self {
        Self::And(value)
    }
}

impl From<ConditionOr> for Condition {
    fn from(value: ConditionOr) -> Self {
        Self::Or(value)
    }
}

impl From<ConditionNot> for Condition {
    fn from(value: ConditionNot) -> Self {
        Self::Not(value)
    }
}
