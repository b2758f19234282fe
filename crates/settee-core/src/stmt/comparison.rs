use super::{Condition, Value};
use crate::schema::FieldId;

/// A single field test: `<subject> <op> <operand>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// The comparison operator.
    pub op: ComparisonOp,

    /// The field being tested.
    pub subject: FieldId,

    /// The literal the field is tested against.
    pub operand: Operand,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,

    /// Membership in a discrete set or a range
    In,

    /// Match against a regular expression
    Regexp,

    /// Match against an SQL-style pattern (`%`, `_`)
    Like,
}

/// The literal side of a comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    /// A single value
    Value(Value),

    /// A discrete set of values
    List(Vec<Value>),

    /// A continuous range of values
    Range(ValueRange),

    /// Regular expression source, passed through unchanged
    Regex(String),
}

/// Bounds of a range operand. The lower bound is always inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueRange {
    pub start: Value,
    pub end: Value,

    /// When `true`, the upper bound is excluded.
    pub exclusive: bool,
}

impl Comparison {
    pub fn new(subject: FieldId, op: ComparisonOp, operand: impl Into<Operand>) -> Self {
        Self {
            op,
            subject,
            operand: operand.into(),
        }
    }

    /// Returns the single literal this comparison tests against, if it has
    /// one.
    pub fn value(&self) -> Option<&Value> {
        match &self.operand {
            Operand::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl ComparisonOp {
    pub fn is_eq(self) -> bool {
        matches!(self, Self::Eq)
    }
}

impl ValueRange {
    /// `start..=end`
    pub fn inclusive(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            exclusive: false,
        }
    }

    /// `start..end`
    pub fn exclusive(start: impl Into<Value>, end: impl Into<Value>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            exclusive: true,
        }
    }
}

impl From<Value> for Operand {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Vec<Value>> for Operand {
    fn from(value: Vec<Value>) -> Self {
        Self::List(value)
    }
}

impl From<ValueRange> for Operand {
    fn from(value: ValueRange) -> Self {
        Self::Range(value)
    }
}

impl From<Comparison> for Condition {
    fn from(value: Comparison) -> Self {
        Self::Comparison(value)
    }
}
