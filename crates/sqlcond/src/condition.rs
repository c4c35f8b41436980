//! Atomic conditions.
//!
//! This module provides [`Operator`] and [`Condition`], the leaves of a WHERE tree.
//!
//! A condition renders `column operator rhs` with `?` placeholders, or nothing at
//! all when it is omitted. Omission is how optional filters are expressed:
//!
//! ```ignore
//! use sqlcond::Condition;
//!
//! // Contributes nothing when `name` is empty.
//! Condition::eq("name", name).omit_if_default();
//!
//! // Contributes nothing when `ids` is empty.
//! Condition::in_list("id", ids);
//!
//! // Contributes nothing when either bound is None.
//! Condition::between("age", min_age, max_age);
//! ```

use crate::builder::Builder;
use crate::error::{CondError, CondResult};
use crate::fragment::Fragment;
use crate::operand::{Operand, OperandKind, PatternValue, RangeValue, SetValue};
use crate::value::Value;
use std::fmt;

/// Comparison operator of a [`Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal: column = value
    Eq,
    /// Not equal: column <> value
    Ne,
    /// Greater than: column > value
    Gt,
    /// Greater than or equal: column >= value
    Gte,
    /// Less than: column < value
    Lt,
    /// Less than or equal: column <= value
    Lte,
    /// LIKE pattern match
    Like,
    /// NOT LIKE pattern match
    NotLike,
    /// Case-insensitive LIKE (PostgreSQL ILIKE)
    Ilike,
    /// NOT ILIKE pattern match
    NotIlike,
    /// IN (list)
    In,
    /// NOT IN (list)
    NotIn,
    /// BETWEEN a AND b
    Between,
    /// NOT BETWEEN a AND b
    NotBetween,
    /// IS NULL
    IsNull,
    /// IS NOT NULL
    IsNotNull,
}

impl Operator {
    /// SQL keyword(s) for this operator.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ne => "<>",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::Ilike => "ILIKE",
            Self::NotIlike => "NOT ILIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::Between => "BETWEEN",
            Self::NotBetween => "NOT BETWEEN",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
        }
    }

    /// `IS NULL` / `IS NOT NULL`, which take no operand.
    pub const fn is_null_check(self) -> bool {
        matches!(self, Self::IsNull | Self::IsNotNull)
    }

    /// Whether this operator can render an operand of `kind`.
    pub const fn accepts(self, kind: OperandKind) -> bool {
        match self {
            Self::Eq | Self::Ne | Self::Gt | Self::Gte | Self::Lt | Self::Lte => {
                matches!(kind, OperandKind::Scalar | OperandKind::Nested)
            }
            Self::Like | Self::NotLike | Self::Ilike | Self::NotIlike => {
                matches!(kind, OperandKind::Pattern | OperandKind::Nested)
            }
            Self::In | Self::NotIn => matches!(kind, OperandKind::Set | OperandKind::Nested),
            Self::Between | Self::NotBetween => matches!(kind, OperandKind::Range),
            Self::IsNull | Self::IsNotNull => true,
        }
    }

    pub(crate) const fn expected_operand(self) -> &'static str {
        match self {
            Self::Eq | Self::Ne | Self::Gt | Self::Gte | Self::Lt | Self::Lte => {
                "a scalar or nested operand"
            }
            Self::Like | Self::NotLike | Self::Ilike | Self::NotIlike => {
                "a pattern or nested operand"
            }
            Self::In | Self::NotIn => "a set or nested operand",
            Self::Between | Self::NotBetween => "a range operand",
            Self::IsNull | Self::IsNotNull => "no operand",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named predicate over one column.
#[derive(Debug, Clone)]
pub struct Condition {
    column: String,
    operator: Operator,
    operand: Operand,
    omitted: bool,
}

impl Condition {
    /// Create a condition, checking that `operator` can render `operand`.
    pub fn new(
        column: impl Into<String>,
        operator: Operator,
        operand: impl Into<Operand>,
    ) -> CondResult<Self> {
        let column = column.into();
        let operand = operand.into();
        if column.is_empty() {
            return Err(CondError::EmptyColumn);
        }
        if !operator.accepts(operand.kind()) {
            return Err(CondError::operand_mismatch(column, operator, operand.kind()));
        }
        Ok(Self::unchecked(column, operator, operand))
    }

    fn unchecked(column: impl Into<String>, operator: Operator, operand: Operand) -> Self {
        Self {
            column: column.into(),
            operator,
            operand,
            omitted: false,
        }
    }

    fn scalar(column: impl Into<String>, operator: Operator, value: impl Into<Value>) -> Self {
        Self::unchecked(column, operator, Operand::scalar(value))
    }

    // ==================== Convenience constructors ====================

    /// Create an equality condition: column = value
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::scalar(column, Operator::Eq, value)
    }

    /// Create an inequality condition: column <> value
    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::scalar(column, Operator::Ne, value)
    }

    /// Create a greater-than condition: column > value
    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::scalar(column, Operator::Gt, value)
    }

    /// Create a greater-than-or-equal condition: column >= value
    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::scalar(column, Operator::Gte, value)
    }

    /// Create a less-than condition: column < value
    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::scalar(column, Operator::Lt, value)
    }

    /// Create a less-than-or-equal condition: column <= value
    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::scalar(column, Operator::Lte, value)
    }

    /// Create a LIKE condition: column LIKE pattern
    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::unchecked(column, Operator::Like, PatternValue::new(pattern).into())
    }

    /// Create a NOT LIKE condition: column NOT LIKE pattern
    pub fn not_like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::unchecked(column, Operator::NotLike, PatternValue::new(pattern).into())
    }

    /// Create a case-insensitive ILIKE condition: column ILIKE pattern
    pub fn ilike(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::unchecked(column, Operator::Ilike, PatternValue::new(pattern).into())
    }

    /// Create a NOT ILIKE condition: column NOT ILIKE pattern
    pub fn not_ilike(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::unchecked(column, Operator::NotIlike, PatternValue::new(pattern).into())
    }

    /// Create an IN condition: column IN (values...)
    pub fn in_list<I, V>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::unchecked(column, Operator::In, SetValue::new(values).into())
    }

    /// Create a NOT IN condition: column NOT IN (values...)
    pub fn not_in<I, V>(column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::unchecked(column, Operator::NotIn, SetValue::new(values).into())
    }

    /// Create an IN condition over a subquery: column IN sub
    pub fn in_query(column: impl Into<String>, sub: impl Builder + 'static) -> Self {
        Self::unchecked(column, Operator::In, Operand::nested(sub))
    }

    /// Create a NOT IN condition over a subquery: column NOT IN sub
    pub fn not_in_query(column: impl Into<String>, sub: impl Builder + 'static) -> Self {
        Self::unchecked(column, Operator::NotIn, Operand::nested(sub))
    }

    /// Create a BETWEEN condition: column BETWEEN lower AND upper
    pub fn between(
        column: impl Into<String>,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
    ) -> Self {
        Self::unchecked(column, Operator::Between, RangeValue::new(lower, upper).into())
    }

    /// Create a NOT BETWEEN condition: column NOT BETWEEN lower AND upper
    pub fn not_between(
        column: impl Into<String>,
        lower: impl Into<Value>,
        upper: impl Into<Value>,
    ) -> Self {
        Self::unchecked(column, Operator::NotBetween, RangeValue::new(lower, upper).into())
    }

    /// Create an IS NULL condition: column IS NULL
    pub fn is_null(column: impl Into<String>) -> Self {
        Self::scalar(column, Operator::IsNull, Value::Null)
    }

    /// Create an IS NOT NULL condition: column IS NOT NULL
    pub fn is_not_null(column: impl Into<String>) -> Self {
        Self::scalar(column, Operator::IsNotNull, Value::Null)
    }

    // ==================== Omission ====================

    /// Explicitly omit (or keep) this condition.
    pub fn omit(mut self, omit: bool) -> Self {
        self.omitted = omit;
        self
    }

    /// Omit when the operand is its type's zero value.
    pub fn omit_if_default(mut self) -> Self {
        self.omitted = self.operand.is_default();
        self
    }

    /// Omit when `predicate` holds for the operand.
    pub fn omit_if<F>(mut self, predicate: F) -> Self
    where
        F: FnOnce(&Operand) -> bool,
    {
        self.omitted = predicate(&self.operand);
        self
    }

    pub fn is_omitted(&self) -> bool {
        self.omitted
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operand(&self) -> &Operand {
        &self.operand
    }
}

impl Builder for Condition {
    fn build(&self) -> Fragment {
        if self.omitted {
            return Fragment::empty();
        }

        let (column, operator) = (&self.column, self.operator);
        if operator.is_null_check() {
            return Fragment::new(format!("{column} {operator}"), Vec::new());
        }

        let inner = match &self.operand {
            Operand::Scalar(Value::Null) => return Fragment::empty(),
            Operand::Scalar(v) => Fragment::new("?".to_string(), vec![v.clone()]),
            Operand::Range(r) => r.build(),
            Operand::Set(s) => s.build(),
            Operand::Pattern(p) => p.build(),
            Operand::Nested(b) => b.build(),
        };
        if inner.is_empty() {
            return Fragment::empty();
        }

        let (rhs, args) = inner.into_parts();
        Fragment::new(format!("{column} {operator} {rhs}"), args)
    }
}
