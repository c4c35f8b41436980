//! Free-function constructors for terse WHERE trees.
//!
//! ```ignore
//! use sqlcond::prelude::*;
//!
//! let filter = clause![
//!     eq("status", "active"),
//!     between("age", min_age, max_age),
//!     or_eq("role", ["admin", "owner"]),
//! ];
//! let compiled = filter.compile(&Dialect::DOLLAR);
//! ```

pub use crate::builder::{Builder, Compiled};
pub use crate::condition::{Condition, Operator};
pub use crate::dialect::Dialect;
pub use crate::fragment::Fragment;
pub use crate::list::{DEFAULT_INDENT, List, Node, Separator};
pub use crate::operand::{Operand, PatternValue, RangeValue, SetValue};
pub use crate::value::Value;
pub use crate::{and, clause, or, or_line};

use crate::value::Value as V;

/// column = value
pub fn eq(column: impl Into<String>, value: impl Into<V>) -> Condition {
    Condition::eq(column, value)
}

/// column <> value
pub fn ne(column: impl Into<String>, value: impl Into<V>) -> Condition {
    Condition::ne(column, value)
}

/// column > value
pub fn gt(column: impl Into<String>, value: impl Into<V>) -> Condition {
    Condition::gt(column, value)
}

/// column >= value
pub fn gte(column: impl Into<String>, value: impl Into<V>) -> Condition {
    Condition::gte(column, value)
}

/// column < value
pub fn lt(column: impl Into<String>, value: impl Into<V>) -> Condition {
    Condition::lt(column, value)
}

/// column <= value
pub fn lte(column: impl Into<String>, value: impl Into<V>) -> Condition {
    Condition::lte(column, value)
}

pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Condition {
    Condition::like(column, pattern)
}

pub fn not_like(column: impl Into<String>, pattern: impl Into<String>) -> Condition {
    Condition::not_like(column, pattern)
}

pub fn ilike(column: impl Into<String>, pattern: impl Into<String>) -> Condition {
    Condition::ilike(column, pattern)
}

pub fn not_ilike(column: impl Into<String>, pattern: impl Into<String>) -> Condition {
    Condition::not_ilike(column, pattern)
}

pub fn in_list<I, T>(column: impl Into<String>, values: I) -> Condition
where
    I: IntoIterator<Item = T>,
    T: Into<V>,
{
    Condition::in_list(column, values)
}

pub fn not_in<I, T>(column: impl Into<String>, values: I) -> Condition
where
    I: IntoIterator<Item = T>,
    T: Into<V>,
{
    Condition::not_in(column, values)
}

pub fn between(column: impl Into<String>, lower: impl Into<V>, upper: impl Into<V>) -> Condition {
    Condition::between(column, lower, upper)
}

pub fn not_between(
    column: impl Into<String>,
    lower: impl Into<V>,
    upper: impl Into<V>,
) -> Condition {
    Condition::not_between(column, lower, upper)
}

pub fn is_null(column: impl Into<String>) -> Condition {
    Condition::is_null(column)
}

pub fn is_not_null(column: impl Into<String>) -> Condition {
    Condition::is_not_null(column)
}

/// OR of `column = ?` for each value: `(role = ? OR role = ?)`.
pub fn or_eq<I, T>(column: impl Into<String>, values: I) -> List
where
    I: IntoIterator<Item = T>,
    T: Into<V>,
{
    let column = column.into();
    List::or(values.into_iter().map(|v| Condition::eq(column.clone(), v)))
}

/// AND list of same-typed children. Use [`and!`](crate::and) to mix kinds.
pub fn and<I>(children: I) -> List
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    List::and(children)
}

/// OR list of same-typed children. Use [`or!`](crate::or) to mix kinds.
pub fn or<I>(children: I) -> List
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    List::or(children)
}

/// OR list that always starts its own line in pretty mode.
pub fn or_line<I>(children: I) -> List
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    List::or(children).line_break(true)
}
