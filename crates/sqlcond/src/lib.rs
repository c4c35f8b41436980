//! # sqlcond
//!
//! Composable, parameterized SQL WHERE clauses.
//!
//! ## Features
//!
//! - **Parameterized**: values never touch the SQL text; every fragment is a
//!   `(template, args)` pair with `?` placeholders
//! - **Optional filters for free**: NULL values, empty IN lists, half-open ranges and
//!   empty LIKE patterns drop out of the clause instead of failing
//! - **AND/OR trees**: nested groups, parenthesized where precedence needs it
//! - **Pretty mode**: aligned multi-line clauses for readable logs
//! - **Dialects**: `?`, `$n`, `:n` and `@pn` placeholders, chosen at compile time
//! - **Debug rendering**: inline escaped literals for inspection
//!
//! ## Example
//!
//! ```ignore
//! use sqlcond::prelude::*;
//!
//! let filter = clause![
//!     eq("status", "active"),
//!     like("name", search),                 // omitted when `search` is ""
//!     in_list("team_id", team_ids),         // omitted when empty
//!     and![gte("age", min_age), lte("age", max_age)],
//!     or_line![eq("role", "admin"), is_null("banned_at")],
//! ];
//!
//! let compiled = filter.compile(&Dialect::DOLLAR);
//! let sql = format!("SELECT * FROM users WHERE {}", compiled.sql());
//! let rows = client.query(&sql, &compiled.params_ref()).await?;
//! ```

pub mod builder;
pub mod condition;
pub mod debug;
pub mod dialect;
pub mod error;
pub mod fragment;
pub mod list;
pub mod operand;
pub mod prelude;
pub mod value;

#[cfg(feature = "tracing")]
pub mod trace;

pub use builder::{Builder, Compiled};
pub use condition::{Condition, Operator};
pub use debug::{interpolate, interpolate_fragment};
pub use dialect::{Dialect, PLACEHOLDER, placeholder_count};
pub use error::{CondError, CondResult};
pub use fragment::Fragment;
pub use list::{DEFAULT_INDENT, List, Node, Separator};
pub use operand::{Operand, OperandKind, PatternValue, RangeValue, SetValue, WILDCARD};
pub use value::{Literal, Value};

#[cfg(feature = "tracing")]
pub use trace::TraceConfig;

/// Top-level WHERE clause: an AND list in pretty mode with [`DEFAULT_INDENT`].
pub fn clause<I>(children: I) -> List
where
    I: IntoIterator,
    I::Item: Into<Node>,
{
    List::and(children).indent(DEFAULT_INDENT)
}

/// Build an AND [`List`] from mixed children.
///
/// ```ignore
/// and![eq("a", 1), or![eq("b", 2), eq("c", 3)]]
/// ```
#[macro_export]
macro_rules! and {
    ($($child:expr),* $(,)?) => {
        {
            let children: ::std::vec::Vec<$crate::Node> =
                ::std::vec![$($crate::Node::from($child)),*];
            $crate::List::and(children)
        }
    };
}

/// Build an OR [`List`] from mixed children.
#[macro_export]
macro_rules! or {
    ($($child:expr),* $(,)?) => {
        {
            let children: ::std::vec::Vec<$crate::Node> =
                ::std::vec![$($crate::Node::from($child)),*];
            $crate::List::or(children)
        }
    };
}

/// Build an OR [`List`] that always starts its own line in pretty mode.
#[macro_export]
macro_rules! or_line {
    ($($child:expr),* $(,)?) => {
        $crate::or![$($child),*].line_break(true)
    };
}

/// Build a top-level WHERE clause (see [`clause`]) from mixed children.
#[macro_export]
macro_rules! clause {
    ($($child:expr),* $(,)?) => {
        {
            let children: ::std::vec::Vec<$crate::Node> =
                ::std::vec![$($crate::Node::from($child)),*];
            $crate::clause(children)
        }
    };
}
