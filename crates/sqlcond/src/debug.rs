//! Debug rendering with inlined literals.
//!
//! Turns a `(template, args)` pair into human-readable SQL by substituting each
//! placeholder with the escaped literal of its argument:
//!
//! ```ignore
//! use sqlcond::prelude::*;
//!
//! let cond = and![eq("name", "O'Malley"), gt("age", 18)];
//! assert_eq!(cond.debug(), "name = 'O''Malley' AND age > 18");
//! ```
//!
//! The output is for logs only. A placeholder/argument count mismatch never
//! fails; the template is returned behind a warning comment instead.

use crate::dialect::{PLACEHOLDER, Scanner, Token, placeholder_count};
use crate::fragment::Fragment;
use crate::value::Value;

/// Inline `args` into the generic-placeholder template `sql`.
pub fn interpolate(sql: &str, args: &[Value]) -> String {
    let placeholders = placeholder_count(sql);
    if placeholders != args.len() {
        #[cfg(feature = "tracing")]
        crate::trace::warn_mismatch(sql, placeholders, args.len());
        return format!(
            "/* DEBUGGER WARNING: Mismatch between {placeholders} placeholders and {} arguments */ {sql}",
            args.len()
        );
    }

    let mut out = String::with_capacity(sql.len() + args.len() * 8);
    let mut args = args.iter();
    for token in Scanner::new(sql) {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Escaped => out.push(PLACEHOLDER),
            Token::Placeholder => {
                if let Some(arg) = args.next() {
                    out.push_str(&arg.literal().to_string());
                }
            }
        }
    }
    out
}

/// Inline the arguments of a rendered fragment.
pub fn interpolate_fragment(fragment: &Fragment) -> String {
    interpolate(fragment.sql(), fragment.args())
}
