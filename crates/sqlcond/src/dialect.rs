//! Placeholder dialects.
//!
//! Builders always render the generic `?` placeholder. A [`Dialect`] rewrites the
//! finished template into the bind syntax of the target engine:
//!
//! | dialect              | output            |
//! |----------------------|-------------------|
//! | [`Dialect::QUESTION`]| `?, ?, ?`         |
//! | [`Dialect::DOLLAR`]  | `$1, $2, $3`      |
//! | [`Dialect::COLON`]   | `:1, :2, :3`      |
//! | [`Dialect::AT_P`]    | `@p1, @p2, @p3`   |
//!
//! A doubled `??` is an escaped literal `?` (e.g. the Postgres jsonb operator). It
//! collapses to a single `?` in every dialect and never consumes an ordinal.

use std::borrow::Cow;
use std::fmt;

/// The generic placeholder token emitted by every builder.
pub const PLACEHOLDER: char = '?';

/// Placeholder rewrite strategy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Keep the generic `?` token.
    Raw,
    /// Number placeholders from 1, each prefixed with the given symbol.
    Positional(Cow<'static, str>),
}

impl Dialect {
    /// `?` placeholders (MySQL, SQLite).
    pub const QUESTION: Self = Self::Raw;
    /// `$1, $2, ...` placeholders (Postgres).
    pub const DOLLAR: Self = Self::Positional(Cow::Borrowed("$"));
    /// `:1, :2, ...` placeholders (Oracle).
    pub const COLON: Self = Self::Positional(Cow::Borrowed(":"));
    /// `@p1, @p2, ...` placeholders (SQL Server).
    pub const AT_P: Self = Self::Positional(Cow::Borrowed("@p"));

    /// A positional dialect with a custom prefix.
    pub fn positional(prefix: impl Into<Cow<'static, str>>) -> Self {
        Self::Positional(prefix.into())
    }

    /// The ordinal prefix, or `None` for the raw dialect.
    pub fn prefix(&self) -> Option<&str> {
        match self {
            Self::Raw => None,
            Self::Positional(prefix) => Some(prefix.as_ref()),
        }
    }

    /// Rewrite every generic placeholder in `sql`.
    pub fn rewrite(&self, sql: &str) -> String {
        let mut out = String::with_capacity(sql.len() + 8);
        let mut ordinal = 0usize;

        for token in Scanner::new(sql) {
            match token {
                Token::Text(text) => out.push_str(text),
                Token::Escaped => out.push(PLACEHOLDER),
                Token::Placeholder => match self {
                    Self::Raw => out.push(PLACEHOLDER),
                    Self::Positional(prefix) => {
                        ordinal += 1;
                        out.push_str(prefix);
                        out.push_str(&ordinal.to_string());
                    }
                },
            }
        }
        out
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str("?"),
            Self::Positional(prefix) => write!(f, "{prefix}n"),
        }
    }
}

/// Count real (non-escaped) placeholders in a template.
pub fn placeholder_count(sql: &str) -> usize {
    Scanner::new(sql)
        .filter(|t| matches!(t, Token::Placeholder))
        .count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Text(&'a str),
    Placeholder,
    /// `??`, one literal `?`.
    Escaped,
}

/// Left-to-right tokenizer over a `?` template.
pub(crate) struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(sql: &'a str) -> Self {
        Self { rest: sql }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(PLACEHOLDER) {
            None => {
                let text = self.rest;
                self.rest = "";
                Some(Token::Text(text))
            }
            Some(0) => {
                let after = &self.rest[1..];
                if after.starts_with(PLACEHOLDER) {
                    self.rest = &after[1..];
                    Some(Token::Escaped)
                } else {
                    self.rest = after;
                    Some(Token::Placeholder)
                }
            }
            Some(pos) => {
                let (text, rest) = self.rest.split_at(pos);
                self.rest = rest;
                Some(Token::Text(text))
            }
        }
    }
}
