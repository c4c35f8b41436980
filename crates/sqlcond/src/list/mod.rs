//! Boolean grouping of conditions.
//!
//! A [`List`] joins its children with `AND` or `OR`, skipping children that render
//! empty. It renders in one of two modes:
//!
//! - **compact** (default): one line, `a = ? AND b = ?`. An OR list with more than
//!   one surviving child is parenthesized: `(a = ? OR b = ?)`.
//! - **pretty** (after [`List::indent`]): one line per group, continuation lines
//!   indented and prefixed with the separator keyword:
//!
//! ```text
//! status = ?
//!   AND age >= ? AND age <= ?
//!   AND (role = ? OR role = ?)
//! ```
//!
//! In pretty mode a child AND list, or a child marked with [`List::line_break`],
//! always sits on its own line. Everything else accumulates onto the current line.

mod pretty;


use crate::builder::Builder;
use crate::condition::Condition;
use crate::fragment::Fragment;
use std::fmt;

/// Indent width used by [`clause`](crate::clause).
pub const DEFAULT_INDENT: usize = 2;

/// How a [`List`] joins its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    And,
    Or,
}

impl Separator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A child of a [`List`].
#[derive(Debug, Clone)]
pub enum Node {
    Condition(Condition),
    List(List),
    Fragment(Fragment),
}

impl Node {
    /// Whether this node must start its own line in pretty mode.
    pub(crate) fn breaks_line(&self) -> bool {
        match self {
            Self::List(list) => list.breaks_line(),
            Self::Condition(_) | Self::Fragment(_) => false,
        }
    }
}

impl Builder for Node {
    fn build(&self) -> Fragment {
        match self {
            Self::Condition(c) => c.build(),
            Self::List(l) => l.build(),
            Self::Fragment(f) => f.build(),
        }
    }
}

impl From<Condition> for Node {
    fn from(v: Condition) -> Self {
        Self::Condition(v)
    }
}

impl From<List> for Node {
    fn from(v: List) -> Self {
        Self::List(v)
    }
}

impl From<Fragment> for Node {
    fn from(v: Fragment) -> Self {
        Self::Fragment(v)
    }
}

/// An ordered AND/OR group of conditions and nested lists.
#[derive(Debug, Clone)]
pub struct List {
    children: Vec<Node>,
    separator: Separator,
    indent: Option<usize>,
    line_break: bool,
}

impl List {
    pub fn new<I>(separator: Separator, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self {
            children: children.into_iter().map(Into::into).collect(),
            separator,
            indent: None,
            line_break: false,
        }
    }

    /// Create an AND list.
    pub fn and<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self::new(Separator::And, children)
    }

    /// Create an OR list.
    pub fn or<I>(children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        Self::new(Separator::Or, children)
    }

    /// Switch to pretty (multi-line) mode with `width` spaces of indent.
    ///
    /// A width of 0 is ignored.
    pub fn indent(mut self, width: usize) -> Self {
        if width > 0 {
            self.indent = Some(width);
        }
        self
    }

    /// Force this list onto its own line when nested in a pretty list.
    pub fn line_break(mut self, line_break: bool) -> Self {
        self.line_break = line_break;
        self
    }

    /// Append a child.
    pub fn push(&mut self, child: impl Into<Node>) -> &mut Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    pub fn append<I>(&mut self, children: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Number of children, including ones that will render empty.
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Whether the list has no children at all.
    ///
    /// A non-empty list may still render empty if every child is omitted.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn indent_width(&self) -> Option<usize> {
        self.indent
    }

    pub fn is_pretty(&self) -> bool {
        self.indent.is_some()
    }

    pub(crate) fn breaks_line(&self) -> bool {
        self.separator == Separator::And || self.line_break
    }

    /// Render this list in compact mode, whatever its indent.
    pub fn build_compact(&self) -> Fragment {
        let mut parts = Vec::with_capacity(self.children.len());
        let mut args = Vec::new();

        for child in &self.children {
            let (sql, child_args) = child.build().into_parts();
            if sql.is_empty() {
                continue;
            }
            parts.push(sql);
            args.extend(child_args);
        }

        if parts.is_empty() {
            return Fragment::empty();
        }
        let sql = parts.join(&format!(" {} ", self.separator));
        Fragment::new(self.wrap(sql, parts.len()), args)
    }

    /// Parenthesize an OR group of more than one surviving child.
    fn wrap(&self, sql: String, survivors: usize) -> String {
        if self.separator == Separator::Or && survivors > 1 {
            format!("({sql})")
        } else {
            sql
        }
    }
}

impl Builder for List {
    fn build(&self) -> Fragment {
        match self.indent {
            Some(width) => self.build_pretty(width),
            None => self.build_compact(),
        }
    }
}
