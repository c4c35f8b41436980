//! Rendered `(template, args)` pairs.

use crate::builder::Builder;
use crate::dialect::placeholder_count;
use crate::error::{CondError, CondResult};
use crate::value::Value;

/// A SQL fragment with generic `?` placeholders and its ordered arguments.
///
/// Every [`Builder`] produces one. The i-th real placeholder in `sql` binds the
/// i-th entry of `args`. An empty `sql` means "contributes nothing".
///
/// A fragment is itself a builder, so caller-written SQL can be mixed into lists
/// or used as a nested operand (e.g. a subquery).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    sql: String,
    args: Vec<Value>,
}

impl Fragment {
    /// The empty fragment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn new(sql: String, args: Vec<Value>) -> Self {
        Self { sql, args }
    }

    /// A caller-written template with `?` placeholders.
    ///
    /// Use `??` for a literal `?`. Fails if the number of placeholders differs from
    /// the number of values.
    ///
    /// # Example
    /// ```ignore
    /// let sub = Fragment::template("(SELECT user_id FROM bans WHERE reason = ?)", ["spam"])?;
    /// ```
    pub fn template<I, V>(sql: impl Into<String>, args: I) -> CondResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let sql = sql.into();
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        let placeholders = placeholder_count(&sql);
        if placeholders != args.len() {
            return Err(CondError::ParamMismatch {
                sql,
                placeholders,
                args: args.len(),
            });
        }
        Ok(Self { sql, args })
    }

    /// A caller-written fragment without arguments.
    pub fn raw(sql: impl Into<String>) -> CondResult<Self> {
        Self::template(sql, Vec::<Value>::new())
    }

    /// The template text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The ordered arguments.
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Whether this fragment contributes nothing.
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}

impl Builder for Fragment {
    fn build(&self) -> Fragment {
        self.clone()
    }
}
