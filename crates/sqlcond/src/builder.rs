//! The builder capability and compiled output.

use crate::debug;
use crate::dialect::Dialect;
use crate::fragment::Fragment;
use crate::value::Value;
use tokio_postgres::types::ToSql;

/// Anything that renders to a [`Fragment`].
///
/// Rendering is a pure read of the current tree: nothing is cached, so building
/// again after a mutation reflects the new state.
pub trait Builder: Send + Sync {
    /// Render the generic `(template, args)` pair.
    fn build(&self) -> Fragment;

    /// Render and rewrite placeholders for `dialect`.
    fn compile(&self, dialect: &Dialect) -> Compiled {
        let compiled = Compiled::from_fragment(self.build(), dialect);
        #[cfg(feature = "tracing")]
        crate::trace::TraceConfig::default().emit_compiled(dialect, &compiled);
        compiled
    }

    /// Like [`Builder::compile`], logging with an explicit [`TraceConfig`](crate::TraceConfig).
    #[cfg(feature = "tracing")]
    fn compile_traced(&self, dialect: &Dialect, config: &crate::TraceConfig) -> Compiled {
        let compiled = Compiled::from_fragment(self.build(), dialect);
        config.emit_compiled(dialect, &compiled);
        compiled
    }

    /// Render with arguments inlined as escaped literals.
    ///
    /// For logs and inspection only; never execute the result.
    fn debug(&self) -> String {
        debug::interpolate_fragment(&self.build())
    }
}

/// Final SQL text in a concrete dialect, with its ordered arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Compiled {
    sql: String,
    args: Vec<Value>,
}

impl Compiled {
    pub(crate) fn from_fragment(fragment: Fragment, dialect: &Dialect) -> Self {
        let (sql, args) = fragment.into_parts();
        Self {
            sql: dialect.rewrite(&sql),
            args,
        }
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Whether nothing survived rendering (no WHERE clause needed).
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }

    /// Get parameter references for tokio-postgres.
    pub fn params_ref(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.args.iter().map(|v| v as &(dyn ToSql + Sync)).collect()
    }

    pub fn into_parts(self) -> (String, Vec<Value>) {
        (self.sql, self.args)
    }
}
