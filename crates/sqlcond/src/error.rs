//! Error types for sqlcond

use crate::condition::Operator;
use crate::operand::OperandKind;
use thiserror::Error;

/// Result type alias for sqlcond construction.
pub type CondResult<T> = Result<T, CondError>;

/// Errors raised while constructing conditions and fragments.
///
/// Rendering never fails: empty or incomplete conditions are omitted instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CondError {
    /// Condition column is empty.
    #[error("Condition column cannot be empty")]
    EmptyColumn,

    /// Operator was paired with an operand it cannot render.
    #[error("Operator {operator} on '{column}' expects {expected}, found {found} operand")]
    OperandMismatch {
        column: String,
        operator: Operator,
        expected: &'static str,
        found: OperandKind,
    },

    /// Template placeholders and bound values disagree.
    #[error("Param mismatch: template '{sql}' has {placeholders} '?', but {args} values provided")]
    ParamMismatch {
        sql: String,
        placeholders: usize,
        args: usize,
    },

    /// A value could not be encoded for the target column type.
    #[error("Bind error: {0}")]
    Bind(String),
}

impl CondError {
    /// Create an operand mismatch error.
    pub fn operand_mismatch(
        column: impl Into<String>,
        operator: Operator,
        found: OperandKind,
    ) -> Self {
        Self::OperandMismatch {
            column: column.into(),
            operator,
            expected: operator.expected_operand(),
            found,
        }
    }

    /// Create a bind error.
    pub fn bind(message: impl Into<String>) -> Self {
        Self::Bind(message.into())
    }

    /// Check if this is an operand mismatch error
    pub fn is_operand_mismatch(&self) -> bool {
        matches!(self, Self::OperandMismatch { .. })
    }

    /// Check if this is a param mismatch error
    pub fn is_param_mismatch(&self) -> bool {
        matches!(self, Self::ParamMismatch { .. })
    }
}
