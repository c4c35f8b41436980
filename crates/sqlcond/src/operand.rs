//! Condition operands: scalars and the multi-value wrappers.
//!
//! The wrappers render only their right-hand side (`? AND ?`, `(?, ?)`, `?`) and
//! render empty when incomplete, which makes the owning condition omit itself.

use crate::builder::Builder;
use crate::fragment::Fragment;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// The wildcard padded around bare LIKE patterns.
pub const WILDCARD: char = '%';

/// `lower AND upper` bounds for BETWEEN.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeValue {
    lower: Value,
    upper: Value,
}

impl RangeValue {
    pub fn new(lower: impl Into<Value>, upper: impl Into<Value>) -> Self {
        Self {
            lower: lower.into(),
            upper: upper.into(),
        }
    }

    pub fn lower(&self) -> &Value {
        &self.lower
    }

    pub fn upper(&self) -> &Value {
        &self.upper
    }

    /// Both bounds are present.
    pub fn is_complete(&self) -> bool {
        !self.lower.is_null() && !self.upper.is_null()
    }
}

impl Builder for RangeValue {
    fn build(&self) -> Fragment {
        if !self.is_complete() {
            return Fragment::empty();
        }
        Fragment::new(
            "? AND ?".to_string(),
            vec![self.lower.clone(), self.upper.clone()],
        )
    }
}

/// Ordered values for IN / NOT IN.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SetValue(Vec<Value>);

impl SetValue {
    pub fn new<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        values.into_iter().collect()
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Into<Value>> FromIterator<V> for SetValue {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Builder for SetValue {
    fn build(&self) -> Fragment {
        if self.0.is_empty() {
            return Fragment::empty();
        }
        let placeholders = vec!["?"; self.0.len()].join(", ");
        Fragment::new(format!("({placeholders})"), self.0.clone())
    }
}

/// A LIKE pattern.
///
/// A pattern with no wildcard at either end is searched as a substring:
/// `"term"` binds `"%term%"`, while `"term%"` binds as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternValue {
    pattern: String,
    wildcard: char,
}

impl PatternValue {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_wildcard(pattern, WILDCARD)
    }

    /// A pattern for engines whose wildcard is not `%`.
    pub fn with_wildcard(pattern: impl Into<String>, wildcard: char) -> Self {
        Self {
            pattern: pattern.into(),
            wildcard,
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// The pattern as it will be bound.
    pub fn bound(&self) -> String {
        let w = self.wildcard;
        if self.pattern.starts_with(w) || self.pattern.ends_with(w) {
            self.pattern.clone()
        } else {
            format!("{w}{}{w}", self.pattern)
        }
    }
}

impl Builder for PatternValue {
    fn build(&self) -> Fragment {
        if self.pattern.is_empty() {
            return Fragment::empty();
        }
        Fragment::new("?".to_string(), vec![Value::Text(self.bound())])
    }
}

/// Discriminant of an [`Operand`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    Scalar,
    Range,
    Set,
    Pattern,
    Nested,
}

impl OperandKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Range => "range",
            Self::Set => "set",
            Self::Pattern => "pattern",
            Self::Nested => "nested",
        }
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The right-hand side of a [`Condition`](crate::Condition).
#[derive(Clone)]
pub enum Operand {
    Scalar(Value),
    Range(RangeValue),
    Set(SetValue),
    Pattern(PatternValue),
    /// Any builder, e.g. a subquery fragment.
    Nested(Arc<dyn Builder>),
}

impl Operand {
    pub fn scalar(value: impl Into<Value>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn nested(builder: impl Builder + 'static) -> Self {
        Self::Nested(Arc::new(builder))
    }

    pub fn kind(&self) -> OperandKind {
        match self {
            Self::Scalar(_) => OperandKind::Scalar,
            Self::Range(_) => OperandKind::Range,
            Self::Set(_) => OperandKind::Set,
            Self::Pattern(_) => OperandKind::Pattern,
            Self::Nested(_) => OperandKind::Nested,
        }
    }

    /// Whether the operand holds its type's zero value.
    ///
    /// Ranges are default when both bounds are NULL; sets and patterns when empty.
    /// Nested builders never are.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Scalar(v) => v.is_default(),
            Self::Range(r) => r.lower.is_null() && r.upper.is_null(),
            Self::Set(s) => s.is_empty(),
            Self::Pattern(p) => p.is_empty(),
            Self::Nested(_) => false,
        }
    }

    /// The scalar value, if this is one.
    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Self::Scalar(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Debug for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(v) => f.debug_tuple("Scalar").field(v).finish(),
            Self::Range(r) => f.debug_tuple("Range").field(r).finish(),
            Self::Set(s) => f.debug_tuple("Set").field(s).finish(),
            Self::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
            Self::Nested(_) => f.debug_tuple("Nested").field(&"<dyn Builder>").finish(),
        }
    }
}

impl From<Value> for Operand {
    fn from(v: Value) -> Self {
        Self::Scalar(v)
    }
}

impl From<RangeValue> for Operand {
    fn from(v: RangeValue) -> Self {
        Self::Range(v)
    }
}

impl From<SetValue> for Operand {
    fn from(v: SetValue) -> Self {
        Self::Set(v)
    }
}

impl From<PatternValue> for Operand {
    fn from(v: PatternValue) -> Self {
        Self::Pattern(v)
    }
}

impl From<Fragment> for Operand {
    fn from(v: Fragment) -> Self {
        Self::nested(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        let (sql, args) = RangeValue::new(18i32, 65i32).build().into_parts();
        assert_eq!(sql, "? AND ?");
        assert_eq!(args, vec![Value::Int(18), Value::Int(65)]);
    }

    #[test]
    fn test_range_missing_bound_is_empty() {
        assert!(RangeValue::new(18i32, None::<i32>).build().is_empty());
        assert!(RangeValue::new(Value::Null, 65i32).build().is_empty());
    }

    #[test]
    fn test_set() {
        let (sql, args) = SetValue::new([3i32, 4, 5]).build().into_parts();
        assert_eq!(sql, "(?, ?, ?)");
        assert_eq!(args.len(), 3);
    }

    #[test]
    fn test_set_empty() {
        assert!(SetValue::new(Vec::<i32>::new()).build().is_empty());
    }

    #[test]
    fn test_pattern_padding() {
        assert_eq!(PatternValue::new("term").bound(), "%term%");
        assert_eq!(PatternValue::new("%term%").bound(), "%term%");
        assert_eq!(PatternValue::new("term%").bound(), "term%");
        assert_eq!(PatternValue::new("%term").bound(), "%term");
        assert_eq!(PatternValue::with_wildcard("term", '*').bound(), "*term*");
    }

    #[test]
    fn test_pattern_empty() {
        assert!(PatternValue::new("").build().is_empty());
        let (sql, args) = PatternValue::new("ab").build().into_parts();
        assert_eq!(sql, "?");
        assert_eq!(args, vec![Value::Text("%ab%".to_string())]);
    }

    #[test]
    fn test_operand_default() {
        assert!(Operand::scalar(0i32).is_default());
        assert!(Operand::from(SetValue::default()).is_default());
        assert!(Operand::from(RangeValue::new(Value::Null, Value::Null)).is_default());
        assert!(!Operand::from(RangeValue::new(1i32, Value::Null)).is_default());
        assert!(!Operand::from(Fragment::empty()).is_default());
    }
}
