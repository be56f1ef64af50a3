//! The column container handed between hosts and transformers.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{RefineryError, Result};

use super::types::{ElementKind, Value};

/// A named, fixed-length sequence of nullable values of one element kind.
///
/// Columns are immutable: every transformation builds a new column of the
/// same length and name, leaving the input untouched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    name: String,
    kind: ElementKind,
    values: Vec<Value>,
}

impl Column {
    /// Create a column, checking every value against the declared kind.
    pub fn new(name: impl Into<String>, kind: ElementKind, values: Vec<Value>) -> Result<Self> {
        let name = name.into();
        if let Some(row) = values.iter().position(|v| !v.fits(kind)) {
            return Err(RefineryError::KindMismatch {
                column: name,
                row,
                expected: kind,
            });
        }
        Ok(Self { name, kind, values })
    }

    /// Text column from optional strings.
    pub fn text<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self::from_parts(
            name,
            ElementKind::Text,
            values
                .into_iter()
                .map(|v| v.map_or(Value::Null, |s| Value::Text(s.into())))
                .collect(),
        )
    }

    /// Text column without missing values.
    pub fn from_strings<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::text(name, values.into_iter().map(Some))
    }

    /// Non-nullable integer column.
    pub fn integers(name: impl Into<String>, values: impl IntoIterator<Item = i64>) -> Self {
        Self::from_parts(
            name,
            ElementKind::Integer,
            values.into_iter().map(Value::Integer).collect(),
        )
    }

    /// Integer column that may contain missing values.
    pub fn nullable_integers(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<i64>>,
    ) -> Self {
        Self::from_parts(
            name,
            ElementKind::NullableInteger,
            values.into_iter().map(Value::from).collect(),
        )
    }

    /// Floating-point column. `NaN` is stored as a missing value.
    pub fn floats(name: impl Into<String>, values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self::from_parts(
            name,
            ElementKind::Float,
            values
                .into_iter()
                .map(|v| match v {
                    Some(x) if !x.is_nan() => Value::Float(x),
                    _ => Value::Null,
                })
                .collect(),
        )
    }

    /// Boolean column.
    pub fn booleans(name: impl Into<String>, values: impl IntoIterator<Item = Option<bool>>) -> Self {
        Self::from_parts(
            name,
            ElementKind::Boolean,
            values.into_iter().map(Value::from).collect(),
        )
    }

    /// Timestamp column.
    pub fn timestamps(
        name: impl Into<String>,
        values: impl IntoIterator<Item = Option<NaiveDateTime>>,
    ) -> Self {
        Self::from_parts(
            name,
            ElementKind::Timestamp,
            values.into_iter().map(Value::from).collect(),
        )
    }

    /// Categorical column from optional labels.
    pub fn categories<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self::from_parts(
            name,
            ElementKind::Categorical,
            values
                .into_iter()
                .map(|v| v.map_or(Value::Null, |s| Value::Category(s.into())))
                .collect(),
        )
    }

    /// Build a column whose values are known to fit `kind`.
    fn from_parts(name: impl Into<String>, kind: ElementKind, values: Vec<Value>) -> Self {
        debug_assert!(values.iter().all(|v| v.fits(kind)));
        Self {
            name: name.into(),
            kind,
            values,
        }
    }

    /// Build a sibling column with the same name and new values.
    pub(crate) fn derive(&self, kind: ElementKind, values: Vec<Value>) -> Self {
        debug_assert_eq!(values.len(), self.values.len());
        Self::from_parts(self.name.clone(), kind, values)
    }

    /// Column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Number of values, including missing ones.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at a position.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Returns true if the value at `index` is missing (or out of range).
    pub fn is_null(&self, index: usize) -> bool {
        self.values.get(index).is_none_or(Value::is_null)
    }

    /// All values in order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterate over the values.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Number of missing values.
    pub fn null_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_null()).count()
    }

    /// Same values under a different name.
    pub fn renamed(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: self.kind,
            values: self.values.clone(),
        }
    }

    /// Consume the column and return its values.
    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

impl<'a> IntoIterator for &'a Column {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_mismatched_values() {
        let err = Column::new(
            "age",
            ElementKind::Float,
            vec![Value::Float(1.0), Value::Text("two".into())],
        )
        .unwrap_err();

        match err {
            RefineryError::KindMismatch { column, row, expected } => {
                assert_eq!(column, "age");
                assert_eq!(row, 1);
                assert_eq!(expected, ElementKind::Float);
            }
            other => panic!("Expected KindMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_column_rejects_null() {
        let result = Column::new("id", ElementKind::Integer, vec![Value::Integer(1), Value::Null]);
        assert!(result.is_err());

        let result = Column::new(
            "id",
            ElementKind::NullableInteger,
            vec![Value::Integer(1), Value::Null],
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_typed_constructors() {
        let col = Column::text("name", vec![Some("a"), None]);
        assert_eq!(col.kind(), ElementKind::Text);
        assert_eq!(col.len(), 2);
        assert!(col.is_null(1));
        assert!(!col.is_null(0));
        assert!(col.is_null(5));

        let col = Column::floats("x", vec![Some(1.5), Some(f64::NAN)]);
        assert_eq!(col.get(1), Some(&Value::Null));
        assert_eq!(col.null_count(), 1);
    }

    #[test]
    fn test_derive_keeps_name() {
        let col = Column::from_strings("price", ["1", "2"]);
        let derived = col.derive(ElementKind::Float, vec![Value::Float(1.0), Value::Float(2.0)]);
        assert_eq!(derived.name(), "price");
        assert_eq!(derived.kind(), ElementKind::Float);
        assert_eq!(col.kind(), ElementKind::Text);
    }
}
