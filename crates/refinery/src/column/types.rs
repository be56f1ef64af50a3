//! Element kinds and scalar values.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Display layout used when a timestamp is rendered as text.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Declared type of the values held by a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Free text.
    Text,
    /// Whole numbers, no missing values allowed.
    Integer,
    /// Whole numbers that may be missing.
    NullableInteger,
    /// Floating-point numbers.
    Float,
    /// Boolean values (true/false).
    Boolean,
    /// Date and time values.
    Timestamp,
    /// Labels drawn from a small set of categories.
    Categorical,
}

impl ElementKind {
    /// All kinds, in display order.
    pub const ALL: [ElementKind; 7] = [
        ElementKind::Text,
        ElementKind::Integer,
        ElementKind::NullableInteger,
        ElementKind::Float,
        ElementKind::Boolean,
        ElementKind::Timestamp,
        ElementKind::Categorical,
    ];

    /// Returns true if this kind holds numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ElementKind::Integer | ElementKind::NullableInteger | ElementKind::Float
        )
    }

    /// Returns true if values of this kind may be missing.
    pub fn is_nullable(&self) -> bool {
        !matches!(self, ElementKind::Integer)
    }

    /// Stable identifier of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::Text => "text",
            ElementKind::Integer => "integer",
            ElementKind::NullableInteger => "nullable_integer",
            ElementKind::Float => "float",
            ElementKind::Boolean => "boolean",
            ElementKind::Timestamp => "timestamp",
            ElementKind::Categorical => "categorical",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ElementKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "text" | "string" | "object" => Ok(ElementKind::Text),
            "integer" | "int" | "int64" => Ok(ElementKind::Integer),
            "nullable_integer" | "nullable_int" => Ok(ElementKind::NullableInteger),
            "float" | "float64" | "double" => Ok(ElementKind::Float),
            "boolean" | "bool" => Ok(ElementKind::Boolean),
            "timestamp" | "datetime" | "datetime64" => Ok(ElementKind::Timestamp),
            "categorical" | "category" => Ok(ElementKind::Categorical),
            _ => Err(format!(
                "Unknown element kind: {}. Use: text, integer, nullable_integer, float, boolean, timestamp or categorical.",
                s
            )),
        }
    }
}

/// A single, possibly missing, scalar value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Null,
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Timestamp(NaiveDateTime),
    Category(String),
}

impl Value {
    /// Returns true for a missing value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this value may appear in a column of `kind`.
    pub fn fits(&self, kind: ElementKind) -> bool {
        match (self, kind) {
            (Value::Null, kind) => kind.is_nullable(),
            (Value::Text(_), ElementKind::Text) => true,
            (Value::Integer(_), ElementKind::Integer | ElementKind::NullableInteger) => true,
            (Value::Float(_), ElementKind::Float) => true,
            (Value::Boolean(_), ElementKind::Boolean) => true,
            (Value::Timestamp(_), ElementKind::Timestamp) => true,
            (Value::Category(_), ElementKind::Categorical) => true,
            _ => false,
        }
    }

    /// Borrow the string payload of text and category values.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) | Value::Category(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload widened to `f64`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Timestamp payload.
    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Text(s) | Value::Category(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_DISPLAY_FORMAT)),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(ts: NaiveDateTime) -> Self {
        Value::Timestamp(ts)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str_aliases() {
        assert_eq!("int64".parse::<ElementKind>().unwrap(), ElementKind::Integer);
        assert_eq!("Nullable-Integer".parse::<ElementKind>().unwrap(), ElementKind::NullableInteger);
        assert_eq!("category".parse::<ElementKind>().unwrap(), ElementKind::Categorical);
        assert!("decimal".parse::<ElementKind>().is_err());
    }

    #[test]
    fn test_value_fits() {
        assert!(Value::Null.fits(ElementKind::Text));
        assert!(!Value::Null.fits(ElementKind::Integer));
        assert!(Value::Integer(3).fits(ElementKind::NullableInteger));
        assert!(!Value::Float(3.0).fits(ElementKind::Integer));
        assert!(!Value::Text("x".into()).fits(ElementKind::Categorical));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Null.to_string(), "");
        assert_eq!(Value::Float(1234567890.0).to_string(), "1234567890");
        assert_eq!(Value::Float(0.5).to_string(), "0.5");
        let ts = chrono::NaiveDate::from_ymd_opt(2024, 12, 25)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(Value::Timestamp(ts).to_string(), "2024-12-25 00:00:00");
    }
}
