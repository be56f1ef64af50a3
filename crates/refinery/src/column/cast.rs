//! Explicit element-kind changes requested by an operator.
//!
//! Casting is strict: a value that cannot be represented in the target kind
//! is an error, not a silent null. The one exception is timestamps, where
//! unparsable text becomes null exactly as in the date parse phase.

use crate::error::{RefineryError, Result};
use crate::transform::dates::{DateConfig, parse_timestamp};

use super::column::Column;
use super::types::{ElementKind, Value};

impl Column {
    /// Cast the column to another element kind.
    pub fn cast(&self, target: ElementKind) -> Result<Column> {
        self.cast_with(target, &DateConfig::default())
    }

    /// Cast using custom date parsing formats.
    pub fn cast_with(&self, target: ElementKind, dates: &DateConfig) -> Result<Column> {
        if target == self.kind() {
            return Ok(self.clone());
        }

        let mut values = Vec::with_capacity(self.len());
        for (row, value) in self.iter().enumerate() {
            let cast = cast_value(value, target, dates).ok_or_else(|| RefineryError::Cast {
                column: self.name().to_string(),
                row,
                value: value.to_string(),
                target,
            })?;
            values.push(cast);
        }

        tracing::debug!(
            column = %self.name(),
            from = %self.kind(),
            to = %target,
            "Cast column"
        );

        Ok(self.derive(target, values))
    }
}

/// Convert a single value, `None` when it cannot be represented.
fn cast_value(value: &Value, target: ElementKind, dates: &DateConfig) -> Option<Value> {
    if value.is_null() {
        return target.is_nullable().then_some(Value::Null);
    }

    match target {
        ElementKind::Text => Some(Value::Text(value.to_string())),
        ElementKind::Categorical => Some(Value::Category(value.to_string())),
        ElementKind::Float => to_float(value).map(Value::Float),
        ElementKind::Integer | ElementKind::NullableInteger => to_integer(value).map(Value::Integer),
        ElementKind::Boolean => to_boolean(value).map(Value::Boolean),
        ElementKind::Timestamp => to_timestamp(value, dates),
    }
}

fn to_float(value: &Value) -> Option<f64> {
    match value {
        Value::Integer(i) => Some(*i as f64),
        Value::Float(x) => Some(*x),
        Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Text(s) | Value::Category(s) => s.trim().parse::<f64>().ok(),
        Value::Timestamp(_) | Value::Null => None,
    }
}

fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        // Only whole numbers inside the i64 range convert cleanly
        Value::Float(x) if x.fract() == 0.0 && *x >= i64::MIN as f64 && *x < i64::MAX as f64 => {
            Some(*x as i64)
        }
        Value::Boolean(b) => Some(i64::from(*b)),
        Value::Text(s) | Value::Category(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn to_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Boolean(b) => Some(*b),
        Value::Integer(i) => Some(*i != 0),
        Value::Float(x) => Some(*x != 0.0),
        Value::Text(s) | Value::Category(s) => {
            match s.trim().to_lowercase().as_str() {
                "true" | "yes" | "1" | "t" | "y" => Some(true),
                "false" | "no" | "0" | "f" | "n" => Some(false),
                _ => None,
            }
        }
        Value::Timestamp(_) | Value::Null => None,
    }
}

fn to_timestamp(value: &Value, dates: &DateConfig) -> Option<Value> {
    match value {
        Value::Timestamp(ts) => Some(Value::Timestamp(*ts)),
        Value::Text(s) | Value::Category(s) => Some(
            parse_timestamp(s, dates)
                .map(Value::Timestamp)
                .unwrap_or(Value::Null),
        ),
        _ => None,
    }
}
