//! Presentation stage: coerced numbers rendered as the requested mode.

use crate::column::{Column, ElementKind, Value};

use super::{NumericConfig, NumericMode};

pub(super) fn present(
    column: &Column,
    numbers: &[Option<f64>],
    mode: NumericMode,
    config: &NumericConfig,
) -> Column {
    match mode {
        NumericMode::Standardize => floats(column, numbers.iter().copied()),
        NumericMode::Format => floats(column, numbers.iter().map(|n| n.map(round_cents))),
        NumericMode::Percentage => texts(column, numbers, format_percentage),
        NumericMode::Money => texts(column, numbers, format_money),
        NumericMode::Phone => texts(column, numbers, format_phone),
        NumericMode::Id => ids(column, numbers, config.integral_tolerance),
    }
}

fn floats(column: &Column, numbers: impl Iterator<Item = Option<f64>>) -> Column {
    column.derive(
        ElementKind::Float,
        numbers.map(|n| n.map_or(Value::Null, Value::Float)).collect(),
    )
}

/// Text output: missing numbers render as the empty string.
fn texts(column: &Column, numbers: &[Option<f64>], render: fn(f64) -> String) -> Column {
    column.derive(
        ElementKind::Text,
        numbers
            .iter()
            .map(|n| Value::Text(n.map(render).unwrap_or_default()))
            .collect(),
    )
}

fn ids(column: &Column, numbers: &[Option<f64>], tolerance: f64) -> Column {
    let whole: Option<Vec<Option<i64>>> = numbers
        .iter()
        .map(|n| match n {
            None => Some(None),
            Some(x) => as_whole(*x, tolerance).map(Some),
        })
        .collect();

    match whole {
        Some(ints) => column.derive(
            ElementKind::NullableInteger,
            ints.into_iter().map(Value::from).collect(),
        ),
        None => {
            tracing::debug!(column = %column.name(), "Non-integral values kept as floats");
            floats(column, numbers.iter().copied())
        }
    }
}

/// The nearest integer, if `x` lies within `tolerance` of it and fits in `i64`.
fn as_whole(x: f64, tolerance: f64) -> Option<i64> {
    let nearest = x.round();
    let in_range = nearest >= i64::MIN as f64 && nearest < i64::MAX as f64;
    (in_range && (x - nearest).abs() <= tolerance).then_some(nearest as i64)
}

/// Round to two decimals, ties to even.
fn round_cents(x: f64) -> f64 {
    let scaled = x * 100.0;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round_ties_even() / 100.0
}

/// Insert `,` every three digits of an unsigned integer string.
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `0.5` becomes `"50.00%"`.
pub fn format_percentage(x: f64) -> String {
    format!("{:.2}%", x * 100.0)
}

/// `1234.5` becomes `"$1,234.50"`, `-5` becomes `"$-5.00"`.
pub fn format_money(x: f64) -> String {
    let fixed = format!("{:.2}", x);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (whole, cents) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
    format!("${}{}.{}", sign, group_thousands(whole), cents)
}

/// Digits of the shortest rendering of `x`, prefixed with `+`.
///
/// Whole numbers render without a fractional part, so `1234567890.0` becomes
/// `"+1234567890"` and not `"+12345678900"` as a float-to-string that keeps
/// `.0` would give. Fractional digits are kept: `12.5` becomes `"+125"`.
/// Values without digits render empty.
pub fn format_phone(x: f64) -> String {
    let digits: String = x.to_string().chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        String::new()
    } else {
        format!("+{}", digits)
    }
}
