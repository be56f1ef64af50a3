//! Coercion stage: every value becomes an optional finite `f64`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::column::{Column, ElementKind, Value};

use super::NumericConfig;

/// First signed decimal number embedded in a string.
static EMBEDDED_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?[0-9]+\.?[0-9]*").unwrap());

/// Coerce a whole column. The result has one entry per value.
pub(super) fn coerce_column(column: &Column, config: &NumericConfig) -> Vec<Option<f64>> {
    let kind = column.kind();
    if !kind.is_numeric() && kind != ElementKind::Text {
        tracing::warn!(
            column = %column.name(),
            %kind,
            "Column may not contain numeric values, attempting conversion"
        );
    }

    column
        .iter()
        .map(|value| coerce_value(value, config))
        .map(|n| n.filter(|x| x.is_finite()))
        .collect()
}

fn coerce_value(value: &Value, config: &NumericConfig) -> Option<f64> {
    match value {
        Value::Null => None,
        Value::Integer(i) => Some(*i as f64),
        Value::Float(x) => Some(*x),
        Value::Text(s) => coerce_text(s, config),
        Value::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Category(label) => label.trim().parse::<f64>().ok(),
        Value::Timestamp(ts) => ts.and_utc().timestamp_nanos_opt().map(|ns| ns as f64),
    }
}

/// Extract a number from decorated text such as `"$1,234.50"` or `"12.5 %"`.
///
/// Currency glyphs, thousands separators and whitespace are ignored, and a
/// trailing percent sign divides the result by 100. When the cleaned text is
/// still not a number, the first embedded number is used. Returns `None` for
/// null tokens, text without digits, and non-finite results.
///
/// ```
/// use refinery::transform::numeric::coerce_text;
/// use refinery::transform::numeric::NumericConfig;
///
/// let config = NumericConfig::default();
/// assert_eq!(coerce_text("$1,000", &config), Some(1000.0));
/// assert_eq!(coerce_text("50%", &config), Some(0.5));
/// assert_eq!(coerce_text("about 12 kg", &config), Some(12.0));
/// assert_eq!(coerce_text("none", &config), None);
/// ```
pub fn coerce_text(raw: &str, config: &NumericConfig) -> Option<f64> {
    let trimmed = raw.trim();
    let lower = trimmed.to_lowercase();
    if trimmed.is_empty() || config.null_tokens.iter().any(|t| t.to_lowercase() == lower) {
        return None;
    }

    let mut cleaned: String = trimmed
        .chars()
        .filter(|c| !config.currency_symbols.contains(c))
        .collect();

    let is_percentage = cleaned.ends_with('%');
    if is_percentage {
        cleaned = cleaned.trim_end_matches('%').to_string();
    }

    cleaned.retain(|c| c != ',' && !c.is_whitespace());

    let number = cleaned.parse::<f64>().ok().or_else(|| {
        EMBEDDED_NUMBER
            .find(&cleaned)
            .and_then(|m| m.as_str().parse::<f64>().ok())
    })?;

    let number = if is_percentage { number / 100.0 } else { number };
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn coerce(raw: &str) -> Option<f64> {
        coerce_text(raw, &NumericConfig::default())
    }

    #[test]
    fn test_currency_and_separators() {
        assert_eq!(coerce("$1,000"), Some(1000.0));
        assert_eq!(coerce("€ 2 500,00"), Some(250000.0));
        assert_eq!(coerce("£-3.5"), Some(-3.5));
        assert_eq!(coerce("₹12"), Some(12.0));
    }

    #[test]
    fn test_percentages() {
        assert_eq!(coerce("50%"), Some(0.5));
        assert_eq!(coerce(" 12.5 % "), Some(0.125));
        assert_eq!(coerce("about 40%"), Some(0.4));
    }

    #[test]
    fn test_unrecognised_sign_decorations() {
        assert_eq!(coerce("%50"), Some(50.0));
        assert_eq!(coerce("(500)"), Some(500.0));
        assert_eq!(coerce("-500"), Some(-500.0));
    }

    #[test]
    fn test_embedded_numbers() {
        assert_eq!(coerce("12 units"), Some(12.0));
        assert_eq!(coerce("v1.2.3"), Some(1.2));
        assert_eq!(coerce("-7abc"), Some(-7.0));
        assert_eq!(coerce("bogus"), None);
        assert_eq!(coerce("-"), None);
    }

    #[test]
    fn test_null_tokens_and_non_finite() {
        assert_eq!(coerce("NaN"), None);
        assert_eq!(coerce("None"), None);
        assert_eq!(coerce("null"), None);
        assert_eq!(coerce("   "), None);
        assert_eq!(coerce("inf"), None);
        assert_eq!(coerce("-infinity"), None);
        assert_eq!(coerce("1e400"), None);
    }

    #[test]
    fn test_other_kinds() {
        let config = NumericConfig::default();

        let flags = Column::booleans("flag", [Some(true), Some(false), None]);
        assert_eq!(coerce_column(&flags, &config), vec![Some(1.0), Some(0.0), None]);

        let labels = Column::categories("grade", [Some(" 3 "), Some("high")]);
        assert_eq!(coerce_column(&labels, &config), vec![Some(3.0), None]);

        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 1)
            .unwrap();
        let times = Column::timestamps("at", [Some(epoch)]);
        assert_eq!(coerce_column(&times, &config), vec![Some(1e9)]);
    }

    #[test]
    fn test_numeric_kinds_cast_directly() {
        let config = NumericConfig::default();
        let ints = Column::nullable_integers("n", [Some(4), None]);
        assert_eq!(coerce_column(&ints, &config), vec![Some(4.0), None]);
    }
}
