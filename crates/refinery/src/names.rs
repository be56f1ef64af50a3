//! snake_case normalization of column labels.

use std::collections::HashMap;

use crate::transform::Transformed;

/// Characters replaced by an underscore.
const PUNCTUATION: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '+', '=', '<', '>', '?', ';', ':', '|', '\\', '/', '"',
    '\'', '`', '~',
];

/// Rewrite one label in snake_case.
///
/// Punctuation and whitespace runs become a single underscore, letters are
/// lower-cased, and underscores at either end are removed.
///
/// ```
/// use refinery::normalize_label;
///
/// assert_eq!(normalize_label("First Name"), "first_name");
/// assert_eq!(normalize_label("  Price ($) "), "price_(_)");
/// assert_eq!(normalize_label("e-mail__Address!"), "e-mail_address");
/// ```
pub fn normalize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());

    for ch in label.chars() {
        if ch == '_' || ch.is_whitespace() || PUNCTUATION.contains(&ch) {
            if !out.ends_with('_') {
                out.push('_');
            }
        } else {
            out.extend(ch.to_lowercase());
        }
    }

    out.trim_matches('_').to_string()
}

/// Rewrite every label in snake_case, keeping length and order.
///
/// Labels that collide after normalization are kept as-is; the collision is
/// logged and mentioned in the outcome message.
pub fn fix_column_names<S: AsRef<str>>(labels: &[S]) -> Transformed<Vec<String>> {
    let normalized: Vec<String> = labels.iter().map(|l| normalize_label(l.as_ref())).collect();
    let renamed = labels
        .iter()
        .zip(&normalized)
        .filter(|(before, after)| before.as_ref() != after.as_str())
        .count();

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for label in &normalized {
        *seen.entry(label.as_str()).or_default() += 1;
    }
    let mut collisions: Vec<&str> = seen
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(label, _)| label)
        .collect();
    collisions.sort_unstable();

    let mut message = format!(
        "Normalized {} column name(s): {} renamed",
        labels.len(),
        renamed
    );
    if !collisions.is_empty() {
        tracing::warn!(collisions = ?collisions, "Column names collide after normalization");
        message.push_str(&format!("; duplicate name(s): {}", collisions.join(", ")));
    }

    tracing::debug!(total = labels.len(), renamed, "Normalized column names");
    Transformed::applied(normalized, message)
}
