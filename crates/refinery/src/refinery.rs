//! Main Refinery struct and public API.

use serde::{Deserialize, Serialize};

use crate::column::Column;
use crate::error::Result;
use crate::names;
use crate::registry::Registry;
use crate::transform::{DateConfig, NumericConfig, Transformed};

/// Configuration for Refinery transformations.
///
/// Every field has a default, so a JSON document only needs the settings it
/// changes:
///
/// ```
/// use refinery::{DateConfig, RefineryConfig};
///
/// let config = RefineryConfig::from_json(r#"{"numeric": {"currency_symbols": ["$", "CHF"]}}"#);
/// assert!(config.is_err());
///
/// let config = RefineryConfig::from_json(r#"{"numeric": {"currency_symbols": ["$", "₣"]}}"#).unwrap();
/// assert_eq!(config.numeric.currency_symbols, vec!['$', '₣']);
/// assert_eq!(config.dates, DateConfig::default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefineryConfig {
    /// Numeric coercion settings.
    pub numeric: NumericConfig,
    /// Accepted date input formats.
    pub dates: DateConfig,
}

impl RefineryConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The main Refinery entry point.
///
/// Holds a configuration and a transformation catalog, and routes every
/// request through the catalog.
#[derive(Debug, Clone)]
pub struct Refinery {
    config: RefineryConfig,
    registry: Registry,
}

impl Refinery {
    /// Create a new Refinery instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(RefineryConfig::default())
    }

    /// Create a Refinery instance with custom configuration.
    pub fn with_config(config: RefineryConfig) -> Self {
        Self {
            config,
            registry: Registry::standard().clone(),
        }
    }

    /// Replace the standard catalog.
    pub fn with_registry(mut self, registry: Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &RefineryConfig {
        &self.config
    }

    /// Catalog of available transformations.
    pub fn catalog(&self) -> &Registry {
        &self.registry
    }

    /// Apply the transformation registered under `key` to a column.
    pub fn apply(&self, key: &str, column: &Column, parameter: Option<&str>) -> Result<Transformed> {
        self.registry.invoke_with(key, column, parameter, &self.config)
    }

    /// Rewrite column labels in snake_case.
    pub fn fix_column_names<S: AsRef<str>>(&self, labels: &[S]) -> Transformed<Vec<String>> {
        names::fix_column_names(labels)
    }
}

impl Default for Refinery {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{ElementKind, Value};
    use crate::error::RefineryError;

    #[test]
    fn test_apply_uses_config() {
        let mut config = RefineryConfig::default();
        config.dates.date_formats = vec!["%d.%m.%Y".to_string()];
        let refinery = Refinery::with_config(config);

        let column = Column::from_strings("when", ["25.12.2024", "2024-12-25"]);
        let out = refinery
            .apply("fix_date_values", &column, Some("yyyy-mm-dd"))
            .unwrap()
            .into_output();

        assert_eq!(out.kind(), ElementKind::Text);
        assert_eq!(out.values(), &[Value::Text("2024-12-25".to_string()), Value::Null]);
    }

    #[test]
    fn test_apply_propagates_registry_errors() {
        let refinery = Refinery::new();
        let column = Column::from_strings("x", ["1"]);
        assert!(matches!(
            refinery.apply("fix_numeric_values", &column, None),
            Err(RefineryError::MissingParameter { .. })
        ));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = RefineryConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(RefineryConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejects_malformed_json() {
        assert!(matches!(
            RefineryConfig::from_json("{not json"),
            Err(RefineryError::Json(_))
        ));
    }

    #[test]
    fn test_fix_column_names() {
        let refinery = Refinery::default();
        let labels = vec!["Zip Code".to_string()];
        assert_eq!(refinery.fix_column_names(&labels).into_output(), vec!["zip_code"]);
    }
}
