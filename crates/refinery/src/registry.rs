//! Catalog of available transformations and the dispatch entry point.
//!
//! Hosts list the catalog to build their menus and call
//! [`Registry::invoke`] with the key and parameter the operator picked.
//!
//! ```
//! use refinery::{Column, Registry, Value};
//!
//! let registry = Registry::standard();
//! let column = Column::from_strings("state", ["ny"]);
//!
//! let result = registry.invoke("fix_state_values", &column, Some("state_code")).unwrap();
//! assert_eq!(result.output().get(0), Some(&Value::Text("NY".to_string())));
//! ```

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::column::Column;
use crate::error::{RefineryError, Result};
use crate::refinery::RefineryConfig;
use crate::transform::{
    CaseMode, DateMode, NumericMode, StateMode, Transformed, dates, numeric, states, strings,
};

static STANDARD: Lazy<Registry> =
    Lazy::new(|| Registry::new(standard_specs()).expect("standard catalog is consistent"));

/// Which value transformer a catalog entry dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformer {
    Case,
    Date,
    State,
    Numeric,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformationSpec {
    /// Stable key used by hosts, e.g. `fix_state_values`.
    pub key: String,
    /// Human-readable name.
    pub display_name: String,
    /// What the transformation does.
    pub description: String,
    /// Whether `invoke` refuses to run without a parameter.
    pub requires_parameter: bool,
    /// Parameter key to description, in menu order.
    pub parameter_menu: IndexMap<String, String>,
    /// Parameter used when none is required.
    pub default_parameter: Option<String>,
    /// Dispatch target.
    pub transformer: Transformer,
}

impl TransformationSpec {
    fn from_modes<'a>(
        key: &str,
        display_name: &str,
        description: &str,
        modes: impl IntoIterator<Item = (&'a str, &'a str)>,
        default_parameter: &str,
        transformer: Transformer,
    ) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
            requires_parameter: true,
            parameter_menu: modes
                .into_iter()
                .map(|(k, d)| (k.to_string(), d.to_string()))
                .collect(),
            default_parameter: Some(default_parameter.to_string()),
            transformer,
        }
    }

    /// Parameter keys, in menu order.
    pub fn parameter_keys(&self) -> impl Iterator<Item = &str> {
        self.parameter_menu.keys().map(String::as_str)
    }
}

fn standard_specs() -> Vec<TransformationSpec> {
    vec![
        TransformationSpec::from_modes(
            "fix_name_values",
            "Fix Name Values",
            "Transforms string values in a column (title case, uppercase, lowercase, strip whitespace, capitalize).",
            CaseMode::ALL.map(|m| (m.as_str(), m.description())),
            CaseMode::Title.as_str(),
            Transformer::Case,
        ),
        TransformationSpec::from_modes(
            "fix_date_values",
            "Fix Date Values",
            "Parses and formats date values in a column. Can standardize dates to timestamps or format them as strings in various date formats (YYYY-MM-DD, MM/DD/YYYY, DD/MM/YYYY, etc.).",
            DateMode::ALL.map(|m| (m.as_str(), m.description())),
            DateMode::Standardize.as_str(),
            Transformer::Date,
        ),
        TransformationSpec::from_modes(
            "fix_state_values",
            "Fix State Values",
            "Standardizes US state values in a column. Converts state codes to full names, full names to codes (ie. 'New York' -> 'NY'), or standardizes to proper case format (ie. 'new york' -> 'New York') using the US states directory.",
            StateMode::ALL.map(|m| (m.as_str(), m.description())),
            StateMode::Standardize.as_str(),
            Transformer::State,
        ),
        TransformationSpec::from_modes(
            "fix_numeric_values",
            "Fix Numeric Values",
            "Extracts numbers from values such as '$1,000', '50%' or '1,234.56' and converts them to plain numbers, rounded numbers, percentages, currency, phone numbers or IDs.",
            NumericMode::ALL.map(|m| (m.as_str(), m.description())),
            NumericMode::Standardize.as_str(),
            Transformer::Numeric,
        ),
    ]
}

/// Immutable table of transformations, keyed in catalog order.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Registry {
    specs: IndexMap<String, TransformationSpec>,
}

impl Registry {
    /// Build a registry, rejecting duplicate keys, entries that require a
    /// parameter but offer none, and defaults missing from the menu.
    pub fn new(specs: impl IntoIterator<Item = TransformationSpec>) -> Result<Self> {
        let mut table = IndexMap::new();

        for spec in specs {
            if spec.requires_parameter && spec.parameter_menu.is_empty() {
                return Err(RefineryError::Config(format!(
                    "Transformation '{}' requires a parameter but has an empty parameter menu",
                    spec.key
                )));
            }
            if let Some(default) = &spec.default_parameter {
                if !spec.parameter_menu.is_empty() && !spec.parameter_menu.contains_key(default) {
                    return Err(RefineryError::Config(format!(
                        "Default parameter '{}' of transformation '{}' is not in its menu",
                        default, spec.key
                    )));
                }
            }
            if table.contains_key(&spec.key) {
                return Err(RefineryError::Config(format!(
                    "Duplicate transformation key: {}",
                    spec.key
                )));
            }
            table.insert(spec.key.clone(), spec);
        }

        Ok(Self { specs: table })
    }

    /// The built-in catalog.
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    /// Keys in catalog order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.specs.keys().map(String::as_str)
    }

    /// Entries in catalog order.
    pub fn specs(&self) -> impl Iterator<Item = &TransformationSpec> {
        self.specs.values()
    }

    /// Look up an entry by key.
    pub fn get(&self, key: &str) -> Option<&TransformationSpec> {
        self.specs.get(key)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Run a transformation with the default configuration.
    pub fn invoke(&self, key: &str, column: &Column, parameter: Option<&str>) -> Result<Transformed> {
        self.invoke_with(key, column, parameter, &RefineryConfig::default())
    }

    /// Run a transformation.
    ///
    /// Fails only when the key is unknown or a required parameter is missing
    /// or blank. Entries that do not require a parameter always run with
    /// their default, ignoring `parameter`.
    pub fn invoke_with(
        &self,
        key: &str,
        column: &Column,
        parameter: Option<&str>,
        config: &RefineryConfig,
    ) -> Result<Transformed> {
        let spec = self
            .get(key)
            .ok_or_else(|| RefineryError::UnknownTransformation(key.to_string()))?;

        let mode = if spec.requires_parameter {
            match parameter.map(str::trim).filter(|p| !p.is_empty()) {
                Some(p) => p,
                None => {
                    return Err(RefineryError::MissingParameter {
                        key: spec.key.clone(),
                        options: spec.parameter_keys().map(str::to_string).collect(),
                    });
                }
            }
        } else {
            spec.default_parameter.as_deref().unwrap_or_default()
        };

        let span = tracing::info_span!("invoke", key, column = %column.name(), mode);
        let _guard = span.enter();

        let result = match spec.transformer {
            Transformer::Case => strings::fix_name_values(column, mode),
            Transformer::Date => dates::fix_date_values_with(column, mode, &config.dates),
            Transformer::State => states::fix_state_values(column, mode),
            Transformer::Numeric => numeric::fix_numeric_values_with(column, mode, &config.numeric),
        };

        tracing::info!(applied = result.is_applied(), "{}", result.message());
        Ok(result)
    }

    /// Catalog as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
