//! Built-in directory of US states and their postal codes.
//!
//! The directory is built once on first use and is read-only afterwards.
//!
//! ```
//! use refinery::StateDirectory;
//!
//! let states = StateDirectory::global();
//! assert_eq!(states.code_for("New York"), Some("NY"));
//! assert_eq!(states.name_for("CA"), Some("California"));
//! ```

use std::collections::HashMap;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

/// Canonical name and postal code of every state plus the District of Columbia.
const STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("District of Columbia", "DC"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
];

static DIRECTORY: Lazy<StateDirectory> = Lazy::new(StateDirectory::build);

/// Bidirectional lookup between canonical state names and postal codes.
#[derive(Debug)]
pub struct StateDirectory {
    /// Canonical name to code, in alphabetical order.
    name_to_code: IndexMap<&'static str, &'static str>,
    /// Code to canonical name, derived from `name_to_code`.
    code_to_name: HashMap<&'static str, &'static str>,
}

impl StateDirectory {
    /// The process-wide directory.
    pub fn global() -> &'static StateDirectory {
        &DIRECTORY
    }

    fn build() -> Self {
        let name_to_code: IndexMap<_, _> = STATES.iter().copied().collect();
        let code_to_name = name_to_code.iter().map(|(name, code)| (*code, *name)).collect();

        Self {
            name_to_code,
            code_to_name,
        }
    }

    /// Postal code for an exact canonical name.
    pub fn code_for(&self, name: &str) -> Option<&'static str> {
        self.name_to_code.get(name).copied()
    }

    /// Canonical name for an exact postal code.
    pub fn name_for(&self, code: &str) -> Option<&'static str> {
        self.code_to_name.get(code).copied()
    }

    /// Iterate over `(name, code)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.name_to_code.iter().map(|(name, code)| (*name, *code))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.name_to_code.len()
    }

    /// Returns true if the directory has no entries.
    pub fn is_empty(&self) -> bool {
        self.name_to_code.is_empty()
    }
}
