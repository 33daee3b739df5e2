use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::fallback::FallbackTable;
use crate::normalize::Normalization;

/// Resolver settings.
///
/// ```json
/// { "normalization": "apostrophes", "fallback": { "y'all": 3 } }
/// ```
///
/// `fallback` entries are merged over the built-in exception table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    pub normalization: Normalization,
    pub fallback: HashMap<String, usize>,
}

impl ResolverConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn fallback_table(&self) -> FallbackTable {
        FallbackTable::builtin().with_overrides(
            self.fallback
                .iter()
                .map(|(word, count)| (word.clone(), *count)),
        )
    }
}
