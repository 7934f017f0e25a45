//! Generator configuration.
//!
//! ```yaml
//! vendor_prefixes: true
//! default_properties:
//!   color: color
//!   slider: width
//! ```
//!
//! Every key is optional. `default_properties` registers, for each listed
//! field type, a [`ScalarResolver`](crate::ScalarResolver) that fills rules
//! without a `property` with the given name.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::load;

/// Settings applied by [`Generator::from_config`](crate::Generator::from_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Whether serialization adds vendor-prefixed duplicates.
    pub vendor_prefixes: bool,

    /// Field type → property used when a rule leaves `property` empty.
    pub default_properties: IndexMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            vendor_prefixes: true,
            default_properties: IndexMap::new(),
        }
    }
}

impl GeneratorConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, LoadError> {
        load::from_yaml(yaml)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        load::from_json(json)
    }

    /// Loads a configuration file; `.json` files are JSON, others YAML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        load::from_file(path.as_ref())
    }
}
