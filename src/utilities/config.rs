//! Configuration reading seam.
//!
//! The core never loads configuration itself; it reads resolved string
//! values by key through [`ConfigReader`]. An empty string means "unset",
//! letting adapters fall back to their defaults.

use std::collections::HashMap;

/// Read-only configuration lookup by key.
pub trait ConfigReader: Send + Sync {
    /// The value for `key`, or `""` when unset.
    fn get_string(&self, key: &str) -> String;
}

/// Map-backed [`ConfigReader`] for wiring and tests.
#[derive(Debug, Clone, Default)]
pub struct MapConfig {
    values: HashMap<String, String>,
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a key, replacing any previous value.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigReader for MapConfig {
    fn get_string(&self, key: &str) -> String {
        self.values.get(key).cloned().unwrap_or_default()
    }
}

impl From<HashMap<String, String>> for MapConfig {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}
