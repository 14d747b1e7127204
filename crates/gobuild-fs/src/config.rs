//! YAML configuration loading

use crate::{Error, NormalizedPath, Result};
use serde::de::DeserializeOwned;
use std::fs;

/// Loads YAML project configuration such as `buildpack.yml`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load and deserialize a YAML file.
    ///
    /// An empty document deserializes as if it were an empty mapping.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let native = path.to_native();
        let content = fs::read_to_string(&native).map_err(|e| Error::io(&native, e))?;

        let source = if content.trim().is_empty() { "{}" } else { &content };
        serde_yaml::from_str(source).map_err(|e| Error::ConfigParse {
            path: native,
            message: e.to_string(),
        })
    }
}
