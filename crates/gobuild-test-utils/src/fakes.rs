//! Recording doubles for [`TargetManager`] and [`ConfigSourceReader`].

use std::collections::HashMap;
use std::sync::Mutex;

use gobuild_core::{
    ConfigSourceReader, Error, PartialConfiguration, Result, TargetManager,
};
use gobuild_fs::NormalizedPath;

/// Build an environment map from key/value pairs.
pub fn env_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A call observed by [`FakeTargetManager`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetCall {
    CleanAndValidate {
        targets: Vec<String>,
        working_dir: String,
    },
    GenerateDefaults {
        working_dir: String,
    },
}

/// [`TargetManager`] that records calls and returns canned answers.
///
/// `clean_and_validate` echoes its input unless a rejection is configured;
/// `generate_defaults` returns the configured defaults.
#[derive(Debug, Default)]
pub struct FakeTargetManager {
    defaults: Vec<String>,
    reject: Option<String>,
    calls: Mutex<Vec<TargetCall>>,
}

impl FakeTargetManager {
    pub fn new(defaults: &[&str]) -> Self {
        Self {
            defaults: defaults.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    /// Make `clean_and_validate` fail with `reason`.
    pub fn rejecting(mut self, reason: &str) -> Self {
        self.reject = Some(reason.to_string());
        self
    }

    /// Calls observed so far, in order.
    pub fn calls(&self) -> Vec<TargetCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl TargetManager for FakeTargetManager {
    fn clean_and_validate(
        &self,
        targets: Vec<String>,
        working_dir: &NormalizedPath,
    ) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(TargetCall::CleanAndValidate {
            targets: targets.clone(),
            working_dir: working_dir.to_string(),
        });

        match &self.reject {
            Some(reason) => Err(Error::InvalidTarget {
                target: targets.join(","),
                reason: reason.clone(),
            }),
            None => Ok(targets),
        }
    }

    fn generate_defaults(&self, working_dir: &NormalizedPath) -> Result<Vec<String>> {
        self.calls.lock().unwrap().push(TargetCall::GenerateDefaults {
            working_dir: working_dir.to_string(),
        });
        Ok(self.defaults.clone())
    }
}

/// [`ConfigSourceReader`] returning a fixed configuration.
#[derive(Debug, Default)]
pub struct FakeConfigSource {
    config: Option<PartialConfiguration>,
    versions: Mutex<Vec<String>>,
}

impl FakeConfigSource {
    /// A source that is not present.
    pub fn absent() -> Self {
        Self::default()
    }

    /// A source supplying `config`.
    pub fn with(config: PartialConfiguration) -> Self {
        Self {
            config: Some(config),
            ..Self::default()
        }
    }

    /// Buildpack versions passed to `read`, in order.
    pub fn versions(&self) -> Vec<String> {
        self.versions.lock().unwrap().clone()
    }
}

impl ConfigSourceReader for FakeConfigSource {
    fn read(
        &self,
        buildpack_version: &str,
        _working_dir: &NormalizedPath,
    ) -> Result<Option<PartialConfiguration>> {
        self.versions
            .lock()
            .unwrap()
            .push(buildpack_version.to_string());
        Ok(self.config.clone())
    }
}
