//! Environment lookup
//!
//! Every override is keyed on presence: a variable set to the empty string
//! is still an override.

use std::collections::HashMap;

/// Read-only access to environment variables.
pub trait EnvLookup: Send + Sync {
    /// Return the value of `key`, or `None` when it is not set.
    fn lookup(&self, key: &str) -> Option<String>;
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }
}
