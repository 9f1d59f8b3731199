//! Environment access, injectable so evaluations can run against fixtures.

use std::ffi::OsString;

use tracing::warn;

/// Read-only view of process environment variables.
pub trait EnvProvider {
    /// Raw value of `key`, if set.
    fn get(&self, key: &str) -> Option<OsString>;

    /// Value of `key` as UTF-8.
    ///
    /// Non-UTF-8 values are converted lossily and logged.
    fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| {
            value.into_string().unwrap_or_else(|raw| {
                warn!(variable = key, "value is not valid UTF-8, converting lossily");
                raw.to_string_lossy().into_owned()
            })
        })
    }

    /// Like [`get_string`](Self::get_string), treating an empty value as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get_string(key).filter(|value| !value.is_empty())
    }
}

/// The real process environment.
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// Fixed set of variables for tests.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Default)]
pub struct MockEnv {
    vars: std::collections::HashMap<String, OsString>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockEnv {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl EnvProvider for MockEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.vars.get(key).cloned()
    }
}
