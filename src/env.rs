//! Environment variable lookup with an injectable source.
//!
//! [`Env::real()`] reads the process environment. [`Env::mock()`] reads a
//! fixed map, which lets config layering be tested in unit and integration
//! tests without `unsafe` calls to [`std::env::set_var`].

use std::collections::HashMap;

/// Environment variable reader.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Read from the given key-value pairs only.
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Trimmed value of `name`. Unset, blank and non-UTF-8 values are `None`.
    pub fn get(&self, name: &str) -> Option<String> {
        let raw = match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }?;
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
