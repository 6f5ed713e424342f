//! Read-only environment snapshot and the override layer built on it.
//!
//! The snapshot is taken once, up front, and passed explicitly to everything
//! that consults an environment variable. Nothing in this crate reads or
//! mutates the live process environment after that.

use std::collections::BTreeMap;

/// An immutable copy of the environment variables relevant to a build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
  vars: BTreeMap<String, String>,
}

impl EnvSnapshot {
  /// Capture the current process environment.
  ///
  /// Variables whose name or value is not valid unicode are skipped.
  pub fn capture() -> Self {
    Self {
      vars: std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect(),
    }
  }

  /// Build a snapshot from explicit pairs.
  pub fn from_pairs<I, K, V>(pairs: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
  {
    Self {
      vars: pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
    }
  }

  /// Look up a variable. An empty value counts as unset.
  pub fn get(&self, name: &str) -> Option<&str> {
    self.vars.get(name).map(String::as_str).filter(|v| !v.is_empty())
  }

  /// Presence check used to rank an override above the query tool.
  pub fn is_set(&self, name: &str) -> bool {
    self.get(name).is_some()
  }

  /// The raw value of `name`, or `default` when unset.
  pub fn value(&self, name: &str, default: &str) -> String {
    self.get(name).unwrap_or(default).to_string()
  }

  /// The value of `name` (or `default`) split on `separator`, with empty
  /// pieces dropped.
  pub fn list(&self, name: &str, default: &str, separator: char) -> Vec<String> {
    split_list(self.get(name).unwrap_or(default), separator)
  }
}

fn split_list(value: &str, separator: char) -> Vec<String> {
  value
    .split(separator)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect()
}
