//! Project version extraction from the manifest.

use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::error::{ConfigError, Result};

static VERSION_LINE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r#"(?m)^version = "([0-9]+)\.([0-9]+)\.([0-9]+)""#).expect("version pattern is valid"));

/// A `major.minor.patch` project version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
  pub major: u64,
  pub minor: u64,
  pub patch: u64,
}

impl Version {
  pub fn new(major: u64, minor: u64, patch: u64) -> Self {
    Self { major, minor, patch }
  }

  /// Read the manifest at `path` and extract its version.
  pub fn read(path: &Path) -> Result<Self> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ManifestRead {
      path: path.to_path_buf(),
      source,
    })?;
    let version = Self::parse(&text)?.ok_or_else(|| ConfigError::VersionNotFound {
      manifest: path.to_path_buf(),
    })?;
    debug!(manifest = %path.display(), %version, "read project version");
    Ok(version)
  }

  /// Extract the version from manifest text.
  ///
  /// Only the first line of the exact form `version = "A.B.C"`, starting at
  /// column zero, is considered. Returns `Ok(None)` when there is no such line.
  pub fn parse(text: &str) -> Result<Option<Self>> {
    let Some(caps) = VERSION_LINE.captures(text) else {
      return Ok(None);
    };
    let component = |index: usize, name: &'static str| {
      let raw = &caps[index];
      raw.parse::<u64>().map_err(|_| ConfigError::VersionOutOfRange {
        component: name,
        value: raw.to_string(),
      })
    };
    Ok(Some(Self::new(
      component(1, "major")?,
      component(2, "minor")?,
      component(3, "patch")?,
    )))
  }

  /// The preprocessor macros handed to the compiler, in order.
  pub fn macros(&self) -> [(&'static str, String); 3] {
    [
      ("MAJOR", self.major.to_string()),
      ("MINOR", self.minor.to_string()),
      ("PATCH", self.patch.to_string()),
    ]
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
  }
}
