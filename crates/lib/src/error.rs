//! Error types for build-descriptor resolution.
//!
//! Every error here is fatal: resolution stops at the first failure and no
//! partial descriptor is produced.

use std::path::PathBuf;

use thiserror::Error;

/// The project itself is misconfigured (manifest or source tree).
#[derive(Debug, Error)]
pub enum ConfigError {
  /// No `version = "N.N.N"` line in the manifest.
  #[error("version not found in {}", manifest.display())]
  VersionNotFound { manifest: PathBuf },

  /// A version component does not fit in a `u64`.
  #[error("version component {component} is out of range: {value}")]
  VersionOutOfRange { component: &'static str, value: String },

  #[error("failed to read manifest {}: {source}", path.display())]
  ManifestRead {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to list source directory {}: {source}", path.display())]
  SourceDir {
    path: PathBuf,
    #[source]
    source: walkdir::Error,
  },

  /// The same source directory was listed more than once.
  #[error("source directory {dir} is listed more than once")]
  DuplicateSourceDir { dir: String },

  /// Every source directory was scanned and none contained a compilable file.
  #[error("no source files found in {}", dirs.join(", "))]
  NoSources { dirs: Vec<String> },
}

/// The external package-query tool could not answer.
#[derive(Debug, Error)]
pub enum QueryError {
  /// The tool binary could not be located or executed.
  #[error("{tool} is required to resolve build flags for {package}")]
  ToolMissing {
    tool: String,
    package: String,
    #[source]
    source: std::io::Error,
  },

  #[error("{tool} failed for {package} with exit code {code:?}: {stderr}")]
  Failed {
    tool: String,
    package: String,
    code: Option<i32>,
    stderr: String,
  },

  #[error("{tool} returned unusable output for {package}: {reason}")]
  InvalidOutput {
    tool: String,
    package: String,
    reason: String,
  },
}

/// Top-level error for the resolution pipeline.
#[derive(Debug, Error)]
pub enum Error {
  #[error("configuration error: {0}")]
  Configuration(#[from] ConfigError),

  #[error(transparent)]
  Query(#[from] QueryError),
}

impl Error {
  /// True when the query tool was absent and nothing overrode it.
  pub fn is_tool_missing(&self) -> bool {
    matches!(self, Error::Query(QueryError::ToolMissing { .. }))
  }

  pub fn is_configuration(&self) -> bool {
    matches!(self, Error::Configuration(_))
  }
}

/// Result type for resolution operations
pub type Result<T> = std::result::Result<T, Error>;
