//! External package-query tool invocation.
//!
//! [`PackageQuery`] is the seam between flag resolution and whatever answers
//! "what are this library's build flags?". [`PkgConfig`] answers it by running
//! a pkg-config compatible executable; tests substitute stubs.

use std::fmt;
use std::io::ErrorKind;
use std::process::Command;

use serde::Serialize;
use tracing::debug;

use crate::consts::{DEFAULT_QUERY_TOOL, QUERY_TOOL_ENV};
use crate::env::EnvSnapshot;
use crate::error::QueryError;

/// Which subset of flags to ask the tool for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryMode {
  /// `-I<dir>` tokens only.
  IncludeDirs,
  /// `-l<name>` tokens only.
  Libraries,
  /// `-L<dir>` tokens only.
  LibraryDirs,
}

impl QueryMode {
  /// The command-line switch selecting this mode.
  pub fn arg(&self) -> &'static str {
    match self {
      QueryMode::IncludeDirs => "--cflags-only-I",
      QueryMode::Libraries => "--libs-only-l",
      QueryMode::LibraryDirs => "--libs-only-L",
    }
  }
}

impl fmt::Display for QueryMode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.arg())
  }
}

/// Something that can report a package's compiler or linker flags.
pub trait PackageQuery {
  /// Name of the tool, for diagnostics.
  fn tool(&self) -> &str;

  /// Return the flag tokens for `package` in the given mode.
  ///
  /// Tokens are returned as the tool printed them (prefix included), with
  /// empty tokens removed.
  fn query(&self, package: &str, mode: QueryMode) -> Result<Vec<String>, QueryError>;
}

/// Runs a pkg-config compatible executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkgConfig {
  program: String,
}

impl PkgConfig {
  pub fn new(program: impl Into<String>) -> Self {
    Self { program: program.into() }
  }

  /// Use `PKGCONFIG_EXE` from the snapshot, falling back to `pkg-config`.
  pub fn from_env(env: &EnvSnapshot) -> Self {
    Self::new(env.value(QUERY_TOOL_ENV, DEFAULT_QUERY_TOOL))
  }

  pub fn program(&self) -> &str {
    &self.program
  }

  fn invalid(&self, package: &str, reason: &str) -> QueryError {
    QueryError::InvalidOutput {
      tool: self.program.clone(),
      package: package.to_string(),
      reason: reason.to_string(),
    }
  }
}

impl Default for PkgConfig {
  fn default() -> Self {
    Self::new(DEFAULT_QUERY_TOOL)
  }
}

impl PackageQuery for PkgConfig {
  fn tool(&self) -> &str {
    &self.program
  }

  fn query(&self, package: &str, mode: QueryMode) -> Result<Vec<String>, QueryError> {
    debug!(tool = %self.program, package, mode = %mode, "querying package flags");

    let output = Command::new(&self.program)
      .arg(package)
      .arg(mode.arg())
      .output()
      .map_err(|source| match source.kind() {
        ErrorKind::NotFound | ErrorKind::PermissionDenied => QueryError::ToolMissing {
          tool: self.program.clone(),
          package: package.to_string(),
          source,
        },
        _ => QueryError::Failed {
          tool: self.program.clone(),
          package: package.to_string(),
          code: None,
          stderr: source.to_string(),
        },
      })?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
      debug!(stderr = %stderr, "query tool stderr");
      return Err(QueryError::Failed {
        tool: self.program.clone(),
        package: package.to_string(),
        code: output.status.code(),
        stderr,
      });
    }

    let stdout = String::from_utf8(output.stdout).map_err(|_| self.invalid(package, "output is not valid UTF-8"))?;
    debug!(stdout = %stdout.trim(), "query tool output");

    tokenize(&stdout).ok_or_else(|| self.invalid(package, "unbalanced quoting in output"))
  }
}

/// Stands in for `#` while splitting; `shlex` would read a leading `#` as a
/// comment and drop the rest of the line.
const HASH_PLACEHOLDER: char = '\u{E000}';

/// Split tool output into shell-style words, dropping empty ones.
///
/// `#` is an ordinary character: a word starting with it is kept as-is.
/// Returns `None` if the quoting is malformed.
pub fn tokenize(output: &str) -> Option<Vec<String>> {
  if output.contains(HASH_PLACEHOLDER) {
    return None;
  }
  let words = shlex::split(&output.replace('#', &HASH_PLACEHOLDER.to_string()))?;
  Some(
    words
      .into_iter()
      .filter(|w| !w.is_empty())
      .map(|w| w.replace(HASH_PLACEHOLDER, "#"))
      .collect(),
  )
}
