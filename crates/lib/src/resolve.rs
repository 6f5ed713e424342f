//! Include-directory, library and library-directory resolution.
//!
//! Each category is answered by exactly one [`Source`], chosen by precedence:
//!
//! 1. its override variable, if set (always wins, even if the value is wrong)
//! 2. for [`FlagCategory::Libraries`] on Windows only, a fixed default
//! 3. the package-query tool, with the two-character flag prefix stripped
//!
//! The Windows default exists because pkg-config output is not trusted for
//! library names there. Include and library directories have no such
//! fallback and still need the tool.

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::consts::{
  INCLUDE_DIRS_ENV, LIBRARIES_ENV, LIBRARY_DIRS_ENV, PATH_LIST_SEPARATOR, WINDOWS_DEFAULT_LIBRARIES,
};
use crate::env::EnvSnapshot;
use crate::error::Result;
use crate::platform::Platform;
use crate::query::{PackageQuery, QueryMode};

/// A kind of build input resolved from the environment or the query tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagCategory {
  IncludeDirs,
  Libraries,
  LibraryDirs,
}

impl FlagCategory {
  pub const ALL: [FlagCategory; 3] = [
    FlagCategory::IncludeDirs,
    FlagCategory::Libraries,
    FlagCategory::LibraryDirs,
  ];

  /// The environment variable that overrides this category.
  pub fn override_var(&self) -> &'static str {
    match self {
      FlagCategory::IncludeDirs => INCLUDE_DIRS_ENV,
      FlagCategory::Libraries => LIBRARIES_ENV,
      FlagCategory::LibraryDirs => LIBRARY_DIRS_ENV,
    }
  }

  pub fn query_mode(&self) -> QueryMode {
    match self {
      FlagCategory::IncludeDirs => QueryMode::IncludeDirs,
      FlagCategory::Libraries => QueryMode::Libraries,
      FlagCategory::LibraryDirs => QueryMode::LibraryDirs,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      FlagCategory::IncludeDirs => "include_dirs",
      FlagCategory::Libraries => "libraries",
      FlagCategory::LibraryDirs => "library_dirs",
    }
  }
}

impl fmt::Display for FlagCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Where a category's values came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
  /// The category's override environment variable.
  Override,
  /// The fixed Windows library list.
  PlatformDefault,
  /// The package-query tool.
  Query,
}

impl fmt::Display for Source {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Source::Override => "override",
      Source::PlatformDefault => "platform default",
      Source::Query => "query",
    })
  }
}

/// The values for one category and the source that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolved {
  pub category: FlagCategory,
  pub source: Source,
  pub values: Vec<String>,
}

/// Resolves build inputs for one package against one environment snapshot.
pub struct Resolver<'a> {
  env: &'a EnvSnapshot,
  platform: Platform,
  query: &'a dyn PackageQuery,
  package: &'a str,
}

impl<'a> Resolver<'a> {
  pub fn new(env: &'a EnvSnapshot, platform: Platform, query: &'a dyn PackageQuery, package: &'a str) -> Self {
    Self {
      env,
      platform,
      query,
      package,
    }
  }

  /// Pick the source for `category` without consulting it.
  pub fn select(&self, category: FlagCategory) -> Source {
    if self.env.is_set(category.override_var()) {
      Source::Override
    } else if category == FlagCategory::Libraries && self.platform.is_windowed() {
      Source::PlatformDefault
    } else {
      Source::Query
    }
  }

  /// Resolve one category.
  pub fn resolve(&self, category: FlagCategory) -> Result<Resolved> {
    let source = self.select(category);
    let values = match source {
      Source::Override => self.env.list(category.override_var(), "", PATH_LIST_SEPARATOR),
      Source::PlatformDefault => WINDOWS_DEFAULT_LIBRARIES.iter().map(|s| s.to_string()).collect(),
      Source::Query => self
        .query
        .query(self.package, category.query_mode())?
        .iter()
        .map(|flag| strip_flag_prefix(flag).to_string())
        .collect(),
    };

    info!(
      category = %category,
      source = %source,
      count = values.len(),
      "resolved build input"
    );

    Ok(Resolved {
      category,
      source,
      values,
    })
  }

  pub fn include_dirs(&self) -> Result<Resolved> {
    self.resolve(FlagCategory::IncludeDirs)
  }

  pub fn libraries(&self) -> Result<Resolved> {
    self.resolve(FlagCategory::Libraries)
  }

  pub fn library_dirs(&self) -> Result<Resolved> {
    self.resolve(FlagCategory::LibraryDirs)
  }
}

impl fmt::Debug for Resolver<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Resolver")
      .field("platform", &self.platform)
      .field("tool", &self.query.tool())
      .field("package", &self.package)
      .finish()
  }
}

/// Drop the leading `-I` / `-l` / `-L` marker from a flag token.
///
/// Tokens are stripped by position, not by matching the marker, so a token
/// shorter than two characters becomes empty.
fn strip_flag_prefix(flag: &str) -> &str {
  flag.char_indices().nth(2).map_or("", |(i, _)| &flag[i..])
}
