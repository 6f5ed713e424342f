//! Build descriptor assembly.
//!
//! A [`BuildDescriptor`] is everything the packaging toolchain needs to compile
//! and link the extension: sources, search paths, libraries, compile flags and
//! version macros. It is produced in one linear pass by [`assemble`] and never
//! modified afterwards.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::consts::{
  DEFAULT_PACKAGE, EXTENSION_NAME, MANIFEST_FILE, SOURCE_DIRS, UNIX_COMPILE_FLAGS, WINDOWS_COMPILE_FLAGS,
};
use crate::env::EnvSnapshot;
use crate::error::Result;
use crate::platform::Platform;
use crate::query::{PackageQuery, PkgConfig};
use crate::resolve::{Resolved, Resolver};
use crate::sources::collect_sources;
use crate::version::Version;

/// Inputs to a single descriptor build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
  /// Source tree root; source paths in the descriptor are relative to it.
  pub root: PathBuf,
  /// Manifest holding the `version = "..."` line.
  pub manifest: PathBuf,
  /// Directories scanned for sources, in order.
  pub source_dirs: Vec<String>,
  /// Package name passed to the query tool.
  pub package: String,
  /// Dotted module name of the extension.
  pub extension: String,
}

impl BuildConfig {
  /// Defaults for the tree at `root`.
  pub fn new(root: impl Into<PathBuf>) -> Self {
    let root = root.into();
    Self {
      manifest: root.join(MANIFEST_FILE),
      root,
      source_dirs: SOURCE_DIRS.iter().map(|d| d.to_string()).collect(),
      package: DEFAULT_PACKAGE.to_string(),
      extension: EXTENSION_NAME.to_string(),
    }
  }

  pub fn with_manifest(mut self, manifest: impl Into<PathBuf>) -> Self {
    self.manifest = manifest.into();
    self
  }

  pub fn with_package(mut self, package: impl Into<String>) -> Self {
    self.package = package.into();
    self
  }

  pub fn with_source_dirs<S: Into<String>>(mut self, dirs: impl IntoIterator<Item = S>) -> Self {
    self.source_dirs = dirs.into_iter().map(Into::into).collect();
    self
  }
}

/// The fully resolved compile and link inputs for the extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildDescriptor {
  name: String,
  version: Version,
  sources: Vec<PathBuf>,
  include_dirs: Vec<PathBuf>,
  library_dirs: Vec<PathBuf>,
  libraries: Vec<String>,
  compile_flags: Vec<String>,
  macros: BTreeMap<String, String>,
  #[serde(skip)]
  provenance: Vec<Resolved>,
}

impl BuildDescriptor {
  /// Assemble a descriptor using the live query tool named by the snapshot.
  pub fn build(config: &BuildConfig, env: &EnvSnapshot, platform: Platform) -> Result<Self> {
    assemble(config, env, platform, &PkgConfig::from_env(env))
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn version(&self) -> Version {
    self.version
  }

  pub fn sources(&self) -> &[PathBuf] {
    &self.sources
  }

  pub fn include_dirs(&self) -> &[PathBuf] {
    &self.include_dirs
  }

  pub fn library_dirs(&self) -> &[PathBuf] {
    &self.library_dirs
  }

  pub fn libraries(&self) -> &[String] {
    &self.libraries
  }

  pub fn compile_flags(&self) -> &[String] {
    &self.compile_flags
  }

  pub fn macros(&self) -> &BTreeMap<String, String> {
    &self.macros
  }

  /// How each of include dirs, libraries and library dirs was resolved.
  pub fn provenance(&self) -> &[Resolved] {
    &self.provenance
  }
}

/// Compiler flags for the platform.
pub fn compile_flags(platform: Platform) -> Vec<String> {
  let flags = if platform.is_windowed() {
    WINDOWS_COMPILE_FLAGS
  } else {
    UNIX_COMPILE_FLAGS
  };
  flags.iter().map(|f| f.to_string()).collect()
}

/// Run the resolution pipeline against an explicit query implementation.
///
/// Order is fixed: version, include dirs, libraries, library dirs, sources.
/// The first failure aborts the pipeline.
pub fn assemble(
  config: &BuildConfig,
  env: &EnvSnapshot,
  platform: Platform,
  query: &dyn PackageQuery,
) -> Result<BuildDescriptor> {
  info!(root = %config.root.display(), %platform, tool = query.tool(), "resolving build descriptor");

  let version = Version::read(&config.manifest)?;

  let resolver = Resolver::new(env, platform, query, &config.package);
  let include_dirs = resolver.include_dirs()?;
  let libraries = resolver.libraries()?;
  let library_dirs = resolver.library_dirs()?;

  let sources = collect_sources(&config.root, &config.source_dirs)?;

  let descriptor = BuildDescriptor {
    name: config.extension.clone(),
    version,
    sources,
    include_dirs: to_paths(&include_dirs.values),
    library_dirs: to_paths(&library_dirs.values),
    libraries: libraries.values.clone(),
    compile_flags: compile_flags(platform),
    macros: version
      .macros()
      .into_iter()
      .map(|(name, value)| (name.to_string(), value))
      .collect(),
    provenance: vec![include_dirs, libraries, library_dirs],
  };

  info!(
    name = %descriptor.name,
    %version,
    sources = descriptor.sources.len(),
    libraries = ?descriptor.libraries,
    "build descriptor ready"
  );
  Ok(descriptor)
}

fn to_paths(values: &[String]) -> Vec<PathBuf> {
  values.iter().map(PathBuf::from).collect()
}
