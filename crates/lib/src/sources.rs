//! Source file enumeration.

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::consts::{SELF_TEST_SUFFIX, SOURCE_SUFFIX};
use crate::error::{ConfigError, Result};

/// True for a file name that should be compiled.
pub fn is_source_file(name: &str) -> bool {
  name.ends_with(SOURCE_SUFFIX) && !name.ends_with(SELF_TEST_SUFFIX)
}

/// List the compilable files directly inside `root/dir`.
///
/// Entries are sorted by file name so the result does not depend on
/// directory listing order. Returned paths are `dir/<name>`, relative to
/// `root`. Subdirectories are not descended into.
pub fn find_sources(root: &Path, dir: &str) -> Result<Vec<PathBuf>> {
  let full = root.join(dir);
  let mut sources = Vec::new();

  for entry in WalkDir::new(&full).min_depth(1).max_depth(1).sort_by_file_name() {
    let entry = entry.map_err(|source| ConfigError::SourceDir {
      path: full.clone(),
      source,
    })?;
    let name = entry.file_name().to_string_lossy();

    if entry.file_type().is_dir() || !is_source_file(&name) {
      debug!(dir, name = %name, "skipping entry");
      continue;
    }
    sources.push(Path::new(dir).join(entry.file_name()));
  }

  Ok(sources)
}

/// Concatenate [`find_sources`] over `dirs`, in the order given.
///
/// Fails if a directory is listed twice, or if no directory contributes a
/// single file.
pub fn collect_sources<S: AsRef<str>>(root: &Path, dirs: &[S]) -> Result<Vec<PathBuf>> {
  for (i, dir) in dirs.iter().enumerate() {
    let dir = dir.as_ref();
    if dirs[..i].iter().any(|seen| Path::new(seen.as_ref()) == Path::new(dir)) {
      return Err(ConfigError::DuplicateSourceDir { dir: dir.to_string() }.into());
    }
  }

  let mut sources = Vec::new();
  for dir in dirs {
    let found = find_sources(root, dir.as_ref())?;
    debug!(dir = dir.as_ref(), count = found.len(), "enumerated sources");
    sources.extend(found);
  }

  if sources.is_empty() {
    return Err(
      ConfigError::NoSources {
        dirs: dirs.iter().map(|d| d.as_ref().to_string()).collect(),
      }
      .into(),
    );
  }
  Ok(sources)
}
