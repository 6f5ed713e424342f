//! Test utilities for extconf-lib.
//!
//! Stand-ins for the package-query tool and helpers for building throwaway
//! source trees.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::QueryError;
use crate::query::{PackageQuery, QueryMode};

/// A query stub that answers from a fixed table and records every call.
#[derive(Debug, Default)]
pub struct RecordingQuery {
  answers: HashMap<QueryMode, Vec<String>>,
  calls: RefCell<Vec<(String, QueryMode)>>,
}

impl RecordingQuery {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn answer(mut self, mode: QueryMode, tokens: &[&str]) -> Self {
    self.answers.insert(mode, tokens.iter().map(|t| t.to_string()).collect());
    self
  }

  pub fn calls(&self) -> Vec<(String, QueryMode)> {
    self.calls.borrow().clone()
  }

  pub fn call_count(&self) -> usize {
    self.calls.borrow().len()
  }
}

impl PackageQuery for RecordingQuery {
  fn tool(&self) -> &str {
    "recording-query"
  }

  fn query(&self, package: &str, mode: QueryMode) -> Result<Vec<String>, QueryError> {
    self.calls.borrow_mut().push((package.to_string(), mode));
    Ok(self.answers.get(&mode).cloned().unwrap_or_default())
  }
}

/// A query stub that behaves like an uninstalled tool.
#[derive(Debug, Default)]
pub struct MissingTool;

impl PackageQuery for MissingTool {
  fn tool(&self) -> &str {
    "pkg-config"
  }

  fn query(&self, package: &str, _mode: QueryMode) -> Result<Vec<String>, QueryError> {
    Err(QueryError::ToolMissing {
      tool: self.tool().to_string(),
      package: package.to_string(),
      source: std::io::Error::new(std::io::ErrorKind::NotFound, "not installed"),
    })
  }
}

/// A query stub that fails the test if it is ever consulted.
#[derive(Debug, Default)]
pub struct UnreachableQuery;

impl PackageQuery for UnreachableQuery {
  fn tool(&self) -> &str {
    "unreachable-query"
  }

  fn query(&self, package: &str, mode: QueryMode) -> Result<Vec<String>, QueryError> {
    panic!("query tool must not be invoked (package {package}, mode {mode})");
  }
}

/// Write an executable shell script standing in for pkg-config.
#[cfg(unix)]
pub fn fake_tool(dir: &TempDir, body: &str) -> PathBuf {
  use std::os::unix::fs::PermissionsExt;

  let path = dir.path().join("fake-pkg-config");
  std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
  std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
  path
}

/// Create empty files (and their parent directories) under `root`.
pub fn touch_all(root: &Path, files: &[&str]) {
  for file in files {
    let path = root.join(file);
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, "").unwrap();
  }
}

/// A source tree with a manifest and the given files.
pub fn project(version_line: &str, files: &[&str]) -> TempDir {
  let temp = TempDir::new().unwrap();
  std::fs::write(
    temp.path().join("pyproject.toml"),
    format!("[project]\nname = \"html5-parser\"\n{}\n", version_line),
  )
  .unwrap();
  touch_all(temp.path(), files);
  temp
}
