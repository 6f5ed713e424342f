//! CLI smoke tests for extconf.
//!
//! No test here depends on a real pkg-config: the query tool is pointed at a
//! binary that does not exist, and overrides supply the flags where needed.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

const OVERRIDE_VARS: &[&str] = &["LIBXML_INCLUDE_DIRS", "LIBXML_LIBS", "LIBXML_LIB_DIRS"];

/// Get a Command for the extconf binary with a scrubbed resolution environment.
fn extconf_cmd() -> Command {
  let mut cmd = cargo_bin_cmd!("extconf");
  for var in OVERRIDE_VARS {
    cmd.env_remove(var);
  }
  cmd.env("PKGCONFIG_EXE", "extconf-test-missing-pkg-config");
  cmd.env_remove("RUST_LOG");
  cmd
}

/// Same as [`extconf_cmd`] with every category overridden.
fn overridden_cmd() -> Command {
  let mut cmd = extconf_cmd();
  cmd
    .env("LIBXML_INCLUDE_DIRS", "/opt/libxml/include")
    .env("LIBXML_LIBS", "xml2")
    .env("LIBXML_LIB_DIRS", "/opt/libxml/lib");
  cmd
}

/// Create a source tree with a manifest and a few C files.
fn temp_tree(manifest: &str) -> TempDir {
  let temp = TempDir::new().unwrap();
  std::fs::write(temp.path().join("pyproject.toml"), manifest).unwrap();
  for file in [
    "src/html.c",
    "src/as-libxml.c",
    "src/as-libxml-check.c",
    "src/data.h",
    "gumbo/parser.c",
  ] {
    let path = temp.path().join(file);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "").unwrap();
  }
  temp
}

const MANIFEST: &str = r#"[project]
name = "html5-parser"
version = "0.4.12"
"#;

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_works() {
  extconf_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn subcommand_help_works() {
  for cmd in &["resolve", "version", "sources", "info"] {
    extconf_cmd()
      .arg(cmd)
      .arg("--help")
      .assert()
      .success()
      .stdout(predicate::str::contains("Usage"));
  }
}

// =============================================================================
// version
// =============================================================================

#[test]
fn version_prints_manifest_version() {
  let temp = temp_tree(MANIFEST);

  extconf_cmd()
    .arg("version")
    .arg("--root")
    .arg(temp.path())
    .assert()
    .success()
    .stdout("0.4.12\n");
}

#[test]
fn version_fails_without_version_line() {
  let temp = temp_tree("[project]\nname = \"html5-parser\"\n");

  extconf_cmd()
    .arg("version")
    .arg("--root")
    .arg(temp.path())
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("version not found"));
}

// =============================================================================
// sources
// =============================================================================

#[test]
fn sources_lists_filtered_files_in_directory_order() {
  let temp = temp_tree(MANIFEST);

  let output = extconf_cmd()
    .arg("sources")
    .arg("--root")
    .arg(temp.path())
    .output()
    .unwrap();
  assert!(output.status.success());

  let stdout = String::from_utf8(output.stdout).unwrap();
  let lines: Vec<&str> = stdout.lines().collect();
  assert_eq!(lines.len(), 3);
  assert!(lines[0].ends_with("as-libxml.c"));
  assert!(lines[1].ends_with("html.c"));
  assert!(lines[2].ends_with("parser.c"));
}

// =============================================================================
// resolve
// =============================================================================

#[test]
#[serial]
fn resolve_with_overrides_prints_json_descriptor() {
  let temp = temp_tree(MANIFEST);

  let output = overridden_cmd()
    .arg("resolve")
    .arg("--root")
    .arg(temp.path())
    .arg("--format")
    .arg("json")
    .output()
    .unwrap();
  assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["name"], "html5_parser.html_parser");
  assert_eq!(json["libraries"], serde_json::json!(["xml2"]));
  assert_eq!(json["include_dirs"], serde_json::json!(["/opt/libxml/include"]));
  assert_eq!(json["macros"]["MAJOR"], "0");
  assert_eq!(json["macros"]["MINOR"], "4");
  assert_eq!(json["macros"]["PATCH"], "12");
  assert_eq!(json["sources"].as_array().unwrap().len(), 3);
}

#[test]
#[serial]
fn resolve_text_output_names_sources_of_each_input() {
  let temp = temp_tree(MANIFEST);

  overridden_cmd()
    .arg("resolve")
    .arg("--root")
    .arg(temp.path())
    .assert()
    .success()
    .stdout(predicate::str::contains("html5_parser.html_parser"))
    .stdout(predicate::str::contains("include_dirs from: override"))
    .stdout(predicate::str::contains("MAJOR=0"));
}

#[test]
#[serial]
#[cfg(not(windows))]
fn resolve_without_tool_or_overrides_names_the_tool() {
  let temp = temp_tree(MANIFEST);

  extconf_cmd()
    .arg("resolve")
    .arg("--root")
    .arg(temp.path())
    .assert()
    .failure()
    .code(1)
    .stdout(predicate::str::is_empty())
    .stderr(predicate::str::contains(
      "extconf-test-missing-pkg-config is required to resolve build flags for libxml-2.0",
    ));
}

#[test]
#[serial]
fn resolve_tool_flag_overrides_environment() {
  let temp = temp_tree(MANIFEST);

  extconf_cmd()
    .env_remove("PKGCONFIG_EXE")
    .arg("resolve")
    .arg("--root")
    .arg(temp.path())
    .arg("--tool")
    .arg("extconf-other-missing-tool")
    .assert()
    .failure()
    .stderr(predicate::str::contains("extconf-other-missing-tool is required"));
}

#[test]
fn resolve_fails_on_missing_manifest() {
  let temp = TempDir::new().unwrap();

  overridden_cmd()
    .arg("resolve")
    .arg("--root")
    .arg(temp.path())
    .assert()
    .failure()
    .stderr(predicate::str::contains("failed to read manifest"));
}

// =============================================================================
// info
// =============================================================================

#[test]
fn info_reports_tool_and_override_sources() {
  let output = extconf_cmd()
    .env("LIBXML_INCLUDE_DIRS", "/opt/include")
    .arg("info")
    .arg("--format")
    .arg("json")
    .output()
    .unwrap();
  assert!(output.status.success());

  let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
  assert_eq!(json["tool"], "extconf-test-missing-pkg-config");
  assert_eq!(json["package"], "libxml-2.0");
  assert_eq!(json["categories"][0]["category"], "include_dirs");
  assert_eq!(json["categories"][0]["source"], "override");
}
