//! Implementation of the `extconf resolve` command.
//!
//! Resolves the complete build descriptor and prints it. Nothing is printed
//! on stdout unless every step succeeded.

use anyhow::{Context, Result};
use tracing::debug;

use extconf_lib::{BuildDescriptor, EnvSnapshot, PkgConfig, Platform, assemble};

use super::build_config;
use crate::TreeArgs;
use crate::output::{OutputFormat, print_json, print_list, print_stat};

pub fn cmd_resolve(tree: &TreeArgs, package: Option<String>, tool: Option<String>, format: OutputFormat) -> Result<()> {
  let env = EnvSnapshot::capture();
  let platform = Platform::current();

  let mut config = build_config(tree);
  if let Some(package) = package {
    config = config.with_package(package);
  }
  let query = match tool {
    Some(tool) => PkgConfig::new(tool),
    None => PkgConfig::from_env(&env),
  };
  debug!(tool = query.program(), package = %config.package, "resolving with query tool");

  let descriptor = assemble(&config, &env, platform, &query)
    .with_context(|| format!("Failed to resolve build descriptor for {}", config.root.display()))?;

  if format.is_json() {
    print_json(&descriptor)?;
  } else {
    print_descriptor(&descriptor);
  }
  Ok(())
}

fn print_descriptor(descriptor: &BuildDescriptor) {
  print_stat("Extension", descriptor.name());
  print_stat("Version", &descriptor.version().to_string());
  for resolved in descriptor.provenance() {
    print_stat(&format!("{} from", resolved.category), &resolved.source.to_string());
  }
  println!();
  print_list("Sources", descriptor.sources().iter().map(|p| p.display()));
  print_list("Include dirs", descriptor.include_dirs().iter().map(|p| p.display()));
  print_list("Library dirs", descriptor.library_dirs().iter().map(|p| p.display()));
  print_list("Libraries", descriptor.libraries());
  print_list("Compile flags", descriptor.compile_flags());
  print_list(
    "Macros",
    descriptor.macros().iter().map(|(name, value)| format!("{}={}", name, value)),
  );
}
