use anyhow::{Context, Result};

use extconf_lib::Version;

use super::build_config;
use crate::TreeArgs;

pub fn cmd_version(tree: &TreeArgs) -> Result<()> {
  let config = build_config(tree);
  let version = Version::read(&config.manifest)
    .with_context(|| format!("Failed to read version from {}", config.manifest.display()))?;
  println!("{}", version);
  Ok(())
}
