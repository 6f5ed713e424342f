use std::path::Path;

use anyhow::{Context, Result};

use extconf_lib::BuildConfig;
use extconf_lib::sources::collect_sources;

pub fn cmd_sources(root: &Path) -> Result<()> {
  let config = BuildConfig::new(root);
  let sources = collect_sources(&config.root, &config.source_dirs)
    .with_context(|| format!("Failed to enumerate sources under {}", root.display()))?;

  for source in sources {
    println!("{}", source.display());
  }
  Ok(())
}
