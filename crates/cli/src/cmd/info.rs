//! Implementation of the `extconf info` command.
//!
//! Reports what resolution would be based on, without running the query
//! tool: the platform, the tool that would be invoked, and which category
//! is answered by which source.

use anyhow::Result;
use serde::Serialize;

use extconf_lib::consts::{APP_NAME, DEFAULT_PACKAGE};
use extconf_lib::{EnvSnapshot, FlagCategory, PkgConfig, Platform, Resolver, Source};

use crate::output::{OutputFormat, print_info, print_json, print_stat};

#[derive(Debug, Serialize)]
struct CategoryInfo {
  category: FlagCategory,
  variable: &'static str,
  source: Source,
}

#[derive(Debug, Serialize)]
struct Info {
  version: &'static str,
  platform: Platform,
  windowed: bool,
  tool: String,
  package: &'static str,
  categories: Vec<CategoryInfo>,
}

pub fn cmd_info(format: OutputFormat) -> Result<()> {
  let env = EnvSnapshot::capture();
  let platform = Platform::current();
  let query = PkgConfig::from_env(&env);
  let resolver = Resolver::new(&env, platform, &query, DEFAULT_PACKAGE);

  let info = Info {
    version: env!("CARGO_PKG_VERSION"),
    platform,
    windowed: platform.is_windowed(),
    tool: query.program().to_string(),
    package: DEFAULT_PACKAGE,
    categories: FlagCategory::ALL
      .into_iter()
      .map(|category| CategoryInfo {
        category,
        variable: category.override_var(),
        source: resolver.select(category),
      })
      .collect(),
  };

  if format.is_json() {
    return print_json(&info);
  }

  print_info(&format!("{} v{}", APP_NAME, info.version));
  print_stat("Platform", &info.platform.to_string());
  print_stat("Query tool", &info.tool);
  print_stat("Package", info.package);
  println!();
  for category in &info.categories {
    print_stat(
      category.category.as_str(),
      &format!("{} ({})", category.source, category.variable),
    );
  }
  Ok(())
}
