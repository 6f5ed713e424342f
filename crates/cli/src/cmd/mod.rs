mod info;
mod resolve;
mod sources;
mod version;

pub use info::cmd_info;
pub use resolve::cmd_resolve;
pub use sources::cmd_sources;
pub use version::cmd_version;

use extconf_lib::BuildConfig;

use crate::TreeArgs;

/// Build the library config from the shared tree arguments.
fn build_config(tree: &TreeArgs) -> BuildConfig {
  let config = BuildConfig::new(&tree.root);
  match &tree.manifest {
    Some(manifest) => config.with_manifest(manifest),
    None => config,
  }
}
