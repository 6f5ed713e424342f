mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{cmd_info, cmd_resolve, cmd_sources, cmd_version};
use crate::output::{OutputFormat, print_error};

/// extconf - resolve the build descriptor for the html5-parser extension
#[derive(Parser)]
#[command(name = "extconf")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Log which source answered each build input
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

/// Location of the source tree and its manifest.
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
  /// Root of the source tree
  #[arg(long, default_value = ".")]
  pub root: PathBuf,

  /// Manifest holding the version line (default: <root>/pyproject.toml)
  #[arg(long)]
  pub manifest: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
  /// Resolve and print the full build descriptor
  Resolve {
    #[command(flatten)]
    tree: TreeArgs,

    /// Package to query flags for
    #[arg(long)]
    package: Option<String>,

    /// Query tool executable (overrides PKGCONFIG_EXE)
    #[arg(long)]
    tool: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
  },

  /// Print the project version from the manifest
  Version {
    #[command(flatten)]
    tree: TreeArgs,
  },

  /// List the source files that would be compiled
  Sources {
    /// Root of the source tree
    #[arg(long, default_value = ".")]
    root: PathBuf,
  },

  /// Show the detected platform, query tool and active overrides
  Info {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: OutputFormat,
  },
}

fn main() -> ExitCode {
  let cli = Cli::parse();

  let default_level = if cli.verbose { "info" } else { "warn" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let result = match cli.command {
    Commands::Resolve {
      tree,
      package,
      tool,
      format,
    } => cmd_resolve(&tree, package, tool, format),
    Commands::Version { tree } => cmd_version(&tree),
    Commands::Sources { root } => cmd_sources(&root),
    Commands::Info { format } => cmd_info(format),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      print_error(&format!("{:#}", e));
      ExitCode::FAILURE
    }
  }
}
