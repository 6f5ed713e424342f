//! extconf-lib: build-descriptor resolution for a native extension
//!
//! This crate works out everything needed to compile and link the extension
//! against a system libxml2:
//! - `Version`: the project version, read from the manifest
//! - `EnvSnapshot`: the environment, captured once and passed explicitly
//! - `PackageQuery` / `PkgConfig`: flag discovery via an external tool
//! - `Resolver`: override-then-platform-then-query precedence per category
//! - `BuildDescriptor`: the immutable result handed to the packaging toolchain

pub mod consts;
pub mod descriptor;
pub mod env;
pub mod error;
pub mod platform;
pub mod query;
pub mod resolve;
pub mod sources;
pub mod version;

#[cfg(test)]
mod util;

pub use descriptor::{BuildConfig, BuildDescriptor, assemble};
pub use env::EnvSnapshot;
pub use error::{ConfigError, Error, QueryError, Result};
pub use platform::{Os, Platform};
pub use query::{PackageQuery, PkgConfig, QueryMode};
pub use resolve::{FlagCategory, Resolved, Resolver, Source};
pub use version::Version;
