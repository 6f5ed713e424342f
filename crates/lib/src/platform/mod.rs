//! Host platform facts.
//!
//! Resolution only ever asks one question of the platform: is this the
//! windowed-GUI host (Windows)? The answer is captured once in a [`Platform`]
//! and passed down, so tests can pin it either way.

pub mod os;

use std::fmt;

use serde::Serialize;

pub use os::Os;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Platform {
  pub os: Os,
}

impl Platform {
  pub fn new(os: Os) -> Self {
    Self { os }
  }

  /// Detect the current platform at runtime
  pub fn current() -> Self {
    Self::new(Os::current())
  }

  /// True on the windowed-GUI platform, where pkg-config output is not trusted
  /// for library names and MSVC-style compile flags are used.
  pub fn is_windowed(&self) -> bool {
    self.os == Os::Windows
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.os)
  }
}
