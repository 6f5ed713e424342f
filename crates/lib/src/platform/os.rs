use std::fmt;

use serde::Serialize;

/// Host operating system, as far as flag resolution cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
  Linux,
  MacOs,
  Windows,
  Other,
}

impl Os {
  /// Detect the current operating system at runtime
  pub fn current() -> Self {
    Self::from_name(std::env::consts::OS)
  }

  /// Map a `std::env::consts::OS` style name onto a variant
  pub fn from_name(name: &str) -> Self {
    match name {
      "linux" => Self::Linux,
      "macos" => Self::MacOs,
      "windows" => Self::Windows,
      _ => Self::Other,
    }
  }

  /// Returns the lowercase string identifier for this OS
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Linux => "linux",
      Self::MacOs => "macos",
      Self::Windows => "windows",
      Self::Other => "other",
    }
  }
}

impl fmt::Display for Os {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_matches_serialized_name() {
    for os in [Os::Linux, Os::MacOs, Os::Windows, Os::Other] {
      let json = serde_json::to_string(&os).unwrap();
      assert_eq!(json, format!("\"{}\"", os));
    }
    assert_eq!(Os::MacOs.as_str(), "macos");
  }

  #[test]
  fn unknown_names_map_to_other() {
    assert_eq!(Os::from_name("freebsd"), Os::Other);
    assert_eq!(Os::from_name("windows"), Os::Windows);
  }

  #[test]
  fn current_matches_build_target() {
    assert_eq!(Os::current() == Os::Windows, cfg!(windows));
  }
}
