pub const APP_NAME: &str = "extconf";

/// Environment variable naming the package-query executable.
pub const QUERY_TOOL_ENV: &str = "PKGCONFIG_EXE";
pub const DEFAULT_QUERY_TOOL: &str = "pkg-config";

/// The package whose compile and link flags are queried.
pub const DEFAULT_PACKAGE: &str = "libxml-2.0";

pub const INCLUDE_DIRS_ENV: &str = "LIBXML_INCLUDE_DIRS";
pub const LIBRARIES_ENV: &str = "LIBXML_LIBS";
pub const LIBRARY_DIRS_ENV: &str = "LIBXML_LIB_DIRS";

/// Libraries linked on Windows when `LIBXML_LIBS` is not set.
pub const WINDOWS_DEFAULT_LIBRARIES: &[&str] = &["libxml2"];

pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Source directories, in the order their files are handed to the compiler.
pub const SOURCE_DIRS: &[&str] = &["src", "gumbo"];
pub const SOURCE_SUFFIX: &str = ".c";
pub const SELF_TEST_SUFFIX: &str = "-check.c";

pub const EXTENSION_NAME: &str = "html5_parser.html_parser";

pub const WINDOWS_COMPILE_FLAGS: &[&str] = &["/O2"];
pub const UNIX_COMPILE_FLAGS: &[&str] = &["-O3", "-std=c99", "-fvisibility=hidden"];

/// Separator for list-valued override variables.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';
