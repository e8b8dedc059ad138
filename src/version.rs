//! Version information.
//!
//! Builds the fixed version line from Cargo package metadata.

use std::fmt;

/// Version information for the caesar-cipher binary.
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub name: &'static str,
    pub major: &'static str,
    pub minor: &'static str,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} version {}.{}", self.name, self.major, self.minor)
    }
}

/// Get build information
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        major: env!("CARGO_PKG_VERSION_MAJOR"),
        minor: env!("CARGO_PKG_VERSION_MINOR"),
    }
}
