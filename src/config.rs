//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Merge into existing entries on create instead of rejecting the key
    pub allow_override: bool,
    /// Log every store mutation
    pub cache_debug: bool,
    /// Directory holding the landing page template
    pub template_dir: PathBuf,
    /// Emit renderer warnings (development mode)
    pub development: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `PORT` - HTTP server port (default: 3000)
    /// - `ALLOW_OVERRIDE` - `true` to merge on key collision (default: false)
    /// - `CACHE_DEBUG` - `true` to log store mutations (default: false)
    /// - `TEMPLATE_DIR` - Landing page template directory (default: static)
    /// - `APP_ENV` - `development` enables renderer warnings
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from any variable source, e.g. a map in tests.
    ///
    /// Missing or unparseable values fall back to the defaults; flags are
    /// enabled only by the literal `true`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let flag = |name: &str| lookup(name).is_some_and(|v| v == "true");

        Self {
            server_port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            allow_override: flag("ALLOW_OVERRIDE"),
            cache_debug: flag("CACHE_DEBUG"),
            template_dir: lookup("TEMPLATE_DIR")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.template_dir),
            development: lookup("APP_ENV").is_some_and(|v| v == "development"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            allow_override: false,
            cache_debug: false,
            template_dir: PathBuf::from("static"),
            development: false,
        }
    }
}
