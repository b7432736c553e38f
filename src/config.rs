//! Environment-derived configuration for the CLI.

use std::path::{Path, PathBuf};

/// Environment variable naming the default call log.
pub const LOG_ENV_VAR: &str = "CALLCHECK_LOG";

/// Settings read from the environment (and `.env`, loaded by the binary).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Call log used when `--log` is not given.
    pub log_path: Option<PathBuf>,
}

impl Config {
    /// Reads configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps variable names to
    /// values.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_path = lookup(LOG_ENV_VAR).filter(|v| !v.trim().is_empty()).map(PathBuf::from);
        Self { log_path }
    }

    /// Picks the call log to use: the explicit flag first, then the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if neither is set.
    pub fn resolve_log(&self, flag: Option<&Path>) -> Result<PathBuf, String> {
        flag.map(Path::to_path_buf)
            .or_else(|| self.log_path.clone())
            .ok_or_else(|| format!("No call log given: pass --log <PATH> or set {LOG_ENV_VAR}"))
    }
}
