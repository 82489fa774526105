//! Runtime settings resolved from CLI flags, environment variables, and defaults.
//!
//! Precedence is always flag, then environment variable, then built-in default.

use std::path::PathBuf;
use std::time::Duration;

/// Public Sleeper API root.
pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_MAX_CONCURRENT: usize = 8;
pub const DEFAULT_PORT: u16 = 8000;
/// How long an on-disk player snapshot is trusted before re-downloading.
pub const DEFAULT_PLAYERS_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

pub const BASE_URL_ENV_VAR: &str = "SLEEPER_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "SLEEPER_TIMEOUT_SECS";
pub const MAX_CONCURRENT_ENV_VAR: &str = "SLEEPER_MAX_CONCURRENT";
pub const CACHE_DIR_ENV_VAR: &str = "SLEEPER_CACHE_DIR";
pub const PORT_ENV_VAR: &str = "PORT";

/// Everything the client, caches, and server need to start.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub timeout: Duration,
    pub max_concurrent: usize,
    /// `None` disables the on-disk player snapshot.
    pub cache_dir: Option<PathBuf>,
    pub players_max_age: Duration,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            cache_dir: default_cache_dir(),
            players_max_age: DEFAULT_PLAYERS_MAX_AGE,
            port: DEFAULT_PORT,
        }
    }
}

impl Settings {
    /// Build settings from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env_string(BASE_URL_ENV_VAR).unwrap_or(defaults.base_url),
            timeout: env_parse::<u64>(TIMEOUT_ENV_VAR)
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            max_concurrent: env_parse::<usize>(MAX_CONCURRENT_ENV_VAR)
                .filter(|n| *n > 0)
                .unwrap_or(defaults.max_concurrent),
            cache_dir: env_string(CACHE_DIR_ENV_VAR)
                .map(PathBuf::from)
                .or(defaults.cache_dir),
            players_max_age: defaults.players_max_age,
            port: env_parse::<u16>(PORT_ENV_VAR).unwrap_or(defaults.port),
        }
    }

    /// Apply explicit CLI overrides on top of the environment.
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        cache_dir: Option<PathBuf>,
        no_disk_cache: bool,
    ) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        if let Some(dir) = cache_dir {
            self.cache_dir = Some(dir);
        }
        if no_disk_cache {
            self.cache_dir = None;
        }
        self
    }

    /// Path of the on-disk player snapshot, if disk caching is enabled.
    pub fn players_snapshot_path(&self) -> Option<PathBuf> {
        self.cache_dir
            .as_ref()
            .map(|dir| dir.join("players_nfl.json"))
    }
}

/// Path: ~/.cache/sleeper-trades
pub fn default_cache_dir() -> Option<PathBuf> {
    let base = dirs::cache_dir().or_else(|| dirs::home_dir().map(|home| home.join(".cache")))?;
    Some(base.join("sleeper-trades"))
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env_string(key).and_then(|v| v.parse().ok())
}
