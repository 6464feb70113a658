//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.usersort.toml` in the working directory
//! 4. `~/.config/usersort/config.toml` (global defaults)
//! 5. Built-in defaults
//!
//! Files are read into [`ConfigFile`], where every field is optional, so a
//! layer overrides exactly the keys it spells out, even when the value
//! equals the built-in default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_DISPLAY_LIMIT, DEFAULT_PER_PAGE, ENV_BASE_URL, ENV_LIMIT,
    ENV_PER_PAGE, ENV_TIMEOUT_SECS,
};
use crate::env::Env;

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Resolved configuration.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub display: DisplayConfig,
}

/// Where and how much to fetch.
#[derive(Debug, Clone, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Records requested in the single page fetch.
    pub per_page: u32,
    /// Request timeout in seconds. Unset means no timeout.
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// How listings are shown.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayConfig {
    /// Entries shown per sorted view.
    pub limit: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_DISPLAY_LIMIT,
        }
    }
}

/// One config file as written on disk. Absent keys leave lower layers alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub api: ApiFile,
    pub display: DisplayFile,
}

/// `[api]` table of a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiFile {
    pub base_url: Option<String>,
    pub per_page: Option<u32>,
    pub timeout_secs: Option<u64>,
}

/// `[display]` table of a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayFile {
    pub limit: Option<usize>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `work_dir`'s local config, then
    /// applies environment variable overrides.
    pub fn load(work_dir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global_path = Self::global_config_path();
        Self::load_layers(global_path.as_deref(), work_dir, env)
    }

    /// Layered load with an explicit global config path.
    pub fn load_layers(
        global_path: Option<&Path>,
        work_dir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                config.merge(Self::load_file(global_path)?);
            }
        }

        // Layer 3: local config
        if let Some(dir) = work_dir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                config.merge(Self::load_file(&local_path)?);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Read a config file from a specific path.
    pub fn load_file(path: &Path) -> Result<ConfigFile, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Apply every key `file` sets on top of this config.
    fn merge(&mut self, file: ConfigFile) {
        if let Some(base_url) = file.api.base_url {
            self.api.base_url = base_url;
        }
        if let Some(per_page) = file.api.per_page {
            self.api.per_page = per_page;
        }
        if file.api.timeout_secs.is_some() {
            self.api.timeout_secs = file.api.timeout_secs;
        }
        if let Some(limit) = file.display.limit {
            self.display.limit = limit;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Some(val) = env.get(ENV_BASE_URL) {
            self.api.base_url = val;
        }
        if let Some(per_page) = parse_positive::<u32>(env, ENV_PER_PAGE) {
            self.api.per_page = per_page;
        }
        if let Some(limit) = parse_positive::<usize>(env, ENV_LIMIT) {
            self.display.limit = limit;
        }
        if let Some(secs) = parse_positive::<u64>(env, ENV_TIMEOUT_SECS) {
            self.api.timeout_secs = Some(secs);
        }
    }
}

/// Read a positive integer from `name`, warning and ignoring anything else.
fn parse_positive<T>(env: &Env, name: &str) -> Option<T>
where
    T: FromStr + PartialOrd + Default,
{
    let val = env.get(name)?;
    match val.parse::<T>() {
        Ok(n) if n > T::default() => Some(n),
        _ => {
            tracing::warn!("ignoring invalid {name} value: {val}");
            None
        }
    }
}
