//! Configuration for the tasklist server.
//!
//! Settings come from three layers, each overriding the previous one:
//!
//! 1. `config.json` in the platform data directory (see [`DataStorage`]),
//!    or built-in defaults when the file does not exist
//! 2. environment variables (a `.env` file is loaded first when present)
//! 3. command-line flags of `tasklist serve`
//!
//! ## Environment variables
//!
//! | Variable              | Field                |
//! |-----------------------|----------------------|
//! | `TASKLIST_HOST`       | `server.host`        |
//! | `TASKLIST_PORT`       | `server.port`        |
//! | `TASKLIST_DATABASE`   | `database.path`      |
//! | `TASKLIST_POOL_SIZE`  | `database.pool_size` |
//! | `TASKLIST_TEMPLATES`  | `templates`          |
//!
//! ## Example
//!
//! ```rust,no_run
//! use tasklist::libs::config::Config;
//!
//! let config = Config::read()?.apply_env()?;
//! println!("listening on {}", config.server.address());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::messages::Message;
use crate::db::db::DEFAULT_POOL_SIZE;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const ENV_HOST: &str = "TASKLIST_HOST";
pub const ENV_PORT: &str = "TASKLIST_PORT";
pub const ENV_DATABASE: &str = "TASKLIST_DATABASE";
pub const ENV_POOL_SIZE: &str = "TASKLIST_POOL_SIZE";
pub const ENV_TEMPLATES: &str = "TASKLIST_TEMPLATES";

/// Address the HTTP server binds to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, ready for `TcpListener::bind`.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Where the SQLite file lives and how many connections serve it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file; `None` means `tasklist.db` in the data directory and
    /// `:memory:` means a throwaway in-memory database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Number of pooled connections, at least 1.
    pub pool_size: usize,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            path: None,
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    /// Directory whose `*.html` files override the built-in templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates: Option<String>,
}

impl Config {
    /// Reads `config.json` from the platform data directory.
    ///
    /// A missing file yields [`Config::default`]; a malformed one is an error.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = Self::path_in(storage);

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes pretty-printed JSON to the platform data directory.
    pub fn save(&self) -> Result<PathBuf> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<PathBuf> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(&config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(config_file_path)
    }

    /// Path of the configuration file, whether or not it exists.
    ///
    /// Neither this nor [`Config::read`] creates the data directory; only
    /// saving does.
    pub fn path() -> PathBuf {
        Self::path_in(&DataStorage::new())
    }

    pub fn path_in(storage: &DataStorage) -> PathBuf {
        storage.file_path(CONFIG_FILE_NAME)
    }

    /// Applies `TASKLIST_*` variables from the process environment.
    pub fn apply_env(self) -> Result<Config> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from `lookup`, keyed by the `TASKLIST_*` names.
    ///
    /// Empty values are ignored. Numbers that do not parse are errors.
    pub fn apply_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
        let lookup = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(host) = lookup(ENV_HOST) {
            self.server.host = host;
        }
        if let Some(port) = lookup(ENV_PORT) {
            self.server.port = parse_number(ENV_PORT, &port)?;
        }
        if let Some(path) = lookup(ENV_DATABASE) {
            self.database.path = Some(path);
        }
        if let Some(pool_size) = lookup(ENV_POOL_SIZE) {
            self.database.pool_size = parse_number(ENV_POOL_SIZE, &pool_size)?;
        }
        if let Some(templates) = lookup(ENV_TEMPLATES) {
            self.templates = Some(templates);
        }

        Ok(self)
    }

    /// Rejects settings the server cannot start with.
    pub fn validate(self) -> Result<Config> {
        if self.database.pool_size == 0 {
            return Err(msg_error_anyhow!(Message::ConfigPoolSizeZero));
        }
        if self.database.path.as_deref().is_some_and(|path| path.trim().is_empty()) {
            return Err(msg_error_anyhow!(Message::DatabasePathEmpty));
        }
        Ok(self)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| msg_error_anyhow!(Message::ConfigInvalidValue(key.to_string(), value.to_string())))
}
