//! CLI configuration handling.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use mxdb_connect::{ConnectOptions, Credentials};

use crate::error::CliResult;

/// Default config file name (looked up in the working directory)
pub const CONFIG_FILE_NAME: &str = "mxdb.toml";

/// mxdb CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Descriptor and database selection
    pub connection: ConnectionConfig,

    /// Credentials for database selection
    pub credentials: Credentials,

    /// Pass-through driver options
    pub options: OptionsConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load `path` if given, else `mxdb.toml` if present, else defaults
    pub fn discover(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(CONFIG_FILE_NAME);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

/// Connection section
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Host descriptor (`host`, `host:port`, `scheme://host:port` or a host list)
    pub descriptor: Option<String>,

    /// Replica set name; selects cluster mode
    pub cluster: Option<String>,

    /// Database to select
    pub database: Option<String>,
}

/// Driver options section, timeouts in milliseconds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsConfig {
    /// Application name reported to the server
    pub app_name: Option<String>,

    /// Minimum connection pool size
    pub min_pool_size: Option<u32>,

    /// Maximum connection pool size
    pub max_pool_size: Option<u32>,

    /// Maximum idle time for pooled connections
    pub max_idle_time_ms: Option<u64>,

    /// Connection timeout
    pub connect_timeout_ms: Option<u64>,

    /// Server selection timeout
    pub server_selection_timeout_ms: Option<u64>,

    /// Connect to the given host only, skipping discovery
    pub direct_connection: Option<bool>,
}

impl OptionsConfig {
    /// Convert to driver options
    pub fn to_connect_options(&self) -> ConnectOptions {
        ConnectOptions {
            app_name: self.app_name.clone(),
            min_pool_size: self.min_pool_size,
            max_pool_size: self.max_pool_size,
            max_idle_time: self.max_idle_time_ms.map(Duration::from_millis),
            connect_timeout: self.connect_timeout_ms.map(Duration::from_millis),
            server_selection_timeout: self.server_selection_timeout_ms.map(Duration::from_millis),
            direct_connection: self.direct_connection,
        }
    }
}
