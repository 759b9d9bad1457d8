//! Configuration loading and management.
//!
//! Configuration is loaded from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Command-line arguments
//! 2. Environment variables
//! 3. `.sql-advise.toml` in current directory
//! 4. `~/.config/sql-advise/config.toml`
//! 5. Default values
//!
//! # Configuration File Format
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = "10001"
//! version = "2019"             # dialect / ruleset tag sent with every request
//! connect_timeout_ms = 5000
//!
//! [session]
//! user = "sa"
//! password = "..."             # or use SQL_ADVISE_PASSWORD env var
//! host = "10.0.0.12"
//! port = "1433"
//! current_database = "orders"
//! current_schema = "dbo"
//!
//! [rules]
//! enabled = ["rule_no_select_star"]
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `SQL_ADVISE_HOST` | Advisory service host |
//! | `SQL_ADVISE_PORT` | Advisory service port |
//! | `SQL_ADVISE_VERSION` | Protocol version tag |
//! | `SQL_ADVISE_PASSWORD` | Password of the audited database |

use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration
};

use serde::Deserialize;

use crate::{
    error::{AppResult, config_error},
    model::SessionDescriptor
};

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server:  ServerConfig,
    #[serde(default)]
    pub session: SessionDescriptor,
    #[serde(default)]
    pub rules:   RulesConfig
}

/// Advisory service endpoint
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host:               String,
    pub port:               String,
    /// Protocol version sent with every request
    pub version:            String,
    /// Dial timeout; none means the transport default
    pub connect_timeout_ms: Option<u64>
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host:               String::from("127.0.0.1"),
            port:               String::from("10001"),
            version:            String::new(),
            connect_timeout_ms: None
        }
    }
}

impl ServerConfig {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }
}

/// Rules configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RulesConfig {
    /// Rule names evaluated when none are given on the command line
    #[serde(default)]
    pub enabled: Vec<String>
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file in current directory (.sql-advise.toml)
    /// 3. Config file in home directory (~/.config/sql-advise/config.toml)
    /// 4. Default values
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sql-advise")
                .join("config.toml");
            if home_config.exists() {
                config = Self::from_file(&home_config)?;
            }
        }

        let local_config = PathBuf::from(".sql-advise.toml");
        if local_config.exists() {
            config = Self::from_file(&local_config)?;
        }

        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Parse a single TOML config file
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| config_error(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> AppResult<Self> {
        toml::from_str(content).map_err(|e| config_error(format!("Invalid config file: {}", e)))
    }

    /// Override values from environment lookups
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("SQL_ADVISE_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SQL_ADVISE_PORT") {
            self.server.port = port;
        }
        if let Some(version) = lookup("SQL_ADVISE_VERSION") {
            self.server.version = version;
        }
        if let Some(password) = lookup("SQL_ADVISE_PASSWORD") {
            self.session.password = password;
        }
    }
}
