use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

use crate::catalog::{self, Item};

/// Environment variable naming a YAML config file.
pub const CONFIG_ENV: &str = "SHOPFRONT_CONFIG";
/// Environment variable overriding `server.listen_addr`.
pub const LISTEN_ENV: &str = "LISTEN";

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8088";

const HOME_PAGE: &str = "<html><body><h1>Welcome to the Home Page</h1></body></html>";
const ABOUT_PAGE: &str = "<html><body><h1>About Page</h1><p>Last name: Sere, First name: Bohdan, Group: PS-4-1, \
Favorite anime: JoJo, Favorite song: Come As You Are</p></body></html>";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub request_log: RequestLogConfig,
    pub pages: PagesConfig,
    pub catalog: CatalogConfig,
    pub invalid_parameter: InvalidParameterPolicy,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub listen_addr: String,
    /// Seconds to wait for a complete request head before dropping the client
    pub read_timeout_secs: u64,
    /// Write `HTTP/1.1 200 OK` instead of the bare `HTTP/1.1 200`
    pub reason_phrase: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            read_timeout_secs: 30,
            reason_phrase: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RequestLogConfig {
    /// Append-only request log; `null` disables it
    pub path: Option<PathBuf>,
}

impl Default for RequestLogConfig {
    fn default() -> Self {
        Self {
            path: Some(PathBuf::from("server.log")),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PagesConfig {
    pub home: String,
    pub about: String,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            home: HOME_PAGE.to_string(),
            about: ABOUT_PAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub seed: Vec<Item>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed: catalog::default_seed(),
        }
    }
}

/// What to do when `/products` gets a query parameter that isn't an integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidParameterPolicy {
    /// Answer 400 "Invalid parameter"
    #[default]
    BadRequest,
    /// Drop the connection without a response
    Close,
}

impl Config {
    /// Loads configuration.
    ///
    /// Reads the YAML file named by `SHOPFRONT_CONFIG` when set, otherwise
    /// starts from defaults. `LISTEN` then overrides the listen address.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::default(),
        };

        if let Ok(listen_addr) = std::env::var(LISTEN_ENV) {
            cfg.server.listen_addr = listen_addr;
        }

        Ok(cfg)
    }

    pub fn from_file(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}
