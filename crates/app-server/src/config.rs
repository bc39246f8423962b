//! Server Configuration
//!
//! Read from the process environment after `.env` has been loaded.

use std::path::PathBuf;

use app_core::Units;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid WEATHER_UNITS {0:?} (expected \"metric\" or \"imperial\")")]
    InvalidUnits(String),
}

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the compiled frontend (`index.html`, wasm, css)
    pub static_dir: PathBuf,

    /// Units used when a request does not ask for any
    pub default_units: Units,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: PathBuf::from("static"),
            default_units: Units::Metric,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let default_units = match std::env::var("WEATHER_UNITS") {
            Ok(raw) => Units::parse(&raw).ok_or(ConfigError::InvalidUnits(raw))?,
            Err(_) => defaults.default_units,
        };

        Ok(Self {
            bind_addr,
            static_dir,
            default_units,
        })
    }

    /// Shell document served for every client-side route
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }
}
