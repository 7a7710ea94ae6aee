//! Application configuration loaded from environment variables.

use std::net::SocketAddr;

use serde::{de, Deserialize, Deserializer};
use strum::{Display, EnumString};

use crate::error::ServerError;

/// Logging verbosity of the running server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ServerMode {
    /// Terse logging, no per-request trace.
    #[strum(serialize = "release")]
    Release,
    /// Verbose logging with per-request trace.
    #[strum(serialize = "debug")]
    Debug,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Listening port. Kept as given; parsed when the socket is bound.
    #[serde(default = "default_port")]
    pub port: String,

    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,

    /// "release" selects terse logging; any other value is verbose.
    #[serde(default)]
    pub app_mode: Option<String>,

    /// Fallback for `app_mode`, read from `GIN_MODE`.
    #[serde(default)]
    pub gin_mode: Option<String>,

    /// Port for the Prometheus exporter. Disabled when unset or empty.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub metrics_port: Option<u16>,

    /// Emit logs as JSON lines.
    #[serde(default)]
    pub log_json: bool,
}

fn default_port() -> String {
    "8080".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) if !value.trim().is_empty() => {
            value.trim().parse().map(Some).map_err(de::Error::custom)
        }
        _ => Ok(None),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            app_mode: None,
            gin_mode: None,
            metrics_port: None,
            log_json: false,
        }
    }
}

impl Config {
    /// Read a .env file into the process environment. Returns false if none was found.
    pub fn load_dotenv() -> bool {
        dotenvy::dotenv().is_ok()
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ServerError> {
        Ok(envy::from_env::<Self>()?.normalized())
    }

    /// Load configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ServerError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::from_iter::<_, Self>(vars)?.normalized())
    }

    // An empty PORT behaves like an unset one.
    fn normalized(mut self) -> Self {
        if self.port.trim().is_empty() {
            self.port = default_port();
        }
        self
    }

    /// Effective logging mode. `APP_MODE` wins over `GIN_MODE`.
    pub fn mode(&self) -> ServerMode {
        let raw = self.app_mode.as_deref().or(self.gin_mode.as_deref());
        match raw.map(str::parse::<ServerMode>) {
            Some(Ok(ServerMode::Release)) => ServerMode::Release,
            _ => ServerMode::Debug,
        }
    }

    /// Socket address to listen on.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let addr = format!("{}:{}", self.host, self.port.trim());
        addr.parse()
            .map_err(|_| ServerError::InvalidAddress { addr })
    }
}
