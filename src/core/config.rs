//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Open-Meteo forecast endpoint.
pub const DEFAULT_FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Resources domain configuration.
    pub resources: ResourcesConfig,

    /// Upstream weather API configuration.
    pub weather: WeatherConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the resources domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesConfig {
    /// Directory that file-backed resources are resolved against.
    pub base_path: String,
}

/// Configuration for the Open-Meteo client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Forecast endpoint; query parameters are appended to it.
    pub api_url: String,

    /// Timeout applied to each outbound request, in seconds.
    pub timeout_secs: u64,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for ResourcesConfig {
    fn default() -> Self {
        Self {
            base_path: "assets".to_string(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_FORECAST_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl WeatherConfig {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "weather-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            resources: ResourcesConfig::default(),
            weather: WeatherConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    ///
    /// Runs before logging is initialized, so unusable values are returned
    /// as errors instead of being logged.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        if let Ok(base_path) = std::env::var("MCP_RESOURCES_BASE_PATH") {
            config.resources.base_path = base_path;
        }

        if let Ok(api_url) = std::env::var("MCP_WEATHER_API_URL") {
            config.weather.api_url = api_url;
        }

        if let Ok(timeout) = std::env::var("MCP_WEATHER_TIMEOUT_SECS") {
            config.weather.timeout_secs = timeout.trim().parse().map_err(|_| {
                Error::config(format!(
                    "MCP_WEATHER_TIMEOUT_SECS must be a whole number of seconds, got {:?}",
                    timeout
                ))
            })?;
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        Ok(config)
    }

    /// Check the values that cannot be repaired with a default.
    pub fn validate(&self) -> Result<()> {
        if self.weather.timeout_secs == 0 {
            return Err(Error::config("weather timeout must be at least one second"));
        }

        if !(self.weather.api_url.starts_with("http://")
            || self.weather.api_url.starts_with("https://"))
        {
            return Err(Error::config(format!(
                "weather API URL must be http(s): {}",
                self.weather.api_url
            )));
        }

        Ok(())
    }
}
