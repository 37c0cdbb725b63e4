//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - The shared clients tools depend on
//! - HTTP dispatch for tool calls (when http feature is enabled)

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use super::ToolError;
#[cfg(feature = "http")]
use super::definitions::CurrentWeatherTool;
use super::definitions::OpenMeteoClient;
use crate::core::config::Config;

/// Tool registry - owns the state shared by tool invocations.
///
/// Everything held here is immutable after construction, so a registry can
/// serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    weather: Arc<OpenMeteoClient>,
}

impl ToolRegistry {
    /// Create a new tool registry, building the upstream clients from config.
    pub fn new(config: &Config) -> Result<Self, ToolError> {
        Ok(Self {
            weather: Arc::new(OpenMeteoClient::new(&config.weather)?),
        })
    }

    /// The shared Open-Meteo client.
    pub fn weather_client(&self) -> Arc<OpenMeteoClient> {
        self.weather.clone()
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            CurrentWeatherTool::NAME => {
                CurrentWeatherTool::http_handler(arguments, &self.weather).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
