//! Current weather tool definition.
//!
//! Forwards a coordinate pair to Open-Meteo and returns a one-line summary
//! together with the untouched upstream JSON as structured content. The
//! result is rendered by the `ui://widget/current-weather.html` widget.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, schema_for_type},
    model::{CallToolResult, Meta, Tool, ToolAnnotations},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::client::{Forecast, OpenMeteoClient};
use super::common::{error_message, error_result, format_coordinate, format_field, structured_result};
use crate::domains::resources::definitions::WeatherWidgetResource;
use crate::domains::resources::ResourceDefinition;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

const ERROR_PREFIX: &str = "Error fetching weather data";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the current weather tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CurrentWeatherParams {
    /// Latitude in decimal degrees.
    #[schemars(description = "Latitude in decimal degrees (-90 to 90)")]
    pub latitude: f64,

    /// Longitude in decimal degrees.
    #[schemars(description = "Longitude in decimal degrees (-180 to 180)")]
    pub longitude: f64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Current weather tool backed by the Open-Meteo forecast API.
pub struct CurrentWeatherTool;

impl CurrentWeatherTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_current_weather";

    /// Human-readable title.
    pub const TITLE: &'static str = "Get Current Weather";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get current weather for a given latitude and longitude using Open-Meteo API.";

    /// Execute the tool logic.
    ///
    /// Every upstream failure (transport, status, body) comes back as an
    /// error result rather than an `Err`.
    #[instrument(skip_all, fields(latitude = params.latitude, longitude = params.longitude))]
    pub async fn execute(params: &CurrentWeatherParams, client: &OpenMeteoClient) -> CallToolResult {
        info!("Current weather tool called");

        match client.current_weather(params.latitude, params.longitude).await {
            Ok(forecast) => {
                let summary = Self::summarize(params, &forecast);
                info!("Weather data retrieved");
                structured_result(summary, forecast.raw)
            }
            Err(e) => {
                let message = error_message(&e);
                warn!("Weather lookup failed: {}", message);
                error_result(ERROR_PREFIX, &message)
            }
        }
    }

    /// Build the human-readable summary line.
    pub fn summarize(params: &CurrentWeatherParams, forecast: &Forecast) -> String {
        let current = &forecast.current;
        format!(
            "Current weather at ({}, {}): {}°C, Wind: {} km/h from {}°, Weather code: {}",
            format_coordinate(params.latitude),
            format_coordinate(params.longitude),
            format_field(current.temperature.as_ref()),
            format_field(current.windspeed.as_ref()),
            format_field(current.winddirection.as_ref()),
            format_field(current.weathercode.as_ref()),
        )
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        client: &OpenMeteoClient,
    ) -> Result<serde_json::Value, ToolError> {
        let params: CurrentWeatherParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;

        let result = Self::execute(&params, client).await;

        Ok(serde_json::to_value(&result)?)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        let annotations = ToolAnnotations::with_title(Self::TITLE)
            .read_only(true)
            .open_world(true);

        let mut meta = Meta::new();
        meta.insert(
            "openai/outputTemplate".to_string(),
            WeatherWidgetResource::URI.into(),
        );
        meta.insert(
            "openai/toolInvocation/invoking".to_string(),
            "Fetching weather data".into(),
        );
        meta.insert(
            "openai/toolInvocation/invoked".to_string(),
            "Weather data retrieved".into(),
        );

        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: schema_for_type::<CurrentWeatherParams>().into(),
            annotations: Some(annotations),
            output_schema: None,
            icons: None,
            meta: Some(meta),
            title: Some(Self::TITLE.to_string()),
        }
    }

    /// Create a ToolRoute for rmcp-driven transports.
    pub fn create_route<S>(client: Arc<OpenMeteoClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: CurrentWeatherParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params, &client).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
