//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Each tool knows how to create its own route; this module only wires them
//! together with the shared state they need.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::CurrentWeatherTool;
use super::registry::ToolRegistry;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: &ToolRegistry) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new().with_route(CurrentWeatherTool::create_route(registry.weather_client()))
}
