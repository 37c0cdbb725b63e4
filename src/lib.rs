//! Weather MCP Server Library
//!
//! A Model Context Protocol (MCP) server exposing one tool,
//! `get_current_weather`, backed by the Open-Meteo forecast API, plus the
//! HTML widget (`ui://widget/current-weather.html`) that renders its results.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the `McpServer` handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tools**: the weather tool and its Open-Meteo client
//!   - **resources**: the widget resource
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_mcp_server::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use self::core::{Config, Error, McpServer, Result};
