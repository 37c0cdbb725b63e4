//! Weather tools module.
//!
//! - `client`: Open-Meteo HTTP client and the decoded forecast record
//! - `current`: the `get_current_weather` tool
//! - `common`: formatting and result helpers

pub mod client;
pub mod common;
pub mod current;

pub use client::{CurrentWeather, Forecast, OpenMeteoClient};
pub use current::{CurrentWeatherParams, CurrentWeatherTool};
