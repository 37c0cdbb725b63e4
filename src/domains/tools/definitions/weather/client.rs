//! Open-Meteo forecast client.
//!
//! Issues a single `current_weather=true` forecast request per call and
//! decodes the body once into [`Forecast`], keeping the raw JSON alongside
//! the typed fields.

use reqwest::Client;
use serde::Deserialize;
use serde_json::{Number, Value};
use tracing::{debug, instrument};

use super::common::format_coordinate;
use crate::core::config::WeatherConfig;
use crate::domains::tools::ToolError;

/// The `current_weather` block of a forecast response.
///
/// Every field is optional; Open-Meteo omits values it cannot provide.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentWeather {
    #[serde(default)]
    pub temperature: Option<Number>,
    #[serde(default)]
    pub windspeed: Option<Number>,
    #[serde(default)]
    pub winddirection: Option<Number>,
    #[serde(default)]
    pub weathercode: Option<Number>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    current_weather: Option<CurrentWeather>,
}

/// A decoded forecast response.
#[derive(Debug, Clone)]
pub struct Forecast {
    /// The upstream body, unmodified.
    pub raw: Value,

    /// Fields read from `current_weather`; all `None` if the block is absent.
    pub current: CurrentWeather,
}

impl Forecast {
    /// Decode a response body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ToolError> {
        let raw: Value = serde_json::from_slice(body)?;
        let response = ForecastResponse::deserialize(&raw)?;

        Ok(Self {
            current: response.current_weather.unwrap_or_default(),
            raw,
        })
    }
}

/// HTTP client for the Open-Meteo forecast endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    http: Client,
    api_url: String,
}

impl OpenMeteoClient {
    /// Build a client from configuration.
    pub fn new(config: &WeatherConfig) -> Result<Self, ToolError> {
        let http = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    /// Build the forecast URL for a coordinate pair.
    pub fn forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}&current_weather=true",
            self.api_url,
            format_coordinate(latitude),
            format_coordinate(longitude)
        )
    }

    /// Fetch the current weather for a coordinate pair.
    ///
    /// Non-2xx responses are reported as errors.
    #[instrument(skip(self))]
    pub async fn current_weather(&self, latitude: f64, longitude: f64) -> Result<Forecast, ToolError> {
        let url = self.forecast_url(latitude, longitude);
        debug!(%url, "Requesting forecast");

        let response = self.http.get(&url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        debug!(bytes = body.len(), "Forecast received");

        Forecast::from_slice(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, timeout_secs: u64) -> OpenMeteoClient {
        OpenMeteoClient::new(&WeatherConfig {
            api_url: format!("{}/v1/forecast", server.uri()),
            timeout_secs,
        })
        .unwrap()
    }

    #[test]
    fn test_forecast_url_default_endpoint() {
        let client = OpenMeteoClient::new(&WeatherConfig::default()).unwrap();
        assert_eq!(
            client.forecast_url(52.52, 13.41),
            "https://api.open-meteo.com/v1/forecast?latitude=52.52&longitude=13.41&current_weather=true"
        );
        assert_eq!(
            client.forecast_url(48.0, -2.0),
            "https://api.open-meteo.com/v1/forecast?latitude=48.0&longitude=-2.0&current_weather=true"
        );
    }

    #[test]
    fn test_decode_full_block() {
        let body = br#"{"latitude": 52.52, "current_weather": {"temperature": 18.3, "windspeed": 12.1, "winddirection": 220, "weathercode": 3, "is_day": 1}}"#;
        let forecast = Forecast::from_slice(body).unwrap();
        assert_eq!(forecast.current.temperature, Number::from_f64(18.3));
        assert_eq!(forecast.current.winddirection, Some(Number::from(220)));
        assert_eq!(forecast.raw["current_weather"]["is_day"], 1);
    }

    #[test]
    fn test_decode_missing_block_defaults() {
        let forecast = Forecast::from_slice(br#"{"latitude": 52.52}"#).unwrap();
        assert_eq!(forecast.current, CurrentWeather::default());

        let forecast = Forecast::from_slice(br#"{"current_weather": null}"#).unwrap();
        assert_eq!(forecast.current, CurrentWeather::default());
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = Forecast::from_slice(b"<html>upstream down</html>").unwrap_err();
        assert!(matches!(err, ToolError::Json(_)));
    }

    #[test]
    fn test_decode_rejects_wrong_field_type() {
        let err =
            Forecast::from_slice(br#"{"current_weather": {"temperature": "warm"}}"#).unwrap_err();
        assert!(matches!(err, ToolError::Json(_)));
    }

    #[tokio::test]
    async fn test_current_weather_sends_coordinates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/forecast"))
            .and(query_param("latitude", "52.52"))
            .and(query_param("longitude", "13.41"))
            .and(query_param("current_weather", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "current_weather": {"temperature": 18.3}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let forecast = client_for(&server, 5)
            .current_weather(52.52, 13.41)
            .await
            .unwrap();
        assert_eq!(forecast.current.temperature, Number::from_f64(18.3));
        assert_eq!(forecast.current.windspeed, None);
    }

    #[tokio::test]
    async fn test_current_weather_status_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": true,
                "reason": "Latitude must be in range of -90 to 90°."
            })))
            .mount(&server)
            .await;

        let err = client_for(&server, 5)
            .current_weather(123.0, 0.0)
            .await
            .unwrap_err();
        match err {
            ToolError::Http(e) => assert_eq!(e.status().map(|s| s.as_u16()), Some(400)),
            other => panic!("Expected HTTP error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_current_weather_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, 1)
            .current_weather(0.0, 0.0)
            .await
            .unwrap_err();
        match err {
            ToolError::Http(e) => assert!(e.is_timeout()),
            other => panic!("Expected timeout, got {:?}", other),
        }
    }
}
