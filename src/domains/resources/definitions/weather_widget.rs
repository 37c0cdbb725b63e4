//! Current weather widget resource definition.

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

/// HTML widget that renders `get_current_weather` results in the client.
pub struct WeatherWidgetResource;

impl WeatherWidgetResource {
    /// File name, resolved against the resources base path.
    pub const FILE_NAME: &'static str = "current_weather_widget.html";
}

impl ResourceDefinition for WeatherWidgetResource {
    const URI: &'static str = "ui://widget/current-weather.html";
    const NAME: &'static str = "weather-widget";
    const DESCRIPTION: &'static str =
        "Interactive HTML widget to display current weather data";
    const MIME_TYPE: &'static str = "text/html+skybridge";

    fn content() -> ResourceContent {
        ResourceContent::File(Self::FILE_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_widget_metadata() {
        assert_eq!(WeatherWidgetResource::URI, "ui://widget/current-weather.html");
        assert_eq!(WeatherWidgetResource::MIME_TYPE, "text/html+skybridge");
    }

    #[test]
    fn test_weather_widget_is_file_backed() {
        match WeatherWidgetResource::content() {
            ResourceContent::File(name) => assert_eq!(name, "current_weather_widget.html"),
            _ => panic!("Expected File content"),
        }
    }
}
