//! Formatting and result helpers shared by the weather tools.

use rmcp::model::{CallToolResult, Content};
use serde_json::Number;
use std::error::Error as StdError;

/// Render a coordinate the way it is substituted into URLs and summaries.
///
/// Uses the shortest digits that round-trip (`52.52`). Integral values keep
/// one decimal (`13.0`); magnitudes below `1e-4` or from `1e16` up switch to
/// exponent form with a signed two-digit exponent (`1e-05`).
pub fn format_coordinate(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scientific = format!("{:e}", value);
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        if let Ok(exponent) = exponent.parse::<i32>() {
            if value != 0.0 && !(-4..16).contains(&exponent) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Render an optional upstream number verbatim, or `null` when absent.
pub fn format_field(value: Option<&Number>) -> String {
    value.map_or_else(|| "null".to_string(), Number::to_string)
}

/// Flatten an error and its source chain into a single message.
pub fn error_message(err: &(dyn StdError + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

/// Success result: summary text plus the structured payload.
pub fn structured_result(summary: String, payload: serde_json::Value) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(summary)],
        structured_content: Some(payload),
        is_error: Some(false),
        meta: None,
    }
}

/// Error result carrying the message both as text and as `{"error": ...}`.
pub fn error_result(prefix: &str, message: &str) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(format!("{}: {}", prefix, message))],
        structured_content: Some(serde_json::json!({ "error": message })),
        is_error: Some(true),
        meta: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(52.52), "52.52");
        assert_eq!(format_coordinate(13.41), "13.41");
        assert_eq!(format_coordinate(13.0), "13.0");
        assert_eq!(format_coordinate(-90.0), "-90.0");
        assert_eq!(format_coordinate(0.0), "0.0");
        assert_eq!(format_coordinate(-0.5), "-0.5");
        assert_eq!(format_coordinate(0.0001), "0.0001");
        assert_eq!(format_coordinate(123456.0), "123456.0");
    }

    #[test]
    fn test_format_coordinate_exponent_form() {
        assert_eq!(format_coordinate(1e-5), "1e-05");
        assert_eq!(format_coordinate(-2.5e-7), "-2.5e-07");
        assert_eq!(format_coordinate(1e16), "1e+16");
        assert_eq!(format_coordinate(1.5e16), "1.5e+16");
        assert_eq!(format_coordinate(1e-100), "1e-100");
    }

    #[test]
    fn test_format_field_keeps_upstream_representation() {
        let int = Number::from(220);
        let float = Number::from_f64(18.3).unwrap();
        assert_eq!(format_field(Some(&int)), "220");
        assert_eq!(format_field(Some(&float)), "18.3");
        assert_eq!(format_field(None), "null");
    }

    #[test]
    fn test_error_message_includes_sources() {
        let inner = std::io::Error::new(std::io::ErrorKind::TimedOut, "operation timed out");
        let outer = std::io::Error::other(inner);
        assert_eq!(error_message(&outer), "operation timed out");

        #[derive(Debug, thiserror::Error)]
        #[error("error sending request")]
        struct Outer(#[source] std::io::Error);

        let err = Outer(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(error_message(&err), "error sending request: connection refused");
    }

    #[test]
    fn test_error_result_shape() {
        let result = error_result("Error fetching weather data", "boom");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(
            result.structured_content,
            Some(serde_json::json!({ "error": "boom" }))
        );
        match &result.content[0].raw {
            RawContent::Text(text) => assert_eq!(text.text, "Error fetching weather data: boom"),
            _ => panic!("Expected text content"),
        }
    }
}
