use serde_json::{Value, json};

use super::Tool;
use crate::error::LlmError;

/// Canned weather lookup used by the demo agent
///
/// Only New York has a report; every other city yields an error payload
/// (not an `Err`), which the model receives as the tool result.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetWeather;

impl GetWeather {
    /// Name the model uses to request the tool
    pub const NAME: &'static str = "get_weather";
}

impl Tool for GetWeather {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Retrieves the current weather report for a specified city."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "city": {"type": "string", "description": "The name of the city."}
            },
            "required": ["city"]
        })
    }

    fn call(&self, arguments: &Value) -> Result<Value, LlmError> {
        let city = arguments
            .get("city")
            .and_then(Value::as_str)
            .ok_or_else(|| LlmError::InvalidRequest("get_weather requires a string 'city' argument".to_owned()))?;

        if city.eq_ignore_ascii_case("new york") {
            Ok(json!({
                "status": "success",
                "report": "The weather in New York is sunny with a temperature of 25 degrees Celsius (77 degrees Fahrenheit)."
            }))
        } else {
            Ok(json!({
                "status": "error",
                "error_message": format!("Weather information for '{city}' is not available.")
            }))
        }
    }
}
