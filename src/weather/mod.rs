// SPDX-License-Identifier: MPL-2.0

//! BBC aggregated-forecast client shared by the weather probes

pub mod current;
pub mod week;

use std::time::Duration;

use serde_json::Value;

/// Aggregated forecast for the configured location id.
pub const FORECAST_URL: &str =
    "https://weather-broker-cdn.api.bbci.co.uk/en/forecast/aggregated/1701668";

/// Printed whenever the fetch or the payload shape fails, in every mode.
pub const UNAVAILABLE: &str = "Unavailable";

const FETCH_TIMEOUT: Duration = Duration::from_secs(12);

/// One blocking GET, JSON-decoded. No retry, no caching.
pub fn fetch_forecast() -> Result<Value, Box<dyn std::error::Error>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;
    let payload = client.get(FORECAST_URL).send()?.json()?;
    Ok(payload)
}

/// First non-empty string among `keys`, in preference order.
pub fn first_string<'a>(report: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| report.get(*key))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
}

/// Renders a JSON number the way the upstream payload carries it: integers
/// without a fraction, anything else as plain f64.
pub fn number_text(value: &Value) -> Option<String> {
    if let Some(n) = value.as_i64() {
        return Some(n.to_string());
    }
    value.as_f64().map(|n| n.to_string())
}
