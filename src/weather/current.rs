// SPDX-License-Identifier: MPL-2.0

//! Current-conditions extraction: summary, icon key, humidity/wind details.

use serde_json::Value;

use crate::weather::{first_string, number_text};

/// Condition keys in preference order; the enhanced description is fuller
/// when the feed provides it.
const DESCRIPTION_KEYS: &[&str] = &["enhancedWeatherDescription", "weatherTypeText"];

/// Substring rules mapped to widget icon keys, evaluated in order.
const ICON_RULES: &[(&[&str], &str)] = &[
    (&["thunder", "storm"], "storm"),
    (&["rain", "shower", "drizzle"], "rain"),
    (&["snow", "sleet", "blizzard"], "snow"),
    (&["cloud", "overcast"], "cloudy"),
    (&["mist", "fog", "haze"], "fog"),
    (&["clear", "sun"], "clear"),
];

/// The report the probe works from: first detailed report of the first
/// forecast. `None` when the payload does not have that shape.
pub fn current_report(payload: &Value) -> Option<&Value> {
    payload
        .get("forecasts")?
        .get(0)?
        .get("detailed")?
        .get("reports")?
        .get(0)
}

/// Maps a condition description onto one of the widget's icon keys.
pub fn icon_key_for_condition(text: &str) -> &'static str {
    let condition = text.to_lowercase();
    for (needles, key) in ICON_RULES {
        if needles.iter().any(|needle| condition.contains(needle)) {
            return key;
        }
    }
    "partly"
}

/// `"{temp}°C  {description}"`, degrading to whichever field is present.
/// `None` when both are missing.
pub fn summary_line(report: &Value) -> Option<String> {
    let temp = report.get("temperatureC").and_then(number_text);
    let description = first_string(report, DESCRIPTION_KEYS).unwrap_or_default();

    match (temp, description) {
        (None, "") => None,
        (None, description) => Some(description.to_string()),
        (Some(temp), "") => Some(format!("{temp}\u{00b0}C")),
        (Some(temp), description) => Some(format!("{temp}\u{00b0}C  {description}")),
    }
}

/// Icon key for the current description (empty description maps to the
/// catch-all key).
pub fn icon_line(report: &Value) -> String {
    let description = first_string(report, DESCRIPTION_KEYS).unwrap_or_default();
    icon_key_for_condition(description).to_string()
}

/// `"Humidity: {h}%  Wind: {w} km/h"` with `N/A` per missing field; `None`
/// when both are missing.
pub fn details_line(report: &Value) -> Option<String> {
    let humidity = report.get("humidity").and_then(number_text);
    let wind_kph = report.get("windSpeedKph").and_then(number_text);

    if humidity.is_none() && wind_kph.is_none() {
        return None;
    }

    let humidity_text = match humidity {
        Some(h) => format!("Humidity: {h}%"),
        None => "Humidity: N/A".to_string(),
    };
    let wind_text = match wind_kph {
        Some(w) => format!("Wind: {w} km/h"),
        None => "Wind: N/A".to_string(),
    };
    Some(format!("{humidity_text}  {wind_text}"))
}

/// Full mode dispatch over a fetched payload; `None` means `Unavailable`.
pub fn report_line(payload: &Value, mode: &str) -> Option<String> {
    let report = current_report(payload)?;
    match mode {
        "icon" => Some(icon_line(report)),
        "details" => details_line(report),
        _ => summary_line(report),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload_with(report: Value) -> Value {
        json!({ "forecasts": [ { "detailed": { "reports": [ report ] } } ] })
    }

    #[test]
    fn icon_rules_match_in_order() {
        assert_eq!(icon_key_for_condition("Thundery showers"), "storm");
        assert_eq!(icon_key_for_condition("Light rain showers"), "rain");
        assert_eq!(icon_key_for_condition("Sleet and snow"), "snow");
        assert_eq!(icon_key_for_condition("Overcast"), "cloudy");
        assert_eq!(icon_key_for_condition("Freezing fog"), "fog");
        assert_eq!(icon_key_for_condition("Sunny intervals"), "clear");
        assert_eq!(icon_key_for_condition("Something else"), "partly");
        assert_eq!(icon_key_for_condition(""), "partly");
    }

    #[test]
    fn summary_combines_temperature_and_description() {
        let payload = payload_with(json!({
            "temperatureC": 18,
            "enhancedWeatherDescription": "Sunny intervals and a gentle breeze",
        }));
        assert_eq!(
            report_line(&payload, "summary").as_deref(),
            Some("18\u{00b0}C  Sunny intervals and a gentle breeze")
        );
    }

    #[test]
    fn summary_degrades_per_missing_field() {
        let temp_only = payload_with(json!({ "temperatureC": -2 }));
        assert_eq!(
            report_line(&temp_only, "summary").as_deref(),
            Some("-2\u{00b0}C")
        );

        let description_only = payload_with(json!({ "weatherTypeText": "Drizzle" }));
        assert_eq!(
            report_line(&description_only, "summary").as_deref(),
            Some("Drizzle")
        );

        let neither = payload_with(json!({}));
        assert_eq!(report_line(&neither, "summary"), None);
    }

    #[test]
    fn details_mark_missing_fields() {
        let both = payload_with(json!({ "humidity": 83, "windSpeedKph": 14 }));
        assert_eq!(
            report_line(&both, "details").as_deref(),
            Some("Humidity: 83%  Wind: 14 km/h")
        );

        let wind_only = payload_with(json!({ "windSpeedKph": 14 }));
        assert_eq!(
            report_line(&wind_only, "details").as_deref(),
            Some("Humidity: N/A  Wind: 14 km/h")
        );

        let neither = payload_with(json!({ "temperatureC": 18 }));
        assert_eq!(report_line(&neither, "details"), None);
    }

    #[test]
    fn malformed_payload_shape_is_unavailable_in_every_mode() {
        for payload in [json!({}), json!({ "forecasts": [] }), json!("junk")] {
            assert_eq!(report_line(&payload, "summary"), None);
            assert_eq!(report_line(&payload, "icon"), None);
            assert_eq!(report_line(&payload, "details"), None);
        }
    }

    #[test]
    fn unknown_mode_falls_through_to_summary() {
        let payload = payload_with(json!({ "temperatureC": 7, "weatherTypeText": "Mist" }));
        assert_eq!(
            report_line(&payload, "whatever").as_deref(),
            Some("7\u{00b0}C  Mist")
        );
    }
}
