// SPDX-License-Identifier: MPL-2.0

//! Seven-day digest: one pipe-delimited line per forecast day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde_json::Value;

use crate::weather::{first_string, number_text};

/// Daily condition keys in preference order; the summary feed sometimes only
/// carries the bare type name.
const CONDITION_KEYS: &[&str] = &[
    "enhancedWeatherDescription",
    "weatherTypeText",
    "weatherType",
];

/// Days printed per run.
const DAYS_SHOWN: usize = 7;

/// `"Mon, Aug 25"` for a `YYYY-MM-DD` date, falling back to the first three
/// characters when the date does not parse.
pub fn day_label(local_date: &str) -> String {
    match NaiveDate::parse_from_str(local_date, "%Y-%m-%d") {
        Ok(date) => date.format("%a, %b %d").to_string(),
        Err(_) => local_date.chars().take(3).collect(),
    }
}

/// Collects one summary report per distinct `localDate`, sorted by date.
///
/// The feed carries either `summary.reports` (a list) or `summary.report`
/// (a single object) per forecast entry; the first report seen for a date
/// wins.
pub fn daily_reports(payload: &Value) -> Vec<&Value> {
    let mut daily: BTreeMap<&str, &Value> = BTreeMap::new();

    let forecasts = payload
        .get("forecasts")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    for forecast in forecasts {
        let summary = forecast.get("summary").unwrap_or(&Value::Null);

        if let Some(reports) = summary.get("reports").and_then(Value::as_array) {
            for report in reports.iter().filter(|r| r.is_object()) {
                if let Some(local_date) = report.get("localDate").and_then(Value::as_str) {
                    if !local_date.is_empty() {
                        daily.entry(local_date).or_insert(report);
                    }
                }
            }
            continue;
        }

        if let Some(report) = summary.get("report").filter(|r| r.is_object()) {
            if let Some(local_date) = report.get("localDate").and_then(Value::as_str) {
                if !local_date.is_empty() {
                    daily.entry(local_date).or_insert(report);
                }
            }
        }
    }

    daily.into_values().collect()
}

/// `"{label}|{max}|{min}|{condition}"`, `--` for missing temps, min falling
/// back to max.
pub fn format_line(report: &Value) -> String {
    let local_date = report
        .get("localDate")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let label = day_label(local_date);

    let max_c = report
        .get("maxTempC")
        .and_then(number_text)
        .or_else(|| report.get("temperatureC").and_then(number_text));
    let min_c = report
        .get("minTempC")
        .and_then(number_text)
        .or_else(|| max_c.clone());

    let condition = first_string(report, CONDITION_KEYS).unwrap_or("Unknown");

    let max_text = max_c.as_deref().unwrap_or("--");
    let min_text = min_c.as_deref().unwrap_or("--");
    format!("{label}|{max_text}|{min_text}|{condition}")
}

/// The full digest block; `None` when no daily report parses.
pub fn digest(payload: &Value) -> Option<String> {
    let reports = daily_reports(payload);
    if reports.is_empty() {
        return None;
    }

    let lines: Vec<String> = reports
        .into_iter()
        .take(DAYS_SHOWN)
        .map(format_line)
        .collect();
    Some(lines.join("\n"))
}
