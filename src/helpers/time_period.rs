//! Parsing of time periods such as `10s`, `500ms`, `1min` or `1h`.

use std::time::Duration;

use serde_json::Value;

/// Parse a time period from a config value.
///
/// Only strings with a unit suffix (`ms`, `s`, `min`, `h`) are accepted.
pub fn parse_time_period(value: &Value) -> Result<Duration, String> {
    match value {
        Value::Number(n) => Err(format!(
            "don't know what '{n}' means as it has no time unit, did you mean '{n}s'?"
        )),
        Value::String(s) => parse_time_period_str(s),
        other => Err(format!("expected a time period, got {other}")),
    }
}

pub fn parse_time_period_str(s: &str) -> Result<Duration, String> {
    let s = s.trim();
    let split = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);
    let number: f64 = number
        .parse()
        .map_err(|_| format!("invalid time period '{s}'"))?;

    let millis_per_unit = match unit.trim() {
        "ms" => 1.0,
        "s" | "sec" => 1_000.0,
        "" => return Err(format!("'{s}' has no time unit")),
        "min" => 60_000.0,
        "h" => 3_600_000.0,
        other => return Err(format!("unknown time unit '{other}' in '{s}'")),
    };

    Ok(Duration::from_millis((number * millis_per_unit).round() as u64))
}

/// Format a duration the way it is written in config files.
pub fn format_time_period(d: Duration) -> String {
    let millis = d.as_millis();
    if millis % 1_000 != 0 {
        format!("{millis}ms")
    } else {
        format!("{}s", millis / 1_000)
    }
}
