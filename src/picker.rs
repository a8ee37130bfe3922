//! flatpickr configuration builders.
//!
//! Plain serde structs whose fields serialize to flatpickr's exact option
//! spelling; the wasm side converts them with `serde-wasm-bindgen` and hands
//! them to the global `flatpickr(selector, config)` entry point.

use serde::Serialize;

/// Marker class for inputs that get the date picker.
pub const DATE_FIELD_SELECTOR: &str = ".flatpickrDateField";
/// Marker class for inputs that get the time picker.
pub const TIME_FIELD_SELECTOR: &str = ".flatpickrTimeField";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePickerConfig {
    #[serde(rename = "dateFormat")]
    pub date_format: String,
    #[serde(rename = "minDate", skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(rename = "maxDate", skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
}

/// Date picker options. An explicit `min_date` wins over `future_only`;
/// `future_only` alone pins the minimum to flatpickr's "today" keyword.
/// `max_date` is applied whenever supplied.
pub fn date_picker_config(
    future_only: bool,
    min_date: Option<&str>,
    max_date: Option<&str>,
) -> DatePickerConfig {
    let min_date = match min_date {
        Some(date) => Some(date.to_string()),
        None if future_only => Some("today".to_string()),
        None => None,
    };

    DatePickerConfig {
        date_format: "Y-m-d".to_string(),
        min_date,
        max_date: max_date.map(str::to_string),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimePickerConfig {
    #[serde(rename = "enableTime")]
    pub enable_time: bool,
    #[serde(rename = "noCalendar")]
    pub no_calendar: bool,
    #[serde(rename = "dateFormat")]
    pub date_format: String,
    // flatpickr spells this one snake_case.
    pub time_24hr: bool,
    #[serde(rename = "minuteIncrement")]
    pub minute_increment: u32,
}

/// Fixed time picker options: 24h clock, 15 minute slots, no calendar pane.
pub fn time_picker_config() -> TimePickerConfig {
    TimePickerConfig {
        enable_time: true,
        no_calendar: true,
        date_format: "H:i".to_string(),
        time_24hr: true,
        minute_increment: 15,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn date_config_without_bounds_has_only_the_format() {
        let config = date_picker_config(false, None, None);
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "dateFormat": "Y-m-d" })
        );
    }

    #[test]
    fn future_only_pins_min_date_to_today() {
        let config = date_picker_config(true, None, None);
        assert_eq!(config.min_date.as_deref(), Some("today"));
    }

    #[test]
    fn explicit_min_date_wins_over_future_only() {
        let config = date_picker_config(true, Some("2026-09-01"), None);
        assert_eq!(config.min_date.as_deref(), Some("2026-09-01"));
    }

    #[test]
    fn max_date_is_always_applied() {
        let config = date_picker_config(false, None, Some("2026-12-31"));
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "dateFormat": "Y-m-d", "maxDate": "2026-12-31" })
        );
    }

    #[test]
    fn time_config_is_fixed_with_flatpickr_key_spelling() {
        assert_eq!(
            serde_json::to_value(time_picker_config()).unwrap(),
            json!({
                "enableTime": true,
                "noCalendar": true,
                "dateFormat": "H:i",
                "time_24hr": true,
                "minuteIncrement": 15,
            })
        );
    }
}
