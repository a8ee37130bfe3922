//! Widget configuration embedded in the host page.
//!
//! The page serializes this as a JSON `<script>` block (the Django
//! `json_script` convention); `start()` reads and parses it at mount. Every
//! field except `times_url` has a default matching the original booking
//! form's markup.

use serde::Deserialize;

/// Id of the JSON `<script>` block holding the configuration.
pub const CONFIG_SCRIPT_ID: &str = "booking-wizard-config";

#[derive(Debug, Clone, Deserialize)]
pub struct WizardConfig {
    /// Endpoint rendering the time-options fragment.
    pub times_url: String,
    /// Public booking flow; appends `f=true` to the times query.
    #[serde(default)]
    pub frontend: bool,

    #[serde(default = "default_date_input_id")]
    pub date_input_id: String,
    #[serde(default = "default_party_input_id")]
    pub party_input_id: String,
    #[serde(default = "default_time_input_id")]
    pub time_input_id: String,
    #[serde(default = "default_party_section_id")]
    pub party_section_id: String,
    #[serde(default = "default_time_section_id")]
    pub time_section_id: String,
    #[serde(default = "default_contact_section_id")]
    pub contact_section_id: String,

    /// Date picker bounds applied at mount; templates pass the site's
    /// booking window here.
    #[serde(default)]
    pub future_only: bool,
    #[serde(default)]
    pub min_date: Option<String>,
    #[serde(default)]
    pub max_date: Option<String>,
}

fn default_date_input_id() -> String {
    "id_date".to_string()
}

fn default_party_input_id() -> String {
    "id_party".to_string()
}

fn default_time_input_id() -> String {
    "id_time".to_string()
}

fn default_party_section_id() -> String {
    "party_div".to_string()
}

fn default_time_section_id() -> String {
    "time_div".to_string()
}

fn default_contact_section_id() -> String {
    "client_elements".to_string()
}

impl WizardConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| format!("config: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_takes_the_original_markup_ids() {
        let config = WizardConfig::from_json(r#"{ "times_url": "/bookings/times/" }"#).unwrap();
        assert_eq!(config.times_url, "/bookings/times/");
        assert!(!config.frontend);
        assert_eq!(config.date_input_id, "id_date");
        assert_eq!(config.party_input_id, "id_party");
        assert_eq!(config.time_input_id, "id_time");
        assert_eq!(config.party_section_id, "party_div");
        assert_eq!(config.time_section_id, "time_div");
        assert_eq!(config.contact_section_id, "client_elements");
        assert!(!config.future_only);
        assert!(config.min_date.is_none());
        assert!(config.max_date.is_none());
    }

    #[test]
    fn fields_can_be_overridden() {
        let config = WizardConfig::from_json(
            r#"{
                "times_url": "/t/",
                "frontend": true,
                "time_input_id": "booking_time",
                "min_date": "2026-09-01",
                "max_date": "2026-09-30"
            }"#,
        )
        .unwrap();
        assert!(config.frontend);
        assert_eq!(config.time_input_id, "booking_time");
        assert_eq!(config.min_date.as_deref(), Some("2026-09-01"));
        assert_eq!(config.max_date.as_deref(), Some("2026-09-30"));
    }

    #[test]
    fn missing_times_url_is_an_error() {
        assert!(WizardConfig::from_json("{}").is_err());
    }
}
