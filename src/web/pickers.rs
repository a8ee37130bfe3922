use wasm_bindgen::prelude::*;

use crate::picker::{self, DATE_FIELD_SELECTOR, TIME_FIELD_SELECTOR};

#[wasm_bindgen]
extern "C" {
    /// Global flatpickr entry point loaded by the host page.
    fn flatpickr(selector: &str, config: &JsValue);
}

pub(super) fn apply_date_picker(
    future_only: bool,
    min_date: Option<&str>,
    max_date: Option<&str>,
) -> Result<(), String> {
    let config = picker::date_picker_config(future_only, min_date, max_date);
    let value = serde_wasm_bindgen::to_value(&config).map_err(|e| format!("picker: {e}"))?;
    flatpickr(DATE_FIELD_SELECTOR, &value);
    Ok(())
}

pub(super) fn apply_time_picker() -> Result<(), String> {
    let config = picker::time_picker_config();
    let value = serde_wasm_bindgen::to_value(&config).map_err(|e| format!("picker: {e}"))?;
    flatpickr(TIME_FIELD_SELECTOR, &value);
    Ok(())
}

/// Register the date picker on every `.flatpickrDateField` element.
/// Exported so templates can pass server-computed booking bounds.
#[wasm_bindgen(js_name = initDatePicker)]
pub fn init_date_picker(future_only: bool, min_date: Option<String>, max_date: Option<String>) {
    if let Err(e) = apply_date_picker(future_only, min_date.as_deref(), max_date.as_deref()) {
        super::warn(&e);
    }
}

/// Register the time picker on every `.flatpickrTimeField` element.
#[wasm_bindgen(js_name = initTimePicker)]
pub fn init_time_picker() {
    if let Err(e) = apply_time_picker() {
        super::warn(&e);
    }
}
