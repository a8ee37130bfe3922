//! wasm-only glue: config loading, picker registration, wizard wiring.

mod dom;
mod fetch;
mod pickers;
mod wizard;

pub use pickers::{init_date_picker, init_time_picker};

use crate::config::{WizardConfig, CONFIG_SCRIPT_ID};

/// Mount the booking wizard against the current document. Failures are
/// logged rather than thrown; the form then behaves as a plain static form.
pub fn start() {
    if let Err(e) = mount() {
        warn(&e);
    }
}

pub(crate) fn warn(message: &str) {
    web_sys::console::warn_1(&format!("tablebook: {message}").into());
}

fn mount() -> Result<(), String> {
    let document = dom::document()?;
    let config = load_config(&document)?;

    pickers::apply_date_picker(
        config.future_only,
        config.min_date.as_deref(),
        config.max_date.as_deref(),
    )?;
    pickers::apply_time_picker()?;

    wizard::Wizard::mount(document, config)?;
    Ok(())
}

fn load_config(document: &web_sys::Document) -> Result<WizardConfig, String> {
    let block = document
        .get_element_by_id(CONFIG_SCRIPT_ID)
        .ok_or_else(|| format!("config: #{CONFIG_SCRIPT_ID} script block not found"))?;
    let raw = block
        .text_content()
        .ok_or("config: empty script block".to_string())?;
    WizardConfig::from_json(&raw)
}
