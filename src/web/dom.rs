use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

pub(super) fn document() -> Result<Document, String> {
    web_sys::window()
        .ok_or("no window")?
        .document()
        .ok_or("no document".to_string())
}

pub(super) fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("dom: #{id} not found"))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| format!("dom: #{id} is not an HtmlElement"))
}

pub(super) fn input_by_id(document: &Document, id: &str) -> Result<HtmlInputElement, String> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| format!("dom: #{id} not found"))?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| format!("dom: #{id} is not an input"))
}

pub(super) fn set_visible(el: &HtmlElement, visible: bool) {
    let display = if visible { "block" } else { "none" };
    let _ = el.style().set_property("display", display);
}

pub(super) fn clear_value(input: &HtmlInputElement) {
    input.set_value("");
}
