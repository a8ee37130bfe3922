use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::config::WizardConfig;
use crate::steps::{self, RequestCounter, StepOutcome, TimesQuery};

use super::{dom, fetch};

const LOADING_TEXT: &str = "Loading times...";
const TIMES_FAILED_TEXT: &str = "Could not load available times. Please pick the date again.";

/// One booking form instance: explicit element handles instead of ambient
/// globals, with the time input absent until the fragment has loaded.
pub(super) struct Wizard {
    document: Document,
    date_input: HtmlInputElement,
    party_input: HtmlInputElement,
    party_section: HtmlElement,
    time_section: HtmlElement,
    contact_section: HtmlElement,
    time_input: RefCell<Option<HtmlInputElement>>,
    time_input_id: String,
    times_url: String,
    frontend: bool,
    requests: RequestCounter,
}

impl Wizard {
    pub(super) fn mount(document: Document, config: WizardConfig) -> Result<Rc<Wizard>, String> {
        let wizard = Rc::new(Wizard {
            date_input: dom::input_by_id(&document, &config.date_input_id)?,
            party_input: dom::input_by_id(&document, &config.party_input_id)?,
            party_section: dom::element_by_id(&document, &config.party_section_id)?,
            time_section: dom::element_by_id(&document, &config.time_section_id)?,
            contact_section: dom::element_by_id(&document, &config.contact_section_id)?,
            time_input: RefCell::new(None),
            time_input_id: config.time_input_id,
            times_url: config.times_url,
            frontend: config.frontend,
            requests: RequestCounter::default(),
            document,
        });

        // Step 1: select a date.
        let w = Rc::clone(&wizard);
        let on_date = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            w.date_changed();
        }) as Box<dyn FnMut(_)>);
        wizard
            .date_input
            .set_onchange(Some(on_date.as_ref().unchecked_ref()));
        on_date.forget();

        // Step 2: select the party size.
        let w = Rc::clone(&wizard);
        let on_party = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            w.party_changed();
        }) as Box<dyn FnMut(_)>);
        wizard
            .party_input
            .set_onchange(Some(on_party.as_ref().unchecked_ref()));
        on_party.forget();

        // Step 3 binds once the time fragment is injected.
        Ok(wizard)
    }

    fn date_changed(&self) {
        self.apply(&steps::date_changed(&self.date_input.value()));
    }

    fn party_changed(self: &Rc<Self>) {
        let outcome = steps::party_changed(&self.date_input.value(), &self.party_input.value());
        self.apply(&outcome);
        if let Some(query) = outcome.fetch_times {
            self.load_times(query);
        }
    }

    fn time_changed(&self) {
        self.apply(&steps::time_changed());
    }

    fn apply(&self, outcome: &StepOutcome) {
        if let Some(visible) = outcome.sections.party {
            dom::set_visible(&self.party_section, visible);
        }
        if let Some(visible) = outcome.sections.time {
            dom::set_visible(&self.time_section, visible);
        }
        if let Some(visible) = outcome.sections.contact {
            dom::set_visible(&self.contact_section, visible);
        }

        if outcome.clear_party {
            dom::clear_value(&self.party_input);
        }
        if outcome.clear_time {
            if let Some(time_input) = self.time_input.borrow().as_ref() {
                dom::clear_value(time_input);
            }
        }
    }

    fn load_times(self: &Rc<Self>, query: TimesQuery) {
        let token = self.requests.begin();
        self.time_section.set_inner_html(LOADING_TEXT);
        // The old handle points into markup we are about to replace.
        self.time_input.replace(None);

        let w = Rc::clone(self);
        spawn_local(async move {
            let url = query.url(&w.times_url, w.frontend);
            let result = fetch::fetch_text(&url).await;

            if !w.requests.is_current(token) {
                // A newer party-size change superseded this request.
                return;
            }

            match result {
                Ok(html) => {
                    w.time_section.set_inner_html(&html);
                    if let Err(e) = w.rebind_time_input() {
                        super::warn(&e);
                    }
                }
                Err(e) => {
                    w.time_section.set_inner_html(TIMES_FAILED_TEXT);
                    super::warn(&e);
                }
            }
        });
    }

    /// Locate the time input inside freshly injected markup and attach the
    /// step-3 handler. Runs on every fragment replacement.
    fn rebind_time_input(self: &Rc<Self>) -> Result<(), String> {
        let input = dom::input_by_id(&self.document, &self.time_input_id)?;

        let w = Rc::clone(self);
        let on_time = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
            w.time_changed();
        }) as Box<dyn FnMut(_)>);
        input.set_onchange(Some(on_time.as_ref().unchecked_ref()));
        on_time.forget();

        self.time_input.replace(Some(input));
        Ok(())
    }
}
