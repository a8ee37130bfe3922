//! Step-gating model for the booking form wizard.
//!
//! Keeping this out of the wasm-only `web` module allows us to unit-test the
//! gating rules, the times-request URL, and the stale-response guard on the
//! host.

use std::cell::Cell;

/// Visibility changes for the three gated form sections after a step
/// transition. `None` leaves a section exactly as it is, so a step only
/// touches the sections its original handler touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    pub party: Option<bool>,
    pub time: Option<bool>,
    pub contact: Option<bool>,
}

impl Sections {
    pub const HIDDEN: Sections = Sections {
        party: Some(false),
        time: Some(false),
        contact: Some(false),
    };
}

/// What the DOM layer has to do after a change event: set section
/// visibility, drop stale input values, and optionally fetch the
/// time-options fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub sections: Sections,
    pub clear_party: bool,
    pub clear_time: bool,
    pub fetch_times: Option<TimesQuery>,
}

/// Query for the server-rendered time-options fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimesQuery {
    pub date: String,
    pub party_size: String,
}

impl TimesQuery {
    /// Build the fragment URL. Frontend mode appends `f=true`, which the
    /// server uses to distinguish the public booking flow from the admin one.
    ///
    /// Values are interpolated verbatim, without percent-encoding: the
    /// fragment endpoint parses the raw query and the picker-constrained
    /// inputs only produce `Y-m-d` dates and small integers. Encoding here
    /// would change the wire contract.
    pub fn url(&self, endpoint: &str, frontend: bool) -> String {
        let mut url = format!(
            "{endpoint}?date={}&party_size={}",
            self.date, self.party_size
        );
        if frontend {
            url.push_str("&f=true");
        }
        url
    }
}

/// Step 1: a date was picked (or cleared).
///
/// An empty or whitespace-only date collapses everything after it. A real
/// value reveals the party section and drops any party/time selections left
/// over from a previous date.
pub fn date_changed(booking_date: &str) -> StepOutcome {
    if booking_date.trim().is_empty() {
        StepOutcome {
            sections: Sections::HIDDEN,
            clear_party: false,
            clear_time: false,
            fetch_times: None,
        }
    } else {
        StepOutcome {
            sections: Sections {
                party: Some(true),
                time: Some(false),
                contact: Some(false),
            },
            clear_party: true,
            clear_time: true,
            fetch_times: None,
        }
    }
}

/// Step 2: the party size changed.
///
/// The deployed widget advances on every party change, even when the value
/// is cleared; kept as an explicit rule rather than a value check. Always
/// reveals the time section and requests the fragment for the current
/// date/party values.
pub fn party_changed(booking_date: &str, party_size: &str) -> StepOutcome {
    StepOutcome {
        sections: Sections {
            party: None,
            time: Some(true),
            contact: Some(false),
        },
        clear_party: false,
        clear_time: true,
        fetch_times: Some(TimesQuery {
            date: booking_date.to_string(),
            party_size: party_size.to_string(),
        }),
    }
}

/// Step 3: a time was picked. Reveals the contact fields; advances
/// unconditionally, like step 2.
pub fn time_changed() -> StepOutcome {
    StepOutcome {
        sections: Sections {
            party: None,
            time: None,
            contact: Some(true),
        },
        clear_party: false,
        clear_time: false,
        fetch_times: None,
    }
}

/// Monotone counter guarding the times fetch against stale responses: a
/// response is applied only while its token is still the newest one issued.
#[derive(Debug, Default)]
pub struct RequestCounter {
    current: Cell<u64>,
}

impl RequestCounter {
    /// Issue a token for a new request, superseding all earlier ones.
    pub fn begin(&self) -> u64 {
        let token = self.current.get() + 1;
        self.current.set(token);
        token
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.current.get() == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_date_hides_every_later_section() {
        for value in ["", "   ", "\t \n"] {
            let out = date_changed(value);
            assert_eq!(out.sections, Sections::HIDDEN, "value {value:?}");
            assert!(!out.clear_party);
            assert!(!out.clear_time);
            assert!(out.fetch_times.is_none());
        }
    }

    #[test]
    fn date_value_reveals_party_and_drops_stale_selections() {
        let out = date_changed("2026-08-24");
        assert_eq!(out.sections.party, Some(true));
        assert_eq!(out.sections.time, Some(false));
        assert_eq!(out.sections.contact, Some(false));
        assert!(out.clear_party);
        assert!(out.clear_time);
        assert!(out.fetch_times.is_none());
    }

    #[test]
    fn party_change_requests_times_for_current_values() {
        let out = party_changed("2026-08-24", "4");
        assert_eq!(out.sections.time, Some(true));
        assert_eq!(out.sections.contact, Some(false));
        assert!(out.clear_time);
        assert_eq!(
            out.fetch_times,
            Some(TimesQuery {
                date: "2026-08-24".to_string(),
                party_size: "4".to_string(),
            })
        );
    }

    #[test]
    fn party_change_advances_even_when_cleared() {
        // Matches the widget as deployed: the change event itself advances.
        let out = party_changed("2026-08-24", "");
        assert_eq!(out.sections.time, Some(true));
        assert!(out.fetch_times.is_some());
    }

    #[test]
    fn later_steps_leave_earlier_sections_untouched() {
        // A party change after the date was cleared must not re-reveal the
        // party section; steps only touch the sections their handler owns.
        let out = party_changed("", "4");
        assert_eq!(out.sections.party, None);

        let out = time_changed();
        assert_eq!(out.sections.party, None);
        assert_eq!(out.sections.time, None);
    }

    #[test]
    fn times_url_carries_date_and_party() {
        let query = TimesQuery {
            date: "2026-08-24".to_string(),
            party_size: "4".to_string(),
        };
        assert_eq!(
            query.url("/bookings/times/", false),
            "/bookings/times/?date=2026-08-24&party_size=4"
        );
    }

    #[test]
    fn times_url_appends_flag_only_in_frontend_mode() {
        let query = TimesQuery {
            date: "2026-08-24".to_string(),
            party_size: "2".to_string(),
        };
        assert!(query.url("/t/", true).ends_with("&f=true"));
        assert!(!query.url("/t/", false).contains("f=true"));
    }

    #[test]
    fn time_change_reveals_contact_fields() {
        let out = time_changed();
        assert_eq!(out.sections.contact, Some(true));
        assert!(!out.clear_time);
        assert!(out.fetch_times.is_none());
    }

    #[test]
    fn times_url_interpolates_values_verbatim() {
        // No percent-encoding: the endpoint reads the raw query string.
        let query = TimesQuery {
            date: "2026-08-24 18:00".to_string(),
            party_size: "4+1".to_string(),
        };
        assert_eq!(
            query.url("/t/", false),
            "/t/?date=2026-08-24 18:00&party_size=4+1"
        );
    }

    #[test]
    fn stale_request_token_is_rejected() {
        let requests = RequestCounter::default();
        let first = requests.begin();
        assert!(requests.is_current(first));

        let second = requests.begin();
        assert!(!requests.is_current(first), "older token must lose");
        assert!(requests.is_current(second));
    }
}
