//! RSVP form: guest-count field toggle and the transient "sending" button.
//!
//! The form posts natively to an external relay. Nothing here observes the
//! result; the button is restored on a fixed timer whatever happened.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlButtonElement, HtmlElement, HtmlSelectElement};

use crate::config::selectors;
use crate::dom;
use crate::error::Result;
use crate::style::{Reveal, Visibility};

pub const NOT_ATTENDING: &str = "no";

/// Guest-count visibility for an attendance value. Only a declined RSVP hides it.
pub fn guests_visibility(attendance: &str) -> Visibility {
    Visibility::from_bool(attendance != NOT_ATTENDING)
}

/// Label and enabled state of the submit button across a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    original_label: String,
    pending: bool,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self { original_label: label.into(), pending: false }
    }

    /// Enter the sending state. Returns the label to show, or `None` if a
    /// submission is already pending.
    pub fn begin<'a>(&mut self, current_label: &str, sending_label: &'a str) -> Option<&'a str> {
        if self.pending {
            return None;
        }
        self.original_label = current_label.to_string();
        self.pending = true;
        Some(sending_label)
    }

    /// Leave the sending state, returning the label to put back.
    pub fn restore(&mut self) -> &str {
        self.pending = false;
        &self.original_label
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

pub fn install_guest_toggle(doc: &Document) -> Result<bool> {
    let Some(select) = doc
        .get_element_by_id(selectors::ATTENDANCE_ID)
        .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
    else {
        return Ok(false);
    };
    let Some(group) = doc
        .get_element_by_id(selectors::GUESTS_ID)
        .and_then(|guests| guests.closest(selectors::FORM_GROUP).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return Ok(false);
    };

    let apply = move |select: &HtmlSelectElement, group: &HtmlElement| {
        let shown = guests_visibility(&select.value()).is_shown();
        dom::set_visible(group, Reveal::Display, shown);
    };
    apply(&select, &group);

    let select_ref = select.clone();
    dom::listen(&select, "change", move |_: Event| apply(&select_ref, &group))?;
    Ok(true)
}

pub fn install_submit_guard(doc: &Document, sending_label: String, restore_ms: u32) -> Result<bool> {
    let Some(form) = doc.query_selector(selectors::RSVP_FORM).ok().flatten() else {
        return Ok(false);
    };
    let Some(button) = form
        .query_selector(selectors::SUBMIT_BUTTON)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        return Ok(false);
    };

    let state = Rc::new(RefCell::new(SubmitButton::new(
        button.text_content().unwrap_or_default(),
    )));
    dom::listen(&form, "submit", move |_: Event| {
        let current = button.text_content().unwrap_or_default();
        let Some(label) = state.borrow_mut().begin(&current, &sending_label) else {
            return;
        };
        button.set_text_content(Some(label));
        button.set_disabled(true);
        log::debug!("rsvp submitted, button locked for {restore_ms}ms");

        let button = button.clone();
        let state = state.clone();
        dom::defer(restore_ms, move || {
            let mut guard = state.borrow_mut();
            button.set_text_content(Some(guard.restore()));
            button.set_disabled(false);
        });
    })?;
    Ok(true)
}
