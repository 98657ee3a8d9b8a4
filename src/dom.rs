//! Thin helper layer over `web_sys` for the installers.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::config::classes;
use crate::error::{Result, SiteError};
use crate::style::{Reveal, Visibility};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn query_all_html(root: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    Ok(query_all(root, selector)?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn query_html(root: &Document, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn by_id_html(root: &Document, id: &str) -> Option<HtmlElement> {
    root.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Show or hide `el`. With [`Reveal::Fade`] the `visible` class follows the
/// state so stylesheet transitions keyed on it still apply.
pub fn set_visible(el: &HtmlElement, reveal: Reveal, visible: bool) {
    let visibility = Visibility::from_bool(visible);
    let (property, value) = reveal.declaration(visibility);
    set_style(el, property, value);
    if reveal.toggles_marker_class() {
        let list = el.class_list();
        let _ = if visibility.is_shown() {
            list.add_1(classes::VISIBLE)
        } else {
            list.remove_1(classes::VISIBLE)
        };
    }
}

/// Detach `el` from the document if it is still attached.
pub fn remove(el: &Element) {
    if el.parent_node().is_some() {
        el.remove();
    }
}

pub fn remove_after(el: Element, delay_ms: u32) {
    Timeout::new(delay_ms, move || remove(&el)).forget();
}

/// Run `f` once after `delay_ms`. Fire-and-forget.
pub fn defer(delay_ms: u32, f: impl FnOnce() + 'static) {
    Timeout::new(delay_ms, f).forget();
}

/// Attach a listener that lives as long as the page.
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |evt: Event| {
        if let Ok(evt) = evt.dyn_into::<E>() {
            handler(evt);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `f` now if the document has been parsed, otherwise on `DOMContentLoaded`.
pub fn on_ready(doc: &Document, f: impl FnOnce() + 'static) -> Result<()> {
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let mut f = Some(f);
    listen(doc, "DOMContentLoaded", move |_: Event| {
        if let Some(f) = f.take() {
            f();
        }
    })
}
