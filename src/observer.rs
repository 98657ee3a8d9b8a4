//! Viewport-driven reveals: fade-in sections and lazily loaded backgrounds.
//!
//! Both use one `IntersectionObserver` each. A fade-in element is marked
//! visible the first time it intersects and stays that way. A lazy element
//! gets its background applied once, then is unobserved.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config::{classes, selectors};
use crate::dom;
use crate::error::Result;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

pub const FADE_IN_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.1,
    root_margin: "0px 0px -50px 0px",
};

pub const LAZY_BG_OPTIONS: ObserverOptions = ObserverOptions {
    threshold: 0.01,
    root_margin: "50px 0px",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FadeState {
    Pending,
    Visible,
}

impl FadeState {
    /// Next state after an intersection notification. Never leaves `Visible`.
    pub fn on_intersection(self, intersecting: bool) -> FadeState {
        match self {
            FadeState::Visible => FadeState::Visible,
            FadeState::Pending if intersecting => FadeState::Visible,
            FadeState::Pending => FadeState::Pending,
        }
    }
}

/// Background to apply to a lazy element, read from `data-bg` and
/// `data-bg-position`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LazyBackground {
    pub image: String,
    pub position: Option<String>,
}

impl LazyBackground {
    /// `None` when there is no usable `data-bg`; the element then stays lazy.
    pub fn from_data(bg: Option<String>, position: Option<String>) -> Option<Self> {
        let image = bg.filter(|b| !b.trim().is_empty())?;
        let position = position.filter(|p| !p.trim().is_empty());
        Some(Self { image, position })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LazyState {
    Lazy,
    Loaded(LazyBackground),
}

impl LazyState {
    pub fn on_intersection(self, intersecting: bool, data: Option<LazyBackground>) -> LazyState {
        match (self, intersecting, data) {
            (LazyState::Lazy, true, Some(bg)) => LazyState::Loaded(bg),
            (state, _, _) => state,
        }
    }
}

fn observer_init(options: ObserverOptions) -> IntersectionObserverInit {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);
    init
}

fn observe_all(
    elements: &[Element],
    options: ObserverOptions,
    mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
) -> Result<IntersectionObserver> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(&entry, &observer);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);
    let observer = IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &observer_init(options),
    )?;
    callback.forget();
    for el in elements {
        observer.observe(el);
    }
    Ok(observer)
}

pub fn install_fade_in(doc: &Document) -> Result<usize> {
    let elements = dom::query_all(doc, selectors::FADE_IN)?;
    if elements.is_empty() {
        return Ok(0);
    }
    observe_all(&elements, FADE_IN_OPTIONS, |entry, _| {
        let target = entry.target();
        let current = if target.class_list().contains(classes::VISIBLE) {
            FadeState::Visible
        } else {
            FadeState::Pending
        };
        if current.on_intersection(entry.is_intersecting()) != current {
            let _ = target.class_list().add_1(classes::VISIBLE);
        }
    })?;
    Ok(elements.len())
}

pub fn install_lazy_backgrounds(doc: &Document) -> Result<usize> {
    let elements = dom::query_all(doc, selectors::LAZY_BG)?;
    if elements.is_empty() {
        return Ok(0);
    }
    observe_all(&elements, LAZY_BG_OPTIONS, |entry, observer| {
        let Ok(target) = entry.target().dyn_into::<HtmlElement>() else {
            return;
        };
        let data = target.dataset();
        let background = LazyBackground::from_data(data.get("bg"), data.get("bgPosition"));
        let next = LazyState::Lazy.on_intersection(entry.is_intersecting(), background);
        if let LazyState::Loaded(bg) = next {
            apply_background(&target, &bg);
            observer.unobserve(&target);
        }
    })?;
    Ok(elements.len())
}

fn apply_background(el: &HtmlElement, bg: &LazyBackground) {
    dom::set_style(el, "background-image", &bg.image);
    if let Some(position) = &bg.position {
        dom::set_style(el, "background-position", position);
    }
    let _ = el.class_list().remove_1(classes::LAZY_BG);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_is_one_way() {
        let s = FadeState::Pending.on_intersection(false);
        assert_eq!(s, FadeState::Pending);
        let s = s.on_intersection(true);
        assert_eq!(s, FadeState::Visible);
        assert_eq!(s.on_intersection(false), FadeState::Visible);
    }

    #[test]
    fn lazy_requires_data_bg() {
        assert_eq!(LazyBackground::from_data(None, Some("center".into())), None);
        assert_eq!(LazyBackground::from_data(Some("  ".into()), None), None);
        let bg = LazyBackground::from_data(Some("url(a.jpg)".into()), Some(String::new())).unwrap();
        assert_eq!(bg.image, "url(a.jpg)");
        assert_eq!(bg.position, None);
    }

    #[test]
    fn lazy_loads_only_when_intersecting_with_data() {
        let bg = LazyBackground::from_data(Some("url(b.jpg)".into()), Some("top".into()));
        assert_eq!(LazyState::Lazy.on_intersection(false, bg.clone()), LazyState::Lazy);
        assert_eq!(LazyState::Lazy.on_intersection(true, None), LazyState::Lazy);
        let loaded = LazyState::Lazy.on_intersection(true, bg.clone());
        assert_eq!(loaded, LazyState::Loaded(bg.unwrap()));
        let other = LazyBackground::from_data(Some("url(c.jpg)".into()), None);
        assert_eq!(loaded.clone().on_intersection(true, other), loaded);
    }

    #[test]
    fn observer_thresholds() {
        assert_eq!(FADE_IN_OPTIONS.threshold, 0.1);
        assert_eq!(FADE_IN_OPTIONS.root_margin, "0px 0px -50px 0px");
        assert_eq!(LAZY_BG_OPTIONS.threshold, 0.01);
    }
}
