//! Toast notifications. Each toast slides in from the right, stays for a
//! while, slides out and removes itself. Toasts do not stack or queue.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::Result;
use crate::style::{CssText, translate_x_percent};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    #[default]
    Info,
}

impl NoticeKind {
    /// Anything other than `"success"` is informational.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("success") => NoticeKind::Success,
            _ => NoticeKind::Info,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            NoticeKind::Success => "success",
            NoticeKind::Info => "info",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            NoticeKind::Success => "#28a745",
            NoticeKind::Info => "#007bff",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.name())
    }
}

pub fn toast_css(kind: NoticeKind) -> CssText {
    CssText::new()
        .set("position", "fixed")
        .set("top", "20px")
        .set("right", "20px")
        .set("background", kind.color())
        .set("color", "white")
        .set("padding", "1rem 1.5rem")
        .set("border-radius", "8px")
        .set("box-shadow", "0 4px 6px rgba(0, 0, 0, 0.1)")
        .set("z-index", "10000")
        .set("transform", translate_x_percent(100))
        .set("transition", "transform 0.3s ease")
        .set("max-width", "300px")
        .set("font-weight", "500")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToastTiming {
    pub slide_in_ms: u32,
    pub visible_ms: u32,
    pub exit_ms: u32,
}

impl ToastTiming {
    pub fn from_config(cfg: &SiteConfig) -> Self {
        Self {
            slide_in_ms: cfg.toast_slide_in_ms,
            visible_ms: cfg.toast_visible_ms,
            exit_ms: cfg.toast_exit_ms,
        }
    }

    /// Milliseconds from creation until the toast leaves the document.
    pub fn lifetime_ms(self) -> u32 {
        self.visible_ms + self.exit_ms
    }
}

pub fn show(doc: &Document, message: &str, kind: NoticeKind, timing: ToastTiming) -> Result<HtmlElement> {
    let toast: HtmlElement = doc.create_element("div")?.dyn_into()?;
    toast.set_class_name(&kind.class_name());
    toast.set_text_content(Some(message));
    toast.style().set_css_text(&toast_css(kind).render());
    if let Some(body) = doc.body() {
        body.append_child(&toast)?;
    }

    let entering = toast.clone();
    dom::defer(timing.slide_in_ms, move || {
        dom::set_style(&entering, "transform", &translate_x_percent(0));
    });
    let leaving = toast.clone();
    dom::defer(timing.visible_ms, move || {
        dom::set_style(&leaving, "transform", &translate_x_percent(100));
        dom::remove_after(leaving.into(), timing.exit_ms);
    });
    Ok(toast)
}

/// Show a toast from page script. `kind` is `"success"` or defaults to info.
#[wasm_bindgen]
pub fn show_notification(message: &str, kind: Option<String>) -> Result<(), JsValue> {
    let doc = dom::document()?;
    let timing = crate::with_config(ToastTiming::from_config);
    show(&doc, message, NoticeKind::from_name(kind.as_deref()), timing)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_defaults_to_info() {
        assert_eq!(NoticeKind::from_name(Some("success")), NoticeKind::Success);
        assert_eq!(NoticeKind::from_name(Some("info")), NoticeKind::Info);
        assert_eq!(NoticeKind::from_name(Some("warning")), NoticeKind::Info);
        assert_eq!(NoticeKind::from_name(None), NoticeKind::Info);
    }

    #[test]
    fn colors_and_classes() {
        assert_eq!(toast_css(NoticeKind::Success).get("background"), Some("#28a745"));
        assert_eq!(toast_css(NoticeKind::Info).get("background"), Some("#007bff"));
        assert_eq!(NoticeKind::Success.class_name(), "notification notification-success");
        assert_eq!(toast_css(NoticeKind::Info).get("transform"), Some("translateX(100%)"));
    }

    #[test]
    fn default_lifetime_is_five_seconds_plus_exit() {
        let timing = ToastTiming::from_config(&SiteConfig::default());
        assert_eq!(timing.lifetime_ms(), 5_300);
        assert!(timing.slide_in_ms < timing.visible_ms);
    }
}
