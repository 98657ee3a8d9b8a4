//! Presentational touches: card hover lift, button ripple, hero parallax.

use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use crate::config::selectors;
use crate::dom;
use crate::error::Result;
use crate::style::{CssText, px, translate_y_px};

pub const CARD_LIFT_PX: f64 = -5.0;

pub const RIPPLE_KEYFRAMES: &str = "@keyframes ripple { to { transform: scale(4); opacity: 0; } }";
const RIPPLE_STYLE_ID: &str = "ripple-keyframes";

/// Button-relative box of a ripple centred on the click point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl Ripple {
    /// `rect` is the button's client rect as (left, top, width, height).
    pub fn at(rect: (f64, f64, f64, f64), client_x: f64, client_y: f64) -> Self {
        let (left, top, width, height) = rect;
        let size = width.max(height);
        Self {
            size,
            left: client_x - left - size / 2.0,
            top: client_y - top - size / 2.0,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.size / 2.0, self.top + self.size / 2.0)
    }

    pub fn css(&self) -> CssText {
        CssText::new()
            .set("position", "absolute")
            .set("width", px(self.size))
            .set("height", px(self.size))
            .set("left", px(self.left))
            .set("top", px(self.top))
            .set("background", "rgba(255, 255, 255, 0.3)")
            .set("border-radius", "50%")
            .set("transform", "scale(0)")
            .set("animation", "ripple 0.6s linear")
            .set("pointer-events", "none")
    }
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y * speed
}

/// Add the ripple `@keyframes` rule to `<head>` unless already present.
pub fn inject_keyframes(doc: &Document) -> Result<()> {
    if doc.get_element_by_id(RIPPLE_STYLE_ID).is_some() {
        return Ok(());
    }
    let Some(head) = doc.head() else {
        return Ok(());
    };
    let style = doc.create_element("style")?;
    style.set_id(RIPPLE_STYLE_ID);
    style.set_text_content(Some(RIPPLE_KEYFRAMES));
    head.append_child(&style)?;
    Ok(())
}

pub fn install_hover(doc: &Document) -> Result<usize> {
    let cards = dom::query_all_html(doc, selectors::CARD)?;
    for card in &cards {
        let lifted = card.clone();
        dom::listen(card, "mouseenter", move |_: Event| {
            dom::set_style(&lifted, "transform", &translate_y_px(CARD_LIFT_PX));
        })?;
        let rested = card.clone();
        dom::listen(card, "mouseleave", move |_: Event| {
            dom::set_style(&rested, "transform", &translate_y_px(0.0));
        })?;
    }
    Ok(cards.len())
}

pub fn install_ripple(doc: &Document, duration_ms: u32) -> Result<usize> {
    let buttons = dom::query_all_html(doc, selectors::BUTTON)?;
    for button in &buttons {
        let host = button.clone();
        let doc = doc.clone();
        dom::listen(button, "click", move |evt: MouseEvent| {
            if let Err(err) = spawn_ripple(&doc, &host, &evt, duration_ms) {
                log::warn!("ripple: {err}");
            }
        })?;
    }
    Ok(buttons.len())
}

fn spawn_ripple(doc: &Document, host: &HtmlElement, evt: &MouseEvent, duration_ms: u32) -> Result<()> {
    let rect = host.get_bounding_client_rect();
    let ripple = Ripple::at(
        (rect.left(), rect.top(), rect.width(), rect.height()),
        evt.client_x() as f64,
        evt.client_y() as f64,
    );
    let span: HtmlElement = doc.create_element("span")?.dyn_into()?;
    span.style().set_css_text(&ripple.css().render());
    dom::set_style(host, "position", "relative");
    dom::set_style(host, "overflow", "hidden");
    host.append_child(&span)?;
    dom::remove_after(span.into(), duration_ms);
    Ok(())
}

pub fn install_parallax(doc: &Document, speed: f64) -> Result<bool> {
    let Some(hero) = dom::query_html(doc, selectors::HERO) else {
        return Ok(false);
    };
    let win = dom::window()?;
    let scroller = win.clone();
    dom::listen(&win, "scroll", move |_: Event| {
        let scrolled = scroller.scroll_y().unwrap_or(0.0);
        dom::set_style(&hero, "transform", &translate_y_px(parallax_offset(scrolled, speed)));
    })?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_is_centred_on_click() {
        let r = Ripple::at((100.0, 200.0, 120.0, 40.0), 130.0, 215.0);
        assert_eq!(r.size, 120.0);
        assert_eq!(r.left, -30.0);
        assert_eq!(r.top, -45.0);
        assert_eq!(r.center(), (30.0, 15.0));
    }

    #[test]
    fn ripple_uses_larger_side() {
        let r = Ripple::at((0.0, 0.0, 30.0, 90.0), 15.0, 45.0);
        assert_eq!(r.size, 90.0);
        assert_eq!(r.css().get("width"), Some("90px"));
        assert_eq!(r.css().get("left"), Some("-30px"));
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_offset(400.0, 0.5), 200.0);
        assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    }
}
