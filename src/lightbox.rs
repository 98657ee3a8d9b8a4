//! Full-screen photo viewer for gallery thumbnails.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlImageElement, MouseEvent};

use crate::config::{classes, selectors};
use crate::dom;
use crate::error::Result;
use crate::style::{CssText, Reveal};

/// Image URL inside a computed `background-image` value such as
/// `url("photo1.jpg")`. `none`, empty or malformed values yield `None`.
pub fn background_url(css_value: &str) -> Option<String> {
    let rest = css_value.trim().strip_prefix("url(")?;
    // Only the first layer of a multi-layer value.
    let inner = &rest[..rest.find(')')?];
    let url: String = inner.chars().filter(|c| *c != '"' && *c != '\'').collect();
    let url = url.trim();
    if url.is_empty() || url == "none" {
        None
    } else {
        Some(url.to_string())
    }
}

pub fn overlay_css() -> CssText {
    CssText::new()
        .set("position", "fixed")
        .set("top", "0")
        .set("left", "0")
        .set("width", "100%")
        .set("height", "100%")
        .set("background", "rgba(0, 0, 0, 0.9)")
        .set("display", "flex")
        .set("align-items", "center")
        .set("justify-content", "center")
        .set("z-index", "10000")
        .set("opacity", "0")
        .set("transition", "opacity 0.3s ease")
        .set("cursor", "pointer")
}

pub fn image_css() -> CssText {
    CssText::new()
        .set("max-width", "90vw")
        .set("max-height", "90vh")
        .set("object-fit", "contain")
}

/// Alt text for the thumbnail at zero-based `index`.
pub fn alt_text(index: usize) -> String {
    format!("Gallery image {}", index + 1)
}

#[derive(Clone, Copy, Debug)]
pub struct LightboxTiming {
    pub fade_in_ms: u32,
    pub fade_out_ms: u32,
}

pub fn install(doc: &Document, timing: LightboxTiming) -> Result<usize> {
    let items = dom::query_all_html(doc, selectors::GALLERY_ITEM)?;
    for (index, item) in items.iter().enumerate() {
        let thumb = item.clone();
        let doc = doc.clone();
        dom::listen(item, "click", move |_: MouseEvent| {
            if let Err(err) = open(&doc, &thumb, index, timing) {
                log::warn!("lightbox: {err}");
            }
        })?;
    }
    Ok(items.len())
}

/// Open an overlay for `thumb`. Returns `Ok(None)` when the thumbnail has no
/// usable background image.
pub fn open(
    doc: &Document,
    thumb: &HtmlElement,
    index: usize,
    timing: LightboxTiming,
) -> Result<Option<HtmlElement>> {
    let computed = dom::window()?
        .get_computed_style(thumb)?
        .and_then(|style| style.get_property_value("background-image").ok())
        .unwrap_or_default();
    let Some(url) = background_url(&computed) else {
        return Ok(None);
    };
    let Some(body) = doc.body() else {
        return Ok(None);
    };

    let overlay: HtmlElement = doc.create_element("div")?.dyn_into()?;
    overlay.set_class_name(classes::LIGHTBOX);
    overlay.style().set_css_text(&overlay_css().render());

    let img: HtmlImageElement = doc.create_element("img")?.dyn_into()?;
    img.set_src(&url);
    img.set_alt(&alt_text(index));
    img.style().set_css_text(&image_css().render());
    overlay.append_child(&img)?;

    let dismiss_target = overlay.clone();
    let fade_out_ms = timing.fade_out_ms;
    dom::listen(&overlay, "click", move |_: MouseEvent| {
        dom::set_visible(&dismiss_target, Reveal::Fade, false);
        dom::remove_after(dismiss_target.clone().into(), fade_out_ms);
    })?;

    body.append_child(&overlay)?;
    let shown = overlay.clone();
    dom::defer(timing.fade_in_ms, move || {
        dom::set_visible(&shown, Reveal::Fade, true);
    });
    Ok(Some(overlay))
}
