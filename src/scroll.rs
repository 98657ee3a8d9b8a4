//! Smooth scrolling for in-page anchor links, offset for the fixed header.

use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::config::selectors;
use crate::dom;
use crate::error::Result;

/// Element id named by an in-page `href`. `"#"` alone names nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts the target just below the fixed header.
pub fn scroll_destination(target_offset_top: f64, header_height: f64, gutter: f64) -> f64 {
    target_offset_top - header_height - gutter
}

/// Where a click on `href` should scroll to, given lookups into the current
/// document. `None` means the click does nothing.
pub fn resolve_click(
    href: &str,
    target_offset_top: impl FnOnce(&str) -> Option<f64>,
    header_height: Option<f64>,
    gutter: f64,
) -> Option<f64> {
    let top = target_offset_top(fragment_id(href)?)?;
    Some(scroll_destination(top, header_height?, gutter))
}

pub fn install(doc: &Document, gutter: f64) -> Result<usize> {
    let links = dom::query_all(doc, selectors::ANCHOR_LINKS)?;
    for link in &links {
        let link_ref = link.clone();
        let doc = doc.clone();
        dom::listen(link, "click", move |evt: MouseEvent| {
            evt.prevent_default();
            let href = link_ref.get_attribute("href").unwrap_or_default();
            let header = dom::query_html(&doc, selectors::HEADER).map(|h| h.offset_height() as f64);
            let destination = resolve_click(
                &href,
                |id| dom::by_id_html(&doc, id).map(|t: HtmlElement| t.offset_top() as f64),
                header,
                gutter,
            );
            if let Some(top) = destination {
                smooth_scroll_to(top);
            }
        })?;
    }
    Ok(links.len())
}

fn smooth_scroll_to(top: f64) {
    let Ok(win) = dom::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}
