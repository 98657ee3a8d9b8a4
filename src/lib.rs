//! Wedding site core crate.
//!
//! Progressive enhancements for the static announcement page. The page calls
//! `start_site()` (or `start_site_with_config(json)`) after the wasm module
//! loads; every component is wired once the document has been parsed. Components only
//! share the DOM, and a component whose elements are missing is skipped.

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod config;
pub mod countdown;
mod dom;
pub mod effects;
pub mod error;
pub mod lightbox;
pub mod notify;
pub mod observer;
pub mod rsvp;
pub mod scroll;
pub mod style;

pub use config::SiteConfig;
pub use error::SiteError;
pub use notify::show_notification;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

thread_local! {
    static CONFIG: RefCell<SiteConfig> = RefCell::new(SiteConfig::default());
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

pub(crate) fn with_config<R>(f: impl FnOnce(&SiteConfig) -> R) -> R {
    CONFIG.with(|cfg| f(&cfg.borrow()))
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    // Fails only when the host page already installed a logger.
    let _ = console_log::init_with_level(SiteConfig::default().log_level);
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_site() -> Result<(), JsValue> {
    launch(dom::document(), SiteConfig::default())?;
    Ok(())
}

#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_site_with_config(json: &str) -> Result<(), JsValue> {
    launch(dom::document(), SiteConfig::from_json(json)?)?;
    Ok(())
}

fn launch(doc: error::Result<Document>, cfg: SiteConfig) -> error::Result<()> {
    let doc = doc?;
    if STARTED.with(|s| s.replace(true)) {
        log::warn!("start_site called more than once, ignoring");
        return Ok(());
    }
    log::set_max_level(cfg.log_level.to_level_filter());
    CONFIG.with(|slot| *slot.borrow_mut() = cfg);

    let ready_doc = doc.clone();
    dom::on_ready(&doc, move || with_config(|cfg| install_all(&ready_doc, cfg)))
}

fn report<T: std::fmt::Debug>(component: &str, outcome: error::Result<T>) {
    match outcome {
        Ok(wired) => log::debug!("{component}: {wired:?}"),
        Err(err) => log::warn!("{component} not installed: {err}"),
    }
}

/// Wire every component. A failure in one does not stop the others.
pub fn install_all(doc: &Document, cfg: &SiteConfig) {
    report("ripple keyframes", effects::inject_keyframes(doc));
    report("smooth scroll links", scroll::install(doc, cfg.scroll_gutter_px));
    report("fade-in elements", observer::install_fade_in(doc));
    report("rsvp guest toggle", rsvp::install_guest_toggle(doc));
    report(
        "rsvp submit guard",
        rsvp::install_submit_guard(doc, cfg.sending_label.clone(), cfg.submit_restore_ms),
    );
    report(
        "gallery items",
        lightbox::install(
            doc,
            lightbox::LightboxTiming {
                fade_in_ms: cfg.lightbox_fade_in_ms,
                fade_out_ms: cfg.lightbox_fade_out_ms,
            },
        ),
    );
    report(
        "countdown",
        countdown::install(doc, cfg.wedding_date, cfg.countdown_tick_ms, cfg.countdown_pulse_ms),
    );
    report("lazy backgrounds", observer::install_lazy_backgrounds(doc));
    report("hover cards", effects::install_hover(doc));
    report("ripple buttons", effects::install_ripple(doc, cfg.ripple_ms));
    if cfg.parallax {
        report("parallax hero", effects::install_parallax(doc, cfg.parallax_speed));
    }
    log::info!("wedding site enhancements installed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_document_lookup_leaves_start_available() {
        let outcome = launch(Err(SiteError::NoDocument), SiteConfig::default());
        assert!(matches!(outcome, Err(SiteError::NoDocument)));
        assert!(!STARTED.with(|s| s.get()), "a failed start must not block a retry");
    }
}
