// Integration tests (native) for the `wedding-site` crate.
// These tests avoid wasm-specific functionality and exercise the pure decision
// logic each installer applies, so they run under `cargo test` on the host.

use wedding_site::config::SiteConfig;
use wedding_site::effects::Ripple;
use wedding_site::lightbox::{alt_text, background_url};
use wedding_site::notify::{NoticeKind, ToastTiming, toast_css};
use wedding_site::rsvp::{SubmitButton, guests_visibility};
use wedding_site::scroll::resolve_click;
use wedding_site::style::{Reveal, Visibility};

#[test]
fn anchor_click_lands_below_header() {
    let header = 72.0;
    let top = resolve_click("#section2", |id| (id == "section2").then_some(1_250.0), Some(header), 20.0);
    assert_eq!(top, Some(1_250.0 - header - 20.0));
    assert_eq!(resolve_click("#section3", |_| None, Some(header), 20.0), None);
}

#[test]
fn guest_field_follows_every_change() {
    for value in ["yes", "no", "yes", "no", "no", "maybe"] {
        let shown = guests_visibility(value).is_shown();
        assert_eq!(shown, value != "no", "after {value}");
        let (prop, css) = Reveal::Display.declaration(Visibility::from_bool(shown));
        assert_eq!(prop, "display");
        assert_eq!(css, if value == "no" { "none" } else { "block" });
    }
}

#[test]
fn thumbnail_url_extraction() {
    assert_eq!(background_url("url(\"photo1.jpg\")").as_deref(), Some("photo1.jpg"));
    assert_eq!(background_url("none"), None);
    assert_eq!(alt_text(2), "Gallery image 3");
}

#[test]
fn success_toast_lives_between_five_seconds_and_exit() {
    let timing = ToastTiming::from_config(&SiteConfig::default());
    assert_eq!(timing.visible_ms, 5_000);
    assert_eq!(timing.lifetime_ms(), 5_300);
    assert_eq!(toast_css(NoticeKind::Success).get("background"), Some("#28a745"));
}

#[test]
fn submit_button_cycle_uses_configured_label() {
    let cfg = SiteConfig::default();
    let mut button = SubmitButton::new("Xác nhận");
    assert_eq!(button.begin("Xác nhận", &cfg.sending_label), Some("Đang gửi..."));
    assert_eq!(button.restore(), "Xác nhận");
    // a fresh submission after the restore is accepted again
    assert!(button.begin("Xác nhận", &cfg.sending_label).is_some());
}

#[test]
fn ripple_centre_matches_click() {
    let rect = (10.0, 10.0, 200.0, 50.0);
    let ripple = Ripple::at(rect, 60.0, 35.0);
    let (cx, cy) = ripple.center();
    assert_eq!((cx + rect.0, cy + rect.1), (60.0, 35.0));
}
