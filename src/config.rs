//! Page configuration.
//!
//! Defaults reproduce the published page. Every field can be overridden from
//! JSON when the `serde_json` feature is enabled; missing fields keep their
//! default.

use chrono::{NaiveDate, NaiveDateTime};
#[cfg(feature = "serde")]
use serde::Deserialize;

/// Fixed selectors the installers look up. The page markup is not ours to
/// change, so these are constants rather than configuration.
pub mod selectors {
    pub const HEADER: &str = ".site-header";
    pub const ANCHOR_LINKS: &str = "a[href^=\"#\"]";
    pub const FADE_IN: &str = ".fade-in";
    pub const LAZY_BG: &str = ".lazy-bg";
    pub const RSVP_FORM: &str = ".rsvp-form form";
    pub const SUBMIT_BUTTON: &str = "button[type=\"submit\"]";
    pub const ATTENDANCE_ID: &str = "attendance";
    pub const GUESTS_ID: &str = "guests";
    pub const FORM_GROUP: &str = ".form-group";
    pub const GALLERY_ITEM: &str = ".gallery-item";
    pub const COUNTDOWN_ID: &str = "wedding-countdown";
    pub const COUNTDOWN_MESSAGE_ID: &str = "wedding-message";
    pub const COUNTDOWN_NUMBER: &str = ".countdown-number";
    pub const DAYS_ID: &str = "days";
    pub const HOURS_ID: &str = "hours";
    pub const MINUTES_ID: &str = "minutes";
    pub const SECONDS_ID: &str = "seconds";
    pub const CARD: &str = ".card";
    pub const BUTTON: &str = ".btn";
    pub const HERO: &str = ".section-hero";
}

/// Marker classes toggled by the installers.
pub mod classes {
    pub const VISIBLE: &str = "visible";
    pub const LAZY_BG: &str = "lazy-bg";
    pub const LIGHTBOX: &str = "lightbox-overlay";
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SiteConfig {
    /// Ceremony start, interpreted in the visitor's local time zone.
    pub wedding_date: NaiveDateTime,
    /// Extra space left above a scroll target, below the fixed header.
    pub scroll_gutter_px: f64,
    pub sending_label: String,
    pub submit_restore_ms: u32,
    pub lightbox_fade_in_ms: u32,
    pub lightbox_fade_out_ms: u32,
    pub toast_slide_in_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_exit_ms: u32,
    pub countdown_tick_ms: u32,
    pub countdown_pulse_ms: u32,
    pub ripple_ms: u32,
    pub parallax: bool,
    pub parallax_speed: f64,
    pub log_level: log::Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            wedding_date: default_wedding_date(),
            scroll_gutter_px: 20.0,
            sending_label: "Đang gửi...".to_string(),
            submit_restore_ms: 5_000,
            lightbox_fade_in_ms: 10,
            lightbox_fade_out_ms: 300,
            toast_slide_in_ms: 10,
            toast_visible_ms: 5_000,
            toast_exit_ms: 300,
            countdown_tick_ms: 1_000,
            countdown_pulse_ms: 200,
            ripple_ms: 600,
            parallax: false,
            parallax_speed: 0.5,
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
        }
    }
}

// 1 November 2025, 16:00.
fn default_wedding_date() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 11, 1)
        .and_then(|d| d.and_hms_opt(16, 0, 0))
        .unwrap_or_default()
}

#[cfg(feature = "serde_json")]
impl SiteConfig {
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        serde_json::from_str(json).map_err(|e| crate::error::SiteError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_date_is_the_ceremony() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.wedding_date.to_string(), "2025-11-01 16:00:00");
        assert_eq!(cfg.submit_restore_ms, 5_000);
        assert!(!cfg.parallax);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_overrides_keep_other_defaults() {
        let cfg = SiteConfig::from_json(
            r#"{"wedding_date":"2026-06-20T10:30:00","sending_label":"Sending...","parallax":true}"#,
        )
        .unwrap();
        assert_eq!(cfg.wedding_date.to_string(), "2026-06-20 10:30:00");
        assert_eq!(cfg.sending_label, "Sending...");
        assert!(cfg.parallax);
        assert_eq!(cfg.toast_visible_ms, 5_000);
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn malformed_json_is_a_config_error() {
        let err = SiteConfig::from_json("{\"wedding_date\": 3}").unwrap_err();
        assert!(matches!(err, crate::error::SiteError::Config(_)));
    }
}
