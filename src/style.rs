//! Inline style text and the show/hide model shared by the components.

use std::fmt::Write as _;

/// Two-state visibility used instead of patching class-list behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn from_bool(visible: bool) -> Self {
        if visible { Visibility::Shown } else { Visibility::Hidden }
    }

    pub fn is_shown(self) -> bool {
        matches!(self, Visibility::Shown)
    }
}

/// How a [`Visibility`] is expressed in CSS.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// `display: block` / `display: none`.
    Display,
    /// `opacity: 1` / `opacity: 0`, paired with the `visible` marker class so a
    /// CSS transition animates the change.
    Fade,
}

impl Reveal {
    /// The (property, value) pair applied for `visibility`.
    pub fn declaration(self, visibility: Visibility) -> (&'static str, &'static str) {
        match (self, visibility) {
            (Reveal::Display, Visibility::Shown) => ("display", "block"),
            (Reveal::Display, Visibility::Hidden) => ("display", "none"),
            (Reveal::Fade, Visibility::Shown) => ("opacity", "1"),
            (Reveal::Fade, Visibility::Hidden) => ("opacity", "0"),
        }
    }

    pub fn toggles_marker_class(self) -> bool {
        matches!(self, Reveal::Fade)
    }
}

/// Ordered list of CSS declarations rendered as an inline `style` value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CssText {
    decls: Vec<(&'static str, String)>,
}

impl CssText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, property: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.decls.iter_mut().find(|(p, _)| *p == property) {
            Some(existing) => existing.1 = value,
            None => self.decls.push((property, value)),
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        for (property, value) in &self.decls {
            if !out.is_empty() {
                out.push(' ');
            }
            let _ = write!(out, "{property}: {value};");
        }
        out
    }
}

pub fn px(value: f64) -> String {
    format!("{value}px")
}

pub fn translate_x_percent(percent: i32) -> String {
    if percent == 0 {
        "translateX(0)".to_string()
    } else {
        format!("translateX({percent}%)")
    }
}

pub fn translate_y_px(offset: f64) -> String {
    if offset == 0.0 {
        "translateY(0)".to_string()
    } else {
        format!("translateY({offset}px)")
    }
}

pub fn scale(factor: f64) -> String {
    format!("scale({factor})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_maps_to_opacity() {
        assert_eq!(Reveal::Fade.declaration(Visibility::Shown), ("opacity", "1"));
        assert_eq!(Reveal::Fade.declaration(Visibility::Hidden), ("opacity", "0"));
        assert!(Reveal::Fade.toggles_marker_class());
        assert!(!Reveal::Display.toggles_marker_class());
    }

    #[test]
    fn css_text_replaces_repeated_properties_in_place() {
        let css = CssText::new()
            .set("position", "fixed")
            .set("opacity", "0")
            .set("position", "absolute");
        assert_eq!(css.render(), "position: absolute; opacity: 0;");
        assert_eq!(css.get("opacity"), Some("0"));
        assert_eq!(css.get("color"), None);
    }

    #[test]
    fn transforms() {
        assert_eq!(translate_x_percent(100), "translateX(100%)");
        assert_eq!(translate_x_percent(0), "translateX(0)");
        assert_eq!(translate_y_px(-5.0), "translateY(-5px)");
        assert_eq!(translate_y_px(0.0), "translateY(0)");
        assert_eq!(translate_y_px(12.5), "translateY(12.5px)");
        assert_eq!(scale(1.1), "scale(1.1)");
        assert_eq!(px(48.0), "48px");
    }
}
