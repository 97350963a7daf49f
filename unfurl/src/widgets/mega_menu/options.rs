//! Mega menu configuration.

use std::time::Duration;

use pagedom::{parse_width, Easing, MediaQuery, Page, TransitionConfig};
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MegaMenuOptions {
    /// Viewports at least this wide use desktop behaviour.
    pub desktop_min_width: u16,
    /// Top-level items open on mouse enter and close on mouse leave.
    pub desktop_open_on_hover: bool,
    /// Top-level items toggle on click; clicking outside closes them.
    pub desktop_open_on_click: bool,
    /// On mobile, clicking outside the menu closes it.
    pub mobile_close_on_click_outside: bool,
    /// Submenu expand/collapse duration in milliseconds.
    pub submenu_duration_ms: u64,
}

impl Default for MegaMenuOptions {
    fn default() -> Self {
        Self {
            desktop_min_width: 0,
            desktop_open_on_hover: false,
            desktop_open_on_click: false,
            mobile_close_on_click_outside: false,
            submenu_duration_ms: 300,
        }
    }
}

impl MegaMenuOptions {
    pub fn desktop_min_width(mut self, width: u16) -> Self {
        self.desktop_min_width = width;
        self
    }

    pub fn open_on_hover(mut self, enabled: bool) -> Self {
        self.desktop_open_on_hover = enabled;
        self
    }

    pub fn open_on_click(mut self, enabled: bool) -> Self {
        self.desktop_open_on_click = enabled;
        self
    }

    pub fn close_on_click_outside(mut self, enabled: bool) -> Self {
        self.mobile_close_on_click_outside = enabled;
        self
    }

    pub fn submenu_duration(mut self, duration: Duration) -> Self {
        self.submenu_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Read options from the host's attributes.
    ///
    /// `data-desktop-min-width` takes a pixel width (`"1024px"`) and
    /// `data-submenu-duration` a number of milliseconds.
    pub fn from_element(page: &Page, host: &str) -> Result<Self, WidgetError> {
        let defaults = Self::default();

        let desktop_min_width = match page.get_attribute(host, "data-desktop-min-width") {
            Some(value) => parse_width(value).ok_or_else(|| WidgetError::InvalidOption {
                option: "desktopMinWidth",
                value: value.to_string(),
            })?,
            None => defaults.desktop_min_width,
        };

        let submenu_duration_ms = match page.get_attribute(host, "data-submenu-duration") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| WidgetError::InvalidOption {
                    option: "submenuDuration",
                    value: value.to_string(),
                })?,
            None => defaults.submenu_duration_ms,
        };

        Ok(Self {
            desktop_min_width,
            desktop_open_on_hover: page.has_attribute(host, "data-desktop-open-on-hover"),
            desktop_open_on_click: page.has_attribute(host, "data-desktop-open-on-click"),
            mobile_close_on_click_outside: page
                .has_attribute(host, "data-mobile-close-on-click-outside"),
            submenu_duration_ms,
        })
    }

    pub fn query(&self) -> MediaQuery {
        MediaQuery::min_width(self.desktop_min_width)
    }

    pub fn submenu_transition(&self) -> TransitionConfig {
        TransitionConfig::new(
            Duration::from_millis(self.submenu_duration_ms),
            Easing::EaseInOut,
        )
    }
}

#[cfg(test)]
mod tests {
    use pagedom::Element;

    use super::*;

    fn host(attrs: &[(&str, &str)]) -> Page {
        let mut el = Element::new("mega-menu").id("menu");
        for (name, value) in attrs {
            el = el.attr(*name, *value);
        }
        Page::new(el, 1024)
    }

    #[test]
    fn test_defaults_without_attributes() {
        let page = host(&[]);
        let options = MegaMenuOptions::from_element(&page, "menu").unwrap();
        assert_eq!(options, MegaMenuOptions::default());
    }

    #[test]
    fn test_reads_flags_and_width() {
        let page = host(&[
            ("data-desktop-min-width", "768px"),
            ("data-desktop-open-on-click", ""),
            ("data-mobile-close-on-click-outside", ""),
        ]);
        let options = MegaMenuOptions::from_element(&page, "menu").unwrap();
        assert_eq!(options.desktop_min_width, 768);
        assert!(options.desktop_open_on_click);
        assert!(!options.desktop_open_on_hover);
        assert!(options.mobile_close_on_click_outside);
    }

    #[test]
    fn test_invalid_width() {
        let page = host(&[("data-desktop-min-width", "wide")]);
        assert_eq!(
            MegaMenuOptions::from_element(&page, "menu"),
            Err(WidgetError::InvalidOption {
                option: "desktopMinWidth",
                value: "wide".into(),
            })
        );
    }

    #[test]
    fn test_serde_camel_case() {
        let options: MegaMenuOptions =
            serde_json::from_str(r#"{"desktopMinWidth": 900, "desktopOpenOnHover": true}"#)
                .unwrap();
        assert_eq!(options.desktop_min_width, 900);
        assert!(options.desktop_open_on_hover);
        assert_eq!(options.submenu_duration_ms, 300);
    }

    #[test]
    fn test_submenu_duration_saturates() {
        let options = MegaMenuOptions::default().submenu_duration(Duration::MAX);
        assert_eq!(options.submenu_duration_ms, u64::MAX);

        let options = MegaMenuOptions::default().submenu_duration(Duration::from_millis(120));
        assert_eq!(options.submenu_duration_ms, 120);
    }
}
