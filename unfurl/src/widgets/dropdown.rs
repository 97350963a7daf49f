//! Dropdown: one trigger, one collapsible panel.

use log::info;
use pagedom::Page;

use crate::error::WidgetError;
use crate::widgets::disclosure::Disclosure;

/// Marks the dropdown's trigger inside a host.
pub const TRIGGER: &str = "data-dropdown-trigger";
/// Marks the dropdown's panel inside a host.
pub const CONTENT: &str = "data-dropdown-content";

/// A mounted dropdown.
#[derive(Debug, Clone)]
pub struct Dropdown {
    host: Option<String>,
    disclosure: Disclosure,
}

impl Dropdown {
    /// Mount on a host containing a trigger and a content element.
    pub fn mount(page: &mut Page, host: &str) -> Result<Self, WidgetError> {
        if !page.exists(host) {
            return Err(WidgetError::missing("dropdown", host));
        }
        let trigger = page
            .query(host, |el| el.has_attribute(TRIGGER))
            .ok_or_else(|| WidgetError::missing("trigger", host))?;
        let content = page
            .query(host, |el| el.has_attribute(CONTENT))
            .ok_or_else(|| WidgetError::missing("content", host))?;

        let mut dropdown = Self::bind(page, trigger, content)?;
        dropdown.host = Some(host.to_string());
        Ok(dropdown)
    }

    /// Bind directly to a trigger and content element.
    pub fn bind(page: &mut Page, trigger: String, content: String) -> Result<Self, WidgetError> {
        let disclosure = Disclosure::bind(page, trigger, content)?;
        disclosure.wire_trigger(page);
        info!("dropdown mounted on {}", disclosure.trigger());
        Ok(Self {
            host: None,
            disclosure,
        })
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn disclosure(&self) -> &Disclosure {
        &self.disclosure
    }

    pub fn is_open(&self) -> bool {
        self.disclosure.is_open()
    }

    pub fn unmount(&self, page: &mut Page) {
        self.disclosure.unbind(page);
    }
}
