//! Accordion: a container whose children each expand and collapse.

use log::{debug, info};
use pagedom::Page;
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;
use crate::widgets::disclosure::Disclosure;
use crate::widgets::group::DisclosureGroup;

/// Marks the clickable part of an accordion item.
pub const TOGGLER: &str = "data-accordion-toggler";
/// Marks the collapsible part of an accordion item.
pub const CONTENT: &str = "data-accordion-content";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccordionOptions {
    /// Opening one item closes the others.
    pub exclusive: bool,
}

impl AccordionOptions {
    pub fn exclusive(mut self, exclusive: bool) -> Self {
        self.exclusive = exclusive;
        self
    }

    /// Read options from the host's attributes.
    pub fn from_element(page: &Page, host: &str) -> Self {
        Self {
            exclusive: page.has_attribute(host, "data-is-exclusive"),
        }
    }
}

/// A mounted accordion.
#[derive(Debug, Clone)]
pub struct Accordion {
    host: String,
    options: AccordionOptions,
    group: DisclosureGroup,
}

impl Accordion {
    /// Mount with options read from the host.
    pub fn mount(page: &mut Page, host: &str) -> Result<Self, WidgetError> {
        let options = AccordionOptions::from_element(page, host);
        Self::mount_with(page, host, options)
    }

    /// Every direct child of `host` is an item. Each item must contain a
    /// toggler and a content element; nothing is bound if any item lacks one.
    pub fn mount_with(
        page: &mut Page,
        host: &str,
        options: AccordionOptions,
    ) -> Result<Self, WidgetError> {
        let items: Vec<String> = page
            .element(host)
            .ok_or_else(|| WidgetError::missing("accordion", host))?
            .child_elements()
            .iter()
            .map(|item| item.id.clone())
            .collect();

        let mut parts = Vec::with_capacity(items.len());
        for item in &items {
            let toggler = page
                .query(item, |el| el.has_attribute(TOGGLER))
                .ok_or_else(|| WidgetError::missing("toggler", item.as_str()))?;
            let content = page
                .query(item, |el| el.has_attribute(CONTENT))
                .ok_or_else(|| WidgetError::missing("content", item.as_str()))?;
            parts.push((item, toggler, content));
        }

        let mut members = Vec::with_capacity(parts.len());
        for (item, toggler, content) in parts {
            members.push(Disclosure::builder(toggler, content).marker(item).bind(page)?);
        }

        let group = DisclosureGroup::bind(members, options.exclusive);
        group.wire_triggers(page);

        info!(
            "accordion {} mounted: {} items, exclusive={}",
            host,
            group.len(),
            options.exclusive
        );

        Ok(Self {
            host: host.to_string(),
            options,
            group,
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn options(&self) -> AccordionOptions {
        self.options
    }

    pub fn items(&self) -> &[Disclosure] {
        self.group.members()
    }

    pub fn item(&self, index: usize) -> Option<&Disclosure> {
        self.group.member(index)
    }

    pub fn group(&self) -> &DisclosureGroup {
        &self.group
    }

    pub fn open_items(&self) -> Vec<usize> {
        self.group.open_members()
    }

    pub fn unmount(&self, page: &mut Page) {
        debug!("accordion {} unmounted", self.host);
        self.group.unbind(page);
    }
}
