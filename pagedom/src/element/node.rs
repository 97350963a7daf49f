use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::Size;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: String,

    // Content
    pub content: Content,

    // Markup
    /// Attributes in markup order-independent form. Boolean attributes hold "".
    pub attributes: BTreeMap<String, String>,
    /// Custom style properties (`--item-index`, `--animation-play-state`, ...).
    pub properties: BTreeMap<String, String>,

    // Box
    /// Inline height. `Size::Fixed` is an override (set while animating).
    pub height: Size,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            content: Content::None,
            attributes: BTreeMap::new(),
            properties: BTreeMap::new(),
            height: Size::Auto,
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new("div")
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: "span".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Markup
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Set a boolean (present/absent) attribute.
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    pub fn property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    // Box
    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        for child in new_children {
            self.push_child(child);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Attribute access
    // -------------------------------------------------------------------------

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Returns true if the value changed.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.attributes.get(name) == Some(&value) {
            return false;
        }
        self.attributes.insert(name.to_string(), value);
        true
    }

    /// Returns true if the attribute was present.
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        self.attributes.remove(name).is_some()
    }

    /// Add or remove a boolean attribute.
    pub fn toggle_attribute(&mut self, name: &str, present: bool) {
        if present {
            self.set_attribute(name, "");
        } else {
            self.remove_attribute(name);
        }
    }

    /// True when the attribute `name` equals `value`.
    pub fn is_marked(&self, name: &str, value: &str) -> bool {
        self.get_attribute(name) == Some(value)
    }

    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn set_property(&mut self, name: &str, value: impl Into<String>) {
        self.properties.insert(name.to_string(), value.into());
    }

    // -------------------------------------------------------------------------
    // Children access
    // -------------------------------------------------------------------------

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_elements_mut(&mut self) -> &mut [Element] {
        match &mut self.content {
            Content::Children(children) => children,
            _ => &mut [],
        }
    }

    /// Append a child, replacing text content if there was any.
    pub fn push_child(&mut self, child: Element) {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            content => *content = Content::Children(vec![child]),
        }
    }

    /// Remove and return all children.
    pub fn take_children(&mut self) -> Vec<Element> {
        match std::mem::take(&mut self.content) {
            Content::Children(children) => children,
            other => {
                self.content = other;
                Vec::new()
            }
        }
    }

    /// Clone this subtree, giving every element a fresh id `{id}-{suffix}`.
    pub fn deep_clone(&self, suffix: &str) -> Element {
        let mut clone = self.clone();
        rename_subtree(&mut clone, suffix);
        clone
    }

    // -------------------------------------------------------------------------
    // Heights
    // -------------------------------------------------------------------------

    /// Hidden elements render with zero height unless an override is set.
    pub fn is_hidden(&self) -> bool {
        self.is_marked("aria-hidden", "true") || self.has_attribute("hidden")
    }

    /// Height of the content ignoring any inline override on this element.
    pub fn natural_height(&self) -> u16 {
        match &self.content {
            Content::None => 0,
            Content::Text(text) => u16::try_from(text.lines().count()).unwrap_or(u16::MAX),
            Content::Children(children) => children
                .iter()
                .map(Element::rendered_height)
                .fold(0u16, u16::saturating_add),
        }
    }

    pub fn rendered_height(&self) -> u16 {
        match self.height {
            Size::Fixed(h) => h,
            Size::Auto if self.is_hidden() => 0,
            Size::Auto => self.natural_height(),
        }
    }

    /// One-line description used by outlines and logs.
    pub fn describe(&self) -> String {
        let mut out = format!("<{} #{}", self.tag, self.id);
        for (name, value) in &self.attributes {
            if value.is_empty() {
                out.push_str(&format!(" {name}"));
            } else {
                out.push_str(&format!(" {name}=\"{value}\""));
            }
        }
        for (name, value) in &self.properties {
            out.push_str(&format!(" {name}:{value}"));
        }
        if let Size::Fixed(h) = self.height {
            out.push_str(&format!(" height:{h}"));
        }
        out.push('>');
        if let Content::Text(text) = &self.content {
            out.push_str(&format!(" {text:?}"));
        }
        out
    }
}

fn rename_subtree(element: &mut Element, suffix: &str) {
    element.id = format!("{}-{suffix}", element.id);
    for child in element.child_elements_mut() {
        rename_subtree(child, suffix);
    }
}
