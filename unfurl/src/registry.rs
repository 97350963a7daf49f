//! Registry of mounted widgets, owned by the application.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use log::{debug, error, info};
use pagedom::Page;

use crate::error::WidgetError;
use crate::widgets::accordion::Accordion;
use crate::widgets::dropdown::Dropdown;
use crate::widgets::marquee::Marquee;
use crate::widgets::mega_menu::{MegaMenu, MenuToggler, TOGGLER_TAG};

/// Host tags recognised by [`mount_document`].
pub const ACCORDION_TAG: &str = "ui-accordion";
pub const DROPDOWN_TAG: &str = "ui-dropdown";
pub const MEGA_MENU_TAG: &str = "mega-menu";
pub const MARQUEE_TAG: &str = "ui-marquee";

/// Any mounted widget.
#[derive(Debug, Clone)]
pub enum Widget {
    Accordion(Accordion),
    Dropdown(Dropdown),
    MegaMenu(MegaMenu),
    Marquee(Marquee),
    Toggler(MenuToggler),
}

impl Widget {
    pub fn kind(&self) -> &'static str {
        match self {
            Widget::Accordion(_) => "accordion",
            Widget::Dropdown(_) => "dropdown",
            Widget::MegaMenu(_) => "mega-menu",
            Widget::Marquee(_) => "marquee",
            Widget::Toggler(_) => "toggler",
        }
    }

    /// Remove every listener and observer the widget added.
    pub fn unmount(&self, page: &mut Page) {
        match self {
            Widget::Accordion(widget) => widget.unmount(page),
            Widget::Dropdown(widget) => widget.unmount(page),
            Widget::MegaMenu(widget) => widget.unmount(page),
            Widget::Marquee(widget) => widget.unmount(page),
            Widget::Toggler(widget) => widget.unmount(page),
        }
    }
}

/// Mounted widgets by id, in registration order.
#[derive(Debug, Default)]
pub struct WidgetRegistry {
    widgets: HashMap<String, Widget>,
    order: Vec<String>,
}

/// A registry shared between the application and widgets that look up
/// other widgets (mobile togglers).
pub type SharedRegistry = Arc<RwLock<WidgetRegistry>>;

impl WidgetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedRegistry {
        Arc::new(RwLock::new(self))
    }

    /// Register a mounted widget. Fails if the id is taken.
    pub fn register(&mut self, id: impl Into<String>, widget: Widget) -> Result<(), WidgetError> {
        let id = id.into();
        if self.widgets.contains_key(&id) {
            return Err(WidgetError::DuplicateId(id));
        }
        debug!("registry: {} {}", widget.kind(), id);
        self.order.push(id.clone());
        self.widgets.insert(id, widget);
        Ok(())
    }

    /// Remove a widget without unmounting it.
    pub fn remove(&mut self, id: &str) -> Option<Widget> {
        self.order.retain(|entry| entry != id);
        self.widgets.remove(id)
    }

    /// Remove a widget and unmount it.
    pub fn unmount(&mut self, page: &mut Page, id: &str) -> Result<(), WidgetError> {
        let widget = self
            .remove(id)
            .ok_or_else(|| WidgetError::MissingTarget(id.to_string()))?;
        widget.unmount(page);
        Ok(())
    }

    /// Unmount every widget, most recently registered first.
    pub fn unmount_all(&mut self, page: &mut Page) {
        for id in std::mem::take(&mut self.order).into_iter().rev() {
            if let Some(widget) = self.widgets.remove(&id) {
                widget.unmount(page);
            }
        }
        info!("registry: all widgets unmounted");
    }

    pub fn get(&self, id: &str) -> Option<&Widget> {
        self.widgets.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.widgets.contains_key(id)
    }

    /// Ids in registration order.
    pub fn ids(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    // -------------------------------------------------------------------------
    // Typed lookups
    // -------------------------------------------------------------------------

    pub fn accordion(&self, id: &str) -> Result<&Accordion, WidgetError> {
        match self.widgets.get(id) {
            Some(Widget::Accordion(widget)) => Ok(widget),
            _ => Err(WidgetError::MissingTarget(id.to_string())),
        }
    }

    pub fn dropdown(&self, id: &str) -> Result<&Dropdown, WidgetError> {
        match self.widgets.get(id) {
            Some(Widget::Dropdown(widget)) => Ok(widget),
            _ => Err(WidgetError::MissingTarget(id.to_string())),
        }
    }

    pub fn mega_menu(&self, id: &str) -> Result<&MegaMenu, WidgetError> {
        match self.widgets.get(id) {
            Some(Widget::MegaMenu(widget)) => Ok(widget),
            _ => Err(WidgetError::MissingTarget(id.to_string())),
        }
    }

    pub fn marquee(&self, id: &str) -> Result<&Marquee, WidgetError> {
        match self.widgets.get(id) {
            Some(Widget::Marquee(widget)) => Ok(widget),
            _ => Err(WidgetError::MissingTarget(id.to_string())),
        }
    }

    pub fn toggler(&self, id: &str) -> Result<&MenuToggler, WidgetError> {
        match self.widgets.get(id) {
            Some(Widget::Toggler(widget)) => Ok(widget),
            _ => Err(WidgetError::MissingTarget(id.to_string())),
        }
    }
}

fn is_host(tag: &str) -> bool {
    matches!(
        tag,
        ACCORDION_TAG | DROPDOWN_TAG | MEGA_MENU_TAG | MARQUEE_TAG | TOGGLER_TAG
    )
}

fn mount_host(
    page: &mut Page,
    tag: &str,
    host: &str,
    registry: &SharedRegistry,
) -> Result<Widget, WidgetError> {
    Ok(match tag {
        ACCORDION_TAG => Widget::Accordion(Accordion::mount(page, host)?),
        DROPDOWN_TAG => Widget::Dropdown(Dropdown::mount(page, host)?),
        MEGA_MENU_TAG => Widget::MegaMenu(MegaMenu::mount(page, host)?),
        MARQUEE_TAG => Widget::Marquee(Marquee::mount(page, host)?),
        _ => Widget::Toggler(MenuToggler::mount(page, host, registry)?),
    })
}

/// Mount every widget host in the page, in document order, keyed by element
/// id. On failure everything mounted so far is unmounted again.
pub fn mount_document(page: &mut Page) -> Result<SharedRegistry, WidgetError> {
    let registry = WidgetRegistry::new().shared();
    let root = page.root_id().to_string();
    let hosts: Vec<(String, String)> = page
        .query_all(&root, |el| is_host(&el.tag))
        .into_iter()
        .filter_map(|id| {
            let tag = page.element(&id)?.tag.clone();
            Some((id, tag))
        })
        .collect();

    for (host, tag) in hosts {
        let mounted = mount_host(page, &tag, &host, &registry).and_then(|widget| {
            let registered = match registry.write() {
                Ok(mut guard) => guard.register(host.clone(), widget.clone()),
                Err(_) => Ok(()),
            };
            if registered.is_err() {
                widget.unmount(page);
            }
            registered
        });

        if let Err(err) = mounted {
            error!("mount_document: {} failed: {}", host, err);
            let mut mounted = match registry.write() {
                Ok(mut guard) => std::mem::take(&mut *guard),
                Err(_) => WidgetRegistry::new(),
            };
            mounted.unmount_all(page);
            return Err(err);
        }
    }

    let count = registry.read().map(|guard| guard.len()).unwrap_or(0);
    info!("mount_document: {} widgets mounted", count);
    Ok(registry)
}
