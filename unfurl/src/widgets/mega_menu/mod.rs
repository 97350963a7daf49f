//! Mega menu - a nested navigation menu with mobile and desktop behaviour.
//!
//! Markup:
//!
//! ```text
//! mega-menu                         (host, options as attributes)
//!   [data-mega-menu="menu"]
//!     [data-mega-menu="menu-item"]
//!       [data-mega-menu="submenu"]
//!         [data-mega-menu="menu-item"] ...
//! ```
//!
//! At mount every item gets `data-level` (top level = 1) and, when it owns a
//! submenu, `data-has-children`. Items with a submenu are driven by a
//! [`Disclosure`](crate::Disclosure) whose trigger and marker is the item.
//!
//! Below `desktopMinWidth` the menu is in compact mode: clicking an item with
//! children toggles it and closes its siblings. At or above it the menu is in
//! wide mode: top-level items open on click and/or hover. Switching modes
//! collapses every item and closes the mobile menu.

mod compact;
mod options;
mod state;
mod toggler;
mod tree;
mod wide;

use std::sync::Arc;

use log::info;
use pagedom::Page;

use crate::error::WidgetError;
use crate::lifecycle::Subscription;
use crate::widgets::responsive::{Mode, ResponsiveSwitcher};

pub use options::MegaMenuOptions;
pub use state::MenuEvent;
pub use toggler::{MenuToggler, TOGGLER_TAG};
pub use tree::{MenuItem, MenuTree, ROLE};

use state::{MenuCore, MenuModes};

/// A mounted mega menu.
#[derive(Debug, Clone)]
pub struct MegaMenu {
    core: Arc<MenuCore>,
    switcher: ResponsiveSwitcher,
}

impl MegaMenu {
    /// Mount with options read from the host.
    pub fn mount(page: &mut Page, host: &str) -> Result<Self, WidgetError> {
        let options = MegaMenuOptions::from_element(page, host)?;
        Self::mount_with(page, host, options)
    }

    pub fn mount_with(
        page: &mut Page,
        host: &str,
        options: MegaMenuOptions,
    ) -> Result<Self, WidgetError> {
        let tree = MenuTree::build(page, host, &options)?;
        let core = Arc::new(MenuCore::new(host.to_string(), options, tree));
        let switcher = ResponsiveSwitcher::mount(
            page,
            host,
            options.query(),
            Arc::new(MenuModes(Arc::clone(&core))),
        );

        info!(
            "mega menu {} mounted in {:?} mode",
            host,
            switcher.active_mode()
        );
        Ok(Self { core, switcher })
    }

    pub fn host(&self) -> &str {
        &self.core.host
    }

    pub fn options(&self) -> MegaMenuOptions {
        self.core.options
    }

    pub fn tree(&self) -> &MenuTree {
        &self.core.tree
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.core.tree.item(id)
    }

    pub fn mode(&self) -> Option<Mode> {
        self.switcher.active_mode()
    }

    pub fn switcher(&self) -> &ResponsiveSwitcher {
        &self.switcher
    }

    /// Ids of items whose submenu is open (settled).
    pub fn open_items(&self) -> Vec<String> {
        self.core
            .tree
            .items()
            .iter()
            .filter(|item| item.disclosure.as_ref().is_some_and(|d| d.is_open()))
            .map(|item| item.id.clone())
            .collect()
    }

    // -------------------------------------------------------------------------
    // Mobile menu
    // -------------------------------------------------------------------------

    pub fn is_mobile_menu_open(&self) -> bool {
        self.core.is_mobile_menu_open()
    }

    pub fn open_mobile_menu(&self, page: &mut Page) {
        self.core.set_mobile_menu(page, true);
    }

    pub fn close_mobile_menu(&self, page: &mut Page) {
        self.core.set_mobile_menu(page, false);
    }

    pub fn toggle_mobile_menu(&self, page: &mut Page) {
        let open = !self.core.is_mobile_menu_open();
        self.core.set_mobile_menu(page, open);
    }

    /// Observe mobile menu changes.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&mut Page, MenuEvent) + Send + Sync + 'static,
    {
        self.core.observers.subscribe(Arc::new(observer))
    }

    /// Remove every listener and stop observing the viewport.
    pub fn unmount(&self, page: &mut Page) {
        self.switcher.unmount(page);
        for disclosure in self.core.tree.disclosures() {
            disclosure.unbind(page);
        }
        info!("mega menu {} unmounted", self.core.host);
    }
}
