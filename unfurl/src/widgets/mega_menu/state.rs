//! Shared mega menu state: the item tree and the mobile menu flag.

use std::sync::{Arc, RwLock};

use log::debug;
use pagedom::{ListenerId, Page};

use crate::lifecycle::Observers;
use crate::widgets::responsive::{Mode, ModeBehavior};

use super::options::MegaMenuOptions;
use super::tree::MenuTree;
use super::{compact, wide};

/// Notifications emitted by a mega menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The mobile menu opened or closed.
    MobileToggle { open: bool },
}

#[derive(Debug)]
pub(crate) struct MenuCore {
    pub host: String,
    pub options: MegaMenuOptions,
    pub tree: MenuTree,
    mobile_open: RwLock<bool>,
    pub observers: Observers<MenuEvent>,
}

impl MenuCore {
    pub fn new(host: String, options: MegaMenuOptions, tree: MenuTree) -> Self {
        Self {
            host,
            options,
            tree,
            mobile_open: RwLock::new(false),
            observers: Observers::default(),
        }
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_open.read().map(|open| *open).unwrap_or(false)
    }

    /// Returns false if the menu was already in that state.
    pub fn set_mobile_menu(&self, page: &mut Page, open: bool) -> bool {
        match self.mobile_open.write() {
            Ok(mut guard) if *guard != open => *guard = open,
            _ => return false,
        }

        debug!("mega menu {}: mobile menu open={}", self.host, open);
        page.toggle_attribute(&self.host, "data-is-opened-mobile", open);
        self.observers.emit(page, MenuEvent::MobileToggle { open });
        true
    }

    /// Close every item instantly.
    pub fn collapse_items(&self, page: &mut Page) {
        for disclosure in self.tree.disclosures() {
            disclosure.reset(page, false);
        }
    }
}

/// Binds each mode's listeners to a shared core.
pub(crate) struct MenuModes(pub Arc<MenuCore>);

impl ModeBehavior for MenuModes {
    fn attach(&self, page: &mut Page, mode: Mode) -> Vec<ListenerId> {
        match mode {
            Mode::Compact => compact::attach(&self.0, page),
            Mode::Wide => wide::attach(&self.0, page),
        }
    }

    fn reset(&self, page: &mut Page, _mode: Mode) {
        self.0.collapse_items(page);
        self.0.set_mobile_menu(page, false);
    }
}
