//! Mobile behaviour: items with children toggle, siblings close.

use std::sync::Arc;

use log::trace;
use pagedom::{EventKind, ListenerId, Page};

use super::state::MenuCore;
use super::toggler::TOGGLER_TAG;

pub(super) fn attach(core: &Arc<MenuCore>, page: &mut Page) -> Vec<ListenerId> {
    let mut listeners = Vec::new();

    for item in core.tree.items() {
        let weak = Arc::downgrade(core);
        let id = item.id.clone();
        listeners.push(page.add_listener(&item.id, EventKind::Click, move |page, cx| {
            let Some(core) = weak.upgrade() else {
                return;
            };
            // Ancestor items must not react to a nested item's click
            cx.stop_propagation();
            if item_click(&core, page, &id, cx.target()) {
                cx.prevent_default();
            }
        }));
    }

    if core.options.mobile_close_on_click_outside {
        let weak = Arc::downgrade(core);
        let root = page.root_id().to_string();
        listeners.push(page.add_listener(&root, EventKind::Click, move |page, cx| {
            let Some(core) = weak.upgrade() else {
                return;
            };
            if !core.is_mobile_menu_open() || page.contains(&core.host, cx.target()) {
                return;
            }
            if page.closest(cx.target(), |el| el.tag == TOGGLER_TAG).is_some() {
                return;
            }
            cx.stop_propagation();
            cx.prevent_default();
            core.set_mobile_menu(page, false);
        }));
    }

    listeners
}

/// Returns true when the click was consumed by a submenu toggle.
fn item_click(core: &MenuCore, page: &mut Page, id: &str, target: &str) -> bool {
    let Some(item) = core.tree.item(id) else {
        return false;
    };
    // Leaf items navigate
    let (Some(disclosure), Some(submenu)) = (&item.disclosure, &item.submenu) else {
        return false;
    };
    if page.contains(submenu, target) {
        return false;
    }

    if disclosure.target_state() {
        trace!("compact: closing {}", id);
        disclosure.close(page, None);
        return true;
    }

    trace!("compact: opening {}", id);
    for sibling in core.tree.siblings(id) {
        if let Some(other) = sibling.disclosure.as_ref().filter(|d| d.target_state()) {
            other.close(page, None);
        }
    }
    disclosure.open(page, None);
    true
}
