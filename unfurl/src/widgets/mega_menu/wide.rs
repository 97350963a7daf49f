//! Desktop behaviour: top-level items open on click and/or hover.

use std::sync::Arc;

use log::trace;
use pagedom::{EventKind, ListenerId, Page};

use super::state::MenuCore;

pub(super) fn attach(core: &Arc<MenuCore>, page: &mut Page) -> Vec<ListenerId> {
    let mut listeners = Vec::new();
    let top: Vec<String> = core.tree.top_level().map(|item| item.id.clone()).collect();

    if core.options.desktop_open_on_click {
        for id in &top {
            let weak = Arc::downgrade(core);
            let item = id.clone();
            listeners.push(page.add_listener(id, EventKind::Click, move |page, cx| {
                let Some(core) = weak.upgrade() else {
                    return;
                };
                let inside_submenu = core
                    .tree
                    .item(&item)
                    .and_then(|item| item.submenu.as_deref())
                    .is_some_and(|submenu| page.contains(submenu, cx.target()));
                if inside_submenu {
                    return;
                }
                toggle(&core, page, &item);
            }));
        }

        let weak = Arc::downgrade(core);
        let root = page.root_id().to_string();
        listeners.push(page.add_listener(&root, EventKind::Click, move |page, cx| {
            let Some(core) = weak.upgrade() else {
                return;
            };
            if page.contains(&core.host, cx.target()) {
                return;
            }
            if !core.tree.top_level().any(|item| item.is_open()) {
                return;
            }
            cx.stop_propagation();
            cx.prevent_default();
            trace!("wide: click outside {}", core.host);
            close_all(&core, page);
        }));
    }

    if core.options.desktop_open_on_hover {
        for id in &top {
            let weak = Arc::downgrade(core);
            let item = id.clone();
            listeners.push(page.add_listener(id, EventKind::MouseEnter, move |page, _| {
                if let Some(core) = weak.upgrade() {
                    show(&core, page, &item);
                }
            }));

            let weak = Arc::downgrade(core);
            let item = id.clone();
            listeners.push(page.add_listener(id, EventKind::MouseLeave, move |page, _| {
                if let Some(core) = weak.upgrade() {
                    hide(&core, page, &item);
                }
            }));
        }
    }

    listeners
}

/// Open `id` and close every other top-level item.
fn show(core: &MenuCore, page: &mut Page, id: &str) {
    trace!("wide: show {}", id);
    for item in core.tree.top_level() {
        let Some(disclosure) = &item.disclosure else {
            continue;
        };
        if item.id == id {
            disclosure.open(page, None);
        } else if disclosure.target_state() {
            disclosure.close(page, None);
        }
    }
}

fn hide(core: &MenuCore, page: &mut Page, id: &str) {
    trace!("wide: hide {}", id);
    if let Some(disclosure) = core.tree.item(id).and_then(|item| item.disclosure.as_ref()) {
        disclosure.close(page, None);
    }
}

fn toggle(core: &MenuCore, page: &mut Page, id: &str) {
    if core.tree.item(id).is_some_and(|item| item.is_open()) {
        hide(core, page, id);
    } else {
        show(core, page, id);
    }
}

fn close_all(core: &MenuCore, page: &mut Page) {
    for item in core.tree.top_level().filter(|item| item.is_open()) {
        if let Some(disclosure) = &item.disclosure {
            disclosure.close(page, None);
        }
    }
}
