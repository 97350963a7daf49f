//! A button that opens and closes a registered mega menu on mobile.

use std::sync::{Arc, RwLock, Weak};

use log::{error, info};
use pagedom::{EventKind, ListenerId, Page};

use crate::error::WidgetError;
use crate::registry::{SharedRegistry, WidgetRegistry};

/// Host tag of a mobile toggler.
pub const TOGGLER_TAG: &str = "mega-menu-toggler";

/// Toggles the mobile state of the mega menu named by its `target`
/// attribute. The menu is looked up in the registry on every click, so the
/// toggler may be mounted before its menu.
#[derive(Debug, Clone)]
pub struct MenuToggler {
    id: String,
    target: String,
    listener: Arc<RwLock<Option<ListenerId>>>,
}

impl MenuToggler {
    pub fn mount(
        page: &mut Page,
        host: &str,
        registry: &SharedRegistry,
    ) -> Result<Self, WidgetError> {
        if !page.exists(host) {
            return Err(WidgetError::missing("toggler", host));
        }
        let target = page
            .get_attribute(host, "target")
            .map(str::to_string)
            .ok_or_else(|| WidgetError::InvalidOption {
                option: "target",
                value: String::new(),
            })?;

        let weak: Weak<RwLock<WidgetRegistry>> = Arc::downgrade(registry);
        let menu_id = target.clone();
        let listener = page.add_listener(host, EventKind::Click, move |page, _| {
            let Some(registry) = weak.upgrade() else {
                return;
            };
            let menu = match registry.read() {
                Ok(guard) => guard.mega_menu(&menu_id).cloned(),
                Err(_) => return,
            };
            match menu {
                Ok(menu) => {
                    menu.toggle_mobile_menu(page);
                }
                Err(err) => error!("toggler: {}", err),
            }
        });

        info!("toggler {} mounted for {}", host, target);
        Ok(Self {
            id: host.to_string(),
            target,
            listener: Arc::new(RwLock::new(Some(listener))),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Id of the mega menu this toggler controls.
    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn unmount(&self, page: &mut Page) {
        let listener = self
            .listener
            .write()
            .ok()
            .and_then(|mut guard| guard.take());
        if let Some(listener) = listener {
            page.remove_listener(listener);
        }
    }
}
