//! Switches a widget between two listener sets on a viewport-width boundary.

use std::sync::{Arc, RwLock};

use log::{debug, trace};
use pagedom::{ListenerId, MediaQuery, ObserverId, Page};

/// The two interaction modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Narrow viewports.
    Compact,
    /// Viewports at or above the threshold.
    Wide,
}

impl Mode {
    /// Mode for `width` under `query`. The threshold itself is wide.
    pub fn for_width(query: &MediaQuery, width: u16) -> Self {
        if query.matches(width) {
            Mode::Wide
        } else {
            Mode::Compact
        }
    }

    /// Attribute set on the host while this mode is enabled.
    pub fn marker(self) -> &'static str {
        match self {
            Mode::Compact => "data-is-mobile",
            Mode::Wide => "data-is-desktop",
        }
    }
}

/// The listener set of each mode.
pub trait ModeBehavior: Send + Sync {
    /// Add the mode's listeners and return their ids. The switcher removes
    /// them when the mode is disabled.
    fn attach(&self, page: &mut Page, mode: Mode) -> Vec<ListenerId>;

    /// Called after the mode's listeners are removed.
    fn reset(&self, _page: &mut Page, _mode: Mode) {}
}

#[derive(Debug)]
struct SwitcherInner {
    host: String,
    query: MediaQuery,
    active: Option<Mode>,
    listeners: Vec<ListenerId>,
    observer: Option<ObserverId>,
}

/// Keeps exactly one mode enabled while mounted.
#[derive(Clone)]
pub struct ResponsiveSwitcher {
    inner: Arc<RwLock<SwitcherInner>>,
    behavior: Arc<dyn ModeBehavior>,
}

impl std::fmt::Debug for ResponsiveSwitcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponsiveSwitcher")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl ResponsiveSwitcher {
    /// Observe the viewport and enable the mode for the current width.
    pub fn mount(
        page: &mut Page,
        host: &str,
        query: MediaQuery,
        behavior: Arc<dyn ModeBehavior>,
    ) -> Self {
        let switcher = Self {
            inner: Arc::new(RwLock::new(SwitcherInner {
                host: host.to_string(),
                query,
                active: None,
                listeners: Vec::new(),
                observer: None,
            })),
            behavior,
        };

        let weak = Arc::downgrade(&switcher.inner);
        let behavior = Arc::clone(&switcher.behavior);
        let observer = page.observe_viewport(move |page, width| {
            if let Some(inner) = weak.upgrade() {
                let switcher = ResponsiveSwitcher {
                    inner,
                    behavior: Arc::clone(&behavior),
                };
                switcher.apply(page, width);
            }
        });
        if let Ok(mut guard) = switcher.inner.write() {
            guard.observer = Some(observer);
        }

        let width = page.viewport_width();
        switcher.apply(page, width);
        switcher
    }

    pub fn active_mode(&self) -> Option<Mode> {
        self.inner.read().ok().and_then(|guard| guard.active)
    }

    pub fn query(&self) -> Option<MediaQuery> {
        self.inner.read().map(|guard| guard.query).ok()
    }

    pub fn host(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.host.clone())
            .unwrap_or_default()
    }

    /// Listeners attached by the active mode.
    pub fn listener_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.listeners.len())
            .unwrap_or(0)
    }

    /// Enable the mode that matches `width`. No-op if it is already active.
    pub fn apply(&self, page: &mut Page, width: u16) {
        let Some(query) = self.query() else {
            return;
        };
        let mode = Mode::for_width(&query, width);
        if self.active_mode() == Some(mode) {
            trace!("switcher: width {} keeps {:?}", width, mode);
            return;
        }
        debug!("switcher: width {} -> {:?}", width, mode);
        self.enable(page, mode);
    }

    /// Disable the active mode (if different) and enable `mode`.
    pub fn enable(&self, page: &mut Page, mode: Mode) {
        match self.active_mode() {
            Some(active) if active == mode => return,
            Some(active) => self.disable(page, active),
            None => {}
        }

        let listeners = self.behavior.attach(page, mode);
        let host = match self.inner.write() {
            Ok(mut guard) => {
                guard.active = Some(mode);
                guard.listeners = listeners;
                guard.host.clone()
            }
            Err(_) => return,
        };
        page.set_attribute(&host, mode.marker(), "");
    }

    /// Remove the listeners of `mode` if it is active, then reset it.
    pub fn disable(&self, page: &mut Page, mode: Mode) {
        let (listeners, host) = match self.inner.write() {
            Ok(mut guard) if guard.active == Some(mode) => {
                guard.active = None;
                (std::mem::take(&mut guard.listeners), guard.host.clone())
            }
            _ => return,
        };

        for id in listeners {
            page.remove_listener(id);
        }
        self.behavior.reset(page, mode);
        page.remove_attribute(&host, mode.marker());
    }

    /// Disable the active mode and stop observing the viewport.
    pub fn unmount(&self, page: &mut Page) {
        if let Some(active) = self.active_mode() {
            self.disable(page, active);
        }
        let observer = self
            .inner
            .write()
            .ok()
            .and_then(|mut guard| guard.observer.take());
        if let Some(observer) = observer {
            page.unobserve_viewport(observer);
        }
    }
}
