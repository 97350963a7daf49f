//! Disclosure widget state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};
use std::time::Duration;

use pagedom::{Easing, ListenerId, Page, TransitionConfig};

use crate::error::WidgetError;
use crate::lifecycle::{Lifecycle, Observers, Subscription};
use crate::settle::Resolver;

/// Unique identifier for a Disclosure instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisclosureId(usize);

impl DisclosureId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DisclosureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__disclosure_{}", self.0)
    }
}

/// An open/close request that has not settled yet.
#[derive(Debug)]
pub(super) struct Pending {
    /// `true` when opening.
    pub target: bool,
    pub generation: u64,
    pub waiters: Vec<Resolver>,
}

/// Internal state for a Disclosure
#[derive(Debug)]
pub(super) struct DisclosureInner {
    /// Settled state. Attributes are a projection of this.
    pub open: bool,
    pub pending: Option<Pending>,
    /// Bumped for every request that starts a transition.
    pub generation: u64,
    pub trigger: String,
    pub content: String,
    /// Element carrying the boolean `open` attribute.
    pub marker: String,
    pub transition: TransitionConfig,
    /// Listeners added by `wire_trigger`, removed by `unbind`.
    pub listeners: Vec<ListenerId>,
}

/// A trigger/content pair whose content collapses and expands.
///
/// Cloning yields another handle to the same disclosure.
///
/// # Example
///
/// ```ignore
/// let faq = Disclosure::builder("faq-toggler", "faq-content")
///     .duration(Duration::from_millis(200))
///     .bind(&mut page)?;
/// faq.wire_trigger(&mut page);
/// faq.on(Lifecycle::AfterOpen, |page, _| log::info!("expanded"));
/// ```
#[derive(Debug, Clone)]
pub struct Disclosure {
    pub(super) id: DisclosureId,
    pub(super) inner: Arc<RwLock<DisclosureInner>>,
    pub(super) observers: Observers<Lifecycle>,
}

/// Non-owning handle, used by observers that point back at group members.
#[derive(Debug, Clone)]
pub struct WeakDisclosure {
    id: DisclosureId,
    inner: Weak<RwLock<DisclosureInner>>,
    observers: Observers<Lifecycle>,
}

impl WeakDisclosure {
    pub fn upgrade(&self) -> Option<Disclosure> {
        Some(Disclosure {
            id: self.id,
            inner: self.inner.upgrade()?,
            observers: self.observers.clone(),
        })
    }
}

/// Builder for binding a Disclosure to its elements.
#[derive(Debug, Clone)]
pub struct DisclosureBuilder {
    trigger: String,
    content: String,
    marker: Option<String>,
    transition: TransitionConfig,
    initial: Option<bool>,
}

impl DisclosureBuilder {
    /// Element that receives the `open` attribute. Defaults to the trigger.
    pub fn marker(mut self, id: impl Into<String>) -> Self {
        self.marker = Some(id.into());
        self
    }

    /// Default duration for open/close.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.transition.duration = duration;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.transition.easing = easing;
        self
    }

    /// Force the initial state instead of reading `aria-hidden` on the content.
    pub fn initial(mut self, open: bool) -> Self {
        self.initial = Some(open);
        self
    }

    /// Bind to the page. Fails if the trigger or content element is absent.
    ///
    /// The initial state is applied instantly so attributes and height agree
    /// before any interaction.
    pub fn bind(self, page: &mut Page) -> Result<Disclosure, WidgetError> {
        if !page.exists(&self.trigger) {
            return Err(WidgetError::missing("trigger", self.trigger));
        }
        if !page.exists(&self.content) {
            return Err(WidgetError::missing("content", self.content));
        }
        let marker = self.marker.unwrap_or_else(|| self.trigger.clone());
        if !page.exists(&marker) {
            return Err(WidgetError::missing("marker", marker));
        }

        let open = self
            .initial
            .unwrap_or_else(|| page.get_attribute(&self.content, "aria-hidden") != Some("true"));

        let disclosure = Disclosure {
            id: DisclosureId::new(),
            inner: Arc::new(RwLock::new(DisclosureInner {
                open,
                pending: None,
                generation: 0,
                trigger: self.trigger,
                content: self.content,
                marker,
                transition: self.transition,
                listeners: Vec::new(),
            })),
            observers: Observers::default(),
        };
        disclosure.reset(page, open);
        Ok(disclosure)
    }
}

impl Disclosure {
    /// Start binding `trigger` and `content`.
    pub fn builder(trigger: impl Into<String>, content: impl Into<String>) -> DisclosureBuilder {
        DisclosureBuilder {
            trigger: trigger.into(),
            content: content.into(),
            marker: None,
            transition: TransitionConfig::default(),
            initial: None,
        }
    }

    /// Bind with default settings.
    pub fn bind(
        page: &mut Page,
        trigger: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, WidgetError> {
        Self::builder(trigger, content).bind(page)
    }

    /// Get the unique ID for this disclosure
    pub fn id(&self) -> DisclosureId {
        self.id
    }

    pub fn downgrade(&self) -> WeakDisclosure {
        WeakDisclosure {
            id: self.id,
            inner: Arc::downgrade(&self.inner),
            observers: self.observers.clone(),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Settled state.
    pub fn is_open(&self) -> bool {
        self.inner.read().map(|guard| guard.open).unwrap_or(false)
    }

    /// True while an open/close request is in flight.
    pub fn is_pending(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.pending.is_some())
            .unwrap_or(false)
    }

    /// The state this disclosure is heading to: the in-flight target if any,
    /// otherwise the settled state.
    pub fn target_state(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.pending.as_ref().map_or(guard.open, |p| p.target))
            .unwrap_or(false)
    }

    pub fn trigger(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.trigger.clone())
            .unwrap_or_default()
    }

    pub fn content(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.content.clone())
            .unwrap_or_default()
    }

    pub fn marker(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.marker.clone())
            .unwrap_or_default()
    }

    pub fn transition(&self) -> TransitionConfig {
        self.inner
            .read()
            .map(|guard| guard.transition)
            .unwrap_or_default()
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.listeners.len())
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Observers
    // -------------------------------------------------------------------------

    /// Observe every lifecycle notification.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&mut Page, Lifecycle) + Send + Sync + 'static,
    {
        self.observers.subscribe(Arc::new(observer))
    }

    /// Observe one kind of lifecycle notification.
    pub fn on<F>(&self, kind: Lifecycle, observer: F) -> Subscription
    where
        F: Fn(&mut Page, Lifecycle) + Send + Sync + 'static,
    {
        self.subscribe(move |page, event| {
            if event == kind {
                observer(page, event);
            }
        })
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    // -------------------------------------------------------------------------
    // Projection
    // -------------------------------------------------------------------------

    /// Write the settled state to the trigger, content and marker elements.
    pub(super) fn mirror(&self, page: &mut Page) {
        let Ok(guard) = self.inner.read() else {
            return;
        };
        let (open, trigger, content, marker) = (
            guard.open,
            guard.trigger.clone(),
            guard.content.clone(),
            guard.marker.clone(),
        );
        drop(guard);

        page.set_attribute(&trigger, "aria-expanded", if open { "true" } else { "false" });
        page.set_attribute(&content, "aria-hidden", if open { "false" } else { "true" });
        page.toggle_attribute(&marker, "open", open);
    }
}
