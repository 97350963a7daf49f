//! The page: one element tree plus everything that reacts to it.

use std::sync::Arc;
use std::time::Duration;

use log::{debug, trace, warn};

use crate::animation::{AnimationToken, Completion, HeightAnimator, HeightTarget, Settlement};
use crate::element::{self, Element};
use crate::event::{DispatchOutcome, Event, EventContext, EventKind};
use crate::listener::{ListenerId, Listeners};
use crate::transitions::TransitionConfig;
use crate::types::Size;
use crate::viewport::{ObserverId, Viewport};

/// Owns the element tree, listeners, viewport and animations.
///
/// All mutation happens through `&mut Page`, on one thread, in event order.
/// Handlers, viewport observers and animation completions receive the page
/// so they can react without shared ownership of the tree.
#[derive(Debug)]
pub struct Page {
    root: Element,
    listeners: Listeners,
    viewport: Viewport,
    animator: HeightAnimator,
    /// Time elapsed since the page was created, advanced by `tick`.
    clock: Duration,
}

impl Page {
    pub fn new(root: Element, viewport_width: u16) -> Self {
        Self {
            root,
            listeners: Listeners::new(),
            viewport: Viewport::new(viewport_width),
            animator: HeightAnimator::new(),
            clock: Duration::ZERO,
        }
    }

    // -------------------------------------------------------------------------
    // Tree access
    // -------------------------------------------------------------------------

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_id(&self) -> &str {
        &self.root.id
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        element::find_element(&self.root, id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        element::find_element_mut(&mut self.root, id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    /// True when `descendant` is `ancestor` or inside it.
    pub fn contains(&self, ancestor: &str, descendant: &str) -> bool {
        element::contains(&self.root, ancestor, descendant)
    }

    pub fn parent_id(&self, id: &str) -> Option<String> {
        element::parent_id(&self.root, id)
    }

    pub fn closest(&self, id: &str, predicate: impl Fn(&Element) -> bool) -> Option<String> {
        element::closest(&self.root, id, predicate)
    }

    /// Descendants of `scope` matching `predicate`, in document order.
    pub fn query_all(&self, scope: &str, predicate: impl Fn(&Element) -> bool) -> Vec<String> {
        self.element(scope)
            .map(|el| element::query_all(el, predicate))
            .unwrap_or_default()
    }

    pub fn query(&self, scope: &str, predicate: impl Fn(&Element) -> bool) -> Option<String> {
        self.element(scope).and_then(|el| element::query(el, predicate))
    }

    pub fn get_attribute(&self, id: &str, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.get_attribute(name))
    }

    pub fn has_attribute(&self, id: &str, name: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_attribute(name))
    }

    /// Returns false if the element does not exist.
    pub fn set_attribute(&mut self, id: &str, name: &str, value: impl Into<String>) -> bool {
        match self.element_mut(id) {
            Some(el) => {
                el.set_attribute(name, value);
                true
            }
            None => false,
        }
    }

    pub fn remove_attribute(&mut self, id: &str, name: &str) -> bool {
        self.element_mut(id).is_some_and(|el| el.remove_attribute(name))
    }

    pub fn toggle_attribute(&mut self, id: &str, name: &str, present: bool) {
        if let Some(el) = self.element_mut(id) {
            el.toggle_attribute(name, present);
        }
    }

    pub fn set_property(&mut self, id: &str, name: &str, value: impl Into<String>) {
        if let Some(el) = self.element_mut(id) {
            el.set_property(name, value);
        }
    }

    pub fn get_property(&self, id: &str, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.get_property(name))
    }

    pub fn rendered_height(&self, id: &str) -> Option<u16> {
        self.element(id).map(Element::rendered_height)
    }

    /// Indented dump of the whole tree.
    pub fn outline(&self) -> String {
        element::outline(&self.root)
    }

    // -------------------------------------------------------------------------
    // Listeners and dispatch
    // -------------------------------------------------------------------------

    pub fn add_listener<F>(&mut self, node: &str, kind: EventKind, handler: F) -> ListenerId
    where
        F: Fn(&mut Page, &mut EventContext) + Send + Sync + 'static,
    {
        trace!("add_listener: {:?} on {}", kind, node);
        self.listeners.add(node, kind, Arc::new(handler))
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.listeners.contains(id)
    }

    pub fn listener_count(&self, node: &str, kind: EventKind) -> usize {
        self.listeners.count_for(node, kind)
    }

    pub fn total_listeners(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver an event to its target and, for bubbling kinds, every
    /// ancestor up to the root. Listeners removed during dispatch are skipped.
    pub fn dispatch(&mut self, event: Event) -> DispatchOutcome {
        let path = match element::ancestry(&self.root, &event.target) {
            Some(path) => path,
            None => {
                warn!("dispatch: no element with id {}", event.target);
                return DispatchOutcome::default();
            }
        };
        let path: Vec<String> = if event.kind.bubbles() {
            path.into_iter().rev().collect()
        } else {
            path.into_iter().last().into_iter().collect()
        };

        trace!("dispatch: {:?} at {} (path len {})", event.kind, event.target, path.len());

        let mut cx = EventContext::new(event.kind, event.target);
        let mut delivered = 0;

        for node in &path {
            cx.set_current_target(node);
            for (id, handler) in self.listeners.handlers_for(node, event.kind) {
                if !self.listeners.contains(id) {
                    continue;
                }
                handler(self, &mut cx);
                delivered += 1;
            }
            if cx.is_propagation_stopped() {
                break;
            }
        }

        DispatchOutcome {
            delivered,
            default_prevented: cx.is_default_prevented(),
        }
    }

    // -------------------------------------------------------------------------
    // Viewport
    // -------------------------------------------------------------------------

    pub fn viewport_width(&self) -> u16 {
        self.viewport.width
    }

    /// Resize the viewport and notify observers. No-op if unchanged.
    pub fn set_viewport_width(&mut self, width: u16) {
        if self.viewport.width == width {
            return;
        }
        debug!("viewport: {} -> {}", self.viewport.width, width);
        self.viewport.width = width;

        for (id, handler) in self.viewport.snapshot() {
            if !self.viewport.contains(id) {
                continue;
            }
            handler(self, width);
        }
    }

    pub fn observe_viewport<F>(&mut self, handler: F) -> ObserverId
    where
        F: Fn(&mut Page, u16) + Send + Sync + 'static,
    {
        self.viewport.observe(Arc::new(handler))
    }

    pub fn unobserve_viewport(&mut self, id: ObserverId) -> bool {
        self.viewport.unobserve(id)
    }

    pub fn viewport_observer_count(&self) -> usize {
        self.viewport.len()
    }

    // -------------------------------------------------------------------------
    // Animation
    // -------------------------------------------------------------------------

    pub fn now(&self) -> Duration {
        self.clock
    }

    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.animator.set_reduced_motion(enabled);
    }

    pub fn has_active_animations(&self) -> bool {
        self.animator.has_active()
    }

    pub fn is_animating(&self, element_id: &str) -> bool {
        self.animator.is_animating(element_id)
    }

    pub fn animation_token(&self, element_id: &str) -> Option<AnimationToken> {
        self.animator.token_for(element_id)
    }

    /// Animate `element_id` towards its natural height or zero.
    ///
    /// Starts from the current rendered height, or from the interpolated
    /// height of an in-flight animation, which is superseded. Zero-length
    /// transitions (including `from == to` and reduced motion) complete
    /// before this returns. On completion the inline height is cleared.
    /// A missing element completes immediately with `Finished`.
    pub fn animate_height(
        &mut self,
        element_id: &str,
        target: HeightTarget,
        config: TransitionConfig,
        completion: Completion,
    ) -> AnimationToken {
        let token = self.animator.next_token();
        let now = self.clock;

        let Some(element) = self.element(element_id) else {
            warn!("animate_height: no element with id {element_id}");
            completion(self, Settlement::Finished);
            return token;
        };

        let from = self
            .animator
            .current_height(element_id, now)
            .unwrap_or_else(|| element.rendered_height());
        let to = match target {
            HeightTarget::Expand => element.natural_height(),
            HeightTarget::Collapse => 0,
        };

        let superseded = self.animator.cancel(element_id);

        let instant = config.duration.is_zero() || from == to || self.animator.reduced_motion();
        if instant {
            trace!("animate_height: {element_id} {from} -> {to} instantly");
            if let Some(el) = self.element_mut(element_id) {
                el.height = Size::Auto;
            }
            if let Some(stale) = superseded {
                stale(self, Settlement::Superseded);
            }
            completion(self, Settlement::Finished);
            return token;
        }

        debug!("animate_height: {element_id} {from} -> {to} over {:?}", config.duration);
        self.animator
            .start(element_id, token, from, to, now, config, completion);
        if let Some(el) = self.element_mut(element_id) {
            el.height = Size::Fixed(from);
        }
        if let Some(stale) = superseded {
            stale(self, Settlement::Superseded);
        }
        token
    }

    /// Advance the page clock, update in-flight heights and run completions
    /// of animations that reached their end.
    pub fn tick(&mut self, dt: Duration) {
        self.clock += dt;
        let advance = self.animator.advance(self.clock);

        for (id, height) in advance.heights {
            if let Some(el) = self.element_mut(&id) {
                el.height = Size::Fixed(height);
            }
        }

        for (id, completion) in advance.finished {
            trace!("animation finished: {id}");
            if let Some(el) = self.element_mut(&id) {
                el.height = Size::Auto;
            }
            if let Some(completion) = completion {
                completion(self, Settlement::Finished);
            }
        }
    }

    /// Tick in `step` increments until no animation is in flight.
    /// Returns the number of ticks taken.
    pub fn settle(&mut self, step: Duration) -> usize {
        if step.is_zero() {
            return 0;
        }
        let mut ticks = 0;
        while self.has_active_animations() {
            self.tick(step);
            ticks += 1;
        }
        ticks
    }
}
