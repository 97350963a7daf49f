/// Kinds of pointer events a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
}

impl EventKind {
    /// Clicks bubble to ancestors; enter/leave are delivered to the target only.
    pub fn bubbles(self) -> bool {
        matches!(self, EventKind::Click)
    }
}

/// High-level events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: String,
}

impl Event {
    pub fn new(kind: EventKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::new(EventKind::Click, target)
    }

    pub fn mouse_enter(target: impl Into<String>) -> Self {
        Self::new(EventKind::MouseEnter, target)
    }

    pub fn mouse_leave(target: impl Into<String>) -> Self {
        Self::new(EventKind::MouseLeave, target)
    }
}

/// Per-dispatch state handed to every listener.
#[derive(Debug, Clone)]
pub struct EventContext {
    kind: EventKind,
    target: String,
    current_target: String,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl EventContext {
    pub(crate) fn new(kind: EventKind, target: String) -> Self {
        Self {
            kind,
            current_target: target.clone(),
            target,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    pub(crate) fn set_current_target(&mut self, id: &str) {
        self.current_target = id.to_string();
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The element the event was dispatched at.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The element whose listener is running.
    pub fn current_target(&self) -> &str {
        &self.current_target
    }

    /// Stop delivery to ancestors. Remaining listeners on the current
    /// element still run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Suppress the default action (e.g. link navigation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Summary of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// Number of listeners invoked.
    pub delivered: usize,
    pub default_prevented: bool,
}
