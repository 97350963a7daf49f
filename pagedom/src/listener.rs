use std::sync::Arc;

use crate::event::{EventContext, EventKind};
use crate::page::Page;

/// Event handler. Receives the page so it can mutate the tree, add or remove
/// listeners and start animations.
pub type Handler = Arc<dyn Fn(&mut Page, &mut EventContext) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

struct Entry {
    id: ListenerId,
    node: String,
    kind: EventKind,
    handler: Handler,
}

/// All listeners attached to a page, in registration order.
#[derive(Default)]
pub struct Listeners {
    next_id: u64,
    entries: Vec<Entry>,
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| (e.id, &e.node, e.kind)))
            .finish()
    }
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: &str, kind: EventKind, handler: Handler) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.entries.push(Entry {
            id,
            node: node.to_string(),
            kind,
            handler,
        });
        id
    }

    /// Returns true if the listener was registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Snapshot of the handlers for `node`/`kind`, so dispatch can run them
    /// while the registry is being modified.
    pub fn handlers_for(&self, node: &str, kind: EventKind) -> Vec<(ListenerId, Handler)> {
        self.entries
            .iter()
            .filter(|e| e.node == node && e.kind == kind)
            .map(|e| (e.id, Arc::clone(&e.handler)))
            .collect()
    }

    pub fn count_for(&self, node: &str, kind: EventKind) -> usize {
        self.entries
            .iter()
            .filter(|e| e.node == node && e.kind == kind)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
