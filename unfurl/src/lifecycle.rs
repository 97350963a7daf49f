//! Observer registration for widget notifications.
//!
//! Observers are called with the page, after the widget has released its own
//! locks, so they may call back into any widget (including the emitter).

use std::sync::{Arc, RwLock, Weak};

use pagedom::Page;

/// Disclosure state-transition boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    BeforeOpen,
    AfterOpen,
    BeforeClose,
    AfterClose,
}

impl Lifecycle {
    pub fn before(opening: bool) -> Self {
        if opening {
            Lifecycle::BeforeOpen
        } else {
            Lifecycle::BeforeClose
        }
    }

    pub fn after(opening: bool) -> Self {
        if opening {
            Lifecycle::AfterOpen
        } else {
            Lifecycle::AfterClose
        }
    }
}

pub type Observer<E> = Arc<dyn Fn(&mut Page, E) + Send + Sync>;

struct ObserverList<E> {
    next_id: u64,
    entries: Vec<(u64, Observer<E>)>,
}

/// A shared, cloneable list of observers for events of type `E`.
pub(crate) struct Observers<E> {
    list: Arc<RwLock<ObserverList<E>>>,
}

impl<E> Clone for Observers<E> {
    fn clone(&self) -> Self {
        Self {
            list: Arc::clone(&self.list),
        }
    }
}

impl<E> std::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers").field("len", &self.len()).finish()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self {
            list: Arc::new(RwLock::new(ObserverList {
                next_id: 0,
                entries: Vec::new(),
            })),
        }
    }
}

impl<E: Copy + Send + Sync + 'static> Observers<E> {
    pub fn subscribe(&self, observer: Observer<E>) -> Subscription {
        let id = match self.list.write() {
            Ok(mut guard) => {
                guard.next_id += 1;
                let id = guard.next_id;
                guard.entries.push((id, observer));
                id
            }
            Err(_) => 0,
        };

        let weak: Weak<RwLock<ObserverList<E>>> = Arc::downgrade(&self.list);
        Subscription {
            id,
            remove: Box::new(move || {
                let Some(list) = weak.upgrade() else {
                    return false;
                };
                let Ok(mut guard) = list.write() else {
                    return false;
                };
                let before = guard.entries.len();
                guard.entries.retain(|(entry, _)| *entry != id);
                guard.entries.len() != before
            }),
        }
    }

    /// Call every observer registered at the time of the call. Observers
    /// unsubscribed by an earlier observer in the same emit are skipped.
    pub fn emit(&self, page: &mut Page, event: E) {
        let snapshot: Vec<(u64, Observer<E>)> = match self.list.read() {
            Ok(guard) => guard
                .entries
                .iter()
                .map(|(id, observer)| (*id, Arc::clone(observer)))
                .collect(),
            Err(_) => return,
        };

        for (id, observer) in snapshot {
            if !self.is_registered(id) {
                continue;
            }
            observer(page, event);
        }
    }

    fn is_registered(&self, id: u64) -> bool {
        self.list
            .read()
            .map(|guard| guard.entries.iter().any(|(entry, _)| *entry == id))
            .unwrap_or(false)
    }
}

impl<E> Observers<E> {
    pub fn len(&self) -> usize {
        self.list.read().map(|guard| guard.entries.len()).unwrap_or(0)
    }
}

/// Handle returned by `subscribe`. Dropping it keeps the observer
/// registered; call [`Subscription::unsubscribe`] to remove it.
pub struct Subscription {
    id: u64,
    remove: Box<dyn FnOnce() -> bool + Send + Sync>,
}

impl Subscription {
    /// Remove the observer. Returns false if it was already gone.
    pub fn unsubscribe(self) -> bool {
        (self.remove)()
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
