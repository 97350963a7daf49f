//! Transitions and event wiring for the Disclosure widget.

use std::time::Duration;

use log::{debug, trace};
use pagedom::{EventKind, HeightTarget, Page, Settlement, TransitionConfig};

use crate::lifecycle::Lifecycle;
use crate::settle::{Outcome, Settle};

use super::state::{Disclosure, Pending};

impl Disclosure {
    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Expand the content. `duration` overrides the configured one.
    pub fn open(&self, page: &mut Page, duration: Option<Duration>) -> Settle {
        self.request(page, true, duration)
    }

    /// Collapse the content. `duration` overrides the configured one.
    pub fn close(&self, page: &mut Page, duration: Option<Duration>) -> Settle {
        self.request(page, false, duration)
    }

    /// Close if open (or opening), otherwise open.
    pub fn toggle(&self, page: &mut Page) -> Settle {
        if self.target_state() {
            self.close(page, None)
        } else {
            self.open(page, None)
        }
    }

    /// Jump to `open` without animating or notifying observers.
    ///
    /// Any in-flight request resolves as superseded.
    pub fn reset(&self, page: &mut Page, open: bool) {
        let (stale, content) = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            guard.open = open;
            (guard.pending.take(), guard.content.clone())
        };

        page.animate_height(
            &content,
            height_target(open),
            TransitionConfig::instant(),
            Box::new(|_: &mut Page, _: Settlement| {}),
        );
        self.mirror(page);

        if let Some(stale) = stale {
            for waiter in stale.waiters {
                waiter.resolve(Outcome::Superseded);
            }
        }
    }

    fn request(&self, page: &mut Page, opening: bool, duration: Option<Duration>) -> Settle {
        let (resolver, settle) = Settle::pending();

        let (generation, stale, content, config) = {
            let Ok(mut guard) = self.inner.write() else {
                return Settle::ready(Outcome::Superseded);
            };

            let settled_open = guard.open;
            match guard.pending.as_mut() {
                // Same direction while in flight: wait for the running transition
                Some(pending) if pending.target == opening => {
                    pending.waiters.push(resolver);
                    return settle;
                }
                None if settled_open == opening => return Settle::ready(Outcome::Settled),
                _ => {}
            }

            guard.generation += 1;
            let generation = guard.generation;
            let stale = guard.pending.replace(Pending {
                target: opening,
                generation,
                waiters: vec![resolver],
            });
            let config = match duration {
                Some(duration) => TransitionConfig::new(duration, guard.transition.easing),
                None => guard.transition,
            };
            (generation, stale, guard.content.clone(), config)
        };

        debug!(
            "{}: {} over {:?}",
            self.id,
            if opening { "opening" } else { "closing" },
            config.duration
        );

        if let Some(stale) = stale {
            for waiter in stale.waiters {
                waiter.resolve(Outcome::Superseded);
            }
        }

        self.observers.emit(page, Lifecycle::before(opening));

        // An observer may have issued a conflicting request
        if !self.is_current(generation) {
            trace!("{}: request {} replaced by an observer", self.id, generation);
            return settle;
        }

        let this = self.downgrade();
        page.animate_height(
            &content,
            height_target(opening),
            config,
            Box::new(move |page: &mut Page, settlement: Settlement| {
                if settlement == Settlement::Superseded {
                    return;
                }
                if let Some(disclosure) = this.upgrade() {
                    disclosure.finish(page, generation);
                }
            }),
        );

        settle
    }

    fn is_current(&self, generation: u64) -> bool {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .pending
                    .as_ref()
                    .is_some_and(|pending| pending.generation == generation)
            })
            .unwrap_or(false)
    }

    fn finish(&self, page: &mut Page, generation: u64) {
        let pending = {
            let Ok(mut guard) = self.inner.write() else {
                return;
            };
            if !guard
                .pending
                .as_ref()
                .is_some_and(|pending| pending.generation == generation)
            {
                return;
            }
            let Some(pending) = guard.pending.take() else {
                return;
            };
            guard.open = pending.target;
            pending
        };

        self.mirror(page);
        debug!(
            "{}: {}",
            self.id,
            if pending.target { "opened" } else { "closed" }
        );

        for waiter in pending.waiters {
            waiter.resolve(Outcome::Settled);
        }
        self.observers.emit(page, Lifecycle::after(pending.target));
    }

    // -------------------------------------------------------------------------
    // Listeners
    // -------------------------------------------------------------------------

    /// Toggle on trigger clicks. Calling this twice does not add a second
    /// listener.
    pub fn wire_trigger(&self, page: &mut Page) {
        if self.listener_count() > 0 {
            return;
        }
        let trigger = self.trigger();
        let this = self.downgrade();
        let id = page.add_listener(&trigger, EventKind::Click, move |page, _| {
            if let Some(disclosure) = this.upgrade() {
                disclosure.toggle(page);
            }
        });
        if let Ok(mut guard) = self.inner.write() {
            guard.listeners.push(id);
        }
    }

    /// Remove every listener this disclosure added. Returns how many were
    /// removed.
    pub fn unbind(&self, page: &mut Page) -> usize {
        let listeners = match self.inner.write() {
            Ok(mut guard) => std::mem::take(&mut guard.listeners),
            Err(_) => return 0,
        };
        listeners
            .into_iter()
            .filter(|id| page.remove_listener(*id))
            .count()
    }
}

fn height_target(open: bool) -> HeightTarget {
    if open {
        HeightTarget::Expand
    } else {
        HeightTarget::Collapse
    }
}
