//! A set of disclosures, optionally exclusive.

use std::sync::{Arc, RwLock};

use log::debug;
use pagedom::Page;

use crate::lifecycle::{Lifecycle, Subscription};
use crate::settle::Settle;
use crate::widgets::disclosure::Disclosure;

/// Owns an ordered set of disclosures.
///
/// When exclusive, a member about to open closes every other member. The
/// close requests are not awaited; the opening member does not wait for its
/// siblings to collapse.
#[derive(Debug, Clone)]
pub struct DisclosureGroup {
    members: Vec<Disclosure>,
    exclusive: bool,
    subscriptions: Arc<RwLock<Vec<Subscription>>>,
}

impl DisclosureGroup {
    pub fn bind(members: Vec<Disclosure>, exclusive: bool) -> Self {
        let mut subscriptions = Vec::new();

        if exclusive {
            for (index, member) in members.iter().enumerate() {
                let others: Vec<_> = members
                    .iter()
                    .enumerate()
                    .filter(|(other, _)| *other != index)
                    .map(|(_, other)| other.downgrade())
                    .collect();

                subscriptions.push(member.on(Lifecycle::BeforeOpen, move |page, _| {
                    for other in others.iter().filter_map(|weak| weak.upgrade()) {
                        if other.target_state() {
                            other.close(page, None);
                        }
                    }
                }));
            }
        }

        debug!(
            "group bound: {} members, exclusive={}",
            members.len(),
            exclusive
        );

        Self {
            members,
            exclusive,
            subscriptions: Arc::new(RwLock::new(subscriptions)),
        }
    }

    pub fn members(&self) -> &[Disclosure] {
        &self.members
    }

    pub fn member(&self, index: usize) -> Option<&Disclosure> {
        self.members.get(index)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_exclusive(&self) -> bool {
        self.exclusive
    }

    /// Indices of members whose settled state is open.
    pub fn open_members(&self) -> Vec<usize> {
        self.members
            .iter()
            .enumerate()
            .filter(|(_, member)| member.is_open())
            .map(|(index, _)| index)
            .collect()
    }

    /// Open one member. `None` for an out-of-range index.
    pub fn open(&self, page: &mut Page, index: usize) -> Option<Settle> {
        self.members.get(index).map(|member| member.open(page, None))
    }

    /// Start closing every member that is open or opening.
    pub fn close_all(&self, page: &mut Page) {
        for member in self.members.iter().filter(|member| member.target_state()) {
            member.close(page, None);
        }
    }

    /// Wire click-to-toggle on every member's trigger.
    pub fn wire_triggers(&self, page: &mut Page) {
        for member in &self.members {
            member.wire_trigger(page);
        }
    }

    /// Drop the exclusivity observers and every member's listeners.
    pub fn unbind(&self, page: &mut Page) {
        let subscriptions = match self.subscriptions.write() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => Vec::new(),
        };
        for subscription in subscriptions {
            subscription.unsubscribe();
        }
        for member in &self.members {
            member.unbind(page);
        }
    }
}
