//! Disclosure widget - a trigger that expands and collapses a content element.
//!
//! A `Disclosure` keeps its open/closed state in memory and projects it onto
//! the page: `aria-expanded` on the trigger, `aria-hidden` on the content and
//! a boolean `open` attribute on its marker element. Opening and closing run
//! a height animation on the content; the returned [`Settle`](crate::Settle)
//! resolves once the transition has finished or been replaced.
//!
//! # Example
//!
//! ```ignore
//! let details = Disclosure::bind(&mut page, "details-trigger", "details-body")?;
//! details.wire_trigger(&mut page);
//!
//! let mut settle = details.open(&mut page, None);
//! page.settle(Duration::from_millis(16));
//! assert_eq!(settle.try_outcome(), Some(Outcome::Settled));
//! ```

mod events;
mod state;

pub use state::{Disclosure, DisclosureBuilder, DisclosureId, WeakDisclosure};
