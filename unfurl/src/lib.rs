//! Headless collapsible-disclosure widgets over a [`pagedom`] page.
//!
//! Widgets are mounted on element ids, keep their open/closed state in
//! memory and mirror it onto the page as attributes. Mount a whole document
//! at once with [`mount_document`], or bind individual widgets directly.

pub mod error;
pub mod lifecycle;
pub mod registry;
pub mod settle;
pub mod widgets;

pub use error::WidgetError;
pub use lifecycle::{Lifecycle, Subscription};
pub use registry::{mount_document, SharedRegistry, Widget, WidgetRegistry};
pub use settle::{Outcome, Settle};
pub use widgets::*;

pub mod prelude {
    pub use crate::error::WidgetError;
    pub use crate::lifecycle::{Lifecycle, Subscription};
    pub use crate::registry::{mount_document, SharedRegistry, Widget, WidgetRegistry};
    pub use crate::settle::{Outcome, Settle};
    pub use crate::widgets::{
        Accordion, AccordionOptions, Disclosure, DisclosureGroup, Dropdown, Marquee,
        MarqueeOptions, MegaMenu, MegaMenuOptions, MenuEvent, MenuToggler, Mode, ModeBehavior,
        ResponsiveSwitcher,
    };

    pub use pagedom::{Element, Event, EventKind, MediaQuery, Page, TransitionConfig};
}
