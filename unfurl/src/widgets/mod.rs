//! Disclosure-based widgets.
//!
//! Every widget here keeps its state in memory behind a cheap-to-clone
//! handle and writes that state to the page as attributes. Listeners a
//! widget adds are tracked by id and removed again by its `unmount` (or
//! `unbind`).

pub mod accordion;
pub mod disclosure;
pub mod dropdown;
pub mod group;
pub mod marquee;
pub mod mega_menu;
pub mod responsive;

pub use accordion::{Accordion, AccordionOptions};
pub use disclosure::{Disclosure, DisclosureBuilder, DisclosureId, WeakDisclosure};
pub use dropdown::Dropdown;
pub use group::DisclosureGroup;
pub use marquee::{Marquee, MarqueeOptions};
pub use mega_menu::{MegaMenu, MegaMenuOptions, MenuEvent, MenuItem, MenuToggler, MenuTree};
pub use responsive::{Mode, ModeBehavior, ResponsiveSwitcher};
