pub mod animation;
pub mod element;
pub mod event;
pub mod listener;
pub mod page;
pub mod transitions;
pub mod traverse;
pub mod types;
pub mod viewport;

pub use animation::{AnimationToken, Completion, HeightTarget, Settlement};
pub use element::{Content, Element};
pub use event::{DispatchOutcome, Event, EventContext, EventKind};
pub use listener::{Handler, ListenerId};
pub use page::Page;
pub use transitions::{Easing, TransitionConfig};
pub use traverse::{traverse, Strategy, Visit};
pub use types::Size;
pub use viewport::{parse_width, MediaQuery, ObserverId};
