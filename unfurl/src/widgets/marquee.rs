//! Marquee: an endlessly scrolling strip of slides.
//!
//! Scrolling itself is left to styles; the widget duplicates the slides into
//! a track so the strip can loop, and exposes the play state as a custom
//! property.

use std::sync::{Arc, RwLock};

use log::{debug, info};
use pagedom::{Element, EventKind, ListenerId, Page};
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

pub const TRACK_TAG: &str = "marquee-track";
const PLAY_STATE: &str = "--animation-play-state";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MarqueeOptions {
    pub pause_on_hover: bool,
}

impl MarqueeOptions {
    pub fn pause_on_hover(mut self, enabled: bool) -> Self {
        self.pause_on_hover = enabled;
        self
    }

    pub fn from_element(page: &Page, host: &str) -> Self {
        Self {
            pause_on_hover: page.has_attribute(host, "data-pause-on-hover"),
        }
    }
}

/// A mounted marquee.
#[derive(Debug, Clone)]
pub struct Marquee {
    host: String,
    track: String,
    options: MarqueeOptions,
    slide_count: usize,
    listeners: Arc<RwLock<Vec<ListenerId>>>,
}

impl Marquee {
    pub fn mount(page: &mut Page, host: &str) -> Result<Self, WidgetError> {
        let options = MarqueeOptions::from_element(page, host);
        Self::mount_with(page, host, options)
    }

    /// Move the host's slides into a track followed by a copy of each.
    /// Copies get ids suffixed with `clone` and `data-marquee="clone-slide"`.
    /// A host that already holds a track is refused with `DuplicateId`.
    pub fn mount_with(
        page: &mut Page,
        host: &str,
        options: MarqueeOptions,
    ) -> Result<Self, WidgetError> {
        let element = page
            .element_mut(host)
            .ok_or_else(|| WidgetError::missing("marquee", host))?;

        let track_id = format!("{host}-track");
        if element
            .child_elements()
            .iter()
            .any(|child| child.tag == TRACK_TAG)
        {
            return Err(WidgetError::DuplicateId(track_id));
        }

        let originals = element.take_children();
        let slide_count = originals.len();
        let clones: Vec<Element> = originals
            .iter()
            .map(|slide| {
                let mut clone = slide.deep_clone("clone");
                clone.set_attribute("data-marquee", "clone-slide");
                clone
            })
            .collect();

        element.push_child(
            Element::new(TRACK_TAG)
                .id(track_id.clone())
                .children(originals)
                .children(clones),
        );
        element.set_property("--items-count", slide_count.to_string());
        debug!("marquee {}: {} slides duplicated", host, slide_count);

        let mut listeners = Vec::new();
        if options.pause_on_hover {
            let target = host.to_string();
            listeners.push(page.add_listener(host, EventKind::MouseEnter, move |page, _| {
                page.set_property(&target, PLAY_STATE, "paused");
            }));
            let target = host.to_string();
            listeners.push(page.add_listener(host, EventKind::MouseLeave, move |page, _| {
                page.set_property(&target, PLAY_STATE, "running");
            }));
        }

        info!("marquee {} mounted", host);
        Ok(Self {
            host: host.to_string(),
            track: track_id,
            options,
            slide_count,
            listeners: Arc::new(RwLock::new(listeners)),
        })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn track(&self) -> &str {
        &self.track
    }

    pub fn options(&self) -> MarqueeOptions {
        self.options
    }

    /// Number of original slides.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn pause(&self, page: &mut Page) {
        page.set_property(&self.host, PLAY_STATE, "paused");
    }

    pub fn resume(&self, page: &mut Page) {
        page.set_property(&self.host, PLAY_STATE, "running");
    }

    pub fn is_paused(&self, page: &Page) -> bool {
        page.get_property(&self.host, PLAY_STATE) == Some("paused")
    }

    pub fn unmount(&self, page: &mut Page) {
        let listeners = match self.listeners.write() {
            Ok(mut guard) => std::mem::take(&mut *guard),
            Err(_) => return,
        };
        for id in listeners {
            page.remove_listener(id);
        }
    }
}
