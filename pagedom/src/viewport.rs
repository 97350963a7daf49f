use std::sync::Arc;

use crate::page::Page;

/// A `(min-width: N)` media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaQuery {
    min_width: u16,
}

impl MediaQuery {
    pub fn min_width(min_width: u16) -> Self {
        Self { min_width }
    }

    /// Parse a CSS width such as `"768px"`.
    pub fn parse(value: &str) -> Option<Self> {
        parse_width(value).map(Self::min_width)
    }

    pub fn threshold(&self) -> u16 {
        self.min_width
    }

    /// Inclusive: a width equal to the threshold matches.
    pub fn matches(&self, width: u16) -> bool {
        width >= self.min_width
    }
}

/// Parse a pixel width: `"768px"`, `"768"` or `"0"`. Other units are rejected.
pub fn parse_width(value: &str) -> Option<u16> {
    let value = value.trim();
    let number = value.strip_suffix("px").unwrap_or(value).trim();
    number.parse().ok()
}

/// Called with the new width after every viewport change.
pub type ViewportHandler = Arc<dyn Fn(&mut Page, u16) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u64);

#[derive(Default)]
pub(crate) struct Viewport {
    pub width: u16,
    next_id: u64,
    observers: Vec<(ObserverId, ViewportHandler)>,
}

impl std::fmt::Debug for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Viewport")
            .field("width", &self.width)
            .field(
                "observers",
                &self.observers.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Viewport {
    pub fn new(width: u16) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn observe(&mut self, handler: ViewportHandler) -> ObserverId {
        self.next_id += 1;
        let id = ObserverId(self.next_id);
        self.observers.push((id, handler));
        id
    }

    pub fn unobserve(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    pub fn contains(&self, id: ObserverId) -> bool {
        self.observers.iter().any(|(observer, _)| *observer == id)
    }

    pub fn snapshot(&self) -> Vec<(ObserverId, ViewportHandler)> {
        self.observers
            .iter()
            .map(|(id, handler)| (*id, Arc::clone(handler)))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_width() {
        assert_eq!(parse_width("768px"), Some(768));
        assert_eq!(parse_width(" 1024 "), Some(1024));
        assert_eq!(parse_width("0px"), Some(0));
        assert_eq!(parse_width("48em"), None);
        assert_eq!(parse_width("wide"), None);
    }

    #[test]
    fn test_media_query_is_inclusive() {
        let mq = MediaQuery::min_width(768);
        assert!(!mq.matches(767));
        assert!(mq.matches(768));
        assert!(mq.matches(769));
    }
}
