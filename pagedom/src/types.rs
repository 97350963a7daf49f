/// Height of an element's box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    /// Sized by content (natural flow).
    #[default]
    Auto,
    /// Inline override in rows.
    Fixed(u16),
}

impl Size {
    pub fn is_auto(self) -> bool {
        matches!(self, Size::Auto)
    }
}
