#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    /// Text; each line renders as one row.
    Text(String),
    Children(Vec<super::Element>),
}
