//! Widget errors.

use thiserror::Error;

/// Errors raised while mounting or addressing widgets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    /// A required structural element is absent. Fatal at mount time.
    #[error("Missing {role} element in '{container}'")]
    MissingElement {
        /// What the element is for (e.g. "trigger", "submenu").
        role: &'static str,
        /// The element searched (or the missing id itself).
        container: String,
    },

    /// A reference to a widget that is not registered.
    #[error("No widget registered with id '{0}'")]
    MissingTarget(String),

    /// A configuration attribute could not be parsed.
    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOption {
        option: &'static str,
        value: String,
    },

    /// A widget with this id is already registered.
    #[error("Widget '{0}' is already registered")]
    DuplicateId(String),
}

impl WidgetError {
    pub(crate) fn missing(role: &'static str, container: impl Into<String>) -> Self {
        Self::MissingElement {
            role,
            container: container.into(),
        }
    }
}
