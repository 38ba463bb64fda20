//! Error types for html-node.
//!
//! Construction errors surface from [`ParentNode`](crate::ParentNode)
//! validation, render errors from [`Render`](crate::Render).

use thiserror::Error;

use crate::attr::Tag;

/// Errors that can occur while building or rendering a node tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HtmlError {
    /// A parent node was constructed without a tag or without children
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A leaf node was rendered while its value is absent
    #[error("leaf node <{}> has no value", .tag.as_deref().unwrap_or("#text"))]
    MissingValue {
        /// Tag of the offending leaf, if any
        tag: Option<Tag>,
    },
}

/// Result type alias for node operations.
pub type HtmlResult<T> = Result<T, HtmlError>;

impl HtmlError {
    /// Create a missing-value error for a leaf with the given tag.
    pub fn missing_value(tag: Option<&Tag>) -> Self {
        Self::MissingValue { tag: tag.cloned() }
    }

    /// Whether this error was raised at construction time.
    pub fn is_construction(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
