//! Prelude for common imports.
//!
//! ```
//! use html_node::prelude::*;
//! ```

// Node types
pub use crate::node::{Children, LeafNode, Node, ParentBuilder, ParentNode};

// Spans and translation
pub use crate::convert::{text_span_to_node, text_spans_to_nodes};
pub use crate::span::{TextSpan, TextType};

// Attributes
pub use crate::attr::{Attrs, AttrsExt, Tag};

// Render
pub use crate::render::{Render, RenderConfig, VoidStyle, render_batch};

// Error
pub use crate::error::{HtmlError, HtmlResult};
