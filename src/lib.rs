//! html-node - HTML node trees from typed inline text
//!
//! ## Core Concepts
//!
//! **Leaf and Parent nodes**: a [`Node`] is either a [`LeafNode`] (no
//! children; a literal value or a self-describing element like `<img>`) or a
//! [`ParentNode`] (a tag wrapping an ordered, owned list of children).
//!
//! **Text spans**: a [`TextSpan`] is typed inline content (plain, bold,
//! italic, code, link, image). [`text_span_to_node`] maps each span to a
//! single leaf.
//!
//! ## Modules
//! - `node`: Node/LeafNode/ParentNode types
//! - `span`: TextSpan and TextType
//! - `convert`: span → leaf translation
//! - `render`: `Render` trait and `RenderConfig`
//! - `attr`: Attribute system
//! - `error`: Error types
//!
//! ## Usage
//!
//! ```
//! use html_node::{ParentNode, Render, TextSpan, text_spans_to_nodes};
//!
//! let spans = [TextSpan::plain("Hello, "), TextSpan::bold("world")];
//! let paragraph = ParentNode::new("p", text_spans_to_nodes(&spans))?;
//!
//! assert_eq!(paragraph.render()?, "<p>Hello, <b>world</b></p>");
//! # Ok::<(), html_node::HtmlError>(())
//! ```

#[macro_use]
mod macros;

// =============================================================================
// Core modules
// =============================================================================

/// Node types: Node, LeafNode, ParentNode
pub mod node;

/// Typed text spans
pub mod span;

/// Text span translation
pub mod convert;

/// HTML rendering
pub mod render;

/// Attribute types
pub mod attr;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{Children, LeafNode, Node, ParentBuilder, ParentNode};

// Spans
pub use span::{TextSpan, TextType};

// Translation
pub use convert::{text_span_to_node, text_spans_to_nodes};

// Rendering
pub use render::{Render, RenderConfig, VoidStyle, render_batch};

// Attribute types
pub use attr::{Attrs, AttrsExt, Tag};

// Error types
pub use error::{HtmlError, HtmlResult};

// =============================================================================
// Tests
// =============================================================================
