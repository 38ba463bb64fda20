//! HTML Rendering for node trees
//!
//! Renders leaves, parents and whole trees to HTML fragment strings.
//! The default [`RenderConfig`] produces the reference byte output: values
//! and attribute values are emitted verbatim, and an image leaf without a
//! value gets an empty body with a closing tag (`<img src="u"></img>`).

use crate::attr::{AttrsExt, write_attrs};
use crate::error::{HtmlError, HtmlResult};
use crate::node::{LeafNode, Node, ParentNode};

// =============================================================================
// RenderConfig
// =============================================================================

/// How an image leaf without a value is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoidStyle {
    /// `<img src="u"></img>`
    #[default]
    ClosingTag,
    /// `<img src="u" />`
    SelfClosing,
}

/// Configuration for HTML rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// How image leaves without a value are closed.
    pub void_style: VoidStyle,
    /// Escape `& < >` in leaf values.
    pub escape_text: bool,
    /// Escape `& " < >` in attribute values.
    pub escape_attrs: bool,
}

impl RenderConfig {
    /// Reference output (closing tags, no escaping).
    pub const REFERENCE: Self = Self {
        void_style: VoidStyle::ClosingTag,
        escape_text: false,
        escape_attrs: false,
    };

    /// Self-closing images, everything escaped.
    pub const STRICT: Self = Self {
        void_style: VoidStyle::SelfClosing,
        escape_text: true,
        escape_attrs: true,
    };

    /// Create a new config.
    pub fn new(void_style: VoidStyle, escape: bool) -> Self {
        Self {
            void_style,
            escape_text: escape,
            escape_attrs: escape,
        }
    }

    /// Set how valueless images are closed.
    pub fn with_void_style(mut self, void_style: VoidStyle) -> Self {
        self.void_style = void_style;
        self
    }

    /// Enable or disable escaping of values and attribute values.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self.escape_attrs = escape;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::REFERENCE
    }
}

// =============================================================================
// Render trait
// =============================================================================

/// Rendering capability shared by every node shape.
pub trait Render {
    /// Append HTML to `out`.
    ///
    /// On error `out` is left exactly as it was before the call.
    fn render_into(&self, config: &RenderConfig, out: &mut String) -> HtmlResult<()>;

    /// Render to a new string with the given config.
    fn render_with(&self, config: &RenderConfig) -> HtmlResult<String> {
        let mut out = String::new();
        self.render_into(config, &mut out)?;
        Ok(out)
    }

    /// Render to a new string with the reference config.
    fn render(&self) -> HtmlResult<String> {
        self.render_with(&RenderConfig::REFERENCE)
    }
}

impl Render for LeafNode {
    fn render_into(&self, config: &RenderConfig, out: &mut String) -> HtmlResult<()> {
        atomically(out, |out| render_leaf(self, config, out))
    }
}

impl Render for ParentNode {
    fn render_into(&self, config: &RenderConfig, out: &mut String) -> HtmlResult<()> {
        atomically(out, |out| render_parent(self, config, out))
    }
}

impl Render for Node {
    fn render_into(&self, config: &RenderConfig, out: &mut String) -> HtmlResult<()> {
        atomically(out, |out| render_node(self, config, out))
    }
}

/// Run `f`, truncating `out` back to its original length if it fails.
fn atomically(
    out: &mut String,
    f: impl FnOnce(&mut String) -> HtmlResult<()>,
) -> HtmlResult<()> {
    let start = out.len();
    let result = f(out);
    if result.is_err() {
        out.truncate(start);
    }
    result
}

// =============================================================================
// Node Rendering
// =============================================================================

fn render_node(node: &Node, config: &RenderConfig, output: &mut String) -> HtmlResult<()> {
    match node {
        Node::Leaf(leaf) => render_leaf(leaf, config, output),
        Node::Parent(parent) => render_parent(parent, config, output),
    }
}

fn render_leaf(leaf: &LeafNode, config: &RenderConfig, output: &mut String) -> HtmlResult<()> {
    let Some(tag) = leaf.tag() else {
        let value = leaf.value().ok_or_else(|| missing_value(leaf))?;
        push_text(value, config, output);
        return Ok(());
    };

    let value = match leaf.value() {
        Some(value) => value,
        None if tag == IMAGE_TAG => {
            open_tag(tag, leaf, config, output);
            if config.void_style == VoidStyle::SelfClosing {
                output.pop();
                output.push_str(" />");
            } else {
                close_tag(tag, output);
            }
            return Ok(());
        }
        None => return Err(missing_value(leaf)),
    };

    open_tag(tag, leaf, config, output);
    push_text(value, config, output);
    close_tag(tag, output);
    Ok(())
}

fn render_parent(parent: &ParentNode, config: &RenderConfig, output: &mut String) -> HtmlResult<()> {
    let tag = parent.tag();
    output.push('<');
    output.push_str(tag);
    write_attrs(parent.attrs(), config.escape_attrs, output);
    output.push('>');

    for child in parent.children() {
        render_node(child, config, output)?;
    }

    close_tag(tag, output);
    Ok(())
}

fn open_tag(tag: &str, leaf: &LeafNode, config: &RenderConfig, output: &mut String) {
    output.push('<');
    output.push_str(tag);
    write_attrs(leaf.attrs(), config.escape_attrs, output);
    output.push('>');
}

fn close_tag(tag: &str, output: &mut String) {
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
}

fn push_text(value: &str, config: &RenderConfig, output: &mut String) {
    if config.escape_text {
        escape_html(value, output);
    } else {
        output.push_str(value);
    }
}

fn missing_value(leaf: &LeafNode) -> HtmlError {
    tracing::debug!(
        tag = leaf.tag().unwrap_or("#text"),
        attrs = %leaf.attrs().to_html(),
        "leaf node rendered without a value"
    );
    HtmlError::missing_value(leaf.tag_ref())
}

/// Escape HTML special characters.
fn escape_html(s: &str, output: &mut String) {
    for c in s.chars() {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            _ => output.push(c),
        }
    }
}

/// Tag of the only leaf that renders without a value.
///
/// Image leaves carry their content in `src`; every other leaf without a
/// value fails with [`HtmlError::MissingValue`].
pub const IMAGE_TAG: &str = "img";

// =============================================================================
// Batch Rendering
// =============================================================================

/// Render independent trees, results in input order.
#[cfg(not(feature = "parallel"))]
pub fn render_batch(nodes: &[Node], config: &RenderConfig) -> Vec<HtmlResult<String>> {
    nodes.iter().map(|node| node.render_with(config)).collect()
}

/// Render independent trees in parallel, results in input order.
#[cfg(feature = "parallel")]
pub fn render_batch(nodes: &[Node], config: &RenderConfig) -> Vec<HtmlResult<String>> {
    use rayon::prelude::*;

    nodes.par_iter().map(|node| node.render_with(config)).collect()
}

// =============================================================================
// Tests
// =============================================================================
