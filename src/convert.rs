//! Text span → leaf node translation
//!
//! | kind   | leaf                                   |
//! |--------|----------------------------------------|
//! | Plain  | untagged, value = text                 |
//! | Bold   | `<b>`, value = text                    |
//! | Italic | `<i>`, value = text                    |
//! | Code   | `<code>`, value = text                 |
//! | Link   | `<a href=url>`, value = text           |
//! | Image  | `<img src=url>`, no value              |
//!
//! Translation never fails. A link or image without a URL gets an empty
//! attribute value; validation is left to the caller.

use crate::node::{Children, LeafNode, Node};
use crate::render::IMAGE_TAG;
use crate::span::{TextSpan, TextType};

/// Translate a text span into a leaf node.
pub fn text_span_to_node(span: &TextSpan) -> LeafNode {
    tracing::trace!(kind = %span.kind(), "translating text span");

    let url = span.url().unwrap_or_default();
    match span.kind() {
        TextType::Plain => LeafNode::text(span.text()),
        TextType::Bold => LeafNode::new("b", span.text()),
        TextType::Italic => LeafNode::new("i", span.text()),
        TextType::Code => LeafNode::new("code", span.text()),
        TextType::Link => LeafNode::new("a", span.text()).with_attr("href", url),
        TextType::Image => LeafNode::empty(IMAGE_TAG).with_attr("src", url),
    }
}

/// Translate a sequence of spans into children for a parent node.
pub fn text_spans_to_nodes<'a>(spans: impl IntoIterator<Item = &'a TextSpan>) -> Children {
    spans
        .into_iter()
        .map(|span| Node::Leaf(text_span_to_node(span)))
        .collect()
}

impl From<&TextSpan> for LeafNode {
    fn from(span: &TextSpan) -> Self {
        text_span_to_node(span)
    }
}

impl From<TextSpan> for LeafNode {
    fn from(span: TextSpan) -> Self {
        text_span_to_node(&span)
    }
}

impl From<&TextSpan> for Node {
    fn from(span: &TextSpan) -> Self {
        Node::Leaf(text_span_to_node(span))
    }
}

impl From<TextSpan> for Node {
    fn from(span: TextSpan) -> Self {
        Node::Leaf(text_span_to_node(&span))
    }
}
