//! Node types: `Node`, `LeafNode`, `ParentNode`.
//!
//! A tree is made of leaves (no children; a literal value or a
//! self-describing tagged element) and parents (a tag wrapping an ordered,
//! exclusively owned sequence of children).
//!
//! # Key Features
//!
//! - Closed sum type, no trait objects
//! - Structural equality over tag, value, children and attributes
//! - Compact `Debug` output: the opening tag with its rendered attributes

mod leaf;
mod parent;

pub use leaf::LeafNode;
pub use parent::{ParentBuilder, ParentNode};

use std::fmt;

use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt};

/// Node in an HTML tree - either Leaf or Parent.
#[derive(Clone)]
pub enum Node {
    Leaf(LeafNode),
    Parent(Box<ParentNode>),
}

impl Node {
    // Generates for each variant (leaf -> Leaf, parent -> Parent):
    //   - is_xxx(&self) -> bool
    //   - as_xxx(&self) -> Option<&XxxNode>
    impl_node_accessors!(leaf, parent);

    /// Tag name, if any (always present for parents)
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.tag(),
            Node::Parent(parent) => Some(parent.tag()),
        }
    }

    /// Literal value, if any
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Leaf(leaf) => leaf.value(),
            Node::Parent(parent) => parent.value(),
        }
    }

    /// Child nodes (always empty for leaves)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf(_) => &[],
            Node::Parent(parent) => parent.children(),
        }
    }

    /// Attributes in insertion order
    pub fn attrs(&self) -> &Attrs {
        match self {
            Node::Leaf(leaf) => leaf.attrs(),
            Node::Parent(parent) => parent.attrs(),
        }
    }

    /// Rendered attribute string (leading space when non-empty)
    pub fn attrs_html(&self) -> String {
        self.attrs().to_html()
    }
}

/// Type alias for children collection.
pub type Children = SmallVec<[Node; 4]>;

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<ParentNode> for Node {
    fn from(parent: ParentNode) -> Self {
        Node::Parent(Box::new(parent))
    }
}

/// Structural equality over the four node parts.
///
/// A leaf and a childless parent with the same tag, value and attributes
/// compare equal.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => a == b,
            (Node::Parent(a), Node::Parent(b)) => a == b,
            _ => {
                self.tag() == other.tag()
                    && self.value() == other.value()
                    && self.children() == other.children()
                    && self.attrs().same_pairs(other.attrs())
            }
        }
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => fmt::Debug::fmt(leaf, f),
            Node::Parent(parent) => fmt::Debug::fmt(&**parent, f),
        }
    }
}

/// Write `<tag attrs>`, with `#text` standing in for an absent tag.
fn fmt_open_tag(tag: Option<&str>, attrs: &Attrs, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "<{}{}>", tag.unwrap_or("#text"), attrs.to_html())
}
