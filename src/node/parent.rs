//! Parent node type - a tagged element composed of child nodes
//!
//! Parents are validated on construction: the tag must be non-empty and the
//! children sequence must have been supplied (an empty one is fine).

use std::fmt;

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::attr::{Attrs, AttrsExt, Tag, collect_attrs};
use crate::error::{HtmlError, HtmlResult};

use super::{Children, Node, fmt_open_tag};

// =============================================================================
// ParentNode
// =============================================================================

/// Tagged element exclusively owning an ordered sequence of children
#[derive(Clone)]
pub struct ParentNode {
    tag: Tag,
    value: Option<String>,
    children: Children,
    attrs: Attrs,
}

impl ParentNode {
    /// Create a parent with a tag and children
    ///
    /// Fails with [`HtmlError::InvalidArgument`] if `tag` is empty.
    pub fn new(tag: impl Into<Tag>, children: impl IntoIterator<Item = Node>) -> HtmlResult<Self> {
        Self::builder().tag(tag).children(children).build()
    }

    /// Start building a parent node
    pub fn builder() -> ParentBuilder {
        ParentBuilder::default()
    }

    /// Create a parent from explicitly optional parts
    ///
    /// `None` children means "not supplied" and is rejected; `Some` of an
    /// empty sequence is accepted. Repeated attribute names collapse to one
    /// entry holding the last value.
    pub fn from_parts(
        tag: Option<Tag>,
        children: Option<Children>,
        value: Option<String>,
        attrs: Attrs,
    ) -> HtmlResult<Self> {
        let tag = match tag {
            Some(tag) if !tag.is_empty() => tag,
            _ => {
                tracing::debug!("rejected parent node without a tag");
                return Err(HtmlError::InvalidArgument("tag is required"));
            }
        };
        let Some(children) = children else {
            tracing::debug!(%tag, "rejected parent node without children");
            return Err(HtmlError::InvalidArgument("children are required"));
        };
        Ok(Self {
            tag,
            value,
            children,
            attrs: collect_attrs(attrs),
        })
    }

    /// Tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value carried alongside the children (never rendered)
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Child nodes in order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Attributes in insertion order
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Get attribute value by name
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get_attr(name)
    }

    /// Rendered attribute string (leading space when non-empty)
    pub fn attrs_html(&self) -> String {
        self.attrs.to_html()
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Check if the parent has no children
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|child| child.as_parent().map_or(1, ParentNode::node_count))
            .sum::<usize>()
    }
}

impl PartialEq for ParentNode {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && self.value == other.value
            && self.children == other.children
            && self.attrs.same_pairs(&other.attrs)
    }
}

impl Eq for ParentNode {}

impl fmt::Debug for ParentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_open_tag(Some(self.tag()), &self.attrs, f)
    }
}

// =============================================================================
// ParentBuilder
// =============================================================================

/// Builder for [`ParentNode`]
///
/// Tracks whether children were supplied at all, so that `build()` can tell
/// "no children given" apart from "an empty list of children".
#[derive(Debug, Clone, Default)]
pub struct ParentBuilder {
    tag: Option<Tag>,
    value: Option<String>,
    children: Option<Children>,
    attrs: Attrs,
}

impl ParentBuilder {
    /// Set the tag name
    pub fn tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the value carried by the parent
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Append children (marks children as supplied, even if empty)
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children
            .get_or_insert_with(SmallVec::new)
            .extend(children);
        self
    }

    /// Append a single child
    pub fn child(self, child: impl Into<Node>) -> Self {
        self.children([child.into()])
    }

    /// Add an attribute (updates in place if the name exists)
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Validate and build the parent node
    pub fn build(self) -> HtmlResult<ParentNode> {
        ParentNode::from_parts(self.tag, self.children, self.value, self.attrs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::LeafNode;

    fn paragraph() -> Node {
        LeafNode::new("p", "This is a paragraph").into()
    }

    #[test]
    fn test_parent_new() {
        let node = ParentNode::new("div", [paragraph()]).unwrap();
        assert_eq!(node.tag(), "div");
        assert_eq!(node.child_count(), 1);
        assert_eq!(node.value(), None);
        assert!(node.attrs().is_empty());
    }

    #[test]
    fn test_parent_empty_tag() {
        let err = ParentNode::new("", [paragraph()]).unwrap_err();
        assert_eq!(err, HtmlError::InvalidArgument("tag is required"));
    }

    #[test]
    fn test_parent_missing_tag() {
        let err = ParentNode::builder().child(paragraph()).build().unwrap_err();
        assert_eq!(err, HtmlError::InvalidArgument("tag is required"));

        let err = ParentNode::from_parts(None, Some(Children::new()), None, Attrs::new()).unwrap_err();
        assert!(err.is_construction());
    }

    #[test]
    fn test_parent_missing_children() {
        let err = ParentNode::builder().tag("div").build().unwrap_err();
        assert_eq!(err, HtmlError::InvalidArgument("children are required"));

        let err = ParentNode::from_parts(Some("div".into()), None, None, Attrs::new()).unwrap_err();
        assert_eq!(err, HtmlError::InvalidArgument("children are required"));
    }

    #[test]
    fn test_from_parts_collapses_repeated_names() {
        let attrs: Attrs = vec![
            ("class".into(), "a".into()),
            ("id".into(), "x".into()),
            ("class".into(), "b".into()),
        ];
        let node = ParentNode::from_parts(Some("div".into()), Some(Children::new()), None, attrs).unwrap();
        assert_eq!(node.attrs_html(), r#" class="b" id="x""#);

        let expected = ParentNode::builder().tag("div").attr("id", "x").attr("class", "b").children([]).build().unwrap();
        assert_eq!(node, expected);
    }

    #[test]
    fn test_parent_empty_children_is_valid() {
        let node = ParentNode::new("div", []).unwrap();
        assert!(node.is_empty());

        let node = ParentNode::builder().tag("ul").children([]).build().unwrap();
        assert!(node.is_empty());
    }

    #[test]
    fn test_builder() {
        let node = ParentNode::builder()
            .tag("div")
            .attr("class", "paragraph")
            .child(LeafNode::text("a"))
            .child(LeafNode::new("b", "b"))
            .value("kept")
            .build()
            .unwrap();

        assert_eq!(node.child_count(), 2);
        assert_eq!(node.get_attr("class"), Some("paragraph"));
        assert_eq!(node.value(), Some("kept"));
        assert_eq!(node.attrs_html(), r#" class="paragraph""#);
    }

    #[test]
    fn test_parent_eq() {
        let a = ParentNode::new("div", [paragraph()]).unwrap();
        let b = ParentNode::new("div", [paragraph()]).unwrap();
        assert_eq!(a, b);

        let with_class = ParentNode::builder()
            .tag("div")
            .child(paragraph())
            .attr("class", "paragraph")
            .build()
            .unwrap();
        assert_ne!(a, with_class);

        let with_value = ParentNode::builder().tag("div").child(paragraph()).value("v").build().unwrap();
        assert_ne!(a, with_value);
    }

    #[test]
    fn test_parent_eq_child_order() {
        let first = ParentNode::new("p", [LeafNode::text("a").into(), LeafNode::text("b").into()]).unwrap();
        let second = ParentNode::new("p", [LeafNode::text("b").into(), LeafNode::text("a").into()]).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_node_count() {
        let inner = ParentNode::new("li", [LeafNode::text("one").into()]).unwrap();
        let outer = ParentNode::new("ul", [inner.into(), LeafNode::text("two").into()]).unwrap();
        assert_eq!(outer.node_count(), 4);
    }

    #[test]
    fn test_parent_debug() {
        let node = ParentNode::builder()
            .tag("div")
            .child(paragraph())
            .attr("class", "paragraph")
            .build()
            .unwrap();
        assert_eq!(format!("{node:?}"), r#"<div class="paragraph">"#);
    }
}
