//! Leaf node type
//!
//! A childless element holding literal text, or a self-describing tagged
//! element such as `<img>`.

use std::fmt;

use compact_str::CompactString;

use crate::attr::{Attrs, AttrsExt, Tag, collect_attrs};

use super::fmt_open_tag;

// =============================================================================
// LeafNode
// =============================================================================

/// Element with no children
///
/// The value may be absent at construction; rendering decides whether that
/// is an error (see [`Render`](crate::Render)).
#[derive(Clone, Default)]
pub struct LeafNode {
    tag: Option<Tag>,
    value: Option<String>,
    attrs: Attrs,
}

impl LeafNode {
    /// Create a tagged leaf with a value
    pub fn new(tag: impl Into<Tag>, value: impl Into<String>) -> Self {
        Self::from_parts(Some(tag.into()), Some(value.into()), Attrs::new())
    }

    /// Create an untagged leaf that renders its value verbatim
    pub fn text(value: impl Into<String>) -> Self {
        Self::from_parts(None, Some(value.into()), Attrs::new())
    }

    /// Create a tagged leaf with no value (e.g. `<img>`)
    pub fn empty(tag: impl Into<Tag>) -> Self {
        Self::from_parts(Some(tag.into()), None, Attrs::new())
    }

    /// Create a leaf from explicitly optional parts
    ///
    /// Repeated attribute names collapse to one entry holding the last value.
    pub fn from_parts(tag: Option<Tag>, value: Option<String>, attrs: Attrs) -> Self {
        Self {
            tag,
            value,
            attrs: collect_attrs(attrs),
        }
    }

    /// Add an attribute (updates in place if the name exists)
    pub fn with_attr(mut self, name: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Add several attributes in order
    pub fn with_attrs<K, V>(mut self, attrs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<CompactString>,
        V: Into<CompactString>,
    {
        for (name, value) in attrs {
            self.attrs.set_attr(name, value);
        }
        self
    }

    /// Tag name, if any
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Literal value, if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
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

    pub(crate) fn tag_ref(&self) -> Option<&Tag> {
        self.tag.as_ref()
    }
}

impl PartialEq for LeafNode {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && self.value == other.value && self.attrs.same_pairs(&other.attrs)
    }
}

impl Eq for LeafNode {}

impl fmt::Debug for LeafNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_open_tag(self.tag(), &self.attrs, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_constructors() {
        let bold = LeafNode::new("b", "Bold");
        assert_eq!(bold.tag(), Some("b"));
        assert_eq!(bold.value(), Some("Bold"));
        assert!(bold.attrs().is_empty());

        let text = LeafNode::text("plain");
        assert_eq!(text.tag(), None);
        assert_eq!(text.value(), Some("plain"));

        let img = LeafNode::empty("img").with_attr("src", "cat.png");
        assert_eq!(img.value(), None);
        assert_eq!(img.get_attr("src"), Some("cat.png"));
    }

    #[test]
    fn test_leaf_eq() {
        assert_eq!(LeafNode::new("b", "Bold"), LeafNode::new("b", "Bold"));
        assert_ne!(LeafNode::new("b", "Bold"), LeafNode::new("i", "Bold"));
        assert_ne!(LeafNode::new("b", "Bold"), LeafNode::new("b", "bold"));
        assert_ne!(
            LeafNode::new("b", "Bold"),
            LeafNode::new("b", "Bold").with_attr("class", "bold")
        );
        assert_ne!(LeafNode::text("x"), LeafNode::from_parts(None, None, Attrs::new()));
    }

    #[test]
    fn test_leaf_eq_attr_order() {
        let a = LeafNode::new("a", "x").with_attrs([("href", "u"), ("title", "t")]);
        let b = LeafNode::new("a", "x").with_attrs([("title", "t"), ("href", "u")]);
        assert_eq!(a, b);
        assert_eq!(b, a);
        assert_ne!(a.attrs_html(), b.attrs_html());
    }

    fn pairs(items: &[(&str, &str)]) -> Attrs {
        items.iter().map(|&(k, v)| (k.into(), v.into())).collect()
    }

    #[test]
    fn test_from_parts_collapses_repeated_names() {
        let x = LeafNode::from_parts(Some("p".into()), Some("v".into()), pairs(&[("a", "1"), ("a", "1"), ("b", "2")]));
        let y = LeafNode::from_parts(Some("p".into()), Some("v".into()), pairs(&[("a", "1"), ("b", "2"), ("b", "2")]));
        assert_eq!(x.attrs().len(), 2);
        assert_eq!(x.attrs_html(), r#" a="1" b="2""#);
        assert_eq!(x.attrs_html(), y.attrs_html());
        assert_eq!(x, y);

        let last = LeafNode::from_parts(Some("p".into()), Some("v".into()), pairs(&[("a", "1"), ("a", "3")]));
        assert_eq!(last.get_attr("a"), Some("3"));
        assert_ne!(last, LeafNode::new("p", "v").with_attr("a", "1"));
    }

    #[test]
    fn test_attrs_html() {
        let node = LeafNode::new("b", "Bold").with_attr("class", "bold");
        assert_eq!(node.attrs_html(), r#" class="bold""#);
        assert_eq!(LeafNode::new("b", "Bold").attrs_html(), "");
    }

    #[test]
    fn test_leaf_debug() {
        let node = LeafNode::new("p", "This is a paragraph").with_attr("class", "paragraph");
        assert_eq!(format!("{node:?}"), r#"<p class="paragraph">"#);
        assert_eq!(format!("{:?}", LeafNode::text("x")), "<#text>");
    }
}
