//! Attribute system for HTML nodes
//!
//! Attributes are ordered `(name, value)` pairs. Rendering follows insertion
//! order; equality treats them as a set of pairs. Names are unique: every
//! constructor goes through `set_attr`, so a repeated name keeps its first
//! position and takes its last value.

use compact_str::CompactString;
use rustc_hash::FxHashSet;

/// HTML tag name
pub type Tag = CompactString;

/// Element attributes as ordered key-value pairs
pub type Attrs = Vec<(CompactString, CompactString)>;

/// Extension trait for attribute operations on Attrs
pub trait AttrsExt {
    /// Get an attribute value by name
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool;

    /// Set an attribute value (insert or update in place)
    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<CompactString>);

    /// Remove an attribute by name, returning the old value if present
    fn remove_attr(&mut self, name: &str) -> Option<CompactString>;

    /// Render as an HTML attribute string.
    ///
    /// Non-empty attributes carry their own leading space
    /// (` href="u" class="c"`); empty attributes render as `""`.
    fn to_html(&self) -> String;

    /// Compare as a set of pairs, ignoring order
    fn same_pairs(&self, other: &Self) -> bool;
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        position(self, name).map(|pos| self[pos].1.as_str())
    }

    fn has_attr(&self, name: &str) -> bool {
        position(self, name).is_some()
    }

    fn set_attr(&mut self, name: impl Into<CompactString>, value: impl Into<CompactString>) {
        let name = name.into();
        let value = value.into();
        match position(self, &name) {
            Some(pos) => self[pos].1 = value,
            None => self.push((name, value)),
        }
    }

    fn remove_attr(&mut self, name: &str) -> Option<CompactString> {
        let pos = position(self, name)?;
        Some(self.remove(pos).1)
    }

    fn to_html(&self) -> String {
        let mut out = String::new();
        write_attrs(self, false, &mut out);
        out
    }

    fn same_pairs(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let lhs: FxHashSet<_> = self.iter().collect();
        let rhs: FxHashSet<_> = other.iter().collect();
        lhs == rhs
    }
}

fn position(attrs: &Attrs, name: &str) -> Option<usize> {
    attrs.iter().position(|(k, _)| k == name)
}

/// Collect pairs into a mapping: a repeated name keeps its first position
/// and takes its last value.
pub(crate) fn collect_attrs(pairs: Attrs) -> Attrs {
    let mut attrs = Attrs::with_capacity(pairs.len());
    for (name, value) in pairs {
        attrs.set_attr(name, value);
    }
    attrs
}

/// Append attributes to `out`, one leading space per pair.
pub(crate) fn write_attrs(attrs: &Attrs, escape: bool, out: &mut String) {
    for (name, value) in attrs {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        if escape {
            escape_attr(value, out);
        } else {
            out.push_str(value);
        }
        out.push('"');
    }
}

/// Escape attribute value special characters.
pub(crate) fn escape_attr(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
