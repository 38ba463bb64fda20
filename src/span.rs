//! Typed text spans
//!
//! A `TextSpan` is a unit of inline content before HTML translation: some
//! text, its kind, and for links and images a URL.

use std::fmt;

/// Kind of inline content carried by a [`TextSpan`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextType {
    #[default]
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl TextType {
    /// All kinds, in declaration order
    pub const ALL: [TextType; 6] = [
        TextType::Plain,
        TextType::Bold,
        TextType::Italic,
        TextType::Code,
        TextType::Link,
        TextType::Image,
    ];

    /// Lowercase name of the kind
    pub const fn as_str(self) -> &'static str {
        match self {
            TextType::Plain => "plain",
            TextType::Bold => "bold",
            TextType::Italic => "italic",
            TextType::Code => "code",
            TextType::Link => "link",
            TextType::Image => "image",
        }
    }

    /// Whether spans of this kind reference a URL
    pub const fn has_url(self) -> bool {
        matches!(self, TextType::Link | TextType::Image)
    }
}

impl fmt::Display for TextType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable unit of typed inline content
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextSpan {
    text: String,
    kind: TextType,
    url: Option<String>,
}

impl TextSpan {
    /// Create a span with no URL
    pub fn new(text: impl Into<String>, kind: TextType) -> Self {
        Self {
            text: text.into(),
            kind,
            url: None,
        }
    }

    /// Create a span carrying a URL (only read for links and images)
    pub fn with_url(text: impl Into<String>, kind: TextType, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            url: Some(url.into()),
        }
    }

    /// Plain text span
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Plain)
    }

    /// Bold span
    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Bold)
    }

    /// Italic span
    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Italic)
    }

    /// Inline code span
    pub fn code(text: impl Into<String>) -> Self {
        Self::new(text, TextType::Code)
    }

    /// Link span pointing at `url`
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(text, TextType::Link, url)
    }

    /// Image span; `alt` is kept as the span text
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self::with_url(alt, TextType::Image, url)
    }

    /// Span text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Span kind
    pub fn kind(&self) -> TextType {
        self.kind
    }

    /// URL, if any
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_eq() {
        assert_eq!(TextSpan::bold("This is a text node"), TextSpan::bold("This is a text node"));
        assert_ne!(TextSpan::bold("This is a text node"), TextSpan::italic("This is a text node"));
        assert_ne!(
            TextSpan::link("x", "https://a.example"),
            TextSpan::link("x", "https://b.example")
        );
    }

    #[test]
    fn test_url_none() {
        let span = TextSpan::new("This is a text node", TextType::Bold);
        assert_eq!(span.url(), None);
    }

    #[test]
    fn test_url() {
        let span = TextSpan::with_url("This is a text node", TextType::Bold, "https://www.example.com");
        assert_eq!(span.url(), Some("https://www.example.com"));
        assert_eq!(span.kind(), TextType::Bold);
        assert_eq!(span.text(), "This is a text node");
    }

    #[test]
    fn test_constructors_set_url_for_links_and_images() {
        for kind in TextType::ALL {
            let span = match kind {
                TextType::Plain => TextSpan::plain("x"),
                TextType::Bold => TextSpan::bold("x"),
                TextType::Italic => TextSpan::italic("x"),
                TextType::Code => TextSpan::code("x"),
                TextType::Link => TextSpan::link("x", "u"),
                TextType::Image => TextSpan::image("x", "u"),
            };
            assert_eq!(span.kind(), kind);
            assert_eq!(span.url().is_some(), kind.has_url(), "{kind}");
        }
    }

    #[test]
    fn test_text_type_display() {
        assert_eq!(TextType::Bold.to_string(), "bold");
        assert_eq!(TextType::default(), TextType::Plain);
        assert_ne!(TextType::Bold, TextType::Italic);
    }
}
