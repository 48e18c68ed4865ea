//! Clipboard entry value object

use std::fmt;

/// Content types a clipboard entry can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    PlainText,
    Image,
}

impl ContentKind {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Image => "image/png",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value object representing the clipboard's primary entry.
///
/// The host clipboard holds at most one primary entry at a time; setting a
/// new entry overwrites the previous one. Only the plain-text variant is
/// readable through the accessor; the image variant exists so backends can
/// report "entry present but not plain text".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipEntry {
    /// A plain-text entry
    Text(String),
    /// A non-text entry (raw encoded image bytes)
    Image(Vec<u8>),
}

impl ClipEntry {
    /// Create a plain-text entry
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a non-text (image) entry
    pub fn image(data: impl Into<Vec<u8>>) -> Self {
        Self::Image(data.into())
    }

    /// Get the declared content type of this entry
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::Text(_) => ContentKind::PlainText,
            Self::Image(_) => ContentKind::Image,
        }
    }

    /// Whether this entry's declared content type is plain text
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Get the text content, if this is a plain-text entry
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            Self::Image(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_kind_mime_strings() {
        assert_eq!(ContentKind::PlainText.as_str(), "text/plain");
        assert_eq!(ContentKind::Image.as_str(), "image/png");
        assert_eq!(ContentKind::PlainText.to_string(), "text/plain");
    }

    #[test]
    fn text_entry_is_text() {
        let entry = ClipEntry::text("hello");
        assert!(entry.is_text());
        assert_eq!(entry.kind(), ContentKind::PlainText);
        assert_eq!(entry.as_text(), Some("hello"));
    }

    #[test]
    fn image_entry_is_not_text() {
        let entry = ClipEntry::image(vec![0x89, 0x50, 0x4e, 0x47]);
        assert!(!entry.is_text());
        assert_eq!(entry.kind(), ContentKind::Image);
        assert_eq!(entry.as_text(), None);
    }

    #[test]
    fn empty_string_is_still_a_text_entry() {
        let entry = ClipEntry::text("");
        assert!(entry.is_text());
        assert_eq!(entry.as_text(), Some(""));
    }
}
