//! Fragment parse errors.

use serde::{Deserialize, Serialize};

/// Error codes reported while tokenizing and parsing a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ErrorCode {
    /// Input ended inside a tag
    EofInTag = 1,
    /// Input ended inside a comment
    EofInComment = 2,
    /// `</>` with no tag name
    MissingEndTagName = 3,
    /// Close tag with no matching open element
    UnexpectedEndTag = 4,
    /// Element never closed
    MissingEndTag = 5,
    /// Attribute written twice on one element
    DuplicateAttribute = 6,
}

impl ErrorCode {
    pub fn message(&self) -> &'static str {
        match self {
            Self::EofInTag => "Unexpected end of input inside a tag.",
            Self::EofInComment => "Unexpected end of input inside a comment.",
            Self::MissingEndTagName => "End tag name is missing.",
            Self::UnexpectedEndTag => "Invalid end tag.",
            Self::MissingEndTag => "Element is missing end tag.",
            Self::DuplicateAttribute => "Duplicate attribute.",
        }
    }

    /// Whether the fragment can no longer be rewritten safely.
    ///
    /// Both cases leave an opening tag or comment open, so there is no end
    /// offset to splice at.
    #[inline]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::EofInTag | Self::EofInComment)
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// A parse error at a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("{code} (at byte {offset})")]
pub struct ParseError {
    pub code: ErrorCode,
    pub offset: usize,
}

impl ParseError {
    pub fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert!(!ErrorCode::EofInTag.message().is_empty());
        assert!(!ErrorCode::DuplicateAttribute.message().is_empty());
        assert_eq!(
            ParseError::new(ErrorCode::MissingEndTag, 5).to_string(),
            "Element is missing end tag. (at byte 5)"
        );
    }

    #[test]
    fn test_fatal_codes() {
        assert!(ErrorCode::EofInTag.is_fatal());
        assert!(ErrorCode::EofInComment.is_fatal());
        assert!(!ErrorCode::UnexpectedEndTag.is_fatal());
        assert!(!ErrorCode::DuplicateAttribute.is_fatal());
    }
}
