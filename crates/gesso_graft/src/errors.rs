//! As-child rewrite errors.

use gesso_armature::ErrorCode;
use gesso_relief::AttrError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraftError {
    #[error("as-child content must have exactly one root element, found {count}")]
    MultipleRootElements { count: usize },

    #[error("as-child content has no root element")]
    EmptyFragment,

    #[error("as-child content is malformed: {code} (at byte {offset})")]
    MalformedFragment { code: ErrorCode, offset: usize },

    #[error(transparent)]
    Merge(#[from] AttrError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GraftError::MultipleRootElements { count: 2 }.to_string(),
            "as-child content must have exactly one root element, found 2"
        );
        let err = GraftError::MalformedFragment {
            code: ErrorCode::EofInTag,
            offset: 7,
        };
        assert!(err.to_string().ends_with("(at byte 7)"));
    }
}
