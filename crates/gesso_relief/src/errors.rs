//! Attribute errors.

/// Errors raised while building, merging or serializing attributes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AttrError {
    /// A space-joined attribute received a value that cannot be tokenized.
    #[error("invalid value for '{key}': expected a string, a list of strings or nil, found {found}")]
    InvalidAttributeValue { key: String, found: &'static str },

    /// An attribute name that would break out of the serialized tag.
    #[error("unsafe attribute name {name:?}")]
    UnsafeAttrName { name: String },

    /// JSON input that is not an object where an attribute set was expected.
    #[error("expected a JSON object of attributes, found {found}")]
    ExpectedObject { found: &'static str },
}

impl AttrError {
    pub(crate) fn invalid(key: &str, found: &'static str) -> Self {
        Self::InvalidAttributeValue {
            key: key.to_string(),
            found,
        }
    }
}
