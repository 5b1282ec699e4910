//! Attribute values.

use crate::{AttrError, AttributeSet};

/// The value of a single attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum AttrValue {
    /// Explicitly unset. Omitted when serialized.
    #[default]
    Nil,
    /// Boolean attribute (`disabled`) or `"true"`/`"false"` inside a group.
    Bool(bool),
    Number(f64),
    Str(String),
    /// Space-separated tokens (`class`, `data-action`, ...).
    List(Vec<String>),
    /// Namespace group flattened to `key-child` entries (`data`, `aria`).
    Map(AttributeSet),
}

impl AttrValue {
    /// Short name of the value's type, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    #[inline]
    pub fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Whether the value can take part in a space-joined merge.
    #[inline]
    pub fn is_textual(&self) -> bool {
        matches!(self, Self::Nil | Self::Str(_) | Self::List(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Split a space-joined value into its tokens.
    ///
    /// `key` only feeds the error message.
    pub fn space_tokens<'v>(&'v self, key: &str) -> Result<Vec<&'v str>, AttrError> {
        match self {
            Self::Nil => Ok(Vec::new()),
            Self::Str(s) => Ok(s.split_whitespace().collect()),
            Self::List(items) => Ok(items.iter().flat_map(|s| s.split_whitespace()).collect()),
            other => Err(AttrError::invalid(key, other.kind())),
        }
    }

    /// The serialized attribute text, or `None` when the attribute is omitted.
    ///
    /// A top-level `Bool(true)` serializes as an empty string: the caller
    /// writes a bare attribute name for it.
    pub fn to_attr_string(&self) -> Option<String> {
        match self {
            Self::Nil | Self::Bool(false) => None,
            Self::Bool(true) => Some(String::new()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Str(s) => Some(s.clone()),
            Self::List(items) if items.is_empty() => None,
            Self::List(items) => Some(items.join(" ")),
            Self::Map(map) => Some(map.to_json().to_string()),
        }
    }

    /// Convert a value living inside a namespace group.
    ///
    /// `aria-expanded="false"` is meaningful, so booleans become strings
    /// instead of toggling the attribute's presence.
    pub(crate) fn into_grouped(self) -> Self {
        match self {
            Self::Bool(b) => Self::Str(if b { "true" } else { "false" }.to_string()),
            other => other,
        }
    }

    pub(crate) fn from_json(key: &str, value: &serde_json::Value) -> Result<Self, AttrError> {
        use serde_json::Value;

        Ok(match value {
            Value::Null => Self::Nil,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or_default()),
            Value::String(s) => Self::Str(s.clone()),
            Value::Array(items) => Self::List(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => Ok(s.clone()),
                        _ => Err(AttrError::invalid(key, "array of non-strings")),
                    })
                    .collect::<Result<_, _>>()?,
            ),
            Value::Object(_) => Self::Map(AttributeSet::from_json(value)?),
        })
    }

    pub(crate) fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            Self::Nil => Value::Null,
            Self::Bool(b) => Value::Bool(*b),
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Str(s) => Value::String(s.clone()),
            Self::List(items) => Value::Array(items.iter().cloned().map(Value::String).collect()),
            Self::Map(map) => map.to_json(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_int!(i32, i64, u32, u64, usize);

impl From<Vec<String>> for AttrValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for AttrValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(String::from).collect())
    }
}

impl From<AttributeSet> for AttrValue {
    fn from(value: AttributeSet) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<AttrValue>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Nil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_tokens() {
        let value = AttrValue::from("  a b\tc ");
        assert_eq!(value.space_tokens("class").unwrap(), vec!["a", "b", "c"]);

        let value = AttrValue::from(vec!["a b", "c"]);
        assert_eq!(value.space_tokens("class").unwrap(), vec!["a", "b", "c"]);

        assert!(AttrValue::Nil.space_tokens("class").unwrap().is_empty());
    }

    #[test]
    fn test_space_tokens_rejects_scalars() {
        let err = AttrValue::Bool(true).space_tokens("data-action").unwrap_err();
        assert_eq!(
            err,
            AttrError::InvalidAttributeValue {
                key: "data-action".into(),
                found: "bool"
            }
        );
        assert!(AttrValue::Number(1.0).space_tokens("class").is_err());
    }

    #[test]
    fn test_attr_string() {
        assert_eq!(AttrValue::Number(3.0).to_attr_string().as_deref(), Some("3"));
        assert_eq!(AttrValue::Number(0.5).to_attr_string().as_deref(), Some("0.5"));
        assert_eq!(AttrValue::Bool(true).to_attr_string().as_deref(), Some(""));
        assert_eq!(AttrValue::Bool(false).to_attr_string(), None);
        assert_eq!(AttrValue::Nil.to_attr_string(), None);
        assert_eq!(AttrValue::List(vec![]).to_attr_string(), None);
    }

    #[test]
    fn test_grouped_booleans() {
        assert_eq!(AttrValue::Bool(false).into_grouped(), AttrValue::from("false"));
        assert_eq!(AttrValue::from(2).into_grouped(), AttrValue::Number(2.0));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(AttrValue::from(None::<&str>), AttrValue::Nil);
        assert_eq!(AttrValue::from(Some("x")), AttrValue::from("x"));
    }
}
