//! Ordered, case-insensitive attribute maps.

use gesso_carton::CompactString;

use crate::{AttrError, AttrValue, MergePolicy, PolicyTable};

/// An ordered mapping from attribute name to [`AttrValue`].
///
/// Keys are stored ASCII-lowercased, so `Class` and `class` name the same
/// attribute. Re-inserting a key replaces its value but keeps the position of
/// the first insertion.
///
/// ```
/// use gesso_relief::{AttrValue, AttributeSet};
///
/// let attrs = AttributeSet::new()
///     .with("class", "inline-flex")
///     .with_data("controller", "dialog")
///     .with_aria("expanded", false);
///
/// assert_eq!(attrs.get("CLASS"), Some(&AttrValue::from("inline-flex")));
/// assert_eq!(attrs.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeSet {
    entries: Vec<(CompactString, AttrValue)>,
}

fn normalize_key(key: &str) -> CompactString {
    key.chars().map(|c| c.to_ascii_lowercase()).collect()
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert `value` under `data: { key: value }`.
    pub fn with_data(self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.with_group("data", key, value)
    }

    /// Insert `value` under `aria: { key: value }`.
    pub fn with_aria(self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.with_group("aria", key, value)
    }

    fn with_group(mut self, group: &str, key: &str, value: impl Into<AttrValue>) -> Self {
        let value = value.into();
        match self.get_mut(group) {
            Some(AttrValue::Map(map)) => {
                map.insert(key, value);
            }
            _ => {
                self.insert(group, AttributeSet::new().with(key, value));
            }
        }
        self
    }

    /// Insert a value, returning the previous one for the same key.
    pub fn insert(&mut self, key: &str, value: impl Into<AttrValue>) -> Option<AttrValue> {
        let key = normalize_key(key);
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut AttrValue> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// The serialized text of an attribute, if it would be rendered.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(AttrValue::to_attr_string)
    }

    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let index = self
            .entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))?;
        Some(self.entries.remove(index).1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Flatten namespace groups into `prefix-key` entries.
    ///
    /// Nested keys have `_` normalized to `-`, and booleans inside a group
    /// become `"true"`/`"false"` unless the key is space-joined. A flattened key that collides with a scalar
    /// of the same name is folded through its policy, scalar first.
    ///
    /// ```
    /// use gesso_relief::{AttrValue, AttributeSet, PolicyTable};
    ///
    /// let attrs = AttributeSet::new()
    ///     .with("data-action", "a")
    ///     .with_data("action", "b")
    ///     .with_data("turbo_frame", "main");
    /// let flat = attrs.flatten(&PolicyTable::default()).unwrap();
    ///
    /// assert_eq!(flat.get_text("data-action").as_deref(), Some("a b"));
    /// assert_eq!(flat.get_text("data-turbo-frame").as_deref(), Some("main"));
    /// ```
    pub fn flatten(&self, policies: &PolicyTable) -> Result<AttributeSet, AttrError> {
        let mut out = AttributeSet::new();
        for (key, value) in &self.entries {
            flatten_into(&mut out, key, value, false, policies)?;
        }
        Ok(out)
    }

    /// Whether any value is still a namespace group.
    pub fn is_flat(&self) -> bool {
        !self.entries.iter().any(|(_, v)| matches!(v, AttrValue::Map(_)))
    }

    /// Build a set from a JSON object, keeping the object's key order.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, AttrError> {
        let serde_json::Value::Object(object) = value else {
            return Err(AttrError::ExpectedObject {
                found: json_kind(value),
            });
        };

        let mut set = AttributeSet::new();
        for (key, value) in object {
            set.insert(key, AttrValue::from_json(key, value)?);
        }
        Ok(set)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_json()))
                .collect(),
        )
    }
}

fn flatten_into(
    out: &mut AttributeSet,
    key: &str,
    value: &AttrValue,
    nested: bool,
    policies: &PolicyTable,
) -> Result<(), AttrError> {
    if let AttrValue::Map(group) = value {
        for (child, child_value) in group.iter() {
            let flat_key = format!("{}-{}", key, child.replace('_', "-"));
            flatten_into(out, &flat_key, child_value, true, policies)?;
        }
        return Ok(());
    }

    // Space-joined keys keep booleans so they fail the same way in both forms.
    let value = if nested && policies.lookup(key) != Some(MergePolicy::SpaceJoin) {
        value.clone().into_grouped()
    } else {
        value.clone()
    };

    let folded = match out.get(key) {
        Some(existing) => {
            let values = [existing, &value];
            policies
                .resolve(key, values.iter().copied())
                .fold(key, values.iter().copied())?
        }
        None => value,
    };
    out.insert(key, folded);
    Ok(())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

impl<K: AsRef<str>, V: Into<AttrValue>> FromIterator<(K, V)> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for (k, v) in iter {
            set.insert(k.as_ref(), v);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_case_insensitive_keys() {
        let mut attrs = AttributeSet::new().with("id", "a").with("Class", "x");
        assert_eq!(attrs.insert("CLASS", "y"), Some(AttrValue::from("x")));
        assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["id", "class"]);
        assert_eq!(attrs.get_text("class").as_deref(), Some("y"));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut attrs: AttributeSet = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        assert_eq!(attrs.remove("B"), Some(AttrValue::from("2")));
        assert_eq!(attrs.keys().collect::<Vec<_>>(), vec!["a", "c"]);
        assert_eq!(attrs.remove("b"), None);
    }

    #[test]
    fn test_group_builders_share_map() {
        let attrs = AttributeSet::new()
            .with_data("controller", "dialog")
            .with_data("action", "click->dialog#open");
        let Some(AttrValue::Map(data)) = attrs.get("data") else {
            panic!("expected a data group");
        };
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_flatten_groups() {
        let attrs = AttributeSet::new()
            .with("class", "a")
            .with_aria("expanded", false)
            .with_data("dialog_target", "content")
            .with("disabled", true);
        let flat = attrs.flatten(&PolicyTable::default()).unwrap();

        assert!(flat.is_flat());
        assert_eq!(
            flat.keys().collect::<Vec<_>>(),
            vec!["class", "aria-expanded", "data-dialog-target", "disabled"]
        );
        assert_eq!(flat.get("aria-expanded"), Some(&AttrValue::from("false")));
        assert_eq!(flat.get("disabled"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn test_flatten_deep_groups() {
        let attrs = AttributeSet::new().with(
            "data",
            AttributeSet::new().with("tooltip", AttributeSet::new().with("side", "top")),
        );
        let flat = attrs.flatten(&PolicyTable::default()).unwrap();
        assert_eq!(flat.get_text("data-tooltip-side").as_deref(), Some("top"));
    }

    #[test]
    fn test_flatten_collision_replace() {
        let attrs = AttributeSet::new()
            .with("aria-label", "outer")
            .with_aria("label", "inner");
        let flat = attrs.flatten(&PolicyTable::default()).unwrap();
        assert_eq!(flat.len(), 1);
        assert_eq!(flat.get_text("aria-label").as_deref(), Some("inner"));
    }

    #[test]
    fn test_flatten_keeps_space_joined_booleans() {
        let attrs = AttributeSet::new()
            .with_data("controller", true)
            .with_data("open", true);
        let flat = attrs.flatten(&PolicyTable::default()).unwrap();
        assert_eq!(flat.get("data-controller"), Some(&AttrValue::Bool(true)));
        assert_eq!(flat.get("data-open"), Some(&AttrValue::from("true")));
    }

    #[test]
    fn test_from_json_preserves_order() {
        let attrs = AttributeSet::from_json(&json!({
            "role": "button",
            "data": { "action": "click->c#go" },
            "class": ["a", "b"],
            "hidden": null,
        }))
        .unwrap();

        assert_eq!(
            attrs.keys().collect::<Vec<_>>(),
            vec!["role", "data", "class", "hidden"]
        );
        assert_eq!(attrs.get("hidden"), Some(&AttrValue::Nil));
        assert_eq!(attrs.to_json()["data"]["action"], json!("click->c#go"));
    }

    #[test]
    fn test_from_json_errors() {
        assert_eq!(
            AttributeSet::from_json(&json!(["class"])),
            Err(AttrError::ExpectedObject { found: "array" })
        );
        assert!(matches!(
            AttributeSet::from_json(&json!({ "class": ["a", 1] })),
            Err(AttrError::InvalidAttributeValue { .. })
        ));
    }
}
