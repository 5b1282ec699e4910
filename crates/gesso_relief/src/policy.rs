//! Merge policies.
//!
//! A policy decides how the values several sources give for one attribute
//! combine. Policies are looked up on flattened keys (`data-action`, not
//! `data: { action }`).

use gesso_carton::{CompactString, FxHashMap};
use phf::phf_set;
use serde::{Deserialize, Serialize};

use crate::{AttrError, AttrValue};

/// How two values for the same key combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// The latest source wins.
    Replace,
    /// Tokens are concatenated in order and deduplicated.
    SpaceJoin,
    /// The earliest source that defines the key wins.
    FirstWins,
}

impl MergePolicy {
    /// Fold the values sources gave for `key`, in priority order.
    ///
    /// `SpaceJoin` always yields a `List` (possibly empty); the other
    /// policies yield one of the input values.
    pub fn fold<'v>(
        self,
        key: &str,
        values: impl IntoIterator<Item = &'v AttrValue>,
    ) -> Result<AttrValue, AttrError> {
        match self {
            Self::Replace => Ok(values.into_iter().last().cloned().unwrap_or_default()),
            Self::FirstWins => Ok(values
                .into_iter()
                .find(|v| !v.is_nil())
                .cloned()
                .unwrap_or_default()),
            Self::SpaceJoin => space_join(key, values).map(AttrValue::List),
        }
    }
}

/// Concatenate the tokens of every value in order, keeping first occurrences.
pub fn space_join<'v>(
    key: &str,
    values: impl IntoIterator<Item = &'v AttrValue>,
) -> Result<Vec<String>, AttrError> {
    let mut tokens: Vec<String> = Vec::new();
    for value in values {
        for token in value.space_tokens(key)? {
            if !tokens.iter().any(|t| t == token) {
                tokens.push(token.to_string());
            }
        }
    }
    Ok(tokens)
}

/// Keys whose values are token lists.
static SPACE_JOIN_KEYS: phf::Set<&'static str> = phf_set! {
    "class", "data-action", "data-controller", "rel",
};

/// Scalar keys where a later value overrides an earlier one.
static REPLACE_KEYS: phf::Set<&'static str> = phf_set! {
    "id", "href", "src", "srcset", "alt", "type", "name", "value", "role",
    "title", "for", "tabindex", "style", "action", "method", "target",
    "placeholder", "lang", "dir", "width", "height", "content", "form",
    "accept", "autocomplete", "min", "max", "step", "pattern", "datetime",
    "colspan", "rowspan", "loading", "open", "hidden", "disabled", "checked",
    "selected", "readonly", "required", "multiple", "download", "label",
    "enctype", "inputmode", "maxlength", "minlength", "size", "span",
};

/// Scalar `data-*` keys. Other `data-*` keys fall back to the value types.
static DATA_REPLACE_KEYS: phf::Set<&'static str> = phf_set! {
    "data-state", "data-side", "data-align", "data-orientation",
    "data-disabled", "data-highlighted", "data-placeholder", "data-value",
    "data-turbo", "data-turbo-method", "data-turbo-confirm",
    "data-turbo-permanent", "data-turbo-track", "data-turbo-stream",
};

/// ARIA attributes holding a list of element ids.
static ID_LIST_ARIA_KEYS: phf::Set<&'static str> = phf_set! {
    "aria-describedby", "aria-labelledby", "aria-controls", "aria-owns",
    "aria-flowto", "aria-details",
};

/// Resolves the [`MergePolicy`] for a flattened attribute key.
///
/// Resolution order: explicit overrides, then the built-in key tables, then
/// pattern rules for `data-*` and `aria-*`, and finally the value types: a
/// key whose values are all strings or token lists is space-joined, anything
/// else is replaced. Unlisted `data-*` keys such as `data-foo-param` take
/// the value-type fallback.
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    overrides: FxHashMap<CompactString, MergePolicy>,
}

impl PolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force a policy for one key.
    pub fn with_override(mut self, key: &str, policy: MergePolicy) -> Self {
        let key: CompactString = key.chars().map(|c| c.to_ascii_lowercase()).collect();
        self.overrides.insert(key, policy);
        self
    }

    /// The policy for `key` when it does not depend on the values.
    pub fn lookup(&self, key: &str) -> Option<MergePolicy> {
        if let Some(policy) = self.overrides.get(key) {
            return Some(*policy);
        }
        if SPACE_JOIN_KEYS.contains(key) {
            return Some(MergePolicy::SpaceJoin);
        }
        if REPLACE_KEYS.contains(key) {
            return Some(MergePolicy::Replace);
        }
        if let Some(name) = key.strip_prefix("data-") {
            if name.ends_with("-target") || name.ends_with("-outlet") {
                return Some(MergePolicy::SpaceJoin);
            }
            // Stimulus values are typed scalars.
            if name.ends_with("-value") || DATA_REPLACE_KEYS.contains(key) {
                return Some(MergePolicy::Replace);
            }
            return None;
        }
        if key.starts_with("aria-") {
            if ID_LIST_ARIA_KEYS.contains(key) {
                return Some(MergePolicy::SpaceJoin);
            }
            return Some(MergePolicy::Replace);
        }
        None
    }

    /// The policy for `key` given every value the sources define for it.
    pub fn resolve<'v>(
        &self,
        key: &str,
        values: impl IntoIterator<Item = &'v AttrValue>,
    ) -> MergePolicy {
        self.lookup(key).unwrap_or_else(|| {
            let mut values = values.into_iter().filter(|v| !v.is_nil()).peekable();
            let textual = values.peek().is_some() && values.all(AttrValue::is_textual);
            if textual {
                MergePolicy::SpaceJoin
            } else {
                MergePolicy::Replace
            }
        })
    }
}
