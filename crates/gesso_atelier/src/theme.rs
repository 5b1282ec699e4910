//! Theme configuration.

use gesso_carton::FxHashMap;
use serde::{Deserialize, Serialize};

/// Per-application styling overrides.
///
/// A theme is an immutable value handed to [`crate::Atelier`] once. Class
/// overrides are keyed `component.base` or `component.axis.option` and
/// replace the built-in classes for that slot:
///
/// ```json
/// {
///   "classes": {
///     "button.variant.default": "bg-brand text-white hover:bg-brand/90",
///     "badge.base": "inline-flex items-center rounded-md px-2 text-xs"
///   }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct Theme {
    /// Class overrides by slot key
    pub classes: FxHashMap<String, String>,

    /// Prefix for generated element ids
    pub id_prefix: Option<String>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style class override.
    pub fn with_classes(mut self, key: impl Into<String>, classes: impl Into<String>) -> Self {
        self.classes.insert(key.into(), classes.into());
        self
    }

    /// The override for `component.base`.
    pub fn base_override(&self, component: &str) -> Option<&str> {
        self.classes
            .get(&format!("{component}.base"))
            .map(String::as_str)
    }

    /// The override for `component.axis.option`.
    pub fn option_override(&self, component: &str, axis: &str, option: &str) -> Option<&str> {
        self.classes
            .get(&format!("{component}.{axis}.{option}"))
            .map(String::as_str)
    }

    /// The prefix generated ids start with.
    pub fn id_prefix<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.id_prefix.as_deref().unwrap_or(fallback)
    }
}
