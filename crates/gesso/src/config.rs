//! Configuration file loading for gesso.
//!
//! Reads `gesso.config.json` from the current working directory, or the
//! file given with `--config`. Also provides the JSON Schema printed by
//! `gesso schema`.

use std::collections::BTreeMap;
use std::path::Path;

use gesso_atelier::{Atelier, Theme};
use gesso_relief::{MergePolicy, PolicyTable};
use gesso_weave::{AttributeMerger, NoopMerger, TailwindMerger};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "gesso.config.json";

/// Top-level gesso configuration.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GessoConfig {
    /// JSON Schema reference (for editor autocompletion).
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Class overrides and id prefix for components.
    #[serde(default)]
    pub theme: Theme,

    /// Merge policy overrides by attribute name.
    #[serde(default)]
    pub policies: BTreeMap<String, MergePolicy>,

    /// How conflicting class tokens are resolved.
    #[serde(default)]
    pub class_merger: ClassMergerKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassMergerKind {
    /// Drop Tailwind utilities overridden by later ones.
    #[default]
    Tailwind,
    /// Keep every class token.
    None,
}

impl GessoConfig {
    pub fn policy_table(&self) -> PolicyTable {
        self.policies
            .iter()
            .fold(PolicyTable::new(), |table, (key, policy)| {
                table.with_override(key, *policy)
            })
    }

    pub fn merger(&self) -> AttributeMerger {
        match self.class_merger {
            ClassMergerKind::Tailwind => {
                AttributeMerger::new(self.policy_table(), TailwindMerger::new())
            }
            ClassMergerKind::None => AttributeMerger::new(self.policy_table(), NoopMerger),
        }
    }

    pub fn atelier(&self) -> Atelier {
        Atelier::new(self.theme.clone(), self.merger())
    }
}

/// Load the config from `path`, or `gesso.config.json` in the CWD if None.
///
/// A missing file yields the defaults. An unreadable or invalid file is
/// reported as a warning and also yields the defaults.
pub fn load_config(path: Option<&Path>) -> GessoConfig {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()
            .unwrap_or_default()
            .join(CONFIG_FILE_NAME),
    };

    if !config_path.exists() {
        if path.is_some() {
            tracing::warn!(path = %config_path.display(), "config file not found, using defaults");
        }
        return GessoConfig::default();
    }

    match read_config(&config_path) {
        Ok(config) => {
            tracing::debug!(path = %config_path.display(), "loaded config");
            config
        }
        Err(message) => {
            tracing::warn!(path = %config_path.display(), "{message}, using defaults");
            GessoConfig::default()
        }
    }
}

fn read_config(path: &Path) -> Result<GessoConfig, String> {
    let content =
        std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {e}"))?;
    serde_json::from_str(&content).map_err(|e| format!("failed to parse config: {e}"))
}

/// JSON Schema for `gesso.config.json`.
pub const GESSO_CONFIG_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "title": "Gesso Configuration",
  "description": "Configuration file for gesso - attribute merging and as-child rendering",
  "type": "object",
  "properties": {
    "$schema": {
      "type": "string",
      "description": "JSON Schema reference for editor autocompletion"
    },
    "theme": {
      "type": "object",
      "description": "Component styling overrides",
      "properties": {
        "classes": {
          "type": "object",
          "description": "Class overrides keyed \"component.base\" or \"component.axis.option\"",
          "propertyNames": {
            "pattern": "^[a-z_]+\\.(base|[a-z_]+\\.[a-z0-9_-]+)$"
          },
          "additionalProperties": { "type": "string" },
          "examples": [
            { "button.variant.default": "bg-brand text-white hover:bg-brand/90" }
          ]
        },
        "idPrefix": {
          "type": "string",
          "description": "Prefix for generated element ids"
        }
      },
      "additionalProperties": false
    },
    "policies": {
      "type": "object",
      "description": "Merge policy overrides by attribute name",
      "additionalProperties": {
        "enum": ["replace", "space_join", "first_wins"]
      }
    },
    "classMerger": {
      "enum": ["tailwind", "none"],
      "description": "How conflicting class tokens are resolved",
      "default": "tailwind"
    }
  },
  "additionalProperties": false
}"#;
