//! The attribute merger.

use std::sync::Arc;

use gesso_carton::FxHashSet;
use gesso_relief::{space_join, AttrError, AttrValue, AttributeSet, MergePolicy, PolicyTable};

use crate::class_merge::{ClassMerger, TailwindMerger};

/// The order keys and space-joined tokens are written out in.
///
/// Display order never changes which value wins: priority always follows
/// source order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayOrder {
    /// Lowest-priority source first.
    #[default]
    SourceOrder,
    /// Highest-priority source first.
    HighestFirst,
}

/// Options for a single merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeOptions {
    pub display: DisplayOrder,
}

/// Folds attribute sources into one flat [`AttributeSet`].
///
/// The merger is immutable and cheap to clone; share one per application.
#[derive(Clone)]
pub struct AttributeMerger {
    policies: Arc<PolicyTable>,
    classes: Arc<dyn ClassMerger>,
}

impl Default for AttributeMerger {
    fn default() -> Self {
        Self::new(PolicyTable::default(), TailwindMerger::default())
    }
}

impl std::fmt::Debug for AttributeMerger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeMerger")
            .field("policies", &self.policies)
            .finish_non_exhaustive()
    }
}

impl AttributeMerger {
    pub fn new(policies: PolicyTable, classes: impl ClassMerger + 'static) -> Self {
        Self {
            policies: Arc::new(policies),
            classes: Arc::new(classes),
        }
    }

    pub fn policies(&self) -> &PolicyTable {
        &self.policies
    }

    /// Merge sources ordered from lowest to highest priority.
    pub fn merge(&self, sources: &[&AttributeSet]) -> Result<AttributeSet, AttrError> {
        self.merge_with(sources, MergeOptions::default())
    }

    /// Merge sources ordered from lowest to highest priority.
    ///
    /// Every source is flattened first, so `data: { action }` and
    /// `data-action` meet under one key. For each key the values are folded
    /// through the key's [`MergePolicy`]. Space-joined keys that end up with
    /// no tokens are left out of the result.
    pub fn merge_with(
        &self,
        sources: &[&AttributeSet],
        options: MergeOptions,
    ) -> Result<AttributeSet, AttrError> {
        let flat = sources
            .iter()
            .map(|source| source.flatten(&self.policies))
            .collect::<Result<Vec<_>, _>>()?;

        let display: Vec<&AttributeSet> = match options.display {
            DisplayOrder::SourceOrder => flat.iter().collect(),
            DisplayOrder::HighestFirst => flat.iter().rev().collect(),
        };

        let mut keys: Vec<&str> = Vec::new();
        for set in &display {
            for key in set.keys() {
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }

        let mut merged = AttributeSet::new();
        for key in keys {
            let values: Vec<&AttrValue> = flat.iter().filter_map(|set| set.get(key)).collect();
            let policy = self.policies.resolve(key, values.iter().copied());

            let value = match policy {
                MergePolicy::SpaceJoin => {
                    let shown = space_join(key, display.iter().filter_map(|set| set.get(key)))?;
                    let shown = if key == "class" {
                        self.surviving_classes(shown, &values)?
                    } else {
                        shown
                    };
                    if shown.is_empty() {
                        continue;
                    }
                    AttrValue::List(shown)
                }
                policy => policy.fold(key, values.iter().copied())?,
            };
            merged.insert(key, value);
        }

        Ok(merged)
    }

    /// Resolve class conflicts in priority order, keep survivors in display order.
    fn surviving_classes(
        &self,
        shown: Vec<String>,
        values: &[&AttrValue],
    ) -> Result<Vec<String>, AttrError> {
        let prioritized = space_join("class", values.iter().copied())?;
        let survivors: FxHashSet<String> = self.classes.resolve(prioritized).into_iter().collect();
        Ok(shown
            .into_iter()
            .filter(|token| survivors.contains(token))
            .collect())
    }

    /// Merge class strings the way the `class` attribute is merged.
    ///
    /// ```
    /// use gesso_weave::AttributeMerger;
    ///
    /// let merger = AttributeMerger::default();
    /// assert_eq!(merger.merge_classes(&["px-4 py-2", "p-0", ""]), "p-0");
    /// ```
    pub fn merge_classes(&self, parts: &[&str]) -> String {
        let values: Vec<AttrValue> = parts.iter().map(|part| AttrValue::from(*part)).collect();
        match space_join("class", values.iter()) {
            Ok(tokens) => self.classes.resolve(tokens).join(" "),
            Err(_) => String::new(),
        }
    }
}
