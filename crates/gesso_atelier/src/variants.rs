//! Declarative variant tables.
//!
//! Every component describes its styling as a static [`VariantTable`]: base
//! classes plus a list of axes (`variant`, `size`, ...), each with a default
//! option. Resolving a [`Selection`] against a table is an ordinary lookup.

use gesso_carton::SmallVec;

use crate::{AtelierError, Theme};

/// One styling axis of a component.
#[derive(Debug, Clone, Copy)]
pub struct Axis {
    pub name: &'static str,
    pub default: &'static str,
    /// `(option, classes)` in declaration order
    pub options: &'static [(&'static str, &'static str)],
}

impl Axis {
    pub fn classes(&self, option: &str) -> Option<&'static str> {
        self.options
            .iter()
            .find(|(name, _)| *name == option)
            .map(|(_, classes)| *classes)
    }

    pub fn option_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.options.iter().map(|(name, _)| *name)
    }
}

/// The styling table of a component.
#[derive(Debug, Clone, Copy)]
pub struct VariantTable {
    pub component: &'static str,
    pub base: &'static str,
    pub axes: &'static [Axis],
}

impl VariantTable {
    pub fn axis(&self, name: &str) -> Option<&Axis> {
        self.axes.iter().find(|axis| axis.name == name)
    }

    /// The option picked for `axis`, falling back to the axis default.
    pub fn option<'s>(&self, selection: &'s Selection, axis: &str) -> &'s str {
        match selection.get(axis) {
            Some(option) => option,
            None => self.axis(axis).map(|a| a.default).unwrap_or_default(),
        }
    }

    /// Check that every pick names a known axis and option.
    pub fn validate(&self, selection: &Selection) -> Result<(), AtelierError> {
        for (axis, option) in selection.iter() {
            let known = self
                .axis(axis)
                .is_some_and(|a| a.classes(option).is_some());
            if !known {
                return Err(AtelierError::UnknownVariant {
                    component: self.component,
                    axis: axis.to_string(),
                    option: option.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Resolve the class string for a selection.
    ///
    /// Base classes come first, then one entry per axis in table order.
    /// Theme overrides replace the slot they name.
    ///
    /// ```
    /// use gesso_atelier::{Axis, Selection, Theme, VariantTable};
    ///
    /// static CHIP: VariantTable = VariantTable {
    ///     component: "chip",
    ///     base: "inline-flex",
    ///     axes: &[Axis {
    ///         name: "tone",
    ///         default: "plain",
    ///         options: &[("plain", "bg-muted"), ("loud", "bg-primary")],
    ///     }],
    /// };
    ///
    /// let theme = Theme::default();
    /// assert_eq!(CHIP.classes(&theme, &Selection::new()).unwrap(), "inline-flex bg-muted");
    /// assert_eq!(
    ///     CHIP.classes(&theme, &Selection::new().with("tone", "loud")).unwrap(),
    ///     "inline-flex bg-primary"
    /// );
    /// assert!(CHIP.classes(&theme, &Selection::new().with("tone", "quiet")).is_err());
    /// ```
    pub fn classes(&self, theme: &Theme, selection: &Selection) -> Result<String, AtelierError> {
        self.validate(selection)?;

        let mut parts: SmallVec<[&str; 4]> = SmallVec::new();
        parts.push(theme.base_override(self.component).unwrap_or(self.base));
        for axis in self.axes {
            let option = selection.get(axis.name).unwrap_or(axis.default);
            let classes = theme
                .option_override(self.component, axis.name, option)
                .or_else(|| axis.classes(option))
                .unwrap_or_default();
            parts.push(classes);
        }

        Ok(parts
            .into_iter()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" "))
    }
}

/// Picked options by axis name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    picks: SmallVec<[(String, String); 2]>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style pick.
    pub fn with(mut self, axis: &str, option: &str) -> Self {
        self.set(axis, option);
        self
    }

    /// Pick `option` for `axis`, replacing an earlier pick.
    pub fn set(&mut self, axis: &str, option: &str) {
        match self.picks.iter_mut().find(|(a, _)| a == axis) {
            Some((_, slot)) => *slot = option.to_string(),
            None => self.picks.push((axis.to_string(), option.to_string())),
        }
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.picks
            .iter()
            .find(|(a, _)| a == axis)
            .map(|(_, option)| option.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.picks.iter().map(|(a, o)| (a.as_str(), o.as_str()))
    }

    /// Parse `axis=option` pairs, as given on the command line.
    pub fn parse_pairs<'p>(
        pairs: impl IntoIterator<Item = &'p str>,
    ) -> Result<Self, String> {
        let mut selection = Self::new();
        for pair in pairs {
            let (axis, option) = pair
                .split_once('=')
                .ok_or_else(|| format!("expected axis=option, got '{pair}'"))?;
            selection.set(axis.trim(), option.trim());
        }
        Ok(selection)
    }
}
