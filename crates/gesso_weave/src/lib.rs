//! Weave - Attribute merging for Gesso.
//!
//! [`AttributeMerger`] folds several [`AttributeSet`] sources into one flat
//! set ready for serialization. Sources are ordered from lowest to highest
//! priority: style defaults first, caller attributes last.
//!
//! ```
//! use gesso_relief::AttributeSet;
//! use gesso_weave::AttributeMerger;
//!
//! let merger = AttributeMerger::default();
//! let base = AttributeSet::new().with("class", "a b").with_data("action", "x");
//! let user = AttributeSet::new().with("class", "b c").with_data("action", "y");
//!
//! let merged = merger.merge(&[&base, &user]).unwrap();
//! assert_eq!(merged.get_text("class").as_deref(), Some("a b c"));
//! assert_eq!(merged.get_text("data-action").as_deref(), Some("x y"));
//! ```
//!
//! ## Name Origin
//!
//! **Weave** is what a loom does to separate threads: many strands go in,
//! one cloth comes out.

pub mod class_merge;
pub mod merger;

pub use class_merge::{ClassMerger, NoopMerger, TailwindMerger};
pub use merger::{AttributeMerger, DisplayOrder, MergeOptions};

pub use gesso_relief::{AttrError, AttrValue, AttributeSet, MergePolicy, PolicyTable};
