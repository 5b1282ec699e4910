//! Carton - The shared toolbox for Gesso.
//!
//! This crate holds the small utilities every other Gesso crate reaches for,
//! the way a carton (artist's portfolio case) holds the tools an artist needs
//! before any work begins.
//!
//! # Modules
//!
//! - **dom_tag_config**: static HTML tag tables (void, raw text, native roles)
//! - **escape**: attribute and text escaping for serialized HTML
//! - **hash**: stable, content-derived element ids
//!
//! # Example
//!
//! ```
//! use gesso_carton::{escape_html_attr, is_void_tag};
//!
//! assert!(is_void_tag("img"));
//! assert_eq!(escape_html_attr("a \"b\""), "a &quot;b&quot;");
//! ```

pub mod dom_tag_config;
pub mod escape;
pub mod hash;

// Re-export compact_str::CompactString for attribute keys
pub use compact_str::CompactString;

// Re-export smallvec for stack-optimized token lists
pub use smallvec::{smallvec, SmallVec};

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

// Re-export phf for compile-time perfect hash functions
pub use phf::{phf_map, phf_set, Map as PhfMap, Set as PhfSet};

// Re-export shared utilities
pub use dom_tag_config::*;
pub use escape::*;
pub use hash::*;
