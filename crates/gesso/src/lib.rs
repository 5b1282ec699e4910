//! # Gesso
//!
//! Attribute merging and as-child rendering for server-rendered UI
//! components, written in Rust.
//!
//! This crate re-exports all Gesso sub-crates for unified documentation.
//!
//! ## Crates
//!
//! - [`carton`] - Shared utilities: tag tables, escaping, stable ids
//! - [`relief`] - Attribute values, sets and merge policies
//! - [`weave`] - The attribute merger and class conflict resolution
//! - [`armature`] - HTML fragment tokenizer and parser
//! - [`graft`] - The as-child rewriter
//! - [`atelier`] - Themes, variant tables and components
//!
//! ## Name Origin
//!
//! **Gesso** is the primer coat laid on a panel before any paint goes on.
//! Components are painted over whatever attributes this layer prepares.

/// Shared utilities.
pub use gesso_carton as carton;

/// Attribute values, sets and merge policies.
pub use gesso_relief as relief;

/// The attribute merger.
pub use gesso_weave as weave;

/// HTML fragment parsing.
pub use gesso_armature as armature;

/// As-child rendering.
pub use gesso_graft as graft;

/// Server-rendered components.
pub use gesso_atelier as atelier;
