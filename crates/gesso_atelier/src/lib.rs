//! Atelier - Server-rendered design-system components for Gesso.
//!
//! Components are plain builder structs implementing [`Component`]. Building
//! one against an [`Atelier`] resolves its variant classes, merges them with
//! the caller's attributes and returns a [`Node`] tree, which the renderer
//! turns into HTML:
//!
//! ```
//! use gesso_atelier::{Atelier, Button, Theme};
//! use gesso_relief::AttributeSet;
//!
//! let atelier = Atelier::with_theme(
//!     Theme::new()
//!         .with_classes("button.base", "btn")
//!         .with_classes("button.variant.destructive", "btn-danger")
//!         .with_classes("button.size.default", "btn-md"),
//! );
//! let button = Button::new()
//!     .variant("destructive")
//!     .attrs(AttributeSet::new().with_data("action", "click->form#reset"))
//!     .child("Reset");
//!
//! assert_eq!(
//!     atelier.render_component(&button).unwrap(),
//!     r#"<button class="btn btn-danger btn-md" type="button" data-action="click->form#reset">Reset</button>"#
//! );
//! ```
//!
//! Interactive components (accordion, dialog, avatar) emit Stimulus
//! `data-controller`, `data-action` and `data-*-target` hooks; the
//! controllers themselves live with the host application.
//!
//! ## Name Origin
//!
//! An **atelier** is the workshop where the finished pieces are made. The
//! other crates prepare the materials; this one turns them into components.

pub mod atelier;
pub mod components;
pub mod errors;
pub mod node;
pub mod render;
pub mod theme;
pub mod variants;

pub use atelier::Atelier;
pub use components::{
    initials, page_window, Accordion, AccordionItem, Alert, Avatar, Badge, Button, Component,
    Dialog, PageItem, Pagination, ACCORDION, ALERT, AVATAR, BADGE, BUTTON, PAGINATION,
};
pub use errors::AtelierError;
pub use node::Node;
pub use render::{render, Renderer};
pub use theme::Theme;
pub use variants::{Axis, Selection, VariantTable};
