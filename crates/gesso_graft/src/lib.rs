//! Graft - As-child rendering for Gesso.
//!
//! A component rendered "as child" does not emit its own wrapper element.
//! Instead, the caller renders some markup with a single root element, and
//! [`AsChildRewriter`] merges the component's attributes onto that root:
//!
//! ```text
//! component: { role: "button", class: "base", data: { action: "click->c#go" } }
//! fragment:  <a href="/x" class="existing">Label</a>
//! result:    <a href="/x" class="existing base" data-action="click->c#go">Label</a>
//! ```
//!
//! The root's own attributes take priority; the inner content and closing
//! tag are copied through untouched.
//!
//! ## Name Origin
//!
//! A **graft** joins a cutting onto a rooted plant so both grow as one. The
//! component's behavior is the cutting; the caller's element is the root.

pub mod errors;
pub mod rewriter;

pub use errors::GraftError;
pub use rewriter::AsChildRewriter;
