//! Relief - The attribute data model for Gesso.
//!
//! Every component renders a root element whose attributes come from several
//! places at once: style defaults, variant tables, framework hooks and the
//! caller. This crate defines the shape those attributes take on their way
//! through the merger:
//!
//! - [`AttrValue`]: a scalar, a token list, or a nested namespace group
//! - [`AttributeSet`]: an ordered, case-insensitive attribute map
//! - [`MergePolicy`] and [`PolicyTable`]: how two values for one key combine
//!
//! ## Name Origin
//!
//! **Relief** is the raised surface of a sculpture. Attributes are the raised
//! surface of an element: the part every other layer touches.

pub mod attribute_set;
pub mod errors;
pub mod policy;
pub mod serialize;
pub mod value;

pub use attribute_set::AttributeSet;
pub use errors::AttrError;
pub use policy::{space_join, MergePolicy, PolicyTable};
pub use serialize::{render_attrs, write_attrs};
pub use value::AttrValue;
