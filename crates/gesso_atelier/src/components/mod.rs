//! Design-system components.
//!
//! Each component pairs a static [`VariantTable`] with a builder struct.
//! Building merges the component's own attributes (variant classes first)
//! with the caller's attributes and returns a [`Node`] tree.

mod accordion;
mod alert;
mod avatar;
mod badge;
mod button;
mod dialog;
mod pagination;

pub use accordion::{Accordion, AccordionItem, ACCORDION};
pub use alert::{Alert, ALERT};
pub use avatar::{initials, Avatar, AVATAR};
pub use badge::{Badge, BADGE};
pub use button::{Button, BUTTON};
pub use dialog::Dialog;
pub use pagination::{page_window, PageItem, Pagination, PAGINATION};

use gesso_relief::AttributeSet;

use crate::{Atelier, AtelierError, Node, Selection, VariantTable};

/// A renderable component.
pub trait Component {
    /// Name used in logs and on the command line.
    const NAME: &'static str;

    fn build(&self, atelier: &Atelier) -> Result<Node, AtelierError>;
}

/// Merge `[variant classes + defaults, caller]` for a component's root.
///
/// The class attribute always comes first in the output, followed by the
/// component defaults in their given order.
pub(crate) fn root_attrs(
    atelier: &Atelier,
    table: &VariantTable,
    selection: &Selection,
    defaults: AttributeSet,
    caller: &AttributeSet,
) -> Result<AttributeSet, AtelierError> {
    let mut own = AttributeSet::new().with("class", atelier.classes(table, selection)?);
    for (key, value) in defaults.iter() {
        own.insert(key, value.clone());
    }
    atelier.merge(&[&own, caller])
}

/// A plain element with a fixed class string.
pub(crate) fn styled(tag: &str, class: &str, attrs: AttributeSet, children: Vec<Node>) -> Node {
    let mut own = AttributeSet::new().with("class", class);
    for (key, value) in attrs.iter() {
        own.insert(key, value.clone());
    }
    Node::element(tag, own, children)
}
