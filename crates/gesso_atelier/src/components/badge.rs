use gesso_relief::AttributeSet;

use super::{root_attrs, Component};
use crate::{Atelier, AtelierError, Axis, Node, Selection, VariantTable};

pub static BADGE: VariantTable = VariantTable {
    component: "badge",
    base: "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2",
    axes: &[Axis {
        name: "variant",
        default: "default",
        options: &[
            ("default", "border-transparent bg-primary text-primary-foreground hover:bg-primary/80"),
            ("secondary", "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"),
            ("destructive", "border-transparent bg-destructive text-destructive-foreground hover:bg-destructive/80"),
            ("outline", "text-foreground"),
        ],
    }],
};

#[derive(Debug, Clone, Default)]
pub struct Badge {
    pub selection: Selection,
    pub attrs: AttributeSet,
    pub children: Vec<Node>,
}

impl Badge {
    pub fn new(label: impl Into<Node>) -> Self {
        Self {
            children: vec![label.into()],
            ..Self::default()
        }
    }

    pub fn variant(mut self, variant: &str) -> Self {
        self.selection.set("variant", variant);
        self
    }

    pub fn attrs(mut self, attrs: AttributeSet) -> Self {
        self.attrs = attrs;
        self
    }
}

impl Component for Badge {
    const NAME: &'static str = "badge";

    fn build(&self, atelier: &Atelier) -> Result<Node, AtelierError> {
        let attrs = root_attrs(
            atelier,
            &BADGE,
            &self.selection,
            AttributeSet::new(),
            &self.attrs,
        )?;
        Ok(Node::element("div", attrs, self.children.clone()))
    }
}
