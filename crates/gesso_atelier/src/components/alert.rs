use gesso_relief::AttributeSet;

use super::{root_attrs, styled, Component};
use crate::{Atelier, AtelierError, Axis, Node, Selection, VariantTable};

pub static ALERT: VariantTable = VariantTable {
    component: "alert",
    base: "relative w-full rounded-lg border p-4 [&>svg~*]:pl-7 [&>svg+div]:translate-y-[-3px] [&>svg]:absolute [&>svg]:left-4 [&>svg]:top-4 [&>svg]:text-foreground",
    axes: &[Axis {
        name: "variant",
        default: "default",
        options: &[
            ("default", "bg-background text-foreground"),
            ("destructive", "border-destructive/50 text-destructive dark:border-destructive [&>svg]:text-destructive"),
        ],
    }],
};

const TITLE_CLASSES: &str = "mb-1 font-medium leading-none tracking-tight";
const DESCRIPTION_CLASSES: &str = "text-sm [&_p]:leading-relaxed";

/// A callout with an optional title and description.
#[derive(Debug, Clone, Default)]
pub struct Alert {
    pub selection: Selection,
    pub attrs: AttributeSet,
    pub title: Option<String>,
    pub description: Option<String>,
    pub children: Vec<Node>,
}

impl Alert {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: &str) -> Self {
        self.selection.set("variant", variant);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn attrs(mut self, attrs: AttributeSet) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl Component for Alert {
    const NAME: &'static str = "alert";

    fn build(&self, atelier: &Atelier) -> Result<Node, AtelierError> {
        let defaults = AttributeSet::new().with("role", "alert");
        let attrs = root_attrs(atelier, &ALERT, &self.selection, defaults, &self.attrs)?;

        let mut children = Vec::with_capacity(self.children.len() + 2);
        if let Some(title) = &self.title {
            children.push(styled(
                "h5",
                TITLE_CLASSES,
                AttributeSet::new(),
                vec![Node::text(title)],
            ));
        }
        if let Some(description) = &self.description {
            children.push(styled(
                "div",
                DESCRIPTION_CLASSES,
                AttributeSet::new(),
                vec![Node::text(description)],
            ));
        }
        children.extend(self.children.iter().cloned());

        Ok(Node::element("div", attrs, children))
    }
}
