use gesso_relief::AttributeSet;

use super::{root_attrs, styled, Component};
use crate::{Atelier, AtelierError, Node, Selection, VariantTable};

pub static ACCORDION: VariantTable = VariantTable {
    component: "accordion",
    base: "w-full",
    axes: &[],
};

const ITEM_CLASSES: &str = "border-b";
const HEADER_CLASSES: &str = "flex";
const TRIGGER_CLASSES: &str = "flex flex-1 items-center justify-between py-4 font-medium transition-all hover:underline [&[data-state=open]>svg]:rotate-180";
const CONTENT_CLASSES: &str = "overflow-hidden text-sm transition-all";
const CONTENT_INNER_CLASSES: &str = "pb-4 pt-0";

/// One collapsible section.
#[derive(Debug, Clone)]
pub struct AccordionItem {
    pub title: String,
    pub content: Vec<Node>,
    pub open: bool,
}

impl AccordionItem {
    pub fn new(title: impl Into<String>, content: impl Into<Node>) -> Self {
        Self {
            title: title.into(),
            content: vec![content.into()],
            open: false,
        }
    }

    pub fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }
}

/// Stacked disclosure sections driven by an `accordion` Stimulus controller.
///
/// Every trigger and region is linked through ids derived from the
/// accordion's id: `{id}-{n}-trigger` and `{id}-{n}-content`, counting items
/// from zero. Without an explicit id, one is derived from the item titles.
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    pub id: Option<String>,
    pub items: Vec<AccordionItem>,
    /// Allow more than one section open at a time
    pub multiple: bool,
    pub attrs: AttributeSet,
}

impl Accordion {
    pub fn new(items: Vec<AccordionItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn attrs(mut self, attrs: AttributeSet) -> Self {
        self.attrs = attrs;
        self
    }

    fn resolve_id(&self, atelier: &Atelier) -> String {
        match &self.id {
            Some(id) => id.clone(),
            None => {
                let titles: Vec<&str> = self.items.iter().map(|item| item.title.as_str()).collect();
                atelier.element_id("accordion", &titles)
            }
        }
    }
}

fn state(open: bool) -> &'static str {
    if open {
        "open"
    } else {
        "closed"
    }
}

fn build_item(id: &str, item: &AccordionItem) -> Node {
    let trigger_id = format!("{id}-trigger");
    let content_id = format!("{id}-content");
    let state = state(item.open);

    let trigger = styled(
        "button",
        TRIGGER_CLASSES,
        AttributeSet::new()
            .with("type", "button")
            .with("id", trigger_id.as_str())
            .with_aria("expanded", item.open)
            .with_aria("controls", content_id.as_str())
            .with_data("state", state)
            .with_data("action", "click->accordion#toggle")
            .with_data("accordion-target", "trigger"),
        vec![Node::text(&item.title)],
    );

    let content = styled(
        "div",
        CONTENT_CLASSES,
        AttributeSet::new()
            .with("id", content_id.as_str())
            .with("role", "region")
            .with_aria("labelledby", trigger_id.as_str())
            .with_data("state", state)
            .with_data("accordion-target", "content")
            .with("hidden", !item.open),
        vec![styled(
            "div",
            CONTENT_INNER_CLASSES,
            AttributeSet::new(),
            item.content.clone(),
        )],
    );

    styled(
        "div",
        ITEM_CLASSES,
        AttributeSet::new()
            .with_data("state", state)
            .with_data("accordion-target", "item"),
        vec![
            styled("h3", HEADER_CLASSES, AttributeSet::new(), vec![trigger]),
            content,
        ],
    )
}

impl Component for Accordion {
    const NAME: &'static str = "accordion";

    fn build(&self, atelier: &Atelier) -> Result<Node, AtelierError> {
        let id = self.resolve_id(atelier);

        let mut defaults = AttributeSet::new()
            .with("id", id.as_str())
            .with_data("controller", "accordion");
        if self.multiple {
            defaults = defaults.with_data("accordion-multiple-value", true);
        }
        let attrs = root_attrs(atelier, &ACCORDION, &Selection::new(), defaults, &self.attrs)?;

        let items = self
            .items
            .iter()
            .enumerate()
            .map(|(index, item)| build_item(&format!("{id}-{index}"), item))
            .collect();

        Ok(Node::element("div", attrs, items))
    }
}
