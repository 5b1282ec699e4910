use gesso_relief::AttributeSet;

use super::{styled, Button, Component};
use crate::{Atelier, AtelierError, Node};

const OVERLAY_CLASSES: &str = "fixed inset-0 z-50 bg-black/80";
const PANEL_CLASSES: &str = "fixed left-[50%] top-[50%] z-50 grid w-full max-w-lg translate-x-[-50%] translate-y-[-50%] gap-4 border bg-background p-6 shadow-lg sm:rounded-lg";
const HEADER_CLASSES: &str = "flex flex-col space-y-1.5 text-center sm:text-left";
const TITLE_CLASSES: &str = "text-lg font-semibold leading-none tracking-tight";
const DESCRIPTION_CLASSES: &str = "text-sm text-muted-foreground";
const CLOSE_CLASSES: &str = "absolute right-4 top-4 rounded-sm opacity-70 ring-offset-background transition-opacity hover:opacity-100 focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";

/// A modal dialog driven by a `dialog` Stimulus controller.
///
/// The trigger is an outline [`Button`] (or, with `trigger_as_child`, the
/// caller's own element carrying the button's attributes). The panel is kept
/// in a `<template>` target until the controller opens it.
#[derive(Debug, Clone, Default)]
pub struct Dialog {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub trigger: Vec<Node>,
    pub trigger_as_child: bool,
    pub children: Vec<Node>,
    pub attrs: AttributeSet,
}

impl Dialog {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn trigger(mut self, trigger: impl Into<Node>) -> Self {
        self.trigger.push(trigger.into());
        self
    }

    pub fn trigger_as_child(mut self, as_child: bool) -> Self {
        self.trigger_as_child = as_child;
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn attrs(mut self, attrs: AttributeSet) -> Self {
        self.attrs = attrs;
        self
    }

    fn build_panel(&self, id: &str) -> Node {
        let title_id = format!("{id}-title");
        let description_id = format!("{id}-description");

        let mut header = vec![styled(
            "h2",
            TITLE_CLASSES,
            AttributeSet::new().with("id", title_id.as_str()),
            vec![Node::text(&self.title)],
        )];
        let mut panel_attrs = AttributeSet::new()
            .with("id", id)
            .with("role", "dialog")
            .with_aria("modal", true)
            .with_aria("labelledby", title_id.as_str());

        if let Some(description) = &self.description {
            header.push(styled(
                "p",
                DESCRIPTION_CLASSES,
                AttributeSet::new().with("id", description_id.as_str()),
                vec![Node::text(description)],
            ));
            panel_attrs = panel_attrs.with_aria("describedby", description_id.as_str());
        }

        let close = styled(
            "button",
            CLOSE_CLASSES,
            AttributeSet::new()
                .with("type", "button")
                .with_aria("label", "Close")
                .with_data("action", "click->dialog#close"),
            vec![Node::text("\u{d7}")],
        );

        let mut body = Vec::with_capacity(self.children.len() + 2);
        body.push(styled("div", HEADER_CLASSES, AttributeSet::new(), header));
        body.extend(self.children.iter().cloned());
        body.push(close);

        styled("div", PANEL_CLASSES, panel_attrs, body)
    }
}

impl Component for Dialog {
    const NAME: &'static str = "dialog";

    fn build(&self, atelier: &Atelier) -> Result<Node, AtelierError> {
        let id = match &self.id {
            Some(id) => id.clone(),
            None => atelier.element_id("dialog", &[&self.title]),
        };

        let trigger = Button {
            attrs: AttributeSet::new()
                .with_aria("haspopup", "dialog")
                .with_aria("controls", id.as_str())
                .with_data("dialog-target", "trigger")
                .with_data("action", "click->dialog#open"),
            children: self.trigger.clone(),
            as_child: self.trigger_as_child,
            ..Button::new().variant("outline")
        }
        .build(atelier)?;

        let overlay = styled(
            "div",
            OVERLAY_CLASSES,
            AttributeSet::new().with_data("action", "click->dialog#close"),
            vec![],
        );
        let template = Node::element(
            "template",
            AttributeSet::new().with_data("dialog-target", "content"),
            vec![overlay, self.build_panel(&id)],
        );

        let own = AttributeSet::new().with_data("controller", "dialog");
        let attrs = atelier.merge(&[&own, &self.attrs])?;
        Ok(Node::element("div", attrs, vec![trigger, template]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;

    fn atelier() -> Atelier {
        Atelier::with_theme(
            Theme::new()
                .with_classes("button.base", "btn")
                .with_classes("button.variant.outline", "btn-outline")
                .with_classes("button.size.default", "btn-md"),
        )
    }

    #[test]
    fn test_trigger_is_outline_button() {
        let dialog = Dialog::new("Edit profile").id("edit").trigger("Edit");
        let html = atelier().render_component(&dialog).unwrap();
        assert!(html.starts_with(concat!(
            r#"<div data-controller="dialog">"#,
            r#"<button class="btn btn-outline btn-md" type="button" aria-haspopup="dialog" aria-controls="edit" data-dialog-target="trigger" data-action="click->dialog#open">Edit</button>"#,
            r#"<template data-dialog-target="content">"#,
        )));
        assert!(html.ends_with("</template></div>"));
    }

    #[test]
    fn test_panel_links_title_and_description() {
        let dialog = Dialog::new("Edit profile")
            .id("edit")
            .description("Update your details.")
            .trigger("Edit");
        let html = atelier().render_component(&dialog).unwrap();
        assert!(html.contains(
            r#"id="edit" role="dialog" aria-modal="true" aria-labelledby="edit-title" aria-describedby="edit-description""#
        ));
        assert!(html.contains(r#"<h2 class="text-lg font-semibold leading-none tracking-tight" id="edit-title">Edit profile</h2>"#));
        assert!(html.contains(r#"aria-label="Close" data-action="click->dialog#close">×</button>"#));
    }

    #[test]
    fn test_as_child_trigger() {
        let dialog = Dialog::new("Delete")
            .id("del")
            .trigger(Node::raw(r#"<a href="/items/1">Delete</a>"#))
            .trigger_as_child(true);
        let html = atelier().render_component(&dialog).unwrap();
        assert!(html.contains(
            r#"<a href="/items/1" class="btn btn-outline btn-md" aria-haspopup="dialog" aria-controls="del" data-dialog-target="trigger" data-action="click->dialog#open">Delete</a>"#
        ));
    }
}
