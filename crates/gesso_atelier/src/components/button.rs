use gesso_relief::AttributeSet;

use super::{root_attrs, Component};
use crate::{Atelier, AtelierError, Axis, Node, Selection, VariantTable};

pub static BUTTON: VariantTable = VariantTable {
    component: "button",
    base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50",
    axes: &[
        Axis {
            name: "variant",
            default: "default",
            options: &[
                ("default", "bg-primary text-primary-foreground hover:bg-primary/90"),
                ("destructive", "bg-destructive text-destructive-foreground hover:bg-destructive/90"),
                ("outline", "border border-input bg-background hover:bg-accent hover:text-accent-foreground"),
                ("secondary", "bg-secondary text-secondary-foreground hover:bg-secondary/80"),
                ("ghost", "hover:bg-accent hover:text-accent-foreground"),
                ("link", "text-primary underline-offset-4 hover:underline"),
            ],
        },
        Axis {
            name: "size",
            default: "default",
            options: &[
                ("default", "h-10 px-4 py-2"),
                ("sm", "h-9 rounded-md px-3"),
                ("lg", "h-11 rounded-md px-8"),
                ("icon", "h-10 w-10"),
            ],
        },
    ],
};

/// A button, or the button styling grafted onto a caller-supplied element.
///
/// With `as_child` set, the content must render to exactly one root element
/// (typically a link); the button's classes and `role="button"` are merged
/// onto it. The role is dropped when the element already acts as a button.
#[derive(Debug, Clone, Default)]
pub struct Button {
    pub selection: Selection,
    pub attrs: AttributeSet,
    pub children: Vec<Node>,
    pub as_child: bool,
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: &str) -> Self {
        self.selection.set("variant", variant);
        self
    }

    pub fn size(mut self, size: &str) -> Self {
        self.selection.set("size", size);
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

    pub fn as_child(mut self, as_child: bool) -> Self {
        self.as_child = as_child;
        self
    }
}

impl Component for Button {
    const NAME: &'static str = "button";

    fn build(&self, atelier: &Atelier) -> Result<Node, AtelierError> {
        if self.as_child {
            let defaults = AttributeSet::new().with("role", "button");
            let attrs = root_attrs(atelier, &BUTTON, &self.selection, defaults, &self.attrs)?;
            return Ok(Node::as_child(attrs, Node::fragment(self.children.clone())));
        }

        let defaults = AttributeSet::new().with("type", "button");
        let attrs = root_attrs(atelier, &BUTTON, &self.selection, defaults, &self.attrs)?;
        Ok(Node::element("button", attrs, self.children.clone()))
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
                .with_classes("button.variant.default", "btn-primary")
                .with_classes("button.variant.ghost", "btn-ghost")
                .with_classes("button.size.default", "btn-md"),
        )
    }

    #[test]
    fn test_plain_button() {
        let html = atelier()
            .render_component(&Button::new().child("Save"))
            .unwrap();
        assert_eq!(
            html,
            r#"<button class="btn btn-primary btn-md" type="button">Save</button>"#
        );
    }

    #[test]
    fn test_caller_overrides_type() {
        let button = Button::new()
            .variant("ghost")
            .attrs(AttributeSet::new().with("type", "submit").with("class", "w-full"))
            .child("Send");
        let html = atelier().render_component(&button).unwrap();
        assert_eq!(
            html,
            r#"<button class="btn btn-ghost btn-md w-full" type="submit">Send</button>"#
        );
    }

    #[test]
    fn test_as_child_link() {
        let button = Button::new()
            .as_child(true)
            .child(Node::raw(r#"<a href="/docs">Docs</a>"#));
        let html = atelier().render_component(&button).unwrap();
        assert_eq!(
            html,
            r#"<a href="/docs" class="btn btn-primary btn-md">Docs</a>"#
        );
    }

    #[test]
    fn test_as_child_keeps_role_on_generic_element() {
        let button = Button::new()
            .as_child(true)
            .child(Node::raw("<span>Go</span>"));
        let html = atelier().render_component(&button).unwrap();
        assert_eq!(
            html,
            r#"<span class="btn btn-primary btn-md" role="button">Go</span>"#
        );
    }

    #[test]
    fn test_unknown_variant() {
        let err = atelier()
            .render_component(&Button::new().variant("primary"))
            .unwrap_err();
        assert!(matches!(err, AtelierError::UnknownVariant { component: "button", .. }));
    }
}
