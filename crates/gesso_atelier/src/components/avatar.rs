use gesso_relief::AttributeSet;

use super::{root_attrs, styled, Component};
use crate::{Atelier, AtelierError, Axis, Node, Selection, VariantTable};

pub static AVATAR: VariantTable = VariantTable {
    component: "avatar",
    base: "relative flex shrink-0 overflow-hidden rounded-full",
    axes: &[Axis {
        name: "size",
        default: "md",
        options: &[("sm", "h-8 w-8"), ("md", "h-10 w-10"), ("lg", "h-14 w-14")],
    }],
};

const IMAGE_CLASSES: &str = "aspect-square h-full w-full";
const FALLBACK_CLASSES: &str = "flex h-full w-full items-center justify-center rounded-full bg-muted";

/// Up to two uppercase initials: the first letters of the first and last words.
///
/// ```
/// use gesso_atelier::initials;
///
/// assert_eq!(initials("Ada King Lovelace"), "AL");
/// assert_eq!(initials("plato"), "P");
/// assert_eq!(initials("   "), "");
/// ```
pub fn initials(name: &str) -> String {
    let mut words = name.split_whitespace();
    let first = words.next().and_then(|word| word.chars().next());
    let last = words.last().and_then(|word| word.chars().next());
    first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect()
}

/// A user picture with an initials fallback.
///
/// With an image source the fallback is rendered hidden, and an `avatar`
/// Stimulus controller reveals it when the image fails to load.
#[derive(Debug, Clone, Default)]
pub struct Avatar {
    pub name: String,
    pub src: Option<String>,
    pub selection: Selection,
    pub attrs: AttributeSet,
}

impl Avatar {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
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
}

impl Component for Avatar {
    const NAME: &'static str = "avatar";

    fn build(&self, atelier: &Atelier) -> Result<Node, AtelierError> {
        let mut defaults = AttributeSet::new();
        let mut children = Vec::with_capacity(2);

        if let Some(src) = &self.src {
            defaults = defaults.with_data("controller", "avatar");
            children.push(styled(
                "img",
                IMAGE_CLASSES,
                AttributeSet::new()
                    .with("src", src.as_str())
                    .with("alt", self.name.as_str())
                    .with_data("avatar-target", "image")
                    .with_data("action", "error->avatar#fallback"),
                vec![],
            ));
        }

        let mut fallback = AttributeSet::new();
        if self.src.is_some() {
            fallback = fallback
                .with_data("avatar-target", "fallback")
                .with("hidden", true);
        } else {
            fallback = fallback.with("role", "img").with_aria("label", self.name.as_str());
        }
        children.push(styled(
            "span",
            FALLBACK_CLASSES,
            fallback,
            vec![Node::text(initials(&self.name))],
        ));

        let attrs = root_attrs(atelier, &AVATAR, &self.selection, defaults, &self.attrs)?;
        Ok(Node::element("span", attrs, children))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;

    fn atelier() -> Atelier {
        Atelier::with_theme(
            Theme::new()
                .with_classes("avatar.base", "avatar")
                .with_classes("avatar.size.md", "avatar-md"),
        )
    }

    #[test]
    fn test_initials_only() {
        let html = atelier().render_component(&Avatar::new("Grace Hopper")).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<span class="avatar avatar-md">"#,
                r#"<span class="flex h-full w-full items-center justify-center rounded-full bg-muted" role="img" aria-label="Grace Hopper">GH</span>"#,
                "</span>"
            )
        );
    }

    #[test]
    fn test_image_with_hidden_fallback() {
        let html = atelier()
            .render_component(&Avatar::new("Grace Hopper").src("/g.png"))
            .unwrap();
        assert!(html.starts_with(r#"<span class="avatar avatar-md" data-controller="avatar">"#));
        assert!(html.contains(
            r#"<img class="aspect-square h-full w-full" src="/g.png" alt="Grace Hopper" data-avatar-target="image" data-action="error->avatar#fallback">"#
        ));
        assert!(html.contains(r#"data-avatar-target="fallback" hidden>GH</span>"#));
    }

    #[test]
    fn test_initials_non_ascii() {
        assert_eq!(initials("élodie durand"), "ÉD");
    }
}
