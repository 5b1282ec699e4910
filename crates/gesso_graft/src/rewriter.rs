//! The as-child rewriter.

use std::borrow::Cow;

use gesso_armature::{parse_fragment, ChildElement};
use gesso_carton::{covers_button_role, implicit_role};
use gesso_relief::{write_attrs, AttrValue, AttributeSet, MergePolicy, PolicyTable};
use gesso_weave::{AttributeMerger, DisplayOrder, MergeOptions};

use crate::GraftError;

/// Moves a component's attributes onto the root of caller-rendered markup.
///
/// The caller's element wins every conflict: its own `Replace` values stay,
/// its class tokens beat conflicting component utilities, and its attributes
/// keep their order with the component's additions after them.
#[derive(Debug, Clone, Default)]
pub struct AsChildRewriter {
    merger: AttributeMerger,
}

impl AsChildRewriter {
    pub fn new(merger: AttributeMerger) -> Self {
        Self { merger }
    }

    pub fn merger(&self) -> &AttributeMerger {
        &self.merger
    }

    /// Rewrite `fragment` so its root element carries `component`'s attributes.
    ///
    /// Only the root's opening tag is rebuilt. Everything else, including
    /// surrounding whitespace and comments, is copied through unchanged.
    ///
    /// ```
    /// use gesso_graft::AsChildRewriter;
    /// use gesso_relief::AttributeSet;
    ///
    /// let component = AttributeSet::new()
    ///     .with("role", "button")
    ///     .with_data("action", "click->c#go")
    ///     .with("class", "base");
    /// let html = AsChildRewriter::default()
    ///     .rewrite(r#"<a href="/x" class="existing">Label</a>"#, &component)
    ///     .unwrap();
    ///
    /// assert_eq!(
    ///     html,
    ///     r#"<a href="/x" class="existing base" data-action="click->c#go">Label</a>"#
    /// );
    /// ```
    pub fn rewrite(&self, fragment: &str, component: &AttributeSet) -> Result<String, GraftError> {
        let (parsed, errors) = parse_fragment(fragment);
        if let Some(error) = errors.iter().find(|e| e.code.is_fatal()) {
            return Err(GraftError::MalformedFragment {
                code: error.code,
                offset: error.offset,
            });
        }

        let root = match parsed.elements().count() {
            0 => return Err(GraftError::EmptyFragment),
            1 => parsed.single_root().ok_or(GraftError::EmptyFragment)?,
            count => return Err(GraftError::MultipleRootElements { count }),
        };
        tracing::trace!(tag = %root.tag, "grafting attributes onto as-child root");
        if parsed.has_stray_text() {
            tracing::debug!(tag = %root.tag, "text beside the as-child root is copied through");
        }

        let component = without_redundant_role(root, component);
        let native = valueless_as_empty(&root.attrs, self.merger.policies());
        let merged = self.merger.merge_with(
            &[component.as_ref(), native.as_ref()],
            MergeOptions {
                display: DisplayOrder::HighestFirst,
            },
        )?;

        let mut out = String::with_capacity(fragment.len() + 64);
        out.push_str(&fragment[..root.open_tag.start]);
        out.push('<');
        out.push_str(&root.tag);
        write_attrs(&mut out, &merged)?;
        out.push_str(if root.self_closing { "/>" } else { ">" });
        out.push_str(&fragment[root.open_tag.end..]);
        Ok(out)
    }
}

/// A valueless attribute in markup has the value `""`, so space-joined keys
/// like `<div class>` take part in the merge as empty token lists.
fn valueless_as_empty<'a>(
    attrs: &'a AttributeSet,
    policies: &PolicyTable,
) -> Cow<'a, AttributeSet> {
    let is_empty_list = |key: &str, value: &AttrValue| {
        matches!(value, AttrValue::Bool(true))
            && policies.lookup(key) == Some(MergePolicy::SpaceJoin)
    };
    if !attrs.iter().any(|(key, value)| is_empty_list(key, value)) {
        return Cow::Borrowed(attrs);
    }

    Cow::Owned(
        attrs
            .iter()
            .map(|(key, value)| {
                if is_empty_list(key, value) {
                    (key, AttrValue::from(""))
                } else {
                    (key, value.clone())
                }
            })
            .collect(),
    )
}

/// Drop a synthetic `role="button"` the root element already implies.
fn without_redundant_role<'c>(
    root: &ChildElement,
    component: &'c AttributeSet,
) -> Cow<'c, AttributeSet> {
    let is_button = component
        .get_text("role")
        .is_some_and(|role| role.trim().eq_ignore_ascii_case("button"));
    if !is_button {
        return Cow::Borrowed(component);
    }

    let has_href = root.attrs.get_text("href").is_some();
    let input_type = root.attrs.get_text("type");
    let Some(native) = implicit_role(&root.tag, has_href, input_type.as_deref()) else {
        return Cow::Borrowed(component);
    };
    if !covers_button_role(native) {
        return Cow::Borrowed(component);
    }

    tracing::debug!(
        tag = %root.tag,
        native_role = native,
        "dropping role=\"button\" implied by the as-child root"
    );
    let mut component = component.clone();
    component.remove("role");
    Cow::Owned(component)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesso_armature::ErrorCode;

    fn rewrite(fragment: &str, component: &AttributeSet) -> Result<String, GraftError> {
        AsChildRewriter::default().rewrite(fragment, component)
    }

    #[test]
    fn test_role_dropped_on_button() {
        let component = AttributeSet::new().with("role", "button");
        assert_eq!(
            rewrite("<button>Go</button>", &component).unwrap(),
            "<button>Go</button>"
        );
    }

    #[test]
    fn test_role_kept_on_div() {
        let component = AttributeSet::new().with("role", "button");
        assert_eq!(
            rewrite("<div>Go</div>", &component).unwrap(),
            r#"<div role="button">Go</div>"#
        );
    }

    #[test]
    fn test_role_kept_on_anchor_without_href() {
        let component = AttributeSet::new().with("role", "button");
        assert_eq!(
            rewrite("<a>Go</a>", &component).unwrap(),
            r#"<a role="button">Go</a>"#
        );
    }

    #[test]
    fn test_role_dropped_on_submit_input() {
        let component = AttributeSet::new()
            .with("role", "button")
            .with("class", "btn");
        assert_eq!(
            rewrite(r#"<input type="submit">"#, &component).unwrap(),
            r#"<input type="submit" class="btn">"#
        );
        assert_eq!(
            rewrite(r#"<input type="text">"#, &component).unwrap(),
            r#"<input type="text" role="button" class="btn">"#
        );
    }

    #[test]
    fn test_role_matched_loosely() {
        let listed = AttributeSet::new().with("role", vec!["button"]);
        assert_eq!(rewrite("<button>Go</button>", &listed).unwrap(), "<button>Go</button>");

        let capitalized = AttributeSet::new().with("role", "Button");
        assert_eq!(
            rewrite(r#"<a href="/x">Go</a>"#, &capitalized).unwrap(),
            r#"<a href="/x">Go</a>"#
        );
    }

    #[test]
    fn test_other_roles_untouched() {
        let component = AttributeSet::new().with("role", "tab");
        assert_eq!(
            rewrite("<button>Go</button>", &component).unwrap(),
            r#"<button role="tab">Go</button>"#
        );
    }

    #[test]
    fn test_root_wins_conflicts() {
        let component = AttributeSet::new()
            .with("id", "generated")
            .with("type", "button")
            .with("class", "bg-primary px-4");
        assert_eq!(
            rewrite(r#"<button id="mine" class="bg-muted">x</button>"#, &component).unwrap(),
            r#"<button id="mine" class="bg-muted px-4" type="button">x</button>"#
        );
    }

    #[test]
    fn test_errors() {
        let component = AttributeSet::new();
        assert_eq!(
            rewrite("<a></a><b></b>", &component),
            Err(GraftError::MultipleRootElements { count: 2 })
        );
        assert_eq!(rewrite("  just text ", &component), Err(GraftError::EmptyFragment));
        assert_eq!(
            rewrite("<a href='x", &component),
            Err(GraftError::MalformedFragment {
                code: ErrorCode::EofInTag,
                offset: 10
            })
        );
    }

    #[test]
    fn test_merge_errors_propagate() {
        let component = AttributeSet::new().with("class", 3);
        assert!(matches!(
            rewrite("<div></div>", &component),
            Err(GraftError::Merge(_))
        ));
    }
}
