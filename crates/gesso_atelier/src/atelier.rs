//! The composition root.

use std::sync::Arc;

use gesso_carton::stable_id;
use gesso_graft::AsChildRewriter;
use gesso_relief::AttributeSet;
use gesso_weave::AttributeMerger;

use crate::components::Component;
use crate::render::Renderer;
use crate::{AtelierError, Node, Selection, Theme, VariantTable};

#[derive(Debug, Default)]
struct Inner {
    theme: Theme,
    rewriter: AsChildRewriter,
}

/// Everything a component needs to render: the theme, the attribute merger
/// and the as-child rewriter.
///
/// Built once at startup and shared; cloning only bumps a reference count.
/// To render with a different theme, build another `Atelier`.
#[derive(Debug, Clone, Default)]
pub struct Atelier {
    inner: Arc<Inner>,
}

impl Atelier {
    pub fn new(theme: Theme, merger: AttributeMerger) -> Self {
        Self {
            inner: Arc::new(Inner {
                theme,
                rewriter: AsChildRewriter::new(merger),
            }),
        }
    }

    /// An atelier with the default merger and the given theme.
    pub fn with_theme(theme: Theme) -> Self {
        Self::new(theme, AttributeMerger::default())
    }

    pub fn theme(&self) -> &Theme {
        &self.inner.theme
    }

    pub fn merger(&self) -> &AttributeMerger {
        self.inner.rewriter.merger()
    }

    pub fn rewriter(&self) -> &AsChildRewriter {
        &self.inner.rewriter
    }

    /// Resolve a component's classes under this atelier's theme.
    pub fn classes(&self, table: &VariantTable, selection: &Selection) -> Result<String, AtelierError> {
        table.classes(self.theme(), selection)
    }

    /// Merge attribute sources, lowest priority first.
    pub fn merge(&self, sources: &[&AttributeSet]) -> Result<AttributeSet, AtelierError> {
        Ok(self.merger().merge(sources)?)
    }

    /// A content-derived element id, prefixed by the theme's id prefix.
    pub fn element_id(&self, fallback_prefix: &str, parts: &[&str]) -> String {
        stable_id(self.theme().id_prefix(fallback_prefix), parts)
    }

    pub fn render(&self, node: &Node) -> Result<String, AtelierError> {
        Renderer::new(self.rewriter()).render(node)
    }

    /// Build and render a component.
    pub fn render_component<C: Component>(&self, component: &C) -> Result<String, AtelierError> {
        let node = component.build(self)?;
        tracing::trace!(component = C::NAME, "rendering component root");
        self.render(&node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_shareable() {
        assert_send_sync::<Atelier>();
    }

    #[test]
    fn test_element_id_uses_theme_prefix() {
        let plain = Atelier::default();
        assert!(plain.element_id("dialog", &["Edit"]).starts_with("dialog-"));

        let themed = Atelier::with_theme(Theme {
            id_prefix: Some("ui".into()),
            ..Theme::default()
        });
        let id = themed.element_id("dialog", &["Edit"]);
        assert!(id.starts_with("ui-"));
        assert_eq!(id, themed.element_id("dialog", &["Edit"]));
    }

    #[test]
    fn test_merge_maps_errors() {
        let atelier = Atelier::default();
        let a = AttributeSet::new().with("class", "a");
        let b = AttributeSet::new().with("class", 1);
        assert!(matches!(
            atelier.merge(&[&a, &b]),
            Err(AtelierError::Merge(_))
        ));
    }
}
