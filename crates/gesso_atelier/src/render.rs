//! Node tree serialization.

use gesso_carton::{escape_html, is_void_tag};
use gesso_graft::AsChildRewriter;
use gesso_relief::{write_attrs, AttributeSet};

use crate::{AtelierError, Node};

/// Serializes a node tree into an HTML string.
pub struct Renderer<'a> {
    rewriter: &'a AsChildRewriter,
    out: String,
}

impl<'a> Renderer<'a> {
    pub fn new(rewriter: &'a AsChildRewriter) -> Self {
        Self {
            rewriter,
            out: String::new(),
        }
    }

    /// Render `node` and return the output.
    pub fn render(mut self, node: &Node) -> Result<String, AtelierError> {
        self.process_node(node)?;
        Ok(self.out)
    }

    fn process_node(&mut self, node: &Node) -> Result<(), AtelierError> {
        match node {
            Node::Element {
                tag,
                attrs,
                children,
            } => self.process_element(tag, attrs, children),
            Node::Text(text) => {
                self.out.push_str(&escape_html(text));
                Ok(())
            }
            Node::Raw(html) => {
                self.out.push_str(html);
                Ok(())
            }
            Node::Fragment(children) => self.process_children(children),
            Node::AsChild { attrs, child } => self.process_as_child(attrs, child),
        }
    }

    fn process_children(&mut self, children: &[Node]) -> Result<(), AtelierError> {
        for child in children {
            self.process_node(child)?;
        }
        Ok(())
    }

    fn process_element(
        &mut self,
        tag: &str,
        attrs: &AttributeSet,
        children: &[Node],
    ) -> Result<(), AtelierError> {
        self.out.push('<');
        self.out.push_str(tag);
        if attrs.is_flat() {
            write_attrs(&mut self.out, attrs)?;
        } else {
            let flat = attrs.flatten(self.rewriter.merger().policies())?;
            write_attrs(&mut self.out, &flat)?;
        }
        self.out.push('>');

        // Void elements have no content and no closing tag
        if is_void_tag(tag) {
            return Ok(());
        }

        self.process_children(children)?;
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
        Ok(())
    }

    fn process_as_child(
        &mut self,
        attrs: &AttributeSet,
        child: &Node,
    ) -> Result<(), AtelierError> {
        let inner = Renderer::new(self.rewriter).render(child)?;
        let grafted = self.rewriter.rewrite(&inner, attrs)?;
        self.out.push_str(&grafted);
        Ok(())
    }
}

/// Render a node tree with a default rewriter.
///
/// ```
/// use gesso_atelier::{render, Node};
/// use gesso_relief::AttributeSet;
///
/// let node = Node::element(
///     "p",
///     AttributeSet::new().with("class", "lead"),
///     vec![Node::text("1 < 2")],
/// );
/// assert_eq!(render(&node).unwrap(), r#"<p class="lead">1 &lt; 2</p>"#);
/// ```
pub fn render(node: &Node) -> Result<String, AtelierError> {
    let rewriter = AsChildRewriter::default();
    Renderer::new(&rewriter).render(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gesso_graft::GraftError;

    #[test]
    fn test_void_elements() {
        let node = Node::Fragment(vec![
            Node::element("img", AttributeSet::new().with("src", "a.png"), vec![]),
            Node::element("br", AttributeSet::new(), vec![Node::text("ignored")]),
        ]);
        assert_eq!(render(&node).unwrap(), r#"<img src="a.png"><br>"#);
    }

    #[test]
    fn test_nested_groups_flattened() {
        let attrs = AttributeSet::new()
            .with_data("controller", "dialog")
            .with_aria("hidden", true);
        let node = Node::element("div", attrs, vec![]);
        assert_eq!(
            render(&node).unwrap(),
            r#"<div data-controller="dialog" aria-hidden="true"></div>"#
        );
    }

    #[test]
    fn test_raw_passes_through() {
        let node = Node::element("div", AttributeSet::new(), vec![Node::raw("<b>&amp;</b>")]);
        assert_eq!(render(&node).unwrap(), "<div><b>&amp;</b></div>");
    }

    #[test]
    fn test_as_child() {
        let node = Node::as_child(
            AttributeSet::new().with("class", "btn").with("role", "button"),
            Node::raw(r#"<a href="/home">Home</a>"#),
        );
        assert_eq!(
            render(&node).unwrap(),
            r#"<a href="/home" class="btn">Home</a>"#
        );
    }

    #[test]
    fn test_as_child_of_built_nodes() {
        let node = Node::as_child(
            AttributeSet::new().with("class", "ring"),
            Node::element("span", AttributeSet::new(), vec![Node::text("x")]),
        );
        assert_eq!(render(&node).unwrap(), r#"<span class="ring">x</span>"#);
    }

    #[test]
    fn test_as_child_needs_one_root() {
        let node = Node::as_child(AttributeSet::new(), Node::text("plain"));
        assert_eq!(
            render(&node),
            Err(AtelierError::Graft(GraftError::EmptyFragment))
        );
    }
}
