//! The node tree components build.

use gesso_relief::AttributeSet;

/// A node of rendered output.
///
/// Components return trees of nodes; [`crate::render`] serializes a tree in
/// one depth-first pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element {
        tag: String,
        attrs: AttributeSet,
        children: Vec<Node>,
    },
    /// Text content, escaped when rendered
    Text(String),
    /// Trusted markup, written as-is
    Raw(String),
    /// Siblings without a wrapper
    Fragment(Vec<Node>),
    /// `child` rendered, then `attrs` grafted onto its single root element
    AsChild {
        attrs: AttributeSet,
        child: Box<Node>,
    },
}

impl Node {
    pub fn element(tag: impl Into<String>, attrs: AttributeSet, children: Vec<Node>) -> Self {
        Self::Element {
            tag: tag.into(),
            attrs,
            children,
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    pub fn raw(html: impl Into<String>) -> Self {
        Self::Raw(html.into())
    }

    pub fn as_child(attrs: AttributeSet, child: Node) -> Self {
        Self::AsChild {
            attrs,
            child: Box::new(child),
        }
    }

    /// Wrap several nodes, unwrapping a single one.
    pub fn fragment(mut children: Vec<Node>) -> Self {
        if children.len() == 1 {
            if let Some(only) = children.pop() {
                return only;
            }
        }
        Self::Fragment(children)
    }

    /// Whether the node renders to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) | Self::Raw(text) => text.is_empty(),
            Self::Fragment(children) => children.iter().all(Node::is_empty),
            Self::Element { .. } | Self::AsChild { .. } => false,
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}
