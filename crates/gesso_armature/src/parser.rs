//! Fragment parser.
//!
//! Builds just enough structure to rewrite a fragment's root element: the
//! top-level nodes with their byte spans and, for each top-level element,
//! its decoded attributes. Nested content is tracked for nesting only and
//! is never materialized.

use gesso_carton::is_void_tag;
use gesso_relief::{AttrValue, AttributeSet};

use crate::errors::{ErrorCode, ParseError};
use crate::tokenizer::{Callbacks, QuoteType, Tokenizer};

/// A half-open byte range into the fragment source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[inline]
    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }
}

/// A top-level element of a fragment.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildElement {
    /// Tag name as written in the source
    pub tag: String,
    /// Attributes in source order, values entity-decoded
    pub attrs: AttributeSet,
    /// `<tag ...>` including the angle brackets
    pub open_tag: Span,
    /// The whole element through its closing tag
    pub span: Span,
    pub self_closing: bool,
}

/// A top-level node of a fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum FragmentNode {
    Element(ChildElement),
    Text(Span),
    /// `<!-- ... -->` including delimiters
    Comment(Span),
}

/// A parsed fragment borrowing its source.
#[derive(Debug, Clone)]
pub struct Fragment<'s> {
    source: &'s str,
    nodes: Vec<FragmentNode>,
}

impl<'s> Fragment<'s> {
    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn nodes(&self) -> &[FragmentNode] {
        &self.nodes
    }

    /// Top-level elements in source order.
    pub fn elements(&self) -> impl Iterator<Item = &ChildElement> {
        self.nodes.iter().filter_map(|node| match node {
            FragmentNode::Element(el) => Some(el),
            _ => None,
        })
    }

    /// The only top-level element, if there is exactly one.
    pub fn single_root(&self) -> Option<&ChildElement> {
        let mut elements = self.elements();
        let root = elements.next()?;
        elements.next().is_none().then_some(root)
    }

    /// Top-level text that is not just whitespace.
    pub fn has_stray_text(&self) -> bool {
        self.nodes.iter().any(|node| match node {
            FragmentNode::Text(span) => !span.slice(self.source).trim().is_empty(),
            _ => false,
        })
    }
}

/// An element whose close tag has not been seen yet.
#[derive(Debug)]
struct OpenElement {
    name: String,
}

/// An opening tag being read.
struct PendingTag {
    tag: String,
    start: usize,
    attrs: AttributeSet,
}

/// An attribute being read.
struct PendingAttr {
    name: String,
    name_start: usize,
    value: String,
}

/// Parser state driven by the tokenizer.
struct FragmentParser<'s> {
    source: &'s str,
    nodes: Vec<FragmentNode>,
    stack: Vec<OpenElement>,
    current_tag: Option<PendingTag>,
    current_attr: Option<PendingAttr>,
    /// Set while the end tag of a top-level element is being read
    closing_root: bool,
    errors: Vec<ParseError>,
}

impl<'s> FragmentParser<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            nodes: Vec::new(),
            stack: Vec::new(),
            current_tag: None,
            current_attr: None,
            closing_root: false,
            errors: Vec::new(),
        }
    }

    fn error(&mut self, code: ErrorCode, offset: usize) {
        self.errors.push(ParseError::new(code, offset));
    }

    fn finish_tag(&mut self, end: usize, self_closing: bool) {
        let Some(tag) = self.current_tag.take() else {
            return;
        };
        let name = tag.tag.to_ascii_lowercase();
        let open_tag = Span::new(tag.start, end + 1);
        let top_level = self.stack.is_empty();

        if top_level {
            self.nodes.push(FragmentNode::Element(ChildElement {
                tag: tag.tag,
                attrs: tag.attrs,
                open_tag,
                span: open_tag,
                self_closing,
            }));
        }

        if !self_closing && !is_void_tag(&name) {
            self.stack.push(OpenElement { name });
        }
    }

    /// Extend the last top-level element through `end`.
    fn extend_root(&mut self, end: usize) {
        if let Some(FragmentNode::Element(el)) = self.nodes.last_mut() {
            el.span.end = end;
        }
    }
}

impl Callbacks for FragmentParser<'_> {
    fn on_text(&mut self, start: usize, end: usize) {
        if !self.stack.is_empty() {
            return;
        }
        if let Some(FragmentNode::Text(span)) = self.nodes.last_mut() {
            if span.end == start {
                span.end = end;
                return;
            }
        }
        self.nodes.push(FragmentNode::Text(Span::new(start, end)));
    }

    fn on_open_tag_name(&mut self, start: usize, end: usize) {
        self.current_tag = Some(PendingTag {
            tag: self.source[start..end].to_string(),
            // The tokenizer only enters a tag name right after `<`.
            start: start - 1,
            attrs: AttributeSet::new(),
        });
    }

    fn on_open_tag_end(&mut self, end: usize) {
        self.finish_tag(end, false);
    }

    fn on_self_closing_tag(&mut self, end: usize) {
        self.finish_tag(end, true);
    }

    fn on_close_tag(&mut self, start: usize, end: usize) {
        let name = self.source[start..end].to_ascii_lowercase();
        let Some(index) = self.stack.iter().rposition(|open| open.name == name) else {
            self.error(ErrorCode::UnexpectedEndTag, start);
            return;
        };

        for _ in index + 1..self.stack.len() {
            self.error(ErrorCode::MissingEndTag, start);
        }
        self.stack.truncate(index);

        if self.stack.is_empty() {
            self.closing_root = true;
            self.extend_root(end);
        }
    }

    fn on_close_tag_end(&mut self, end: usize) {
        if std::mem::take(&mut self.closing_root) {
            self.extend_root(end + 1);
        }
    }

    fn on_attrib_name(&mut self, start: usize, end: usize) {
        self.current_attr = Some(PendingAttr {
            name: self.source[start..end].to_string(),
            name_start: start,
            value: String::new(),
        });
    }

    fn on_attrib_data(&mut self, start: usize, end: usize) {
        if let Some(attr) = self.current_attr.as_mut() {
            attr.value.push_str(&self.source[start..end]);
        }
    }

    fn on_attrib_end(&mut self, quote: QuoteType, _end: usize) {
        let Some(attr) = self.current_attr.take() else {
            return;
        };
        let Some(tag) = self.current_tag.as_mut() else {
            return;
        };

        if tag.attrs.contains_key(&attr.name) {
            self.errors
                .push(ParseError::new(ErrorCode::DuplicateAttribute, attr.name_start));
            return;
        }

        let value = match quote {
            QuoteType::NoValue => AttrValue::Bool(true),
            _ => AttrValue::Str(htmlize::unescape_attribute(attr.value.as_str()).to_string()),
        };
        tag.attrs.insert(&attr.name, value);
    }

    fn on_comment(&mut self, start: usize, end: usize) {
        if self.stack.is_empty() {
            let end = (end + 3).min(self.source.len());
            self.nodes.push(FragmentNode::Comment(Span::new(start - 4, end)));
        }
    }

    fn on_end(&mut self) {
        let len = self.source.len();
        if !self.stack.is_empty() {
            for _ in 0..self.stack.len() {
                self.error(ErrorCode::MissingEndTag, len);
            }
            self.stack.clear();
            self.extend_root(len);
        }
    }

    fn on_error(&mut self, code: ErrorCode, index: usize) {
        self.error(code, index);
    }
}

/// Parse an HTML fragment.
///
/// Parsing never fails outright: problems are returned alongside whatever
/// structure could be recovered, and the caller decides which are fatal
/// (see [`ErrorCode::is_fatal`]).
///
/// ```
/// use gesso_armature::parse_fragment;
///
/// let (fragment, errors) = parse_fragment(r#"<a href="/x" class="btn">Go</a>"#);
/// assert!(errors.is_empty());
///
/// let root = fragment.single_root().unwrap();
/// assert_eq!(root.tag, "a");
/// assert_eq!(root.attrs.get_text("href").as_deref(), Some("/x"));
/// assert_eq!(root.open_tag.slice(fragment.source()), r#"<a href="/x" class="btn">"#);
/// ```
pub fn parse_fragment(source: &str) -> (Fragment<'_>, Vec<ParseError>) {
    let mut tokenizer = Tokenizer::new(source, FragmentParser::new(source));
    tokenizer.tokenize();
    let parser = tokenizer.into_callbacks();

    (
        Fragment {
            source,
            nodes: parser.nodes,
        },
        parser.errors,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(errors: &[ParseError]) -> Vec<ErrorCode> {
        errors.iter().map(|e| e.code).collect()
    }

    #[test]
    fn test_parse_simple_element() {
        let (fragment, errors) = parse_fragment("<div></div>");
        assert!(errors.is_empty());
        assert_eq!(fragment.nodes().len(), 1);

        let root = fragment.single_root().unwrap();
        assert_eq!(root.tag, "div");
        assert!(!root.self_closing);
        assert_eq!(root.open_tag, Span::new(0, 5));
        assert_eq!(root.span, Span::new(0, 11));
    }

    #[test]
    fn test_parse_attributes() {
        let (fragment, errors) =
            parse_fragment(r#"<button type=submit data-x="a &amp; b" disabled title=''>Go</button>"#);
        assert!(errors.is_empty());

        let root = fragment.single_root().unwrap();
        assert_eq!(
            root.attrs.keys().collect::<Vec<_>>(),
            vec!["type", "data-x", "disabled", "title"]
        );
        assert_eq!(root.attrs.get("type"), Some(&AttrValue::from("submit")));
        assert_eq!(root.attrs.get("data-x"), Some(&AttrValue::from("a & b")));
        assert_eq!(root.attrs.get("disabled"), Some(&AttrValue::Bool(true)));
        assert_eq!(root.attrs.get("title"), Some(&AttrValue::from("")));
    }

    #[test]
    fn test_parse_nested_elements() {
        let source = "<ul><li><a href='#'>x</a></li><li>y</li></ul>";
        let (fragment, errors) = parse_fragment(source);
        assert!(errors.is_empty());
        assert_eq!(fragment.elements().count(), 1);
        assert_eq!(fragment.single_root().unwrap().span, Span::new(0, source.len()));
    }

    #[test]
    fn test_parse_void_and_self_closing() {
        let (fragment, errors) = parse_fragment("<img src=a.png><br/><span/>");
        assert!(errors.is_empty());

        let tags: Vec<_> = fragment.elements().map(|el| el.tag.as_str()).collect();
        assert_eq!(tags, vec!["img", "br", "span"]);
        assert!(fragment.single_root().is_none());

        let span = fragment.elements().nth(2).unwrap();
        assert!(span.self_closing);
    }

    #[test]
    fn test_top_level_text_and_comments() {
        let source = "  <!-- note -->\n<p>hi</p>\n";
        let (fragment, errors) = parse_fragment(source);
        assert!(errors.is_empty());
        assert!(!fragment.has_stray_text());

        let nodes = fragment.nodes();
        assert_eq!(nodes.len(), 5);
        assert!(matches!(nodes[0], FragmentNode::Text(_)));
        let FragmentNode::Comment(comment) = &nodes[1] else {
            panic!("expected a comment");
        };
        assert_eq!(comment.slice(source), "<!-- note -->");
        let FragmentNode::Element(p) = &nodes[3] else {
            panic!("expected an element");
        };
        assert_eq!(p.span.slice(source), "<p>hi</p>");
    }

    #[test]
    fn test_stray_text() {
        let (fragment, _) = parse_fragment("hello <b>x</b>");
        assert!(fragment.has_stray_text());
        assert!(fragment.single_root().is_some());
    }

    #[test]
    fn test_mismatched_close_tags() {
        let (fragment, errors) = parse_fragment("<div><span>x</div>");
        assert_eq!(codes(&errors), vec![ErrorCode::MissingEndTag]);
        assert_eq!(fragment.single_root().unwrap().span.end, 18);

        let (fragment, errors) = parse_fragment("<div>x</span></div>");
        assert_eq!(codes(&errors), vec![ErrorCode::UnexpectedEndTag]);
        assert_eq!(fragment.elements().count(), 1);
    }

    #[test]
    fn test_unclosed_root() {
        let (fragment, errors) = parse_fragment("<section><p>x");
        assert_eq!(
            codes(&errors),
            vec![ErrorCode::MissingEndTag, ErrorCode::MissingEndTag]
        );
        assert_eq!(fragment.single_root().unwrap().span.end, 13);
    }

    #[test]
    fn test_duplicate_attribute_keeps_first() {
        let (fragment, errors) = parse_fragment(r#"<div id="a" ID="b"></div>"#);
        assert_eq!(
            errors,
            vec![ParseError::new(ErrorCode::DuplicateAttribute, 12)]
        );
        let root = fragment.single_root().unwrap();
        assert_eq!(root.attrs.get_text("id").as_deref(), Some("a"));
        assert_eq!(root.attrs.len(), 1);
    }

    #[test]
    fn test_fatal_errors() {
        let (_, errors) = parse_fragment(r#"<a href="/x"#);
        assert!(errors.iter().any(|e| e.code.is_fatal()));

        let (_, errors) = parse_fragment("<p>x</p><!-- open");
        assert_eq!(codes(&errors), vec![ErrorCode::EofInComment]);
    }

    #[test]
    fn test_raw_text_content_is_not_parsed() {
        let (fragment, errors) = parse_fragment("<script>let t = '<div>';</script>");
        assert!(errors.is_empty());
        assert_eq!(fragment.elements().count(), 1);
    }

    #[test]
    fn test_uppercase_tags() {
        let source = "<DIV Class=x></div>";
        let (fragment, errors) = parse_fragment(source);
        assert!(errors.is_empty());
        let root = fragment.single_root().unwrap();
        assert_eq!(root.tag, "DIV");
        assert_eq!(root.attrs.get_text("class").as_deref(), Some("x"));
    }
}
