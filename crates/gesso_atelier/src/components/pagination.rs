use std::fmt;

use gesso_relief::AttributeSet;

use super::{root_attrs, styled, Component, BUTTON};
use crate::{Atelier, AtelierError, Node, Selection, VariantTable};

pub static PAGINATION: VariantTable = VariantTable {
    component: "pagination",
    base: "mx-auto flex w-full justify-center",
    axes: &[],
};

const LIST_CLASSES: &str = "flex flex-row items-center gap-1";
const ELLIPSIS_CLASSES: &str = "flex h-9 w-9 items-center justify-center";
const PREVIOUS_CLASSES: &str = "gap-1 pl-2.5";
const NEXT_CLASSES: &str = "gap-1 pr-2.5";
const DISABLED_CLASSES: &str = "pointer-events-none opacity-50";

/// One slot of a page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

impl fmt::Display for PageItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Page(page) => write!(f, "{page}"),
            Self::Ellipsis => f.write_str("\u{2026}"),
        }
    }
}

/// The pages to show around `current`, with ellipses for the gaps.
///
/// The first and last pages are always shown, along with `siblings` pages
/// on each side of the current one. The window keeps a constant width of
/// `2 * siblings + 5` slots so the control does not jump while paging.
///
/// ```
/// use gesso_atelier::{page_window, PageItem};
///
/// let window = page_window(5, 10, 1).unwrap();
/// let shown: Vec<String> = window.iter().map(PageItem::to_string).collect();
/// assert_eq!(shown.join(" "), "1 … 4 5 6 … 10");
/// ```
pub fn page_window(current: usize, total: usize, siblings: usize) -> Result<Vec<PageItem>, AtelierError> {
    if total == 0 || current == 0 || current > total {
        return Err(AtelierError::InvalidPagination { current, total });
    }

    let slots = siblings.saturating_mul(2).saturating_add(5);
    if total <= slots {
        return Ok((1..=total).map(PageItem::Page).collect());
    }

    let left = current.saturating_sub(siblings).max(1);
    let right = current.saturating_add(siblings).min(total);
    let left_gap = left > 2;
    let right_gap = right < total - 1;
    // Pages shown next to a single gap: the sibling range plus current and one boundary
    let edge = siblings.saturating_mul(2).saturating_add(3);

    let mut items = Vec::with_capacity(slots);
    match (left_gap, right_gap) {
        (false, true) => {
            items.extend((1..=edge).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
        (true, false) => {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend((total + 1 - edge..=total).map(PageItem::Page));
        }
        _ => {
            items.push(PageItem::Page(1));
            items.push(PageItem::Ellipsis);
            items.extend((left..=right).map(PageItem::Page));
            items.push(PageItem::Ellipsis);
            items.push(PageItem::Page(total));
        }
    }
    Ok(items)
}

/// Page navigation links.
///
/// Links are styled with the button table: ghost for ordinary pages,
/// outline for the current one. `href` is a template in which `{page}` is
/// replaced by the page number.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub current: usize,
    pub total: usize,
    pub siblings: usize,
    pub href: String,
    pub attrs: AttributeSet,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            total: 1,
            siblings: 1,
            href: "?page={page}".to_string(),
            attrs: AttributeSet::new(),
        }
    }
}

impl Pagination {
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current,
            total,
            ..Self::default()
        }
    }

    pub fn siblings(mut self, siblings: usize) -> Self {
        self.siblings = siblings;
        self
    }

    pub fn href(mut self, template: impl Into<String>) -> Self {
        self.href = template.into();
        self
    }

    pub fn attrs(mut self, attrs: AttributeSet) -> Self {
        self.attrs = attrs;
        self
    }

    fn page_href(&self, page: usize) -> String {
        self.href.replace("{page}", &page.to_string())
    }

    fn page_link(&self, atelier: &Atelier, page: usize) -> Result<Node, AtelierError> {
        let is_current = page == self.current;
        let variant = if is_current { "outline" } else { "ghost" };
        let selection = Selection::new().with("variant", variant).with("size", "icon");
        let classes = atelier.classes(&BUTTON, &selection)?;

        let mut attrs = AttributeSet::new().with("href", self.page_href(page));
        if is_current {
            attrs = attrs.with_aria("current", "page");
        }
        Ok(styled("a", &classes, attrs, vec![Node::text(page.to_string())]))
    }

    /// The previous or next link, disabled at either end.
    fn step_link(
        &self,
        atelier: &Atelier,
        target: Option<usize>,
        label: &str,
        extra: &str,
    ) -> Result<Node, AtelierError> {
        let selection = Selection::new().with("variant", "ghost");
        let base = atelier.classes(&BUTTON, &selection)?;

        let (classes, attrs) = match target {
            Some(page) => (
                atelier.merger().merge_classes(&[&base, extra]),
                AttributeSet::new()
                    .with("href", self.page_href(page))
                    .with_aria("label", format!("Go to {} page", label.to_lowercase())),
            ),
            None => (
                atelier.merger().merge_classes(&[&base, extra, DISABLED_CLASSES]),
                AttributeSet::new().with_aria("disabled", true),
            ),
        };
        Ok(styled("a", &classes, attrs, vec![Node::text(label)]))
    }
}

impl Component for Pagination {
    const NAME: &'static str = "pagination";

    fn build(&self, atelier: &Atelier) -> Result<Node, AtelierError> {
        let window = page_window(self.current, self.total, self.siblings)?;

        let previous = (self.current > 1).then(|| self.current - 1);
        let next = (self.current < self.total).then(|| self.current + 1);

        let mut items = Vec::with_capacity(window.len() + 2);
        items.push(self.step_link(atelier, previous, "Previous", PREVIOUS_CLASSES)?);
        for item in window {
            let node = match item {
                PageItem::Page(page) => self.page_link(atelier, page)?,
                PageItem::Ellipsis => styled(
                    "span",
                    ELLIPSIS_CLASSES,
                    AttributeSet::new().with_aria("hidden", true),
                    vec![Node::text(item.to_string())],
                ),
            };
            items.push(node);
        }
        items.push(self.step_link(atelier, next, "Next", NEXT_CLASSES)?);

        let list = styled(
            "ul",
            LIST_CLASSES,
            AttributeSet::new(),
            items
                .into_iter()
                .map(|item| Node::element("li", AttributeSet::new(), vec![item]))
                .collect(),
        );

        let defaults = AttributeSet::new()
            .with("role", "navigation")
            .with_aria("label", "pagination");
        let attrs = root_attrs(atelier, &PAGINATION, &Selection::new(), defaults, &self.attrs)?;
        Ok(Node::element("nav", attrs, vec![list]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Theme;

    fn shown(current: usize, total: usize, siblings: usize) -> String {
        page_window(current, total, siblings)
            .unwrap()
            .iter()
            .map(PageItem::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_small_totals_show_every_page() {
        assert_eq!(shown(1, 1, 1), "1");
        assert_eq!(shown(3, 7, 1), "1 2 3 4 5 6 7");
        assert_eq!(shown(2, 4, usize::MAX), "1 2 3 4");
    }

    #[test]
    fn test_window_shapes() {
        assert_eq!(shown(1, 10, 1), "1 2 3 4 5 … 10");
        assert_eq!(shown(3, 10, 1), "1 2 3 4 5 … 10");
        assert_eq!(shown(4, 10, 1), "1 … 3 4 5 … 10");
        assert_eq!(shown(5, 10, 1), "1 … 4 5 6 … 10");
        assert_eq!(shown(8, 10, 1), "1 … 6 7 8 9 10");
        assert_eq!(shown(10, 10, 1), "1 … 6 7 8 9 10");
        assert_eq!(shown(10, 20, 2), "1 … 8 9 10 11 12 … 20");
    }

    #[test]
    fn test_window_width_is_constant() {
        for current in 1..=30 {
            assert_eq!(page_window(current, 30, 1).unwrap().len(), 7);
        }
    }

    #[test]
    fn test_invalid_pages() {
        for (current, total) in [(0, 5), (6, 5), (1, 0)] {
            assert_eq!(
                page_window(current, total, 1),
                Err(AtelierError::InvalidPagination { current, total })
            );
        }
    }

    #[test]
    fn test_render() {
        let atelier = Atelier::with_theme(
            Theme::new()
                .with_classes("pagination.base", "pager")
                .with_classes("button.base", "btn")
                .with_classes("button.variant.ghost", "ghost")
                .with_classes("button.variant.outline", "outline")
                .with_classes("button.size.default", "md")
                .with_classes("button.size.icon", "icon"),
        );
        let html = atelier
            .render_component(&Pagination::new(1, 2).href("/posts?p={page}"))
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<nav class="pager" role="navigation" aria-label="pagination">"#,
                r#"<ul class="flex flex-row items-center gap-1">"#,
                r#"<li><a class="btn ghost md gap-1 pl-2.5 pointer-events-none opacity-50" aria-disabled="true">Previous</a></li>"#,
                r#"<li><a class="btn outline icon" href="/posts?p=1" aria-current="page">1</a></li>"#,
                r#"<li><a class="btn ghost icon" href="/posts?p=2">2</a></li>"#,
                r#"<li><a class="btn ghost md gap-1 pr-2.5" href="/posts?p=2" aria-label="Go to next page">Next</a></li>"#,
                "</ul></nav>"
            )
        );
    }
}
