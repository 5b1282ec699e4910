//! Tailwind-style utility conflict resolution.
//!
//! A class token is read as `modifier:modifier:!utility-value`. The utility
//! part is classified into a group (padding, text color, display, ...). Two
//! tokens conflict when they share modifiers, importance and group; the one
//! with higher priority survives. Some groups also override narrower ones:
//! `p-4` replaces an earlier `px-2`, but an earlier `p-4` survives a later
//! `px-2`.
//!
//! The group table covers the utilities design-system components actually
//! emit. Tokens it does not recognize never conflict with anything.

use std::borrow::Cow;

use gesso_carton::FxHashSet;
use once_cell::sync::Lazy;
use phf::phf_map;
use regex::Regex;

use super::ClassMerger;

/// Utilities whose whole name identifies the group.
static EXACT_GROUPS: phf::Map<&'static str, &'static str> = phf_map! {
    "block" => "display",
    "inline-block" => "display",
    "inline" => "display",
    "flex" => "display",
    "inline-flex" => "display",
    "table" => "display",
    "inline-table" => "display",
    "table-cell" => "display",
    "table-row" => "display",
    "flow-root" => "display",
    "grid" => "display",
    "inline-grid" => "display",
    "contents" => "display",
    "list-item" => "display",
    "hidden" => "display",
    "static" => "position",
    "fixed" => "position",
    "absolute" => "position",
    "relative" => "position",
    "sticky" => "position",
    "visible" => "visibility",
    "invisible" => "visibility",
    "collapse" => "visibility",
    "sr-only" => "sr",
    "not-sr-only" => "sr",
    "uppercase" => "text-transform",
    "lowercase" => "text-transform",
    "capitalize" => "text-transform",
    "normal-case" => "text-transform",
    "italic" => "font-style",
    "not-italic" => "font-style",
    "underline" => "text-decoration",
    "overline" => "text-decoration",
    "line-through" => "text-decoration",
    "no-underline" => "text-decoration",
    "truncate" => "text-overflow",
    "text-ellipsis" => "text-overflow",
    "text-clip" => "text-overflow",
    "flex-row" => "flex-direction",
    "flex-row-reverse" => "flex-direction",
    "flex-col" => "flex-direction",
    "flex-col-reverse" => "flex-direction",
    "flex-wrap" => "flex-wrap",
    "flex-wrap-reverse" => "flex-wrap",
    "flex-nowrap" => "flex-wrap",
    "box-border" => "box-sizing",
    "box-content" => "box-sizing",
    "isolate" => "isolation",
    "isolation-auto" => "isolation",
    "antialiased" => "font-smoothing",
    "subpixel-antialiased" => "font-smoothing",
    "transition" => "transition",
    "shadow" => "shadow",
    "rounded" => "rounded",
    "border" => "border-w",
    "border-x" => "border-w-x",
    "border-y" => "border-w-y",
    "border-t" => "border-w-t",
    "border-r" => "border-w-r",
    "border-b" => "border-w-b",
    "border-l" => "border-w-l",
    "border-s" => "border-w-s",
    "border-e" => "border-w-e",
    "ring" => "ring-w",
    "ring-inset" => "ring-inset",
    "outline" => "outline-style",
    "resize" => "resize",
    "grow" => "grow",
    "shrink" => "shrink",
    "divide-x" => "divide-x",
    "divide-y" => "divide-y",
};

/// Which groups a group overrides besides itself.
fn conflicts(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        "inset" => &["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "overflow" => &["overflow-x", "overflow-y"],
        "overscroll" => &["overscroll-x", "overscroll-y"],
        "font-size" => &["leading"],
        "scale" => &["scale-x", "scale-y"],
        "rounded" => &[
            "rounded-s", "rounded-e", "rounded-t", "rounded-r", "rounded-b", "rounded-l",
            "rounded-ss", "rounded-se", "rounded-ee", "rounded-es",
            "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
        ],
        "rounded-s" => &["rounded-ss", "rounded-es"],
        "rounded-e" => &["rounded-se", "rounded-ee"],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &[
            "border-w-x", "border-w-y", "border-w-s", "border-w-e",
            "border-w-t", "border-w-r", "border-w-b", "border-w-l",
        ],
        "border-w-x" => &["border-w-r", "border-w-l"],
        "border-w-y" => &["border-w-t", "border-w-b"],
        "border-color" => &[
            "border-color-x", "border-color-y", "border-color-s", "border-color-e",
            "border-color-t", "border-color-r", "border-color-b", "border-color-l",
        ],
        "border-color-x" => &["border-color-r", "border-color-l"],
        "border-color-y" => &["border-color-t", "border-color-b"],
        _ => &[],
    }
}

/// How the value after a utility name picks the group.
#[derive(Clone, Copy)]
enum Rule {
    /// Any value belongs to the named group.
    Any(&'static str),
    Text,
    Font,
    Background,
    /// Border width or color for the named side suffix.
    Border(&'static str),
    Rounded(&'static str),
    Shadow,
    Ring,
    RingOffset,
    Outline,
    Decoration,
    Object,
    Stroke,
    Divide,
    Flex,
}

/// Utility names, longest first so `px` is tried before `p`.
static UTILITIES: &[(&str, Rule)] = &[
    ("underline-offset", Rule::Any("underline-offset")),
    ("pointer-events", Rule::Any("pointer-events")),
    ("outline-offset", Rule::Any("outline-offset")),
    ("place-content", Rule::Any("place-content")),
    ("justify-items", Rule::Any("justify-items")),
    ("justify-self", Rule::Any("justify-self")),
    ("place-items", Rule::Any("place-items")),
    ("place-self", Rule::Any("place-self")),
    ("line-clamp", Rule::Any("line-clamp")),
    ("overflow-x", Rule::Any("overflow-x")),
    ("overflow-y", Rule::Any("overflow-y")),
    ("overscroll-x", Rule::Any("overscroll-x")),
    ("overscroll-y", Rule::Any("overscroll-y")),
    ("ring-offset", Rule::RingOffset),
    ("translate-x", Rule::Any("translate-x")),
    ("translate-y", Rule::Any("translate-y")),
    ("whitespace", Rule::Any("whitespace")),
    ("grid-cols", Rule::Any("grid-cols")),
    ("grid-rows", Rule::Any("grid-rows")),
    ("col-start", Rule::Any("col-start")),
    ("row-start", Rule::Any("row-start")),
    ("col-span", Rule::Any("col-span")),
    ("row-span", Rule::Any("row-span")),
    ("overscroll", Rule::Any("overscroll")),
    ("col-end", Rule::Any("col-end")),
    ("row-end", Rule::Any("row-end")),
    ("rounded-ss", Rule::Rounded("rounded-ss")),
    ("rounded-se", Rule::Rounded("rounded-se")),
    ("rounded-ee", Rule::Rounded("rounded-ee")),
    ("rounded-es", Rule::Rounded("rounded-es")),
    ("rounded-tl", Rule::Rounded("rounded-tl")),
    ("rounded-tr", Rule::Rounded("rounded-tr")),
    ("rounded-br", Rule::Rounded("rounded-br")),
    ("rounded-bl", Rule::Rounded("rounded-bl")),
    ("rounded-s", Rule::Rounded("rounded-s")),
    ("rounded-e", Rule::Rounded("rounded-e")),
    ("rounded-t", Rule::Rounded("rounded-t")),
    ("rounded-r", Rule::Rounded("rounded-r")),
    ("rounded-b", Rule::Rounded("rounded-b")),
    ("rounded-l", Rule::Rounded("rounded-l")),
    ("rounded", Rule::Rounded("rounded")),
    ("border-x", Rule::Border("-x")),
    ("border-y", Rule::Border("-y")),
    ("border-s", Rule::Border("-s")),
    ("border-e", Rule::Border("-e")),
    ("border-t", Rule::Border("-t")),
    ("border-r", Rule::Border("-r")),
    ("border-b", Rule::Border("-b")),
    ("border-l", Rule::Border("-l")),
    ("border", Rule::Border("")),
    ("decoration", Rule::Decoration),
    ("transition", Rule::Any("transition")),
    ("duration", Rule::Any("duration")),
    ("tracking", Rule::Any("tracking")),
    ("leading", Rule::Any("leading")),
    ("overflow", Rule::Any("overflow")),
    ("content", Rule::Any("align-content")),
    ("justify", Rule::Any("justify-content")),
    ("inset-x", Rule::Any("inset-x")),
    ("inset-y", Rule::Any("inset-y")),
    ("opacity", Rule::Any("opacity")),
    ("outline", Rule::Outline),
    ("divide", Rule::Divide),
    ("stroke", Rule::Stroke),
    ("object", Rule::Object),
    ("cursor", Rule::Any("cursor")),
    ("select", Rule::Any("user-select")),
    ("shadow", Rule::Shadow),
    ("bottom", Rule::Any("bottom")),
    ("origin", Rule::Any("origin")),
    ("rotate", Rule::Any("rotate")),
    ("scale-x", Rule::Any("scale-x")),
    ("scale-y", Rule::Any("scale-y")),
    ("scale", Rule::Any("scale")),
    ("shrink", Rule::Any("shrink")),
    ("aspect", Rule::Any("aspect")),
    ("resize", Rule::Any("resize")),
    ("inset", Rule::Any("inset")),
    ("items", Rule::Any("align-items")),
    ("order", Rule::Any("order")),
    ("basis", Rule::Any("basis")),
    ("right", Rule::Any("right")),
    ("start", Rule::Any("start")),
    ("delay", Rule::Any("delay")),
    ("gap-x", Rule::Any("gap-x")),
    ("gap-y", Rule::Any("gap-y")),
    ("min-w", Rule::Any("min-w")),
    ("max-w", Rule::Any("max-w")),
    ("min-h", Rule::Any("min-h")),
    ("max-h", Rule::Any("max-h")),
    ("space-x", Rule::Any("space-x")),
    ("space-y", Rule::Any("space-y")),
    ("animate", Rule::Any("animate")),
    ("align", Rule::Any("vertical-align")),
    ("break", Rule::Any("break")),
    ("ease", Rule::Any("ease")),
    ("flex", Rule::Flex),
    ("grow", Rule::Any("grow")),
    ("self", Rule::Any("align-self")),
    ("size", Rule::Any("size")),
    ("text", Rule::Text),
    ("font", Rule::Font),
    ("ring", Rule::Ring),
    ("fill", Rule::Any("fill")),
    ("left", Rule::Any("left")),
    ("list", Rule::Any("list-style")),
    ("gap", Rule::Any("gap")),
    ("top", Rule::Any("top")),
    ("end", Rule::Any("end")),
    ("bg", Rule::Background),
    ("px", Rule::Any("px")),
    ("py", Rule::Any("py")),
    ("ps", Rule::Any("ps")),
    ("pe", Rule::Any("pe")),
    ("pt", Rule::Any("pt")),
    ("pr", Rule::Any("pr")),
    ("pb", Rule::Any("pb")),
    ("pl", Rule::Any("pl")),
    ("mx", Rule::Any("mx")),
    ("my", Rule::Any("my")),
    ("ms", Rule::Any("ms")),
    ("me", Rule::Any("me")),
    ("mt", Rule::Any("mt")),
    ("mr", Rule::Any("mr")),
    ("mb", Rule::Any("mb")),
    ("ml", Rule::Any("ml")),
    ("z", Rule::Any("z")),
    ("w", Rule::Any("w")),
    ("h", Rule::Any("h")),
    ("p", Rule::Any("p")),
    ("m", Rule::Any("m")),
];

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(\.\d+)?$").unwrap());

static ARBITRARY_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(?:([a-z-]+):)?(.+)\]$").unwrap());

static LENGTH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(-?\d*\.?\d+(px|r?em|%|vh|vw|dvh|svh|lvh|vmin|vmax|ch|ex|pt|pc|in|cm|mm)|0|(calc|min|max|clamp)\(.+\))$",
    )
    .unwrap()
});

static COLOR_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(#[0-9a-fA-F]{3,8}|(rgba?|hsla?|oklch|oklab|lab|lch|color)\(.+\))$").unwrap());

static ARBITRARY_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[(-?[a-z][a-z-]*):.+\]$").unwrap());

const TEXT_SIZES: &[&str] = &["xs", "sm", "base", "lg", "xl"];
const TEXT_ALIGNS: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const TEXT_WRAPS: &[&str] = &["wrap", "nowrap", "balance", "pretty"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const BG_ATTACHMENTS: &[&str] = &["fixed", "local", "scroll"];
const BG_POSITIONS: &[&str] = &[
    "bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top",
    "top",
];
const BG_REPEATS: &[&str] = &[
    "repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space",
];
const BG_SIZES: &[&str] = &["auto", "cover", "contain"];
const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];
const OBJECT_FITS: &[&str] = &["contain", "cover", "fill", "none", "scale-down"];
const DECORATION_STYLES: &[&str] = &["solid", "double", "dotted", "dashed", "wavy"];

/// A class token split into its parts.
struct ParsedClass<'t> {
    modifiers: Vec<&'t str>,
    important: bool,
    base: &'t str,
}

impl ParsedClass<'_> {
    /// Conflict scope: sorted modifiers plus the importance marker.
    fn scope(&self) -> String {
        let mut modifiers = self.modifiers.clone();
        modifiers.sort_unstable();
        let mut scope = modifiers.join(":");
        if !scope.is_empty() {
            scope.push(':');
        }
        if self.important {
            scope.push('!');
        }
        scope
    }
}

fn parse_class(token: &str) -> ParsedClass<'_> {
    let mut modifiers = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in token.char_indices() {
        match c {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => {
                modifiers.push(&token[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    let mut base = &token[start..];
    let mut important = false;
    if let Some(rest) = base.strip_prefix('!') {
        base = rest;
        important = true;
    } else if let Some(rest) = base.strip_suffix('!') {
        base = rest;
        important = true;
    }

    ParsedClass {
        modifiers,
        important,
        base,
    }
}

/// Tailwind-style class merger.
///
/// ```
/// use gesso_weave::{ClassMerger, TailwindMerger};
///
/// let merger = TailwindMerger::default();
/// let tokens = ["px-2", "py-1", "bg-red-500", "p-3", "bg-primary"]
///     .map(String::from)
///     .to_vec();
/// assert_eq!(merger.resolve(tokens), ["p-3", "bg-primary"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TailwindMerger {
    prefix: Option<String>,
}

impl TailwindMerger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only consider tokens carrying a configured prefix (`tw-p-4`).
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// The conflict group a token belongs to, including its scope.
    fn group_key(&self, token: &str) -> Option<(String, Cow<'static, str>)> {
        let parsed = parse_class(token);
        let mut base = parsed.base;
        if let Some(prefix) = self.prefix.as_deref() {
            base = base.strip_prefix(prefix)?;
        }
        let group = classify(base)?;
        Some((parsed.scope(), group))
    }
}

impl ClassMerger for TailwindMerger {
    fn resolve(&self, tokens: Vec<String>) -> Vec<String> {
        let mut claimed: FxHashSet<String> = FxHashSet::default();
        let mut keep = vec![false; tokens.len()];

        for (index, token) in tokens.iter().enumerate().rev() {
            let Some((scope, group)) = self.group_key(token) else {
                keep[index] = true;
                continue;
            };
            if !claimed.insert(format!("{scope}{group}")) {
                continue;
            }
            keep[index] = true;
            for overridden in conflicts(&group) {
                claimed.insert(format!("{scope}{overridden}"));
            }
        }

        tokens
            .into_iter()
            .zip(keep)
            .filter_map(|(token, keep)| keep.then_some(token))
            .collect()
    }
}

/// Classify a utility (modifiers and importance already stripped).
fn classify(base: &str) -> Option<Cow<'static, str>> {
    let base = base.strip_prefix('-').unwrap_or(base);

    if let Some(group) = EXACT_GROUPS.get(base) {
        return Some(Cow::Borrowed(group));
    }

    if ARBITRARY_PROPERTY.is_match(base) {
        let property = base[1..].split(':').next().unwrap_or_default();
        return Some(Cow::Owned(format!("[{property}]")));
    }

    for (utility, rule) in UTILITIES {
        let Some(value) = base
            .strip_prefix(utility)
            .and_then(|rest| rest.strip_prefix('-'))
        else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        return apply_rule(*rule, value).map(Cow::Borrowed);
    }

    None
}

fn apply_rule(rule: Rule, value: &str) -> Option<&'static str> {
    Some(match rule {
        Rule::Any(group) => group,
        Rule::Text => {
            let head = value.split('/').next().unwrap_or(value);
            if is_text_size(head) || is_arbitrary_length(value) {
                "font-size"
            } else if TEXT_ALIGNS.contains(&value) {
                "text-align"
            } else if TEXT_WRAPS.contains(&value) {
                "text-wrap"
            } else {
                "text-color"
            }
        }
        Rule::Font => {
            if FONT_WEIGHTS.contains(&value) || arbitrary(value).is_some_and(|v| NUMBER.is_match(v)) {
                "font-weight"
            } else {
                "font-family"
            }
        }
        Rule::Background => {
            if BG_ATTACHMENTS.contains(&value) {
                "bg-attachment"
            } else if BG_POSITIONS.contains(&value) {
                "bg-position"
            } else if BG_REPEATS.contains(&value) {
                "bg-repeat"
            } else if BG_SIZES.contains(&value) {
                "bg-size"
            } else if value == "none" || value.starts_with("gradient-") || value.starts_with("linear-") {
                "bg-image"
            } else if value.starts_with("clip-") {
                "bg-clip"
            } else if value.starts_with("origin-") {
                "bg-origin"
            } else {
                "bg-color"
            }
        }
        Rule::Border(side) => {
            if is_width(value) {
                border_group("border-w", side)
            } else if side.is_empty() && BORDER_STYLES.contains(&value) {
                "border-style"
            } else if side.is_empty() && matches!(value, "collapse" | "separate") {
                "border-collapse"
            } else {
                border_group("border-color", side)
            }
        }
        Rule::Rounded(group) => group,
        Rule::Shadow => {
            if SHADOW_SIZES.contains(&value) || arbitrary(value).is_some_and(|v| !is_color(v)) {
                "shadow"
            } else {
                "shadow-color"
            }
        }
        Rule::Ring => {
            if is_width(value) {
                "ring-w"
            } else {
                "ring-color"
            }
        }
        Rule::RingOffset => {
            if is_width(value) {
                "ring-offset-w"
            } else {
                "ring-offset-color"
            }
        }
        Rule::Outline => {
            if is_width(value) {
                "outline-w"
            } else if BORDER_STYLES.contains(&value) {
                "outline-style"
            } else {
                "outline-color"
            }
        }
        Rule::Decoration => {
            if is_width(value) || value == "auto" || value == "from-font" {
                "decoration-thickness"
            } else if DECORATION_STYLES.contains(&value) {
                "decoration-style"
            } else {
                "decoration-color"
            }
        }
        Rule::Object => {
            if OBJECT_FITS.contains(&value) {
                "object-fit"
            } else {
                "object-position"
            }
        }
        Rule::Stroke => {
            if is_width(value) {
                "stroke-w"
            } else {
                "stroke-color"
            }
        }
        Rule::Divide => {
            if BORDER_STYLES.contains(&value) {
                "divide-style"
            } else if value.starts_with("x") {
                "divide-x"
            } else if value.starts_with("y") {
                "divide-y"
            } else {
                "divide-color"
            }
        }
        Rule::Flex => "flex",
    })
}

fn border_group(kind: &'static str, side: &'static str) -> &'static str {
    match (kind, side) {
        ("border-w", "") => "border-w",
        ("border-w", "-x") => "border-w-x",
        ("border-w", "-y") => "border-w-y",
        ("border-w", "-s") => "border-w-s",
        ("border-w", "-e") => "border-w-e",
        ("border-w", "-t") => "border-w-t",
        ("border-w", "-r") => "border-w-r",
        ("border-w", "-b") => "border-w-b",
        ("border-w", "-l") => "border-w-l",
        ("border-color", "-x") => "border-color-x",
        ("border-color", "-y") => "border-color-y",
        ("border-color", "-s") => "border-color-s",
        ("border-color", "-e") => "border-color-e",
        ("border-color", "-t") => "border-color-t",
        ("border-color", "-r") => "border-color-r",
        ("border-color", "-b") => "border-color-b",
        ("border-color", "-l") => "border-color-l",
        _ => "border-color",
    }
}

/// The inside of an arbitrary `[...]` value, with any type label removed.
fn arbitrary(value: &str) -> Option<&str> {
    ARBITRARY_VALUE
        .captures(value)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

fn arbitrary_label(value: &str) -> Option<&str> {
    ARBITRARY_VALUE
        .captures(value)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn is_text_size(value: &str) -> bool {
    if TEXT_SIZES.contains(&value) {
        return true;
    }
    // 2xl .. 9xl
    value
        .strip_suffix("xl")
        .is_some_and(|n| n.parse::<u8>().is_ok_and(|n| (2..=9).contains(&n)))
}

fn is_arbitrary_length(value: &str) -> bool {
    match arbitrary_label(value) {
        Some(label) => label == "length",
        None => arbitrary(value).is_some_and(|v| LENGTH.is_match(v)),
    }
}

fn is_color(inner: &str) -> bool {
    COLOR_FUNCTION.is_match(inner)
}

/// Widths are bare numbers (`border-2`) or arbitrary lengths (`ring-[3px]`).
fn is_width(value: &str) -> bool {
    NUMBER.is_match(value) || is_arbitrary_length(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merge(classes: &str) -> String {
        let tokens = classes.split_whitespace().map(String::from).collect();
        TailwindMerger::default().resolve(tokens).join(" ")
    }

    #[test]
    fn test_later_color_wins() {
        assert_eq!(merge("bg-red-500 bg-primary"), "bg-primary");
        assert_eq!(merge("text-sm text-white text-lg"), "text-white text-lg");
    }

    #[test]
    fn test_padding_hierarchy() {
        assert_eq!(merge("p-4 px-2"), "p-4 px-2");
        assert_eq!(merge("px-2 p-4"), "p-4");
        assert_eq!(merge("pt-1 py-2"), "py-2");
        assert_eq!(merge("py-2 pt-1"), "py-2 pt-1");
    }

    #[test]
    fn test_modifiers_separate_groups() {
        assert_eq!(merge("hover:bg-red-500 bg-blue-500"), "hover:bg-red-500 bg-blue-500");
        assert_eq!(
            merge("hover:focus:bg-red-500 focus:hover:bg-blue-500"),
            "focus:hover:bg-blue-500"
        );
        assert_eq!(merge("!p-2 p-4"), "!p-2 p-4");
    }

    #[test]
    fn test_text_families() {
        assert_eq!(merge("text-left text-red-500 text-center"), "text-red-500 text-center");
        assert_eq!(merge("text-[14px] text-base"), "text-base");
        assert_eq!(merge("text-[#fff] text-primary-foreground"), "text-primary-foreground");
        assert_eq!(merge("leading-tight text-lg"), "text-lg");
        assert_eq!(merge("font-bold font-mono font-medium"), "font-mono font-medium");
    }

    #[test]
    fn test_border_families() {
        assert_eq!(merge("border border-2"), "border-2");
        assert_eq!(merge("border-input border-destructive"), "border-destructive");
        assert_eq!(merge("border-2 border-dashed border-red-500"), "border-2 border-dashed border-red-500");
        assert_eq!(merge("border-t-2 border-4"), "border-4");
    }

    #[test]
    fn test_display_and_position() {
        assert_eq!(merge("flex hidden"), "hidden");
        assert_eq!(merge("inline-flex items-center flex"), "items-center flex");
        assert_eq!(merge("absolute relative"), "relative");
    }

    #[test]
    fn test_rounded_and_shadow() {
        assert_eq!(merge("rounded-t-lg rounded-md"), "rounded-md");
        assert_eq!(merge("rounded-md rounded-t-lg"), "rounded-md rounded-t-lg");
        assert_eq!(merge("shadow-sm shadow-lg shadow-black"), "shadow-lg shadow-black");
    }

    #[test]
    fn test_ring_widths_and_colors() {
        assert_eq!(merge("ring-2 ring-ring ring-offset-2 ring-1"), "ring-ring ring-offset-2 ring-1");
        assert_eq!(merge("ring-[3px] ring-2"), "ring-2");
    }

    #[test]
    fn test_arbitrary_properties() {
        assert_eq!(merge("[mask-type:luminance] [mask-type:alpha]"), "[mask-type:alpha]");
        assert_eq!(merge("[mask-type:alpha] [color:red]"), "[mask-type:alpha] [color:red]");
    }

    #[test]
    fn test_negative_and_size() {
        assert_eq!(merge("-mt-2 mt-4"), "mt-4");
        assert_eq!(merge("w-4 h-4 size-8"), "size-8");
        assert_eq!(merge("size-8 w-4"), "size-8 w-4");
    }

    #[test]
    fn test_unknown_tokens_never_conflict() {
        assert_eq!(merge("btn btn-primary my-widget"), "btn btn-primary my-widget");
    }

    #[test]
    fn test_prefixed_merger() {
        let merger = TailwindMerger::with_prefix("tw-");
        let tokens = ["tw-p-2", "p-2", "tw-p-4"].map(String::from).to_vec();
        assert_eq!(merger.resolve(tokens), ["p-2", "tw-p-4"]);
    }
}
