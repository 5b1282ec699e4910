//! HTML tokenizer for rendered fragments.
//!
//! A byte-oriented state machine in the style of htmlparser2. It reports
//! byte ranges through [`Callbacks`] and never allocates; decoding and tree
//! building are the parser's job.

use gesso_carton::is_raw_text_tag;

use crate::errors::ErrorCode;

/// Character codes for fast comparison
pub mod char_codes {
    pub const TAB: u8 = 0x09;
    pub const NEWLINE: u8 = 0x0A;
    pub const FORM_FEED: u8 = 0x0C;
    pub const CARRIAGE_RETURN: u8 = 0x0D;
    pub const SPACE: u8 = 0x20;
    pub const EXCLAMATION_MARK: u8 = 0x21;
    pub const DOUBLE_QUOTE: u8 = 0x22;
    pub const SINGLE_QUOTE: u8 = 0x27;
    pub const DASH: u8 = 0x2D;
    pub const SLASH: u8 = 0x2F;
    pub const LT: u8 = 0x3C;
    pub const EQ: u8 = 0x3D;
    pub const GT: u8 = 0x3E;
    pub const QUESTION_MARK: u8 = 0x3F;
    pub const UPPER_A: u8 = 0x41;
    pub const UPPER_Z: u8 = 0x5A;
    pub const LOWER_A: u8 = 0x61;
    pub const LOWER_Z: u8 = 0x7A;
}

use char_codes::*;

/// All the states the tokenizer can be in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum State {
    Text = 1,

    // Tags
    BeforeTagName,
    InTagName,
    InSelfClosingTag,
    BeforeClosingTagName,
    InClosingTagName,
    AfterClosingTagName,

    // Attributes
    BeforeAttrName,
    InAttrName,
    AfterAttrName,
    BeforeAttrValue,
    InAttrValueDq,
    InAttrValueSq,
    InAttrValueNq,

    // Declarations
    BeforeDeclaration,
    InDeclaration,

    // Processing instructions
    InProcessingInstruction,

    // Comments
    BeforeComment,
    InCommentLike,

    // <script>, <style>, <textarea>, <title>
    InRawText,
}

impl State {
    /// States where the input is inside an unfinished tag.
    fn is_in_tag(self) -> bool {
        matches!(
            self,
            Self::InTagName
                | Self::InSelfClosingTag
                | Self::BeforeClosingTagName
                | Self::InClosingTagName
                | Self::AfterClosingTagName
                | Self::BeforeAttrName
                | Self::InAttrName
                | Self::AfterAttrName
                | Self::BeforeAttrValue
                | Self::InAttrValueDq
                | Self::InAttrValueSq
                | Self::InAttrValueNq
        )
    }
}

/// Quote type for attribute values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum QuoteType {
    NoValue = 0,
    Unquoted = 1,
    Single = 2,
    Double = 3,
}

/// Tokenizer callbacks
///
/// Every range is a half-open byte range into the input.
pub trait Callbacks {
    fn on_text(&mut self, start: usize, end: usize);

    fn on_open_tag_name(&mut self, start: usize, end: usize);
    /// `end` is the offset of the closing `>`.
    fn on_open_tag_end(&mut self, end: usize);
    /// `end` is the offset of the `>` in `/>`.
    fn on_self_closing_tag(&mut self, end: usize);
    fn on_close_tag(&mut self, start: usize, end: usize);
    /// `end` is the offset of the `>` closing an end tag.
    fn on_close_tag_end(&mut self, end: usize);

    fn on_attrib_name(&mut self, start: usize, end: usize);
    fn on_attrib_data(&mut self, start: usize, end: usize);
    fn on_attrib_end(&mut self, quote: QuoteType, end: usize);

    /// `start..end` is the comment body, without `<!--` and `-->`.
    fn on_comment(&mut self, start: usize, end: usize);

    fn on_processing_instruction(&mut self, _start: usize, _end: usize) {}

    fn on_end(&mut self) {}
    fn on_error(&mut self, code: ErrorCode, index: usize);
}

/// Check if character is a tag start character (a-z, A-Z)
#[inline]
pub fn is_tag_start_char(c: u8) -> bool {
    (LOWER_A..=LOWER_Z).contains(&c) || (UPPER_A..=UPPER_Z).contains(&c)
}

/// Check if character is whitespace
#[inline]
pub fn is_whitespace(c: u8) -> bool {
    c == SPACE || c == NEWLINE || c == TAB || c == FORM_FEED || c == CARRIAGE_RETURN
}

/// Check if character ends a tag section
#[inline]
pub fn is_end_of_tag_section(c: u8) -> bool {
    c == SLASH || c == GT || is_whitespace(c)
}

/// HTML fragment tokenizer
pub struct Tokenizer<'a, C: Callbacks> {
    /// Input source
    source: &'a str,
    input: &'a [u8],
    /// Current state
    state: State,
    /// Buffer start position
    section_start: usize,
    /// Current index
    index: usize,
    /// Name of the tag currently being opened
    tag_name: (usize, usize),
    /// Close tag that ends the current raw text element
    raw_text_end: Option<(usize, usize)>,
    callbacks: C,
}

impl<'a, C: Callbacks> Tokenizer<'a, C> {
    pub fn new(source: &'a str, callbacks: C) -> Self {
        Self {
            source,
            input: source.as_bytes(),
            state: State::Text,
            section_start: 0,
            index: 0,
            tag_name: (0, 0),
            raw_text_end: None,
            callbacks,
        }
    }

    /// Give back the callbacks once tokenizing is done.
    pub fn into_callbacks(self) -> C {
        self.callbacks
    }

    /// Tokenize the input
    pub fn tokenize(&mut self) {
        while self.index < self.input.len() {
            let c = self.input[self.index];

            match self.state {
                State::Text => self.state_text(c),
                State::BeforeTagName => self.state_before_tag_name(c),
                State::InTagName => self.state_in_tag_name(c),
                State::InSelfClosingTag => self.state_in_self_closing_tag(c),
                State::BeforeClosingTagName => self.state_before_closing_tag_name(c),
                State::InClosingTagName => self.state_in_closing_tag_name(c),
                State::AfterClosingTagName => self.state_after_closing_tag_name(c),
                State::BeforeAttrName => self.state_before_attr_name(c),
                State::InAttrName => self.state_in_attr_name(c),
                State::AfterAttrName => self.state_after_attr_name(c),
                State::BeforeAttrValue => self.state_before_attr_value(c),
                State::InAttrValueDq => self.state_in_attr_value_dq(c),
                State::InAttrValueSq => self.state_in_attr_value_sq(c),
                State::InAttrValueNq => self.state_in_attr_value_nq(c),
                State::BeforeDeclaration => self.state_before_declaration(c),
                State::InDeclaration => self.state_in_declaration(c),
                State::InProcessingInstruction => self.state_in_processing_instruction(c),
                State::BeforeComment => self.state_before_comment(c),
                State::InCommentLike => self.state_in_comment_like(c),
                State::InRawText => self.state_in_raw_text(c),
            }

            self.index += 1;
        }

        self.cleanup();
        self.callbacks.on_end();
    }

    fn cleanup(&mut self) {
        match self.state {
            State::Text | State::BeforeTagName | State::InRawText => {
                if self.section_start < self.index {
                    self.callbacks.on_text(self.section_start, self.index);
                }
            }
            State::InCommentLike => {
                self.callbacks.on_error(ErrorCode::EofInComment, self.index);
                self.callbacks.on_comment(self.section_start, self.index);
            }
            State::BeforeComment | State::BeforeDeclaration | State::InDeclaration => {
                self.callbacks.on_error(ErrorCode::EofInComment, self.index);
            }
            State::InProcessingInstruction => {
                self.callbacks.on_error(ErrorCode::EofInTag, self.index);
            }
            state if state.is_in_tag() => {
                self.callbacks.on_error(ErrorCode::EofInTag, self.index);
            }
            _ => {}
        }
    }

    // ========== State handlers ==========

    fn state_text(&mut self, c: u8) {
        if c == LT {
            if self.index > self.section_start {
                self.callbacks.on_text(self.section_start, self.index);
            }
            self.state = State::BeforeTagName;
            self.section_start = self.index;
        }
    }

    fn state_before_tag_name(&mut self, c: u8) {
        if c == EXCLAMATION_MARK {
            self.state = State::BeforeDeclaration;
            self.section_start = self.index + 1;
        } else if c == QUESTION_MARK {
            self.state = State::InProcessingInstruction;
            self.section_start = self.index + 1;
        } else if is_tag_start_char(c) {
            self.section_start = self.index;
            self.state = State::InTagName;
        } else if c == SLASH {
            self.state = State::BeforeClosingTagName;
        } else {
            // A stray `<` is plain text; section_start still points at it.
            self.state = State::Text;
            self.state_text(c);
        }
    }

    fn state_in_tag_name(&mut self, c: u8) {
        if is_end_of_tag_section(c) {
            self.tag_name = (self.section_start, self.index);
            self.callbacks
                .on_open_tag_name(self.section_start, self.index);
            self.section_start = self.index;
            self.state = State::BeforeAttrName;
            self.state_before_attr_name(c);
        }
    }

    fn state_in_self_closing_tag(&mut self, c: u8) {
        if c == GT {
            self.callbacks.on_self_closing_tag(self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        } else if !is_whitespace(c) {
            self.state = State::BeforeAttrName;
            self.state_before_attr_name(c);
        }
    }

    fn state_before_closing_tag_name(&mut self, c: u8) {
        if is_whitespace(c) {
            // Skip
        } else if c == GT {
            self.callbacks
                .on_error(ErrorCode::MissingEndTagName, self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        } else {
            self.state = State::InClosingTagName;
            self.section_start = self.index;
        }
    }

    fn state_in_closing_tag_name(&mut self, c: u8) {
        if c == GT || is_whitespace(c) {
            self.callbacks.on_close_tag(self.section_start, self.index);
            self.section_start = self.index + 1;
            if c == GT {
                self.callbacks.on_close_tag_end(self.index);
                self.state = State::Text;
            } else {
                self.state = State::AfterClosingTagName;
            }
        }
    }

    fn state_after_closing_tag_name(&mut self, c: u8) {
        if c == GT {
            self.callbacks.on_close_tag_end(self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        }
    }

    fn state_before_attr_name(&mut self, c: u8) {
        if c == GT {
            self.callbacks.on_open_tag_end(self.index);
            self.section_start = self.index + 1;
            self.state = if self.opens_raw_text() {
                self.raw_text_end = Some(self.tag_name);
                State::InRawText
            } else {
                State::Text
            };
        } else if c == SLASH {
            self.state = State::InSelfClosingTag;
        } else if !is_whitespace(c) {
            self.state = State::InAttrName;
            self.section_start = self.index;
        }
    }

    fn opens_raw_text(&self) -> bool {
        let (start, end) = self.tag_name;
        is_raw_text_tag(&self.source[start..end])
    }

    fn state_in_attr_name(&mut self, c: u8) {
        if c == EQ || is_end_of_tag_section(c) {
            self.callbacks
                .on_attrib_name(self.section_start, self.index);
            self.section_start = self.index;
            self.state = State::AfterAttrName;
            self.state_after_attr_name(c);
        }
    }

    fn state_after_attr_name(&mut self, c: u8) {
        if c == EQ {
            self.state = State::BeforeAttrValue;
        } else if c == SLASH || c == GT {
            self.callbacks.on_attrib_end(QuoteType::NoValue, self.index);
            self.state = State::BeforeAttrName;
            self.state_before_attr_name(c);
        } else if !is_whitespace(c) {
            self.callbacks.on_attrib_end(QuoteType::NoValue, self.index);
            self.state = State::InAttrName;
            self.section_start = self.index;
        }
    }

    fn state_before_attr_value(&mut self, c: u8) {
        if c == DOUBLE_QUOTE {
            self.state = State::InAttrValueDq;
            self.section_start = self.index + 1;
        } else if c == SINGLE_QUOTE {
            self.state = State::InAttrValueSq;
            self.section_start = self.index + 1;
        } else if c == GT {
            // `<a href=>`: empty unquoted value
            self.section_start = self.index;
            self.emit_attr_value(QuoteType::Unquoted);
            self.state_before_attr_name(c);
        } else if !is_whitespace(c) {
            self.section_start = self.index;
            self.state = State::InAttrValueNq;
        }
    }

    fn state_in_attr_value_dq(&mut self, c: u8) {
        if c == DOUBLE_QUOTE {
            self.emit_attr_value(QuoteType::Double);
        }
    }

    fn state_in_attr_value_sq(&mut self, c: u8) {
        if c == SINGLE_QUOTE {
            self.emit_attr_value(QuoteType::Single);
        }
    }

    fn state_in_attr_value_nq(&mut self, c: u8) {
        // Unquoted values may contain `/` (`href=/docs/`); only whitespace and
        // `>` end them.
        if is_whitespace(c) || c == GT {
            self.emit_attr_value(QuoteType::Unquoted);
            self.state_before_attr_name(c);
        }
    }

    fn emit_attr_value(&mut self, quote: QuoteType) {
        if self.section_start < self.index {
            self.callbacks
                .on_attrib_data(self.section_start, self.index);
        }
        self.callbacks.on_attrib_end(quote, self.index);
        self.section_start = self.index + 1;
        self.state = State::BeforeAttrName;
    }

    fn state_before_declaration(&mut self, c: u8) {
        if c == DASH {
            self.state = State::BeforeComment;
            self.section_start = self.index + 1;
        } else {
            self.state = State::InDeclaration;
            self.state_in_declaration(c);
        }
    }

    fn state_in_declaration(&mut self, c: u8) {
        if c == GT {
            self.state = State::Text;
            self.section_start = self.index + 1;
        }
    }

    fn state_in_processing_instruction(&mut self, c: u8) {
        if c == GT {
            self.callbacks
                .on_processing_instruction(self.section_start, self.index);
            self.state = State::Text;
            self.section_start = self.index + 1;
        }
    }

    fn state_before_comment(&mut self, c: u8) {
        if c == DASH {
            self.state = State::InCommentLike;
            self.section_start = self.index + 1;
        } else {
            self.state = State::InDeclaration;
            self.state_in_declaration(c);
        }
    }

    fn state_in_comment_like(&mut self, c: u8) {
        if c == DASH
            && self.index + 2 < self.input.len()
            && self.input[self.index + 1] == DASH
            && self.input[self.index + 2] == GT
        {
            self.callbacks.on_comment(self.section_start, self.index);
            self.index += 2;
            self.state = State::Text;
            self.section_start = self.index + 1;
        }
    }

    fn state_in_raw_text(&mut self, c: u8) {
        if c == LT && self.at_raw_text_end() {
            if self.index > self.section_start {
                self.callbacks.on_text(self.section_start, self.index);
            }
            self.raw_text_end = None;
            self.state = State::BeforeTagName;
            self.section_start = self.index;
        }
    }

    /// Whether the input at `index` is `</name` closing the raw text element.
    fn at_raw_text_end(&self) -> bool {
        let Some((start, end)) = self.raw_text_end else {
            return false;
        };
        let name = &self.input[start..end];
        let rest = &self.input[self.index + 1..];
        if rest.first() != Some(&SLASH) || rest.len() < name.len() + 1 {
            return false;
        }
        if !rest[1..=name.len()].eq_ignore_ascii_case(name) {
            return false;
        }
        rest.get(name.len() + 1)
            .map_or(true, |&c| is_end_of_tag_section(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every callback as a readable line.
    #[derive(Default)]
    struct Recorder<'s> {
        source: &'s str,
        events: Vec<String>,
    }

    impl Recorder<'_> {
        fn push(&mut self, kind: &str, start: usize, end: usize) {
            self.events
                .push(format!("{kind}({})", &self.source[start..end]));
        }
    }

    impl Callbacks for Recorder<'_> {
        fn on_text(&mut self, start: usize, end: usize) {
            self.push("text", start, end);
        }
        fn on_open_tag_name(&mut self, start: usize, end: usize) {
            self.push("open", start, end);
        }
        fn on_open_tag_end(&mut self, end: usize) {
            self.events.push(format!("open_end@{end}"));
        }
        fn on_self_closing_tag(&mut self, end: usize) {
            self.events.push(format!("self_close@{end}"));
        }
        fn on_close_tag(&mut self, start: usize, end: usize) {
            self.push("close", start, end);
        }
        fn on_close_tag_end(&mut self, end: usize) {
            self.events.push(format!("close_end@{end}"));
        }
        fn on_attrib_name(&mut self, start: usize, end: usize) {
            self.push("attr", start, end);
        }
        fn on_attrib_data(&mut self, start: usize, end: usize) {
            self.push("data", start, end);
        }
        fn on_attrib_end(&mut self, quote: QuoteType, _end: usize) {
            self.events.push(format!("attr_end({quote:?})"));
        }
        fn on_comment(&mut self, start: usize, end: usize) {
            self.push("comment", start, end);
        }
        fn on_error(&mut self, code: ErrorCode, index: usize) {
            self.events.push(format!("error({code:?}@{index})"));
        }
    }

    fn tokenize(source: &str) -> Vec<String> {
        let mut tokenizer = Tokenizer::new(
            source,
            Recorder {
                source,
                events: Vec::new(),
            },
        );
        tokenizer.tokenize();
        tokenizer.into_callbacks().events
    }

    #[test]
    fn test_element_with_attributes() {
        assert_eq!(
            tokenize(r#"<a href="/x" class='y' hidden>Hi</a>"#),
            vec![
                "open(a)",
                "attr(href)",
                "data(/x)",
                "attr_end(Double)",
                "attr(class)",
                "data(y)",
                "attr_end(Single)",
                "attr(hidden)",
                "attr_end(NoValue)",
                "open_end@29",
                "text(Hi)",
                "close(a)",
                "close_end@35",
            ]
        );
    }

    #[test]
    fn test_unquoted_value_keeps_slashes() {
        assert_eq!(
            tokenize("<a href=/docs/>x</a>"),
            vec![
                "open(a)",
                "attr(href)",
                "data(/docs/)",
                "attr_end(Unquoted)",
                "open_end@14",
                "text(x)",
                "close(a)",
                "close_end@19",
            ]
        );
    }

    #[test]
    fn test_self_closing() {
        assert_eq!(
            tokenize("<br/><img src=x />"),
            vec![
                "open(br)",
                "self_close@4",
                "open(img)",
                "attr(src)",
                "data(x)",
                "attr_end(Unquoted)",
                "self_close@17",
            ]
        );
    }

    #[test]
    fn test_comment_and_stray_lt() {
        assert_eq!(
            tokenize("a < b<!-- c -->"),
            vec!["text(a )", "text(< b)", "comment( c )"]
        );
    }

    #[test]
    fn test_raw_text_is_opaque() {
        assert_eq!(
            tokenize("<script>if (a<b) { x('</div>') }</script>"),
            vec![
                "open(script)",
                "open_end@7",
                "text(if (a<b) { x('</div>') })",
                "close(script)",
                "close_end@40",
            ]
        );
    }

    #[test]
    fn test_eof_errors() {
        assert_eq!(
            tokenize(r#"<div class="x"#),
            vec!["open(div)", "attr(class)", "error(EofInTag@13)"]
        );
        assert_eq!(
            tokenize("<!-- open"),
            vec!["error(EofInComment@9)", "comment( open)"]
        );
    }

    #[test]
    fn test_missing_end_tag_name() {
        assert_eq!(
            tokenize("</>"),
            vec!["error(MissingEndTagName@2)"]
        );
    }
}
