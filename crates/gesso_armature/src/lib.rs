//! Armature - The HTML fragment parser for Gesso.
//!
//! Components that render "as child" need to reach into markup someone else
//! rendered and touch exactly one thing: the attributes of its root element.
//! This crate provides the parsing half of that:
//!
//! - [`tokenizer`]: a byte-oriented HTML state machine reporting spans
//! - [`parse_fragment`]: top-level nodes, their spans and root attributes
//!
//! Everything outside the root's opening tag is only located, never
//! rebuilt, so callers can splice a new opening tag in and keep the rest of
//! the fragment byte-for-byte.
//!
//! ## Name Origin
//!
//! An **armature** is the wire skeleton a sculptor builds before adding
//! clay. The parser recovers that skeleton from finished markup.

pub mod errors;
pub mod parser;
pub mod tokenizer;

pub use errors::{ErrorCode, ParseError};
pub use parser::{parse_fragment, ChildElement, Fragment, FragmentNode, Span};
