//! Block-level parsing.
//!
//! The block parser is line-oriented and handles:
//! - ATX-style headings
//! - Unordered (`- `) and ordered (`* `) lists
//! - Paragraphs
//!
//! Each rule inspects the remaining lines through the cursor and reports
//! a [`BlockMatch`] without consuming anything; the dispatch loop takes
//! the first rule that matches, in a fixed priority order, and advances
//! by the number of lines the match claimed.

mod parser;

pub use parser::BlockParser;

/// One recognized block: the rendered HTML and how many input lines it
/// covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatch {
    /// Rendered HTML for the block. Lists and paragraphs contain
    /// internal newlines.
    pub html: String,
    /// Number of consecutive input lines the block consumed.
    pub consumed: usize,
}

/// List flavor, selecting the item marker and the wrapper tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `- item` lines, rendered as `<ul>`.
    Unordered,
    /// `* item` lines, rendered as `<ol>`.
    Ordered,
}

impl ListKind {
    /// The item marker byte for this flavor.
    #[inline]
    pub fn marker(self) -> u8 {
        match self {
            ListKind::Unordered => b'-',
            ListKind::Ordered => b'*',
        }
    }

    /// Opening wrapper tag.
    #[inline]
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
        }
    }

    /// Closing wrapper tag.
    #[inline]
    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}
