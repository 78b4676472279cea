//! Block parser implementation.

use smallvec::SmallVec;

use crate::inline;
use crate::lines::{self, LineCursor};

use super::{BlockMatch, ListKind};

/// Collected per-block line buffer; most blocks are only a few lines.
type LineBuf = SmallVec<[String; 8]>;

/// Block parser over a split input document.
///
/// Walks the lines once, front to back. Rules are tried in a fixed
/// order at every position: heading, unordered list, ordered list,
/// paragraph. The first match wins and is never revisited. A line no
/// rule claims (only possible for a blank line, since the paragraph
/// rule takes any non-blank run) is emitted on its own after the inline
/// transforms.
pub struct BlockParser<'a> {
    cursor: LineCursor<'a>,
}

impl<'a> BlockParser<'a> {
    /// Create a parser over pre-split lines.
    pub fn new(lines: &'a [&'a str]) -> Self {
        Self {
            cursor: LineCursor::new(lines),
        }
    }

    /// Lines consumed so far.
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Parse the whole document, appending each rendered block to `blocks`.
    pub fn parse(&mut self, blocks: &mut Vec<String>) {
        while let Some(block) = self.next_block() {
            blocks.push(block);
        }
    }

    /// Produce the next block and advance the cursor.
    ///
    /// Returns `None` only at end of input; every dispatch step consumes
    /// at least one line.
    pub fn next_block(&mut self) -> Option<String> {
        let line = self.cursor.peek()?;

        if let Some(m) = self
            .try_heading()
            .or_else(|| self.try_list(ListKind::Unordered))
            .or_else(|| self.try_list(ListKind::Ordered))
            .or_else(|| self.try_paragraph())
        {
            self.cursor.advance(m.consumed);
            return Some(m.html);
        }

        // Fallback: emit the line alone, inline transforms applied.
        self.cursor.advance(1);
        Some(inline::transform(line.trim_end()))
    }

    /// Try to match an ATX-style heading on the current line.
    ///
    /// 1-6 `#` characters, required whitespace, then non-empty content.
    /// Seven or more `#`, a missing separator, or an empty remainder all
    /// fall through to the later rules.
    fn try_heading(&self) -> Option<BlockMatch> {
        let line = self.cursor.peek()?;
        let level = line.bytes().take_while(|&b| b == b'#').count();
        if level == 0 || level > 6 {
            return None;
        }
        let rest = &line[level..];
        if !matches!(rest.as_bytes().first(), Some(b' ' | b'\t')) {
            return None;
        }
        let content = rest.trim();
        if content.is_empty() {
            return None;
        }
        let html = format!("<h{level}>{}</h{level}>", inline::transform(content));
        Some(BlockMatch { html, consumed: 1 })
    }

    /// Try to match a run of list items of one flavor.
    ///
    /// Scans forward while lines carry this flavor's marker; a blank
    /// line, end of input, or a marker switch ends the run. Zero items
    /// means no match.
    fn try_list(&self, kind: ListKind) -> Option<BlockMatch> {
        let mut items: LineBuf = SmallVec::new();
        while let Some(line) = self.cursor.peek_ahead(items.len()) {
            let Some(content) = list_item_content(line, kind.marker()) else {
                break;
            };
            items.push(format!("<li>{}</li>", inline::transform(content)));
        }
        if items.is_empty() {
            return None;
        }
        let html = format!(
            "{}\n{}\n{}",
            kind.open_tag(),
            items.join("\n"),
            kind.close_tag()
        );
        Some(BlockMatch {
            html,
            consumed: items.len(),
        })
    }

    /// Try to match a paragraph: the run of non-blank lines from the
    /// current position, joined with `<br />` breaks.
    fn try_paragraph(&self) -> Option<BlockMatch> {
        let mut collected: LineBuf = SmallVec::new();
        while let Some(line) = self.cursor.peek_ahead(collected.len()) {
            if lines::is_blank(line) {
                break;
            }
            collected.push(inline::transform(line.trim_end()));
        }
        if collected.is_empty() {
            return None;
        }
        let html = format!("<p>\n{}\n</p>", collected.join("<br />\n"));
        Some(BlockMatch {
            html,
            consumed: collected.len(),
        })
    }
}

/// Strip `marker + whitespace` from a list item line, returning the
/// trimmed item content. `None` when the line is not an item of this
/// flavor.
fn list_item_content(line: &str, marker: u8) -> Option<&str> {
    let bytes = line.as_bytes();
    if bytes.first() != Some(&marker) {
        return None;
    }
    if !matches!(bytes.get(1), Some(b' ' | b'\t')) {
        return None;
    }
    Some(line[2..].trim())
}
