//! hashmark: line-oriented Markdown to HTML converter.
//!
//! Converts a restricted Markdown dialect in a single pass over the
//! input lines:
//! - ATX-style headings `#` through `######`
//! - unordered lists (`- item`, rendered as `<ul>`)
//! - ordered lists (`* item`, rendered as `<ol>`)
//! - paragraphs with `<br />` line breaks
//! - `**bold**` and `__italic__` emphasis
//! - `[[text]]` digest spans (MD5 hex of the content)
//! - `((text))` strip spans (ASCII `c`/`C` deleted)
//!
//! # Design Principles
//! - Line-oriented: block rules see whole lines, never partial ones
//! - Fixed dispatch order: heading, unordered list, ordered list, paragraph
//! - Single pass: every input line is consumed exactly once, no backtracking
//! - Pure core: conversion is a function of the input string alone
//! - No HTML escaping: source text passes through verbatim

pub mod block;
pub mod inline;
pub mod lines;
pub mod render;

// Re-export primary types
pub use block::{BlockMatch, BlockParser, ListKind};
pub use render::HtmlWriter;

/// Convert Markdown to HTML.
///
/// Each produced block is written followed by one newline; list and
/// paragraph blocks keep their internal newlines.
///
/// # Example
/// ```
/// let html = hashmark::to_html("# Hi\n- a\n- b");
/// assert_eq!(html, "<h1>Hi</h1>\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
/// ```
pub fn to_html(input: &str) -> String {
    let mut writer = HtmlWriter::with_capacity_for(input.len());
    for block in to_blocks(input) {
        writer.push_block(&block);
    }
    writer.into_string()
}

/// Convert Markdown to the ordered sequence of HTML blocks.
///
/// One string per block, in input order, without the newline the
/// serialized document appends after each block. Useful for inspecting
/// block structure directly.
pub fn to_blocks(input: &str) -> Vec<String> {
    let split = lines::split_lines(input);
    let mut parser = BlockParser::new(&split);
    let mut blocks = Vec::with_capacity(split.len() / 2 + 1);
    parser.parse(&mut blocks);
    blocks
}
