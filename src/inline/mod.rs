//! Inline span transforms.
//!
//! Four rewrites run over each line of block content, in a fixed order:
//!
//! 1. digest span `[[text]]` → MD5 hex digest of the literal text
//! 2. strip span `((text))` → text with every ASCII `c`/`C` deleted
//! 3. bold `**text**` → `<b>text</b>`
//! 4. italic `__text__` → `<em>text</em>`
//!
//! Each rewrite is a single left-to-right sweep with non-greedy
//! matching; later sweeps run over the previous sweep's output. There is
//! no nesting support and no escape syntax, and unmatched delimiters
//! stay verbatim. Nothing is HTML-escaped.

mod span;

pub use span::rewrite_spans;

/// Apply all inline rewrites to one line of content.
pub fn transform(text: &str) -> String {
    let text = rewrite_spans(text, "[[", "]]", digest_span);
    let text = rewrite_spans(&text, "((", "))", strip_span);
    let text = rewrite_spans(&text, "**", "**", |content, out| tag_span("b", content, out));
    rewrite_spans(&text, "__", "__", |content, out| tag_span("em", content, out))
}

/// Replace span content with its lowercase MD5 hex digest.
///
/// The content is hashed literally; markers inside it are not rewritten
/// first.
fn digest_span(content: &str, out: &mut String) {
    out.push_str(&format!("{:x}", md5::compute(content)));
}

/// Delete every ASCII `c`/`C` from the span content, keeping order.
fn strip_span(content: &str, out: &mut String) {
    out.extend(content.chars().filter(|&c| !matches!(c, 'c' | 'C')));
}

/// Wrap span content in an HTML tag pair.
fn tag_span(tag: &str, content: &str, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    out.push_str(content);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
