//! Non-greedy delimited-span scanning.

use memchr::memmem::Finder;

/// Rewrite every non-overlapping `open`…`close` span in `input`.
///
/// Scanning is left to right; for each opening delimiter the nearest
/// closing delimiter wins, so spans are as short as possible. The
/// content between the delimiters is handed to `rewrite`, which appends
/// its replacement to the output. A delimiter without a partner is left
/// verbatim, along with everything after it.
///
/// Delimiters must be ASCII, which keeps every produced slice on a
/// `char` boundary.
pub fn rewrite_spans<F>(input: &str, open: &str, close: &str, mut rewrite: F) -> String
where
    F: FnMut(&str, &mut String),
{
    debug_assert!(open.is_ascii() && close.is_ascii());

    let haystack = input.as_bytes();
    let open_finder = Finder::new(open.as_bytes());
    let close_finder = Finder::new(close.as_bytes());

    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    loop {
        let Some(rel_open) = open_finder.find(&haystack[pos..]) else {
            out.push_str(&input[pos..]);
            break;
        };
        let start = pos + rel_open;
        let content_start = start + open.len();
        let Some(rel_close) = close_finder.find(&haystack[content_start..]) else {
            // Unpaired opener: the rest of the line is literal text.
            out.push_str(&input[pos..]);
            break;
        };
        let content_end = content_start + rel_close;

        out.push_str(&input[pos..start]);
        rewrite(&input[content_start..content_end], &mut out);
        pos = content_end + close.len();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(input: &str, open: &str, close: &str) -> String {
        rewrite_spans(input, open, close, |content, out| {
            out.push_str(&content.to_uppercase())
        })
    }

    #[test]
    fn test_single_span() {
        assert_eq!(upper("a [[bc]] d", "[[", "]]"), "a BC d");
    }

    #[test]
    fn test_multiple_spans() {
        assert_eq!(upper("[[a]]-[[b]]", "[[", "]]"), "A-B");
    }

    #[test]
    fn test_no_delimiters_is_identity() {
        assert_eq!(upper("plain text", "[[", "]]"), "plain text");
    }

    #[test]
    fn test_unpaired_open_kept_verbatim() {
        assert_eq!(upper("a [[b", "[[", "]]"), "a [[b");
        assert_eq!(upper("[[a]] [[b", "[[", "]]"), "A [[b");
    }

    #[test]
    fn test_lone_close_kept_verbatim() {
        assert_eq!(upper("a]]b", "[[", "]]"), "a]]b");
    }

    #[test]
    fn test_shortest_span_wins() {
        // The first `]]` closes the span; the rest stays literal.
        assert_eq!(upper("[[a]]b]]", "[[", "]]"), "Ab]]");
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(upper("x[[]]y", "[[", "]]"), "xy");
    }

    #[test]
    fn test_identical_open_and_close() {
        assert_eq!(upper("**a**b**c**", "**", "**"), "AbC");
        assert_eq!(upper("**a** **", "**", "**"), "A **");
    }

    #[test]
    fn test_multibyte_content_survives() {
        assert_eq!(upper("[[héllo]] wörld", "[[", "]]"), "HÉLLO wörld");
    }
}
