use hashmark::{to_blocks, to_html};

#[test]
fn test_single_line_paragraph() {
    assert_eq!(to_html("just text"), "<p>\njust text\n</p>\n");
}

#[test]
fn test_lines_joined_with_br() {
    assert_eq!(
        to_html("line one\nline two"),
        "<p>\nline one<br />\nline two\n</p>\n"
    );
}

#[test]
fn test_blank_line_ends_paragraph() {
    let blocks = to_blocks("line one\nline two\n\nline three");
    assert_eq!(
        blocks,
        vec![
            "<p>\nline one<br />\nline two\n</p>",
            "",
            "<p>\nline three\n</p>",
        ]
    );
}

#[test]
fn test_whitespace_only_line_is_blank() {
    let blocks = to_blocks("a\n   \nb");
    assert_eq!(blocks, vec!["<p>\na\n</p>", "", "<p>\nb\n</p>"]);
}

#[test]
fn test_trailing_whitespace_trimmed() {
    assert_eq!(to_html("text   "), "<p>\ntext\n</p>\n");
}

#[test]
fn test_leading_whitespace_preserved() {
    assert_eq!(to_html("  indented"), "<p>\n  indented\n</p>\n");
}

#[test]
fn test_marker_lines_inside_run_stay_paragraph_text() {
    // The paragraph rule captures the whole non-blank run; list markers
    // mid-run never start a list.
    assert_eq!(
        to_html("intro\n- not a list"),
        "<p>\nintro<br />\n- not a list\n</p>\n"
    );
}

#[test]
fn test_inline_transforms_per_line() {
    assert_eq!(
        to_html("**a**\n__b__"),
        "<p>\n<b>a</b><br />\n<em>b</em>\n</p>\n"
    );
}

#[test]
fn test_html_left_unescaped() {
    assert_eq!(
        to_html("a <span> & more"),
        "<p>\na <span> & more\n</p>\n"
    );
}
