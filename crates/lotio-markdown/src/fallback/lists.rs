//! Line-based list and paragraph structuring.
//!
//! A single pass over the lines with an explicit [`ListState`] record. Nesting
//! is decided from raw indentation (count of leading whitespace characters)
//! plus a short lookahead, which handles an ordered list whose items carry one
//! level of nested unordered items. Deeper nesting is not supported.

use std::sync::LazyLock;

use regex::Regex;

static UNORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[*\-+] ").expect("Invalid unordered marker regex"));

static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\. ").expect("Invalid ordered marker regex"));

static HEADING_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<[hH]").expect("Invalid heading tag regex"));

static LEADING_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^<[^>]+>").expect("Invalid leading tag regex"));

/// How many lines after an ordered item are searched for a nested list.
const LOOKAHEAD_LINES: usize = 4;

/// Open-tag bookkeeping threaded through the line scan.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct ListState {
    /// Inside `<ul>`
    pub in_ul: bool,
    /// Inside `<ol>`
    pub in_ol: bool,
    /// Indentation of the current ordered list's items
    pub ol_indent: usize,
    /// An ordered `<li>` is open and waiting for nested content
    pub open_li: bool,
}

impl ListState {
    fn close_unordered(&mut self, out: &mut Vec<String>) {
        if self.in_ul {
            out.push("</ul>".to_string());
            self.in_ul = false;
        }
    }

    /// Close the open ordered item, and the unordered list nested in it.
    fn close_item(&mut self, out: &mut Vec<String>) {
        if self.open_li {
            self.close_unordered(out);
            out.push("</li>".to_string());
            self.open_li = false;
        }
    }

    fn close_ordered(&mut self, out: &mut Vec<String>) {
        if self.in_ol {
            self.close_item(out);
            self.close_unordered(out);
            out.push("</ol>".to_string());
            self.in_ol = false;
            self.ol_indent = 0;
        }
    }

    /// Close everything still open, innermost first.
    fn finish(&mut self, out: &mut Vec<String>) {
        self.close_ordered(out);
        self.close_unordered(out);
    }
}

/// Kind of list marker a line starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Unordered,
    Ordered,
}

fn marker(line: &str) -> Option<Marker> {
    if UNORDERED_RE.is_match(line) {
        Some(Marker::Unordered)
    } else if ORDERED_RE.is_match(line) {
        Some(Marker::Ordered)
    } else {
        None
    }
}

fn indent_of(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Whether a list item deeper than `parent_indent` follows within the lookahead window.
///
/// Blank lines are skipped but still count toward the window. The search stops
/// at the first list item at the same or lesser indent, or at any other content.
fn has_nested_list_ahead(lines: &[&str], current: usize, parent_indent: usize) -> bool {
    let end = (current + 1 + LOOKAHEAD_LINES).min(lines.len());

    for line in lines.iter().take(end).skip(current + 1) {
        if line.trim().is_empty() {
            continue;
        }
        return marker(line).is_some() && indent_of(line) > parent_indent;
    }

    false
}

/// Structure lists and wrap loose text lines in paragraphs.
///
/// Lines for which `is_protected` returns true (placeholder tokens) pass
/// through untouched.
pub fn structure(text: &str, is_protected: impl Fn(&str) -> bool) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut state = ListState::default();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for (idx, &line) in lines.iter().enumerate() {
        let stripped = line.trim();

        if is_protected(stripped) {
            out.push(line.to_string());
            continue;
        }

        match marker(line) {
            Some(Marker::Unordered) => {
                let indent = indent_of(line);

                if !(state.in_ol && indent > state.ol_indent) {
                    state.close_ordered(&mut out);
                }
                if !state.in_ul {
                    out.push("<ul>".to_string());
                    state.in_ul = true;
                }

                let content = UNORDERED_RE.replace(line, "");
                out.push(format!("<li>{content}</li>"));
            }

            Some(Marker::Ordered) => {
                let indent = indent_of(line);

                state.close_item(&mut out);
                state.close_unordered(&mut out);

                if !state.in_ol {
                    out.push("<ol>".to_string());
                    state.in_ol = true;
                    state.ol_indent = indent;
                } else if indent < state.ol_indent {
                    out.push("</ol>".to_string());
                    out.push("<ol>".to_string());
                    state.ol_indent = indent;
                }

                let content = ORDERED_RE.replace(line, "");
                if has_nested_list_ahead(&lines, idx, indent) {
                    out.push(format!("<li>{content}"));
                    state.open_li = true;
                } else {
                    out.push(format!("<li>{content}</li>"));
                }
            }

            None if stripped.is_empty() => out.push(line.to_string()),

            None => {
                let is_tag_line = HEADING_TAG_RE.is_match(stripped)
                    || LEADING_TAG_RE.is_match(stripped);

                // A nested unordered list only ends on markup, not on text
                // continuing the ordered item.
                if state.in_ul && (!state.in_ol || stripped.starts_with('<')) && is_tag_line {
                    state.close_unordered(&mut out);
                }

                if state.in_ol
                    && (HEADING_TAG_RE.is_match(stripped)
                        || (stripped.starts_with('<') && !state.in_ul))
                {
                    state.close_ordered(&mut out);
                }

                let complete_tag = stripped.starts_with('<') && stripped.ends_with('>');
                if complete_tag || LEADING_TAG_RE.is_match(stripped) {
                    out.push(line.to_string());
                } else {
                    out.push(format!("<p>{line}</p>"));
                }
            }
        }
    }

    state.finish(&mut out);

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(text: &str) -> String {
        structure(text, |_| false)
    }

    #[test]
    fn single_unordered_list() {
        assert_eq!(
            run("- alpha\n- beta\n- gamma"),
            "<ul>\n<li>alpha</li>\n<li>beta</li>\n<li>gamma</li>\n</ul>"
        );
    }

    #[test]
    fn accepts_all_unordered_markers() {
        assert_eq!(
            run("* a\n+ b\n- c"),
            "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>"
        );
    }

    #[test]
    fn ordered_list_with_nested_unordered() {
        let text = "1. First\n   - detail\n   - more\n2. Second";

        assert_eq!(
            run(text),
            "<ol>\n<li>First\n<ul>\n<li>detail</li>\n<li>more</li>\n</ul>\n</li>\n<li>Second</li>\n</ol>"
        );
    }

    #[test]
    fn lookahead_skips_blank_lines() {
        let text = "1. First\n\n   - nested\n2. Second";

        assert_eq!(
            run(text),
            "<ol>\n<li>First\n\n<ul>\n<li>nested</li>\n</ul>\n</li>\n<li>Second</li>\n</ol>"
        );
    }

    #[test]
    fn lookahead_window_is_four_lines() {
        let text = "1. First\n\n\n\n\n   - too far";

        let html = run(text);

        assert!(html.starts_with("<ol>\n<li>First</li>"));
        assert!(html.ends_with("</ul>\n</ol>"));
    }

    #[test]
    fn lesser_indent_reopens_ordered_list() {
        assert_eq!(
            run("   1. a\n1. b"),
            "<ol>\n<li>a</li>\n</ol>\n<ol>\n<li>b</li>\n</ol>"
        );
    }

    #[test]
    fn lookahead_stops_at_sibling_item() {
        let text = "1. a\n2. b\n   - c";

        assert_eq!(
            run(text),
            "<ol>\n<li>a</li>\n<li>b\n<ul>\n<li>c</li>\n</ul>\n</li>\n</ol>"
        );
    }

    #[test]
    fn text_after_item_closes_it_immediately() {
        let text = "1. First\n   explanation\n2. Second";

        assert_eq!(
            run(text),
            "<ol>\n<li>First</li>\n<p>   explanation</p>\n<li>Second</li>\n</ol>"
        );
    }

    #[test]
    fn heading_closes_ordered_list() {
        let text = "1. one\n2. two\n<h2>Next</h2>\nbody";

        assert_eq!(
            run(text),
            "<ol>\n<li>one</li>\n<li>two</li>\n</ol>\n<h2>Next</h2>\n<p>body</p>"
        );
    }

    #[test]
    fn markup_closes_unordered_list() {
        let text = "- one\n<h3>After</h3>";

        assert_eq!(run(text), "<ul>\n<li>one</li>\n</ul>\n<h3>After</h3>");
    }

    #[test]
    fn plain_text_keeps_unordered_list_open() {
        let text = "- one\n\ncontinued";

        assert_eq!(run(text), "<ul>\n<li>one</li>\n\n<p>continued</p>\n</ul>");
    }

    #[test]
    fn markup_inside_open_item_closes_all_levels() {
        let text = "1. First\n   - nested\n<h2>Done</h2>";

        assert_eq!(
            run(text),
            "<ol>\n<li>First\n<ul>\n<li>nested</li>\n</ul>\n</li>\n</ol>\n<h2>Done</h2>"
        );
    }

    #[test]
    fn unordered_at_ordered_indent_replaces_the_list() {
        let text = "1. one\n- two";

        assert_eq!(
            run(text),
            "<ol>\n<li>one</li>\n</ol>\n<ul>\n<li>two</li>\n</ul>"
        );
    }

    #[test]
    fn ordered_after_unordered_closes_it() {
        let text = "- a\n1. b";

        assert_eq!(run(text), "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n</ol>");
    }

    #[test]
    fn end_of_input_closes_open_item() {
        let text = "1. only\n   - nested";

        assert_eq!(
            run(text),
            "<ol>\n<li>only\n<ul>\n<li>nested</li>\n</ul>\n</li>\n</ol>"
        );
    }

    #[test]
    fn wraps_plain_lines_but_not_tags() {
        let text = "hello\n<div class=\"x\">\n<b>bold</b> lead\n</div>";

        assert_eq!(
            run(text),
            "<p>hello</p>\n<div class=\"x\">\n<b>bold</b> lead\n</div>"
        );
    }

    #[test]
    fn protected_lines_pass_through() {
        let html = structure("__PRE_BLOCK_0__\ntext", |s| s == "__PRE_BLOCK_0__");

        assert_eq!(html, "__PRE_BLOCK_0__\n<p>text</p>");
    }

    #[test]
    fn indentation_counts_whitespace_characters() {
        assert_eq!(indent_of("\t  - x"), 3);
        assert_eq!(indent_of("- x"), 0);
    }
}
