//! Regex passes over the whole document: headings and inline markup.

use std::sync::LazyLock;

use regex::Regex;

static HEADING_RES: LazyLock<[Regex; 4]> = LazyLock::new(|| {
    [
        Regex::new(r"(?m)^# (.+)$").expect("Invalid h1 regex"),
        Regex::new(r"(?m)^## (.+)$").expect("Invalid h2 regex"),
        Regex::new(r"(?m)^### (.+)$").expect("Invalid h3 regex"),
        Regex::new(r"(?m)^#### (.+)$").expect("Invalid h4 regex"),
    ]
});

static INLINE_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("Invalid inline code regex"));

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("Invalid bold regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"));

/// Turn `#` through `####` at the start of a line into `<h1>`..`<h4>`.
pub fn headings(text: &str) -> String {
    HEADING_RES
        .iter()
        .enumerate()
        .fold(text.to_string(), |acc, (i, re)| {
            let level = i + 1;
            re.replace_all(&acc, format!("<h{level}>${{1}}</h{level}>").as_str())
                .into_owned()
        })
}

/// Inline code, bold and links, in that order.
pub fn inline_markup(text: &str) -> String {
    let text = INLINE_CODE_RE.replace_all(text, "<code>${1}</code>");
    let text = BOLD_RE.replace_all(&text, "<strong>${1}</strong>");
    LINK_RE
        .replace_all(&text, r#"<a href="${2}">${1}</a>"#)
        .into_owned()
}
