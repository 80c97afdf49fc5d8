//! Regex and line based markdown converter.
//!
//! Covers the subset of markdown the lotio docs use: headings up to level 4,
//! fenced code, inline code, bold, links, paragraphs, and ordered lists with
//! one level of nested unordered items. Raw HTML and `<script>` blocks pass
//! through unchanged.

mod inline;
mod lists;

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::codeblock::FencedCode;
use crate::protect::{ProtectedBlocks, TokenStyle};

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(\w+)?\n(.*?)```").expect("Invalid code fence regex"));

static RAW_PRE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<pre[^>]*>.*?</pre>").expect("Invalid pre block regex"));

/// Replace every `<script>…</script>` block with a comment placeholder.
pub(crate) fn protect_scripts(source: &str) -> (String, ProtectedBlocks<String>) {
    static SCRIPT_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("Invalid script block regex")
    });

    let mut scripts = ProtectedBlocks::new(TokenStyle::Comment, "SCRIPT_BLOCK", source);
    let text = SCRIPT_RE
        .replace_all(source, |caps: &Captures| scripts.protect(caps[0].to_string()))
        .into_owned();

    (text, scripts)
}

/// Convert markdown to an HTML fragment without a markdown engine.
pub fn convert(source: &str) -> String {
    let (text, scripts) = protect_scripts(source);

    let mut fences = ProtectedBlocks::new(TokenStyle::Underscore, "CODE_BLOCK", source);
    let text = FENCE_RE
        .replace_all(&text, |caps: &Captures| {
            let language = caps.get(1).map(|m| m.as_str().to_string());
            fences.protect(FencedCode::new(language, caps[2].to_string()))
        })
        .into_owned();

    let text = inline::headings(&text);

    // Rendered code stays behind a placeholder on its own line so inline
    // markup and paragraph wrapping never reach into it.
    let mut pre_blocks = ProtectedBlocks::new(TokenStyle::Underscore, "PRE_BLOCK", source);
    let mut text = text;
    for (token, block) in fences.iter() {
        let placeholder = pre_blocks.protect(block.to_html());
        text = text.replacen(&token, &format!("\n{placeholder}\n"), 1);
    }

    let text = inline::inline_markup(&text);

    let text = RAW_PRE_RE
        .replace_all(&text, |caps: &Captures| {
            format!("\n{}\n", pre_blocks.protect(caps[0].to_string()))
        })
        .into_owned();

    tracing::debug!(
        "Fallback conversion protected {} scripts, {} code blocks, {} pre blocks",
        scripts.len(),
        fences.len(),
        pre_blocks.len()
    );

    let html = lists::structure(&text, |line| pre_blocks.is_token(line));

    let html = pre_blocks.restore(&html);
    scripts.restore(&html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn converts_small_document() {
        let source = "# Lotio\n\nRender **Lottie** files with `lotio`.\n\n- fast\n- small\n";

        assert_eq!(
            convert(source),
            "<h1>Lotio</h1>\n\n<p>Render <strong>Lottie</strong> files with <code>lotio</code>.</p>\n\n<ul>\n<li>fast</li>\n<li>small</li>\n\n</ul>"
        );
    }

    #[test]
    fn single_list_is_balanced_and_ordered() {
        let html = convert("- one\n- two\n- three");

        assert_eq!(html.matches("<ul>").count(), 1);
        assert_eq!(html.matches("</ul>").count(), 1);
        assert_eq!(html.matches("<li>").count(), 3);
        assert_eq!(html.matches("</li>").count(), 3);
        let one = html.find("one").unwrap();
        let two = html.find("two").unwrap();
        let three = html.find("three").unwrap();
        assert!(one < two && two < three);
    }

    #[test]
    fn nests_unordered_inside_ordered_item() {
        let html = convert("1. Install\n   - with npm\n2. Run");

        assert_eq!(
            html,
            "<ol>\n<li>Install\n<ul>\n<li>with npm</li>\n</ul>\n</li>\n<li>Run</li>\n</ol>"
        );
    }

    #[test]
    fn script_blocks_round_trip() {
        let script = "<SCRIPT type=\"module\">\nconst a = `x` ** 2;\n# not a heading\n- not a list\n</script>";
        let source = format!("Intro\n\n{script}\n\nOutro");

        let html = convert(&source);

        assert!(html.contains(script));
        assert!(html.contains("<p>Intro</p>"));
        assert!(html.contains("<p>Outro</p>"));
    }

    #[test]
    fn code_content_is_not_rewritten() {
        let source = "```bash\n# comment\nlotio **x** `y` [a](b)\n- item\n```\n";

        let html = convert(source);

        assert!(html.contains(
            "<pre class=\"bash\"><code><p># comment</p>\n<p>lotio **x** `y` [a](b)</p>\n<p>- item</p>\n</code></pre>"
        ));
        assert!(!html.contains("<ul>"));
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn every_fenced_line_survives_verbatim() {
        let code = "const anim = await Lotio.load('a.json');\n\nanim.play();\n";
        let source = format!("Text\n\n```js\n{code}```\n\nMore");

        let html = convert(&source);

        for line in code.lines().filter(|l| !l.is_empty()) {
            assert!(html.contains(&format!("<p>{line}</p>")), "missing {line}");
        }
        assert!(html.contains("<pre class=\"js\">"));
    }

    #[test]
    fn code_without_language() {
        let html = convert("```\nplain\n```");

        assert!(html.contains("<pre><code><p>plain</p>\n</code></pre>"));
        assert!(!html.contains("<p><pre>"));
    }

    #[test]
    fn raw_pre_blocks_are_kept_whole() {
        let source = "<pre>\nline one\n\nline two\n</pre>";

        let html = convert(source);

        assert!(html.contains(source));
        assert!(!html.contains("<p>line one</p>"));
    }

    #[test]
    fn script_inside_code_block_is_restored() {
        let source = "```html\n<script>go()</script>\n```";

        let html = convert(source);

        assert!(html.contains("<script>go()</script>"));
        assert!(html.starts_with("\n<pre class=\"html\"><code>"));
        assert!(!html.contains("SCRIPT_BLOCK"));
    }

    #[test]
    fn placeholder_lookalikes_in_content_survive() {
        let source = "Literal __PRE_BLOCK_0__ text\n\n```\ncode\n```";

        let html = convert(source);

        assert!(html.contains("<p>Literal __PRE_BLOCK_0__ text</p>"));
        assert!(html.contains("<pre><code><p>code</p>"));
    }
}
