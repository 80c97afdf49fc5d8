//! Fenced code blocks and the line-per-paragraph code rendering convention.
//!
//! Every non-blank code line is wrapped in its own `<p>` so the docs
//! stylesheet can number and highlight lines individually. Blank lines stay
//! bare. Both conversion engines emit code this way.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// A fenced code block pulled out of a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedCode {
    /// Language tag from the opening fence, if any
    pub language: Option<String>,

    /// Raw code between the fences, trailing newline included
    pub source: String,
}

impl FencedCode {
    pub fn new(language: Option<String>, source: String) -> Self {
        Self { language, source }
    }

    /// Render as `<pre class="lang"><code>…</code></pre>` with wrapped lines.
    ///
    /// The code text is emitted as-is, without entity escaping.
    pub fn to_html(&self) -> String {
        let wrapped = wrap_code_lines(&self.source);
        match &self.language {
            Some(lang) => format!(r#"<pre class="{lang}"><code>{wrapped}</code></pre>"#),
            None => format!("<pre><code>{wrapped}</code></pre>"),
        }
    }
}

/// Wrap each non-blank line in `<p>` tags, leaving blank lines untouched.
pub fn wrap_code_lines(code: &str) -> String {
    code.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("<p>{line}</p>")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Copy the `language-xxx` class of every `<pre><code>` block onto the `<pre>`
/// tag and wrap the code lines.
///
/// Blocks whose `<code>` tag carries no language class are left exactly as
/// they are. Used on HTML produced by the CommonMark engine.
pub fn add_language_classes(html: &str) -> String {
    static PRE_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"(?s)(<pre[^>]*>)(<code[^>]*>)(.*?)(</code></pre>)")
            .expect("Invalid pre block regex")
    });
    static LANG_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"class="language-(\w+)""#).expect("Invalid language class regex")
    });
    static CLASS_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"class="([^"]*)""#).expect("Invalid class regex"));

    PRE_RE
        .replace_all(html, |caps: &Captures| {
            let pre_tag = &caps[1];
            let code_tag = &caps[2];

            let Some(lang) = LANG_RE.captures(code_tag).map(|c| c[1].to_string()) else {
                return caps[0].to_string();
            };

            let pre_tag = if pre_tag.contains("class=") {
                CLASS_RE
                    .replace(pre_tag, |c: &Captures| format!(r#"class="{} {}""#, &c[1], lang))
                    .into_owned()
            } else {
                format!(r#"{} class="{}">"#, pre_tag.trim_end_matches('>'), lang)
            };

            format!(
                "{}{}{}{}",
                pre_tag,
                code_tag,
                wrap_code_lines(&caps[3]),
                &caps[4]
            )
        })
        .into_owned()
}
