//! Conversion through pulldown-cmark.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::codeblock::add_language_classes;
use crate::fallback::protect_scripts;

/// Class every engine-rendered `<pre>` carries, ahead of the language class.
pub const CODEHILITE_CLASS: &str = "codehilite";

/// Convert markdown with the CommonMark engine.
///
/// Tables, footnotes, strikethrough and task lists are enabled, and every
/// soft line break becomes `<br />`. Script blocks bypass the parser. Code
/// blocks come out as `<pre class="codehilite lang">`.
pub fn convert(source: &str) -> String {
    let (text, scripts) = protect_scripts(source);

    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(&text, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    let html_output = html_output.replace(
        "<pre><code",
        &format!(r#"<pre class="{CODEHILITE_CLASS}"><code"#),
    );
    let html_output = add_language_classes(&html_output);
    scripts.restore(&html_output)
}
