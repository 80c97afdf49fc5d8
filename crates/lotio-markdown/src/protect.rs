//! Placeholder registry for spans that must survive text transforms untouched.
//!
//! Verbatim regions (script tags, fenced code, `<pre>` blocks) are swapped for
//! numbered tokens before any lossy line-based rewriting, then swapped back by
//! exact token lookup once the rewriting is done.

use regex::Regex;

/// Shape of the placeholder tokens a registry hands out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStyle {
    /// `<!-- STEM_n -->`, passed through by HTML-aware processors.
    Comment,
    /// `__STEM_n__`, a bare word that never looks like markup.
    Underscore,
}

/// Ordered mapping from placeholder token to a stored value.
///
/// Tokens are `index`-addressed, so token `n` always belongs to the `n`th
/// value pushed through [`ProtectedBlocks::protect`].
#[derive(Debug, Clone)]
pub struct ProtectedBlocks<T> {
    style: TokenStyle,
    stem: String,
    values: Vec<T>,
}

impl<T> ProtectedBlocks<T> {
    /// Create a registry whose tokens cannot occur in `source`.
    ///
    /// The stem is extended until no token prefix appears in the source text,
    /// so a document that literally contains `__CODE_BLOCK_0__` still round-trips.
    pub fn new(style: TokenStyle, stem: &str, source: &str) -> Self {
        let mut stem = stem.to_string();
        while source.contains(&Self::prefix_for(style, &stem)) {
            stem.push('X');
        }
        Self {
            style,
            stem,
            values: Vec::new(),
        }
    }

    fn prefix_for(style: TokenStyle, stem: &str) -> String {
        match style {
            TokenStyle::Comment => format!("<!-- {stem}_"),
            TokenStyle::Underscore => format!("__{stem}_"),
        }
    }

    /// Token for the value at `index`.
    pub fn token(&self, index: usize) -> String {
        match self.style {
            TokenStyle::Comment => format!("<!-- {}_{} -->", self.stem, index),
            TokenStyle::Underscore => format!("__{}_{}__", self.stem, index),
        }
    }

    /// Store a value and return the token that now stands in for it.
    pub fn protect(&mut self, value: T) -> String {
        let token = self.token(self.values.len());
        self.values.push(value);
        token
    }

    /// Whether `text` is exactly one of this registry's tokens.
    pub fn is_token(&self, text: &str) -> bool {
        (0..self.values.len()).any(|i| self.token(i) == text)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(token, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (String, &T)> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, value)| (self.token(i), value))
    }
}

impl<T: AsRef<str>> ProtectedBlocks<T> {
    /// Put every stored block back in place of its token.
    ///
    /// A `<p>` wrapper that paragraph handling placed around a token is
    /// dropped first. Each token is replaced once; a token that went missing
    /// during transformation is reported and its block is lost.
    pub fn restore(&self, html: &str) -> String {
        let mut html = html.to_string();

        for (token, block) in self.iter() {
            // Compiled per token because the pattern embeds the token text.
            let wrapped = format!(r"<p>\s*{}\s*</p>", regex::escape(&token));
            if let Ok(re) = Regex::new(&wrapped) {
                html = re.replace_all(&html, regex::NoExpand(token.as_str())).into_owned();
            }

            if html.contains(&token) {
                html = html.replacen(&token, block.as_ref(), 1);
            } else {
                tracing::warn!("Placeholder {} was lost during conversion", token);
            }
        }

        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hands_out_sequential_tokens() {
        let mut blocks = ProtectedBlocks::new(TokenStyle::Underscore, "PRE_BLOCK", "");

        assert_eq!(blocks.protect("a".to_string()), "__PRE_BLOCK_0__");
        assert_eq!(blocks.protect("b".to_string()), "__PRE_BLOCK_1__");
        assert_eq!(blocks.len(), 2);
        assert!(blocks.is_token("__PRE_BLOCK_1__"));
        assert!(!blocks.is_token("__PRE_BLOCK_2__"));
    }

    #[test]
    fn comment_tokens() {
        let mut blocks = ProtectedBlocks::new(TokenStyle::Comment, "SCRIPT_BLOCK", "");

        assert_eq!(blocks.protect("x"), "<!-- SCRIPT_BLOCK_0 -->");
    }

    #[test]
    fn avoids_stems_present_in_source() {
        let source = "literal __CODE_BLOCK_0__ in the text";
        let mut blocks = ProtectedBlocks::new(TokenStyle::Underscore, "CODE_BLOCK", source);

        let token = blocks.protect("code");

        assert_eq!(token, "__CODE_BLOCKX_0__");
        assert!(!source.contains(&token));
    }

    #[test]
    fn restores_and_unwraps_paragraphs() {
        let mut blocks = ProtectedBlocks::new(TokenStyle::Underscore, "PRE_BLOCK", "");
        let first = blocks.protect("<pre>one</pre>");
        let second = blocks.protect("<pre>two</pre>");

        let html = format!("<p> {first} </p>\n{second}");

        assert_eq!(blocks.restore(&html), "<pre>one</pre>\n<pre>two</pre>");
    }

    #[test]
    fn tokens_with_shared_prefix_do_not_clash() {
        let mut blocks = ProtectedBlocks::new(TokenStyle::Underscore, "PRE_BLOCK", "");
        let tokens: Vec<String> = (0..11).map(|i| blocks.protect(format!("[{i}]"))).collect();

        let html = format!("{} {}", tokens[1], tokens[10]);

        assert_eq!(blocks.restore(&html), "[1] [10]");
    }
}
