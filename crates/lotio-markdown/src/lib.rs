//! Markdown to HTML fragment conversion for the lotio documentation.
//!
//! Two engines produce the same code-block convention: the CommonMark engine
//! (feature `cmark`, on by default) and a regex and line based fallback that
//! needs no markdown library.

pub mod codeblock;
#[cfg(feature = "cmark")]
pub mod commonmark;
pub mod fallback;
pub mod protect;

pub use codeblock::FencedCode;
pub use protect::{ProtectedBlocks, TokenStyle};

/// Which converter turns markdown into HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    /// pulldown-cmark with tables and newline-to-break
    CommonMark,
    /// Built-in regex and line based converter
    Fallback,
}

impl Engine {
    /// The best engine compiled into this build.
    pub fn detect() -> Self {
        if cfg!(feature = "cmark") {
            Self::CommonMark
        } else {
            tracing::warn!("CommonMark engine not compiled in, using basic markdown conversion");
            Self::Fallback
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CommonMark => "commonmark",
            Self::Fallback => "fallback",
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::detect()
    }
}

/// Convert a markdown document to an HTML fragment.
pub fn to_html(source: &str, engine: Engine) -> String {
    match engine {
        #[cfg(feature = "cmark")]
        Engine::CommonMark => commonmark::convert(source),
        #[cfg(not(feature = "cmark"))]
        Engine::CommonMark => {
            tracing::warn!("CommonMark engine requested but not compiled in");
            fallback::convert(source)
        }
        Engine::Fallback => fallback::convert(source),
    }
}
