//! Page template with literal `{{TOKEN}}` substitution.

use std::fs;
use std::path::Path;

use crate::builder::BuildError;
use crate::pages::NavKey;

/// Marker inserted for the sidebar entry of the current page.
pub const ACTIVE_CLASS: &str = r#"class="active""#;

/// Values substituted into the template for one page.
#[derive(Debug, Clone)]
pub struct Context<'a> {
    /// Page title
    pub title: &'a str,
    /// Rendered HTML fragment
    pub content: &'a str,
    /// Release version shown in the footer
    pub version: &'a str,
    /// Sidebar section to highlight
    pub active: Option<NavKey>,
}

/// The shared HTML template every page is rendered into.
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read the template file. A missing template is fatal for the build.
    pub fn load(path: &Path) -> Result<Self, BuildError> {
        let source = fs::read_to_string(path).map_err(|e| BuildError::Template {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { source })
    }

    /// Render a page. Values are inserted verbatim, without escaping.
    ///
    /// Substitution runs in a fixed order (title, content, version, then the
    /// active markers), so tokens appearing inside the content are replaced
    /// by the later passes too.
    pub fn render(&self, context: &Context<'_>) -> String {
        let mut html = self
            .source
            .replace("{{TITLE}}", context.title)
            .replace("{{CONTENT}}", context.content)
            .replace("{{VERSION}}", context.version);

        for key in NavKey::ALL {
            let marker = if context.active == Some(key) {
                ACTIVE_CLASS
            } else {
                ""
            };
            html = html.replace(key.placeholder(), marker);
        }

        html
    }
}
