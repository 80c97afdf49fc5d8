//! Page descriptors and sidebar navigation keys.

use serde::Deserialize;

/// Sidebar section a page highlights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavKey {
    Overview,
    Cli,
    Docker,
    JsLibrary,
    CppLibrary,
}

impl NavKey {
    pub const ALL: [NavKey; 5] = [
        NavKey::Overview,
        NavKey::Cli,
        NavKey::Docker,
        NavKey::JsLibrary,
        NavKey::CppLibrary,
    ];

    /// Parse the key used in page descriptors (`"js-library"` etc.).
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "overview" => Some(Self::Overview),
            "cli" => Some(Self::Cli),
            "docker" => Some(Self::Docker),
            "js-library" => Some(Self::JsLibrary),
            "cpp-library" => Some(Self::CppLibrary),
            _ => None,
        }
    }

    /// Template token replaced by the active marker for this section.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Overview => "{{OVERVIEW_ACTIVE}}",
            Self::Cli => "{{CLI_ACTIVE}}",
            Self::Docker => "{{DOCKER_ACTIVE}}",
            Self::JsLibrary => "{{JS_ACTIVE}}",
            Self::CppLibrary => "{{CPP_ACTIVE}}",
        }
    }
}

/// One markdown source rendered to one HTML page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageDescriptor {
    /// Markdown file name, relative to the docs directory
    pub source: String,

    /// HTML file name, relative to the output directory
    pub output: String,

    /// Page title
    pub title: String,

    /// Navigation key (`overview`, `cli`, `docker`, `js-library`, `cpp-library`)
    pub nav: String,
}

impl PageDescriptor {
    pub fn new(source: &str, output: &str, title: &str, nav: &str) -> Self {
        Self {
            source: source.to_string(),
            output: output.to_string(),
            title: title.to_string(),
            nav: nav.to_string(),
        }
    }

    pub fn nav_key(&self) -> Option<NavKey> {
        NavKey::from_key(&self.nav)
    }
}

/// The lotio documentation pages.
///
/// `overview.md` is rendered twice so the site root serves the overview.
pub fn default_pages() -> Vec<PageDescriptor> {
    vec![
        PageDescriptor::new("overview.md", "index.html", "Overview", "overview"),
        PageDescriptor::new("overview.md", "overview.html", "Overview", "overview"),
        PageDescriptor::new("cli.md", "cli.html", "CLI", "cli"),
        PageDescriptor::new("docker.md", "docker.html", "Docker", "docker"),
        PageDescriptor::new("js-library.md", "js-library.html", "JS Library", "js-library"),
        PageDescriptor::new("cpp-library.md", "cpp-library.html", "C++ Library", "cpp-library"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pages_cover_every_section() {
        let pages = default_pages();

        assert_eq!(pages.len(), 6);
        for key in NavKey::ALL {
            assert!(pages.iter().any(|p| p.nav_key() == Some(key)));
        }
    }

    #[test]
    fn parses_nav_keys() {
        assert_eq!(NavKey::from_key("js-library"), Some(NavKey::JsLibrary));
        assert_eq!(NavKey::from_key("cpp-library"), Some(NavKey::CppLibrary));
        assert_eq!(NavKey::from_key("blog"), None);
    }
}
