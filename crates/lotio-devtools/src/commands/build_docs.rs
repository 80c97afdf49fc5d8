//! Documentation build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use lotio_site::assets::default_assets;
use lotio_site::{BuildConfig, DocBuilder, Engine, PageDescriptor};
use serde::Deserialize;

/// Config file name looked up in the project root.
pub const CONFIG_FILE: &str = "lotio-docs.toml";

/// Configuration file structure (lotio-docs.toml).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    docs: DocsConfig,
    #[serde(default)]
    assets: AssetsConfig,
    /// Replaces the built-in page list when present
    pages: Option<Vec<PageDescriptor>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DocsConfig {
    #[serde(default = "default_docs_dir")]
    dir: String,
    /// Defaults to `<dir>/_template.html`
    template: Option<String>,
    #[serde(default = "default_output")]
    output: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            dir: default_docs_dir(),
            template: None,
            output: default_output(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct AssetsConfig {
    /// Browser bundle inside an installed npm package
    browser_package: Option<String>,
}

fn default_docs_dir() -> String {
    "docs".to_string()
}
fn default_output() -> String {
    "_site".to_string()
}

/// Command line options for the build.
#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub root: PathBuf,
    pub config: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub fallback: bool,
    pub version: Option<String>,
}

/// Load the config file if it exists.
/// Returns an error if the file exists but is malformed, or if an explicitly
/// requested file is missing.
fn load_config(root: &Path, explicit: Option<&Path>) -> Result<ConfigFile> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = root.join(CONFIG_FILE);
            if !path.exists() {
                return Ok(ConfigFile::default());
            }
            path
        }
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Merge command line options over the config file.
fn build_config(args: BuildArgs, file: ConfigFile) -> BuildConfig {
    let root = args.root;
    let docs_dir = root.join(&file.docs.dir);
    let template_path = file
        .docs
        .template
        .map(|t| root.join(t))
        .unwrap_or_else(|| docs_dir.join("_template.html"));
    let output_dir = args
        .output
        .unwrap_or_else(|| root.join(&file.docs.output));
    let browser_package = file.assets.browser_package.map(|p| root.join(p));

    let mut config = BuildConfig::for_project(&root);
    config.assets = default_assets(&root, browser_package.as_deref());
    config.docs_dir = docs_dir;
    config.template_path = template_path;
    config.output_dir = output_dir;
    config.version = args.version;
    if let Some(pages) = file.pages {
        config.pages = pages;
    }
    if args.fallback {
        config.engine = Engine::Fallback;
    }

    config
}

/// Run the build-docs command.
pub fn run(args: BuildArgs) -> Result<()> {
    tracing::info!("Building documentation...");

    let file_config = load_config(&args.root, args.config.as_deref())?;
    let config = build_config(args, file_config);

    let result = DocBuilder::new(config)
        .build()
        .context("Documentation build failed")?;

    if !result.skipped.is_empty() {
        tracing::warn!("Skipped {} missing pages", result.skipped.len());
    }

    tracing::info!(
        "Built {} pages ({}) and copied {} asset directories in {}ms",
        result.pages.len(),
        result.version,
        result.assets.len(),
        result.duration_ms
    );
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(root: &Path) -> BuildArgs {
        BuildArgs {
            root: root.to_path_buf(),
            config: None,
            output: None,
            fallback: false,
            version: Some("v0.0.1".to_string()),
        }
    }

    #[test]
    fn defaults_without_config_file() {
        let temp = tempdir().unwrap();

        let file = load_config(temp.path(), None).unwrap();
        let config = build_config(args(temp.path()), file);

        assert_eq!(config.docs_dir, temp.path().join("docs"));
        assert_eq!(config.template_path, temp.path().join("docs/_template.html"));
        assert_eq!(config.output_dir, temp.path().join("_site"));
        assert_eq!(config.pages.len(), 6);
    }

    #[test]
    fn reads_config_file() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            r#"
[docs]
dir = "documentation"
output = "public"

[assets]
browser_package = "vendor/lotio/browser"

[[pages]]
source = "readme.md"
output = "index.html"
title = "Home"
nav = "overview"
"#,
        )
        .unwrap();

        let file = load_config(temp.path(), None).unwrap();
        let config = build_config(args(temp.path()), file);

        assert_eq!(config.docs_dir, temp.path().join("documentation"));
        assert_eq!(config.template_path, temp.path().join("documentation/_template.html"));
        assert_eq!(config.output_dir, temp.path().join("public"));
        assert_eq!(config.pages, [PageDescriptor::new("readme.md", "index.html", "Home", "overview")]);
        assert_eq!(config.assets[0].sources[0], temp.path().join("vendor/lotio/browser"));
    }

    #[test]
    fn flags_override_config() {
        let temp = tempdir().unwrap();
        let mut args = args(temp.path());
        args.output = Some(temp.path().join("out"));
        args.fallback = true;

        let config = build_config(args, ConfigFile::default());

        assert_eq!(config.output_dir, temp.path().join("out"));
        assert_eq!(config.engine, Engine::Fallback);
        assert_eq!(config.version.as_deref(), Some("v0.0.1"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE), "[docs\ndir = 1").unwrap();

        assert!(load_config(temp.path(), None).is_err());
    }

    #[test]
    fn missing_explicit_config_is_an_error() {
        let temp = tempdir().unwrap();

        assert!(load_config(temp.path(), Some(&temp.path().join("nope.toml"))).is_err());
    }

    #[test]
    fn builds_site_end_to_end() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("docs");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("_template.html"), "<h1>{{TITLE}}</h1>{{CONTENT}}").unwrap();
        fs::write(docs.join("cli.md"), "Usage text").unwrap();

        run(args(temp.path())).unwrap();

        assert!(temp.path().join("_site/cli.html").exists());
        assert!(!temp.path().join("_site/index.html").exists());
    }
}
