//! Documentation site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use lotio_markdown::Engine;

use crate::assets::{copy_assets, default_assets, AssetDir, CopiedAsset};
use crate::pages::{default_pages, PageDescriptor};
use crate::templates::{Context, Template};
use crate::version::resolve_version;

/// Configuration for building the documentation site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Project root (git queries and asset sources are relative to it)
    pub project_root: PathBuf,

    /// Directory holding the markdown sources
    pub docs_dir: PathBuf,

    /// Shared HTML template
    pub template_path: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Pages to render
    pub pages: Vec<PageDescriptor>,

    /// Asset directories to copy after the pages
    pub assets: Vec<AssetDir>,

    /// Markdown converter
    pub engine: Engine,

    /// Fixed version string; resolved from env and git when `None`
    pub version: Option<String>,
}

impl BuildConfig {
    /// Standard layout under `project_root`: `docs/`, `docs/_template.html`, `_site/`.
    pub fn for_project(project_root: impl Into<PathBuf>) -> Self {
        let project_root = project_root.into();
        let docs_dir = project_root.join("docs");

        Self {
            template_path: docs_dir.join("_template.html"),
            output_dir: project_root.join("_site"),
            pages: default_pages(),
            assets: default_assets(&project_root, None),
            engine: Engine::detect(),
            version: None,
            docs_dir,
            project_root,
        }
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::for_project(".")
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Output file names written, in page order
    pub pages: Vec<String>,

    /// Sources that did not exist
    pub skipped: Vec<PathBuf>,

    /// Asset directories copied
    pub assets: Vec<CopiedAsset>,

    /// Version string rendered into the pages
    pub version: String,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read template {path}: {message}")]
    Template { path: String, message: String },

    #[error("Failed to read source: {0}")]
    ReadError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),

    #[error("Failed to copy assets: {0}")]
    CopyError(String),
}

/// Static documentation builder.
pub struct DocBuilder {
    config: BuildConfig,
}

impl DocBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build every page, then copy the asset directories.
    pub fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir).map_err(|e| {
            BuildError::WriteError(format!("{}: {}", self.config.output_dir.display(), e))
        })?;

        let template = Template::load(&self.config.template_path)?;

        let version = self
            .config
            .version
            .clone()
            .unwrap_or_else(|| resolve_version(&self.config.project_root));

        tracing::debug!(
            "Building {} pages with the {} engine, version {}",
            self.config.pages.len(),
            self.config.engine.name(),
            version
        );

        let mut pages = Vec::new();
        let mut skipped = Vec::new();

        for page in &self.config.pages {
            let source_path = self.config.docs_dir.join(&page.source);

            if !source_path.exists() {
                tracing::warn!("{} not found, skipping...", source_path.display());
                skipped.push(source_path);
                continue;
            }

            self.build_page(page, &source_path, &template, &version)?;
            tracing::info!("Built: {}", page.output);
            pages.push(page.output.clone());
        }

        tracing::info!("Copying assets...");
        let assets = copy_assets(&self.config.assets, &self.config.output_dir)?;

        Ok(BuildResult {
            pages,
            skipped,
            assets,
            version,
            duration_ms: start.elapsed().as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Convert, render and write a single page.
    fn build_page(
        &self,
        page: &PageDescriptor,
        source_path: &Path,
        template: &Template,
        version: &str,
    ) -> Result<(), BuildError> {
        let markdown = fs::read_to_string(source_path)
            .map_err(|e| BuildError::ReadError(format!("{}: {}", source_path.display(), e)))?;

        let content = lotio_markdown::to_html(&markdown, self.config.engine);

        let html = template.render(&Context {
            title: &page.title,
            content: &content,
            version,
            active: page.nav_key(),
        });

        let output_path = self.config.output_dir.join(&page.output);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&output_path, html)
            .map_err(|e| BuildError::WriteError(format!("{}: {}", output_path.display(), e)))
    }
}
