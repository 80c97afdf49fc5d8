//! Static asset directories copied into the site output.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::builder::BuildError;

/// A directory copied into the output under `name`.
///
/// Candidate sources are tried in order; the first one that exists wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetDir {
    /// Destination directory name inside the output
    pub name: String,

    /// Source directories, most preferred first
    pub sources: Vec<PathBuf>,

    /// Log a warning when no source exists
    pub required: bool,
}

impl AssetDir {
    pub fn new(name: &str, sources: Vec<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            sources,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// First candidate source that exists on disk.
    pub fn resolve_source(&self) -> Option<&Path> {
        self.sources
            .iter()
            .map(PathBuf::as_path)
            .find(|path| path.is_dir())
    }
}

/// An asset directory that was copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedAsset {
    pub name: String,
    pub source: PathBuf,
    pub files: usize,
}

/// Where the browser bundle lives inside the npm package.
pub const BROWSER_PACKAGE_DIR: &str = "node_modules/@matrunchyk/lotio/browser";

/// The lotio asset set: the browser bundle (npm package copy preferred over
/// the local `browser/` directory), sample animations and fonts.
pub fn default_assets(project_root: &Path, browser_package: Option<&Path>) -> Vec<AssetDir> {
    let package = browser_package
        .map(Path::to_path_buf)
        .unwrap_or_else(|| project_root.join(BROWSER_PACKAGE_DIR));

    vec![
        AssetDir::new("browser", vec![package, project_root.join("browser")]).required(),
        AssetDir::new("samples", vec![project_root.join("examples/samples")]),
        AssetDir::new("fonts", vec![project_root.join("examples/fonts")]),
    ]
}

/// Copy every asset directory that has a source into `output_dir`.
///
/// An existing destination is deleted first, so repeated builds never merge
/// stale files into the output.
pub fn copy_assets(assets: &[AssetDir], output_dir: &Path) -> Result<Vec<CopiedAsset>, BuildError> {
    let mut copied = Vec::new();

    for asset in assets {
        let Some(source) = asset.resolve_source() else {
            if asset.required {
                tracing::warn!(
                    "{} directory not found in any of: {}",
                    asset.name,
                    asset
                        .sources
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            } else {
                tracing::debug!("Skipping {}: no source directory", asset.name);
            }
            continue;
        };

        let dest = output_dir.join(&asset.name);
        let files = replace_dir(source, &dest)?;
        tracing::info!("Copied: {} (from {})", asset.name, source.display());

        copied.push(CopiedAsset {
            name: asset.name.clone(),
            source: source.to_path_buf(),
            files,
        });
    }

    Ok(copied)
}

/// Delete `dest` if present, then copy the tree at `source` into it.
///
/// Returns the number of files copied.
pub fn replace_dir(source: &Path, dest: &Path) -> Result<usize, BuildError> {
    if dest.exists() {
        fs::remove_dir_all(dest).map_err(|e| {
            BuildError::CopyError(format!("Failed to remove {}: {}", dest.display(), e))
        })?;
    }

    let mut files = 0;
    for entry in WalkDir::new(source).follow_links(true) {
        let entry = entry.map_err(|e| BuildError::CopyError(e.to_string()))?;
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| {
                BuildError::CopyError(format!("Failed to create {}: {}", target.display(), e))
            })?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| {
                BuildError::CopyError(format!(
                    "Failed to copy {} to {}: {}",
                    entry.path().display(),
                    target.display(),
                    e
                ))
            })?;
            files += 1;
        }
    }

    Ok(files)
}
