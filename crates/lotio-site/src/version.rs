//! Release version shown on every page.

use std::path::Path;
use std::process::Command;

/// Version used when nothing better is known.
pub const DEFAULT_VERSION: &str = "dev";

/// Resolve the version: `VERSION` env var, else the latest `v*.*.*` git tag,
/// else `dev`.
pub fn resolve_version(project_root: &Path) -> String {
    resolve_with(std::env::var("VERSION").ok(), || latest_git_tag(project_root))
}

/// Resolution order with the git lookup injected.
///
/// An unset or `dev` env value falls through to the git lookup.
pub fn resolve_with(env: Option<String>, git_tag: impl FnOnce() -> Option<String>) -> String {
    match env {
        Some(version) if version != DEFAULT_VERSION => version,
        _ => git_tag().unwrap_or_else(|| DEFAULT_VERSION.to_string()),
    }
}

/// `git describe --tags --match v*.*.* --abbrev=0`, run in `project_root`.
///
/// Any failure (git missing, not a repository, no tag) yields `None`.
pub fn latest_git_tag(project_root: &Path) -> Option<String> {
    let output = match Command::new("git")
        .args(["describe", "--tags", "--match", "v*.*.*", "--abbrev=0"])
        .current_dir(project_root)
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!("git describe unavailable: {}", e);
            return None;
        }
    };

    if !output.status.success() {
        tracing::debug!("git describe exited with {}", output.status);
        return None;
    }

    let tag = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!tag.is_empty()).then_some(tag)
}
