//! Static documentation site builder for lotio.
//!
//! Renders a fixed set of markdown pages into a shared HTML template with
//! sidebar navigation markers, then copies the browser bundle, samples and
//! fonts next to them.

pub mod assets;
pub mod builder;
pub mod pages;
pub mod templates;
pub mod version;

pub use assets::{AssetDir, CopiedAsset};
pub use builder::{BuildConfig, BuildError, BuildResult, DocBuilder};
pub use lotio_markdown::Engine;
pub use pages::{default_pages, NavKey, PageDescriptor};
pub use templates::Template;
