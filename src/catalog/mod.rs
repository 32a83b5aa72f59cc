//! Template catalog: discovery, caching, and filtered enumeration.
//!
//! A catalog is built from an installed-templates root directory, one
//! subdirectory per template, and cached in memory until explicitly
//! invalidated:
//!
//! - [`Template`] - one discoverable project template
//! - [`CatalogBuilder`] - scans the root and resolves each candidate's origin
//! - [`LocalTemplateSource`] - owns the cache and serves cancellable queries
//! - [`TemplateSource`] - the enumeration contract shared by template sources
//!
//! # Example
//!
//! ```no_run
//! use formwork::catalog::{LocalTemplateSource, TemplateSource};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() -> formwork::Result<()> {
//! let source = LocalTemplateSource::with_defaults(formwork::catalog::default_templates_dir());
//! let page = source.templates("", None, &CancellationToken::new()).await?;
//! println!("{} templates installed", page.templates.len());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod local;
pub mod source;
pub mod template;

pub use builder::CatalogBuilder;
pub use local::LocalTemplateSource;
pub use source::{TemplatePage, TemplateSource};
pub use template::Template;

/// Get the default installed-templates directory.
pub fn default_templates_dir() -> std::path::PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join(".formwork")
        .join("templates")
}
