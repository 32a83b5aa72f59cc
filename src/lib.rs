//! Formwork - local project-template catalog service.
//!
//! Formwork discovers installed project templates (one subdirectory per
//! template under a root folder), enriches each with the version-control
//! origin it was cloned from, caches the result set in memory, and answers
//! keyword-filtered enumeration queries under cooperative cancellation.
//!
//! # Modules
//!
//! - [`catalog`] - Template model, catalog building, and the cached local source
//! - [`error`] - Error types and result aliases
//! - [`scan`] - Filesystem and version-control collaborator capabilities
//! - [`search`] - Keyword parsing and matching
//!
//! # Example
//!
//! ```no_run
//! use formwork::catalog::{LocalTemplateSource, TemplateSource};
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn demo() -> formwork::Result<()> {
//! let source = LocalTemplateSource::with_defaults("/home/user/.formwork/templates");
//!
//! // First query builds the catalog; later queries reuse it.
//! let page = source.templates("flask", None, &CancellationToken::new()).await?;
//! for template in &page.templates {
//!     println!("{}", template.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod error;
pub mod scan;
pub mod search;

pub use error::{CatalogError, Result};
