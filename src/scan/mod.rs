//! Collaborator capabilities consumed by the catalog builder.
//!
//! Each capability is a narrow trait with one production implementation:
//!
//! - [`DirLister`] / [`LocalDirLister`] - non-recursive directory listing
//! - [`OriginResolver`] / [`GitOriginResolver`] - version-control origin lookup
//!
//! The builder takes both behind `Arc<dyn ...>`, so tests can substitute
//! deterministic fakes.

pub mod lister;
pub mod origin;

pub use lister::{DirLister, LocalDirLister};
pub use origin::{GitOriginResolver, OriginResolver};
