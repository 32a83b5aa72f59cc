//! Cached local template source.
//!
//! Owns the in-memory catalog for one installed-templates root. The catalog
//! is built on the first enumeration after construction or invalidation and
//! reused until [`LocalTemplateSource::invalidate_cache`] drops it.

use crate::catalog::builder::CatalogBuilder;
use crate::catalog::source::{TemplatePage, TemplateSource};
use crate::catalog::template::Template;
use crate::error::{CatalogError, Result};
use crate::scan::{GitOriginResolver, LocalDirLister};
use crate::search;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

/// Template source backed by a directory of installed templates.
///
/// The cache has two states: empty (initial, or after
/// [`invalidate_cache`](TemplateSource::invalidate_cache)) and populated.
/// The first enumeration in the empty state runs the builder exactly once;
/// concurrent first enumerations serialize on a build barrier and adopt the
/// same result. The build phase does not observe the cancel signal - it is
/// a one-time cost per cache generation.
pub struct LocalTemplateSource {
    root: PathBuf,
    builder: CatalogBuilder,
    /// Populated catalog, or `None` before the first build / after invalidation.
    cache: Mutex<Option<Arc<Vec<Template>>>>,
    /// Serializes builds so each generation builds at most once.
    build_barrier: tokio::sync::Mutex<()>,
}

impl LocalTemplateSource {
    /// Create a source over `root` with the given builder.
    pub fn new(root: impl Into<PathBuf>, builder: CatalogBuilder) -> Self {
        Self {
            root: root.into(),
            builder,
            cache: Mutex::new(None),
            build_barrier: tokio::sync::Mutex::new(()),
        }
    }

    /// Create a source over `root` with the production filesystem and git
    /// collaborators.
    pub fn with_defaults(root: impl Into<PathBuf>) -> Self {
        let builder = CatalogBuilder::new(
            Arc::new(LocalDirLister::new()),
            Arc::new(GitOriginResolver::new()),
        );
        Self::new(root, builder)
    }

    /// Installed-templates root this source scans.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn cached(&self) -> Option<Arc<Vec<Template>>> {
        self.cache.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Return the populated catalog, building it if this generation has none.
    ///
    /// Build errors propagate and leave the cache empty, so the next call
    /// retries the build from scratch.
    async fn ensure_cache(&self) -> Result<Arc<Vec<Template>>> {
        if let Some(catalog) = self.cached() {
            return Ok(catalog);
        }

        let _build = self.build_barrier.lock().await;

        // Another caller may have finished the build while we waited.
        if let Some(catalog) = self.cached() {
            return Ok(catalog);
        }

        let catalog = Arc::new(self.builder.build(&self.root).await?);
        *self.cache.lock().unwrap_or_else(|e| e.into_inner()) = Some(catalog.clone());
        Ok(catalog)
    }
}

#[async_trait]
impl TemplateSource for LocalTemplateSource {
    async fn templates(
        &self,
        filter: &str,
        _continuation_token: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<TemplatePage> {
        let catalog = self.ensure_cache().await?;
        let keywords = search::parse_keywords(filter);

        let mut templates = Vec::new();
        for template in catalog.iter() {
            if cancel.is_cancelled() {
                return Err(CatalogError::Cancelled);
            }

            if search::matches(&keywords, template) {
                templates.push(template.clone());
            }
        }

        Ok(TemplatePage::complete(templates))
    }

    fn invalidate_cache(&self) {
        *self.cache.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }
}
