//! The enumeration contract shared by template sources.

use crate::catalog::template::Template;
use crate::error::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// One page of enumerated templates.
#[derive(Debug, Clone, Default)]
pub struct TemplatePage {
    /// Matching templates, in catalog order.
    pub templates: Vec<Template>,

    /// Token to fetch the next page, for sources that page their results.
    ///
    /// The local source scans its whole catalog in one call and never
    /// produces a token.
    pub continuation_token: Option<String>,
}

impl TemplatePage {
    /// Wrap a full match set with no continuation.
    pub fn complete(templates: Vec<Template>) -> Self {
        Self {
            templates,
            continuation_token: None,
        }
    }
}

/// A queryable source of project templates.
#[async_trait]
pub trait TemplateSource: Send + Sync {
    /// Enumerate templates matching `filter`.
    ///
    /// `filter` is free text split into keywords; a blank filter matches
    /// everything. `continuation_token` continues a paged enumeration for
    /// sources that produce one. The scan checks `cancel` cooperatively
    /// before each entry and fails with
    /// [`CatalogError::Cancelled`](crate::error::CatalogError::Cancelled)
    /// rather than returning a truncated page.
    async fn templates(
        &self,
        filter: &str,
        continuation_token: Option<&str>,
        cancel: &CancellationToken,
    ) -> Result<TemplatePage>;

    /// Drop any cached catalog so the next enumeration rebuilds it.
    ///
    /// Idempotent; never triggers a rebuild by itself.
    fn invalidate_cache(&self);
}
