//! Catalog construction from the installed-templates root.

use crate::catalog::template::Template;
use crate::error::Result;
use crate::scan::{DirLister, OriginResolver};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

/// Builds the authoritative template list for one cache generation.
///
/// The builder only reads from its collaborators; it returns a fresh list
/// and leaves adopting it as the cache to the caller.
pub struct CatalogBuilder {
    lister: Arc<dyn DirLister>,
    origins: Arc<dyn OriginResolver>,
}

impl CatalogBuilder {
    /// Create a builder over the given capabilities.
    pub fn new(lister: Arc<dyn DirLister>, origins: Arc<dyn OriginResolver>) -> Self {
        Self { lister, origins }
    }

    /// Scan `root` and produce one template per immediate subdirectory.
    ///
    /// A missing root yields an empty list, not an error. Origin resolution
    /// failures keep the candidate with no remote URL; a failed directory
    /// listing fails the whole build.
    pub async fn build(&self, root: &Path) -> Result<Vec<Template>> {
        if !self.lister.exists(root).await {
            debug!("Installed templates root {} does not exist", root.display());
            return Ok(Vec::new());
        }

        let folders = self.lister.subdirectories(root).await?;
        let mut templates = Vec::with_capacity(folders.len());

        for folder in folders {
            let mut template = Template::from_dir(folder);
            self.init_remote(&mut template).await;
            templates.push(template);
        }

        debug!(
            "Built catalog of {} templates from {}",
            templates.len(),
            root.display()
        );
        Ok(templates)
    }

    async fn init_remote(&self, template: &mut Template) {
        match self
            .origins
            .resolve_remote_origin(&template.local_folder_path)
            .await
        {
            Ok(origin) => template.remote_url = origin,
            Err(e) => {
                warn!(
                    "Failed to resolve origin for {}: {}",
                    template.local_folder_path.display(),
                    e
                );
            }
        }
    }
}
