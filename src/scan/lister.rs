//! Non-recursive directory listing.

use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Lists candidate template directories.
#[async_trait]
pub trait DirLister: Send + Sync {
    /// Check whether `path` exists and is a directory.
    async fn exists(&self, path: &Path) -> bool;

    /// List the immediate subdirectories of `path`.
    ///
    /// Not recursive. Order is implementation-defined but stable within one
    /// call. Returned paths keep `path` as their prefix.
    async fn subdirectories(&self, path: &Path) -> Result<Vec<PathBuf>>;
}

/// Production lister backed by `tokio::fs`.
#[derive(Debug, Clone, Default)]
pub struct LocalDirLister;

impl LocalDirLister {
    /// Create a new lister.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DirLister for LocalDirLister {
    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }

    async fn subdirectories(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let scan_err = |e: std::io::Error| CatalogError::Scan {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut entries = tokio::fs::read_dir(path).await.map_err(scan_err)?;
        let mut folders = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(scan_err)? {
            // Entries that vanish mid-scan are skipped, not fatal.
            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(_) => continue,
            };

            if file_type.is_dir() {
                folders.push(entry.path());
            }
        }

        Ok(folders)
    }
}
