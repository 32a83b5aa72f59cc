//! Version-control origin lookup.

use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Resolves the version-control remote origin for a template directory.
#[async_trait]
pub trait OriginResolver: Send + Sync {
    /// Resolve the remote origin URL configured for `path`.
    ///
    /// Returns `Ok(None)` when no origin is configured. Failures (missing
    /// git, unreadable directory) are errors; the catalog build downgrades
    /// them to an absent origin.
    async fn resolve_remote_origin(&self, path: &Path) -> Result<Option<String>>;
}

/// Production resolver that queries the `git` CLI.
#[derive(Debug, Clone, Default)]
pub struct GitOriginResolver;

impl GitOriginResolver {
    /// Create a new resolver.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl OriginResolver for GitOriginResolver {
    async fn resolve_remote_origin(&self, path: &Path) -> Result<Option<String>> {
        let output = Command::new("git")
            .args(["config", "--get", "remote.origin.url"])
            .current_dir(path)
            .output()
            .await
            .map_err(|e| CatalogError::Origin {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        // `git config --get` exits 1 when the key is simply not set.
        if output.status.code() == Some(1) && output.stdout.is_empty() {
            return Ok(None);
        }

        if !output.status.success() {
            return Err(CatalogError::Origin {
                path: path.to_path_buf(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if url.is_empty() {
            Ok(None)
        } else {
            Ok(Some(url))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn git(args: &[&str], cwd: &Path) {
        let output = std::process::Command::new("git")
            .args(args)
            .current_dir(cwd)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    #[tokio::test]
    async fn resolves_configured_origin() {
        let temp = TempDir::new().unwrap();
        git(&["init"], temp.path());
        git(
            &["remote", "add", "origin", "https://example.com/org/repo.git"],
            temp.path(),
        );

        let resolver = GitOriginResolver::new();
        let origin = resolver.resolve_remote_origin(temp.path()).await.unwrap();

        assert_eq!(origin.as_deref(), Some("https://example.com/org/repo.git"));
    }

    #[tokio::test]
    async fn repository_without_origin_resolves_to_none() {
        let temp = TempDir::new().unwrap();
        git(&["init"], temp.path());

        let resolver = GitOriginResolver::new();
        let origin = resolver.resolve_remote_origin(temp.path()).await.unwrap();

        assert_eq!(origin, None);
    }

    #[tokio::test]
    async fn plain_directory_resolves_to_none() {
        let temp = TempDir::new().unwrap();

        let resolver = GitOriginResolver::new();
        let origin = resolver.resolve_remote_origin(temp.path()).await.unwrap();

        assert_eq!(origin, None);
    }

    #[tokio::test]
    async fn missing_directory_is_an_error() {
        let resolver = GitOriginResolver::new();
        let result = resolver
            .resolve_remote_origin(&PathBuf::from("/nonexistent/template"))
            .await;

        assert!(matches!(result, Err(CatalogError::Origin { .. })));
    }
}
