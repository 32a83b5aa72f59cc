//! Template record definitions.
//!
//! A template is one installed project scaffold: a directory under the
//! catalog root, optionally linked to the version-control origin it was
//! cloned from.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One discoverable project template.
///
/// Cached templates are never handed out by reference; queries return clones,
/// so mutating a returned template cannot affect the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Display name, derived from the leaf directory name.
    pub name: String,

    /// Path to the template's directory. Immutable once set.
    pub local_folder_path: PathBuf,

    /// Version-control origin URL, when one could be resolved.
    pub remote_url: Option<String>,

    /// Human-readable description.
    #[serde(default)]
    pub description: String,

    /// Search keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Template {
    /// Create a template from its on-disk directory.
    pub fn from_dir(path: impl Into<PathBuf>) -> Self {
        let local_folder_path = path.into();
        Self {
            name: leaf_name(&local_folder_path),
            local_folder_path,
            ..Self::default()
        }
    }
}

fn leaf_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
