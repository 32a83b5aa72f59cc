//! Error types for catalog operations.
//!
//! This module defines [`CatalogError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `CatalogError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `CatalogError::Other`) for unexpected errors
//! - A cancelled enumeration is an error, never an empty success

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Template enumeration was cancelled before the scan completed.
    ///
    /// Callers must treat this as "no authoritative result", never as
    /// zero matches.
    #[error("Template enumeration cancelled")]
    Cancelled,

    /// Scanning the installed-templates root failed.
    #[error("Failed to scan {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// Version-control origin lookup failed for a candidate directory.
    ///
    /// Recovered during a catalog build: the candidate is kept with no
    /// remote URL.
    #[error("Failed to resolve remote origin for {path}: {message}")]
    Origin { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
