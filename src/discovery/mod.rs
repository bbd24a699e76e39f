/// Gallery discovery module
///
/// This module builds the gallery `Document` once at startup:
/// - Reading a JSON manifest that lists filters, items and the lightbox (manifest.rs)
/// - Scanning a folder where each subdirectory is a category (scan.rs)
///
/// A directory that contains a `gallery.json` is read through its manifest.

pub mod manifest;
pub mod scan;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::state::Document;

/// File name looked up inside a gallery directory
pub const MANIFEST_FILE: &str = "gallery.json";

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("gallery source not found: {0}")]
    NotFound(PathBuf),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid gallery manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Discover a gallery from a manifest file or a directory
pub fn discover(path: &Path) -> Result<Document, DiscoveryError> {
    if !path.exists() {
        return Err(DiscoveryError::NotFound(path.to_path_buf()));
    }

    let document = if path.is_dir() {
        let manifest_path = path.join(MANIFEST_FILE);
        if manifest_path.is_file() {
            manifest::load_manifest(&manifest_path)?
        } else {
            scan::scan_directory(path)?
        }
    } else {
        manifest::load_manifest(path)?
    };

    info!(
        source = %path.display(),
        items = document.items().len(),
        filters = document.filters().len(),
        "gallery discovered"
    );

    Ok(document)
}

/// Discover a gallery off the UI thread
pub async fn load(path: PathBuf) -> Result<Document, String> {
    // Spawn blocking because discovery walks the filesystem
    tokio::task::spawn_blocking(move || discover(&path).map_err(|e| e.to_string()))
        .await
        .map_err(|e| format!("Task join error: {}", e))?
}
