/// Directory scan: every immediate subdirectory is a category
///
/// ```text
/// gallery/
///   cafe/latte.jpg
///   cafe/pastry.png
///   salon/chair.webp
/// ```
///
/// Images directly inside the root land in the "uncategorized" category.
use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::DiscoveryError;
use crate::state::data::{Document, FilterControl, GalleryItem, ImageRef, ModalSurface, ALL_FILTER};

/// Extensions the image widget can display
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

const UNCATEGORIZED: &str = "uncategorized";

/// Walk `root` two levels deep and build a document from the images found
pub fn scan_directory(root: &Path) -> Result<Document, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::NotFound(root.to_path_buf()));
    }

    let mut items = Vec::new();
    let mut categories = BTreeSet::new();

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(2)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(%err, "skipping unreadable gallery entry");
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !is_image(path) {
            continue;
        }

        let category = if entry.depth() == 1 {
            UNCATEGORIZED.to_string()
        } else {
            path.parent()
                .and_then(Path::file_name)
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| UNCATEGORIZED.to_string())
        };

        categories.insert(category.clone());
        items.push(GalleryItem::new(
            category,
            Some(ImageRef {
                src: path.to_string_lossy().to_string(),
                alt: alt_from_file_name(path),
            }),
        ));
    }

    debug!(items = items.len(), categories = categories.len(), "directory scanned");

    let filters = std::iter::once(FilterControl::new(ALL_FILTER, "All"))
        .chain(
            categories
                .into_iter()
                // "all" already has its control
                .filter(|category| category != ALL_FILTER)
                .map(|category| FilterControl::new(category.clone(), title_case(&category))),
        )
        .collect();

    Ok(Document::new(items, filters, Some(ModalSurface::full())))
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// "latte-art_01.jpg" -> "latte art 01"
fn alt_from_file_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_default()
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
