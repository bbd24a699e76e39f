/// JSON gallery manifest
///
/// ```json
/// {
///   "filters": [{ "key": "all", "label": "All", "active": true }, { "key": "cafe" }],
///   "items": [
///     { "category": "cafe", "image": { "src": "cafe/latte.jpg", "alt": "Latte art" } },
///     { "category": "venue", "label": "Venue (photo coming soon)" }
///   ],
///   "lightbox": { "close": true, "prev": true, "next": true }
/// }
/// ```
///
/// Items without `image` are placeholders. Omitting `lightbox` gives the
/// full surface; `"lightbox": null` leaves the gallery without one.
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::DiscoveryError;
use crate::state::data::{Document, FilterControl, GalleryItem, ImageRef, ModalSurface};

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    filters: Vec<ManifestFilter>,
    #[serde(default)]
    items: Vec<ManifestItem>,
    #[serde(default = "ManifestLightbox::present")]
    lightbox: Option<ManifestLightbox>,
}

#[derive(Debug, Deserialize)]
struct ManifestFilter {
    key: String,
    label: Option<String>,
    #[serde(default)]
    active: bool,
}

#[derive(Debug, Deserialize)]
struct ManifestItem {
    category: String,
    image: Option<ManifestImage>,
    label: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ManifestImage {
    src: String,
    #[serde(default)]
    alt: String,
}

#[derive(Debug, Deserialize)]
struct ManifestLightbox {
    #[serde(default = "enabled")]
    close: bool,
    #[serde(default = "enabled")]
    prev: bool,
    #[serde(default = "enabled")]
    next: bool,
}

impl ManifestLightbox {
    fn present() -> Option<Self> {
        Some(Self {
            close: true,
            prev: true,
            next: true,
        })
    }
}

fn enabled() -> bool {
    true
}

/// Read and parse a manifest file. Relative image sources resolve against its directory.
pub fn load_manifest(path: &Path) -> Result<Document, DiscoveryError> {
    let json = fs::read_to_string(path).map_err(|source| DiscoveryError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse_manifest(&json, base_dir)
}

/// Parse manifest JSON into a document
pub fn parse_manifest(json: &str, base_dir: &Path) -> Result<Document, DiscoveryError> {
    let manifest: Manifest = serde_json::from_str(json)?;

    let filters = manifest
        .filters
        .into_iter()
        .map(|filter| {
            let label = filter.label.unwrap_or_else(|| filter.key.clone());
            let control = FilterControl::new(filter.key, label);
            if filter.active {
                control.authored_active()
            } else {
                control
            }
        })
        .collect();

    let items = manifest
        .items
        .into_iter()
        .map(|item| {
            let image = item.image.map(|image| ImageRef {
                src: resolve_source(&image.src, base_dir),
                alt: image.alt,
            });
            let gallery_item = GalleryItem::new(item.category, image);
            match item.label {
                Some(label) => gallery_item.with_label(label),
                None => gallery_item,
            }
        })
        .collect();

    let modal = manifest.lightbox.map(|lightbox| ModalSurface {
        close: lightbox.close,
        prev: lightbox.prev,
        next: lightbox.next,
    });

    Ok(Document::new(items, filters, modal))
}

/// URLs and absolute paths are kept; relative paths join `base_dir`
fn resolve_source(src: &str, base_dir: &Path) -> String {
    if src.contains("://") || Path::new(src).is_absolute() {
        src.to_string()
    } else {
        base_dir.join(src).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MANIFEST: &str = r#"{
        "filters": [
            { "key": "all", "label": "All" },
            { "key": "cafe", "label": "Cafe", "active": true },
            { "key": "venue" }
        ],
        "items": [
            { "category": "cafe", "image": { "src": "cafe/latte.jpg", "alt": "Latte art" } },
            { "category": "venue", "label": "Venue (photo coming soon)" },
            { "category": "cafe", "image": { "src": "https://example.com/a.jpg" } }
        ]
    }"#;

    #[test]
    fn test_parse_full_manifest() {
        let doc = parse_manifest(MANIFEST, Path::new("/site")).unwrap();

        assert_eq!(doc.filters().len(), 3);
        assert!(doc.filters()[1].is_active());
        assert_eq!(doc.filters()[2].label(), "venue");

        let items = doc.items();
        assert_eq!(items.len(), 3);
        assert_eq!(
            items[0].image(),
            Some(&ImageRef {
                src: Path::new("/site").join("cafe/latte.jpg").to_string_lossy().to_string(),
                alt: "Latte art".to_string(),
            })
        );
        assert!(items[1].image().is_none());
        assert_eq!(items[1].label(), "Venue (photo coming soon)");
        assert_eq!(items[2].label(), "View image 3");
        assert_eq!(items[2].image().unwrap().src, "https://example.com/a.jpg");
        assert_eq!(doc.modal(), Some(&ModalSurface::full()));
    }

    #[test]
    fn test_lightbox_can_be_removed_or_partial() {
        let doc = parse_manifest(r#"{ "lightbox": null }"#, Path::new(".")).unwrap();
        assert_eq!(doc.modal(), None);

        let doc = parse_manifest(r#"{ "lightbox": { "prev": false } }"#, Path::new(".")).unwrap();
        assert_eq!(
            doc.modal(),
            Some(&ModalSurface {
                close: true,
                prev: false,
                next: true,
            })
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = parse_manifest("{ \"items\": [ { } ] }", Path::new("."));
        assert!(matches!(result, Err(DiscoveryError::Manifest(_))));
    }
}
