/// Shared data structures for the gallery state
///
/// These structs represent the discovered gallery document that flows
/// between the discovery layer, the filter/lightbox state and the UI layer.
/// The item sequence is fixed once a `Document` is built; only the derived
/// `visible`/`active` flags change afterwards, and only the filter engine
/// may change them.

/// Filter key that matches every item regardless of category
pub const ALL_FILTER: &str = "all";

/// Position of an item in the full (unfiltered) document sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub usize);

/// Image backing a gallery item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Resolved path or URL of the image
    pub src: String,
    /// Alternative text shown to assistive technology
    pub alt: String,
}

/// A single displayable entry in the gallery
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    id: ItemId,
    category: String,
    image: Option<ImageRef>,
    label: String,
    visible: bool,
}

impl GalleryItem {
    /// Create an item. Its id and default label are assigned by `Document::new`.
    pub fn new(category: impl Into<String>, image: Option<ImageRef>) -> Self {
        Self {
            id: ItemId(0),
            category: category.into(),
            image,
            label: String::new(),
            visible: true,
        }
    }

    /// Override the accessible label ("View image N" otherwise)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true when the flag actually changed
    pub(crate) fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}

/// A control that selects one filter key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
    key: String,
    label: String,
    active: bool,
}

impl FilterControl {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            active: false,
        }
    }

    /// Mark the control as active in the authored document.
    /// The filter engine normalizes this when it is discovered.
    pub fn authored_active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true when the flag actually changed
    pub(crate) fn set_active(&mut self, active: bool) -> bool {
        let changed = self.active != active;
        self.active = active;
        changed
    }
}

/// Actionable controls inside the lightbox, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalControl {
    Close,
    Prev,
    Next,
}

impl ModalControl {
    pub const ALL: [ModalControl; 3] = [ModalControl::Close, ModalControl::Prev, ModalControl::Next];
}

/// The lightbox surface and which of its controls exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalSurface {
    pub close: bool,
    pub prev: bool,
    pub next: bool,
}

impl ModalSurface {
    /// A surface exposing every control
    pub fn full() -> Self {
        Self {
            close: true,
            prev: true,
            next: true,
        }
    }

    pub fn has(&self, control: ModalControl) -> bool {
        match control {
            ModalControl::Close => self.close,
            ModalControl::Prev => self.prev,
            ModalControl::Next => self.next,
        }
    }
}

impl Default for ModalSurface {
    fn default() -> Self {
        Self::full()
    }
}

/// Anything that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    FilterControl(usize),
    Item(ItemId),
    Modal(ModalControl),
}

/// The discovered gallery "markup": items, filter controls and the lightbox surface
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    items: Vec<GalleryItem>,
    filters: Vec<FilterControl>,
    modal: Option<ModalSurface>,
}

impl Document {
    /// Build a document, assigning item ids in sequence order
    pub fn new(
        items: Vec<GalleryItem>,
        filters: Vec<FilterControl>,
        modal: Option<ModalSurface>,
    ) -> Self {
        let items = items
            .into_iter()
            .enumerate()
            .map(|(index, mut item)| {
                item.id = ItemId(index);
                if item.label.is_empty() {
                    item.label = format!("View image {}", index + 1);
                }
                item
            })
            .collect();

        Self {
            items,
            filters,
            modal,
        }
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn item(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.get(id.0)
    }

    pub fn filters(&self) -> &[FilterControl] {
        &self.filters
    }

    pub fn modal(&self) -> Option<&ModalSurface> {
        self.modal.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn items_mut(&mut self) -> &mut [GalleryItem] {
        &mut self.items
    }

    pub(crate) fn filters_mut(&mut self) -> &mut [FilterControl] {
        &mut self.filters
    }
}
