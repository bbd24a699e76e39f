/// One-way projection from gallery state to what the widgets show.
///
/// Nothing here is read back into state; the views render a `GalleryView`
/// and turn user input into `Target`s for `Gallery::click`/`handle_key`.
use crate::state::data::ModalControl;
use crate::state::{FocusTarget, Gallery, ItemId};

/// Opacity of a disabled lightbox nav button
pub const DISABLED_OPACITY: f32 = 0.5;

#[derive(Debug, Clone, PartialEq)]
pub struct FilterView {
    pub index: usize,
    pub label: String,
    pub active: bool,
    pub focused: bool,
}

/// A visible gallery tile
#[derive(Debug, Clone, PartialEq)]
pub struct ItemView {
    pub id: ItemId,
    pub label: String,
    pub category: String,
    /// `None` renders a placeholder tile
    pub source: Option<String>,
    pub focused: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlView {
    pub control: ModalControl,
    pub present: bool,
    pub disabled: bool,
    pub opacity: f32,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub aria_hidden: bool,
    /// "Image 2 of 5"
    pub caption: String,
    pub source: Option<String>,
    pub alt: String,
    pub close: ControlView,
    pub prev: ControlView,
    pub next: ControlView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    pub filters: Vec<FilterView>,
    pub items: Vec<ItemView>,
    /// `None` when the document has no lightbox surface
    pub modal: Option<ModalView>,
    pub scroll_locked: bool,
}

pub fn project(gallery: &Gallery) -> GalleryView {
    let doc = gallery.document();
    let page = gallery.page();

    let filters = doc
        .filters()
        .iter()
        .enumerate()
        .map(|(index, control)| FilterView {
            index,
            label: control.label().to_string(),
            active: control.is_active(),
            focused: page.is_focused(FocusTarget::FilterControl(index)),
        })
        .collect();

    let items = doc
        .items()
        .iter()
        .filter(|item| item.is_visible())
        .map(|item| ItemView {
            id: item.id(),
            label: item.label().to_string(),
            category: item.category().to_string(),
            source: item.image().map(|image| image.src.clone()),
            focused: page.is_focused(FocusTarget::Item(item.id())),
        })
        .collect();

    GalleryView {
        filters,
        items,
        modal: project_modal(gallery),
        scroll_locked: page.is_scroll_locked(),
    }
}

fn project_modal(gallery: &Gallery) -> Option<ModalView> {
    let lightbox = gallery.lightbox();
    let surface = lightbox.surface()?;
    let page = gallery.page();
    let session = lightbox.session();

    let control = |control: ModalControl| {
        let disabled = session.is_some_and(|s| s.is_disabled(control));
        ControlView {
            control,
            present: surface.has(control),
            disabled,
            opacity: if disabled { DISABLED_OPACITY } else { 1.0 },
            focused: page.is_focused(FocusTarget::Modal(control)),
        }
    };

    let (caption, source, alt) = match session {
        Some(session) => {
            let display = session.display();
            (
                format!(
                    "Image {} of {}",
                    session.position(gallery.filter().state()),
                    gallery.filter().state().len()
                ),
                display.and_then(|d| d.source.clone()),
                display.map(|d| d.alt.clone()).unwrap_or_default(),
            )
        }
        None => (String::new(), None, String::new()),
    };

    Some(ModalView {
        aria_hidden: session.is_none(),
        caption,
        source,
        alt,
        close: control(ModalControl::Close),
        prev: control(ModalControl::Prev),
        next: control(ModalControl::Next),
    })
}
