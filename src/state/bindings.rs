/// Handler registration for discovered entities.
///
/// `Bindings::register` runs once per document and records which named
/// handler answers which input on which entity. Entities that were not
/// discovered, or components that stayed inert, simply get no binding.
use std::collections::HashMap;

use super::data::{Document, FocusTarget, ItemId, ModalControl};
use super::keyboard::KeyInput;

/// Something that can receive input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    FilterControl(usize),
    Item(ItemId),
    Modal(ModalControl),
    /// The dimmed area around the lightbox content
    Backdrop,
    /// Document-wide listener
    Document,
}

impl Target {
    /// The focusable entity behind this target, if any
    pub fn focus_target(self) -> Option<FocusTarget> {
        match self {
            Target::FilterControl(index) => Some(FocusTarget::FilterControl(index)),
            Target::Item(id) => Some(FocusTarget::Item(id)),
            Target::Modal(control) => Some(FocusTarget::Modal(control)),
            Target::Backdrop | Target::Document => None,
        }
    }
}

impl From<FocusTarget> for Target {
    fn from(target: FocusTarget) -> Self {
        match target {
            FocusTarget::FilterControl(index) => Target::FilterControl(index),
            FocusTarget::Item(id) => Target::Item(id),
            FocusTarget::Modal(control) => Target::Modal(control),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Pointer activation (or a button's native keyboard activation)
    Click,
    KeyDown(KeyInput),
}

impl Input {
    pub fn kind(&self) -> EventKind {
        match self {
            Input::Click => EventKind::Click,
            Input::KeyDown(_) => EventKind::KeyDown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
}

/// Named handlers the gallery knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    ApplyFilter,
    OpenItem,
    /// Enter/Space on a focused item
    ItemKeys,
    CloseLightbox,
    ShowPrev,
    ShowNext,
    /// Escape, arrows and the Tab trap while the lightbox is open
    LightboxKeys,
}

#[derive(Debug, Clone, Default)]
pub struct Bindings {
    table: HashMap<(Target, EventKind), Handler>,
}

impl Bindings {
    /// Bind handlers to the entities present in `doc`
    pub fn register(doc: &Document, filter_wired: bool, lightbox_wired: bool) -> Self {
        let mut bindings = Self::default();

        if filter_wired {
            for index in 0..doc.filters().len() {
                bindings.bind(Target::FilterControl(index), EventKind::Click, Handler::ApplyFilter);
            }
        }

        if lightbox_wired {
            for item in doc.items() {
                bindings.bind(Target::Item(item.id()), EventKind::Click, Handler::OpenItem);
                bindings.bind(Target::Item(item.id()), EventKind::KeyDown, Handler::ItemKeys);
            }

            if let Some(surface) = doc.modal() {
                let controls = [
                    (ModalControl::Close, Handler::CloseLightbox),
                    (ModalControl::Prev, Handler::ShowPrev),
                    (ModalControl::Next, Handler::ShowNext),
                ];
                for (control, handler) in controls {
                    if surface.has(control) {
                        bindings.bind(Target::Modal(control), EventKind::Click, handler);
                    }
                }
            }

            bindings.bind(Target::Backdrop, EventKind::Click, Handler::CloseLightbox);
            bindings.bind(Target::Document, EventKind::KeyDown, Handler::LightboxKeys);
        }

        bindings
    }

    fn bind(&mut self, target: Target, event: EventKind, handler: Handler) {
        self.table.insert((target, event), handler);
    }

    pub fn lookup(&self, target: Target, event: EventKind) -> Option<Handler> {
        self.table.get(&(target, event)).copied()
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{FilterControl, GalleryItem, ModalSurface};

    fn document(modal: Option<ModalSurface>) -> Document {
        Document::new(
            vec![GalleryItem::new("a", None), GalleryItem::new("b", None)],
            vec![FilterControl::new("all", "All"), FilterControl::new("a", "A")],
            modal,
        )
    }

    #[test]
    fn test_registers_every_entity() {
        let doc = document(Some(ModalSurface::full()));
        let bindings = Bindings::register(&doc, true, true);

        // 2 filters + 2 items * 2 events + 3 controls + backdrop + document
        assert_eq!(bindings.len(), 11);
        assert_eq!(
            bindings.lookup(Target::FilterControl(1), EventKind::Click),
            Some(Handler::ApplyFilter)
        );
        assert_eq!(
            bindings.lookup(Target::Item(ItemId(1)), EventKind::KeyDown),
            Some(Handler::ItemKeys)
        );
        assert_eq!(
            bindings.lookup(Target::Modal(ModalControl::Next), EventKind::Click),
            Some(Handler::ShowNext)
        );
        assert_eq!(bindings.lookup(Target::Backdrop, EventKind::KeyDown), None);
    }

    #[test]
    fn test_missing_controls_get_no_binding() {
        let doc = document(Some(ModalSurface {
            close: true,
            prev: false,
            next: false,
        }));
        let bindings = Bindings::register(&doc, true, true);

        assert_eq!(bindings.lookup(Target::Modal(ModalControl::Prev), EventKind::Click), None);
        assert_eq!(
            bindings.lookup(Target::Modal(ModalControl::Close), EventKind::Click),
            Some(Handler::CloseLightbox)
        );
    }

    #[test]
    fn test_inert_components_register_nothing() {
        let doc = document(None);
        assert!(Bindings::register(&doc, false, false).is_empty());
    }

    #[test]
    fn test_focus_target_round_trip() {
        let target = FocusTarget::Item(ItemId(3));
        assert_eq!(Target::from(target).focus_target(), Some(target));
        assert_eq!(Target::Backdrop.focus_target(), None);
    }
}
