/// The wired gallery: one document plus the components that act on it.
///
/// `Gallery::wire` is the registration step. Afterwards every pointer or
/// keyboard input goes through `click`/`handle_key`, which look up the bound
/// handler and run it against the current state. Nothing here touches a
/// rendering surface; the UI projects the resulting state.
use tracing::{debug, info};

use super::bindings::{Bindings, Handler, Input, Target};
use super::data::{Document, FocusTarget, ModalControl};
use super::filter::FilterEngine;
use super::focus::{advance, page_order};
use super::keyboard::{Key, KeyInput};
use super::lightbox::LightboxController;
use super::page::Page;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryOptions {
    /// Close an open lightbox whenever the filter changes, instead of
    /// leaving its index pointing into the old visible set
    pub close_on_filter_change: bool,
}

#[derive(Debug, Clone)]
pub struct Gallery {
    document: Document,
    filter: FilterEngine,
    lightbox: LightboxController,
    page: Page,
    bindings: Bindings,
    options: GalleryOptions,
}

impl Gallery {
    /// Discover components in `document` and register their handlers
    pub fn wire(mut document: Document, options: GalleryOptions) -> Self {
        let filter = FilterEngine::discover(&mut document);
        let lightbox = LightboxController::discover(&document);
        let bindings = Bindings::register(&document, filter.is_wired(), lightbox.is_wired());

        info!(
            items = document.items().len(),
            filters = document.filters().len(),
            lightbox = lightbox.is_wired(),
            bindings = bindings.len(),
            "gallery wired"
        );

        Self {
            document,
            filter,
            lightbox,
            page: Page::new(),
            bindings,
            options,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn filter(&self) -> &FilterEngine {
        &self.filter
    }

    pub fn lightbox(&self) -> &LightboxController {
        &self.lightbox
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Current native tab order
    pub fn tab_order(&self) -> Vec<FocusTarget> {
        if self.lightbox.is_open() {
            self.lightbox.focusable_controls()
        } else {
            page_order(&self.document, self.filter.state())
        }
    }

    /// Pointer activation: focus the target if it can take focus, then run its click handler
    pub fn click(&mut self, target: Target) -> bool {
        if let Some(focus) = target.focus_target() {
            if self.tab_order().contains(&focus) {
                self.page.set_focus(Some(focus));
            }
        }
        self.dispatch(target, Input::Click)
    }

    /// Route a key press: the focused element first, then the document
    /// listener, then native behavior (Tab moves focus, Enter/Space click
    /// a focused button). Returns true when something consumed the key.
    pub fn handle_key(&mut self, input: KeyInput) -> bool {
        if let Some(focus) = self.page.focus() {
            if self.dispatch(focus.into(), Input::KeyDown(input)) {
                return true;
            }
        }

        if self.dispatch(Target::Document, Input::KeyDown(input)) {
            return true;
        }

        self.native_key(input)
    }

    /// Run the handler bound to `(target, input)`, if any
    pub fn dispatch(&mut self, target: Target, input: Input) -> bool {
        let Some(handler) = self.bindings.lookup(target, input.kind()) else {
            return false;
        };

        let Self {
            document,
            filter,
            lightbox,
            page,
            options,
            ..
        } = self;

        match (handler, target, input) {
            (Handler::ApplyFilter, Target::FilterControl(index), _) => {
                let change = filter.activate_control(document, index);
                if options.close_on_filter_change && !change.is_empty() {
                    lightbox.close(document, page);
                }
                true
            }
            (Handler::OpenItem, Target::Item(id), _) => {
                lightbox.open(id, document, filter.state(), page)
            }
            (Handler::ItemKeys, Target::Item(id), Input::KeyDown(key)) if key.is_activation() => {
                lightbox.open(id, document, filter.state(), page);
                true
            }
            (Handler::CloseLightbox, Target::Backdrop, _) => lightbox.close(document, page),
            (Handler::CloseLightbox, _, _) => {
                lightbox.activate(ModalControl::Close, document, filter.state(), page)
            }
            (Handler::ShowPrev, _, _) => {
                lightbox.activate(ModalControl::Prev, document, filter.state(), page)
            }
            (Handler::ShowNext, _, _) => {
                lightbox.activate(ModalControl::Next, document, filter.state(), page)
            }
            (Handler::LightboxKeys, _, Input::KeyDown(key)) => {
                lightbox.handle_key(key, document, filter.state(), page)
            }
            _ => false,
        }
    }

    fn native_key(&mut self, input: KeyInput) -> bool {
        match input.key {
            Key::Tab => {
                let next = advance(&self.tab_order(), self.page.focus(), input.shift);
                debug!(?next, "focus moved");
                self.page.set_focus(next);
                true
            }
            Key::Enter | Key::Space => match self.page.focus() {
                Some(focus @ (FocusTarget::FilterControl(_) | FocusTarget::Modal(_))) => {
                    self.dispatch(focus.into(), Input::Click)
                }
                _ => false,
            },
            Key::Escape | Key::ArrowLeft | Key::ArrowRight => false,
        }
    }
}
