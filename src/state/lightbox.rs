/// Lightbox controller: the modal viewer over the currently visible items.
///
/// The controller owns the session (open/closed, current index, anchor) and
/// reads `FilterState` to bound navigation. A filter change while open does
/// not touch the session; a stale index is clamped back by the next prev.
use tracing::debug;

use super::data::{Document, FocusTarget, GalleryItem, ItemId, ModalControl, ModalSurface};
use super::filter::FilterState;
use super::focus::{trap_tab, TrapOutcome};
use super::keyboard::{Key, KeyInput};
use super::page::Page;

/// What the lightbox is currently showing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Display {
    pub item: ItemId,
    /// Image source, `None` for placeholder items
    pub source: Option<String>,
    /// Alt text or accessible label
    pub alt: String,
}

impl Display {
    fn of(item: &GalleryItem, index: usize) -> Self {
        match item.image() {
            Some(image) => Self {
                item: item.id(),
                source: Some(image.src.clone()),
                alt: image.alt.clone(),
            },
            None => Self {
                item: item.id(),
                source: None,
                alt: format!("Image {}", index + 1),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxSession {
    current_index: usize,
    anchor: Option<FocusTarget>,
    display: Option<Display>,
    prev_disabled: bool,
    next_disabled: bool,
}

impl LightboxSession {
    /// Index into the visible items as of the last open/navigate
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn anchor(&self) -> Option<FocusTarget> {
        self.anchor
    }

    pub fn display(&self) -> Option<&Display> {
        self.display.as_ref()
    }

    pub fn is_prev_disabled(&self) -> bool {
        self.prev_disabled
    }

    pub fn is_next_disabled(&self) -> bool {
        self.next_disabled
    }

    pub fn is_disabled(&self, control: ModalControl) -> bool {
        match control {
            ModalControl::Close => false,
            ModalControl::Prev => self.prev_disabled,
            ModalControl::Next => self.next_disabled,
        }
    }

    /// 1-based position for captions, never past the visible count
    pub fn position(&self, filter: &FilterState) -> usize {
        self.current_index.min(filter.len().saturating_sub(1)) + 1
    }

    /// Show `visible[current_index]` and recompute the nav buttons.
    /// Leaves everything as is when the index points past the visible set.
    fn refresh(&mut self, doc: &Document, filter: &FilterState) {
        let Some(item) = filter
            .visible_items()
            .get(self.current_index)
            .and_then(|id| doc.item(*id))
        else {
            return;
        };

        self.display = Some(Display::of(item, self.current_index));
        self.prev_disabled = self.current_index == 0;
        self.next_disabled = self.current_index == filter.len().saturating_sub(1);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(LightboxSession),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Prev,
    Next,
}

#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    /// `None` when the document has no lightbox surface or no items
    surface: Option<ModalSurface>,
    state: LightboxState,
}

impl LightboxController {
    pub fn discover(doc: &Document) -> Self {
        let surface = if doc.is_empty() {
            None
        } else {
            doc.modal().copied()
        };

        if surface.is_none() {
            debug!("lightbox inert: missing modal surface or gallery items");
        }

        Self {
            surface,
            state: LightboxState::Closed,
        }
    }

    pub fn is_wired(&self) -> bool {
        self.surface.is_some()
    }

    pub fn surface(&self) -> Option<&ModalSurface> {
        self.surface.as_ref()
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    pub fn session(&self) -> Option<&LightboxSession> {
        match &self.state {
            LightboxState::Open(session) => Some(session),
            LightboxState::Closed => None,
        }
    }

    /// Open on `item`, anchored at its position in the visible subset.
    /// No-op when already open or when the item is filtered out.
    pub fn open(
        &mut self,
        item: ItemId,
        doc: &Document,
        filter: &FilterState,
        page: &mut Page,
    ) -> bool {
        let Some(surface) = self.surface else {
            return false;
        };
        if self.is_open() {
            return false;
        }
        let Some(index) = filter.position_of(item) else {
            debug!(item = item.0, "item not in the visible set, not opening");
            return false;
        };

        let mut session = LightboxSession {
            current_index: index,
            anchor: page.focus(),
            display: None,
            prev_disabled: false,
            next_disabled: false,
        };
        session.refresh(doc, filter);
        self.state = LightboxState::Open(session);

        page.lock_scroll();
        if surface.close {
            page.set_focus(Some(FocusTarget::Modal(ModalControl::Close)));
        }

        debug!(item = item.0, index, "lightbox opened");
        true
    }

    /// Close the session, release the scroll lock and return focus to the anchor
    pub fn close(&mut self, doc: &Document, page: &mut Page) -> bool {
        let LightboxState::Open(session) = std::mem::take(&mut self.state) else {
            return false;
        };

        page.unlock_scroll();

        match session.anchor {
            Some(anchor) if anchor_present(anchor, doc) => page.set_focus(Some(anchor)),
            _ => {
                // The modal is hidden now, so its controls cannot keep focus
                if matches!(page.focus(), Some(FocusTarget::Modal(_))) {
                    page.set_focus(None);
                }
            }
        }

        debug!("lightbox closed");
        true
    }

    /// Move one step within the visible items, saturating at both ends
    pub fn navigate(
        &mut self,
        step: Step,
        doc: &Document,
        filter: &FilterState,
        page: &mut Page,
    ) -> bool {
        let LightboxState::Open(session) = &mut self.state else {
            return false;
        };
        let Some(last) = filter.len().checked_sub(1) else {
            return false;
        };

        let target = match step {
            // A stale index past the end is pulled back into range
            Step::Prev => session.current_index.min(last).saturating_sub(1),
            Step::Next if session.current_index >= last => return false,
            Step::Next => session.current_index + 1,
        };
        if target == session.current_index {
            return false;
        }

        session.current_index = target;
        session.refresh(doc, filter);

        // A control that just became disabled drops focus
        if let Some(FocusTarget::Modal(control)) = page.focus() {
            if session.is_disabled(control) {
                page.set_focus(None);
            }
        }

        debug!(index = target, "lightbox navigated");
        true
    }

    /// Activate a lightbox control. Missing or disabled controls do nothing.
    pub fn activate(
        &mut self,
        control: ModalControl,
        doc: &Document,
        filter: &FilterState,
        page: &mut Page,
    ) -> bool {
        let present = self.surface.is_some_and(|surface| surface.has(control));
        let disabled = self.session().is_some_and(|session| session.is_disabled(control));
        if !present || disabled {
            return false;
        }

        match control {
            ModalControl::Close => self.close(doc, page),
            ModalControl::Prev => self.navigate(Step::Prev, doc, filter, page),
            ModalControl::Next => self.navigate(Step::Next, doc, filter, page),
        }
    }

    /// Enabled lightbox controls in tab order. Empty while closed.
    pub fn focusable_controls(&self) -> Vec<FocusTarget> {
        let (Some(surface), Some(session)) = (self.surface, self.session()) else {
            return Vec::new();
        };

        ModalControl::ALL
            .into_iter()
            .filter(|control| surface.has(*control) && !session.is_disabled(*control))
            .map(FocusTarget::Modal)
            .collect()
    }

    /// Route Tab through the focus trap. Returns true when focus wrapped.
    pub fn trap_tab(&self, backward: bool, page: &mut Page) -> bool {
        if !self.is_open() {
            return false;
        }

        match trap_tab(&self.focusable_controls(), page.focus(), backward) {
            TrapOutcome::Wrapped(target) => {
                page.set_focus(Some(target));
                true
            }
            TrapOutcome::PassThrough => false,
        }
    }

    /// Document-level keys while open: Escape, arrows and the Tab trap.
    /// Returns true when the key was consumed.
    pub fn handle_key(
        &mut self,
        input: KeyInput,
        doc: &Document,
        filter: &FilterState,
        page: &mut Page,
    ) -> bool {
        if !self.is_open() {
            return false;
        }

        match input.key {
            Key::Escape => self.close(doc, page),
            Key::ArrowLeft => {
                self.navigate(Step::Prev, doc, filter, page);
                true
            }
            Key::ArrowRight => {
                self.navigate(Step::Next, doc, filter, page);
                true
            }
            Key::Tab => self.trap_tab(input.shift, page),
            Key::Enter | Key::Space => false,
        }
    }
}

/// Whether focus can still return to `anchor`
fn anchor_present(anchor: FocusTarget, doc: &Document) -> bool {
    match anchor {
        FocusTarget::FilterControl(index) => index < doc.filters().len(),
        FocusTarget::Item(id) => doc.item(id).is_some_and(GalleryItem::is_visible),
        FocusTarget::Modal(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{FilterControl, ImageRef};
    use crate::state::filter::FilterEngine;

    const CLOSE: FocusTarget = FocusTarget::Modal(ModalControl::Close);
    const PREV: FocusTarget = FocusTarget::Modal(ModalControl::Prev);
    const NEXT: FocusTarget = FocusTarget::Modal(ModalControl::Next);

    struct Fixture {
        doc: Document,
        filter: FilterEngine,
        lightbox: LightboxController,
        page: Page,
    }

    fn image(name: &str) -> Option<ImageRef> {
        Some(ImageRef {
            src: format!("{name}.jpg"),
            alt: format!("{name} photo"),
        })
    }

    fn fixture(modal: Option<ModalSurface>) -> Fixture {
        let mut doc = Document::new(
            vec![
                GalleryItem::new("a", image("zero")),
                GalleryItem::new("b", image("one")),
                GalleryItem::new("a", None),
                GalleryItem::new("a", image("three")),
            ],
            vec![
                FilterControl::new("all", "All"),
                FilterControl::new("a", "A"),
                FilterControl::new("b", "B"),
            ],
            modal,
        );
        let filter = FilterEngine::discover(&mut doc);
        let lightbox = LightboxController::discover(&doc);

        Fixture {
            doc,
            filter,
            lightbox,
            page: Page::new(),
        }
    }

    impl Fixture {
        fn open(&mut self, item: usize) -> bool {
            self.page.set_focus(Some(FocusTarget::Item(ItemId(item))));
            self.lightbox
                .open(ItemId(item), &self.doc, self.filter.state(), &mut self.page)
        }

        fn step(&mut self, step: Step) -> bool {
            self.lightbox
                .navigate(step, &self.doc, self.filter.state(), &mut self.page)
        }

        fn index(&self) -> usize {
            self.lightbox.session().map(LightboxSession::current_index).unwrap()
        }
    }

    #[test]
    fn test_open_anchors_at_visible_position() {
        for position in 0..4 {
            let mut f = fixture(Some(ModalSurface::full()));
            assert!(f.open(position));
            assert_eq!(f.index(), position);
        }

        let mut f = fixture(Some(ModalSurface::full()));
        f.filter.apply_filter(&mut f.doc, "a");
        assert!(f.open(3));
        assert_eq!(f.index(), 2);
    }

    #[test]
    fn test_open_sets_page_state() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(1);

        let session = f.lightbox.session().unwrap();
        assert_eq!(session.anchor(), Some(FocusTarget::Item(ItemId(1))));
        assert!(f.page.is_scroll_locked());
        assert_eq!(f.page.focus(), Some(CLOSE));
        assert_eq!(
            session.display(),
            Some(&Display {
                item: ItemId(1),
                source: Some("one.jpg".to_string()),
                alt: "one photo".to_string(),
            })
        );
    }

    #[test]
    fn test_open_filtered_out_item_is_suppressed() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.filter.apply_filter(&mut f.doc, "b");

        assert!(!f.open(0));
        assert!(!f.lightbox.is_open());
        assert!(!f.page.is_scroll_locked());
    }

    #[test]
    fn test_open_twice_keeps_first_session() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(2);
        assert!(!f.open(0));
        assert_eq!(f.index(), 2);
    }

    #[test]
    fn test_navigation_clamps_at_both_ends() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(0);
        assert!(!f.step(Step::Prev));
        assert_eq!(f.index(), 0);

        f.lightbox.close(&f.doc, &mut f.page);
        f.open(3);
        assert!(!f.step(Step::Next));
        assert_eq!(f.index(), 3);
    }

    #[test]
    fn test_nav_buttons_track_index() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(0);
        let session = f.lightbox.session().unwrap();
        assert!(session.is_prev_disabled());
        assert!(!session.is_next_disabled());

        f.step(Step::Next);
        let session = f.lightbox.session().unwrap();
        assert!(!session.is_prev_disabled());
        assert!(!session.is_next_disabled());

        f.step(Step::Next);
        f.step(Step::Next);
        let session = f.lightbox.session().unwrap();
        assert!(session.is_next_disabled());
    }

    #[test]
    fn test_placeholder_sets_label_only() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(2);

        let display = f.lightbox.session().and_then(LightboxSession::display).unwrap();
        assert_eq!(display.source, None);
        assert_eq!(display.alt, "Image 3");
    }

    #[test]
    fn test_close_restores_scroll_and_focus() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(1);
        f.step(Step::Next);

        assert!(f.lightbox.close(&f.doc, &mut f.page));
        assert!(!f.lightbox.is_open());
        assert!(!f.page.is_scroll_locked());
        assert_eq!(f.page.focus(), Some(FocusTarget::Item(ItemId(1))));
        assert!(!f.lightbox.close(&f.doc, &mut f.page));
    }

    #[test]
    fn test_close_with_hidden_anchor_clears_modal_focus() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(1);
        f.filter.apply_filter(&mut f.doc, "a");

        f.lightbox.close(&f.doc, &mut f.page);
        assert_eq!(f.page.focus(), None);
        assert!(!f.page.is_scroll_locked());
    }

    #[test]
    fn test_filter_change_while_open_is_not_renormalized() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(3);
        f.filter.apply_filter(&mut f.doc, "b");

        assert_eq!(f.index(), 3);
        assert_eq!(f.lightbox.session().unwrap().display().unwrap().item, ItemId(3));

        // already past the end, so next stays put
        assert!(!f.step(Step::Next));
        assert_eq!(f.index(), 3);
        assert_eq!(f.lightbox.session().unwrap().display().unwrap().item, ItemId(3));

        // prev pulls the index back into the new bounds
        assert!(f.step(Step::Prev));
        assert_eq!(f.index(), 0);
        assert_eq!(f.lightbox.session().unwrap().display().unwrap().item, ItemId(1));
    }

    #[test]
    fn test_disabled_controls_do_not_activate() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(0);

        let handled = f.lightbox.activate(
            ModalControl::Prev,
            &f.doc,
            f.filter.state(),
            &mut f.page,
        );
        assert!(!handled);
        assert_eq!(f.lightbox.focusable_controls(), vec![CLOSE, NEXT]);
    }

    #[test]
    fn test_focus_drops_when_control_becomes_disabled() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(2);
        f.page.set_focus(Some(NEXT));

        f.lightbox
            .activate(ModalControl::Next, &f.doc, f.filter.state(), &mut f.page);

        assert_eq!(f.index(), 3);
        assert_eq!(f.page.focus(), None);
    }

    #[test]
    fn test_tab_trap_wraps() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(1);

        f.page.set_focus(Some(NEXT));
        assert!(f.lightbox.trap_tab(false, &mut f.page));
        assert_eq!(f.page.focus(), Some(CLOSE));

        assert!(f.lightbox.trap_tab(true, &mut f.page));
        assert_eq!(f.page.focus(), Some(NEXT));

        f.page.set_focus(Some(PREV));
        assert!(!f.lightbox.trap_tab(false, &mut f.page));
        assert_eq!(f.page.focus(), Some(PREV));
    }

    #[test]
    fn test_keys_while_open() {
        let mut f = fixture(Some(ModalSurface::full()));
        f.open(1);

        let (doc, state) = (&f.doc, f.filter.state());
        assert!(f.lightbox.handle_key(KeyInput::new(Key::ArrowRight), doc, state, &mut f.page));
        assert_eq!(f.lightbox.session().unwrap().current_index(), 2);
        assert!(f.lightbox.handle_key(KeyInput::new(Key::ArrowLeft), doc, state, &mut f.page));
        assert_eq!(f.lightbox.session().unwrap().current_index(), 1);
        assert!(!f.lightbox.handle_key(KeyInput::new(Key::Enter), doc, state, &mut f.page));
        assert!(f.lightbox.handle_key(KeyInput::new(Key::Escape), doc, state, &mut f.page));
        assert!(!f.lightbox.is_open());
    }

    #[test]
    fn test_keys_while_closed_pass_through() {
        let mut f = fixture(Some(ModalSurface::full()));
        let (doc, state) = (&f.doc, f.filter.state());

        for key in [Key::Escape, Key::ArrowLeft, Key::ArrowRight, Key::Tab] {
            assert!(!f.lightbox.handle_key(KeyInput::new(key), doc, state, &mut f.page));
        }
        assert_eq!(f.page, Page::new());
    }

    #[test]
    fn test_inert_without_modal_surface() {
        let mut f = fixture(None);

        assert!(!f.lightbox.is_wired());
        assert!(!f.open(0));
        assert!(!f.page.is_scroll_locked());
        assert!(!f.step(Step::Next));
        assert!(!f.lightbox.close(&f.doc, &mut f.page));
    }

    #[test]
    fn test_missing_close_control_keeps_focus() {
        let mut f = fixture(Some(ModalSurface {
            close: false,
            prev: true,
            next: true,
        }));
        f.open(1);

        assert_eq!(f.page.focus(), Some(FocusTarget::Item(ItemId(1))));
        assert_eq!(f.lightbox.focusable_controls(), vec![PREV, NEXT]);
    }
}
