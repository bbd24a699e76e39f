/// Page-level shared resources: the scroll lock and the focus target.
///
/// Focus is moved by anyone handling native keyboard or pointer input, but
/// only the lightbox controller may suspend page scrolling.
use super::data::FocusTarget;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    scroll_locked: bool,
    focus: Option<FocusTarget>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn set_focus(&mut self, target: Option<FocusTarget>) {
        self.focus = target;
    }

    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focus == Some(target)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub(in crate::state) fn lock_scroll(&mut self) {
        self.scroll_locked = true;
    }

    pub(in crate::state) fn unlock_scroll(&mut self) {
        self.scroll_locked = false;
    }
}
