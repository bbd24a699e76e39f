/// Filter engine: classifies gallery items by category and toggles visibility.
///
/// The engine exclusively owns `FilterState`. Other components read the
/// current visible subset through `FilterEngine::state()`.
use tracing::debug;

use super::data::{Document, ItemId, ALL_FILTER};

/// The currently selected filter and the items it lets through
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_filter: String,
    visible_items: Vec<ItemId>,
}

impl FilterState {
    /// Unfiltered state over `doc`: "all" is active and every item is visible
    fn unfiltered(doc: &Document) -> Self {
        Self {
            active_filter: ALL_FILTER.to_string(),
            visible_items: doc.items().iter().map(|item| item.id()).collect(),
        }
    }

    pub fn active_filter(&self) -> &str {
        &self.active_filter
    }

    /// Visible items in document order
    pub fn visible_items(&self) -> &[ItemId] {
        &self.visible_items
    }

    /// Position of `item` within the visible subset
    pub fn position_of(&self, item: ItemId) -> Option<usize> {
        self.visible_items.iter().position(|id| *id == item)
    }

    pub fn len(&self) -> usize {
        self.visible_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible_items.is_empty()
    }
}

/// Number of presentation flags flipped by one `apply_filter` call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterChange {
    pub items: usize,
    pub controls: usize,
}

impl FilterChange {
    /// True when nothing observable changed
    pub fn is_empty(&self) -> bool {
        self.items == 0 && self.controls == 0
    }
}

/// Whether a category passes `filter`
pub fn matches(filter: &str, category: &str) -> bool {
    filter == ALL_FILTER || category == filter
}

#[derive(Debug, Clone)]
pub struct FilterEngine {
    /// False when the document had no filter controls or no items
    wired: bool,
    state: FilterState,
}

impl FilterEngine {
    /// Discover filter controls and items in `doc` and apply the initial filter.
    ///
    /// The initial control is the one authored as active, then the "all"
    /// control, then the first control.
    pub fn discover(doc: &mut Document) -> Self {
        let mut engine = Self {
            wired: !doc.filters().is_empty() && !doc.is_empty(),
            state: FilterState::unfiltered(doc),
        };

        if !engine.wired {
            debug!(
                filters = doc.filters().len(),
                items = doc.items().len(),
                "filter engine inert: missing filter controls or gallery items"
            );
            return engine;
        }

        let filters = doc.filters();
        let initial = filters
            .iter()
            .position(|control| control.is_active())
            .or_else(|| filters.iter().position(|control| control.key() == ALL_FILTER))
            .unwrap_or(0);

        engine.activate_control(doc, initial);
        engine
    }

    pub fn is_wired(&self) -> bool {
        self.wired
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Apply the filter carried by the control at `index`
    pub fn activate_control(&mut self, doc: &mut Document, index: usize) -> FilterChange {
        let Some(key) = doc.filters().get(index).map(|control| control.key().to_string()) else {
            return FilterChange::default();
        };
        self.apply_filter(doc, &key)
    }

    /// Select `key`, recompute the visible subset and reflect it on the
    /// document. A key no control carries is ignored.
    pub fn apply_filter(&mut self, doc: &mut Document, key: &str) -> FilterChange {
        let mut change = FilterChange::default();

        if !self.wired {
            return change;
        }

        let Some(selected) = doc.filters().iter().position(|control| control.key() == key) else {
            debug!(key, "no filter control carries this key");
            return change;
        };

        for (index, control) in doc.filters_mut().iter_mut().enumerate() {
            if control.set_active(index == selected) {
                change.controls += 1;
            }
        }

        let mut visible_items = Vec::new();
        for item in doc.items_mut() {
            let shown = matches(key, item.category());
            if item.set_visible(shown) {
                change.items += 1;
            }
            if shown {
                visible_items.push(item.id());
            }
        }

        self.state = FilterState {
            active_filter: key.to_string(),
            visible_items,
        };

        debug!(
            filter = key,
            visible = self.state.len(),
            changed_items = change.items,
            "filter applied"
        );

        change
    }
}
