/// Keyboard focus order and the lightbox focus trap.
///
/// Native order outside the lightbox is: filter controls, then visible
/// items, in document order. While the lightbox is open the page behind it
/// is covered, so native order is the lightbox's enabled controls only.
use super::data::{Document, FocusTarget};
use super::filter::FilterState;

/// Result of routing a Tab press through the focus trap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapOutcome {
    /// Focus wrapped to the other end of the trapped set
    Wrapped(FocusTarget),
    /// Not at an edge; the press continues to native handling
    PassThrough,
}

/// Tab order of the page while no lightbox is open
pub fn page_order(doc: &Document, filter: &FilterState) -> Vec<FocusTarget> {
    (0..doc.filters().len())
        .map(FocusTarget::FilterControl)
        .chain(filter.visible_items().iter().copied().map(FocusTarget::Item))
        .collect()
}

/// Move focus one step through `order`, wrapping at both ends.
///
/// Focus that is not part of `order` lands on the first element (or the
/// last, going backward).
pub fn advance(
    order: &[FocusTarget],
    current: Option<FocusTarget>,
    backward: bool,
) -> Option<FocusTarget> {
    if order.is_empty() {
        return current;
    }

    let position = current.and_then(|target| order.iter().position(|t| *t == target));
    let next = match (position, backward) {
        (None, false) => 0,
        (None, true) => order.len() - 1,
        (Some(i), false) => (i + 1) % order.len(),
        (Some(0), true) => order.len() - 1,
        (Some(i), true) => i - 1,
    };

    Some(order[next])
}

/// Wrap Tab from the last trapped element to the first, and Shift+Tab from
/// the first to the last. Everything else passes through.
pub fn trap_tab(trapped: &[FocusTarget], current: Option<FocusTarget>, backward: bool) -> TrapOutcome {
    let (Some(first), Some(last)) = (trapped.first(), trapped.last()) else {
        return TrapOutcome::PassThrough;
    };

    match current {
        Some(target) if backward && target == *first => TrapOutcome::Wrapped(*last),
        Some(target) if !backward && target == *last => TrapOutcome::Wrapped(*first),
        _ => TrapOutcome::PassThrough,
    }
}
