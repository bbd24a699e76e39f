/// User interface module
///
/// - Pure projection of gallery state (presentation.rs)
/// - Filter bar and thumbnail grid (gallery.rs)
/// - Lightbox overlay (lightbox.rs)

pub mod gallery;
pub mod lightbox;
pub mod presentation;

use iced::widget::{column, text};
use iced::Element;

use crate::state::Gallery;
use crate::Message;

/// Build the whole window from the current gallery state
pub fn view<'a>(state: &Gallery, thumbnail_size: f32, status: &str) -> Element<'a, Message> {
    let projection = presentation::project(state);

    let page = column![
        gallery::header(projection.items.len()),
        gallery::filter_bar(projection.filters),
        gallery::grid(projection.items, thumbnail_size, projection.scroll_locked),
        text(status.to_string()).size(14),
    ]
    .spacing(16)
    .padding(24);

    match projection.modal {
        Some(modal) => lightbox::overlay(page.into(), modal),
        None => page.into(),
    }
}
