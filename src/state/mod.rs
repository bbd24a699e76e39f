/// State management module
///
/// This module holds all gallery state, independent of any rendering:
/// - The discovered document and its entities (data.rs)
/// - Category filtering and the visible subset (filter.rs)
/// - The lightbox session state machine (lightbox.rs)
/// - Page-level scroll lock and focus target (page.rs)
/// - Tab order and the focus trap (focus.rs)
/// - Keyboard vocabulary (keyboard.rs)
/// - Handler registration and dispatch (bindings.rs, gallery.rs)

pub mod bindings;
pub mod data;
pub mod filter;
pub mod focus;
pub mod gallery;
pub mod keyboard;
pub mod lightbox;
pub mod page;

pub use bindings::Target;
pub use data::{Document, FocusTarget, ItemId, ModalControl};
pub use gallery::{Gallery, GalleryOptions};
pub use keyboard::KeyInput;
