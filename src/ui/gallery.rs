/// Gallery page: header, filter bar and the thumbnail grid
use iced::widget::{
    button, column, container, horizontal_space, image, row, scrollable, text, Row,
};
use iced::{Alignment, Border, Color, ContentFit, Element, Length, Theme};
use iced_aw::Wrap;

use crate::state::Target;
use crate::ui::presentation::{FilterView, ItemView};
use crate::Message;

/// Grid and filter spacing
const SPACING: f32 = 12.0;

/// Highlight border drawn around the element holding keyboard focus
pub fn focus_ring(focused: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let color = if focused {
            theme.extended_palette().primary.strong.color
        } else {
            Color::TRANSPARENT
        };

        container::Style {
            border: Border {
                color,
                width: 2.0,
                radius: 6.0.into(),
            },
            ..container::Style::default()
        }
    }
}

pub fn header<'a>(count: usize) -> Element<'a, Message> {
    row![
        text("Gallery").size(32),
        text(format!("{count} shown")).size(16),
        horizontal_space(),
        button("Open Gallery…")
            .on_press(Message::OpenFolder)
            .padding(10),
    ]
    .spacing(SPACING)
    .align_y(Alignment::Center)
    .into()
}

/// One button per filter control; the active one is highlighted
pub fn filter_bar<'a>(filters: Vec<FilterView>) -> Element<'a, Message> {
    let buttons = filters.into_iter().map(|filter| -> Element<'a, Message> {
        let style = if filter.active {
            button::primary
        } else {
            button::secondary
        };

        container(
            button(text(filter.label))
                .style(style)
                .padding([6, 14])
                .on_press(Message::Pressed(Target::FilterControl(filter.index))),
        )
        .padding(2)
        .style(focus_ring(filter.focused))
        .into()
    });

    Row::with_children(buttons).spacing(8).into()
}

fn tile<'a>(item: ItemView, size: f32) -> Element<'a, Message> {
    let thumbnail: Element<'a, Message> = match item.source {
        Some(src) => image(image::Handle::from_path(src))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        // Placeholder tiles show their category instead of an image
        None => container(text(item.category).size(14))
            .style(container::rounded_box)
            .center_x(Length::Fixed(size))
            .center_y(Length::Fixed(size))
            .into(),
    };

    let card = column![thumbnail, text(item.label).size(12)]
        .spacing(4)
        .align_x(Alignment::Center);

    container(
        button(card)
            .style(button::text)
            .padding(4)
            .on_press(Message::Pressed(Target::Item(item.id))),
    )
    .padding(2)
    .style(focus_ring(item.focused))
    .into()
}

/// Scrollable holding the thumbnail grid
pub fn grid_id() -> scrollable::Id {
    scrollable::Id::new("gallery-grid")
}

/// Thumbnail grid of the visible items. While `scroll_locked` the grid is
/// drawn without its scrollable, so the page behind the lightbox stays put.
pub fn grid<'a>(
    items: Vec<ItemView>,
    thumbnail_size: f32,
    scroll_locked: bool,
) -> Element<'a, Message> {
    if items.is_empty() {
        return container(text("No gallery items to show.").size(16))
            .center_x(Length::Fill)
            .padding(40)
            .into();
    }

    let tiles = items
        .into_iter()
        .map(|item| tile(item, thumbnail_size))
        .collect();

    let content = container(Wrap::with_elements(tiles).spacing(SPACING).line_spacing(SPACING))
        .width(Length::Fill)
        .padding(8);

    if scroll_locked {
        return container(content)
            .height(Length::Fill)
            .clip(true)
            .into();
    }

    scrollable(content)
        .id(grid_id())
        .height(Length::Fill)
        .on_scroll(|viewport| Message::GridScrolled(viewport.absolute_offset()))
        .into()
}
