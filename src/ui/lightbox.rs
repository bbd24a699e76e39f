/// Lightbox overlay: backdrop, displayed image, caption and controls
use iced::widget::{
    button, center, column, container, horizontal_space, image, mouse_area, opaque, row, stack,
    text, Space,
};
use iced::{Alignment, Background, Color, ContentFit, Element, Length, Theme};

use crate::state::Target;
use crate::ui::gallery::focus_ring;
use crate::ui::presentation::{ControlView, ModalView};
use crate::Message;

/// Backdrop dimming behind the lightbox content
const BACKDROP_ALPHA: f32 = 0.85;

fn with_opacity(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

fn control_button<'a>(label: &'static str, control: ControlView) -> Element<'a, Message> {
    if !control.present {
        return Space::new(Length::Shrink, Length::Shrink).into();
    }

    let opacity = control.opacity;
    let mut widget = button(text(label).size(28))
        .padding([4, 14])
        .style(move |theme: &Theme, status| {
            let mut style = button::secondary(theme, status);
            style.text_color = with_opacity(style.text_color, opacity);
            style.background = style.background.map(|background| match background {
                Background::Color(color) => Background::Color(with_opacity(color, opacity)),
                other => other,
            });
            style
        });

    if !control.disabled {
        widget = widget.on_press(Message::Pressed(Target::Modal(control.control)));
    }

    container(widget)
        .padding(2)
        .style(focus_ring(control.focused))
        .into()
}

/// Stack the lightbox over `base` while it is open
pub fn overlay<'a>(base: Element<'a, Message>, modal: ModalView) -> Element<'a, Message> {
    if modal.aria_hidden {
        return base;
    }

    let display: Element<'a, Message> = match modal.source {
        Some(src) => image(image::Handle::from_path(src))
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(text(modal.alt.clone()).size(24))
            .style(container::rounded_box)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into(),
    };

    let content = container(
        column![
            row![horizontal_space(), control_button("×", modal.close)],
            display,
            text(modal.alt).size(16),
            row![
                control_button("‹", modal.prev),
                text(modal.caption).size(14),
                control_button("›", modal.next),
            ]
            .spacing(16)
            .align_y(Alignment::Center),
        ]
        .spacing(12)
        .align_x(Alignment::Center),
    )
    .padding(16)
    .max_width(1100)
    .max_height(820)
    .style(container::rounded_box);

    // The backdrop only receives presses that miss the (opaque) content
    let backdrop = mouse_area(center(opaque(content)).style(|_theme| container::Style {
        background: Some(with_opacity(Color::BLACK, BACKDROP_ALPHA).into()),
        ..container::Style::default()
    }))
    .on_press(Message::Pressed(Target::Backdrop));

    stack![base, opaque(backdrop)].into()
}
