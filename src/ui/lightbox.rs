use iced::widget::{button, column, container, horizontal_space, image, mouse_area, opaque, row, stack, text};
use iced::{Color, ContentFit, Element, Length};
use std::path::PathBuf;

use image_gallery::state::lightbox::ClickTarget;
use crate::Message;

/// Draw the lightbox over `base`.
///
/// With `lock_scroll` the overlay is opaque: it swallows clicks and wheel
/// events, so the gallery behind it cannot scroll. Clicks on the image or
/// the close button are captured before they reach the backdrop.
pub fn view<'a>(base: impl Into<Element<'a, Message>>, path: PathBuf, lock_scroll: bool) -> Element<'a, Message> {
    let picture = mouse_area(
        image(image::Handle::from_path(path))
            .content_fit(ContentFit::Contain),
    )
    .on_press(Message::LightboxClicked(ClickTarget::Image));

    let close = button(text("×").size(32))
        .style(button::text)
        .on_press(Message::CloseLightbox);

    let overlay = container(
        column![
            row![horizontal_space(), close],
            container(picture).center(Length::Fill),
        ]
        .padding(20),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(|_theme| container::Style {
        background: Some(Color { a: 0.9, ..Color::BLACK }.into()),
        ..container::Style::default()
    });

    let backdrop = mouse_area(overlay).on_press(Message::LightboxClicked(ClickTarget::Backdrop));
    let backdrop: Element<'a, Message> = if lock_scroll {
        opaque(backdrop)
    } else {
        backdrop.into()
    };

    stack![base.into(), backdrop].into()
}
