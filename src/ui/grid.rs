use iced::widget::{container, image, mouse_area, text, tooltip};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;
use std::path::PathBuf;

use image_gallery::render::{DisplayItem, GalleryView, NO_RESULTS_TEXT};
use image_gallery::state::library::Library;
use crate::Message;

/// Build the gallery container from the last rendered view.
/// The whole grid is rebuilt every time; nothing is diffed.
pub fn view<'a>(gallery: &GalleryView, library: &Library, tile_width: f32, spacing: f32) -> Element<'a, Message> {
    match gallery {
        GalleryView::NoResults => container(text(NO_RESULTS_TEXT).size(18))
            .padding(40)
            .center_x(Length::Fill)
            .into(),
        GalleryView::Items(items) => {
            let tiles: Vec<Element<'a, Message>> = items
                .iter()
                .map(|item| tile(item, library.resolve(&item.src), tile_width))
                .collect();

            Wrap::with_elements(tiles)
                .spacing(spacing)
                .line_spacing(spacing)
                .into()
        }
    }
}

/// One clickable thumbnail; selecting it opens the lightbox on its source
fn tile<'a>(item: &DisplayItem, path: PathBuf, width: f32) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(path))
        .width(Length::Fixed(width))
        .height(Length::Fixed(width * 0.75))
        .content_fit(ContentFit::Cover);

    let clickable = mouse_area(container(picture).padding(4).style(container::rounded_box))
        .on_press(Message::ImageSelected(item.src.clone()));

    // Category doubles as alt text
    tooltip(
        clickable,
        container(text(item.alt.clone()).size(12)).padding(4).style(container::rounded_box),
        tooltip::Position::Bottom,
    )
    .into()
}
