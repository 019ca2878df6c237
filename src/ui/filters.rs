use iced::widget::{button, text, text_input, Row};
use iced::{Element, Theme};

use image_gallery::state::data::ALL_CATEGORIES;
use crate::Message;

/// Search input; every keystroke is forwarded as-is
pub fn search_bar(value: &str) -> Element<'_, Message> {
    text_input("Search images...", value)
        .on_input(Message::SearchChanged)
        .padding(10)
        .size(16)
        .into()
}

/// "All" followed by one button per category. The active one is highlighted.
pub fn category_bar<'a>(categories: &[String], active: &str) -> Element<'a, Message> {
    let controls = std::iter::once(ALL_CATEGORIES.to_string()).chain(categories.iter().cloned());

    let buttons = controls.map(|identifier| {
        let style: fn(&Theme, button::Status) -> button::Style = if identifier == active {
            button::primary
        } else {
            button::secondary
        };

        Element::from(
            button(text(label(&identifier)))
                .style(style)
                .padding([6, 14])
                .on_press(Message::CategorySelected(identifier)),
        )
    });

    Row::with_children(buttons).spacing(8).into()
}

/// Button caption: the identifier with its first letter uppercased
fn label(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
