//! Render/bind layer
//!
//! Projects the visible set into display items and defines the capability
//! interface a rendering surface implements. The gallery session notifies a
//! [`Surface`] whenever the derived view or the lightbox changes; the surface
//! decides how to materialize it.

use crate::state::data::ImageRecord;
use crate::state::lightbox::Lightbox;

/// Text shown in place of the grid when nothing matches
pub const NO_RESULTS_TEXT: &str = "No images found matching your search";

/// One rendered gallery tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Source handed to the lightbox when this item is selected
    pub src: String,
    /// Alternative text (the record's category)
    pub alt: String,
    /// Space-joined keywords, inert metadata for styling/automation hooks
    pub keywords: Option<String>,
}

impl DisplayItem {
    fn from_record(record: &ImageRecord) -> Self {
        Self {
            src: record.src.clone(),
            alt: record.category.clone(),
            keywords: record.joined_keywords(),
        }
    }
}

/// What the gallery container should show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GalleryView {
    /// One item per visible record, in catalog order
    Items(Vec<DisplayItem>),
    /// The visible set is empty
    #[default]
    NoResults,
}

impl GalleryView {
    /// Build the full view from the visible set. Always a complete replacement.
    pub fn project(visible: &[&ImageRecord]) -> Self {
        if visible.is_empty() {
            return GalleryView::NoResults;
        }

        GalleryView::Items(visible.iter().map(|record| DisplayItem::from_record(record)).collect())
    }

    pub fn items(&self) -> &[DisplayItem] {
        match self {
            GalleryView::Items(items) => items,
            GalleryView::NoResults => &[],
        }
    }
}

/// A rendering surface the gallery session drives
pub trait Surface {
    /// Replace the gallery container's contents wholesale
    fn render(&mut self, view: &GalleryView);

    /// Show, re-target or hide the lightbox. Scroll locking follows
    /// [`Lightbox::scroll_locked`].
    fn present_lightbox(&mut self, lightbox: &Lightbox);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_visible_set_is_placeholder() {
        assert_eq!(GalleryView::project(&[]), GalleryView::NoResults);
        assert!(GalleryView::NoResults.items().is_empty());
    }

    #[test]
    fn test_items_carry_alt_and_keywords() {
        let plain = ImageRecord::new("a.jpg", "nature");
        let tagged = ImageRecord::new("b.jpg", "city")
            .with_description("Night skyline")
            .with_keywords(["night", "lights", "urban"]);

        let view = GalleryView::project(&[&plain, &tagged]);
        let items = view.items();

        assert_eq!(items.len(), 2);
        assert_eq!(
            items[0],
            DisplayItem {
                src: "a.jpg".to_string(),
                alt: "nature".to_string(),
                keywords: None,
            }
        );
        assert_eq!(items[1].alt, "city");
        assert_eq!(items[1].keywords.as_deref(), Some("night lights urban"));
    }
}
