/// iced widgets for the gallery window
///
/// - `filters.rs` - search input and category buttons
/// - `grid.rs` - the image grid and its "no results" placeholder
/// - `lightbox.rs` - the modal viewer drawn over the gallery

pub mod filters;
pub mod grid;
pub mod lightbox;
