/// Filterable image gallery
///
/// The catalog, the filter engine, the lightbox controller and the render
/// projection live here and know nothing about iced. The binary wires them
/// to a window:
/// - Settings file and defaults (config.rs)
/// - Display items and the surface interface (render.rs)
/// - Catalog, filters and lightbox state (state/)

pub mod config;
pub mod render;
pub mod state;
