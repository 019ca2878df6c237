/// State management module
/// 
/// This module handles all application state, including:
/// - The image catalog and how it is loaded (library.rs)
/// - Shared data structures (data.rs)
/// - The filter engine: category + search (filter.rs)
/// - The lightbox controller (lightbox.rs)
/// - The gallery session tying them together (gallery.rs)

pub mod library;
pub mod data;
pub mod filter;
pub mod lightbox;
pub mod gallery;
