//! Gallery session
//!
//! Ties one catalog, one filter engine and one lightbox together. Every user
//! action goes through [`Gallery::dispatch`], which mutates the owning
//! component and notifies the surface with the new derived state.

use super::filter::{FilterEngine, FilterState};
use super::library::Library;
use super::lightbox::{ClickTarget, Lightbox};
use crate::render::{GalleryView, Surface};

/// User interactions the gallery reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A category control was chosen (`"all"` or a category value)
    SelectCategory(String),
    /// The search input changed; carries the raw value
    Search(String),
    /// A rendered image item was selected
    SelectImage(String),
    /// The lightbox's close control
    CloseLightbox,
    /// A click somewhere inside the lightbox overlay
    LightboxClicked(ClickTarget),
    /// The escape key
    Escape,
}

pub struct Gallery {
    library: Library,
    filter: FilterEngine,
    lightbox: Lightbox,
    /// Category controls fixed by configuration, if any
    configured_categories: Option<Vec<String>>,
}

impl Gallery {
    /// Create a session showing the whole catalog with the lightbox closed.
    ///
    /// `categories` overrides the category controls; by default they are
    /// taken from the catalog.
    pub fn new(library: Library, categories: Option<Vec<String>>) -> Self {
        let known = categories.clone().unwrap_or_else(|| library.categories());
        Self {
            library,
            filter: FilterEngine::new(known),
            lightbox: Lightbox::default(),
            configured_categories: categories,
        }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    pub fn filter_state(&self) -> &FilterState {
        self.filter.state()
    }

    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Category values offered by the category control (excluding "all")
    pub fn categories(&self) -> &[String] {
        self.filter.known_categories()
    }

    /// Recompute the visible set and project it
    pub fn view(&self) -> GalleryView {
        GalleryView::project(&self.filter.compute_visible_set(self.library.records()))
    }

    /// Push the complete current state to a surface (initial render)
    pub fn attach(&self, surface: &mut impl Surface) {
        surface.render(&self.view());
        surface.present_lightbox(&self.lightbox);
    }

    /// Apply one action and notify the surface of what changed
    pub fn dispatch(&mut self, action: Action, surface: &mut impl Surface) {
        match action {
            Action::SelectCategory(identifier) => {
                self.filter.set_category(&identifier);
                surface.render(&self.view());
            }
            Action::Search(raw) => {
                self.filter.set_search_term(&raw);
                surface.render(&self.view());
            }
            Action::SelectImage(src) => {
                self.lightbox.open(src);
                surface.present_lightbox(&self.lightbox);
            }
            Action::CloseLightbox => self.update_lightbox(surface, Lightbox::close),
            Action::LightboxClicked(target) => {
                self.update_lightbox(surface, |lightbox| lightbox.dismiss(target))
            }
            Action::Escape => self.update_lightbox(surface, Lightbox::escape),
        }
    }

    /// Swap in a new catalog: filters reset, lightbox closed, full re-render
    pub fn replace_library(&mut self, library: Library, surface: &mut impl Surface) {
        let known = self
            .configured_categories
            .clone()
            .unwrap_or_else(|| library.categories());

        self.library = library;
        self.filter.reset(known);
        self.lightbox.close();
        self.attach(surface);
    }

    /// Run a lightbox transition, presenting only if the state changed
    fn update_lightbox(&mut self, surface: &mut impl Surface, transition: impl FnOnce(&mut Lightbox)) {
        let before = self.lightbox.clone();
        transition(&mut self.lightbox);
        if self.lightbox != before {
            surface.present_lightbox(&self.lightbox);
        }
    }
}
