//! Filter engine for the gallery
//!
//! Derives the visible set from the catalog and the current filter state.
//! The visible set is recomputed from scratch on every request and never cached.

use super::data::{CategoryFilter, ImageRecord};

/// Current category selection and search term
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    /// Trimmed, original casing; lowercased only when comparing
    pub search_term: String,
}

impl FilterState {
    /// Check whether a record passes both the category and the search filter
    pub fn matches(&self, record: &ImageRecord) -> bool {
        self.category.matches(record) && matches_search(record, &self.search_term)
    }
}

/// Owns one gallery's filter state
#[derive(Debug, Clone, Default)]
pub struct FilterEngine {
    state: FilterState,
    /// Categories offered by the category control
    known_categories: Vec<String>,
}

impl FilterEngine {
    pub fn new(known_categories: Vec<String>) -> Self {
        Self {
            state: FilterState::default(),
            known_categories,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn known_categories(&self) -> &[String] {
        &self.known_categories
    }

    /// Select a category by its control identifier (`"all"` or a category value)
    ///
    /// Unknown categories are accepted and simply match nothing.
    pub fn set_category(&mut self, identifier: &str) {
        let category = match CategoryFilter::from_control(identifier) {
            CategoryFilter::Only(value) if !self.known_categories.contains(&value) => {
                tracing::warn!("⚠️  Unknown category {:?}, nothing will match", value);
                CategoryFilter::Unknown(value)
            }
            category => category,
        };

        self.state.category = category;
    }

    /// Replace the search term with the trimmed raw input
    pub fn set_search_term(&mut self, raw: &str) {
        self.state.search_term = raw.trim().to_string();
    }

    /// Return to the initial state: all categories, empty search
    pub fn reset(&mut self, known_categories: Vec<String>) {
        self.state = FilterState::default();
        self.known_categories = known_categories;
    }

    /// Compute the visible subsequence of the catalog, preserving order
    pub fn compute_visible_set<'a>(&self, catalog: &'a [ImageRecord]) -> Vec<&'a ImageRecord> {
        let visible: Vec<&ImageRecord> = catalog
            .iter()
            .filter(|record| self.state.matches(record))
            .collect();

        tracing::debug!(
            category = self.state.category.identifier(),
            search = %self.state.search_term,
            "{} of {} images visible",
            visible.len(),
            catalog.len()
        );

        visible
    }
}

/// Case-insensitive substring match on category or description.
/// Keywords are deliberately not searched.
fn matches_search(record: &ImageRecord, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }

    let needle = term.to_lowercase();

    record.category.to_lowercase().contains(&needle)
        || record
            .description
            .as_ref()
            .is_some_and(|description| description.to_lowercase().contains(&needle))
}
