use serde::{Deserialize, Serialize};

/// Shared data structures for the application state
/// 
/// These structs represent the data model that flows between
/// the catalog layer, the filter engine and the UI layer.

/// Represents a single image in the catalog
///
/// Records are immutable once loaded; the filter engine and the
/// render layer only ever borrow them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Image location (file path or URI, as written in the catalog)
    pub src: String,
    /// Single-valued classification tag (e.g., "nature")
    pub category: String,
    /// Free text shown to the user and matched by search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Auxiliary display metadata, never searched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,
}

impl ImageRecord {
    /// Create a record with only the required fields
    pub fn new(src: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            category: category.into(),
            description: None,
            keywords: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Keywords joined by single spaces, or None if the record has none
    pub fn joined_keywords(&self) -> Option<String> {
        self.keywords.as_ref().map(|keywords| keywords.join(" "))
    }
}

/// Identifier of the "show everything" category control
pub const ALL_CATEGORIES: &str = "all";

/// The category half of the filter state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every record passes
    #[default]
    All,
    /// Only records whose category equals this value exactly
    Only(String),
    /// A value outside the offered controls; nothing passes
    Unknown(String),
}

impl CategoryFilter {
    /// Build a filter from a category control identifier
    ///
    /// The identifier `"all"` selects everything; anything else is
    /// taken as a literal category value.
    pub fn from_control(identifier: &str) -> Self {
        if identifier == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(identifier.to_string())
        }
    }

    /// The control identifier this filter corresponds to
    pub fn identifier(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) | CategoryFilter::Unknown(category) => category,
        }
    }

    /// Case-sensitive exact match against a record's category
    pub fn matches(&self, record: &ImageRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => record.category == *category,
            CategoryFilter::Unknown(_) => false,
        }
    }
}
