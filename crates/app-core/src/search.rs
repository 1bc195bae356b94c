//! Library search and category filtering
//!
//! A note is visible when it passes both the category filter and the text
//! search. The search matches case-insensitively anywhere in the title or
//! the preview; an empty search matches everything.

use serde::{Deserialize, Serialize};

use crate::notes::Note;

/// Label of the catch-all category
pub const ALL_CATEGORIES: &str = "All";

/// Category filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "name")]
pub enum CategoryFilter {
    /// Every note
    #[default]
    All,
    /// Notes whose category equals the name exactly
    Named(String),
}

impl CategoryFilter {
    /// Filter from a category button label
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(label.to_string())
        }
    }

    /// Button label for this filter
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Whether a note passes the filter
    pub fn matches(&self, note: &Note) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => note.category.as_deref() == Some(name.as_str()),
        }
    }
}

/// Whether a note's title or preview contains the search text
pub fn matches_search(note: &Note, search: &str) -> bool {
    let needle = search.to_lowercase();
    note.title.to_lowercase().contains(&needle) || note.preview.to_lowercase().contains(&needle)
}

/// Notes visible under a search and a category filter, in input order
pub fn filter_notes<'a>(notes: &'a [Note], search: &str, filter: &CategoryFilter) -> Vec<&'a Note> {
    notes
        .iter()
        .filter(|note| filter.matches(note) && matches_search(note, search))
        .collect()
}

/// Header label, e.g. "6 notes"
pub fn note_count_label(count: usize) -> String {
    format!("{} notes", count)
}

/// Title of the empty state
pub const EMPTY_TITLE: &str = "No notes found";

/// Subtitle of the empty state
pub fn empty_state_message(search_active: bool) -> &'static str {
    if search_active {
        "Try adjusting your search"
    } else {
        "Start creating your first note!"
    }
}
