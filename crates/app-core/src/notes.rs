//! Note records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Suffix appended to shortened text
pub const ELLIPSIS: &str = "...";

/// A note in the library
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier
    pub id: String,
    /// Title
    pub title: String,
    /// Preview text shown on cards
    pub preview: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Category label; dashboard notes have none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Note {
    /// Create a note
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        preview: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            preview: preview.into(),
            created_at,
            category: None,
        }
    }

    /// Set the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Preview shortened to at most `max_graphemes` user-visible characters
    pub fn excerpt(&self, max_graphemes: usize) -> String {
        truncate_graphemes(&self.preview, max_graphemes)
    }
}

/// Shorten text to at most `max` graphemes, ending in [`ELLIPSIS`] if cut
///
/// The ellipsis counts toward the limit. Never splits a grapheme cluster.
pub fn truncate_graphemes(text: &str, max: usize) -> String {
    let count = text.graphemes(true).count();
    if count <= max {
        return text.to_string();
    }

    let ellipsis_len = ELLIPSIS.graphemes(true).count();
    let keep = max.saturating_sub(ellipsis_len);
    let mut out: String = text.graphemes(true).take(keep).collect();
    let trimmed_len = out.trim_end().len();
    out.truncate(trimmed_len);
    out.push_str(ELLIPSIS);
    out
}
