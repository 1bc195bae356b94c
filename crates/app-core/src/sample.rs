//! Built-in sample content
//!
//! Every screen starts from this data. Nothing is persisted.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::notes::Note;

/// Home screen greeting
pub const GREETING: &str = "Good Morning";

/// Home screen subtitle
pub const HOME_SUBTITLE: &str = "Ready to capture your thoughts?";

/// Chat header title
pub const CHAT_TITLE: &str = "Always in Memory";

/// Chat header subtitle
pub const CHAT_SUBTITLE: &str = "Your AI memory companion";

/// Chat input placeholder
pub const CHAT_PLACEHOLDER: &str = "Share your thoughts...";

/// Library header title
pub const LIBRARY_TITLE: &str = "Your Library";

/// Library search placeholder
pub const SEARCH_PLACEHOLDER: &str = "Search your notes...";

/// Category buttons, in display order
pub const CATEGORIES: [&str; 7] = [
    "All", "Personal", "Work", "Food", "Learning", "Travel", "Health",
];

/// Today's counters on the home dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    /// Notes written
    pub notes: u32,
    /// Minutes spent
    pub minutes: u32,
    /// Ideas captured
    pub ideas: u32,
}

impl Default for DailyStats {
    fn default() -> Self {
        Self {
            notes: 3,
            minutes: 12,
            ideas: 5,
        }
    }
}

impl DailyStats {
    /// `(value, label)` pairs in display order
    pub fn entries(&self) -> [(u32, &'static str); 3] {
        [
            (self.notes, "Notes"),
            (self.minutes, "Minutes"),
            (self.ideas, "Ideas"),
        ]
    }
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, d, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The six notes in the library
pub fn library_notes() -> Vec<Note> {
    vec![
        Note::new(
            "1",
            "Morning Thoughts",
            "Today feels like a good day to start something new...",
            day(15),
        )
        .with_category("Personal"),
        Note::new(
            "2",
            "Meeting Notes",
            "Key points from today's discussion about the new project...",
            day(14),
        )
        .with_category("Work"),
        Note::new(
            "3",
            "Recipe Ideas",
            "Trying out new pasta recipes for the weekend...",
            day(13),
        )
        .with_category("Food"),
        Note::new(
            "4",
            "Book Insights",
            "Fascinating concepts from the latest psychology book...",
            day(12),
        )
        .with_category("Learning"),
        Note::new(
            "5",
            "Travel Plans",
            "Planning the summer vacation to Japan...",
            day(11),
        )
        .with_category("Travel"),
        Note::new(
            "6",
            "Workout Progress",
            "Tracking my fitness journey and new goals...",
            day(10),
        )
        .with_category("Health"),
    ]
}

/// The three recent notes on the home dashboard, dated relative to `now`
pub fn recent_notes(now: DateTime<Utc>) -> Vec<Note> {
    vec![
        Note::new(
            "1",
            "Morning Thoughts",
            "Today feels like a good day to...",
            now - Duration::hours(2),
        ),
        Note::new(
            "2",
            "Meeting Notes",
            "Key points from today's discussion...",
            now - Duration::hours(5),
        ),
        Note::new(
            "3",
            "Inspiration",
            "Sometimes the best ideas come when...",
            now - Duration::days(1),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::{format_relative, format_short_date};

    #[test]
    fn test_library_notes() {
        let notes = library_notes();
        assert_eq!(notes.len(), 6);
        assert_eq!(format_short_date(&notes[0].created_at), "Jan 15");
        assert_eq!(format_short_date(&notes[5].created_at), "Jan 10");
        assert!(notes.iter().all(|n| n.category.is_some()));
    }

    #[test]
    fn test_every_note_category_has_a_button() {
        for note in library_notes() {
            let category = note.category.unwrap();
            assert!(CATEGORIES.contains(&category.as_str()));
        }
    }

    #[test]
    fn test_recent_notes_relative_times() {
        let now = Utc::now();
        let labels: Vec<String> = recent_notes(now)
            .iter()
            .map(|n| format_relative(&n.created_at, &now))
            .collect();
        assert_eq!(labels, vec!["2 hours ago", "5 hours ago", "1 day ago"]);
    }

    #[test]
    fn test_daily_stats() {
        let stats = DailyStats::default();
        assert_eq!(stats.entries(), [(3, "Notes"), (12, "Minutes"), (5, "Ideas")]);
    }
}
