//! Note library with search and category filter

use app_core::notes::Note;
use app_core::sample;
use app_core::search::{empty_state_message, filter_notes, note_count_label, CategoryFilter, EMPTY_TITLE};
use app_platform::HapticFeedback;
use app_ui::{ButtonSize, ButtonVariant, GlassButton, GlassInput};

use crate::effect::{AppAction, Effect};
use crate::screen::Screen;

/// Events on the library screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LibraryEvent {
    /// The search text changed
    SearchChanged(String),
    /// A category button, by label
    CategorySelected(String),
    /// A note card
    NotePressed(String),
}

/// Title and message of the empty state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyState {
    /// Title line
    pub title: &'static str,
    /// Hint line
    pub message: &'static str,
}

/// Library state
#[derive(Debug, Clone)]
pub struct LibraryScreen {
    notes: Vec<Note>,
    search: String,
    filter: CategoryFilter,
}

impl LibraryScreen {
    /// Library over the given notes
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            search: String::new(),
            filter: CategoryFilter::All,
        }
    }

    /// Current search text
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Current category filter
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Notes passing the filter and the search
    pub fn visible_notes(&self) -> Vec<&Note> {
        filter_notes(&self.notes, &self.search, &self.filter)
    }

    /// Header count, e.g. "6 notes"
    pub fn count_label(&self) -> String {
        note_count_label(self.visible_notes().len())
    }

    /// Empty-state copy, when nothing is visible
    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.visible_notes().is_empty() {
            return None;
        }
        Some(EmptyState {
            title: EMPTY_TITLE,
            message: empty_state_message(!self.search.is_empty()),
        })
    }

    /// The search field
    pub fn search_field(&self) -> GlassInput {
        GlassInput::new()
            .with_placeholder(sample::SEARCH_PLACEHOLDER)
            .with_value(self.search.clone())
            .on_change_text("searchChanged")
    }

    /// One small button per category; the selected one is primary
    pub fn category_buttons(&self) -> Vec<GlassButton> {
        sample::CATEGORIES
            .iter()
            .map(|label| {
                let variant = if self.filter.label() == *label {
                    ButtonVariant::Primary
                } else {
                    ButtonVariant::Ghost
                };
                GlassButton::new(*label, "categorySelected")
                    .with_id(*label)
                    .with_variant(variant)
                    .with_size(ButtonSize::Sm)
            })
            .collect()
    }
}

impl Default for LibraryScreen {
    fn default() -> Self {
        Self::new(sample::library_notes())
    }
}

impl Screen for LibraryScreen {
    type Event = LibraryEvent;

    fn name(&self) -> &'static str {
        "library"
    }

    fn reduce(&mut self, event: LibraryEvent) -> Vec<Effect<LibraryEvent>> {
        match event {
            LibraryEvent::SearchChanged(text) => {
                self.search = text;
                Vec::new()
            }
            LibraryEvent::CategorySelected(label) => {
                self.filter = CategoryFilter::from_label(&label);
                tracing::debug!("Library filter set to {}", self.filter.label());
                Vec::new()
            }
            LibraryEvent::NotePressed(id) => {
                if !self.notes.iter().any(|note| note.id == id) {
                    return Vec::new();
                }
                vec![
                    Effect::haptic(HapticFeedback::Selection),
                    Effect::action(AppAction::OpenNote(id)),
                ]
            }
        }
    }
}
