//! Home dashboard

use app_core::notes::Note;
use app_core::sample::{self, DailyStats};
use app_core::time::format_relative;
use app_platform::HapticFeedback;
use app_ui::{ButtonVariant, FloatingActionButton, GlassButton};
use chrono::{DateTime, Utc};

use crate::effect::{AppAction, Effect};
use crate::screen::Screen;

/// Events on the home screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HomeEvent {
    /// "New Note" quick action
    NewNote,
    /// "Voice Memo" quick action
    VoiceMemo,
    /// Floating action button
    FabPressed,
    /// A recent note card
    NotePressed(String),
}

/// Home dashboard state
#[derive(Debug, Clone)]
pub struct HomeScreen {
    recent: Vec<Note>,
    stats: DailyStats,
    quick_actions: [GlassButton; 2],
    fab: FloatingActionButton,
}

impl HomeScreen {
    /// Dashboard with sample notes dated relative to `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            recent: sample::recent_notes(now),
            stats: DailyStats::default(),
            quick_actions: [
                GlassButton::new("New Note", "newNote")
                    .with_variant(ButtonVariant::Primary)
                    .with_orange_glow(true),
                GlassButton::new("Voice Memo", "voiceMemo").with_variant(ButtonVariant::Secondary),
            ],
            fab: FloatingActionButton::new("fab"),
        }
    }

    /// Greeting line
    pub fn greeting(&self) -> &'static str {
        sample::GREETING
    }

    /// Subtitle under the greeting
    pub fn subtitle(&self) -> &'static str {
        sample::HOME_SUBTITLE
    }

    /// Recent notes, newest first
    pub fn recent_notes(&self) -> &[Note] {
        &self.recent
    }

    /// `(title, preview, relative time)` rows for the recent notes list
    pub fn recent_rows(&self, now: &DateTime<Utc>) -> Vec<(&str, &str, String)> {
        self.recent
            .iter()
            .map(|note| {
                (
                    note.title.as_str(),
                    note.preview.as_str(),
                    format_relative(&note.created_at, now),
                )
            })
            .collect()
    }

    /// Today's counters
    pub fn stats(&self) -> DailyStats {
        self.stats
    }

    /// The two quick action buttons
    pub fn quick_actions(&self) -> &[GlassButton] {
        &self.quick_actions
    }

    /// The floating action button
    pub fn fab(&self) -> &FloatingActionButton {
        &self.fab
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Screen for HomeScreen {
    type Event = HomeEvent;

    fn name(&self) -> &'static str {
        "home"
    }

    fn reduce(&mut self, event: HomeEvent) -> Vec<Effect<HomeEvent>> {
        match event {
            HomeEvent::NewNote => vec![
                Effect::haptic(HapticFeedback::MEDIUM),
                Effect::action(AppAction::CreateNote),
            ],
            HomeEvent::VoiceMemo => vec![Effect::action(AppAction::RecordVoiceMemo)],
            HomeEvent::FabPressed => vec![Effect::action(AppAction::CreateNote)],
            HomeEvent::NotePressed(id) => {
                if !self.recent.iter().any(|note| note.id == id) {
                    tracing::debug!("Ignoring press on unknown note {}", id);
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
