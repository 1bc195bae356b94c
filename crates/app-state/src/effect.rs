//! Side effects requested by screen reducers
//!
//! Reducers never touch the platform or the clock directly. They return a
//! list of [`Effect`] values and the host carries them out.
//!
//! A reducer only asks for its handler's own haptics. The tier pulse of the
//! tapped component is fired by that component's `activate`.

use std::time::Duration;

use app_core::settings::SettingAction;
use app_platform::HapticFeedback;
use serde::{Deserialize, Serialize};

/// An app-level action leaving the screen
///
/// These are the hooks where note creation, recording, export and account
/// flows would attach. The host logs them and forwards them to an optional
/// channel.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "camelCase")]
pub enum AppAction {
    /// Start a new note
    CreateNote,
    /// Start a voice memo
    RecordVoiceMemo,
    /// Open the note with this id
    OpenNote(String),
    /// Export notes and memories
    ExportData,
    /// Open help and FAQ
    OpenHelp,
    /// Open the feedback form
    SendFeedback,
    /// Open the privacy policy
    OpenPrivacyPolicy,
    /// Sign the user out
    SignOut,
    /// Delete all notes and memories
    DeleteAllData,
}

impl From<SettingAction> for AppAction {
    fn from(action: SettingAction) -> Self {
        match action {
            SettingAction::ExportData => AppAction::ExportData,
            SettingAction::Help => AppAction::OpenHelp,
            SettingAction::SendFeedback => AppAction::SendFeedback,
            SettingAction::PrivacyPolicy => AppAction::OpenPrivacyPolicy,
            SettingAction::SignOut => AppAction::SignOut,
            SettingAction::DeleteAllData => AppAction::DeleteAllData,
        }
    }
}

impl AppAction {
    /// Whether the action destroys or ends something
    pub fn is_destructive(&self) -> bool {
        matches!(self, AppAction::SignOut | AppAction::DeleteAllData)
    }
}

/// A side effect for the host to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<E> {
    /// Fire a best-effort haptic pulse
    Haptic(HapticFeedback),
    /// Feed `event` back into the same screen after `delay`
    Defer {
        /// How long to wait
        delay: Duration,
        /// Event to deliver
        event: E,
    },
    /// Emit an app-level action
    Action(AppAction),
}

impl<E> Effect<E> {
    /// Haptic effect
    pub fn haptic(feedback: HapticFeedback) -> Self {
        Effect::Haptic(feedback)
    }

    /// Deferred event
    pub fn defer(delay: Duration, event: E) -> Self {
        Effect::Defer { delay, event }
    }

    /// App action
    pub fn action(action: impl Into<AppAction>) -> Self {
        Effect::Action(action.into())
    }
}

/// Haptics in a list of effects, in order
pub fn haptics_of<E>(effects: &[Effect<E>]) -> Vec<HapticFeedback> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Haptic(feedback) => Some(*feedback),
            _ => None,
        })
        .collect()
}

/// Actions in a list of effects, in order
pub fn actions_of<E>(effects: &[Effect<E>]) -> Vec<AppAction> {
    effects
        .iter()
        .filter_map(|effect| match effect {
            Effect::Action(action) => Some(action.clone()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_actions_map() {
        assert_eq!(AppAction::from(SettingAction::SignOut), AppAction::SignOut);
        assert_eq!(AppAction::from(SettingAction::Help), AppAction::OpenHelp);
        assert!(AppAction::from(SettingAction::DeleteAllData).is_destructive());
        assert!(!AppAction::ExportData.is_destructive());
    }

    #[test]
    fn test_effect_filters() {
        let effects: Vec<Effect<()>> = vec![
            Effect::haptic(HapticFeedback::MEDIUM),
            Effect::defer(Duration::from_millis(10), ()),
            Effect::action(AppAction::CreateNote),
        ];
        assert_eq!(haptics_of(&effects), vec![HapticFeedback::MEDIUM]);
        assert_eq!(actions_of(&effects), vec![AppAction::CreateNote]);
    }

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&AppAction::OpenNote("3".to_string())).unwrap();
        assert_eq!(json, r#"{"type":"openNote","id":"3"}"#);
    }
}
