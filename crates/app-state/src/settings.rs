//! Settings screen
//!
//! Toggles flip exactly one preference. Sign out and delete-all go through
//! a confirm prompt; the destructive action is only emitted on confirm.

use app_core::settings::{self, setting_sections, Preferences, SettingAction, SettingSection, SettingToggle};
use app_platform::HapticFeedback;
use app_ui::ConfirmPrompt;

use crate::effect::Effect;
use crate::screen::Screen;

/// Events on the settings screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsEvent {
    /// A toggle row was switched
    Toggle(SettingToggle),
    /// A button row was pressed
    Pressed(SettingAction),
    /// The open prompt was confirmed
    Confirm,
    /// The open prompt was dismissed
    Cancel,
}

/// An open confirmation and the action it guards
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConfirm {
    /// Prompt shown to the user
    pub prompt: ConfirmPrompt,
    /// Action emitted on confirm
    pub action: SettingAction,
}

/// Confirmation prompt for a guarded action
pub fn confirm_prompt_for(action: SettingAction) -> Option<ConfirmPrompt> {
    match action {
        SettingAction::SignOut => Some(
            ConfirmPrompt::destructive("Sign Out")
                .with_description("Are you sure you want to sign out?")
                .with_confirm_label("Sign Out"),
        ),
        SettingAction::DeleteAllData => Some(
            ConfirmPrompt::destructive("Delete All Data")
                .with_description(
                    "This action cannot be undone. All your notes and memories will be permanently deleted.",
                )
                .with_confirm_label("Delete All"),
        ),
        _ => None,
    }
}

/// Settings state
#[derive(Debug, Clone, Default)]
pub struct SettingsScreen {
    preferences: Preferences,
    confirm: Option<PendingConfirm>,
}

impl SettingsScreen {
    /// Settings starting from the given preferences
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences,
            confirm: None,
        }
    }

    /// Current preferences
    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// The open prompt, if any
    pub fn confirm(&self) -> Option<&PendingConfirm> {
        self.confirm.as_ref()
    }

    /// The rendered settings table
    pub fn sections(&self) -> Vec<SettingSection> {
        setting_sections(&self.preferences)
    }

    /// Profile card lines
    pub fn profile(&self) -> (&'static str, &'static str) {
        (settings::PROFILE_NAME, settings::PROFILE_SINCE)
    }

    fn toggle(&mut self, toggle: SettingToggle) -> Vec<Effect<SettingsEvent>> {
        // Haptics is read before the flip so turning it off still buzzes once
        let haptics_on = self.preferences.haptics;
        let value = self.preferences.flip(toggle);
        tracing::debug!("Setting {:?} is now {}", toggle, value);
        if haptics_on {
            vec![Effect::haptic(HapticFeedback::LIGHT)]
        } else {
            Vec::new()
        }
    }

    fn press(&mut self, action: SettingAction) -> Vec<Effect<SettingsEvent>> {
        if let Some(prompt) = confirm_prompt_for(action) {
            self.confirm = Some(PendingConfirm { prompt, action });
            return Vec::new();
        }
        match action {
            SettingAction::ExportData => vec![
                Effect::haptic(HapticFeedback::MEDIUM),
                Effect::action(action),
            ],
            _ => vec![Effect::action(action)],
        }
    }
}

impl Screen for SettingsScreen {
    type Event = SettingsEvent;

    fn name(&self) -> &'static str {
        "settings"
    }

    fn reduce(&mut self, event: SettingsEvent) -> Vec<Effect<SettingsEvent>> {
        match event {
            SettingsEvent::Toggle(toggle) => self.toggle(toggle),
            SettingsEvent::Pressed(action) => self.press(action),
            SettingsEvent::Confirm => match self.confirm.take() {
                Some(pending) => vec![Effect::action(pending.action)],
                None => Vec::new(),
            },
            SettingsEvent::Cancel => {
                self.confirm = None;
                Vec::new()
            }
        }
    }
}
