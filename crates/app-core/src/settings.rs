//! Settings table
//!
//! The settings screen is rendered from a declarative list of sections.
//! Each row is a toggle bound to one [`Preferences`] flag, a button bound to
//! a [`SettingAction`], or read-only info.

use serde::{Deserialize, Serialize};

/// Name shown on the profile card
pub const PROFILE_NAME: &str = "Anonymous User";

/// Membership line shown on the profile card
pub const PROFILE_SINCE: &str = "Using Inkr since Jan 2024";

/// Title of the last section, whose rows are destructive
pub const DANGER_ZONE: &str = "Danger Zone";

/// The four user preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingToggle {
    /// Reminders and updates
    Notifications,
    /// Dark theme
    DarkMode,
    /// Cross-device sync
    AutoSync,
    /// Haptic feedback on interactions
    Haptics,
}

/// Actions a button row can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingAction {
    /// Download notes and memories
    ExportData,
    /// Open help
    Help,
    /// Open the feedback form
    SendFeedback,
    /// Open the privacy policy
    PrivacyPolicy,
    /// Sign out, after confirmation
    SignOut,
    /// Delete everything, after confirmation
    DeleteAllData,
}

impl SettingAction {
    /// Whether the action must be confirmed first
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, SettingAction::SignOut | SettingAction::DeleteAllData)
    }
}

/// Row kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingKind {
    /// On/off switch
    Toggle,
    /// Pressable row
    Button,
    /// Read-only row
    Info,
}

/// Current preference values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// Notifications on
    pub notifications: bool,
    /// Dark theme on
    pub dark_mode: bool,
    /// Auto sync on
    pub auto_sync: bool,
    /// Haptics on
    pub haptics: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            notifications: true,
            dark_mode: false,
            auto_sync: true,
            haptics: true,
        }
    }
}

impl Preferences {
    /// Value of one flag
    pub fn get(&self, toggle: SettingToggle) -> bool {
        match toggle {
            SettingToggle::Notifications => self.notifications,
            SettingToggle::DarkMode => self.dark_mode,
            SettingToggle::AutoSync => self.auto_sync,
            SettingToggle::Haptics => self.haptics,
        }
    }

    /// Flip one flag and return its new value
    pub fn flip(&mut self, toggle: SettingToggle) -> bool {
        let flag = match toggle {
            SettingToggle::Notifications => &mut self.notifications,
            SettingToggle::DarkMode => &mut self.dark_mode,
            SettingToggle::AutoSync => &mut self.auto_sync,
            SettingToggle::Haptics => &mut self.haptics,
        };
        *flag = !*flag;
        *flag
    }
}

/// A settings row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingItem {
    /// Row id
    pub id: String,
    /// Title
    pub title: String,
    /// Optional subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Row kind
    pub kind: SettingKind,
    /// Current value, for toggles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<bool>,
    /// Bound preference, for toggles
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle: Option<SettingToggle>,
    /// Bound action, for buttons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<SettingAction>,
}

impl SettingItem {
    fn toggle(id: &str, title: &str, subtitle: &str, toggle: SettingToggle, prefs: &Preferences) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: Some(subtitle.to_string()),
            kind: SettingKind::Toggle,
            value: Some(prefs.get(toggle)),
            toggle: Some(toggle),
            action: None,
        }
    }

    fn button(id: &str, title: &str, subtitle: Option<&str>, action: SettingAction) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: subtitle.map(str::to_string),
            kind: SettingKind::Button,
            value: None,
            toggle: None,
            action: Some(action),
        }
    }

    fn info(id: &str, title: &str, subtitle: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            subtitle: Some(subtitle.to_string()),
            kind: SettingKind::Info,
            value: None,
            toggle: None,
            action: None,
        }
    }
}

/// A titled group of rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingSection {
    /// Section title
    pub title: String,
    /// Rows
    pub items: Vec<SettingItem>,
    /// Rows render in the destructive style
    #[serde(default)]
    pub danger: bool,
}

/// Build the settings table for the current preferences
pub fn setting_sections(prefs: &Preferences) -> Vec<SettingSection> {
    use SettingAction::*;
    use SettingToggle::*;

    vec![
        SettingSection {
            title: "Preferences".to_string(),
            items: vec![
                SettingItem::toggle("notifications", "Notifications", "Receive reminders and updates", Notifications, prefs),
                SettingItem::toggle("darkMode", "Dark Mode", "Use dark theme (coming soon)", DarkMode, prefs),
                SettingItem::toggle("haptic", "Haptic Feedback", "Feel vibrations for interactions", Haptics, prefs),
            ],
            danger: false,
        },
        SettingSection {
            title: "Sync & Backup".to_string(),
            items: vec![
                SettingItem::toggle("autoSync", "Auto Sync", "Automatically sync across devices", AutoSync, prefs),
                SettingItem::button("export", "Export Data", Some("Download your notes and memories"), ExportData),
            ],
            danger: false,
        },
        SettingSection {
            title: "Account".to_string(),
            items: vec![
                SettingItem::info("profile", "Profile", "user@example.com"),
                SettingItem::info("storage", "Storage Used", "2.3 MB of 1 GB"),
            ],
            danger: false,
        },
        SettingSection {
            title: "Support".to_string(),
            items: vec![
                SettingItem::button("help", "Help & FAQ", None, Help),
                SettingItem::button("feedback", "Send Feedback", None, SendFeedback),
                SettingItem::button("privacy", "Privacy Policy", None, PrivacyPolicy),
            ],
            danger: false,
        },
        SettingSection {
            title: DANGER_ZONE.to_string(),
            items: vec![
                SettingItem::button("logout", "Sign Out", None, SignOut),
                SettingItem::button(
                    "delete",
                    "Delete All Data",
                    Some("Permanently remove all notes and memories"),
                    DeleteAllData,
                ),
            ],
            danger: true,
        },
    ]
}

/// Find a row by id
pub fn find_item<'a>(sections: &'a [SettingSection], id: &str) -> Option<&'a SettingItem> {
    sections
        .iter()
        .flat_map(|section| section.items.iter())
        .find(|item| item.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert!(prefs.notifications);
        assert!(!prefs.dark_mode);
        assert!(prefs.auto_sync);
        assert!(prefs.haptics);
    }

    #[test]
    fn test_flip_changes_one_flag() {
        let mut prefs = Preferences::default();
        assert!(!prefs.flip(SettingToggle::Notifications));
        assert_eq!(
            prefs,
            Preferences {
                notifications: false,
                ..Preferences::default()
            }
        );
    }

    #[test]
    fn test_sections_layout() {
        let sections = setting_sections(&Preferences::default());
        let titles: Vec<&str> = sections.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Preferences", "Sync & Backup", "Account", "Support", "Danger Zone"]
        );
        assert!(sections.last().unwrap().danger);
        assert!(sections[..4].iter().all(|s| !s.danger));
    }

    #[test]
    fn test_toggle_rows_reflect_preferences() {
        let mut prefs = Preferences::default();
        prefs.flip(SettingToggle::DarkMode);
        let sections = setting_sections(&prefs);

        let dark = find_item(&sections, "darkMode").unwrap();
        assert_eq!(dark.kind, SettingKind::Toggle);
        assert_eq!(dark.value, Some(true));

        let toggles = sections
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|i| i.kind == SettingKind::Toggle)
            .count();
        assert_eq!(toggles, 4);
    }

    #[test]
    fn test_destructive_actions_need_confirmation() {
        let sections = setting_sections(&Preferences::default());
        let logout = find_item(&sections, "logout").unwrap();
        assert!(logout.action.unwrap().needs_confirmation());
        let export = find_item(&sections, "export").unwrap();
        assert!(!export.action.unwrap().needs_confirmation());
        assert!(find_item(&sections, "profile").unwrap().action.is_none());
    }
}
