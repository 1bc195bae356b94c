//! Tab navigation for Inkr
//!
//! The app has four bottom tabs. Each tab owns one screen; switching tabs
//! unmounts the previous screen, so [`NavigationState::switch_tab`] reports
//! the transition for the host to act on.

use serde::{Deserialize, Serialize};

// =============================================================================
// Navigation Tabs
// =============================================================================

/// Main navigation tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTab {
    /// Dashboard
    #[default]
    Home,
    /// Memory chat
    Memory,
    /// Note library
    Library,
    /// Settings
    Settings,
}

impl NavigationTab {
    /// Route name of the tab screen
    pub fn route_name(&self) -> &'static str {
        match self {
            NavigationTab::Home => "index",
            NavigationTab::Memory => "explore",
            NavigationTab::Library => "library",
            NavigationTab::Settings => "settings",
        }
    }

    /// Look up a tab by route name
    pub fn from_route_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|tab| tab.route_name() == name)
    }

    /// Get icon name for this tab
    pub fn icon(&self) -> &'static str {
        match self {
            NavigationTab::Home => "house.fill",
            NavigationTab::Memory => "brain.head.profile",
            NavigationTab::Library => "books.vertical.fill",
            NavigationTab::Settings => "gearshape.fill",
        }
    }

    /// Get label for this tab
    pub fn label(&self) -> &'static str {
        match self {
            NavigationTab::Home => "Home",
            NavigationTab::Memory => "Memory",
            NavigationTab::Library => "Library",
            NavigationTab::Settings => "Settings",
        }
    }

    /// Get all tabs in order
    pub fn all() -> [NavigationTab; 4] {
        [
            NavigationTab::Home,
            NavigationTab::Memory,
            NavigationTab::Library,
            NavigationTab::Settings,
        ]
    }
}

impl std::fmt::Display for NavigationTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for NavigationTab {
    type Err = String;

    /// Accepts route names (`explore`) and labels (`memory`), case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::from_route_name(&lower)
            .or_else(|| {
                Self::all()
                    .into_iter()
                    .find(|tab| tab.label().eq_ignore_ascii_case(&lower))
            })
            .ok_or_else(|| format!("Unknown tab: {}", s))
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// A change of active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabTransition {
    /// Tab being left (its screen unmounts)
    pub from: NavigationTab,
    /// Tab being entered (its screen mounts)
    pub to: NavigationTab,
}

/// Navigation state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NavigationState {
    /// Current active tab
    pub active_tab: NavigationTab,
}

impl NavigationState {
    /// Start on a tab
    pub fn new(initial: NavigationTab) -> Self {
        Self {
            active_tab: initial,
        }
    }

    /// Switch to a tab
    ///
    /// Returns `None` when the tab is already active.
    pub fn switch_tab(&mut self, tab: NavigationTab) -> Option<TabTransition> {
        if self.active_tab == tab {
            return None;
        }
        let transition = TabTransition {
            from: self.active_tab,
            to: tab,
        };
        tracing::debug!("Switching tab {} -> {}", transition.from, transition.to);
        self.active_tab = tab;
        Some(transition)
    }
}
