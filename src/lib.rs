//! Inkr
//!
//! A note-taking and memory companion app with a frosted-glass look. This
//! crate is the app shell: it loads configuration, installs logging, picks
//! the theme and keeps exactly one tab screen mounted at a time.
//!
//! # Crates
//!
//! - [`app_ui`] - design tokens, themes, glass components and navigation
//! - [`app_state`] - screen reducers and the runtime host
//! - [`app_core`] - notes, chat messages, search and settings data
//! - [`app_platform`] - haptics and blur capability
//!
//! # Example
//!
//! ```no_run
//! use app_platform::Platform;
//! use inkr::{App, AppConfig};
//! use inkr::NavigationTab;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), inkr::AppError> {
//!     let mut app = App::new(AppConfig::default(), Platform::headless())?;
//!     app.press_tab(NavigationTab::Memory)?;
//!     assert_eq!(app.active_tab(), NavigationTab::Memory);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod logging;

use std::path::Path;

use app_platform::{BlurSupport, Platform};
use app_state::{
    ActionSink, ChatScreen, HomeScreen, HostError, LibraryScreen, ScreenHost, SettingsScreen,
};
use app_ui::{get_theme, GlassTabBar, NavigationState, Theme};
use thiserror::Error;

pub use app_ui::NavigationTab;
pub use config::{AppConfig, ConfigError};
pub use logging::{init_logging, LoggingError};

/// App shell errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A screen could not be mounted
    #[error(transparent)]
    Host(#[from] HostError),

    /// Logging could not be set up
    #[error(transparent)]
    Logging(#[from] LoggingError),
}

/// Result type for the app shell
pub type Result<T> = std::result::Result<T, AppError>;

/// The screen currently mounted under the tab bar
#[derive(Debug)]
pub enum MountedScreen {
    /// Dashboard
    Home(ScreenHost<HomeScreen>),
    /// Memory chat
    Memory(ScreenHost<ChatScreen>),
    /// Note library
    Library(ScreenHost<LibraryScreen>),
    /// Settings
    Settings(ScreenHost<SettingsScreen>),
}

impl MountedScreen {
    fn mount(tab: NavigationTab, config: &AppConfig, platform: &Platform) -> Result<Self> {
        let platform = platform.clone();
        let screen = match tab {
            NavigationTab::Home => MountedScreen::Home(ScreenHost::new(HomeScreen::default(), platform)?),
            NavigationTab::Memory => MountedScreen::Memory(ScreenHost::new(
                ChatScreen::new(config.reply_delay()),
                platform,
            )?),
            NavigationTab::Library => {
                MountedScreen::Library(ScreenHost::new(LibraryScreen::default(), platform)?)
            }
            NavigationTab::Settings => {
                MountedScreen::Settings(ScreenHost::new(SettingsScreen::default(), platform)?)
            }
        };
        Ok(screen)
    }

    fn set_action_sink(&self, sink: ActionSink) {
        match self {
            MountedScreen::Home(host) => host.set_action_sink(sink),
            MountedScreen::Memory(host) => host.set_action_sink(sink),
            MountedScreen::Library(host) => host.set_action_sink(sink),
            MountedScreen::Settings(host) => host.set_action_sink(sink),
        }
    }

    /// Tab this screen belongs to
    pub fn tab(&self) -> NavigationTab {
        match self {
            MountedScreen::Home(_) => NavigationTab::Home,
            MountedScreen::Memory(_) => NavigationTab::Memory,
            MountedScreen::Library(_) => NavigationTab::Library,
            MountedScreen::Settings(_) => NavigationTab::Settings,
        }
    }

    /// The home host, if home is mounted
    pub fn home(&self) -> Option<&ScreenHost<HomeScreen>> {
        match self {
            MountedScreen::Home(host) => Some(host),
            _ => None,
        }
    }

    /// The chat host, if memory is mounted
    pub fn memory(&self) -> Option<&ScreenHost<ChatScreen>> {
        match self {
            MountedScreen::Memory(host) => Some(host),
            _ => None,
        }
    }

    /// The library host, if library is mounted
    pub fn library(&self) -> Option<&ScreenHost<LibraryScreen>> {
        match self {
            MountedScreen::Library(host) => Some(host),
            _ => None,
        }
    }

    /// The settings host, if settings is mounted
    pub fn settings(&self) -> Option<&ScreenHost<SettingsScreen>> {
        match self {
            MountedScreen::Settings(host) => Some(host),
            _ => None,
        }
    }
}

/// The app shell
///
/// Must be created inside a tokio runtime; mounted screens schedule their
/// deferred events on it.
#[derive(Debug)]
pub struct App {
    config: AppConfig,
    theme: Theme,
    navigation: NavigationState,
    tab_bar: GlassTabBar,
    platform: Platform,
    actions: Option<ActionSink>,
    screen: MountedScreen,
}

impl App {
    /// Build the shell and mount the initial tab
    ///
    /// The platform's blur support is narrowed by the `blur` config flag.
    pub fn new(config: AppConfig, mut platform: Platform) -> Result<Self> {
        config.validate()?;
        if !config.blur {
            platform.blur = BlurSupport::Unavailable;
        }
        let theme = get_theme(config.theme).with_base_scale(config.base_scale);
        let initial = config.initial_tab;
        let screen = MountedScreen::mount(initial, &config, &platform)?;
        tracing::info!("Inkr started on {} with the {} theme", initial, config.theme);

        Ok(Self {
            theme,
            navigation: NavigationState::new(initial),
            tab_bar: GlassTabBar::new(initial),
            platform,
            actions: None,
            screen,
            config,
        })
    }

    /// Forward app actions from every mounted screen to a channel
    pub fn set_action_sink(&mut self, sink: ActionSink) {
        self.screen.set_action_sink(sink.clone());
        self.actions = Some(sink);
    }

    /// Handle a tab bar press
    ///
    /// Fires the selection haptic, then unmounts the current screen and
    /// mounts a fresh one for `tab`. Pending timers of the old screen are
    /// cancelled. Returns `false` when `tab` was already active.
    pub fn press_tab(&mut self, tab: NavigationTab) -> Result<bool> {
        let Some(tab) = self.tab_bar.press(tab, self.platform.haptics.as_ref()) else {
            return Ok(false);
        };
        let Some(transition) = self.navigation.switch_tab(tab) else {
            return Ok(false);
        };

        let screen = MountedScreen::mount(transition.to, &self.config, &self.platform)?;
        if let Some(sink) = &self.actions {
            screen.set_action_sink(sink.clone());
        }
        self.screen = screen;
        self.tab_bar.set_active(transition.to);
        tracing::info!("Tab {} -> {}", transition.from, transition.to);
        Ok(true)
    }

    /// Active tab
    pub fn active_tab(&self) -> NavigationTab {
        self.navigation.active_tab
    }

    /// The mounted screen
    pub fn screen(&self) -> &MountedScreen {
        &self.screen
    }

    /// Active theme
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Tab bar state
    pub fn tab_bar(&self) -> &GlassTabBar {
        &self.tab_bar
    }

    /// Loaded configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Platform handles
    pub fn platform(&self) -> &Platform {
        &self.platform
    }
}

/// Load config, install logging and start the shell
pub fn bootstrap(config_path: Option<&Path>, platform: Platform) -> Result<App> {
    let config = AppConfig::load(config_path)?;
    init_logging(&config.log_filter)?;
    App::new(config, platform)
}
