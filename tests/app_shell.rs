//! App shell tests: configuration, mounting and tab switching

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use app_platform::{BlurSupport, HapticFeedback, Platform, RecordingHaptics};
use app_state::{AppAction, HomeEvent, MemoryEvent};
use inkr::{bootstrap, App, AppConfig, AppError, ConfigError, NavigationTab};
use tempfile::NamedTempFile;
use tokio::sync::mpsc;

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_app_from_config_file() {
    let file = write_config(
        r#"{"theme": "dark", "baseScale": 2.0, "replyDelayMs": 300, "initialTab": "memory"}"#,
    );
    let config = AppConfig::from_path(file.path()).unwrap();
    let app = App::new(config, Platform::headless()).unwrap();

    assert!(app.theme().is_dark());
    assert_eq!(app.theme().tokens.base_scale(), 2.0);
    assert_eq!(app.active_tab(), NavigationTab::Memory);
    assert_eq!(app.tab_bar().active(), Some(NavigationTab::Memory));
    let delay = app.screen().memory().unwrap().read(|chat| chat.reply_delay());
    assert_eq!(delay, Duration::from_millis(300));
}

#[tokio::test]
async fn test_invalid_config_file_is_rejected() {
    let file = write_config(r#"{"baseScale": -3}"#);
    let err = AppConfig::from_path(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[tokio::test]
async fn test_bootstrap_missing_file() {
    let err = bootstrap(Some(std::path::Path::new("/no/such/inkr.json")), Platform::headless())
        .unwrap_err();
    assert!(matches!(err, AppError::Config(ConfigError::Io(_))));
}

#[test]
fn test_app_needs_runtime() {
    let err = App::new(AppConfig::default(), Platform::headless()).unwrap_err();
    assert!(matches!(err, AppError::Host(_)));
}

#[tokio::test]
async fn test_blur_flag_narrows_platform() {
    let config = AppConfig {
        blur: false,
        ..AppConfig::default()
    };
    let platform = Platform::new(Arc::new(RecordingHaptics::new()), BlurSupport::Available);
    let app = App::new(config, platform).unwrap();
    assert_eq!(app.platform().blur, BlurSupport::Unavailable);
}

#[tokio::test]
async fn test_tab_switch_mounts_fresh_screen() {
    let haptics = Arc::new(RecordingHaptics::new());
    let platform = Platform::new(haptics.clone(), BlurSupport::Available);
    let mut app = App::new(AppConfig::default(), platform).unwrap();
    assert_eq!(app.screen().tab(), NavigationTab::Home);

    assert!(!app.press_tab(NavigationTab::Home).unwrap());
    assert!(app.press_tab(NavigationTab::Library).unwrap());
    assert_eq!(app.screen().tab(), NavigationTab::Library);
    assert!(app.screen().home().is_none());

    assert!(app.press_tab(NavigationTab::Settings).unwrap());
    assert!(app.screen().settings().is_some());
    assert!(haptics.events().iter().all(|e| *e == HapticFeedback::Selection));
}

/// Leaving the memory tab before the reply lands cancels the reply
#[tokio::test(start_paused = true)]
async fn test_leaving_memory_cancels_reply() {
    let config = AppConfig {
        initial_tab: NavigationTab::Memory,
        ..AppConfig::default()
    };
    let mut app = App::new(config, Platform::headless()).unwrap();
    {
        let chat = app.screen().memory().unwrap();
        chat.dispatch(MemoryEvent::InputChanged("Hello".to_string()));
        chat.dispatch(MemoryEvent::Send);
        assert_eq!(chat.pending_timers(), 1);
    }

    tokio::time::sleep(Duration::from_millis(500)).await;
    app.press_tab(NavigationTab::Home).unwrap();
    tokio::time::sleep(Duration::from_secs(5)).await;

    app.press_tab(NavigationTab::Memory).unwrap();
    let chat = app.screen().memory().unwrap();
    assert_eq!(chat.read(|c| c.messages().len()), 1);
    assert_eq!(chat.pending_timers(), 0);
}

#[tokio::test]
async fn test_action_sink_follows_tab_switches() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(AppConfig::default(), Platform::headless()).unwrap();
    app.set_action_sink(tx);

    app.screen().home().unwrap().dispatch(HomeEvent::VoiceMemo);
    app.press_tab(NavigationTab::Settings).unwrap();
    app.press_tab(NavigationTab::Home).unwrap();
    app.screen().home().unwrap().dispatch(HomeEvent::FabPressed);

    assert_eq!(rx.try_recv().unwrap(), AppAction::RecordVoiceMemo);
    assert_eq!(rx.try_recv().unwrap(), AppAction::CreateNote);
}
