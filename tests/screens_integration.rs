//! Screen integration tests
//!
//! Drives the tab screens through their hosts the way the app shell does,
//! checking messages, filters, prompts and the haptics that reach the
//! platform.

use std::sync::Arc;
use std::time::Duration;

use app_core::settings::{SettingAction, SettingToggle};
use app_platform::{
    BlurSupport, HapticEngine, HapticFeedback, ImpactStyle, Platform, PlatformError,
    RecordingHaptics,
};
use app_state::{
    AppAction, ChatScreen, HomeEvent, HomeScreen, LibraryEvent, LibraryScreen, MemoryEvent,
    ScreenHost, SettingsEvent, SettingsScreen,
};
use app_ui::{moderate_scale, FloatingActionButton, GlassButton, GlassCard, GlassTabBar, Theme};
use tokio::sync::mpsc;

mockall::mock! {
    Engine {}
    impl HapticEngine for Engine {
        fn trigger(&self, feedback: HapticFeedback) -> Result<(), PlatformError>;
    }
}

fn recording_platform() -> (Arc<RecordingHaptics>, Platform) {
    let haptics = Arc::new(RecordingHaptics::new());
    let platform = Platform::new(haptics.clone(), BlurSupport::Available);
    (haptics, platform)
}

/// Sending "Hello" yields one user message now and one reply after the delay
#[tokio::test(start_paused = true)]
async fn test_chat_reply_after_delay() {
    let (haptics, platform) = recording_platform();
    let host = ScreenHost::new(ChatScreen::default(), platform).unwrap();

    host.dispatch(MemoryEvent::InputChanged("Hello".to_string()));
    host.dispatch(MemoryEvent::Send);

    assert_eq!(haptics.events(), vec![HapticFeedback::LIGHT]);
    host.read(|chat| {
        assert_eq!(chat.messages().len(), 2);
        assert_eq!(chat.messages()[1].text, "Hello");
        assert!(chat.messages()[1].is_user);
        assert_eq!(chat.input(), "");
        assert!(chat.is_composing());
    });

    tokio::time::advance(Duration::from_millis(1499)).await;
    tokio::task::yield_now().await;
    assert_eq!(host.read(|chat| chat.messages().len()), 2);

    tokio::time::sleep(Duration::from_millis(10)).await;
    host.read(|chat| {
        assert_eq!(chat.messages().len(), 3);
        assert!(!chat.messages()[2].is_user);
        assert!(!chat.is_composing());
    });
}

/// Blank input appends nothing, pulses nothing and schedules nothing
#[tokio::test(start_paused = true)]
async fn test_chat_blank_input_is_ignored() {
    let (haptics, platform) = recording_platform();
    let host = ScreenHost::new(ChatScreen::default(), platform).unwrap();

    for input in ["", "   ", "\n\t "] {
        host.dispatch(MemoryEvent::InputChanged(input.to_string()));
        host.dispatch(MemoryEvent::Send);
    }

    assert_eq!(host.read(|chat| chat.messages().len()), 1);
    assert_eq!(haptics.count(), 0);
    assert_eq!(host.pending_timers(), 0);
}

/// Two quick sends get two replies, each after its own delay
#[tokio::test(start_paused = true)]
async fn test_chat_overlapping_sends() {
    let host = ScreenHost::new(ChatScreen::new(Duration::from_millis(1500)), Platform::headless())
        .unwrap();

    host.dispatch(MemoryEvent::InputChanged("first".to_string()));
    host.dispatch(MemoryEvent::Send);
    tokio::time::sleep(Duration::from_millis(500)).await;
    host.dispatch(MemoryEvent::InputChanged("second".to_string()));
    host.dispatch(MemoryEvent::Send);

    tokio::time::sleep(Duration::from_millis(1100)).await;
    host.read(|chat| {
        assert_eq!(chat.messages().len(), 4);
        assert!(chat.is_composing());
    });

    tokio::time::sleep(Duration::from_millis(500)).await;
    host.read(|chat| {
        assert_eq!(chat.messages().len(), 5);
        assert!(!chat.is_composing());
    });
}

#[tokio::test]
async fn test_library_search_and_category() {
    let (haptics, platform) = recording_platform();
    let host = ScreenHost::new(LibraryScreen::default(), platform).unwrap();

    host.dispatch(LibraryEvent::SearchChanged("recipe".to_string()));
    let ids: Vec<String> = host.read(|lib| lib.visible_notes().iter().map(|n| n.id.clone()).collect());
    assert_eq!(ids, vec!["3"]);

    host.dispatch(LibraryEvent::CategorySelected("Work".to_string()));
    assert!(host.read(|lib| lib.empty_state().is_some()));

    host.dispatch(LibraryEvent::SearchChanged(String::new()));
    assert_eq!(host.read(|lib| lib.count_label()), "1 notes");

    assert!(haptics.events().is_empty());
}

#[tokio::test]
async fn test_settings_toggle_flips_one_flag() {
    let host = ScreenHost::new(SettingsScreen::default(), Platform::headless()).unwrap();
    host.dispatch(SettingsEvent::Toggle(SettingToggle::Notifications));

    let prefs = host.read(|s| *s.preferences());
    assert!(!prefs.notifications);
    assert!(!prefs.dark_mode);
    assert!(prefs.auto_sync);
    assert!(prefs.haptics);
}

#[tokio::test]
async fn test_settings_toggle_haptic_respects_preference() {
    let (haptics, platform) = recording_platform();
    let host = ScreenHost::new(SettingsScreen::default(), platform).unwrap();

    host.dispatch(SettingsEvent::Toggle(SettingToggle::Haptics));
    host.dispatch(SettingsEvent::Toggle(SettingToggle::Notifications));

    assert_eq!(haptics.events(), vec![HapticFeedback::LIGHT]);
}

/// Delete all: cancel changes nothing, confirm emits the action exactly once
#[tokio::test]
async fn test_settings_delete_all_flow() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let host = ScreenHost::new(SettingsScreen::default(), Platform::headless()).unwrap();
    host.set_action_sink(tx);

    host.dispatch(SettingsEvent::Pressed(SettingAction::DeleteAllData));
    assert!(host.read(|s| s.confirm().is_some()));
    host.dispatch(SettingsEvent::Cancel);
    assert!(host.read(|s| s.confirm().is_none()));
    assert!(rx.try_recv().is_err());

    host.dispatch(SettingsEvent::Pressed(SettingAction::DeleteAllData));
    host.dispatch(SettingsEvent::Confirm);
    host.dispatch(SettingsEvent::Confirm);

    assert_eq!(rx.try_recv().unwrap(), AppAction::DeleteAllData);
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_home_actions_reach_sink() {
    let (haptics, platform) = recording_platform();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let host = ScreenHost::new(HomeScreen::default(), platform).unwrap();
    host.set_action_sink(tx);

    host.dispatch(HomeEvent::NewNote);
    host.dispatch(HomeEvent::VoiceMemo);
    host.dispatch(HomeEvent::NotePressed("1".to_string()));

    assert_eq!(
        haptics.events(),
        vec![HapticFeedback::MEDIUM, HapticFeedback::Selection]
    );
    assert_eq!(rx.try_recv().unwrap(), AppAction::CreateNote);
    assert_eq!(rx.try_recv().unwrap(), AppAction::RecordVoiceMemo);
    assert_eq!(rx.try_recv().unwrap(), AppAction::OpenNote("1".to_string()));
}

/// A FAB tap pulses once, from the button, and still creates a note
#[tokio::test]
async fn test_fab_tap_pulses_heavy_once() {
    let (haptics, platform) = recording_platform();
    let (tx, mut rx) = mpsc::unbounded_channel();
    let host = ScreenHost::new(HomeScreen::default(), platform).unwrap();
    host.set_action_sink(tx);

    assert!(host.read(|home| home.fab().activate(haptics.as_ref()).is_some()));
    host.dispatch(HomeEvent::FabPressed);

    assert_eq!(haptics.events(), vec![HapticFeedback::HEAVY]);
    assert_eq!(rx.try_recv().unwrap(), AppAction::CreateNote);
    assert!(rx.try_recv().is_err());
}

/// A category tap pulses medium from the button and nowhere else
#[tokio::test]
async fn test_category_tap_pulses_medium_once() {
    let (haptics, platform) = recording_platform();
    let host = ScreenHost::new(LibraryScreen::default(), platform).unwrap();

    let travel = host.read(|lib| {
        lib.category_buttons()
            .into_iter()
            .find(|button| button.title == "Travel")
    });
    assert!(travel.unwrap().activate(haptics.as_ref()).is_some());
    host.dispatch(LibraryEvent::CategorySelected("Travel".to_string()));

    assert_eq!(haptics.events(), vec![HapticFeedback::MEDIUM]);
}

#[test]
fn test_disabled_button_fires_nothing() {
    let mut engine = MockEngine::new();
    engine.expect_trigger().times(0);

    let button = GlassButton::new("Send", "send").disabled(true);
    assert!(button.activate(&engine).is_none());
}

#[test]
fn test_component_haptic_tiers() {
    let recorder = RecordingHaptics::new();
    GlassCard::new("card").on_press("open").activate(&recorder);
    GlassButton::new("Go", "go").activate(&recorder);
    FloatingActionButton::new("add").activate(&recorder);

    let tiers: Vec<ImpactStyle> = recorder.events().iter().filter_map(|e| e.impact()).collect();
    assert_eq!(tiers, vec![ImpactStyle::Light, ImpactStyle::Medium, ImpactStyle::Heavy]);
    assert!(ImpactStyle::Light < ImpactStyle::Medium && ImpactStyle::Medium < ImpactStyle::Heavy);
}

#[test]
fn test_entrance_animations_converge() {
    let theme = Theme::default();
    let animations = [
        GlassCard::new("card").entrance(&theme),
        FloatingActionButton::new("add").entrance(),
        GlassTabBar::new(app_ui::NavigationTab::Home).entrance(),
    ];
    for animation in animations {
        let end = animation.settle_time();
        assert_eq!(animation.sample(end), animation.to);
        assert_eq!(animation.sample(end + Duration::from_secs(1)), animation.to);
    }
}

#[test]
fn test_moderate_scale_at_base() {
    for size in [4.0_f32, 16.0, 80.0] {
        assert_eq!(moderate_scale(size, 0.0), size);
        assert!((moderate_scale(size, 1.0) - size * app_ui::BASE_SCALE).abs() < 1e-4);
    }
}
