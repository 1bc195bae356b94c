//! Runtime host for a mounted screen
//!
//! The host owns the screen state, performs the effects its reducer returns
//! and owns the timers of deferred events. Dropping the host unmounts the
//! screen and aborts every pending timer.

use std::sync::{Arc, Weak};
use std::time::Duration;

use app_platform::Platform;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::effect::{AppAction, Effect};
use crate::screen::Screen;

/// Host errors
#[derive(Debug, Error)]
pub enum HostError {
    /// No tokio runtime to run deferred events on
    #[error("No tokio runtime available: {0}")]
    NoRuntime(String),
}

/// Result type for host operations
pub type Result<T> = std::result::Result<T, HostError>;

/// Sender half of the app action channel
pub type ActionSink = mpsc::UnboundedSender<AppAction>;

struct HostInner<S: Screen> {
    screen: Mutex<S>,
    platform: Platform,
    runtime: Handle,
    timers: Mutex<Vec<JoinHandle<()>>>,
    actions: Mutex<Option<ActionSink>>,
}

impl<S: Screen> HostInner<S> {
    fn dispatch(self: &Arc<Self>, event: S::Event) {
        let effects = {
            let mut screen = self.screen.lock();
            tracing::debug!("{} <- {:?}", screen.name(), event);
            screen.reduce(event)
        };
        self.apply(effects);
    }

    fn apply(self: &Arc<Self>, effects: Vec<Effect<S::Event>>) {
        for effect in effects {
            match effect {
                Effect::Haptic(feedback) => self.platform.pulse(feedback),
                Effect::Defer { delay, event } => self.schedule(delay, event),
                Effect::Action(action) => self.emit(action),
            }
        }
    }

    fn schedule(self: &Arc<Self>, delay: Duration, event: S::Event) {
        let host: Weak<Self> = Arc::downgrade(self);
        let handle = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(host) = host.upgrade() {
                host.dispatch(event);
            }
        });

        let mut timers = self.timers.lock();
        timers.retain(|timer| !timer.is_finished());
        timers.push(handle);
    }

    fn emit(&self, action: AppAction) {
        tracing::info!("App action: {:?}", action);
        if let Some(sink) = self.actions.lock().as_ref() {
            if sink.send(action).is_err() {
                tracing::debug!("Action receiver dropped");
            }
        }
    }

    fn abort_timers(&self) {
        for timer in self.timers.lock().drain(..) {
            timer.abort();
        }
    }
}

/// A mounted screen
///
/// # Example
///
/// ```no_run
/// use app_platform::Platform;
/// use app_state::host::ScreenHost;
/// use app_state::memory::{ChatScreen, MemoryEvent};
///
/// #[tokio::main]
/// async fn main() {
///     let host = ScreenHost::new(ChatScreen::default(), Platform::headless()).unwrap();
///     host.dispatch(MemoryEvent::InputChanged("Buy milk".into()));
///     host.dispatch(MemoryEvent::Send);
///     assert_eq!(host.read(|chat| chat.messages().len()), 2);
/// }
/// ```
pub struct ScreenHost<S: Screen> {
    inner: Arc<HostInner<S>>,
}

impl<S: Screen> ScreenHost<S> {
    /// Mount a screen on the current tokio runtime
    pub fn new(screen: S, platform: Platform) -> Result<Self> {
        let runtime = Handle::try_current().map_err(|e| HostError::NoRuntime(e.to_string()))?;
        Ok(Self::with_runtime(screen, platform, runtime))
    }

    /// Mount a screen on an explicit runtime
    pub fn with_runtime(screen: S, platform: Platform, runtime: Handle) -> Self {
        tracing::debug!("Mounting {}", screen.name());
        Self {
            inner: Arc::new(HostInner {
                screen: Mutex::new(screen),
                platform,
                runtime,
                timers: Mutex::new(Vec::new()),
                actions: Mutex::new(None),
            }),
        }
    }

    /// Forward emitted actions to a channel
    pub fn set_action_sink(&self, sink: ActionSink) {
        *self.inner.actions.lock() = Some(sink);
    }

    /// Deliver an event to the screen and perform its effects
    pub fn dispatch(&self, event: S::Event) {
        self.inner.dispatch(event);
    }

    /// Read the screen state
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.inner.screen.lock())
    }

    /// Timers that have not fired yet
    pub fn pending_timers(&self) -> usize {
        self.inner
            .timers
            .lock()
            .iter()
            .filter(|timer| !timer.is_finished())
            .count()
    }

    /// Platform handles of this host
    pub fn platform(&self) -> &Platform {
        &self.inner.platform
    }

    /// Unmount and hand back the screen state
    ///
    /// Returns `None` if a timer is delivering an event at this very moment.
    pub fn unmount(self) -> Option<S> {
        let inner = Arc::clone(&self.inner);
        drop(self);
        Arc::try_unwrap(inner)
            .ok()
            .map(|inner| inner.screen.into_inner())
    }
}

impl<S: Screen> Drop for ScreenHost<S> {
    fn drop(&mut self) {
        let name = self.inner.screen.lock().name();
        tracing::debug!("Unmounting {}", name);
        self.inner.abort_timers();
    }
}

impl<S: Screen> std::fmt::Debug for ScreenHost<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenHost")
            .field("screen", &self.inner.screen.lock().name())
            .field("pending_timers", &self.pending_timers())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::home::{HomeEvent, HomeScreen};
    use crate::memory::{ChatScreen, MemoryEvent};
    use app_platform::{HapticFeedback, RecordingHaptics, BlurSupport};

    fn recording() -> (Arc<RecordingHaptics>, Platform) {
        let haptics = Arc::new(RecordingHaptics::new());
        let platform = Platform::new(haptics.clone(), BlurSupport::Unavailable);
        (haptics, platform)
    }

    #[test]
    fn test_new_without_runtime_fails() {
        let result = ScreenHost::new(HomeScreen::default(), Platform::headless());
        assert!(matches!(result, Err(HostError::NoRuntime(_))));
    }

    #[tokio::test]
    async fn test_haptics_and_actions_are_performed() {
        let (haptics, platform) = recording();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let host = ScreenHost::new(HomeScreen::default(), platform).unwrap();
        host.set_action_sink(tx);

        host.dispatch(HomeEvent::NewNote);

        assert_eq!(haptics.events(), vec![HapticFeedback::MEDIUM]);
        assert_eq!(rx.try_recv().unwrap(), AppAction::CreateNote);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deferred_reply_arrives_after_delay() {
        let host = ScreenHost::new(ChatScreen::default(), Platform::headless()).unwrap();
        host.dispatch(MemoryEvent::InputChanged("Hello".into()));
        host.dispatch(MemoryEvent::Send);
        assert_eq!(host.pending_timers(), 1);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        assert_eq!(host.read(|chat| chat.messages().len()), 2);

        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(host.read(|chat| chat.messages().len()), 3);
        assert!(!host.read(|chat| chat.is_composing()));
        assert_eq!(host.pending_timers(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unmount_cancels_reply() {
        let host = ScreenHost::new(ChatScreen::default(), Platform::headless()).unwrap();
        host.dispatch(MemoryEvent::InputChanged("Hello".into()));
        host.dispatch(MemoryEvent::Send);

        let chat = host.unmount().unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;

        assert_eq!(chat.messages().len(), 2);
        assert!(chat.is_composing());
    }
}
