//! Screen state for Inkr
//!
//! Each tab screen is a reducer over its own events. Reducers are pure
//! state machines that return [`Effect`]s; a [`ScreenHost`] mounts a
//! screen on a tokio runtime, fires haptics, runs deferred events and
//! forwards app actions.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod effect;
pub mod home;
pub mod host;
pub mod library;
pub mod memory;
pub mod screen;
pub mod settings;

pub use effect::{AppAction, Effect};
pub use home::{HomeEvent, HomeScreen};
pub use host::{ActionSink, HostError, ScreenHost};
pub use library::{LibraryEvent, LibraryScreen};
pub use memory::{ChatScreen, MemoryEvent, DEFAULT_REPLY_DELAY};
pub use screen::Screen;
pub use settings::{SettingsEvent, SettingsScreen};
