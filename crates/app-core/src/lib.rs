//! Core domain logic for Inkr
//!
//! This crate contains the note and chat records, the built-in sample
//! content, library search, the settings table and date formatting.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod messages;
pub mod notes;
pub mod sample;
pub mod search;
pub mod settings;
pub mod time;

pub use messages::{prepare_outgoing, Message};
pub use notes::Note;
pub use search::{filter_notes, CategoryFilter};
pub use settings::{setting_sections, Preferences, SettingAction, SettingToggle};
