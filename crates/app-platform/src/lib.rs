//! Platform effects for Inkr
//!
//! This crate wraps the device collaborators the UI leans on but never
//! depends on for correctness: haptic feedback and backdrop blur. Both are
//! best-effort. A missing haptic engine or blur compositor degrades to no
//! vibration and a flat translucent background.
//!
//! # Modules
//!
//! - [`haptics`] - Haptic feedback kinds, the engine trait and stock engines
//! - [`blur`] - Blur capability reporting
//! - [`error`] - Platform error type

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod blur;
pub mod error;
pub mod haptics;

use std::sync::Arc;

pub use blur::BlurSupport;
pub use error::{PlatformError, Result};
pub use haptics::{
    fire_haptic, HapticEngine, HapticFeedback, ImpactStyle, NoopHaptics, RecordingHaptics,
    UnsupportedHaptics,
};

/// Handles to the platform collaborators a mounted screen may use
#[derive(Clone)]
pub struct Platform {
    /// Haptic engine
    pub haptics: Arc<dyn HapticEngine>,
    /// Whether backdrop blur can be rendered
    pub blur: BlurSupport,
}

impl Platform {
    /// Create a platform bundle
    pub fn new(haptics: Arc<dyn HapticEngine>, blur: BlurSupport) -> Self {
        Self { haptics, blur }
    }

    /// A platform with no haptics and no blur (headless hosts, tests)
    pub fn headless() -> Self {
        Self {
            haptics: Arc::new(NoopHaptics),
            blur: BlurSupport::Unavailable,
        }
    }

    /// Fire a haptic pulse, ignoring failures
    pub fn pulse(&self, feedback: HapticFeedback) {
        fire_haptic(self.haptics.as_ref(), feedback);
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::headless()
    }
}

impl std::fmt::Debug for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Platform")
            .field("blur", &self.blur)
            .finish_non_exhaustive()
    }
}
