//! Haptic feedback
//!
//! Interactions map to a fixed intensity ladder: passive card taps use a
//! light impact, ordinary buttons a medium impact, and the floating action
//! button a heavy impact. List selection and tab changes use the selection
//! tick. The ordering `Light < Medium < Heavy` is part of the contract.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, Result};

/// Impact strength, ordered from weakest to strongest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    /// Card taps and toggle switches
    Light,
    /// Buttons
    Medium,
    /// Floating action button
    Heavy,
}

/// A discrete haptic cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "style", rename_all = "lowercase")]
pub enum HapticFeedback {
    /// Impact pulse of the given strength
    Impact(ImpactStyle),
    /// Selection tick (list items, tabs)
    Selection,
}

impl HapticFeedback {
    /// Light impact
    pub const LIGHT: HapticFeedback = HapticFeedback::Impact(ImpactStyle::Light);
    /// Medium impact
    pub const MEDIUM: HapticFeedback = HapticFeedback::Impact(ImpactStyle::Medium);
    /// Heavy impact
    pub const HEAVY: HapticFeedback = HapticFeedback::Impact(ImpactStyle::Heavy);

    /// Impact strength, if this is an impact
    pub fn impact(&self) -> Option<ImpactStyle> {
        match self {
            HapticFeedback::Impact(style) => Some(*style),
            HapticFeedback::Selection => None,
        }
    }
}

/// A device haptic engine
#[cfg_attr(test, mockall::automock)]
pub trait HapticEngine: Send + Sync {
    /// Deliver a haptic cue
    fn trigger(&self, feedback: HapticFeedback) -> Result<()>;
}

/// Deliver a cue without letting a failure reach the caller
///
/// Haptics are best-effort. Failures are logged at debug level and dropped.
pub fn fire_haptic(engine: &dyn HapticEngine, feedback: HapticFeedback) {
    if let Err(e) = engine.trigger(feedback) {
        tracing::debug!("Haptic {:?} not delivered: {}", feedback, e);
    }
}

/// Engine that accepts every cue and does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticEngine for NoopHaptics {
    fn trigger(&self, _feedback: HapticFeedback) -> Result<()> {
        Ok(())
    }
}

/// Engine for devices without a vibration motor
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedHaptics;

impl HapticEngine for UnsupportedHaptics {
    fn trigger(&self, feedback: HapticFeedback) -> Result<()> {
        Err(PlatformError::Unsupported(format!("{:?}", feedback)))
    }
}

/// Engine that records every delivered cue in order
///
/// Used by hosts that mirror haptics into logs and by tests asserting the
/// haptic contract.
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    events: Mutex<Vec<HapticFeedback>>,
}

impl RecordingHaptics {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of delivered cues
    pub fn events(&self) -> Vec<HapticFeedback> {
        self.events.lock().clone()
    }

    /// Number of delivered cues
    pub fn count(&self) -> usize {
        self.events.lock().len()
    }

    /// Forget all recorded cues
    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl HapticEngine for RecordingHaptics {
    fn trigger(&self, feedback: HapticFeedback) -> Result<()> {
        self.events.lock().push(feedback);
        Ok(())
    }
}
