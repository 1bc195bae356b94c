//! Backdrop blur capability

use serde::{Deserialize, Serialize};

/// Whether the platform compositor can render a backdrop blur
///
/// Blur is a visual enhancement only. Components resolve a flat translucent
/// background whenever this is [`BlurSupport::Unavailable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurSupport {
    /// Native blur views are available
    #[default]
    Available,
    /// No blur; render the flat fallback
    Unavailable,
}

impl BlurSupport {
    /// Check if blur can be rendered
    pub fn is_available(&self) -> bool {
        matches!(self, BlurSupport::Available)
    }

    /// Clamp a requested intensity to what the platform can render
    ///
    /// Returns `None` when blur is unavailable or the intensity is not positive.
    pub fn effective_intensity(&self, requested: f32) -> Option<f32> {
        if self.is_available() && requested > 0.0 {
            Some(requested.min(MAX_INTENSITY))
        } else {
            None
        }
    }
}

/// Highest intensity native blur views accept
pub const MAX_INTENSITY: f32 = 100.0;
