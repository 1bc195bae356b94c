//! Typography for Inkr
//!
//! Font sizes use the moderate scale so text grows more slowly than layout
//! when the base scale changes.

use serde::{Deserialize, Serialize};

use crate::tokens::{moderate_scale_by, DEFAULT_MODERATION};

// =============================================================================
// Font Size Scale
// =============================================================================

/// Unscaled font sizes in points
pub mod font_size {
    /// Extra small (10pt)
    pub const XS: f32 = 10.0;
    /// Small (12pt)
    pub const SM: f32 = 12.0;
    /// Medium (14pt)
    pub const MD: f32 = 14.0;
    /// Large (16pt)
    pub const LG: f32 = 16.0;
    /// Extra large (18pt)
    pub const XL: f32 = 18.0;
    /// 2x large (20pt)
    pub const XXL: f32 = 20.0;
    /// 3x large (24pt)
    pub const XXXL: f32 = 24.0;
    /// Screen titles (28pt)
    pub const TITLE: f32 = 28.0;
    /// Greeting / hero text (34pt)
    pub const HERO: f32 = 34.0;
}

/// Font weights
pub mod font_weight {
    /// Light (300)
    pub const LIGHT: u16 = 300;
    /// Regular (400)
    pub const REGULAR: u16 = 400;
    /// Medium (500)
    pub const MEDIUM: u16 = 500;
    /// Semibold (600)
    pub const SEMIBOLD: u16 = 600;
    /// Bold (700)
    pub const BOLD: u16 = 700;
}

/// Line height multipliers
pub mod line_height {
    /// Tight (1.2)
    pub const TIGHT: f32 = 1.2;
    /// Normal (1.4)
    pub const NORMAL: f32 = 1.4;
    /// Relaxed (1.6)
    pub const RELAXED: f32 = 1.6;
}

/// Type scale steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeStep {
    /// 10pt
    Xs,
    /// 12pt
    Sm,
    /// 14pt
    Md,
    /// 16pt
    Lg,
    /// 18pt
    Xl,
    /// 20pt
    Xxl,
    /// 24pt
    Xxxl,
    /// 28pt
    Title,
    /// 34pt
    Hero,
}

impl TypeStep {
    /// All steps, smallest first
    pub const ALL: [TypeStep; 9] = [
        TypeStep::Xs,
        TypeStep::Sm,
        TypeStep::Md,
        TypeStep::Lg,
        TypeStep::Xl,
        TypeStep::Xxl,
        TypeStep::Xxxl,
        TypeStep::Title,
        TypeStep::Hero,
    ];

    /// Unscaled size
    pub fn base(&self) -> f32 {
        match self {
            TypeStep::Xs => font_size::XS,
            TypeStep::Sm => font_size::SM,
            TypeStep::Md => font_size::MD,
            TypeStep::Lg => font_size::LG,
            TypeStep::Xl => font_size::XL,
            TypeStep::Xxl => font_size::XXL,
            TypeStep::Xxxl => font_size::XXXL,
            TypeStep::Title => font_size::TITLE,
            TypeStep::Hero => font_size::HERO,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// Moderately scaled font sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    sizes: [f32; 9],
}

impl TypeScale {
    /// Build the type scale for a base scale factor
    pub fn new(base_scale: f32) -> Self {
        Self {
            sizes: TypeStep::ALL
                .map(|step| moderate_scale_by(base_scale, step.base(), DEFAULT_MODERATION)),
        }
    }

    /// Size for a step
    pub fn size(&self, step: TypeStep) -> f32 {
        self.sizes[step.index()]
    }
}

// =============================================================================
// Text Style
// =============================================================================

/// A resolved text style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f32,
    /// Font weight (300 - 700)
    pub font_weight: u16,
    /// Line height multiplier
    pub line_height: f32,
    /// Text color
    pub color: String,
}

impl TextStyle {
    /// Create a new text style with normal line height
    pub fn new(font_size: f32, font_weight: u16, color: impl Into<String>) -> Self {
        Self {
            font_size,
            font_weight,
            line_height: line_height::NORMAL,
            color: color.into(),
        }
    }

    /// Set line height
    pub fn with_line_height(mut self, lh: f32) -> Self {
        self.line_height = lh;
        self
    }

    /// Set color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Line height in points
    pub fn line_height_px(&self) -> f32 {
        self.font_size * self.line_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_matches_base_sizes() {
        let scale = TypeScale::new(1.0);
        for step in TypeStep::ALL {
            assert_eq!(scale.size(step), step.base());
        }
    }

    #[test]
    fn test_type_scale_is_moderated() {
        let scale = TypeScale::new(2.0);
        // Half of the full 2x growth
        assert_eq!(scale.size(TypeStep::Md), 21.0);
        assert_eq!(scale.size(TypeStep::Hero), 51.0);
    }

    #[test]
    fn test_type_scale_monotonic() {
        let scale = TypeScale::new(1.0);
        let sizes: Vec<f32> = TypeStep::ALL.iter().map(|s| scale.size(*s)).collect();
        assert!(sizes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_font_weights_ordered() {
        assert!(font_weight::LIGHT < font_weight::REGULAR);
        assert!(font_weight::REGULAR < font_weight::MEDIUM);
        assert!(font_weight::MEDIUM < font_weight::SEMIBOLD);
        assert!(font_weight::SEMIBOLD < font_weight::BOLD);
    }

    #[test]
    fn test_text_style_builder() {
        let style = TextStyle::new(font_size::LG, font_weight::SEMIBOLD, "#2C2E33")
            .with_line_height(line_height::TIGHT);
        assert_eq!(style.font_size, 16.0);
        assert!((style.line_height_px() - 19.2).abs() < 1e-4);
        assert_eq!(style.with_color("#FFFFFF").color, "#FFFFFF");
    }
}
