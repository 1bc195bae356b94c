//! Design tokens for Inkr
//!
//! Every size in the registry is derived from one base scale factor and a
//! small set of literal base values. The literals live in the `spacing`,
//! `radius`, `dimensions` and `layout` modules; [`DesignTokens`] applies the
//! scale once at construction and is never mutated afterwards.
//!
//! Animation durations and blur intensities are not scaled.

use serde::{Deserialize, Serialize};

use crate::theme::Color;
use crate::typography::{TypeScale, TypeStep};

// =============================================================================
// Scaling
// =============================================================================

/// Default base scale factor
pub const BASE_SCALE: f32 = 1.0;

/// Default moderation factor for [`moderate_scale`]
pub const DEFAULT_MODERATION: f32 = 0.5;

/// Scale a size by an explicit base factor
pub fn scale_by(base: f32, size: f32) -> f32 {
    size * base
}

/// Scale a size by [`BASE_SCALE`]
pub fn scale(size: f32) -> f32 {
    scale_by(BASE_SCALE, size)
}

/// Moderately scale a size by an explicit base factor
///
/// `size + (size * base - size) * factor`. A factor of 0 leaves the size
/// untouched, a factor of 1 applies the full base scale.
pub fn moderate_scale_by(base: f32, size: f32, factor: f32) -> f32 {
    size + (scale_by(base, size) - size) * factor
}

/// Moderately scale a size by [`BASE_SCALE`]
pub fn moderate_scale(size: f32, factor: f32) -> f32 {
    moderate_scale_by(BASE_SCALE, size, factor)
}

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing base values in points (4pt grid)
pub mod spacing {
    /// 4pt
    pub const XS: f32 = 4.0;
    /// 8pt
    pub const SM: f32 = 8.0;
    /// 12pt
    pub const MD: f32 = 12.0;
    /// 16pt
    pub const LG: f32 = 16.0;
    /// 20pt
    pub const XL: f32 = 20.0;
    /// 24pt
    pub const XXL: f32 = 24.0;
    /// 32pt
    pub const XXXL: f32 = 32.0;
}

/// Spacing steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingStep {
    /// 4pt
    Xs,
    /// 8pt
    Sm,
    /// 12pt
    Md,
    /// 16pt
    Lg,
    /// 20pt
    Xl,
    /// 24pt
    Xxl,
    /// 32pt
    Xxxl,
}

impl SpacingStep {
    /// Unscaled base value
    pub fn base(&self) -> f32 {
        match self {
            SpacingStep::Xs => spacing::XS,
            SpacingStep::Sm => spacing::SM,
            SpacingStep::Md => spacing::MD,
            SpacingStep::Lg => spacing::LG,
            SpacingStep::Xl => spacing::XL,
            SpacingStep::Xxl => spacing::XXL,
            SpacingStep::Xxxl => spacing::XXXL,
        }
    }

    /// All steps, smallest first
    pub fn all() -> [SpacingStep; 7] {
        [
            SpacingStep::Xs,
            SpacingStep::Sm,
            SpacingStep::Md,
            SpacingStep::Lg,
            SpacingStep::Xl,
            SpacingStep::Xxl,
            SpacingStep::Xxxl,
        ]
    }

    /// Look up a step by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "xs" => Some(SpacingStep::Xs),
            "sm" => Some(SpacingStep::Sm),
            "md" => Some(SpacingStep::Md),
            "lg" => Some(SpacingStep::Lg),
            "xl" => Some(SpacingStep::Xl),
            "xxl" => Some(SpacingStep::Xxl),
            "xxxl" => Some(SpacingStep::Xxxl),
            _ => None,
        }
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius base values
pub mod radius {
    /// Extra small radius (4pt)
    pub const XS: f32 = 4.0;
    /// Small radius (8pt)
    pub const SM: f32 = 8.0;
    /// Medium radius (12pt)
    pub const MD: f32 = 12.0;
    /// Large radius (16pt)
    pub const LG: f32 = 16.0;
    /// Extra large radius (20pt)
    pub const XL: f32 = 20.0;
    /// 2x large radius (24pt)
    pub const XXL: f32 = 24.0;
    /// Pill shape
    pub const PILL: f32 = 50.0;
    /// Perfect circle
    pub const CIRCLE: f32 = 999.0;

    /// Glass component radii
    pub mod glass {
        /// Glass card
        pub const CARD: f32 = 16.0;
        /// Glass button
        pub const BUTTON: f32 = 12.0;
        /// Glass input
        pub const INPUT: f32 = 14.0;
        /// Glass widget
        pub const WIDGET: f32 = 20.0;
    }
}

/// Radius steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusStep {
    /// 4pt
    Xs,
    /// 8pt
    Sm,
    /// 12pt
    Md,
    /// 16pt
    Lg,
    /// 20pt
    Xl,
    /// 24pt
    Xxl,
    /// Pill
    Pill,
    /// Circle
    Circle,
    /// Glass card
    GlassCard,
    /// Glass button
    GlassButton,
    /// Glass input
    GlassInput,
    /// Glass widget
    GlassWidget,
}

impl RadiusStep {
    /// Unscaled base value
    pub fn base(&self) -> f32 {
        match self {
            RadiusStep::Xs => radius::XS,
            RadiusStep::Sm => radius::SM,
            RadiusStep::Md => radius::MD,
            RadiusStep::Lg => radius::LG,
            RadiusStep::Xl => radius::XL,
            RadiusStep::Xxl => radius::XXL,
            RadiusStep::Pill => radius::PILL,
            RadiusStep::Circle => radius::CIRCLE,
            RadiusStep::GlassCard => radius::glass::CARD,
            RadiusStep::GlassButton => radius::glass::BUTTON,
            RadiusStep::GlassInput => radius::glass::INPUT,
            RadiusStep::GlassWidget => radius::glass::WIDGET,
        }
    }
}

// =============================================================================
// Shadow Tokens
// =============================================================================

/// Shadow definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Shadow color
    pub color: Color,
    /// Horizontal offset
    pub offset_x: f32,
    /// Vertical offset
    pub offset_y: f32,
    /// Shadow opacity (0.0 - 1.0)
    pub opacity: f32,
    /// Blur radius
    pub radius: f32,
    /// Android elevation
    pub elevation: u32,
}

impl Shadow {
    /// Create a new shadow with no horizontal offset
    pub fn new(color: &str, offset_y: f32, opacity: f32, radius: f32, elevation: u32) -> Self {
        Self {
            color: color.to_string(),
            offset_x: 0.0,
            offset_y,
            opacity,
            radius,
            elevation,
        }
    }

    /// Scale offsets and radius, leaving color, opacity and elevation
    fn scaled(mut self, base: f32) -> Self {
        self.offset_x = scale_by(base, self.offset_x);
        self.offset_y = scale_by(base, self.offset_y);
        self.radius = scale_by(base, self.radius);
        self
    }
}

/// Shadow presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadowPreset {
    /// Subtle shadow for inputs and ghost buttons
    GlassLight,
    /// Default card shadow
    GlassMedium,
    /// Floating chrome (tab bar, FAB)
    GlassDeep,
    /// Orange accent glow
    OrangeGlow,
    /// Button shadow
    Button,
}

/// Unscaled shadow presets
pub mod shadows {
    use super::Shadow;
    use crate::theme::colors;

    /// Light glass shadow
    pub fn glass_light() -> Shadow {
        Shadow::new(colors::system::SHADOW, 2.0, 0.08, 8.0, 2)
    }

    /// Medium glass shadow
    pub fn glass_medium() -> Shadow {
        Shadow::new(colors::system::SHADOW, 4.0, 0.12, 12.0, 4)
    }

    /// Deep glass shadow
    pub fn glass_deep() -> Shadow {
        Shadow::new(colors::system::SHADOW_DEEP, 8.0, 0.15, 16.0, 8)
    }

    /// Orange accent glow
    pub fn orange_glow() -> Shadow {
        Shadow::new(colors::primary::ORANGE, 4.0, 0.3, 12.0, 6)
    }

    /// Button shadow
    pub fn button() -> Shadow {
        Shadow::new(colors::system::SHADOW, 2.0, 0.1, 6.0, 3)
    }
}

// =============================================================================
// Animation Tokens
// =============================================================================

/// Animation durations in milliseconds
pub mod duration {
    /// Fast (150ms)
    pub const FAST: u32 = 150;
    /// Normal (250ms)
    pub const NORMAL: u32 = 250;
    /// Slow (350ms)
    pub const SLOW: u32 = 350;
    /// Very slow (500ms)
    pub const VERY_SLOW: u32 = 500;
}

/// Animation duration kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationKind {
    /// 150ms
    Fast,
    /// 250ms
    Normal,
    /// 350ms
    Slow,
    /// 500ms
    VerySlow,
}

impl DurationKind {
    /// Duration in milliseconds
    pub fn millis(&self) -> u32 {
        match self {
            DurationKind::Fast => duration::FAST,
            DurationKind::Normal => duration::NORMAL,
            DurationKind::Slow => duration::SLOW,
            DurationKind::VerySlow => duration::VERY_SLOW,
        }
    }
}

// =============================================================================
// Blur Tokens
// =============================================================================

/// Blur intensities
pub mod blur {
    /// Light blur
    pub const LIGHT: f32 = 10.0;
    /// Medium blur
    pub const MEDIUM: f32 = 20.0;
    /// Heavy blur
    pub const HEAVY: f32 = 40.0;
    /// Extra heavy blur
    pub const EXTRA_HEAVY: f32 = 60.0;
}

/// Blur intensity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlurLevel {
    /// Buttons and inputs
    Light,
    /// Cards and FAB
    #[default]
    Medium,
    /// Tab bar
    Heavy,
    /// Modal backdrops
    ExtraHeavy,
}

impl BlurLevel {
    /// Intensity value
    pub fn intensity(&self) -> f32 {
        match self {
            BlurLevel::Light => blur::LIGHT,
            BlurLevel::Medium => blur::MEDIUM,
            BlurLevel::Heavy => blur::HEAVY,
            BlurLevel::ExtraHeavy => blur::EXTRA_HEAVY,
        }
    }
}

// =============================================================================
// Component Dimensions
// =============================================================================

/// Component dimension base values
pub mod dimensions {
    /// Bottom tab bar
    pub mod tab_bar {
        /// Bar height
        pub const HEIGHT: f32 = 80.0;
    }

    /// Buttons
    pub mod button {
        /// Small button height
        pub const SM_HEIGHT: f32 = 36.0;
        /// Medium button height
        pub const MD_HEIGHT: f32 = 44.0;
        /// Large button height
        pub const LG_HEIGHT: f32 = 52.0;
        /// Minimum width of a medium button
        pub const MIN_WIDTH: f32 = 120.0;
    }

    /// Input fields
    pub mod input {
        /// Minimum input height
        pub const HEIGHT: f32 = 48.0;
    }

    /// Cards
    pub mod card {
        /// Minimum card height
        pub const MIN_HEIGHT: f32 = 120.0;
    }

    /// Floating action button
    pub mod fab {
        /// Diameter
        pub const SIZE: f32 = 56.0;
    }

    /// Screen layout
    pub mod layout {
        /// Maximum content width
        pub const CONTAINER_MAX_WIDTH: f32 = 400.0;
    }
}

/// Scaled component dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentDimensions {
    /// Tab bar height
    pub tab_bar_height: f32,
    /// Tab bar corner radius
    pub tab_bar_radius: f32,
    /// Tab bar outer margin
    pub tab_bar_margin: f32,
    /// Button heights (sm, md, lg)
    pub button_heights: [f32; 3],
    /// Minimum width of a medium button
    pub button_min_width: f32,
    /// Input minimum height
    pub input_height: f32,
    /// Input corner radius
    pub input_radius: f32,
    /// Card minimum height
    pub card_min_height: f32,
    /// Card corner radius
    pub card_radius: f32,
    /// Card inner padding
    pub card_padding: f32,
    /// FAB diameter
    pub fab_size: f32,
    /// FAB corner radius
    pub fab_radius: f32,
}

/// Scaled screen layout constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutTokens {
    /// Horizontal screen padding
    pub screen_padding_horizontal: f32,
    /// Vertical screen padding
    pub screen_padding_vertical: f32,
    /// Maximum content width
    pub container_max_width: f32,
    /// Container padding
    pub container_padding: f32,
    /// Space below each section
    pub section_margin_bottom: f32,
}

// =============================================================================
// Token Registry
// =============================================================================

/// Scaled shadow presets, one field per [`ShadowPreset`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowSet {
    /// Light glass shadow
    pub glass_light: Shadow,
    /// Medium glass shadow
    pub glass_medium: Shadow,
    /// Deep glass shadow
    pub glass_deep: Shadow,
    /// Orange accent glow
    pub orange_glow: Shadow,
    /// Button shadow
    pub button: Shadow,
}

impl ShadowSet {
    fn new(base_scale: f32) -> Self {
        Self {
            glass_light: shadows::glass_light().scaled(base_scale),
            glass_medium: shadows::glass_medium().scaled(base_scale),
            glass_deep: shadows::glass_deep().scaled(base_scale),
            orange_glow: shadows::orange_glow().scaled(base_scale),
            button: shadows::button().scaled(base_scale),
        }
    }

    /// Shadow for a preset
    pub fn get(&self, preset: ShadowPreset) -> &Shadow {
        match preset {
            ShadowPreset::GlassLight => &self.glass_light,
            ShadowPreset::GlassMedium => &self.glass_medium,
            ShadowPreset::GlassDeep => &self.glass_deep,
            ShadowPreset::OrangeGlow => &self.orange_glow,
            ShadowPreset::Button => &self.button,
        }
    }
}

/// Serialized form of a registry: only the base scale is read back
#[derive(Debug, Clone, Copy, Deserialize)]
struct TokenSeed {
    #[serde(default = "default_base_scale")]
    base_scale: f32,
}

fn default_base_scale() -> f32 {
    BASE_SCALE
}

impl From<TokenSeed> for DesignTokens {
    fn from(seed: TokenSeed) -> Self {
        DesignTokens::new(seed.base_scale)
    }
}

/// Resolved, immutable token registry
///
/// Built once from a base scale factor and passed to components through
/// [`crate::theme::Theme`]. Deserializing reads only `base_scale` and
/// rebuilds every other value from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TokenSeed")]
pub struct DesignTokens {
    base_scale: f32,
    type_scale: TypeScale,
    shadows: ShadowSet,
    dimensions: ComponentDimensions,
    layout: LayoutTokens,
}

impl DesignTokens {
    /// Build the registry for a base scale factor
    pub fn new(base_scale: f32) -> Self {
        let s = |size: f32| scale_by(base_scale, size);

        let dimensions = ComponentDimensions {
            tab_bar_height: s(dimensions::tab_bar::HEIGHT),
            tab_bar_radius: s(radius::XXL),
            tab_bar_margin: s(spacing::LG),
            button_heights: [
                s(dimensions::button::SM_HEIGHT),
                s(dimensions::button::MD_HEIGHT),
                s(dimensions::button::LG_HEIGHT),
            ],
            button_min_width: s(dimensions::button::MIN_WIDTH),
            input_height: s(dimensions::input::HEIGHT),
            input_radius: s(radius::glass::INPUT),
            card_min_height: s(dimensions::card::MIN_HEIGHT),
            card_radius: s(radius::glass::CARD),
            card_padding: s(spacing::LG),
            fab_size: s(dimensions::fab::SIZE),
            fab_radius: s(radius::CIRCLE),
        };

        let layout = LayoutTokens {
            screen_padding_horizontal: s(spacing::LG),
            screen_padding_vertical: s(spacing::LG),
            container_max_width: s(dimensions::layout::CONTAINER_MAX_WIDTH),
            container_padding: s(spacing::LG),
            section_margin_bottom: s(spacing::XXL),
        };

        Self {
            base_scale,
            type_scale: TypeScale::new(base_scale),
            shadows: ShadowSet::new(base_scale),
            dimensions,
            layout,
        }
    }

    /// Base scale factor the registry was built with
    pub fn base_scale(&self) -> f32 {
        self.base_scale
    }

    /// Scale an arbitrary size with this registry's base factor
    pub fn scale(&self, size: f32) -> f32 {
        scale_by(self.base_scale, size)
    }

    /// Moderately scale an arbitrary size with this registry's base factor
    pub fn moderate_scale(&self, size: f32, factor: f32) -> f32 {
        moderate_scale_by(self.base_scale, size, factor)
    }

    /// Spacing value for a step
    pub fn spacing(&self, step: SpacingStep) -> f32 {
        self.scale(step.base())
    }

    /// Corner radius for a step
    pub fn radius(&self, step: RadiusStep) -> f32 {
        self.scale(step.base())
    }

    /// Font size for a type step
    pub fn type_size(&self, step: TypeStep) -> f32 {
        self.type_scale.size(step)
    }

    /// The full type scale
    pub fn type_scale(&self) -> &TypeScale {
        &self.type_scale
    }

    /// Shadow for a preset
    pub fn shadow(&self, preset: ShadowPreset) -> &Shadow {
        self.shadows.get(preset)
    }

    /// Animation duration in milliseconds
    pub fn animation_duration(&self, kind: DurationKind) -> u32 {
        kind.millis()
    }

    /// Blur intensity for a level
    pub fn blur_intensity(&self, level: BlurLevel) -> f32 {
        level.intensity()
    }

    /// Component dimensions
    pub fn dimensions(&self) -> &ComponentDimensions {
        &self.dimensions
    }

    /// Screen layout constants
    pub fn layout(&self) -> &LayoutTokens {
        &self.layout
    }
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self::new(BASE_SCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Scaling Tests
    // ==========================================================================

    #[test]
    fn test_moderate_scale_formula() {
        for size in [10.0_f32, 14.0, 28.0, 34.0] {
            for factor in [0.0_f32, 0.25, 0.5, 1.0] {
                let expected = size + (size * BASE_SCALE - size) * factor;
                assert_eq!(moderate_scale(size, factor), expected);
            }
        }
    }

    #[test]
    fn test_moderate_scale_extremes() {
        let base = 1.3;
        assert_eq!(moderate_scale_by(base, 20.0, 0.0), 20.0);
        assert!((moderate_scale_by(base, 20.0, 1.0) - 26.0).abs() < 1e-5);
        assert!((moderate_scale_by(base, 20.0, 0.5) - 23.0).abs() < 1e-5);
    }

    #[test]
    fn test_scale_default_is_identity() {
        assert_eq!(scale(16.0), 16.0);
    }

    // ==========================================================================
    // Registry Tests
    // ==========================================================================

    #[test]
    fn test_spacing_values() {
        let tokens = DesignTokens::default();
        assert_eq!(tokens.spacing(SpacingStep::Xs), 4.0);
        assert_eq!(tokens.spacing(SpacingStep::Md), 12.0);
        assert_eq!(tokens.spacing(SpacingStep::Xxxl), 32.0);
    }

    #[test]
    fn test_spacing_from_name() {
        assert_eq!(SpacingStep::from_name("lg"), Some(SpacingStep::Lg));
        assert_eq!(SpacingStep::from_name("huge"), None);
    }

    #[test]
    fn test_spacing_scale_monotonic() {
        let tokens = DesignTokens::default();
        let values: Vec<f32> = SpacingStep::all()
            .iter()
            .map(|s| tokens.spacing(*s))
            .collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_radius_values() {
        let tokens = DesignTokens::default();
        assert_eq!(tokens.radius(RadiusStep::GlassCard), 16.0);
        assert_eq!(tokens.radius(RadiusStep::GlassInput), 14.0);
        assert_eq!(tokens.radius(RadiusStep::Circle), 999.0);
    }

    #[test]
    fn test_registry_scales_sizes() {
        let tokens = DesignTokens::new(2.0);
        assert_eq!(tokens.spacing(SpacingStep::Lg), 32.0);
        assert_eq!(tokens.radius(RadiusStep::GlassButton), 24.0);
        assert_eq!(tokens.dimensions().fab_size, 112.0);
        assert_eq!(tokens.shadow(ShadowPreset::GlassDeep).offset_y, 16.0);
        // Opacity is not a size
        assert_eq!(tokens.shadow(ShadowPreset::GlassDeep).opacity, 0.15);
    }

    #[test]
    fn test_durations_are_not_scaled() {
        let tokens = DesignTokens::new(2.0);
        assert_eq!(tokens.animation_duration(DurationKind::Normal), 250);
        assert_eq!(tokens.blur_intensity(BlurLevel::Heavy), 40.0);
    }

    #[test]
    fn test_duration_scale() {
        assert!(duration::FAST < duration::NORMAL);
        assert!(duration::NORMAL < duration::SLOW);
        assert!(duration::SLOW < duration::VERY_SLOW);
    }

    #[test]
    fn test_blur_levels() {
        assert!(BlurLevel::Light.intensity() < BlurLevel::Medium.intensity());
        assert!(BlurLevel::Medium.intensity() < BlurLevel::Heavy.intensity());
        assert!(BlurLevel::Heavy.intensity() < BlurLevel::ExtraHeavy.intensity());
    }

    #[test]
    fn test_shadow_presets() {
        let tokens = DesignTokens::default();
        let light = tokens.shadow(ShadowPreset::GlassLight);
        let medium = tokens.shadow(ShadowPreset::GlassMedium);
        let deep = tokens.shadow(ShadowPreset::GlassDeep);
        assert!(light.radius < medium.radius);
        assert!(medium.radius < deep.radius);
        assert_eq!(tokens.shadow(ShadowPreset::OrangeGlow).color, "#FF4500");
    }

    #[test]
    fn test_dimensions() {
        let dims = DesignTokens::default().dimensions().clone();
        assert_eq!(dims.tab_bar_height, 80.0);
        assert_eq!(dims.tab_bar_radius, 24.0);
        assert_eq!(dims.button_heights, [36.0, 44.0, 52.0]);
        assert_eq!(dims.fab_size, 56.0);
    }

    #[test]
    fn test_type_sizes_through_registry() {
        let tokens = DesignTokens::default();
        assert_eq!(tokens.type_size(TypeStep::Md), 14.0);
        assert_eq!(tokens.type_size(TypeStep::Hero), 34.0);
    }

    // ==========================================================================
    // Serialization Tests
    // ==========================================================================

    #[test]
    fn test_deserialize_rebuilds_from_base_scale() {
        let json = r#"{"base_scale": 2.0, "spacing": [1, 1, 1, 1, 1, 1, 1], "shadows": []}"#;
        let tokens: DesignTokens = serde_json::from_str(json).unwrap();
        assert_eq!(tokens, DesignTokens::new(2.0));
        assert_eq!(tokens.spacing(SpacingStep::Xs), 8.0);
        assert_eq!(tokens.shadow(ShadowPreset::GlassLight).offset_y, 4.0);
    }

    #[test]
    fn test_registry_round_trip() {
        let tokens = DesignTokens::new(1.5);
        let json = serde_json::to_string(&tokens).unwrap();
        let back: DesignTokens = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
    }

    #[test]
    fn test_shadow_serialization() {
        let shadow = shadows::glass_medium();
        let json = serde_json::to_string(&shadow).unwrap();
        let deserialized: Shadow = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, shadow);
    }
}
