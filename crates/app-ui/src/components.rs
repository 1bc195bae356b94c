//! Glass component library for Inkr
//!
//! Components are serializable property records. A renderer asks each one
//! for its resolved style record via `computed_styles`, its entrance
//! animation via `entrance`, and calls `activate` when the user taps it.
//! `activate` fires the component's haptic tier and hands back the press
//! handler id for the caller to dispatch.
//!
//! # Available Components
//!
//! - [`GlassCard`] - Translucent blurred container, light haptic
//! - [`GlassButton`] - Button with variants and sizes, medium haptic
//! - [`FloatingActionButton`] - Circular primary action, heavy haptic
//! - [`GlassInput`] - Text input shell
//! - [`GlassTabBar`] - Floating bottom tab bar, selection haptic
//! - [`ConfirmPrompt`] - Yes/no confirmation

use app_platform::{fire_haptic, BlurSupport, HapticEngine, HapticFeedback};
use serde::{Deserialize, Serialize};

use crate::animation::{EntranceAnimation, Transition, VisualState};
use crate::navigation::NavigationTab;
use crate::theme::{Color, Theme};
use crate::tokens::{BlurLevel, DurationKind, RadiusStep, Shadow, ShadowPreset, SpacingStep};
use crate::typography::{font_weight, TextStyle, TypeStep};

// =============================================================================
// Common Types
// =============================================================================

/// Component identifier
pub type ComponentId = String;

/// Event handler callback type (represented as a string identifier)
pub type EventHandler = String;

/// Container style overrides supplied by the caller
///
/// Applied last, after every computed layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleOverride {
    /// Background color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    /// Opacity (0.0 - 1.0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Border radius
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    /// Height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
    /// Minimum width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f32>,
    /// Inner padding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    /// Shadow
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
}

impl StyleOverride {
    fn is_empty(&self) -> bool {
        self == &StyleOverride::default()
    }
}

/// Text style overrides supplied by the caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextOverride {
    /// Text color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Font size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    /// Font weight
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<u16>,
}

impl TextOverride {
    fn is_empty(&self) -> bool {
        self == &TextOverride::default()
    }

    fn apply(&self, text: &mut TextStyle) {
        if let Some(color) = &self.color {
            text.color = color.clone();
        }
        if let Some(size) = self.font_size {
            text.font_size = size;
        }
        if let Some(weight) = self.font_weight {
            text.font_weight = weight;
        }
    }
}

/// Fire a haptic and hand back the handler, if there is one
fn press<'a>(
    handler: Option<&'a EventHandler>,
    haptics: &dyn HapticEngine,
    feedback: HapticFeedback,
) -> Option<&'a EventHandler> {
    let handler = handler?;
    fire_haptic(haptics, feedback);
    Some(handler)
}

fn default_true() -> bool {
    true
}

// =============================================================================
// Glass Card
// =============================================================================

/// Translucent blurred container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassCard {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Child content reference
    pub content: String,
    /// Press handler; cards without one are not pressable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_press: Option<EventHandler>,
    /// Blur intensity override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f32>,
    /// Whether the entrance animation runs
    #[serde(default = "default_true")]
    pub animated: bool,
    /// Caller style override
    #[serde(default, skip_serializing_if = "StyleOverride::is_empty")]
    pub style: StyleOverride,
}

/// Resolved card styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardStyles {
    /// Background color
    pub background: Color,
    /// Corner radius
    pub border_radius: f32,
    /// Inner padding
    pub padding: f32,
    /// Shadow
    pub shadow: Shadow,
    /// Blur intensity, `None` when the platform cannot blur
    pub blur: Option<f32>,
    /// Opacity
    pub opacity: f32,
}

impl GlassCard {
    /// Create a card around some content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            on_press: None,
            intensity: None,
            animated: true,
            style: StyleOverride::default(),
        }
    }

    /// Set the card ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Make the card pressable
    pub fn on_press(mut self, handler: impl Into<String>) -> Self {
        self.on_press = Some(handler.into());
        self
    }

    /// Override the blur intensity
    pub fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = Some(intensity);
        self
    }

    /// Enable or disable the entrance animation
    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: StyleOverride) -> Self {
        self.style = style;
        self
    }

    /// Handle a tap: light impact, then the handler
    pub fn activate(&self, haptics: &dyn HapticEngine) -> Option<&EventHandler> {
        press(self.on_press.as_ref(), haptics, HapticFeedback::LIGHT)
    }

    /// Fade in from 80% opacity
    pub fn entrance(&self, theme: &Theme) -> EntranceAnimation {
        EntranceAnimation::new(
            VisualState::REST.with_opacity(0.8),
            VisualState::REST,
            Transition::timing(theme.tokens.animation_duration(DurationKind::Normal)),
        )
        .enabled(self.animated)
    }

    /// Get the computed styles for this card
    pub fn computed_styles(&self, theme: &Theme, blur: BlurSupport) -> CardStyles {
        let tokens = &theme.tokens;
        let requested = self
            .intensity
            .unwrap_or_else(|| tokens.blur_intensity(BlurLevel::Medium));

        let mut styles = CardStyles {
            background: theme.palette.background.glass.clone(),
            border_radius: tokens.dimensions().card_radius,
            padding: tokens.dimensions().card_padding,
            shadow: tokens.shadow(ShadowPreset::GlassMedium).clone(),
            blur: blur.effective_intensity(requested),
            opacity: 1.0,
        };

        let o = &self.style;
        if let Some(bg) = &o.background_color {
            styles.background = bg.clone();
        }
        if let Some(radius) = o.border_radius {
            styles.border_radius = radius;
        }
        if let Some(padding) = o.padding {
            styles.padding = padding;
        }
        if let Some(shadow) = &o.shadow {
            styles.shadow = shadow.clone();
        }
        if let Some(opacity) = o.opacity {
            styles.opacity = opacity;
        }
        styles
    }
}

// =============================================================================
// Glass Button
// =============================================================================

/// Button visual variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    /// Glass background, blue text
    #[default]
    Primary,
    /// Thinner glass, primary text
    Secondary,
    /// Transparent with a light shadow
    Ghost,
}

/// Button sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Small
    Sm,
    /// Medium
    #[default]
    Md,
    /// Large
    Lg,
}

impl ButtonSize {
    /// Multiplier applied to the base minimum width
    pub fn min_width_factor(&self) -> f32 {
        match self {
            ButtonSize::Sm => 0.8,
            ButtonSize::Md => 1.0,
            ButtonSize::Lg => 1.2,
        }
    }

    fn type_step(&self) -> TypeStep {
        match self {
            ButtonSize::Sm => TypeStep::Sm,
            ButtonSize::Md => TypeStep::Md,
            ButtonSize::Lg => TypeStep::Lg,
        }
    }

    fn height_index(&self) -> usize {
        match self {
            ButtonSize::Sm => 0,
            ButtonSize::Md => 1,
            ButtonSize::Lg => 2,
        }
    }
}

/// Scale of a pressed button
pub const BUTTON_PRESSED_SCALE: f32 = 0.96;

/// Opacity of a disabled button
pub const DISABLED_OPACITY: f32 = 0.5;

/// Glass button properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassButton {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Label
    pub title: String,
    /// Press handler
    pub on_press: EventHandler,
    /// Visual variant
    #[serde(default)]
    pub variant: ButtonVariant,
    /// Size
    #[serde(default)]
    pub size: ButtonSize,
    /// Whether the button is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether to add the orange glow shadow
    #[serde(default)]
    pub orange_glow: bool,
    /// Caller container override
    #[serde(default, skip_serializing_if = "StyleOverride::is_empty")]
    pub style: StyleOverride,
    /// Caller text override
    #[serde(default, skip_serializing_if = "TextOverride::is_empty")]
    pub text_style: TextOverride,
    /// Transient pressed state
    #[serde(skip)]
    pressed: bool,
}

/// Resolved button styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonStyles {
    /// Background color
    pub background: Color,
    /// Height
    pub height: f32,
    /// Minimum width
    pub min_width: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Shadow
    pub shadow: Shadow,
    /// Blur intensity, `None` when the platform cannot blur
    pub blur: Option<f32>,
    /// Opacity
    pub opacity: f32,
    /// Label text
    pub text: TextStyle,
}

impl GlassButton {
    /// Create a new button
    pub fn new(title: impl Into<String>, on_press: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            on_press: on_press.into(),
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            orange_glow: false,
            style: StyleOverride::default(),
            text_style: TextOverride::default(),
            pressed: false,
        }
    }

    /// Set the button ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the button variant
    pub fn with_variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the button size
    pub fn with_size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    /// Set disabled state
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Add or remove the orange glow
    pub fn with_orange_glow(mut self, glow: bool) -> Self {
        self.orange_glow = glow;
        self
    }

    /// Set custom container style
    pub fn with_style(mut self, style: StyleOverride) -> Self {
        self.style = style;
        self
    }

    /// Set custom text style
    pub fn with_text_style(mut self, text_style: TextOverride) -> Self {
        self.text_style = text_style;
        self
    }

    /// Whether the button is currently held down
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Finger down. Ignored when disabled; returns whether it took effect.
    pub fn press_in(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.pressed = true;
        true
    }

    /// Finger up
    pub fn press_out(&mut self) {
        self.pressed = false;
    }

    /// Handle a tap: medium impact, then the handler. Disabled buttons do
    /// nothing.
    pub fn activate(&self, haptics: &dyn HapticEngine) -> Option<&EventHandler> {
        if self.disabled {
            return None;
        }
        press(Some(&self.on_press), haptics, HapticFeedback::MEDIUM)
    }

    /// Visual state the press animation is heading towards
    pub fn target_state(&self) -> VisualState {
        if self.pressed {
            VisualState::REST.with_scale(BUTTON_PRESSED_SCALE)
        } else {
            VisualState::REST
        }
    }

    /// Press animation curve
    pub fn press_transition(&self, theme: &Theme) -> Transition {
        Transition::linear(theme.tokens.animation_duration(DurationKind::Fast))
    }

    /// Get the computed styles for this button
    ///
    /// Layers apply in order: size, variant, glow, disabled, then the
    /// caller's overrides.
    pub fn computed_styles(&self, theme: &Theme, blur: BlurSupport) -> ButtonStyles {
        let tokens = &theme.tokens;
        let p = &theme.palette;
        let dims = tokens.dimensions();

        let mut styles = ButtonStyles {
            background: p.background.glass.clone(),
            height: dims.button_heights[ButtonSize::Md.height_index()],
            min_width: dims.button_min_width,
            border_radius: tokens.radius(RadiusStep::GlassButton),
            shadow: tokens.shadow(ShadowPreset::Button).clone(),
            blur: blur.effective_intensity(tokens.blur_intensity(BlurLevel::Light)),
            opacity: 1.0,
            text: TextStyle::new(
                tokens.type_size(TypeStep::Md),
                font_weight::MEDIUM,
                p.text.primary.clone(),
            ),
        };

        // Size
        styles.height = dims.button_heights[self.size.height_index()];
        styles.min_width = dims.button_min_width * self.size.min_width_factor();
        styles.text.font_size = tokens.type_size(self.size.type_step());

        // Variant
        match self.variant {
            ButtonVariant::Primary => {
                styles.background = p.background.glass.clone();
                styles.text.color = p.primary.blue.clone();
            }
            ButtonVariant::Secondary => {
                styles.background = p.background.glass_secondary.clone();
                styles.text.color = p.text.primary.clone();
            }
            ButtonVariant::Ghost => {
                styles.background = "transparent".to_string();
                styles.shadow = tokens.shadow(ShadowPreset::GlassLight).clone();
                styles.text.color = p.text.secondary.clone();
            }
        }

        if self.orange_glow {
            styles.shadow = tokens.shadow(ShadowPreset::OrangeGlow).clone();
        }

        if self.disabled {
            styles.opacity = DISABLED_OPACITY;
            styles.text.color = p.text.muted.clone();
        }

        let o = &self.style;
        if let Some(bg) = &o.background_color {
            styles.background = bg.clone();
        }
        if let Some(height) = o.height {
            styles.height = height;
        }
        if let Some(min_width) = o.min_width {
            styles.min_width = min_width;
        }
        if let Some(radius) = o.border_radius {
            styles.border_radius = radius;
        }
        if let Some(shadow) = &o.shadow {
            styles.shadow = shadow.clone();
        }
        if let Some(opacity) = o.opacity {
            styles.opacity = opacity;
        }
        self.text_style.apply(&mut styles.text);

        styles
    }
}

// =============================================================================
// Floating Action Button
// =============================================================================

/// Scale of a pressed FAB
pub const FAB_PRESSED_SCALE: f32 = 0.9;

/// Default FAB icon
pub const DEFAULT_FAB_ICON: &str = "+";

/// Spring used by the FAB for entrance and press
pub fn fab_spring() -> Transition {
    Transition::spring(15.0, 150.0)
}

/// Absolute placement from the bottom-right corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FabPlacement {
    /// Distance from the bottom edge
    pub bottom: f32,
    /// Distance from the right edge
    pub right: f32,
}

/// Floating action button properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloatingActionButton {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Press handler
    pub on_press: EventHandler,
    /// Icon glyph
    pub icon: String,
    /// Whether to add the orange glow shadow
    #[serde(default = "default_true")]
    pub orange_glow: bool,
    /// Placement override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<FabPlacement>,
    /// Caller style override
    #[serde(default, skip_serializing_if = "StyleOverride::is_empty")]
    pub style: StyleOverride,
    #[serde(skip)]
    pressed: bool,
}

/// Resolved FAB styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FabStyles {
    /// Diameter
    pub size: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Background color
    pub background: Color,
    /// Shadow
    pub shadow: Shadow,
    /// Blur intensity, `None` when the platform cannot blur
    pub blur: Option<f32>,
    /// Placement
    pub placement: FabPlacement,
    /// Icon glyph style
    pub icon: TextStyle,
}

impl FloatingActionButton {
    /// Create a FAB with the default icon and glow
    pub fn new(on_press: impl Into<String>) -> Self {
        Self {
            id: None,
            on_press: on_press.into(),
            icon: DEFAULT_FAB_ICON.to_string(),
            orange_glow: true,
            placement: None,
            style: StyleOverride::default(),
            pressed: false,
        }
    }

    /// Set the FAB ID
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the icon glyph
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Add or remove the orange glow
    pub fn with_orange_glow(mut self, glow: bool) -> Self {
        self.orange_glow = glow;
        self
    }

    /// Place the FAB explicitly
    pub fn with_placement(mut self, placement: FabPlacement) -> Self {
        self.placement = Some(placement);
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: StyleOverride) -> Self {
        self.style = style;
        self
    }

    /// Finger down
    pub fn press_in(&mut self) {
        self.pressed = true;
    }

    /// Finger up
    pub fn press_out(&mut self) {
        self.pressed = false;
    }

    /// Whether the FAB is currently held down
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Handle a tap: heavy impact, then the handler
    pub fn activate(&self, haptics: &dyn HapticEngine) -> Option<&EventHandler> {
        press(Some(&self.on_press), haptics, HapticFeedback::HEAVY)
    }

    /// Pop in from 80% scale, fully transparent
    pub fn entrance(&self) -> EntranceAnimation {
        EntranceAnimation::new(
            VisualState::REST.with_scale(0.8).with_opacity(0.0),
            VisualState::REST,
            fab_spring(),
        )
    }

    /// Visual state the press spring is heading towards
    pub fn target_state(&self) -> VisualState {
        if self.pressed {
            VisualState::REST.with_scale(FAB_PRESSED_SCALE)
        } else {
            VisualState::REST
        }
    }

    /// Get the computed styles for this FAB
    pub fn computed_styles(&self, theme: &Theme, blur: BlurSupport) -> FabStyles {
        let tokens = &theme.tokens;
        let dims = tokens.dimensions();

        let shadow = if self.orange_glow {
            tokens.shadow(ShadowPreset::OrangeGlow).clone()
        } else {
            tokens.shadow(ShadowPreset::GlassDeep).clone()
        };

        let placement = self.placement.unwrap_or(FabPlacement {
            bottom: tokens.spacing(SpacingStep::Xxxl),
            right: tokens.spacing(SpacingStep::Lg),
        });

        let mut styles = FabStyles {
            size: dims.fab_size,
            border_radius: dims.fab_radius,
            background: theme.palette.background.glass.clone(),
            shadow,
            blur: blur.effective_intensity(tokens.blur_intensity(BlurLevel::Medium)),
            placement,
            icon: TextStyle::new(
                tokens.type_size(TypeStep::Xxl),
                font_weight::LIGHT,
                theme.palette.primary.blue.clone(),
            ),
        };

        let o = &self.style;
        if let Some(bg) = &o.background_color {
            styles.background = bg.clone();
        }
        if let Some(height) = o.height {
            styles.size = height;
        }
        if let Some(shadow) = &o.shadow {
            styles.shadow = shadow.clone();
        }
        styles
    }
}

// =============================================================================
// Glass Input
// =============================================================================

/// Text input shell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassInput {
    /// Unique component ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ComponentId>,
    /// Placeholder shown while empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Current text
    #[serde(default)]
    pub value: String,
    /// Whether the input wraps lines
    #[serde(default)]
    pub multiline: bool,
    /// Visible line count when multiline
    #[serde(default = "default_lines")]
    pub number_of_lines: u32,
    /// Change handler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_change_text: Option<EventHandler>,
    /// Caller style override
    #[serde(default, skip_serializing_if = "StyleOverride::is_empty")]
    pub style: StyleOverride,
}

fn default_lines() -> u32 {
    1
}

/// Resolved input styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputStyles {
    /// Background color
    pub background: Color,
    /// Corner radius
    pub border_radius: f32,
    /// Minimum height
    pub min_height: f32,
    /// Inner padding
    pub padding: f32,
    /// Shadow
    pub shadow: Shadow,
    /// Blur intensity, `None` when the platform cannot blur
    pub blur: Option<f32>,
    /// Displayed text style (muted while showing the placeholder)
    pub text: TextStyle,
}

impl GlassInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self {
            id: None,
            placeholder: None,
            value: String::new(),
            multiline: false,
            number_of_lines: 1,
            on_change_text: None,
            style: StyleOverride::default(),
        }
    }

    /// Set placeholder
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the current text
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Make the input multiline with a visible line count
    pub fn multiline(mut self, lines: u32) -> Self {
        self.multiline = true;
        self.number_of_lines = lines.max(1);
        self
    }

    /// Set change handler
    pub fn on_change_text(mut self, handler: impl Into<String>) -> Self {
        self.on_change_text = Some(handler.into());
        self
    }

    /// Set custom style
    pub fn with_style(mut self, style: StyleOverride) -> Self {
        self.style = style;
        self
    }

    /// Whether the placeholder is showing instead of a value
    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty()
    }

    /// Text to display: the value, or the placeholder while empty
    pub fn display_text(&self) -> &str {
        if self.shows_placeholder() {
            self.placeholder.as_deref().unwrap_or("")
        } else {
            &self.value
        }
    }

    /// Slide up 20pt while fading in
    pub fn entrance(&self, theme: &Theme) -> EntranceAnimation {
        EntranceAnimation::new(
            VisualState::REST.with_opacity(0.0).with_translate_y(20.0),
            VisualState::REST,
            Transition::timing(theme.tokens.animation_duration(DurationKind::Normal)),
        )
    }

    /// Get the computed styles for this input
    pub fn computed_styles(&self, theme: &Theme, blur: BlurSupport) -> InputStyles {
        let tokens = &theme.tokens;
        let p = &theme.palette;
        let padding = tokens.spacing(SpacingStep::Md);

        let color = if self.shows_placeholder() {
            p.text.muted.clone()
        } else {
            p.text.primary.clone()
        };
        let text = TextStyle::new(tokens.type_size(TypeStep::Md), font_weight::REGULAR, color);

        let mut min_height = tokens.dimensions().input_height;
        if self.multiline {
            let lines = text.line_height_px() * self.number_of_lines as f32 + padding * 2.0;
            min_height = min_height.max(lines);
        }

        let mut styles = InputStyles {
            background: p.background.glass.clone(),
            border_radius: tokens.dimensions().input_radius,
            min_height,
            padding,
            shadow: tokens.shadow(ShadowPreset::GlassLight).clone(),
            blur: blur.effective_intensity(tokens.blur_intensity(BlurLevel::Light)),
            text,
        };

        let o = &self.style;
        if let Some(bg) = &o.background_color {
            styles.background = bg.clone();
        }
        if let Some(radius) = o.border_radius {
            styles.border_radius = radius;
        }
        if let Some(height) = o.height {
            styles.min_height = height;
        }
        if let Some(padding) = o.padding {
            styles.padding = padding;
        }
        styles
    }
}

impl Default for GlassInput {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Glass Tab Bar
// =============================================================================

/// Tab bar icon size
pub const TAB_ICON_SIZE: f32 = 24.0;

/// A tab bar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarItem {
    /// Tab this item selects
    pub tab: NavigationTab,
    /// Label
    pub label: String,
    /// Icon name
    pub icon: String,
    /// Whether this is the active tab
    #[serde(default)]
    pub active: bool,
}

impl TabBarItem {
    /// Item for a tab
    pub fn for_tab(tab: NavigationTab) -> Self {
        Self {
            tab,
            label: tab.label().to_string(),
            icon: tab.icon().to_string(),
            active: false,
        }
    }
}

/// Floating bottom tab bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlassTabBar {
    /// Items, left to right
    pub items: Vec<TabBarItem>,
    /// Caller style override
    #[serde(default, skip_serializing_if = "StyleOverride::is_empty")]
    pub style: StyleOverride,
}

/// Resolved tab bar styles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabBarStyles {
    /// Bar height
    pub height: f32,
    /// Corner radius
    pub border_radius: f32,
    /// Margin to the screen edges
    pub margin: f32,
    /// Horizontal padding inside the bar
    pub padding_horizontal: f32,
    /// Background color
    pub background: Color,
    /// Shadow
    pub shadow: Shadow,
    /// Blur intensity, `None` when the platform cannot blur
    pub blur: Option<f32>,
    /// Active item tint
    pub active_tint: Color,
    /// Inactive item tint
    pub inactive_tint: Color,
    /// Icon size
    pub icon_size: f32,
}

impl GlassTabBar {
    /// Tab bar with all tabs and one active
    pub fn new(active: NavigationTab) -> Self {
        let mut bar = Self {
            items: NavigationTab::all()
                .into_iter()
                .map(TabBarItem::for_tab)
                .collect(),
            style: StyleOverride::default(),
        };
        bar.set_active(active);
        bar
    }

    /// Mark one tab active
    pub fn set_active(&mut self, tab: NavigationTab) {
        for item in &mut self.items {
            item.active = item.tab == tab;
        }
    }

    /// Currently active tab
    pub fn active(&self) -> Option<NavigationTab> {
        self.items.iter().find(|item| item.active).map(|item| item.tab)
    }

    /// Handle a tab press: selection tick, then report the tab
    pub fn press(&self, tab: NavigationTab, haptics: &dyn HapticEngine) -> Option<NavigationTab> {
        let item = self.items.iter().find(|item| item.tab == tab)?;
        fire_haptic(haptics, HapticFeedback::Selection);
        Some(item.tab)
    }

    /// Tint for an item
    pub fn tint<'a>(&self, item: &TabBarItem, theme: &'a Theme) -> &'a str {
        if item.active {
            &theme.palette.primary.blue
        } else {
            &theme.palette.text.muted
        }
    }

    /// Slide up 100pt while fading in
    pub fn entrance(&self) -> EntranceAnimation {
        EntranceAnimation::new(
            VisualState::REST.with_opacity(0.0).with_translate_y(100.0),
            VisualState::REST,
            Transition::spring(20.0, 100.0),
        )
    }

    /// Get the computed styles for the bar
    pub fn computed_styles(&self, theme: &Theme, blur: BlurSupport) -> TabBarStyles {
        let tokens = &theme.tokens;
        let dims = tokens.dimensions();

        let mut styles = TabBarStyles {
            height: dims.tab_bar_height,
            border_radius: dims.tab_bar_radius,
            margin: dims.tab_bar_margin,
            padding_horizontal: tokens.spacing(SpacingStep::Lg),
            background: theme.palette.background.glass.clone(),
            shadow: tokens.shadow(ShadowPreset::GlassDeep).clone(),
            blur: blur.effective_intensity(tokens.blur_intensity(BlurLevel::Heavy)),
            active_tint: theme.palette.primary.blue.clone(),
            inactive_tint: theme.palette.text.muted.clone(),
            icon_size: tokens.scale(TAB_ICON_SIZE),
        };

        let o = &self.style;
        if let Some(height) = o.height {
            styles.height = height;
        }
        if let Some(bg) = &o.background_color {
            styles.background = bg.clone();
        }
        styles
    }
}

impl Default for GlassTabBar {
    fn default() -> Self {
        Self::new(NavigationTab::default())
    }
}

// =============================================================================
// Confirm Prompt
// =============================================================================

/// Confirmation prompt for yes/no questions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmPrompt {
    /// Unique identifier
    pub id: String,
    /// Title text
    pub title: String,
    /// Description text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Confirm button label
    pub confirm_label: String,
    /// Cancel button label
    pub cancel_label: String,
    /// Whether confirming destroys something
    #[serde(default)]
    pub destructive: bool,
}

impl ConfirmPrompt {
    /// Create a new confirmation prompt
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
            destructive: false,
        }
    }

    /// Create a destructive confirmation prompt
    pub fn destructive(title: impl Into<String>) -> Self {
        let mut prompt = Self::new(title);
        prompt.destructive = true;
        prompt
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set confirm button label
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    /// Set cancel button label
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Color of the confirm label
    pub fn confirm_color<'a>(&self, theme: &'a Theme) -> &'a str {
        if self.destructive {
            &theme.palette.primary.orange
        } else {
            &theme.palette.primary.blue
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
