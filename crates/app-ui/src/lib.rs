//! User interface for Inkr
//!
//! This crate provides the UI layer: design tokens, themes, typography, the
//! animation model, the glass component library and tab navigation.
//!
//! # Design System
//!
//! Light mode is the default, inspired by iOS glass widgets:
//! - Primary: Blue Modern (#1A73E8)
//! - Glow: Shadow Orange (#FF4500), used for glows only
//! - Surfaces: translucent white glass over Cloud White (#F5F5F5)
//!
//! # Modules
//!
//! - [`tokens`] - Token registry (spacing, radii, shadows, durations, blur, dimensions)
//! - [`theme`] - Color palette and light/dark themes
//! - [`typography`] - Type scale and text styles
//! - [`animation`] - Entrance and press transitions
//! - [`components`] - Glass component library
//! - [`navigation`] - Bottom tab navigation
//!
//! # Example
//!
//! ```rust
//! use app_ui::components::GlassButton;
//! use app_ui::theme::{get_theme, ThemeName};
//! use app_ui::tokens::SpacingStep;
//! use app_platform::BlurSupport;
//!
//! let theme = get_theme(ThemeName::Light);
//! assert_eq!(theme.tokens.spacing(SpacingStep::Lg), 16.0);
//!
//! let styles = GlassButton::new("New Note", "new_note")
//!     .with_orange_glow(true)
//!     .computed_styles(&theme, BlurSupport::Available);
//! assert_eq!(styles.height, 44.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod animation;
pub mod components;
pub mod navigation;
pub mod theme;
pub mod tokens;
pub mod typography;

// Re-export commonly used types
pub use theme::{
    dark_theme, get_theme, light_theme, ColorRole, Palette, Theme, ThemeName,
};

pub use tokens::{
    moderate_scale, scale, BlurLevel, DesignTokens, DurationKind, RadiusStep, Shadow,
    ShadowPreset, SpacingStep, BASE_SCALE,
};

pub use typography::{TextStyle, TypeScale, TypeStep};

pub use animation::{EntranceAnimation, Transition, VisualState};

pub use components::{
    ButtonSize, ButtonVariant, ConfirmPrompt, EventHandler, FloatingActionButton, GlassButton,
    GlassCard, GlassInput, GlassTabBar, StyleOverride, TextOverride,
};

pub use navigation::{NavigationState, NavigationTab, TabTransition};
