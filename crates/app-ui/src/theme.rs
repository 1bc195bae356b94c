//! Color palette and themes for Inkr
//!
//! Light mode is the default. A theme bundles a [`Palette`] with the
//! [`DesignTokens`] registry it was built for, so an alternate base scale or
//! the dark variant is just another `Theme` value.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{get_theme, ColorRole, ThemeName};
//!
//! let theme = get_theme(ThemeName::Light);
//! assert_eq!(theme.color(ColorRole::Primary), "#1A73E8");
//! assert_eq!(theme.palette.get("text", "muted").map(String::as_str), Some("#B0B7C3"));
//! ```

use serde::{Deserialize, Serialize};

use crate::tokens::{DesignTokens, BASE_SCALE};

// =============================================================================
// Color Types
// =============================================================================

/// A color as a CSS string (`#RRGGBB` or `rgba(r, g, b, a)`)
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() < 6 {
        return None;
    }
    let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
    let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
    let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
    Some((r, g, b))
}

/// Parse either a hex color or an `rgba(...)` color into RGBA components
pub fn parse_color(color: &str) -> Option<(u8, u8, u8, f32)> {
    if let Some((r, g, b)) = parse_hex_color(color) {
        return Some((r, g, b, 1.0));
    }

    let inner = color.trim().strip_prefix("rgba(")?.strip_suffix(')')?;
    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 4 {
        return None;
    }
    let alpha: f32 = parts[3].parse().ok()?;
    if !(0.0..=1.0).contains(&alpha) {
        return None;
    }
    Some((
        parts[0].parse().ok()?,
        parts[1].parse().ok()?,
        parts[2].parse().ok()?,
        alpha,
    ))
}

/// Format RGB components with an alpha channel
pub fn rgba(r: u8, g: u8, b: u8, alpha: f32) -> Color {
    format!("rgba({}, {}, {}, {})", r, g, b, alpha)
}

// =============================================================================
// Base Colors
// =============================================================================

/// Literal color values
pub mod colors {
    /// Primary colors
    pub mod primary {
        /// Blue Modern
        pub const BLUE: &str = "#1A73E8";
        /// Shadow Orange, used for glows only
        pub const ORANGE: &str = "#FF4500";
    }

    /// Background colors
    pub mod background {
        /// Cloud White
        pub const PRIMARY: &str = "#F5F5F5";
        /// Pure White
        pub const SECONDARY: &str = "#FFFFFF";
        /// Glass overlay
        pub const GLASS: &str = "rgba(255, 255, 255, 0.85)";
        /// Thinner glass overlay
        pub const GLASS_SECONDARY: &str = "rgba(255, 255, 255, 0.65)";
    }

    /// Text colors
    pub mod text {
        /// Deep Gray
        pub const PRIMARY: &str = "#2C2E33";
        /// Neutral Gray
        pub const SECONDARY: &str = "#737373";
        /// Mist Gray
        pub const MUTED: &str = "#B0B7C3";
        /// White
        pub const WHITE: &str = "#FFFFFF";
    }

    /// System colors
    pub mod system {
        /// Mist Gray border
        pub const BORDER: &str = "#B0B7C3";
        /// Hairline divider
        pub const DIVIDER: &str = "rgba(176, 183, 195, 0.3)";
        /// Default shadow
        pub const SHADOW: &str = "rgba(0, 0, 0, 0.08)";
        /// Deep shadow
        pub const SHADOW_DEEP: &str = "rgba(0, 0, 0, 0.15)";
        /// Orange glow tint
        pub const ORANGE_GLOW: &str = "rgba(255, 69, 0, 0.2)";
    }

    /// Light surface variant
    pub mod light {
        /// Screen background
        pub const BACKGROUND: &str = "#F5F5F5";
        /// Glass surface
        pub const SURFACE: &str = "rgba(255, 255, 255, 0.85)";
        /// Body text
        pub const TEXT: &str = "#2C2E33";
        /// Secondary text
        pub const TEXT_SECONDARY: &str = "#737373";
    }

    /// Dark surface variant
    pub mod dark {
        /// Screen background
        pub const BACKGROUND: &str = "#1C1C1E";
        /// Glass surface
        pub const SURFACE: &str = "rgba(28, 28, 30, 0.85)";
        /// Body text
        pub const TEXT: &str = "#FFFFFF";
        /// Secondary text
        pub const TEXT_SECONDARY: &str = "#8E8E93";
    }
}

// =============================================================================
// Palette
// =============================================================================

/// Brand colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryColors {
    /// Accent blue
    pub blue: Color,
    /// Glow orange
    pub orange: Color,
}

/// Background colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BackgroundColors {
    /// Screen background
    pub primary: Color,
    /// Opaque panel background
    pub secondary: Color,
    /// Glass surface
    pub glass: Color,
    /// Thinner glass surface
    pub glass_secondary: Color,
}

/// Text colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    /// Body text
    pub primary: Color,
    /// Supporting text
    pub secondary: Color,
    /// Placeholders, disabled labels, inactive tabs
    pub muted: Color,
    /// Text on colored backgrounds
    pub white: Color,
}

/// System colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemColors {
    /// Borders
    pub border: Color,
    /// Dividers
    pub divider: Color,
    /// Default shadow
    pub shadow: Color,
    /// Deep shadow
    pub shadow_deep: Color,
    /// Orange glow tint
    pub orange_glow: Color,
}

/// A light or dark surface variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceColors {
    /// Screen background
    pub background: Color,
    /// Glass surface
    pub surface: Color,
    /// Body text
    pub text: Color,
    /// Secondary text
    pub text_secondary: Color,
}

/// Complete color palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    /// Brand colors
    pub primary: PrimaryColors,
    /// Backgrounds
    pub background: BackgroundColors,
    /// Text
    pub text: TextColors,
    /// System colors
    pub system: SystemColors,
    /// Light surface variant
    pub light: SurfaceColors,
    /// Dark surface variant
    pub dark: SurfaceColors,
}

impl Palette {
    /// Look up a color by category and name
    ///
    /// Names use the camel-case keys of the design system
    /// (e.g. `("background", "glassSecondary")`). Unknown keys yield `None`.
    pub fn get(&self, category: &str, name: &str) -> Option<&Color> {
        match category {
            "primary" => match name {
                "blue" => Some(&self.primary.blue),
                "orange" => Some(&self.primary.orange),
                _ => None,
            },
            "background" => match name {
                "primary" => Some(&self.background.primary),
                "secondary" => Some(&self.background.secondary),
                "glass" => Some(&self.background.glass),
                "glassSecondary" => Some(&self.background.glass_secondary),
                _ => None,
            },
            "text" => match name {
                "primary" => Some(&self.text.primary),
                "secondary" => Some(&self.text.secondary),
                "muted" => Some(&self.text.muted),
                "white" => Some(&self.text.white),
                _ => None,
            },
            "system" => match name {
                "border" => Some(&self.system.border),
                "divider" => Some(&self.system.divider),
                "shadow" => Some(&self.system.shadow),
                "shadowDeep" => Some(&self.system.shadow_deep),
                "orangeGlow" => Some(&self.system.orange_glow),
                _ => None,
            },
            "light" => self.light.get(name),
            "dark" => self.dark.get(name),
            _ => None,
        }
    }
}

impl SurfaceColors {
    fn get(&self, name: &str) -> Option<&Color> {
        match name {
            "background" => Some(&self.background),
            "surface" => Some(&self.surface),
            "text" => Some(&self.text),
            "textSecondary" => Some(&self.text_secondary),
            _ => None,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        use colors::*;

        Self {
            primary: PrimaryColors {
                blue: primary::BLUE.to_string(),
                orange: primary::ORANGE.to_string(),
            },
            background: BackgroundColors {
                primary: background::PRIMARY.to_string(),
                secondary: background::SECONDARY.to_string(),
                glass: background::GLASS.to_string(),
                glass_secondary: background::GLASS_SECONDARY.to_string(),
            },
            text: TextColors {
                primary: text::PRIMARY.to_string(),
                secondary: text::SECONDARY.to_string(),
                muted: text::MUTED.to_string(),
                white: text::WHITE.to_string(),
            },
            system: SystemColors {
                border: system::BORDER.to_string(),
                divider: system::DIVIDER.to_string(),
                shadow: system::SHADOW.to_string(),
                shadow_deep: system::SHADOW_DEEP.to_string(),
                orange_glow: system::ORANGE_GLOW.to_string(),
            },
            light: SurfaceColors {
                background: light::BACKGROUND.to_string(),
                surface: light::SURFACE.to_string(),
                text: light::TEXT.to_string(),
                text_secondary: light::TEXT_SECONDARY.to_string(),
            },
            dark: SurfaceColors {
                background: dark::BACKGROUND.to_string(),
                surface: dark::SURFACE.to_string(),
                text: dark::TEXT.to_string(),
                text_secondary: dark::TEXT_SECONDARY.to_string(),
            },
        }
    }
}

// =============================================================================
// Theme Definition
// =============================================================================

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl ThemeName {
    /// Get the color scheme name
    pub fn color_scheme(&self) -> &'static str {
        match self {
            ThemeName::Light => "light",
            ThemeName::Dark => "dark",
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// Semantic color roles resolved against the active surface variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Accent blue
    Primary,
    /// Glow orange
    Accent,
    /// Screen background
    Background,
    /// Glass surface of the active variant
    Surface,
    /// Thinner glass surface
    GlassSecondary,
    /// Body text
    Text,
    /// Supporting text
    TextSecondary,
    /// Muted text
    TextMuted,
    /// Text on colored backgrounds
    TextInverse,
    /// Borders
    Border,
    /// Dividers
    Divider,
    /// Default shadow
    Shadow,
    /// Deep shadow
    ShadowDeep,
    /// Orange glow tint
    OrangeGlow,
}

/// Complete theme definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Theme name
    pub name: ThemeName,
    /// Color palette
    pub palette: Palette,
    /// Token registry
    pub tokens: DesignTokens,
}

impl Theme {
    /// Check if this is a dark theme
    pub fn is_dark(&self) -> bool {
        matches!(self.name, ThemeName::Dark)
    }

    /// Surface variant for this theme
    pub fn surface(&self) -> &SurfaceColors {
        if self.is_dark() {
            &self.palette.dark
        } else {
            &self.palette.light
        }
    }

    /// Resolve a semantic color
    pub fn color(&self, role: ColorRole) -> &str {
        let p = &self.palette;
        match role {
            ColorRole::Primary => &p.primary.blue,
            ColorRole::Accent => &p.primary.orange,
            ColorRole::Background => &self.surface().background,
            ColorRole::Surface => &self.surface().surface,
            ColorRole::GlassSecondary => &p.background.glass_secondary,
            ColorRole::Text => &self.surface().text,
            ColorRole::TextSecondary => &self.surface().text_secondary,
            ColorRole::TextMuted => &p.text.muted,
            ColorRole::TextInverse => &p.text.white,
            ColorRole::Border => &p.system.border,
            ColorRole::Divider => &p.system.divider,
            ColorRole::Shadow => &p.system.shadow,
            ColorRole::ShadowDeep => &p.system.shadow_deep,
            ColorRole::OrangeGlow => &p.system.orange_glow,
        }
    }

    /// Same theme with a registry built for another base scale
    pub fn with_base_scale(mut self, base_scale: f32) -> Self {
        self.tokens = DesignTokens::new(base_scale);
        self
    }
}

impl Default for Theme {
    fn default() -> Self {
        light_theme()
    }
}

/// Create the light theme
pub fn light_theme() -> Theme {
    Theme {
        name: ThemeName::Light,
        palette: Palette::default(),
        tokens: DesignTokens::new(BASE_SCALE),
    }
}

/// Create the dark theme
///
/// Shares the brand and system colors with the light theme. Backgrounds and
/// text switch to the dark surface variant.
pub fn dark_theme() -> Theme {
    let mut palette = Palette::default();
    palette.background.primary = colors::dark::BACKGROUND.to_string();
    palette.background.glass = colors::dark::SURFACE.to_string();
    palette.text.primary = colors::dark::TEXT.to_string();
    palette.text.secondary = colors::dark::TEXT_SECONDARY.to_string();

    Theme {
        name: ThemeName::Dark,
        palette,
        tokens: DesignTokens::new(BASE_SCALE),
    }
}

/// Get a theme by name
pub fn get_theme(name: ThemeName) -> Theme {
    match name {
        ThemeName::Light => light_theme(),
        ThemeName::Dark => dark_theme(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Color Utility Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFFFFF"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#1A73E8"), Some((26, 115, 232)));
        assert_eq!(parse_hex_color("FF4500"), Some((255, 69, 0)));
        assert_eq!(parse_hex_color("#FF"), None);
    }

    #[test]
    fn test_parse_rgba_color() {
        assert_eq!(
            parse_color("rgba(255, 255, 255, 0.85)"),
            Some((255, 255, 255, 0.85))
        );
        assert_eq!(parse_color("#2C2E33"), Some((44, 46, 51, 1.0)));
        assert_eq!(parse_color("rgba(255, 255, 255)"), None);
        assert_eq!(parse_color("rgba(0, 0, 0, 2.0)"), None);
    }

    #[test]
    fn test_rgba_format() {
        assert_eq!(rgba(255, 69, 0, 0.2), colors::system::ORANGE_GLOW);
    }

    // ==========================================================================
    // Palette Tests
    // ==========================================================================

    #[test]
    fn test_palette_lookup() {
        let palette = Palette::default();
        assert_eq!(palette.get("primary", "blue").unwrap(), "#1A73E8");
        assert_eq!(
            palette.get("background", "glassSecondary").unwrap(),
            "rgba(255, 255, 255, 0.65)"
        );
        assert_eq!(palette.get("dark", "textSecondary").unwrap(), "#8E8E93");
    }

    #[test]
    fn test_palette_unknown_keys() {
        let palette = Palette::default();
        assert!(palette.get("primary", "purple").is_none());
        assert!(palette.get("accent", "blue").is_none());
    }

    #[test]
    fn test_all_colors_parse() {
        let palette = Palette::default();
        let lookups = [
            ("primary", vec!["blue", "orange"]),
            ("background", vec!["primary", "secondary", "glass", "glassSecondary"]),
            ("text", vec!["primary", "secondary", "muted", "white"]),
            ("system", vec!["border", "divider", "shadow", "shadowDeep", "orangeGlow"]),
            ("light", vec!["background", "surface", "text", "textSecondary"]),
            ("dark", vec!["background", "surface", "text", "textSecondary"]),
        ];

        for (category, names) in lookups {
            for name in names {
                let color = palette
                    .get(category, name)
                    .unwrap_or_else(|| panic!("missing {}.{}", category, name));
                assert!(
                    parse_color(color).is_some(),
                    "{}.{} = {} does not parse",
                    category,
                    name,
                    color
                );
            }
        }
    }

    // ==========================================================================
    // Theme Tests
    // ==========================================================================

    #[test]
    fn test_theme_name_from_str() {
        assert_eq!("light".parse::<ThemeName>().unwrap(), ThemeName::Light);
        assert_eq!("DARK".parse::<ThemeName>().unwrap(), ThemeName::Dark);
        assert!("dim".parse::<ThemeName>().is_err());
    }

    #[test]
    fn test_light_theme_roles() {
        let theme = light_theme();
        assert!(!theme.is_dark());
        assert_eq!(theme.color(ColorRole::Background), "#F5F5F5");
        assert_eq!(theme.color(ColorRole::Surface), "rgba(255, 255, 255, 0.85)");
        assert_eq!(theme.color(ColorRole::Text), "#2C2E33");
    }

    #[test]
    fn test_dark_theme_roles() {
        let theme = dark_theme();
        assert!(theme.is_dark());
        assert_eq!(theme.color(ColorRole::Background), "#1C1C1E");
        assert_eq!(theme.color(ColorRole::Text), "#FFFFFF");
        // Brand colors are shared
        assert_eq!(theme.color(ColorRole::Primary), "#1A73E8");
        assert_eq!(theme.palette.background.glass, colors::dark::SURFACE);
    }

    #[test]
    fn test_with_base_scale() {
        let theme = light_theme().with_base_scale(1.5);
        assert_eq!(theme.tokens.base_scale(), 1.5);
        assert_eq!(theme.name, ThemeName::Light);
    }

    #[test]
    fn test_theme_serialization() {
        let theme = dark_theme();
        let json = serde_json::to_string(&theme).unwrap();
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
