//! Design tokens shared by every component.
//!
//! Tokens are static name/value tables. [`css_variables`] renders them as CSS custom
//! properties (`--care-color-primary`, `--care-space-4`, ...) which the provider applies to its
//! root element; utility classes in the host stylesheet resolve against those properties.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Named design-token value.
pub struct Token {
    /// Token name within its group.
    pub name: &'static str,
    /// CSS value.
    pub value: &'static str,
}

const fn token(name: &'static str, value: &'static str) -> Token {
    Token { name, value }
}

/// Brand, neutral, semantic, and clinical colors.
pub const COLORS: &[Token] = &[
    token("primary", "#0f6fb8"),
    token("primary-strong", "#0a4f86"),
    token("secondary", "#3d8b7d"),
    token("accent", "#7a5af8"),
    token("surface", "#ffffff"),
    token("surface-muted", "#f4f7fa"),
    token("border", "#d5dde5"),
    token("text", "#1b2733"),
    token("text-muted", "#5b6b7b"),
    token("success", "#1f8a4c"),
    token("warning", "#b7791f"),
    token("danger", "#c53030"),
    token("info", "#2b6cb0"),
    token("critical", "#9b1c1c"),
    token("vital", "#0e7c86"),
    token("emergency", "#e02424"),
];

const DARK_COLORS: &[Token] = &[
    token("surface", "#111a22"),
    token("surface-muted", "#1a2530"),
    token("border", "#2c3a47"),
    token("text", "#e6edf3"),
    token("text-muted", "#9fb0c0"),
];

const HIGH_CONTRAST_COLORS: &[Token] = &[
    token("surface", "#000000"),
    token("surface-muted", "#000000"),
    token("border", "#ffffff"),
    token("text", "#ffffff"),
    token("text-muted", "#ffffff"),
    token("primary", "#4cc2ff"),
    token("danger", "#ff6b6b"),
    token("emergency", "#ff3b3b"),
];

/// Spacing scale (4px base).
pub const SPACING: &[Token] = &[
    token("0", "0"),
    token("1", "0.25rem"),
    token("2", "0.5rem"),
    token("3", "0.75rem"),
    token("4", "1rem"),
    token("6", "1.5rem"),
    token("8", "2rem"),
    token("12", "3rem"),
];

/// Font-size scale.
pub const FONT_SIZES: &[Token] = &[
    token("xs", "0.75rem"),
    token("sm", "0.875rem"),
    token("md", "1rem"),
    token("lg", "1.125rem"),
    token("xl", "1.25rem"),
    token("2xl", "1.5rem"),
    token("3xl", "1.875rem"),
];

/// Corner radii.
pub const RADII: &[Token] = &[
    token("sm", "0.25rem"),
    token("md", "0.5rem"),
    token("lg", "0.75rem"),
    token("full", "9999px"),
];

/// Elevation shadows.
pub const SHADOWS: &[Token] = &[
    token("raised", "0 1px 3px rgba(16, 24, 40, 0.12)"),
    token("overlay", "0 8px 24px rgba(16, 24, 40, 0.18)"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
/// Color theme applied by the provider.
pub enum Theme {
    /// Light surfaces.
    #[default]
    Light,
    /// Dark surfaces.
    Dark,
    /// Maximum-contrast palette for low-vision and bright-room use.
    HighContrast,
}

impl Theme {
    /// Stable token used in `data-care-theme`.
    pub fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::HighContrast => "high-contrast",
        }
    }

    fn color_overrides(self) -> &'static [Token] {
        match self {
            Self::Light => &[],
            Self::Dark => DARK_COLORS,
            Self::HighContrast => HIGH_CONTRAST_COLORS,
        }
    }
}

fn lookup(table: &'static [Token], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|token| token.name == name)
        .map(|token| token.value)
}

/// Light-theme color value by name.
pub fn color(name: &str) -> Option<&'static str> {
    lookup(COLORS, name)
}

/// Color value by name for a theme, falling back to the light palette.
pub fn themed_color(theme: Theme, name: &str) -> Option<&'static str> {
    lookup(theme.color_overrides(), name).or_else(|| color(name))
}

/// Spacing value by step name.
pub fn spacing(step: &str) -> Option<&'static str> {
    lookup(SPACING, step)
}

/// Font size by scale name.
pub fn font_size(name: &str) -> Option<&'static str> {
    lookup(FONT_SIZES, name)
}

/// Renders all tokens for `theme` as CSS custom-property declarations.
pub fn css_variables(theme: Theme) -> String {
    let mut css = String::new();
    for token in COLORS {
        let value = themed_color(theme, token.name).unwrap_or(token.value);
        css.push_str(&format!("--care-color-{}:{};", token.name, value));
    }
    for (group, table) in [
        ("space", SPACING),
        ("font", FONT_SIZES),
        ("radius", RADII),
        ("shadow", SHADOWS),
    ] {
        for token in table {
            css.push_str(&format!("--care-{group}-{}:{};", token.name, token.value));
        }
    }
    css
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lookups_resolve_known_tokens() {
        assert_eq!(color("emergency"), Some("#e02424"));
        assert_eq!(spacing("4"), Some("1rem"));
        assert_eq!(font_size("2xl"), Some("1.5rem"));
        assert_eq!(color("chartreuse"), None);
    }

    #[test]
    fn themes_override_surfaces_and_fall_back_otherwise() {
        assert_eq!(themed_color(Theme::Dark, "surface"), Some("#111a22"));
        assert_eq!(themed_color(Theme::Dark, "primary"), Some("#0f6fb8"));
        assert_eq!(themed_color(Theme::HighContrast, "primary"), Some("#4cc2ff"));
    }

    #[test]
    fn css_variables_emit_every_group_once() {
        let css = css_variables(Theme::Dark);
        assert!(css.contains("--care-color-surface:#111a22;"));
        assert!(css.contains("--care-space-4:1rem;"));
        assert!(css.contains("--care-radius-full:9999px;"));
        assert_eq!(css.matches("--care-color-surface:").count(), 1);

        let declarations = css.matches(';').count();
        let expected =
            COLORS.len() + SPACING.len() + FONT_SIZES.len() + RADII.len() + SHADOWS.len();
        assert_eq!(declarations, expected);
    }
}
