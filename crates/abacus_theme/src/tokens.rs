//! Semantic color tokens and per-appearance palettes.
//!
//! Every token is an enum variant and every palette is a fixed array
//! indexed by that variant, so a lookup can never miss.

use serde::Deserialize;

use crate::color::Color;

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    /// Light appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

/// Semantic color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Brand color for primary actions and progress fills.
    Primary,
    /// Secondary brand color.
    Secondary,
    /// Highlight color for selection.
    Accent,
    /// Screen background.
    Background,
    /// Card and field background.
    Surface,
    /// Raised surfaces (popovers, selected cards).
    SurfaceElevated,
    /// Main text.
    TextPrimary,
    /// Supporting text.
    TextSecondary,
    /// Placeholders and disabled text.
    TextTertiary,
    /// Hairlines and field borders.
    Separator,
    /// Unfilled portion of rings, bars and slider tracks.
    Track,
    /// Positive values and gains.
    Success,
    /// Warnings.
    Warning,
    /// Negative values, losses and errors.
    Error,
    /// Informational highlights.
    Info,
}

impl ColorToken {
    /// Number of color tokens.
    pub const COUNT: usize = 15;

    /// All tokens, in palette order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Primary,
        Self::Secondary,
        Self::Accent,
        Self::Background,
        Self::Surface,
        Self::SurfaceElevated,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::TextTertiary,
        Self::Separator,
        Self::Track,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Info,
    ];

    /// Palette slot for this token.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Number of colors in the chart palette.
pub const CHART_PALETTE_LEN: usize = 8;

/// Resolved colors for one appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: [Color; ColorToken::COUNT],
    chart: [Color; CHART_PALETTE_LEN],
}

impl Palette {
    /// Built-in light palette.
    pub const LIGHT: Self = Self {
        colors: [
            Color::hex(0x007AFF),  // Primary
            Color::hex(0x5856D6),  // Secondary
            Color::hex(0xFF9F0A),  // Accent
            Color::hex(0xF2F2F7),  // Background
            Color::hex(0xFFFFFF),  // Surface
            Color::hex(0xFFFFFF),  // SurfaceElevated
            Color::hex(0x1C1C1E),  // TextPrimary
            Color::hex(0x6C6C70),  // TextSecondary
            Color::hex(0xAEAEB2),  // TextTertiary
            Color::hex(0xD1D1D6),  // Separator
            Color::hex(0xE5E5EA),  // Track
            Color::hex(0x34C759),  // Success
            Color::hex(0xFF9500),  // Warning
            Color::hex(0xFF3B30),  // Error
            Color::hex(0x32ADE6),  // Info
        ],
        chart: [
            Color::hex(0x007AFF),
            Color::hex(0x34C759),
            Color::hex(0xFF9500),
            Color::hex(0xAF52DE),
            Color::hex(0xFF2D55),
            Color::hex(0x5AC8FA),
            Color::hex(0xFFCC00),
            Color::hex(0x8E8E93),
        ],
    };

    /// Built-in dark palette.
    pub const DARK: Self = Self {
        colors: [
            Color::hex(0x0A84FF),  // Primary
            Color::hex(0x5E5CE6),  // Secondary
            Color::hex(0xFFB340),  // Accent
            Color::hex(0x000000),  // Background
            Color::hex(0x1C1C1E),  // Surface
            Color::hex(0x2C2C2E),  // SurfaceElevated
            Color::hex(0xFFFFFF),  // TextPrimary
            Color::hex(0xAEAEB2),  // TextSecondary
            Color::hex(0x636366),  // TextTertiary
            Color::hex(0x38383A),  // Separator
            Color::hex(0x2C2C2E),  // Track
            Color::hex(0x30D158),  // Success
            Color::hex(0xFF9F0A),  // Warning
            Color::hex(0xFF453A),  // Error
            Color::hex(0x64D2FF),  // Info
        ],
        chart: [
            Color::hex(0x0A84FF),
            Color::hex(0x30D158),
            Color::hex(0xFF9F0A),
            Color::hex(0xBF5AF2),
            Color::hex(0xFF375F),
            Color::hex(0x64D2FF),
            Color::hex(0xFFD60A),
            Color::hex(0x98989D),
        ],
    };

    /// Built-in palette for an appearance.
    #[must_use]
    pub const fn builtin(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::LIGHT,
            Appearance::Dark => Self::DARK,
        }
    }

    /// Resolves a token.
    #[inline]
    #[must_use]
    pub fn get(&self, token: ColorToken) -> Color {
        self.colors[token.index()]
    }

    /// Chart color for a segment index; wraps around the palette.
    #[inline]
    #[must_use]
    pub fn chart(&self, index: usize) -> Color {
        self.chart[index % CHART_PALETTE_LEN]
    }

    /// Replaces a token's color.
    pub fn set(&mut self, token: ColorToken, color: Color) {
        self.colors[token.index()] = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_index_order() {
        for (i, token) in ColorToken::ALL.iter().enumerate() {
            assert_eq!(token.index(), i);
        }
    }

    #[test]
    fn test_chart_wraps() {
        let palette = Palette::LIGHT;
        assert_eq!(palette.chart(0), palette.chart(CHART_PALETTE_LEN));
        assert_eq!(palette.chart(3), palette.chart(3 + 2 * CHART_PALETTE_LEN));
    }

    #[test]
    fn test_appearances_differ() {
        assert_ne!(
            Palette::LIGHT.get(ColorToken::Background),
            Palette::DARK.get(ColorToken::Background)
        );
    }
}
