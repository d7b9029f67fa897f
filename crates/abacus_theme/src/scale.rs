//! Spacing, corner radius, typography and shadow scales.

use crate::color::Color;

/// Spacing scale (4pt grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spacing {
    /// 2pt.
    Xxs,
    /// 4pt.
    Xs,
    /// 8pt.
    Sm,
    /// 16pt.
    Md,
    /// 24pt.
    Lg,
    /// 32pt.
    Xl,
    /// 48pt.
    Xxl,
}

impl Spacing {
    /// Length in points.
    #[must_use]
    pub const fn points(self) -> f32 {
        match self {
            Self::Xxs => 2.0,
            Self::Xs => 4.0,
            Self::Sm => 8.0,
            Self::Md => 16.0,
            Self::Lg => 24.0,
            Self::Xl => 32.0,
            Self::Xxl => 48.0,
        }
    }
}

/// Corner radius scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerRadius {
    /// Chips, small buttons.
    Small,
    /// Fields and buttons.
    Medium,
    /// Cards.
    Large,
    /// Sheets.
    ExtraLarge,
    /// Fully rounded ends.
    Pill,
}

impl CornerRadius {
    /// Radius in points.
    #[must_use]
    pub const fn points(self) -> f32 {
        match self {
            Self::Small => 6.0,
            Self::Medium => 10.0,
            Self::Large => 16.0,
            Self::ExtraLarge => 24.0,
            Self::Pill => 999.0,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// 400.
    Regular,
    /// 500.
    Medium,
    /// 600.
    Semibold,
    /// 700.
    Bold,
}

/// Resolved font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontDescriptor {
    /// Point size.
    pub size: f32,
    /// Weight.
    pub weight: FontWeight,
    /// Digits share one advance width, so animated numbers don't jitter.
    pub monospaced_digits: bool,
}

/// Typography scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontToken {
    /// Screen headline numbers.
    LargeTitle,
    /// Section titles.
    Title,
    /// Card titles.
    Headline,
    /// Body copy.
    Body,
    /// Secondary copy.
    Callout,
    /// Labels and footnotes.
    Caption,
    /// Animated numeric readouts.
    Numeric,
}

impl FontToken {
    /// Resolves the font.
    #[must_use]
    pub const fn descriptor(self) -> FontDescriptor {
        let (size, weight, monospaced_digits) = match self {
            Self::LargeTitle => (34.0, FontWeight::Bold, true),
            Self::Title => (22.0, FontWeight::Semibold, false),
            Self::Headline => (17.0, FontWeight::Semibold, false),
            Self::Body => (17.0, FontWeight::Regular, false),
            Self::Callout => (16.0, FontWeight::Regular, false),
            Self::Caption => (12.0, FontWeight::Medium, false),
            Self::Numeric => (28.0, FontWeight::Semibold, true),
        };
        FontDescriptor {
            size,
            weight,
            monospaced_digits,
        }
    }
}

/// Drop shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Shadow color (usually translucent black).
    pub color: Color,
    /// Blur radius.
    pub radius: f32,
    /// Horizontal offset.
    pub x: f32,
    /// Vertical offset.
    pub y: f32,
}

/// Shadow scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowToken {
    /// Barely there, for fields.
    Subtle,
    /// Resting cards.
    Card,
    /// Floating elements (selected segments, drag thumbs).
    Floating,
}

impl ShadowToken {
    /// Resolves the shadow.
    #[must_use]
    pub const fn shadow(self) -> Shadow {
        match self {
            Self::Subtle => Shadow {
                color: Color::rgba(0.0, 0.0, 0.0, 0.05),
                radius: 2.0,
                x: 0.0,
                y: 1.0,
            },
            Self::Card => Shadow {
                color: Color::rgba(0.0, 0.0, 0.0, 0.08),
                radius: 8.0,
                x: 0.0,
                y: 4.0,
            },
            Self::Floating => Shadow {
                color: Color::rgba(0.0, 0.0, 0.0, 0.16),
                radius: 16.0,
                x: 0.0,
                y: 8.0,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spacing_grows() {
        let steps = [
            Spacing::Xxs,
            Spacing::Xs,
            Spacing::Sm,
            Spacing::Md,
            Spacing::Lg,
            Spacing::Xl,
            Spacing::Xxl,
        ];
        for pair in steps.windows(2) {
            assert!(pair[0].points() < pair[1].points());
        }
    }

    #[test]
    fn test_numeric_fonts_use_tabular_digits() {
        assert!(FontToken::Numeric.descriptor().monospaced_digits);
        assert!(FontToken::LargeTitle.descriptor().monospaced_digits);
        assert!(!FontToken::Body.descriptor().monospaced_digits);
    }
}
