//! Theme overrides loaded from TOML.
//!
//! ```toml
//! haptics = true
//! appearance = "dark"
//!
//! [light]
//! primary = "#0A84FF"
//!
//! [curves.bouncy]
//! duration = 0.6
//! bounce = 0.35
//! ```
//!
//! Color values are hex strings; malformed ones resolve to black when the
//! theme is built. Unknown token names are rejected at parse time.

use std::path::Path;

use serde::Deserialize;

use crate::curve::{CurveDescriptor, CurveName};
use crate::error::{ThemeError, ThemeResult};
use crate::tokens::{Appearance, ColorToken};

/// Per-appearance color overrides, as hex strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaletteOverrides {
    /// Hex color for `primary`.
    pub primary: Option<String>,
    /// Hex color for `secondary`.
    pub secondary: Option<String>,
    /// Hex color for `accent`.
    pub accent: Option<String>,
    /// Hex color for `background`.
    pub background: Option<String>,
    /// Hex color for `surface`.
    pub surface: Option<String>,
    /// Hex color for `surface_elevated`.
    pub surface_elevated: Option<String>,
    /// Hex color for `text_primary`.
    pub text_primary: Option<String>,
    /// Hex color for `text_secondary`.
    pub text_secondary: Option<String>,
    /// Hex color for `text_tertiary`.
    pub text_tertiary: Option<String>,
    /// Hex color for `separator`.
    pub separator: Option<String>,
    /// Hex color for `track`.
    pub track: Option<String>,
    /// Hex color for `success`.
    pub success: Option<String>,
    /// Hex color for `warning`.
    pub warning: Option<String>,
    /// Hex color for `error`.
    pub error: Option<String>,
    /// Hex color for `info`.
    pub info: Option<String>,
}

impl PaletteOverrides {
    /// Returns the override for a token, if any.
    #[must_use]
    pub fn get(&self, token: ColorToken) -> Option<&str> {
        let value = match token {
            ColorToken::Primary => &self.primary,
            ColorToken::Secondary => &self.secondary,
            ColorToken::Accent => &self.accent,
            ColorToken::Background => &self.background,
            ColorToken::Surface => &self.surface,
            ColorToken::SurfaceElevated => &self.surface_elevated,
            ColorToken::TextPrimary => &self.text_primary,
            ColorToken::TextSecondary => &self.text_secondary,
            ColorToken::TextTertiary => &self.text_tertiary,
            ColorToken::Separator => &self.separator,
            ColorToken::Track => &self.track,
            ColorToken::Success => &self.success,
            ColorToken::Warning => &self.warning,
            ColorToken::Error => &self.error,
            ColorToken::Info => &self.info,
        };
        value.as_deref()
    }

    /// Iterates over the tokens that are overridden.
    pub fn iter(&self) -> impl Iterator<Item = (ColorToken, &str)> + '_ {
        ColorToken::ALL
            .into_iter()
            .filter_map(move |token| self.get(token).map(|hex| (token, hex)))
    }
}

/// Curve overrides by name.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurveOverrides {
    /// Spring for the `instant` curve.
    pub instant: Option<CurveDescriptor>,
    /// Spring for the `quick` curve.
    pub quick: Option<CurveDescriptor>,
    /// Spring for the `standard` curve.
    pub standard: Option<CurveDescriptor>,
    /// Spring for the `smooth` curve.
    pub smooth: Option<CurveDescriptor>,
    /// Spring for the `gentle` curve.
    pub gentle: Option<CurveDescriptor>,
    /// Spring for the `bouncy` curve.
    pub bouncy: Option<CurveDescriptor>,
    /// Spring for the `snappy` curve.
    pub snappy: Option<CurveDescriptor>,
    /// Spring for the `interactive` curve.
    pub interactive: Option<CurveDescriptor>,
}

impl CurveOverrides {
    /// Returns the override for a curve, if any.
    #[must_use]
    pub fn get(&self, name: CurveName) -> Option<CurveDescriptor> {
        match name {
            CurveName::Instant => self.instant,
            CurveName::Quick => self.quick,
            CurveName::Standard => self.standard,
            CurveName::Smooth => self.smooth,
            CurveName::Gentle => self.gentle,
            CurveName::Bouncy => self.bouncy,
            CurveName::Snappy => self.snappy,
            CurveName::Interactive => self.interactive,
        }
    }
}

/// Parsed override file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Appearance to start in.
    pub appearance: Option<Appearance>,
    /// Whether haptics are played.
    pub haptics: Option<bool>,
    /// Light palette overrides.
    pub light: PaletteOverrides,
    /// Dark palette overrides.
    pub dark: PaletteOverrides,
    /// Curve overrides.
    pub curves: CurveOverrides,
}

impl ThemeConfig {
    /// Parses overrides from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] for invalid TOML or unknown keys.
    pub fn from_toml_str(source: &str) -> ThemeResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses an override file.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Io`] if the file can't be read and
    /// [`ThemeError::Parse`] if its contents are invalid.
    pub fn from_toml_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded theme config");
        Self::from_toml_str(&source)
    }

    /// Overrides for one appearance.
    #[must_use]
    pub fn colors(&self, appearance: Appearance) -> &PaletteOverrides {
        match appearance {
            Appearance::Light => &self.light,
            Appearance::Dark => &self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = ThemeConfig::from_toml_str(
            r##"
            haptics = false
            appearance = "dark"

            [light]
            primary = "#112233"

            [dark]
            text_primary = "#FFFFFF"

            [curves.bouncy]
            duration = 0.9
            bounce = 0.4

            [curves.quick]
            duration = 0.1
            "##,
        )
        .unwrap();

        assert_eq!(config.haptics, Some(false));
        assert_eq!(config.appearance, Some(Appearance::Dark));
        assert_eq!(config.light.get(ColorToken::Primary), Some("#112233"));
        assert_eq!(config.dark.get(ColorToken::TextPrimary), Some("#FFFFFF"));
        assert_eq!(config.dark.get(ColorToken::Primary), None);
        assert_eq!(
            config.curves.get(CurveName::Bouncy),
            Some(CurveDescriptor::new(0.9, 0.4))
        );
        assert_eq!(config.curves.get(CurveName::Quick).map(|c| c.bounce), Some(0.0));
        assert_eq!(config.curves.get(CurveName::Gentle), None);
    }

    #[test]
    fn test_iter_overrides() {
        let config = ThemeConfig::from_toml_str(
            "[light]\nsuccess = \"#00FF00\"\nprimary = \"#0000FF\"",
        )
        .unwrap();
        let tokens: Vec<_> = config.light.iter().map(|(token, _)| token).collect();
        assert_eq!(tokens, vec![ColorToken::Primary, ColorToken::Success]);
    }

    #[test]
    fn test_empty_config() {
        let config = ThemeConfig::from_toml_str("").unwrap();
        assert_eq!(config.light.iter().count(), 0);
        assert_eq!(config.curves.get(CurveName::Standard), None);
        assert_eq!(config.haptics, None);
    }

    #[test]
    fn test_unknown_token_is_rejected() {
        let err = ThemeConfig::from_toml_str("[light]\nneon = \"#00FF00\"").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
    }

    #[test]
    fn test_unknown_top_level_key_is_rejected() {
        assert!(ThemeConfig::from_toml_str("sparkles = true").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = ThemeConfig::from_toml_file("/definitely/not/here/theme.toml").unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }
}
