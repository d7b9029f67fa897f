//! The theme registry.
//!
//! A [`Theme`] is built once (from built-in tokens plus optional
//! overrides), wrapped in an `Arc` and handed to every widget. It has no
//! setters: switching appearance produces a new theme.

use std::fmt;
use std::sync::Arc;

use crate::color::Color;
use crate::config::ThemeConfig;
use crate::curve::{CurveDescriptor, CurveName};
use crate::haptics::{HapticEngine, HapticKind, NoHaptics};
use crate::scale::{CornerRadius, FontDescriptor, FontToken, Shadow, ShadowToken, Spacing};
use crate::tokens::{Appearance, ColorToken, Palette};

/// Read-only design tokens plus the haptic engine.
#[derive(Clone)]
pub struct Theme {
    appearance: Appearance,
    light: Palette,
    dark: Palette,
    curves: [CurveDescriptor; CurveName::COUNT],
    haptics_enabled: bool,
    haptics: Arc<dyn HapticEngine>,
}

impl Theme {
    /// Built-in tokens, light appearance, no haptics.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Starts building a theme.
    #[must_use]
    pub fn builder() -> ThemeBuilder {
        ThemeBuilder::default()
    }

    /// Returns a copy of this theme in another appearance.
    #[must_use]
    pub fn with_appearance(&self, appearance: Appearance) -> Self {
        Self {
            appearance,
            ..self.clone()
        }
    }

    /// Appearance used by [`Theme::current`].
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    /// Resolves a color token for an appearance.
    #[must_use]
    pub fn color(&self, token: ColorToken, appearance: Appearance) -> Color {
        self.palette(appearance).get(token)
    }

    /// Resolves a color token for the theme's own appearance.
    #[must_use]
    pub fn current(&self, token: ColorToken) -> Color {
        self.color(token, self.appearance)
    }

    /// Chart color for the `index`-th segment; cycles through the palette.
    #[must_use]
    pub fn chart_color(&self, index: usize, appearance: Appearance) -> Color {
        self.palette(appearance).chart(index)
    }

    /// Resolves a named curve.
    #[must_use]
    pub fn curve(&self, name: CurveName) -> CurveDescriptor {
        self.curves[name.index()]
    }

    /// Resolves a spacing token.
    #[must_use]
    pub fn spacing(&self, spacing: Spacing) -> f32 {
        spacing.points()
    }

    /// Resolves a corner radius token.
    #[must_use]
    pub fn corner_radius(&self, radius: CornerRadius) -> f32 {
        radius.points()
    }

    /// Resolves a font token.
    #[must_use]
    pub fn font(&self, font: FontToken) -> FontDescriptor {
        font.descriptor()
    }

    /// Resolves a shadow token.
    #[must_use]
    pub fn shadow(&self, shadow: ShadowToken) -> Shadow {
        shadow.shadow()
    }

    /// Returns true if haptic feedback is played.
    #[must_use]
    pub fn haptics_enabled(&self) -> bool {
        self.haptics_enabled
    }

    /// Plays haptic feedback. Never blocks, never fails.
    pub fn trigger_haptic(&self, kind: HapticKind) {
        if !self.haptics_enabled {
            return;
        }
        tracing::trace!(?kind, "haptic");
        self.haptics.trigger(kind);
    }

    fn palette(&self, appearance: Appearance) -> &Palette {
        match appearance {
            Appearance::Light => &self.light,
            Appearance::Dark => &self.dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("appearance", &self.appearance)
            .field("curves", &self.curves)
            .field("haptics_enabled", &self.haptics_enabled)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Theme`].
#[derive(Default)]
pub struct ThemeBuilder {
    appearance: Option<Appearance>,
    haptics: Option<Arc<dyn HapticEngine>>,
    config: ThemeConfig,
}

impl ThemeBuilder {
    /// Sets the appearance. Takes precedence over the config file.
    #[must_use]
    pub fn appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = Some(appearance);
        self
    }

    /// Sets the haptic engine.
    #[must_use]
    pub fn haptics(mut self, engine: Arc<dyn HapticEngine>) -> Self {
        self.haptics = Some(engine);
        self
    }

    /// Applies overrides from a parsed config.
    #[must_use]
    pub fn config(mut self, config: ThemeConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the theme.
    #[must_use]
    pub fn build(self) -> Theme {
        let config = self.config;

        let mut light = Palette::LIGHT;
        let mut dark = Palette::DARK;
        let palettes = [(Appearance::Light, &mut light), (Appearance::Dark, &mut dark)];
        for (appearance, palette) in palettes {
            for (token, hex) in config.colors(appearance).iter() {
                palette.set(token, Color::from_hex_str(hex));
            }
        }

        let curves = CurveName::ALL.map(|name| match config.curves.get(name) {
            Some(descriptor) if descriptor.is_valid() => descriptor,
            Some(descriptor) => {
                tracing::warn!(?name, ?descriptor, "rejected curve override, keeping built-in");
                name.builtin()
            }
            None => name.builtin(),
        });

        Theme {
            appearance: self.appearance.or(config.appearance).unwrap_or_default(),
            light,
            dark,
            curves,
            haptics_enabled: config.haptics.unwrap_or(true),
            haptics: self.haptics.unwrap_or_else(|| Arc::new(NoHaptics)),
        }
    }
}
