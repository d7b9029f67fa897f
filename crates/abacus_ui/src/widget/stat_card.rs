//! Summary card: title, animated headline value, optional trend.

use std::any::Any;
use std::sync::Arc;

use abacus_theme::{ColorToken, CornerRadius, CurveName, FontToken, ShadowToken, Spacing, Theme};

use crate::accessibility::{AccessibilityNode, Role};
use crate::animation::{finite_or_zero, AnimatedValue};
use crate::format::{format_percent, ValueFormat};
use crate::input::InputState;
use crate::layout::Rect;
use crate::render::{RenderCommand, TextAlign};
use crate::widget::{Widget, WidgetResponse, WidgetState};

/// Card showing one headline figure.
pub struct StatCard {
    state: WidgetState,
    theme: Arc<Theme>,
    title: String,
    value: AnimatedValue,
    format: ValueFormat,
    subtitle: Option<String>,
    /// Relative change, as a fraction (0.024 is +2.4%).
    trend: Option<f64>,
}

impl StatCard {
    /// Creates a card whose value rolls up from 0.
    #[must_use]
    pub fn new(
        theme: Arc<Theme>,
        rect: Rect,
        title: impl Into<String>,
        value: f64,
        format: ValueFormat,
    ) -> Self {
        let curve = theme.curve(CurveName::Smooth);
        Self {
            state: WidgetState::new(rect),
            theme,
            title: title.into(),
            value: AnimatedValue::mounted(0.0, value, curve),
            format,
            subtitle: None,
            trend: None,
        }
    }

    /// Adds a subtitle line.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Adds a trend badge.
    #[must_use]
    pub fn with_trend(mut self, trend: f64) -> Self {
        self.trend = Some(finite_or_zero(trend));
        self
    }

    /// Animates the headline value.
    pub fn set_value(&mut self, value: f64) {
        if self.value.set_target(value) {
            self.state.mark_dirty();
        }
    }

    /// Replaces the trend badge.
    pub fn set_trend(&mut self, trend: Option<f64>) {
        self.trend = trend.map(finite_or_zero);
        self.state.mark_dirty();
    }

    /// Displayed headline text.
    #[must_use]
    pub fn value_text(&self) -> String {
        self.format.apply(self.value.value())
    }

    /// Trend badge text and color, if any.
    #[must_use]
    pub fn trend_badge(&self) -> Option<(String, ColorToken)> {
        self.trend.map(|trend| {
            let text = format_percent(trend.abs(), 1);
            if trend > 0.0 {
                (format!("▲ {text}"), ColorToken::Success)
            } else if trend < 0.0 {
                (format!("▼ {text}"), ColorToken::Error)
            } else {
                (text, ColorToken::TextSecondary)
            }
        })
    }
}

impl Widget for StatCard {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, _input: &InputState, dt: f32) -> WidgetResponse {
        if self.value.tick(dt) {
            self.state.mark_dirty();
        }
        WidgetResponse::default()
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        let rect = self.state.rect;
        let inner = rect.shrink(theme.spacing(Spacing::Md));
        let caption = theme.font(FontToken::Caption);
        let headline = theme.font(FontToken::Title);

        commands.push(RenderCommand::Rect {
            bounds: rect,
            color: theme.current(ColorToken::Surface),
            corner_radius: theme.corner_radius(CornerRadius::Large),
            shadow: Some(theme.shadow(ShadowToken::Card)),
        });

        let mut y = inner.y + caption.size;
        commands.push(RenderCommand::Text {
            text: self.title.clone(),
            x: inner.x,
            y,
            color: theme.current(ColorToken::TextSecondary),
            font: caption,
            align: TextAlign::Leading,
        });

        y += theme.spacing(Spacing::Xs) + headline.size;
        commands.push(RenderCommand::Text {
            text: self.value_text(),
            x: inner.x,
            y,
            color: theme.current(ColorToken::TextPrimary),
            font: headline,
            align: TextAlign::Leading,
        });

        if let Some((text, color)) = self.trend_badge() {
            commands.push(RenderCommand::Text {
                text,
                x: inner.right(),
                y,
                color: theme.current(color),
                font: caption,
                align: TextAlign::Trailing,
            });
        }

        if let Some(subtitle) = &self.subtitle {
            y += theme.spacing(Spacing::Xs) + caption.size;
            commands.push(RenderCommand::Text {
                text: subtitle.clone(),
                x: inner.x,
                y,
                color: theme.current(ColorToken::TextTertiary),
                font: caption,
                align: TextAlign::Leading,
            });
        }
    }

    fn accessibility(&self) -> AccessibilityNode {
        let mut value = self.format.apply(self.value.target());
        if let Some(trend) = self.trend {
            let direction = if trend >= 0.0 { "up" } else { "down" };
            value = format!("{value}, {direction} {}", format_percent(trend.abs(), 1));
        }
        let node = AccessibilityNode::new(Role::Summary, self.title.clone()).with_value(value);
        match &self.subtitle {
            Some(subtitle) => node.with_hint(subtitle.clone()),
            None => node,
        }
    }

    fn set_theme(&mut self, theme: Arc<Theme>) {
        self.theme = theme;
        self.state.mark_dirty();
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
