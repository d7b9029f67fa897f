//! Rolling numeric readout.

use std::any::Any;
use std::sync::Arc;

use abacus_theme::{ColorToken, CurveName, FontToken, Theme};

use crate::accessibility::{AccessibilityNode, Role};
use crate::animation::AnimatedValue;
use crate::format::ValueFormat;
use crate::input::InputState;
use crate::layout::Rect;
use crate::render::{RenderCommand, TextAlign};
use crate::widget::{Widget, WidgetResponse, WidgetState};

/// A number that counts toward its target ("$1,204.33" rolling to "$1,310.00").
pub struct AnimatedCounter {
    state: WidgetState,
    theme: Arc<Theme>,
    value: AnimatedValue,
    format: ValueFormat,
    label: String,
    font: FontToken,
    color: ColorToken,
    align: TextAlign,
}

impl AnimatedCounter {
    /// Creates a counter that rolls up from 0 to `value`.
    #[must_use]
    pub fn new(
        theme: Arc<Theme>,
        rect: Rect,
        label: impl Into<String>,
        value: f64,
        format: ValueFormat,
    ) -> Self {
        let curve = theme.curve(CurveName::Smooth);
        Self {
            state: WidgetState::new(rect),
            theme,
            value: AnimatedValue::mounted(0.0, value, curve),
            format,
            label: label.into(),
            font: FontToken::Numeric,
            color: ColorToken::TextPrimary,
            align: TextAlign::Leading,
        }
    }

    /// Starts from `baseline` instead of 0.
    #[must_use]
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        let target = self.value.target();
        self.value = AnimatedValue::mounted(baseline, target, self.value.curve());
        self
    }

    /// Uses another curve.
    #[must_use]
    pub fn with_curve(mut self, curve: CurveName) -> Self {
        self.value.set_curve(self.theme.curve(curve));
        self
    }

    /// Uses another font.
    #[must_use]
    pub fn with_font(mut self, font: FontToken) -> Self {
        self.font = font;
        self
    }

    /// Uses another text color.
    #[must_use]
    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    /// Aligns the text within the widget's rect.
    #[must_use]
    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Rolls to a new value from the one on screen.
    pub fn set_value(&mut self, value: f64) {
        if self.value.set_target(value) {
            self.state.mark_dirty();
        }
    }

    /// Displayed value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.value()
    }

    /// Text for the displayed value.
    #[must_use]
    pub fn text(&self) -> String {
        self.format.apply(self.value.value())
    }
}

impl Widget for AnimatedCounter {
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
        let rect = self.state.rect;
        let x = match self.align {
            TextAlign::Leading => rect.x,
            TextAlign::Center => rect.center().0,
            TextAlign::Trailing => rect.right(),
        };
        commands.push(RenderCommand::Text {
            text: self.text(),
            x,
            y: rect.center().1,
            color: self.theme.current(self.color),
            font: self.theme.font(self.font),
            align: self.align,
        });
    }

    fn accessibility(&self) -> AccessibilityNode {
        AccessibilityNode::new(Role::StaticText, self.label.clone())
            .with_value(self.format.apply(self.value.target()))
    }

    fn set_theme(&mut self, theme: Arc<Theme>) {
        self.theme = theme;
        self.state.mark_dirty();
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::CurrencyFormat;

    #[test]
    fn test_counter_rolls_to_target() {
        let theme = Arc::new(Theme::new());
        let mut counter = AnimatedCounter::new(
            theme,
            Rect::new(0.0, 0.0, 200.0, 40.0),
            "Monthly payment",
            1310.0,
            ValueFormat::Currency(CurrencyFormat::default()),
        );
        assert_eq!(counter.text(), "$0.00");

        let input = InputState::new();
        counter.update(&input, 0.1);
        let midway = counter.value();
        assert!(midway > 0.0 && midway < 1310.0);

        for _ in 0..60 {
            counter.update(&input, 1.0 / 60.0);
        }
        assert_eq!(counter.text(), "$1,310.00");
        assert_eq!(counter.accessibility().value.as_deref(), Some("$1,310.00"));
    }

    #[test]
    fn test_baseline() {
        let theme = Arc::new(Theme::new());
        let counter = AnimatedCounter::new(
            theme,
            Rect::new(0.0, 0.0, 200.0, 40.0),
            "Rate",
            8.0,
            ValueFormat::Fixed(1),
        )
        .with_baseline(5.0);
        assert_eq!(counter.text(), "5.0");
    }

    #[test]
    fn test_small_rate_change_reaches_display() {
        let theme = Arc::new(Theme::new());
        let mut counter = AnimatedCounter::new(
            theme,
            Rect::new(0.0, 0.0, 200.0, 40.0),
            "APR",
            0.0425,
            ValueFormat::Percent(2),
        );
        let input = InputState::new();
        for _ in 0..120 {
            counter.update(&input, 1.0 / 60.0);
        }
        assert_eq!(counter.text(), "4.25%");

        counter.set_value(0.042_59);
        for _ in 0..120 {
            counter.update(&input, 1.0 / 60.0);
        }
        assert_eq!(counter.text(), "4.26%");
        assert_eq!(counter.accessibility().value.as_deref(), Some("4.26%"));
    }
}
