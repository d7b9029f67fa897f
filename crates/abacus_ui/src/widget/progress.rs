//! Progress ring and progress bar.
//!
//! Both mount at 0 and animate to their target. Targets are drawn as
//! given: callers clamp to `[0, 1]` if they want to.

use std::any::Any;
use std::sync::Arc;

use abacus_theme::{ColorToken, CornerRadius, CurveName, FontToken, Theme};

use crate::accessibility::{AccessibilityNode, Role};
use crate::animation::AnimatedValue;
use crate::format::{format_percent, safe_ratio};
use crate::input::InputState;
use crate::layout::Rect;
use crate::render::{RenderCommand, TextAlign};
use crate::widget::{Widget, WidgetResponse, WidgetState};

/// 12 o'clock, where rings start filling.
pub const RING_START_DEGREES: f64 = -90.0;

/// Circular progress indicator with a percentage in the middle.
pub struct ProgressRing {
    state: WidgetState,
    theme: Arc<Theme>,
    progress: AnimatedValue,
    label: String,
    line_width: f32,
    fill: ColorToken,
    show_percentage: bool,
}

impl ProgressRing {
    /// Default stroke width.
    pub const DEFAULT_LINE_WIDTH: f32 = 12.0;

    /// Creates a ring that animates from 0 to `progress`.
    #[must_use]
    pub fn new(theme: Arc<Theme>, rect: Rect, label: impl Into<String>, progress: f64) -> Self {
        let curve = theme.curve(CurveName::Smooth);
        Self {
            state: WidgetState::new(rect),
            theme,
            progress: AnimatedValue::mounted(0.0, progress, curve),
            label: label.into(),
            line_width: Self::DEFAULT_LINE_WIDTH,
            fill: ColorToken::Primary,
            show_percentage: true,
        }
    }

    /// Uses another curve for subsequent changes.
    #[must_use]
    pub fn with_curve(mut self, curve: CurveName) -> Self {
        self.progress.set_curve(self.theme.curve(curve));
        self
    }

    /// Sets the stroke width.
    #[must_use]
    pub fn with_line_width(mut self, line_width: f32) -> Self {
        self.line_width = line_width;
        self
    }

    /// Sets the fill color token.
    #[must_use]
    pub fn with_fill(mut self, fill: ColorToken) -> Self {
        self.fill = fill;
        self
    }

    /// Hides the center percentage.
    #[must_use]
    pub fn without_percentage(mut self) -> Self {
        self.show_percentage = false;
        self
    }

    /// Animates to a new target from wherever the ring currently is.
    pub fn set_progress(&mut self, progress: f64) {
        if self.progress.set_target(progress) {
            self.state.mark_dirty();
        }
    }

    /// Displayed progress.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress.value()
    }

    /// Target progress.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.progress.target()
    }

    /// Returns true while animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.progress.is_animating()
    }

    /// Arc length of the fill, in degrees.
    #[must_use]
    pub fn sweep_degrees(&self) -> f64 {
        360.0 * self.progress.value()
    }
}

impl Widget for ProgressRing {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, _input: &InputState, dt: f32) -> WidgetResponse {
        if self.progress.tick(dt) {
            self.state.mark_dirty();
        }
        WidgetResponse::default()
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        let center = self.state.rect.center();
        let radius = (self.state.rect.inscribed_radius() - self.line_width * 0.5).max(0.0);
        let start = RING_START_DEGREES as f32;

        commands.push(RenderCommand::Arc {
            center,
            radius,
            thickness: self.line_width,
            start_degrees: start,
            end_degrees: start + 360.0,
            color: theme.current(ColorToken::Track),
        });

        let sweep = self.sweep_degrees() as f32;
        if sweep != 0.0 {
            commands.push(RenderCommand::Arc {
                center,
                radius,
                thickness: self.line_width,
                start_degrees: start,
                end_degrees: start + sweep,
                color: theme.current(self.fill),
            });
        }

        if self.show_percentage {
            commands.push(RenderCommand::Text {
                text: format_percent(self.progress.value(), 0),
                x: center.0,
                y: center.1,
                color: theme.current(ColorToken::TextPrimary),
                font: theme.font(FontToken::Numeric),
                align: TextAlign::Center,
            });
        }
    }

    fn accessibility(&self) -> AccessibilityNode {
        AccessibilityNode::new(Role::ProgressIndicator, self.label.clone())
            .with_value(format_percent(self.progress.target(), 0))
    }

    fn set_theme(&mut self, theme: Arc<Theme>) {
        self.theme = theme;
        self.state.mark_dirty();
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// Horizontal progress bar.
pub struct ProgressBar {
    state: WidgetState,
    theme: Arc<Theme>,
    fill: AnimatedValue,
    label: String,
    color: ColorToken,
}

impl ProgressBar {
    /// Creates a bar that animates from 0 to `fraction`.
    #[must_use]
    pub fn new(theme: Arc<Theme>, rect: Rect, label: impl Into<String>, fraction: f64) -> Self {
        let curve = theme.curve(CurveName::Smooth);
        Self {
            state: WidgetState::new(rect),
            theme,
            fill: AnimatedValue::mounted(0.0, fraction, curve),
            label: label.into(),
            color: ColorToken::Primary,
        }
    }

    /// Sets the fill color token.
    #[must_use]
    pub fn with_color(mut self, color: ColorToken) -> Self {
        self.color = color;
        self
    }

    /// Animates to a new fraction.
    pub fn set_fraction(&mut self, fraction: f64) {
        if self.fill.set_target(fraction) {
            self.state.mark_dirty();
        }
    }

    /// Animates to `part / total`; an empty total animates to 0.
    pub fn set_ratio(&mut self, part: f64, total: f64) {
        self.set_fraction(safe_ratio(part, total));
    }

    /// Displayed fraction.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.fill.value()
    }

    /// Width of the filled part, in points.
    #[must_use]
    pub fn fill_width(&self) -> f32 {
        self.state.rect.width * self.fill.value() as f32
    }
}

impl Widget for ProgressBar {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, _input: &InputState, dt: f32) -> WidgetResponse {
        if self.fill.tick(dt) {
            self.state.mark_dirty();
        }
        WidgetResponse::default()
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let rect = self.state.rect;
        let radius = self.theme.corner_radius(CornerRadius::Pill).min(rect.height * 0.5);

        commands.push(RenderCommand::Rect {
            bounds: rect,
            color: self.theme.current(ColorToken::Track),
            corner_radius: radius,
            shadow: None,
        });
        commands.push(RenderCommand::Rect {
            bounds: rect.with_width(self.fill_width()),
            color: self.theme.current(self.color),
            corner_radius: radius,
            shadow: None,
        });
    }

    fn accessibility(&self) -> AccessibilityNode {
        AccessibilityNode::new(Role::ProgressIndicator, self.label.clone())
            .with_value(format_percent(self.fill.target(), 0))
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

    const FRAME: f32 = 1.0 / 60.0;

    fn run(widget: &mut dyn Widget, frames: usize) {
        let input = InputState::new();
        for _ in 0..frames {
            widget.update(&input, FRAME);
        }
    }

    #[test]
    fn test_ring_mounts_at_zero_and_settles() {
        let theme = Arc::new(Theme::new());
        let mut ring = ProgressRing::new(
            theme,
            Rect::new(0.0, 0.0, 120.0, 120.0),
            "Paid off",
            0.25,
        );
        assert!(ring.progress().abs() < f64::EPSILON);

        run(&mut ring, 120);
        assert!((ring.progress() - 0.25).abs() < f64::EPSILON);
        assert!((ring.sweep_degrees() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_ring_is_not_clamped() {
        let theme = Arc::new(Theme::new());
        let mut ring = ProgressRing::new(theme, Rect::new(0.0, 0.0, 120.0, 120.0), "Over", 1.5);
        run(&mut ring, 120);
        assert!((ring.sweep_degrees() - 540.0).abs() < 1e-9);
    }

    #[test]
    fn test_ring_renders_track_fill_and_label() {
        let theme = Arc::new(Theme::new());
        let mut ring = ProgressRing::new(theme, Rect::new(0.0, 0.0, 100.0, 100.0), "Saved", 0.5);
        run(&mut ring, 120);

        let mut commands = Vec::new();
        ring.render(&mut commands);
        assert_eq!(commands.len(), 3);
        match &commands[1] {
            RenderCommand::Arc { start_degrees, end_degrees, .. } => {
                assert!((start_degrees + 90.0).abs() < 1e-4);
                assert!((end_degrees - 90.0).abs() < 1e-4);
            }
            other => panic!("expected arc, got {other:?}"),
        }
        match &commands[2] {
            RenderCommand::Text { text, .. } => assert_eq!(text, "50%"),
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_ring_skips_empty_fill() {
        let theme = Arc::new(Theme::new());
        let ring = ProgressRing::new(theme, Rect::new(0.0, 0.0, 100.0, 100.0), "Nothing", 0.0)
            .without_percentage();
        let mut commands = Vec::new();
        ring.render(&mut commands);
        assert_eq!(commands.len(), 1);
    }

    #[test]
    fn test_bar_empty_total_is_zero_width() {
        let theme = Arc::new(Theme::new());
        let mut bar = ProgressBar::new(theme, Rect::new(0.0, 0.0, 200.0, 8.0), "Budget", 0.5);
        run(&mut bar, 120);
        assert!((bar.fill_width() - 100.0).abs() < 1e-3);

        bar.set_ratio(30.0, 0.0);
        run(&mut bar, 120);
        assert!(bar.fill_width().abs() < 1e-6);
        assert!(!bar.fill_width().is_nan());
    }

    #[test]
    fn test_accessibility_reports_target() {
        let theme = Arc::new(Theme::new());
        let bar = ProgressBar::new(theme, Rect::new(0.0, 0.0, 200.0, 8.0), "Budget", 0.4);
        let node = bar.accessibility();
        assert_eq!(node.role, Role::ProgressIndicator);
        assert_eq!(node.value.as_deref(), Some("40%"));
    }
}
