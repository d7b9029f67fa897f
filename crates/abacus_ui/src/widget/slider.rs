//! Drag slider.
//!
//! The pointer's x position maps linearly into the range, clamped at both
//! ends. Every position during a drag is committed immediately; drag
//! begin/end only drive haptics and the thumb animation.

use std::any::Any;
use std::sync::Arc;

use abacus_theme::{Color, ColorToken, CornerRadius, CurveName, HapticKind, ShadowToken, Theme};
use tracing::debug;

use crate::accessibility::{AccessibilityNode, Adjustable, Role};
use crate::animation::AnimatedValue;
use crate::format::{safe_ratio, ValueFormat};
use crate::input::InputState;
use crate::layout::Rect;
use crate::range::BoundedValue;
use crate::render::RenderCommand;
use crate::widget::stepper::ChangeHandler;
use crate::widget::{Widget, WidgetFlags, WidgetResponse, WidgetState};

/// Horizontal slider over a [`BoundedValue`].
pub struct Slider {
    state: WidgetState,
    theme: Arc<Theme>,
    label: String,
    value: BoundedValue,
    format: ValueFormat,
    snap: bool,
    thumb_scale: AnimatedValue,
    on_change: Option<ChangeHandler>,
}

impl Slider {
    /// Thumb radius at rest.
    pub const THUMB_RADIUS: f32 = 12.0;
    /// Thumb scale while dragging.
    pub const DRAG_SCALE: f64 = 1.25;
    /// Track thickness.
    pub const TRACK_HEIGHT: f32 = 4.0;

    /// Creates a slider. Values snap to the step unless [`Self::continuous`] is used.
    #[must_use]
    pub fn new(
        theme: Arc<Theme>,
        rect: Rect,
        label: impl Into<String>,
        value: BoundedValue,
        format: ValueFormat,
    ) -> Self {
        let curve = theme.curve(CurveName::Interactive);
        Self {
            state: WidgetState::new(rect),
            theme,
            label: label.into(),
            value,
            format,
            snap: true,
            thumb_scale: AnimatedValue::new(1.0, curve),
            on_change: None,
        }
    }

    /// Disables snapping to the step grid while dragging.
    #[must_use]
    pub fn continuous(mut self) -> Self {
        self.snap = false;
        self
    }

    /// Registers a change handler.
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(f64) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value.value()
    }

    /// Underlying range.
    #[must_use]
    pub fn range(&self) -> &BoundedValue {
        &self.value
    }

    /// Returns true while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.state.flags.has(WidgetFlags::DRAGGING)
    }

    /// Value the slider would take with the pointer at `x`.
    ///
    /// A zero-width track maps everything to the lower bound.
    #[must_use]
    pub fn value_at(&self, x: f32) -> f64 {
        let rect = self.state.rect;
        let fraction = safe_ratio(f64::from(x - rect.x), f64::from(rect.width));
        self.value.value_at_fraction(fraction, self.snap)
    }

    /// Sets the value programmatically, clamped. Returns true if it changed.
    pub fn set_value(&mut self, value: f64) -> bool {
        let changed = self.value.set(value);
        if changed {
            self.commit();
        }
        changed
    }

    /// X coordinate of the thumb center.
    #[must_use]
    pub fn thumb_x(&self) -> f32 {
        let rect = self.state.rect;
        rect.x + rect.width * self.value.fraction() as f32
    }

    fn commit(&mut self) {
        self.state.mark_dirty();
        let value = self.value.value();
        if let Some(handler) = self.on_change.as_mut() {
            handler(value);
        }
    }

    fn begin_drag(&mut self) {
        self.state.flags.set(WidgetFlags::DRAGGING);
        self.thumb_scale.set_target(Self::DRAG_SCALE);
        self.theme.trigger_haptic(HapticKind::Medium);
        debug!(label = %self.label, value = self.value.value(), "slider drag began");
    }

    fn end_drag(&mut self) {
        self.state.flags.clear(WidgetFlags::DRAGGING);
        self.thumb_scale.set_target(1.0);
        self.theme.trigger_haptic(HapticKind::Light);
        debug!(label = %self.label, value = self.value.value(), "slider drag ended");
    }

    fn step(&mut self, up: bool) -> bool {
        let changed = if up {
            self.value.increment()
        } else {
            self.value.decrement()
        };
        if changed {
            self.theme.trigger_haptic(HapticKind::Selection);
            self.commit();
        }
        changed
    }
}

impl Widget for Slider {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        let hit_area = self.state.rect.expand(Self::THUMB_RADIUS);

        if self.state.is_enabled()
            && input.pointer_pressed()
            && hit_area.contains(input.pointer_x, input.pointer_y)
        {
            self.begin_drag();
            response.drag_started = true;
        }

        if self.is_dragging() {
            let value = self.value_at(input.pointer_x);
            if self.value.set(value) {
                self.commit();
                response.changed = true;
            }
            if !input.pointer_held() {
                self.end_drag();
                response.drag_ended = true;
            }
        }

        if self.thumb_scale.tick(dt) {
            self.state.mark_dirty();
        }
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        let rect = self.state.rect;
        let (_, cy) = rect.center();
        let track = Rect::new(
            rect.x,
            cy - Self::TRACK_HEIGHT * 0.5,
            rect.width,
            Self::TRACK_HEIGHT,
        );
        let radius = theme.corner_radius(CornerRadius::Pill).min(Self::TRACK_HEIGHT * 0.5);
        let thumb_x = self.thumb_x();

        commands.push(RenderCommand::Rect {
            bounds: track,
            color: theme.current(ColorToken::Track),
            corner_radius: radius,
            shadow: None,
        });
        commands.push(RenderCommand::Rect {
            bounds: track.with_width(thumb_x - rect.x),
            color: theme.current(ColorToken::Primary),
            corner_radius: radius,
            shadow: None,
        });
        commands.push(RenderCommand::Circle {
            center: (thumb_x, cy),
            radius: Self::THUMB_RADIUS * self.thumb_scale.value() as f32,
            color: Color::WHITE,
            shadow: Some(theme.shadow(ShadowToken::Subtle)),
        });
    }

    fn accessibility(&self) -> AccessibilityNode {
        AccessibilityNode::new(Role::Adjustable, self.label.clone())
            .with_value(self.format.apply(self.value.value()))
            .with_hint("Swipe up or down to adjust")
    }

    fn as_adjustable(&mut self) -> Option<&mut dyn Adjustable> {
        Some(self)
    }

    fn set_theme(&mut self, theme: Arc<Theme>) {
        self.theme = theme;
        self.state.mark_dirty();
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl Adjustable for Slider {
    fn accessibility_increment(&mut self) -> bool {
        self.step(true)
    }

    fn accessibility_decrement(&mut self) -> bool {
        self.step(false)
    }
}

#[cfg(test)]
mod tests {
    use abacus_theme::RecordingHaptics;

    use super::*;

    fn slider(haptics: Arc<RecordingHaptics>) -> Slider {
        let theme = Arc::new(Theme::builder().haptics(haptics).build());
        Slider::new(
            theme,
            Rect::new(0.0, 0.0, 200.0, 30.0),
            "Down payment",
            BoundedValue::new(0.0, 0.0, 100.0, 5.0),
            ValueFormat::Integer,
        )
    }

    #[test]
    fn test_pointer_maps_linearly_and_clamps() {
        let slider = slider(Arc::new(RecordingHaptics::new()));
        assert!((slider.value_at(100.0) - 50.0).abs() < f64::EPSILON);
        assert!((slider.value_at(-40.0) - 0.0).abs() < f64::EPSILON);
        assert!((slider.value_at(400.0) - 100.0).abs() < f64::EPSILON);
        // 33% snaps to 35 on a step of 5.
        assert!((slider.value_at(66.0) - 35.0).abs() < f64::EPSILON);
        assert!((slider.continuous().value_at(66.0) - 33.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_width_track() {
        let theme = Arc::new(Theme::new());
        let slider = Slider::new(
            theme,
            Rect::new(10.0, 0.0, 0.0, 30.0),
            "Empty",
            BoundedValue::new(5.0, 0.0, 10.0, 1.0),
            ValueFormat::Integer,
        );
        assert!(slider.value_at(50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_drag_commits_every_position() {
        let haptics = Arc::new(RecordingHaptics::new());
        let mut slider = slider(Arc::clone(&haptics));
        let mut input = InputState::new();

        input.set_pointer_pos(20.0, 15.0);
        input.pointer_down();
        let response = slider.update(&input, 1.0 / 60.0);
        assert!(response.drag_started && response.changed);
        assert!(slider.is_dragging());
        assert!((slider.value() - 10.0).abs() < f64::EPSILON);

        input.begin_frame();
        input.set_pointer_pos(120.0, 15.0);
        let response = slider.update(&input, 1.0 / 60.0);
        assert!(response.changed);
        assert!((slider.value() - 60.0).abs() < f64::EPSILON);

        input.begin_frame();
        input.set_pointer_pos(150.0, 40.0);
        input.pointer_up();
        let response = slider.update(&input, 1.0 / 60.0);
        assert!(response.drag_ended);
        assert!(!slider.is_dragging());
        assert!((slider.value() - 75.0).abs() < f64::EPSILON);

        assert_eq!(haptics.events(), vec![HapticKind::Medium, HapticKind::Light]);
    }

    #[test]
    fn test_press_outside_does_not_drag() {
        let mut slider = slider(Arc::new(RecordingHaptics::new()));
        let mut input = InputState::new();
        input.set_pointer_pos(100.0, 200.0);
        input.pointer_down();
        let response = slider.update(&input, 1.0 / 60.0);
        assert!(!response.any());
        assert!(!slider.is_dragging());
    }

    #[test]
    fn test_adjustable_steps() {
        let mut slider = slider(Arc::new(RecordingHaptics::new()));
        assert!(!slider.accessibility_decrement());
        assert!(slider.accessibility_increment());
        assert!((slider.value() - 5.0).abs() < f64::EPSILON);
        assert_eq!(slider.accessibility().value.as_deref(), Some("5"));
    }
}
