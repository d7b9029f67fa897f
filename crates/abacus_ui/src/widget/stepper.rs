//! Minus/plus stepper.

use std::any::Any;
use std::sync::Arc;

use abacus_theme::{ColorToken, CornerRadius, FontToken, HapticKind, Theme};

use crate::accessibility::{AccessibilityNode, Adjustable, Role};
use crate::format::format_fixed;
use crate::input::InputState;
use crate::layout::Rect;
use crate::range::BoundedValue;
use crate::render::{RenderCommand, TextAlign};
use crate::widget::{Widget, WidgetResponse, WidgetState};

/// Called with the new value after every committed change.
pub type ChangeHandler = Box<dyn FnMut(f64)>;

/// Stepper with a minus button on the left and a plus button on the right.
///
/// A change plays a selection tick; tapping a button at its bound plays
/// a warning and leaves the value alone.
pub struct Stepper {
    state: WidgetState,
    theme: Arc<Theme>,
    label: String,
    value: BoundedValue,
    /// Fraction digits shown; 0 for integral steppers.
    decimals: usize,
    on_change: Option<ChangeHandler>,
}

impl Stepper {
    /// Creates an integral stepper.
    #[must_use]
    pub fn new(
        theme: Arc<Theme>,
        rect: Rect,
        label: impl Into<String>,
        value: f64,
        lower: f64,
        upper: f64,
    ) -> Self {
        Self {
            state: WidgetState::new(rect),
            theme,
            label: label.into(),
            value: BoundedValue::new(value, lower, upper, 1.0),
            decimals: 0,
            on_change: None,
        }
    }

    /// Creates a stepper with a fractional step, shown with `decimals` digits.
    #[must_use]
    pub fn decimal(
        theme: Arc<Theme>,
        rect: Rect,
        label: impl Into<String>,
        value: BoundedValue,
        decimals: usize,
    ) -> Self {
        Self {
            state: WidgetState::new(rect),
            theme,
            label: label.into(),
            value,
            decimals,
            on_change: None,
        }
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

    /// Displayed text for the value.
    #[must_use]
    pub fn text(&self) -> String {
        format_fixed(self.value.value(), self.decimals)
    }

    /// Steps up. Returns true if the value changed.
    pub fn increment(&mut self) -> bool {
        let changed = self.value.increment();
        self.after_step(changed);
        changed
    }

    /// Steps down. Returns true if the value changed.
    pub fn decrement(&mut self) -> bool {
        let changed = self.value.decrement();
        self.after_step(changed);
        changed
    }

    fn after_step(&mut self, changed: bool) {
        if changed {
            self.theme.trigger_haptic(HapticKind::Selection);
            self.state.mark_dirty();
            let value = self.value.value();
            if let Some(handler) = self.on_change.as_mut() {
                handler(value);
            }
        } else {
            self.theme.trigger_haptic(HapticKind::Warning);
        }
    }

    fn button(&self, rect: Rect, glyph: &str, enabled: bool, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        commands.push(RenderCommand::Rect {
            bounds: rect,
            color: theme.current(ColorToken::SurfaceElevated),
            corner_radius: theme.corner_radius(CornerRadius::Medium),
            shadow: None,
        });
        let color = if enabled {
            ColorToken::Primary
        } else {
            ColorToken::TextTertiary
        };
        let (x, y) = rect.center();
        commands.push(RenderCommand::Text {
            text: glyph.to_owned(),
            x,
            y,
            color: theme.current(color),
            font: theme.font(FontToken::Headline),
            align: TextAlign::Center,
        });
    }
}

impl Widget for Stepper {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, _dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        if !self.state.is_enabled() {
            return response;
        }

        let rect = self.state.rect;
        if input.tapped_in(rect.leading_square()) {
            response.tapped = true;
            response.changed = self.decrement();
        } else if input.tapped_in(rect.trailing_square()) {
            response.tapped = true;
            response.changed = self.increment();
        }
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        let rect = self.state.rect;

        commands.push(RenderCommand::Rect {
            bounds: rect,
            color: theme.current(ColorToken::Surface),
            corner_radius: theme.corner_radius(CornerRadius::Medium),
            shadow: None,
        });
        self.button(rect.leading_square(), "−", !self.value.at_lower(), commands);
        self.button(rect.trailing_square(), "+", !self.value.at_upper(), commands);

        let (x, y) = rect.center();
        commands.push(RenderCommand::Text {
            text: self.text(),
            x,
            y,
            color: theme.current(ColorToken::TextPrimary),
            font: theme.font(FontToken::Numeric),
            align: TextAlign::Center,
        });
    }

    fn accessibility(&self) -> AccessibilityNode {
        AccessibilityNode::new(Role::Adjustable, self.label.clone())
            .with_value(self.text())
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

impl Adjustable for Stepper {
    fn accessibility_increment(&mut self) -> bool {
        self.increment()
    }

    fn accessibility_decrement(&mut self) -> bool {
        self.decrement()
    }
}
