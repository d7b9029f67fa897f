//! Numeric text entry with a currency prefix.
//!
//! The buffer only ever holds digits and `.`. Anything else typed is
//! dropped silently. Reading the value never fails: text that does not
//! parse reads as 0.

use std::any::Any;
use std::sync::Arc;

use abacus_theme::{ColorToken, CornerRadius, FontToken, Spacing, Theme};
use tracing::trace;

use crate::accessibility::{AccessibilityNode, Role};
use crate::input::{InputState, Key};
use crate::layout::Rect;
use crate::render::{RenderCommand, TextAlign};
use crate::widget::{Widget, WidgetFlags, WidgetResponse, WidgetState};

/// Keeps ASCII digits and `.`, dropping everything else.
///
/// Idempotent. Does not collapse repeated dots: `"12a3.4.5"` becomes
/// `"123.4.5"`, which [`parse_or_zero`] then reads as 0.
#[must_use]
pub fn filter_numeric(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect()
}

/// Parses a number, falling back to 0 for empty, malformed or non-finite text.
#[must_use]
pub fn parse_or_zero(text: &str) -> f64 {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Single-line amount field.
pub struct CurrencyField {
    state: WidgetState,
    theme: Arc<Theme>,
    label: String,
    text: String,
    symbol: String,
    placeholder: String,
    /// Seconds into the caret blink cycle.
    caret_clock: f32,
}

impl CurrencyField {
    /// Caret blink half-period, in seconds.
    pub const CARET_BLINK: f32 = 0.5;

    /// Creates an empty, unfocused field.
    #[must_use]
    pub fn new(theme: Arc<Theme>, rect: Rect, label: impl Into<String>) -> Self {
        Self {
            state: WidgetState::new(rect),
            theme,
            label: label.into(),
            text: String::new(),
            symbol: "$".to_owned(),
            placeholder: "0.00".to_owned(),
            caret_clock: 0.0,
        }
    }

    /// Sets the currency prefix.
    #[must_use]
    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Sets the text shown while empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Filtered buffer contents.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the buffer with the filtered `text`.
    pub fn set_text(&mut self, text: &str) {
        self.text = filter_numeric(text);
        self.state.mark_dirty();
    }

    /// Parsed amount; 0 when the buffer does not parse.
    #[must_use]
    pub fn value(&self) -> f64 {
        parse_or_zero(&self.text)
    }

    /// Returns true while the field has keyboard focus.
    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.state.flags.has(WidgetFlags::FOCUSED)
    }

    /// Gives the field keyboard focus.
    pub fn focus(&mut self) {
        self.state.flags.set(WidgetFlags::FOCUSED);
        self.caret_clock = 0.0;
        self.state.mark_dirty();
    }

    /// Removes keyboard focus.
    pub fn unfocus(&mut self) {
        self.state.flags.clear(WidgetFlags::FOCUSED);
        self.state.mark_dirty();
    }

    fn caret_visible(&self) -> bool {
        self.is_focused() && self.caret_clock < Self::CARET_BLINK
    }

    fn edit(&mut self, input: &InputState) -> bool {
        let before = self.text.len();
        let mut changed = false;

        if !input.text_input.is_empty() {
            let accepted = filter_numeric(&input.text_input);
            if accepted.len() != input.text_input.len() {
                trace!(dropped = input.text_input.len() - accepted.len(), "filtered text input");
            }
            self.text.push_str(&accepted);
            changed |= self.text.len() != before;
        }
        if input.key_pressed(Key::Backspace) {
            changed |= self.text.pop().is_some();
        }
        changed
    }
}

impl Widget for CurrencyField {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse {
        let mut response = WidgetResponse::default();
        if !self.state.is_enabled() {
            return response;
        }

        let rect = self.state.rect;
        if input.tapped_in(rect) {
            response.tapped = true;
            if !self.is_focused() {
                self.focus();
                response.focused = true;
            }
        } else if self.is_focused()
            && input.pointer_released()
            && !rect.contains(input.pointer_x, input.pointer_y)
        {
            self.unfocus();
            response.unfocused = true;
        }

        if !self.is_focused() {
            return response;
        }

        if self.edit(input) {
            self.caret_clock = 0.0;
            self.state.mark_dirty();
            response.changed = true;
        }

        if input.key_pressed(Key::Enter) || input.key_pressed(Key::Escape) {
            self.unfocus();
            response.unfocused = true;
            return response;
        }

        let was_visible = self.caret_visible();
        self.caret_clock = (self.caret_clock + dt.max(0.0)) % (Self::CARET_BLINK * 2.0);
        if was_visible != self.caret_visible() {
            self.state.mark_dirty();
        }
        response
    }

    fn render(&self, commands: &mut Vec<RenderCommand>) {
        let theme = &self.theme;
        let rect = self.state.rect;
        let radius = theme.corner_radius(CornerRadius::Medium);
        let font = theme.font(FontToken::Numeric);
        let inset = theme.spacing(Spacing::Sm);
        let (_, cy) = rect.center();

        commands.push(RenderCommand::Rect {
            bounds: rect,
            color: theme.current(ColorToken::SurfaceElevated),
            corner_radius: radius,
            shadow: None,
        });
        let (outline, width) = if self.is_focused() {
            (ColorToken::Primary, 2.0)
        } else {
            (ColorToken::Separator, 1.0)
        };
        commands.push(RenderCommand::RectOutline {
            bounds: rect,
            color: theme.current(outline),
            width,
            corner_radius: radius,
        });

        let (body, color) = if self.text.is_empty() {
            (&self.placeholder, ColorToken::TextTertiary)
        } else {
            (&self.text, ColorToken::TextPrimary)
        };
        commands.push(RenderCommand::Text {
            text: format!("{}{body}", self.symbol),
            x: rect.x + inset,
            y: cy,
            color: theme.current(color),
            font,
            align: TextAlign::Leading,
        });

        if self.caret_visible() {
            // Headless: glyph advance is estimated from the font size.
            let typed = self.symbol.chars().count() + self.text.chars().count();
            let caret_x = rect.x + inset + typed as f32 * font.size * 0.6;
            commands.push(RenderCommand::Rect {
                bounds: Rect::new(caret_x, cy - font.size * 0.6, 2.0, font.size * 1.2),
                color: theme.current(ColorToken::Primary),
                corner_radius: 1.0,
                shadow: None,
            });
        }
    }

    fn accessibility(&self) -> AccessibilityNode {
        let node = AccessibilityNode::new(Role::TextField, self.label.clone());
        let node = if self.text.is_empty() {
            node
        } else {
            node.with_value(format!("{}{}", self.symbol, self.text))
        };
        node.with_hint("Double tap to enter an amount")
    }

    fn set_theme(&mut self, theme: Arc<Theme>) {
        self.theme = theme;
        self.state.mark_dirty();
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
