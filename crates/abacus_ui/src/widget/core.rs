//! Core widget types and traits.

use std::any::Any;
use std::sync::Arc;

use abacus_theme::Theme;

use crate::accessibility::{AccessibilityNode, Adjustable};
use crate::input::InputState;
use crate::layout::Rect;
use crate::render::RenderCommand;

/// Unique identifier for a widget on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

impl WidgetId {
    /// Placeholder until the widget is added to a screen.
    pub const UNASSIGNED: Self = Self(0);

    /// Creates a new widget ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Widget state flags (bitfield).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetFlags(u32);

impl WidgetFlags {
    /// Widget is visible.
    pub const VISIBLE: u32 = 1 << 0;
    /// Widget is enabled (can receive input).
    pub const ENABLED: u32 = 1 << 1;
    /// Widget has keyboard focus.
    pub const FOCUSED: u32 = 1 << 2;
    /// Widget is being dragged.
    pub const DRAGGING: u32 = 1 << 3;
    /// Widget needs redraw.
    pub const DIRTY_RENDER: u32 = 1 << 4;

    /// Default flags for a new widget.
    pub const DEFAULT: Self = Self(Self::VISIBLE | Self::ENABLED | Self::DIRTY_RENDER);

    /// Creates new flags with default values.
    #[must_use]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Returns true if the flag is set.
    #[inline]
    #[must_use]
    pub const fn has(self, flag: u32) -> bool {
        (self.0 & flag) != 0
    }

    /// Sets a flag.
    #[inline]
    pub fn set(&mut self, flag: u32) {
        self.0 |= flag;
    }

    /// Clears a flag.
    #[inline]
    pub fn clear(&mut self, flag: u32) {
        self.0 &= !flag;
    }

    /// Sets or clears a flag.
    #[inline]
    pub fn assign(&mut self, flag: u32, on: bool) {
        if on {
            self.set(flag);
        } else {
            self.clear(flag);
        }
    }
}

/// Common widget state.
#[derive(Debug, Clone)]
pub struct WidgetState {
    /// Widget identifier.
    pub id: WidgetId,
    /// Bounding rectangle.
    pub rect: Rect,
    /// State flags.
    pub flags: WidgetFlags,
}

impl WidgetState {
    /// Creates state for a widget occupying `rect`.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            id: WidgetId::UNASSIGNED,
            rect,
            flags: WidgetFlags::DEFAULT,
        }
    }

    /// Returns true if the widget is visible.
    #[inline]
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.flags.has(WidgetFlags::VISIBLE)
    }

    /// Returns true if the widget accepts input.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.flags.has(WidgetFlags::ENABLED)
    }

    /// Returns true if the widget needs redraw.
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.flags.has(WidgetFlags::DIRTY_RENDER)
    }

    /// Marks the widget as needing redraw.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.flags.set(WidgetFlags::DIRTY_RENDER);
    }

    /// Clears the redraw flag after rendering.
    #[inline]
    pub fn mark_clean(&mut self) {
        self.flags.clear(WidgetFlags::DIRTY_RENDER);
    }
}

/// What happened to a widget during one update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetResponse {
    /// Widget was tapped.
    pub tapped: bool,
    /// Widget value changed (already committed).
    pub changed: bool,
    /// A drag gesture began.
    pub drag_started: bool,
    /// A drag gesture ended.
    pub drag_ended: bool,
    /// Widget gained focus.
    pub focused: bool,
    /// Widget lost focus.
    pub unfocused: bool,
}

impl WidgetResponse {
    /// Returns true if anything happened.
    #[must_use]
    pub fn any(&self) -> bool {
        self.tapped
            || self.changed
            || self.drag_started
            || self.drag_ended
            || self.focused
            || self.unfocused
    }
}

/// Base trait for all widgets.
pub trait Widget {
    /// Returns the widget's state.
    fn state(&self) -> &WidgetState;

    /// Returns mutable access to the widget's state.
    fn state_mut(&mut self) -> &mut WidgetState;

    /// Handles input and advances animations by `dt` seconds.
    ///
    /// Called every frame. Must mark the widget dirty whenever its
    /// rendered output would change.
    fn update(&mut self, input: &InputState, dt: f32) -> WidgetResponse;

    /// Generates render commands for this widget.
    ///
    /// Called only when `DIRTY_RENDER` is set.
    fn render(&self, commands: &mut Vec<RenderCommand>);

    /// Describes the widget to assistive technology.
    fn accessibility(&self) -> AccessibilityNode;

    /// Replaces the theme and marks the widget for re-render.
    ///
    /// Animation state is kept, so a run in flight continues in the new colors.
    fn set_theme(&mut self, theme: Arc<Theme>);

    /// Range controls return themselves here.
    fn as_adjustable(&mut self) -> Option<&mut dyn Adjustable> {
        None
    }

    /// Downcasting support for hosts that need the concrete widget back.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
