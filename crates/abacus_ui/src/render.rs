//! Render commands.
//!
//! Widgets describe what to draw as a flat list of commands; the host
//! rasterizes them. Angles are in degrees, measured clockwise from
//! 3 o'clock, so -90 is 12 o'clock.

use abacus_theme::{Color, FontDescriptor, Shadow};

use crate::layout::Rect;

/// Horizontal text alignment relative to the anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Anchor is the left edge.
    #[default]
    Leading,
    /// Anchor is the center.
    Center,
    /// Anchor is the right edge.
    Trailing,
}

/// A render command for the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    /// Filled rectangle.
    Rect {
        /// Bounds.
        bounds: Rect,
        /// Fill color.
        color: Color,
        /// Corner radius.
        corner_radius: f32,
        /// Optional drop shadow.
        shadow: Option<Shadow>,
    },
    /// Rectangle outline.
    RectOutline {
        /// Bounds.
        bounds: Rect,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
        /// Corner radius.
        corner_radius: f32,
    },
    /// Stroked circular arc with round caps.
    Arc {
        /// Circle center.
        center: (f32, f32),
        /// Radius of the stroke's center line.
        radius: f32,
        /// Stroke width.
        thickness: f32,
        /// Start angle (degrees).
        start_degrees: f32,
        /// End angle (degrees).
        end_degrees: f32,
        /// Stroke color.
        color: Color,
    },
    /// Filled circle.
    Circle {
        /// Center.
        center: (f32, f32),
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
        /// Optional drop shadow.
        shadow: Option<Shadow>,
    },
    /// Single line of text.
    Text {
        /// Text content.
        text: String,
        /// Anchor X position.
        x: f32,
        /// Baseline Y position.
        y: f32,
        /// Text color.
        color: Color,
        /// Font.
        font: FontDescriptor,
        /// Alignment relative to `x`.
        align: TextAlign,
    },
}

/// Collects the commands of one frame.
#[derive(Debug, Default)]
pub struct UIRenderer {
    /// All commands from the frame.
    commands: Vec<RenderCommand>,
}

impl UIRenderer {
    /// Creates a new UI renderer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(256),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Adds a render command.
    pub fn push(&mut self, command: RenderCommand) {
        self.commands.push(command);
    }

    /// Adds multiple render commands.
    pub fn extend(&mut self, commands: impl IntoIterator<Item = RenderCommand>) {
        self.commands.extend(commands);
    }

    /// Ends the frame and hands over its commands.
    pub fn end_frame(&mut self) -> Vec<RenderCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the command count of the frame in progress.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }
}
