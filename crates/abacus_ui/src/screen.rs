//! Screen: owns widgets and runs the per-frame loop.
//!
//! One call to [`Screen::frame`] is one commit point. Input and elapsed
//! time go to every visible widget, dirty widgets re-render, clean ones
//! reuse their cached commands, and the whole frame comes back as a
//! [`Frame`].

use std::sync::Arc;

use abacus_theme::{Appearance, ColorToken, Theme};
use tracing::{debug, trace};

use crate::accessibility::AccessibilityNode;
use crate::input::InputState;
use crate::layout::Rect;
use crate::render::{RenderCommand, UIRenderer};
use crate::widget::{Widget, WidgetFlags, WidgetId, WidgetResponse};

/// Output of one frame.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    /// Frame counter, starting at 1.
    pub number: u64,
    /// Draw list, back to front.
    pub commands: Vec<RenderCommand>,
    /// One node per visible widget, in draw order.
    pub accessibility: Vec<(WidgetId, AccessibilityNode)>,
    /// Widgets that reported something this frame.
    pub responses: Vec<(WidgetId, WidgetResponse)>,
    /// Number of widgets that re-rendered.
    pub rerendered: usize,
}

impl Frame {
    /// Response for `id`, if it reported one.
    #[must_use]
    pub fn response(&self, id: WidgetId) -> Option<WidgetResponse> {
        self.responses
            .iter()
            .find(|(widget, _)| *widget == id)
            .map(|(_, response)| *response)
    }
}

struct Entry {
    id: WidgetId,
    widget: Box<dyn Widget>,
    /// Commands from the last render.
    commands: Vec<RenderCommand>,
}

/// Root container for one screen of widgets.
pub struct Screen {
    theme: Arc<Theme>,
    bounds: Rect,
    entries: Vec<Entry>,
    next_id: u64,
    renderer: UIRenderer,
    frame: u64,
}

impl Screen {
    /// Creates an empty screen.
    #[must_use]
    pub fn new(theme: Arc<Theme>, bounds: Rect) -> Self {
        Self {
            theme,
            bounds,
            entries: Vec::new(),
            next_id: 1,
            renderer: UIRenderer::new(),
            frame: 0,
        }
    }

    /// Shared theme.
    #[must_use]
    pub fn theme(&self) -> &Arc<Theme> {
        &self.theme
    }

    /// Pushes a new theme to the screen and every widget.
    ///
    /// Widgets keep their animation state and re-render next frame.
    pub fn set_theme(&mut self, theme: Arc<Theme>) {
        debug!(appearance = ?theme.appearance(), widgets = self.entries.len(), "theme swapped");
        for entry in &mut self.entries {
            entry.widget.set_theme(Arc::clone(&theme));
        }
        self.theme = theme;
    }

    /// Switches between light and dark without rebuilding widgets.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        if self.theme.appearance() == appearance {
            return;
        }
        let theme = Arc::new(self.theme.with_appearance(appearance));
        self.set_theme(theme);
    }

    /// Screen bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Number of widgets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the screen has no widgets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a widget on top of the others and returns its ID.
    pub fn add<W: Widget + 'static>(&mut self, mut widget: W) -> WidgetId {
        let id = WidgetId::new(self.next_id);
        self.next_id += 1;

        let state = widget.state_mut();
        state.id = id;
        state.mark_dirty();

        debug!(id = id.raw(), "widget added");
        self.entries.push(Entry {
            id,
            widget: Box::new(widget),
            commands: Vec::new(),
        });
        id
    }

    /// Removes a widget. Returns false if `id` is unknown.
    pub fn remove(&mut self, id: WidgetId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        let removed = self.entries.len() != before;
        if removed {
            debug!(id = id.raw(), "widget removed");
        }
        removed
    }

    /// Widget by ID.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.entry(id).map(|entry| entry.widget.as_ref())
    }

    /// Concrete widget by ID. `None` if absent or of another type.
    pub fn get_mut<W: Widget + 'static>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.entry_mut(id)?.widget.as_any_mut().downcast_mut::<W>()
    }

    /// Shows or hides a widget. Hidden widgets neither update nor draw.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        let state = entry.widget.state_mut();
        state.flags.assign(WidgetFlags::VISIBLE, visible);
        state.mark_dirty();
        true
    }

    /// Enables or disables input for a widget.
    pub fn set_enabled(&mut self, id: WidgetId, enabled: bool) -> bool {
        let Some(entry) = self.entry_mut(id) else {
            return false;
        };
        let state = entry.widget.state_mut();
        state.flags.assign(WidgetFlags::ENABLED, enabled);
        state.mark_dirty();
        true
    }

    /// Forces every widget to re-render next frame.
    pub fn invalidate(&mut self) {
        for entry in &mut self.entries {
            entry.widget.state_mut().mark_dirty();
        }
    }

    /// Assistive-technology increment. False if `id` is not adjustable or is at its bound.
    pub fn accessibility_increment(&mut self, id: WidgetId) -> bool {
        self.entry_mut(id)
            .and_then(|entry| entry.widget.as_adjustable())
            .is_some_and(|adjustable| adjustable.accessibility_increment())
    }

    /// Assistive-technology decrement. False if `id` is not adjustable or is at its bound.
    pub fn accessibility_decrement(&mut self, id: WidgetId) -> bool {
        self.entry_mut(id)
            .and_then(|entry| entry.widget.as_adjustable())
            .is_some_and(|adjustable| adjustable.accessibility_decrement())
    }

    /// Runs one frame: update, render dirty widgets, commit.
    pub fn frame(&mut self, input: &InputState, dt: f32) -> Frame {
        self.frame += 1;
        self.renderer.begin_frame();
        self.renderer.push(RenderCommand::Rect {
            bounds: self.bounds,
            color: self.theme.current(ColorToken::Background),
            corner_radius: 0.0,
            shadow: None,
        });

        let mut accessibility = Vec::with_capacity(self.entries.len());
        let mut responses = Vec::new();
        let mut rerendered = 0;

        for entry in &mut self.entries {
            if !entry.widget.state().is_visible() {
                continue;
            }

            let response = entry.widget.update(input, dt);
            if response.any() {
                responses.push((entry.id, response));
            }

            if entry.widget.state().is_dirty() {
                entry.commands.clear();
                entry.widget.render(&mut entry.commands);
                entry.widget.state_mut().mark_clean();
                rerendered += 1;
            }

            self.renderer.extend(entry.commands.iter().cloned());
            accessibility.push((entry.id, entry.widget.accessibility()));
        }

        let commands = self.renderer.end_frame();
        trace!(
            frame = self.frame,
            widgets = self.entries.len(),
            rerendered,
            commands = commands.len(),
            "frame committed"
        );

        Frame {
            number: self.frame,
            commands,
            accessibility,
            responses,
            rerendered,
        }
    }

    fn entry(&self, id: WidgetId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    fn entry_mut(&mut self, id: WidgetId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id == id)
    }
}
