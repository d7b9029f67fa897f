//! Input handling for widgets.
//!
//! One pointer (touch), a handful of editing keys and committed text.
//! The host feeds platform events in, then calls `begin_frame` after the
//! frame has been processed.

use crate::layout::Rect;

/// Editing key from the on-screen keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Delete the last character.
    Backspace,
    /// Return / done.
    Enter,
    /// Dismiss the keyboard.
    Escape,
}

/// Input state for the current frame.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current pointer X position.
    pub pointer_x: f32,
    /// Current pointer Y position.
    pub pointer_y: f32,
    /// Pointer X position last frame.
    pub prev_pointer_x: f32,
    /// Pointer Y position last frame.
    pub prev_pointer_y: f32,
    /// Pointer went down this frame.
    pressed: bool,
    /// Pointer went up this frame.
    released: bool,
    /// Pointer is currently down.
    down: bool,
    /// Where the current (or last) press started.
    press_origin: (f32, f32),
    /// Keys pressed this frame.
    keys_pressed: Vec<Key>,
    /// Text committed this frame.
    pub text_input: String,
}

impl InputState {
    /// Maximum pointer travel (points) for a press/release to count as a tap.
    pub const TAP_SLOP: f32 = 10.0;

    /// Creates a new empty input state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a new frame, clearing per-frame state.
    pub fn begin_frame(&mut self) {
        self.prev_pointer_x = self.pointer_x;
        self.prev_pointer_y = self.pointer_y;
        self.pressed = false;
        self.released = false;
        self.keys_pressed.clear();
        self.text_input.clear();
    }

    /// Updates pointer position.
    pub fn set_pointer_pos(&mut self, x: f32, y: f32) {
        self.pointer_x = x;
        self.pointer_y = y;
    }

    /// Records a touch down at the current pointer position.
    pub fn pointer_down(&mut self) {
        self.pressed = true;
        self.down = true;
        self.press_origin = (self.pointer_x, self.pointer_y);
    }

    /// Records a touch up.
    pub fn pointer_up(&mut self) {
        self.released = true;
        self.down = false;
    }

    /// Records a key press.
    pub fn key_down(&mut self, key: Key) {
        self.keys_pressed.push(key);
    }

    /// Records committed text.
    pub fn text(&mut self, text: &str) {
        self.text_input.push_str(text);
    }

    /// Returns true if the pointer went down this frame.
    #[must_use]
    pub fn pointer_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns true if the pointer went up this frame.
    #[must_use]
    pub fn pointer_released(&self) -> bool {
        self.released
    }

    /// Returns true if the pointer is currently down.
    #[must_use]
    pub fn pointer_held(&self) -> bool {
        self.down
    }

    /// Where the current (or last) press started.
    #[must_use]
    pub fn press_origin(&self) -> (f32, f32) {
        self.press_origin
    }

    /// Returns true if the key was pressed this frame.
    #[must_use]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns the pointer movement delta.
    #[must_use]
    pub fn pointer_delta(&self) -> (f32, f32) {
        (self.pointer_x - self.prev_pointer_x, self.pointer_y - self.prev_pointer_y)
    }

    /// Returns true if a tap completed inside `rect` this frame.
    ///
    /// Both the press and the release must land in `rect`, with no more
    /// than [`Self::TAP_SLOP`] of travel in between.
    #[must_use]
    pub fn tapped_in(&self, rect: Rect) -> bool {
        if !self.released {
            return false;
        }
        let (ox, oy) = self.press_origin;
        let dx = self.pointer_x - ox;
        let dy = self.pointer_y - oy;
        let travel = (dx * dx + dy * dy).sqrt();

        travel <= Self::TAP_SLOP
            && rect.contains(ox, oy)
            && rect.contains(self.pointer_x, self.pointer_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release_cycle() {
        let mut input = InputState::new();

        input.pointer_down();
        assert!(input.pointer_pressed());
        assert!(input.pointer_held());

        input.begin_frame();
        assert!(!input.pointer_pressed());
        assert!(input.pointer_held());

        input.pointer_up();
        assert!(input.pointer_released());
        assert!(!input.pointer_held());
    }

    #[test]
    fn test_tap_inside() {
        let rect = Rect::new(0.0, 0.0, 50.0, 50.0);
        let mut input = InputState::new();
        input.set_pointer_pos(10.0, 10.0);
        input.pointer_down();
        input.begin_frame();
        input.set_pointer_pos(14.0, 12.0);
        input.pointer_up();

        assert!(input.tapped_in(rect));
        assert!(!input.tapped_in(Rect::new(100.0, 0.0, 50.0, 50.0)));
    }

    #[test]
    fn test_drag_is_not_a_tap() {
        let rect = Rect::new(0.0, 0.0, 200.0, 50.0);
        let mut input = InputState::new();
        input.set_pointer_pos(10.0, 10.0);
        input.pointer_down();
        input.set_pointer_pos(80.0, 10.0);
        input.pointer_up();

        assert!(!input.tapped_in(rect));
    }

    #[test]
    fn test_text_and_keys_reset_each_frame() {
        let mut input = InputState::new();
        input.text("12");
        input.key_down(Key::Backspace);
        assert_eq!(input.text_input, "12");
        assert!(input.key_pressed(Key::Backspace));

        input.begin_frame();
        assert!(input.text_input.is_empty());
        assert!(!input.key_pressed(Key::Backspace));
    }
}
