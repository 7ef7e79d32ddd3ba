//! Input state tracking
//!
//! Holds the pressed-key set, mouse-button state and the cursor baseline for
//! delta computation. Events are applied synchronously from the window's
//! message queue once per loop iteration; the render loop reads the resulting
//! state exactly once per frame.

use std::collections::HashSet;

use glfw::{Key, MouseButton};

/// Number of mouse buttons the viewer recognizes (left, right, middle)
pub const MOUSE_BUTTON_COUNT: usize = 3;

/// Pressed-key/button state plus the cursor-delta baseline.
///
/// Keys are stored sparsely; unknown key codes simply live in the set and are
/// never consulted. Mouse buttons beyond the first three are ignored.
#[derive(Debug)]
pub struct InputState {
    keys: HashSet<Key>,
    buttons: [bool; MOUSE_BUTTON_COUNT],
    last_cursor: (f32, f32),
    first_move: bool,
}

fn button_index(button: MouseButton) -> Option<usize> {
    match button {
        MouseButton::Button1 => Some(0),
        MouseButton::Button2 => Some(1),
        MouseButton::Button3 => Some(2),
        _ => None,
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    /// Create an empty input state; the first cursor move only records the
    /// baseline
    pub fn new() -> Self {
        Self {
            keys: HashSet::new(),
            buttons: [false; MOUSE_BUTTON_COUNT],
            last_cursor: (0.0, 0.0),
            first_move: true,
        }
    }

    /// Record a key press or release
    pub fn on_key(&mut self, key: Key, pressed: bool) {
        if pressed {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }

    /// Record a mouse-button press or release; unrecognized buttons are
    /// silently dropped
    pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if let Some(index) = button_index(button) {
            self.buttons[index] = pressed;
        }
    }

    /// Apply a cursor move and return the `(dx, dy)` delta.
    ///
    /// The vertical axis is flipped: moving the cursor down the screen yields
    /// a positive `dy` (pitch-up). The very first call after construction
    /// records `(x, y)` as the baseline and returns a zero delta, so an
    /// arbitrary initial cursor position cannot produce a camera jump.
    pub fn cursor_delta(&mut self, x: f32, y: f32) -> (f32, f32) {
        if self.first_move {
            self.last_cursor = (x, y);
            self.first_move = false;
            return (0.0, 0.0);
        }
        let dx = x - self.last_cursor.0;
        let dy = self.last_cursor.1 - y;
        self.last_cursor = (x, y);
        (dx, dy)
    }

    /// Whether a key is currently held
    pub fn key_held(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// Whether a recognized mouse button is currently held
    pub fn button_held(&self, button: MouseButton) -> bool {
        button_index(button).is_some_and(|index| self.buttons[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_cursor_move_yields_zero_delta() {
        let mut input = InputState::new();
        assert_eq!(input.cursor_delta(812.0, -340.5), (0.0, 0.0));
    }

    #[test]
    fn cursor_delta_flips_vertical_axis() {
        let mut input = InputState::new();
        input.cursor_delta(100.0, 100.0);
        // Cursor moves right and down; dy reports up
        assert_eq!(input.cursor_delta(110.0, 125.0), (10.0, -25.0));
        assert_eq!(input.cursor_delta(110.0, 100.0), (0.0, 25.0));
    }

    #[test]
    fn keys_track_press_and_release() {
        let mut input = InputState::new();
        input.on_key(Key::F, true);
        assert!(input.key_held(Key::F));
        input.on_key(Key::F, false);
        assert!(!input.key_held(Key::F));
        // Releasing a key that was never pressed is a no-op
        input.on_key(Key::Q, false);
        assert!(!input.key_held(Key::Q));
    }

    #[test]
    fn unrecognized_mouse_buttons_are_ignored() {
        let mut input = InputState::new();
        input.on_mouse_button(MouseButton::Button5, true);
        assert!(!input.button_held(MouseButton::Button5));
        input.on_mouse_button(MouseButton::Button1, true);
        assert!(input.button_held(MouseButton::Button1));
    }
}
