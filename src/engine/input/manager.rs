// Input manager - keyboard and mouse state for one frame

use super::action::{binding_for, Binding};
use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseButton};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Collects window input between ticks
///
/// Held keys persist across frames; presses, clicks and cursor motion are
/// per-frame and cleared by `end_frame`.
#[derive(Debug, Default)]
pub struct InputManager {
    /// Keys currently held down
    held: HashSet<KeyCode>,

    /// Keys pressed this frame, in arrival order
    just_pressed: Vec<KeyCode>,

    /// Mouse button presses this frame with the cursor position at the time
    clicks: Vec<(MouseButton, Vec2)>,

    /// Last known cursor position
    cursor: Option<Vec2>,

    /// Whether the cursor moved this frame
    cursor_moved: bool,
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only process physical key presses
        if let PhysicalKey::Code(key_code) = event.physical_key {
            match event.state {
                ElementState::Pressed => {
                    if !event.repeat {
                        // Only register if not a key repeat
                        self.press(key_code);
                    }
                }
                ElementState::Released => self.release(key_code),
            }
        }
    }

    /// Process a cursor move (physical pixels)
    pub fn process_cursor_moved(&mut self, x: f64, y: f64) {
        self.cursor = Some(Vec2::new(x as f32, y as f32));
        self.cursor_moved = true;
    }

    /// Process a mouse button event
    pub fn process_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        if state == ElementState::Pressed {
            if let Some(position) = self.cursor {
                self.clicks.push((button, position));
            }
        }
    }

    /// The cursor left the window
    pub fn process_cursor_left(&mut self) {
        self.cursor = None;
    }

    /// Register a key press
    pub(crate) fn press(&mut self, key: KeyCode) {
        if self.held.insert(key) {
            self.just_pressed.push(key);
        }
    }

    /// Register a key release
    pub(crate) fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    /// Clear per-frame state; call once per tick after handling input
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
        self.clicks.clear();
        self.cursor_moved = false;
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn reset(&mut self) {
        self.held.clear();
        self.end_frame();
    }

    pub fn is_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Whether any key bound to `binding` is held
    pub fn binding_held(&self, binding: Binding) -> bool {
        self.held.iter().any(|key| binding_for(*key) == Some(binding))
    }

    /// Keys pressed this frame, in order
    pub fn just_pressed(&self) -> &[KeyCode] {
        &self.just_pressed
    }

    pub fn clicks(&self) -> &[(MouseButton, Vec2)] {
        &self.clicks
    }

    /// Cursor position if it moved this frame
    pub fn cursor_motion(&self) -> Option<Vec2> {
        self.cursor.filter(|_| self.cursor_moved)
    }

    /// Ctrl + Alt + E + X, either side for the modifiers
    pub fn quit_combo_held(&self) -> bool {
        let ctrl = self.is_held(KeyCode::ControlLeft) || self.is_held(KeyCode::ControlRight);
        let alt = self.is_held(KeyCode::AltLeft) || self.is_held(KeyCode::AltRight);
        ctrl && alt && self.is_held(KeyCode::KeyE) && self.is_held(KeyCode::KeyX)
    }

    /// Horizontal walk direction from held keys: -1, 0 or 1
    pub fn walk_direction(&self) -> f32 {
        let mut direction = 0.0;
        if self.binding_held(Binding::MoveLeft) {
            direction -= 1.0;
        }
        if self.binding_held(Binding::MoveRight) {
            direction += 1.0;
        }
        direction
    }
}
