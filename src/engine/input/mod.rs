// Input handling system
//
// Keyboard and mouse state gathered from winit events between ticks.
//
// ## Architecture
//
// - `action`: Reserved key bindings and the printable key set
// - `keymap`: The random key -> gag table built once at startup
// - `manager`: Held keys, per-frame presses, clicks and cursor position
//
// ## Usage Example
//
// ```rust
// let mut input = InputManager::new();
//
// // In the event loop
// input.process_keyboard_event(&key_event);
//
// // Once per tick
// for key in input.just_pressed() {
//     if let Some(gag) = keymap.get(*key) { /* ... */ }
// }
// input.end_frame();
// ```

pub mod action;
pub mod keymap;
pub mod manager;

// Re-export commonly used types
pub use action::{binding_for, is_modifier, Binding};
pub use keymap::KeyMap;
pub use manager::InputManager;
