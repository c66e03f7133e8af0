// Fixed key bindings and the printable key set

use winit::keyboard::KeyCode;

/// Behaviours bound to reserved keys; these never take part in the random table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Walk left while held
    MoveLeft,
    /// Walk right while held
    MoveRight,
    /// Jump on press
    Jump,
    /// Crouch while held
    Crouch,
    /// Wave while held
    Wave,
}

/// Reserved keys and what they do
pub fn reserved_bindings() -> Vec<(KeyCode, Binding)> {
    vec![
        // Movement (WASD plus arrows)
        (KeyCode::KeyA, Binding::MoveLeft),
        (KeyCode::ArrowLeft, Binding::MoveLeft),
        (KeyCode::KeyD, Binding::MoveRight),
        (KeyCode::ArrowRight, Binding::MoveRight),
        (KeyCode::Space, Binding::Jump),
        (KeyCode::ArrowUp, Binding::Jump),
        (KeyCode::KeyS, Binding::Crouch),
        (KeyCode::ArrowDown, Binding::Crouch),
        (KeyCode::KeyW, Binding::Wave),
    ]
}

/// The binding for a key, if it is reserved
pub fn binding_for(key: KeyCode) -> Option<Binding> {
    reserved_bindings()
        .into_iter()
        .find(|(k, _)| *k == key)
        .map(|(_, binding)| binding)
}

/// Keys that type a printable character on a US layout
pub const PRINTABLE_KEYS: &[KeyCode] = &[
    KeyCode::KeyA,
    KeyCode::KeyB,
    KeyCode::KeyC,
    KeyCode::KeyD,
    KeyCode::KeyE,
    KeyCode::KeyF,
    KeyCode::KeyG,
    KeyCode::KeyH,
    KeyCode::KeyI,
    KeyCode::KeyJ,
    KeyCode::KeyK,
    KeyCode::KeyL,
    KeyCode::KeyM,
    KeyCode::KeyN,
    KeyCode::KeyO,
    KeyCode::KeyP,
    KeyCode::KeyQ,
    KeyCode::KeyR,
    KeyCode::KeyS,
    KeyCode::KeyT,
    KeyCode::KeyU,
    KeyCode::KeyV,
    KeyCode::KeyW,
    KeyCode::KeyX,
    KeyCode::KeyY,
    KeyCode::KeyZ,
    KeyCode::Digit0,
    KeyCode::Digit1,
    KeyCode::Digit2,
    KeyCode::Digit3,
    KeyCode::Digit4,
    KeyCode::Digit5,
    KeyCode::Digit6,
    KeyCode::Digit7,
    KeyCode::Digit8,
    KeyCode::Digit9,
    KeyCode::Space,
    KeyCode::Backquote,
    KeyCode::Minus,
    KeyCode::Equal,
    KeyCode::BracketLeft,
    KeyCode::BracketRight,
    KeyCode::Backslash,
    KeyCode::Semicolon,
    KeyCode::Quote,
    KeyCode::Comma,
    KeyCode::Period,
    KeyCode::Slash,
    KeyCode::Numpad0,
    KeyCode::Numpad1,
    KeyCode::Numpad2,
    KeyCode::Numpad3,
    KeyCode::Numpad4,
    KeyCode::Numpad5,
    KeyCode::Numpad6,
    KeyCode::Numpad7,
    KeyCode::Numpad8,
    KeyCode::Numpad9,
    KeyCode::NumpadAdd,
    KeyCode::NumpadSubtract,
    KeyCode::NumpadMultiply,
    KeyCode::NumpadDivide,
    KeyCode::NumpadDecimal,
];

/// Modifier keys never trigger anything on their own
pub fn is_modifier(key: KeyCode) -> bool {
    matches!(
        key,
        KeyCode::ControlLeft
            | KeyCode::ControlRight
            | KeyCode::AltLeft
            | KeyCode::AltRight
            | KeyCode::ShiftLeft
            | KeyCode::ShiftRight
            | KeyCode::SuperLeft
            | KeyCode::SuperRight
            | KeyCode::CapsLock
            | KeyCode::Fn
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_binding_lookup() {
        assert_eq!(binding_for(KeyCode::Space), Some(Binding::Jump));
        assert_eq!(binding_for(KeyCode::KeyW), Some(Binding::Wave));
        assert_eq!(binding_for(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_no_duplicate_reserved_keys() {
        let mut seen = HashSet::new();
        for (key, _) in reserved_bindings() {
            assert!(seen.insert(key), "Duplicate reserved key {key:?}");
        }
    }

    #[test]
    fn test_printable_keys_unique() {
        let unique: HashSet<_> = PRINTABLE_KEYS.iter().collect();
        assert_eq!(unique.len(), PRINTABLE_KEYS.len());
    }

    #[test]
    fn test_modifiers_are_not_printable() {
        assert!(is_modifier(KeyCode::ControlLeft));
        assert!(is_modifier(KeyCode::AltRight));
        assert!(!PRINTABLE_KEYS.iter().any(|k| is_modifier(*k)));
    }
}
