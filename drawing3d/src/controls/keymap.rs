/// Default key tables for winit key codes

use winit::keyboard::KeyCode;
use super::key_action::{KeyAction, KeyBinding};

/// Orbit navigation: arrows turn around the target, W/S zoom in and out.
pub fn orbit_keymap() -> Vec<KeyBinding<KeyCode>> {
    vec![
        KeyBinding::new(KeyCode::ArrowLeft, KeyAction::RZ_INC),
        KeyBinding::new(KeyCode::ArrowRight, KeyAction::RZ_DEC),
        KeyBinding::new(KeyCode::ArrowUp, KeyAction::RY_DEC),
        KeyBinding::new(KeyCode::ArrowDown, KeyAction::RY_INC),
        KeyBinding::new(KeyCode::KeyW, KeyAction::DISTANCE_DEC),
        KeyBinding::new(KeyCode::KeyS, KeyAction::DISTANCE_INC),
    ]
}

/// Free flight: arrows look around, WASD walk, Q/E and Space/Shift go up and down.
pub fn free_keymap() -> Vec<KeyBinding<KeyCode>> {
    vec![
        KeyBinding::new(KeyCode::ArrowLeft, KeyAction::RZ_DEC),
        KeyBinding::new(KeyCode::ArrowRight, KeyAction::RZ_INC),
        KeyBinding::new(KeyCode::ArrowUp, KeyAction::RY_DEC),
        KeyBinding::new(KeyCode::ArrowDown, KeyAction::RY_INC),
        KeyBinding::new(KeyCode::KeyW, KeyAction::X_INC),
        KeyBinding::new(KeyCode::KeyS, KeyAction::X_DEC),
        KeyBinding::new(KeyCode::KeyA, KeyAction::Y_DEC),
        KeyBinding::new(KeyCode::KeyD, KeyAction::Y_INC),
        KeyBinding::new(KeyCode::KeyQ, KeyAction::Z_DEC),
        KeyBinding::new(KeyCode::KeyE, KeyAction::Z_INC),
        KeyBinding::new(KeyCode::Space, KeyAction::Z_INC),
        KeyBinding::new(KeyCode::ShiftLeft, KeyAction::Z_DEC),
    ]
}
