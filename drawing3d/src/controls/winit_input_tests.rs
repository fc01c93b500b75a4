use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, NativeKeyCode, PhysicalKey};
use crate::controls::{ControlEvent, PointerButton};
use super::*;

#[test]
fn test_translate_key() {
    assert_eq!(
        translate_key(PhysicalKey::Code(KeyCode::KeyW), ElementState::Pressed),
        Some(ControlEvent::KeyPressed(KeyCode::KeyW))
    );
    assert_eq!(
        translate_key(PhysicalKey::Code(KeyCode::ArrowUp), ElementState::Released),
        Some(ControlEvent::KeyReleased(KeyCode::ArrowUp))
    );
    assert_eq!(
        translate_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified), ElementState::Pressed),
        None
    );
}

#[test]
fn test_translate_button() {
    assert_eq!(
        translate_button(MouseButton::Left, ElementState::Pressed),
        ControlEvent::PointerPressed(PointerButton::Primary)
    );
    assert_eq!(
        translate_button(MouseButton::Right, ElementState::Released),
        ControlEvent::PointerReleased(PointerButton::Secondary)
    );
    assert_eq!(
        translate_button(MouseButton::Other(7), ElementState::Pressed),
        ControlEvent::PointerPressed(PointerButton::Other)
    );
}

#[test]
fn test_cursor_motion_is_relative() {
    let mut input = WinitInput::new();

    assert_eq!(input.cursor_moved(PhysicalPosition::new(10.0, 10.0)), None);
    assert_eq!(
        input.cursor_moved(PhysicalPosition::new(13.0, 6.0)),
        Some(ControlEvent::PointerMoved { dx: 3.0, dy: -4.0 })
    );
}

#[test]
fn test_wheel_deltas_in_lines() {
    assert_eq!(
        translate_wheel(MouseScrollDelta::LineDelta(0.0, -2.0)),
        ControlEvent::Wheel { delta: -2.0 }
    );
    assert_eq!(
        translate_wheel(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, 40.0))),
        ControlEvent::Wheel { delta: 40.0 / PIXELS_PER_LINE }
    );
}

#[test]
fn test_translate_window_events() {
    let mut input = WinitInput::new();

    assert_eq!(
        input.translate(&WindowEvent::Focused(false)),
        Some(ControlEvent::Focused(false))
    );
    assert_eq!(
        input.translate(&WindowEvent::Resized(PhysicalSize::new(800, 600))),
        Some(ControlEvent::Resized { width: 800.0, height: 600.0 })
    );
    assert_eq!(input.translate(&WindowEvent::RedrawRequested), None);
}
