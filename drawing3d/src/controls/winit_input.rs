/// winit adapter - translates window events into `ControlEvent<KeyCode>`

use glam::DVec2;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use super::controller::{ControlEvent, PointerButton};

/// Pixels counted as one wheel line for touchpad (pixel) scrolling
pub const PIXELS_PER_LINE: f64 = 20.0;

/// Stateful translator: remembers the last cursor position so absolute
/// cursor events become relative motion.
#[derive(Debug, Clone, Default)]
pub struct WinitInput {
    last_cursor: Option<DVec2>,
}

impl WinitInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Translate a window event. Returns `None` for events the controller
    /// does not use (including key repeats and the first cursor sample).
    pub fn translate(&mut self, event: &WindowEvent) -> Option<ControlEvent<KeyCode>> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return None;
                }
                translate_key(event.physical_key, event.state)
            }
            WindowEvent::MouseInput { state, button, .. } => Some(translate_button(*button, *state)),
            WindowEvent::CursorMoved { position, .. } => self.cursor_moved(*position),
            WindowEvent::CursorLeft { .. } => {
                self.last_cursor = None;
                None
            }
            WindowEvent::MouseWheel { delta, .. } => Some(translate_wheel(*delta)),
            WindowEvent::Focused(focused) => Some(ControlEvent::Focused(*focused)),
            WindowEvent::Resized(size) => Some(translate_resize(*size)),
            _ => None,
        }
    }

    /// Relative motion since the previous cursor sample
    pub fn cursor_moved(&mut self, position: PhysicalPosition<f64>) -> Option<ControlEvent<KeyCode>> {
        let current = DVec2::new(position.x, position.y);
        let previous = self.last_cursor.replace(current)?;
        let delta = current - previous;
        Some(ControlEvent::PointerMoved { dx: delta.x, dy: delta.y })
    }
}

/// Key press/release for identified physical keys
pub fn translate_key(key: PhysicalKey, state: ElementState) -> Option<ControlEvent<KeyCode>> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    Some(match state {
        ElementState::Pressed => ControlEvent::KeyPressed(code),
        ElementState::Released => ControlEvent::KeyReleased(code),
    })
}

pub fn translate_button(button: MouseButton, state: ElementState) -> ControlEvent<KeyCode> {
    let button = match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        _ => PointerButton::Other,
    };
    match state {
        ElementState::Pressed => ControlEvent::PointerPressed(button),
        ElementState::Released => ControlEvent::PointerReleased(button),
    }
}

/// Vertical wheel motion in lines
pub fn translate_wheel(delta: MouseScrollDelta) -> ControlEvent<KeyCode> {
    let delta = match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(p) => p.y / PIXELS_PER_LINE,
    };
    ControlEvent::Wheel { delta }
}

pub fn translate_resize(size: PhysicalSize<u32>) -> ControlEvent<KeyCode> {
    ControlEvent::Resized {
        width: size.width as f64,
        height: size.height as f64,
    }
}

#[cfg(test)]
#[path = "winit_input_tests.rs"]
mod tests;
