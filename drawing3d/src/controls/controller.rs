/// Camera controller - applies input events and held keys to a camera

use std::hash::Hash;
use glam::DVec3;
use rustc_hash::FxHashSet;
use crate::camera::Camera;
use crate::draw_debug;
use super::key_action::{KeyAction, KeyBinding};

/// Controller settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerConfig {
    /// When false, events are still tracked but never move the camera
    pub controllable: bool,
    /// Radians per pixel of pointer drag
    pub mouse_sensitivity: f64,
    /// Distance change per wheel line
    pub wheel_sensitivity: f64,
    /// Step applied per frame for each held key
    pub key_sensitivity: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            controllable: true,
            mouse_sensitivity: 0.01,
            wheel_sensitivity: 0.7,
            key_sensitivity: 0.1,
        }
    }
}

/// Pointer buttons known to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button, the one that drags the view
    Primary,
    Secondary,
    Middle,
    Other,
}

/// Backend-neutral input event
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent<T> {
    KeyPressed(T),
    KeyReleased(T),
    PointerPressed(PointerButton),
    PointerReleased(PointerButton),
    /// Relative pointer motion in pixels
    PointerMoved { dx: f64, dy: f64 },
    /// Wheel motion in lines, positive away from the user
    Wheel { delta: f64 },
    Focused(bool),
    Resized { width: f64, height: f64 },
}

/// Drives a camera from input.
///
/// Key and button state is only tracked while the window has focus; losing
/// focus releases everything so no key stays stuck.
#[derive(Debug, Clone)]
pub struct CameraController<T> {
    config: ControllerConfig,
    bindings: Vec<KeyBinding<T>>,
    held: FxHashSet<T>,
    focused: bool,
    dragging: bool,
}

impl<T: Eq + Hash + Clone> CameraController<T> {
    /// Create a controller. The window is assumed focused until told otherwise.
    pub fn new(config: ControllerConfig, bindings: Vec<KeyBinding<T>>) -> Self {
        Self {
            config,
            bindings,
            held: FxHashSet::default(),
            focused: true,
            dragging: false,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut ControllerConfig {
        &mut self.config
    }

    pub fn set_controllable(&mut self, controllable: bool) {
        self.config.controllable = controllable;
    }

    pub fn bindings(&self) -> &[KeyBinding<T>] {
        &self.bindings
    }

    /// Replace the key table. Held keys stay held.
    pub fn set_bindings(&mut self, bindings: Vec<KeyBinding<T>>) {
        self.bindings = bindings;
    }

    pub fn is_held(&self, trigger: &T) -> bool {
        self.held.contains(trigger)
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Apply one event. Returns whether the camera was modified.
    pub fn handle_event(&mut self, camera: &mut Camera, event: &ControlEvent<T>) -> bool {
        match event {
            ControlEvent::KeyPressed(key) => {
                if self.focused {
                    self.held.insert(key.clone());
                }
                false
            }
            ControlEvent::KeyReleased(key) => {
                if self.focused {
                    self.held.remove(key);
                }
                false
            }
            ControlEvent::PointerPressed(PointerButton::Primary) => {
                if self.focused {
                    self.dragging = true;
                }
                false
            }
            ControlEvent::PointerReleased(PointerButton::Primary) => {
                if self.focused {
                    self.dragging = false;
                }
                false
            }
            ControlEvent::PointerPressed(_) | ControlEvent::PointerReleased(_) => false,
            ControlEvent::PointerMoved { dx, dy } => {
                if !(self.dragging && self.focused && self.config.controllable) {
                    return false;
                }
                let m = self.config.mouse_sensitivity;
                camera.add_rotation(0.0, -dy * m, dx * m);
                true
            }
            ControlEvent::Wheel { delta } => {
                if !(self.focused && self.config.controllable) {
                    return false;
                }
                camera.add_distance(delta * self.config.wheel_sensitivity);
                true
            }
            ControlEvent::Focused(focused) => {
                self.focused = *focused;
                if !focused {
                    self.held.clear();
                    self.dragging = false;
                }
                false
            }
            ControlEvent::Resized { width, height } => {
                draw_debug!("drawing3d::CameraController", "viewport resized to {}x{}", width, height);
                camera.set_viewport(*width, *height);
                true
            }
        }
    }

    /// Apply the action of every binding whose trigger is held.
    ///
    /// Call once per frame. Returns whether the camera was modified.
    pub fn apply_held_keys(&self, camera: &mut Camera) -> bool {
        let mut changed = false;
        for binding in &self.bindings {
            if self.held.contains(&binding.trigger) {
                changed |= self.apply_action(camera, binding.action);
            }
        }
        changed
    }

    /// Apply every flag of `action` with a step of `key_sensitivity`.
    ///
    /// Does nothing when the controller is not controllable.
    pub fn apply_action(&self, camera: &mut Camera, action: KeyAction) -> bool {
        if !self.config.controllable || action.is_empty() {
            return false;
        }
        let k = self.config.key_sensitivity;
        let step = |inc: KeyAction, dec: KeyAction| {
            let mut value = 0.0;
            if action.contains(inc) {
                value += k;
            }
            if action.contains(dec) {
                value -= k;
            }
            value
        };

        let translation = DVec3::new(
            step(KeyAction::X_INC, KeyAction::X_DEC),
            step(KeyAction::Y_INC, KeyAction::Y_DEC),
            step(KeyAction::Z_INC, KeyAction::Z_DEC),
        );
        let rotation = DVec3::new(
            step(KeyAction::RX_INC, KeyAction::RX_DEC),
            step(KeyAction::RY_INC, KeyAction::RY_DEC),
            step(KeyAction::RZ_INC, KeyAction::RZ_DEC),
        );
        let distance = step(KeyAction::DISTANCE_INC, KeyAction::DISTANCE_DEC);

        // translation uses the yaw from before this step
        if translation != DVec3::ZERO {
            camera.move_relative(translation.x, translation.y, translation.z);
        }
        if rotation != DVec3::ZERO {
            camera.add_rotation(rotation.x, rotation.y, rotation.z);
        }
        if distance != 0.0 {
            camera.add_distance(distance);
        }
        true
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
