//! Controls module — interactive camera driving.
//!
//! `CameraController` turns backend-neutral `ControlEvent`s into camera
//! mutations. Key tables are plain data (`Vec<KeyBinding<T>>`), so hosts
//! can use their own key type; `orbit_keymap`/`free_keymap` and
//! `WinitInput` cover the winit case.

mod controller;
mod key_action;
mod keymap;
mod winit_input;

pub use controller::{CameraController, ControlEvent, ControllerConfig, PointerButton};
pub use key_action::{KeyAction, KeyBinding};
pub use keymap::{free_keymap, orbit_keymap};
pub use winit_input::{WinitInput, PIXELS_PER_LINE};
