//! Camera module — projection pipeline and 4x4 transform helpers.
//!
//! The camera is a plain value owned by the caller: the library never
//! stores one. Controllers and renderers borrow it.

mod camera;
pub mod transform;

pub use camera::{Camera, CameraConfig, Projection, project_with};
pub use transform::ObjectPose;
