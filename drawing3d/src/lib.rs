/*!
# drawing3d

Project 3D points, lines, polygons and polylines through a virtual camera
onto any 2D drawing surface.

Callers fill a retained [`DrawList`](drawing3d::draw_list::DrawList) with
primitives and style changes, then replay it every frame (or once, for an
export) through a [`Camera`](drawing3d::camera::Camera) onto a type
implementing the [`Surface`](drawing3d::render::Surface) trait.

## Architecture

- **Camera**: extrinsic pose, orbit distance, intrinsic projection and the
  composed 4x4 projection matrix
- **DrawList**: ordered primitive records over a flat `f64` payload, with a
  one-level save/restore watermark
- **render**: dispatcher walking draw lists, culling vertices behind the
  camera and emitting path calls on a `Surface`
- **controls**: camera controller fed by backend-neutral input events, with
  winit key tables and event translation

Surface backends (raster, vector) live in separate crates.
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;
pub mod draw_list;
pub mod render;
pub mod controls;

// Main drawing3d namespace module
pub mod drawing3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger, LOG_ENV_VAR,
            set_logger, reset_logger,
        };
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod draw_list {
        pub use crate::draw_list::*;
    }

    pub mod render {
        pub use crate::render::*;
    }

    pub mod controls {
        pub use crate::controls::*;
    }
}

// Re-export math library at crate root
pub use glam;
