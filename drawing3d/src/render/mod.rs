//! Render module — projection-driven replay of draw lists onto surfaces.

mod dispatcher;
mod recording_surface;
mod surface;

pub use dispatcher::{render, render_layers, RenderStats};
pub use recording_surface::{RecordingSurface, SurfaceCommand};
pub use surface::{LineCap, Surface};
