/// Surface trait - 2D drawing target fed by the render dispatcher
///
/// A surface keeps a current path, colour, line width and line cap, the
/// same model as cairo or a canvas 2D context. Backends live outside the
/// core crate (raster, vector, on-screen); `RecordingSurface` is the
/// in-crate implementation used for inspection and tests.

use glam::DVec2;
use crate::error::Result;
use crate::draw_list::Rgba;

/// Shape drawn at the ends of stroked open subpaths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Drawing target for projected primitives
///
/// Coordinates are surface pixels with the origin at the top-left corner.
/// Every method may fail; the dispatcher stops at the first error.
pub trait Surface {
    /// Start a new subpath at `p`
    fn move_to(&mut self, p: DVec2) -> Result<()>;

    /// Extend the current subpath to `p`
    fn line_to(&mut self, p: DVec2) -> Result<()>;

    /// Close the current subpath back to its start point
    fn close_path(&mut self) -> Result<()>;

    /// Stroke the current path with the current colour/width, then clear it
    fn stroke(&mut self) -> Result<()>;

    /// Fill the current path with the current colour, then clear it
    fn fill(&mut self) -> Result<()>;

    fn set_color(&mut self, color: Rgba) -> Result<()>;

    fn set_line_width(&mut self, width: f64) -> Result<()>;

    /// Fill an axis-aligned rectangle with the current colour
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()>;

    /// Set the line cap. Surfaces without cap support ignore it.
    fn set_line_cap(&mut self, _cap: LineCap) -> Result<()> {
        Ok(())
    }
}
