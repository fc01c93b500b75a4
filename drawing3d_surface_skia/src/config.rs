/// Surface configuration shared by the raster and vector backends

use drawing3d::drawing3d::draw_list::{Rgba, Style};
use drawing3d::drawing3d::render::LineCap;

/// Backend settings
///
/// The dispatcher sets the line cap itself at the start of every render,
/// so `line_cap` only matters when a surface is driven directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    /// Anti-alias paths (raster) / `shape-rendering` hint (vector)
    pub anti_alias: bool,
    /// Initial line cap
    pub line_cap: LineCap,
    /// Initial colour and line width
    pub style: Style,
    /// Initial surface content; `None` leaves it transparent
    pub background: Option<Rgba>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            anti_alias: true,
            line_cap: LineCap::Round,
            style: Style::DEFAULT,
            background: None,
        }
    }
}
