/*!
# drawing3d - tiny-skia and SVG surfaces

Surface backends for drawing3d:

- **PixmapSurface**: raster surface on `tiny_skia::Pixmap`, PNG and BGRA output
- **SvgSurface**: vector surface writing an SVG document
- **export**: one-call helpers rendering draw list layers through a camera
  to a PNG file, an SVG file or a BGRA buffer

Both surfaces start with the same state (opaque black, 1 px, round caps),
so a draw list looks the same on either.

# Example

```no_run
use drawing3d::drawing3d::camera::Camera;
use drawing3d::drawing3d::draw_list::DrawList;
use drawing3d::glam::DVec3;
use drawing3d_surface_skia::render_png;

let mut list = DrawList::new();
list.append_line(DVec3::new(5.0, -1.0, 0.0), DVec3::new(5.0, 1.0, 0.0))?;

let mut camera = Camera::new();
camera.set_viewport(640.0, 480.0);
camera.set_perspective(1.2, 0.9);
render_png(&[&list], &mut camera, None, "line.png")?;
# Ok::<(), drawing3d::drawing3d::Error>(())
```
*/

mod config;
mod export;
mod pixmap_surface;
mod svg_surface;

pub use config::SurfaceConfig;
pub use export::{
    render_bgra, render_pixmap, render_png, render_svg, render_svg_document, viewport_pixels,
};
pub use pixmap_surface::PixmapSurface;
pub use svg_surface::SvgSurface;

// Re-export the rasterizer for callers that post-process pixmaps
pub use resvg::tiny_skia;
