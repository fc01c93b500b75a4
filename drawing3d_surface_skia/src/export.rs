/// Export helpers - render draw list layers straight to PNG, SVG or a BGRA buffer
///
/// The output size is the camera viewport (rounded to whole pixels for the
/// raster outputs). Layers are drawn in order, later ones on top.

use std::path::Path;
use drawing3d::drawing3d::{Error, Result};
use drawing3d::drawing3d::camera::{Camera, ObjectPose};
use drawing3d::drawing3d::draw_list::DrawList;
use drawing3d::drawing3d::render::{render_layers, RenderStats};
use drawing3d::{draw_bail, draw_debug};

use crate::config::SurfaceConfig;
use crate::pixmap_surface::PixmapSurface;
use crate::svg_surface::SvgSurface;

const SOURCE: &str = "drawing3d::skia::export";

/// Pixel size of the camera viewport
pub fn viewport_pixels(camera: &Camera) -> Result<(u32, u32)> {
    let (width, height) = camera.viewport();
    let to_pixels = |v: f64| {
        let v = v.round();
        if v.is_finite() && v >= 1.0 && v <= u32::MAX as f64 {
            Some(v as u32)
        } else {
            None
        }
    };
    match (to_pixels(width), to_pixels(height)) {
        (Some(w), Some(h)) => Ok((w, h)),
        _ => {
            draw_bail!(SOURCE, Error::InvalidArgument,
                "viewport {}x{} cannot be rasterized", width, height);
        }
    }
}

/// Render layers onto a new raster surface
pub fn render_pixmap(
    layers: &[&DrawList],
    camera: &mut Camera,
    pose: Option<&ObjectPose>,
    config: &SurfaceConfig,
) -> Result<(PixmapSurface, RenderStats)> {
    let (width, height) = viewport_pixels(camera)?;
    let mut surface = PixmapSurface::with_config(width, height, config)?;
    let stats = render_layers(layers, camera, &mut surface, pose)?;
    Ok((surface, stats))
}

/// Render layers to a PNG file
pub fn render_png(
    layers: &[&DrawList],
    camera: &mut Camera,
    pose: Option<&ObjectPose>,
    path: impl AsRef<Path>,
) -> Result<RenderStats> {
    let (surface, stats) = render_pixmap(layers, camera, pose, &SurfaceConfig::default())?;
    surface.save_png(path.as_ref())?;
    draw_debug!(SOURCE, "wrote {}x{} PNG to {}",
        surface.width(), surface.height(), path.as_ref().display());
    Ok(stats)
}

/// Render layers into a premultiplied BGRA8 buffer of at least
/// `width * height * 4` bytes
pub fn render_bgra(
    layers: &[&DrawList],
    camera: &mut Camera,
    pose: Option<&ObjectPose>,
    out: &mut [u8],
) -> Result<RenderStats> {
    let (surface, stats) = render_pixmap(layers, camera, pose, &SurfaceConfig::default())?;
    surface.write_bgra(out)?;
    Ok(stats)
}

/// Render layers to an SVG document
pub fn render_svg_document(
    layers: &[&DrawList],
    camera: &mut Camera,
    pose: Option<&ObjectPose>,
    config: &SurfaceConfig,
) -> Result<(String, RenderStats)> {
    let (width, height) = camera.viewport();
    let mut surface = SvgSurface::with_config(width, height, config)?;
    let stats = render_layers(layers, camera, &mut surface, pose)?;
    Ok((surface.finish(), stats))
}

/// Render layers to an SVG file
pub fn render_svg(
    layers: &[&DrawList],
    camera: &mut Camera,
    pose: Option<&ObjectPose>,
    path: impl AsRef<Path>,
) -> Result<RenderStats> {
    let path = path.as_ref();
    let (document, stats) = render_svg_document(layers, camera, pose, &SurfaceConfig::default())?;
    std::fs::write(path, document).map_err(|e| {
        drawing3d::draw_error!(SOURCE, "cannot write {}: {}", path.display(), e);
        Error::BackendError(format!("cannot write {}: {}", path.display(), e))
    })?;
    draw_debug!(SOURCE, "wrote SVG to {}", path.display());
    Ok(stats)
}
