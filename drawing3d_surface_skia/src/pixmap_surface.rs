/// PixmapSurface - raster implementation of the drawing3d Surface trait
///
/// Draws into a `tiny_skia::Pixmap` (premultiplied RGBA8). The current path
/// is kept as a list of subpaths and turned into a tiny-skia path when it
/// is stroked or filled. A subpath holding a point that does not fit a
/// finite `f32` is dropped; the rest of the path still draws.

use std::path::Path;
use drawing3d::drawing3d::{Error, Result};
use drawing3d::drawing3d::draw_list::Rgba;
use drawing3d::drawing3d::render::{LineCap, Surface};
use drawing3d::glam::DVec2;
use drawing3d::{draw_bail, draw_error, draw_warn};
use resvg::tiny_skia::{
    self, Color, FillRule, LineJoin, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform,
};

use crate::config::SurfaceConfig;

const SOURCE: &str = "drawing3d::skia::PixmapSurface";

#[derive(Debug, Clone, Default)]
struct Subpath {
    points: Vec<(f32, f32)>,
    closed: bool,
    drawable: bool,
}

/// Surface point in `f32`, `None` when it has no finite representation
pub(crate) fn surface_point(p: DVec2) -> Option<(f32, f32)> {
    let (x, y) = (p.x as f32, p.y as f32);
    (x.is_finite() && y.is_finite()).then_some((x, y))
}

impl Subpath {
    fn starting_at(p: DVec2) -> Self {
        let point = surface_point(p);
        Self {
            points: vec![point.unwrap_or_default()],
            closed: false,
            drawable: point.is_some(),
        }
    }

    fn push(&mut self, p: DVec2) {
        match surface_point(p) {
            Some(point) => self.points.push(point),
            None => self.drawable = false,
        }
    }

    /// At least two points, all at the same place
    fn is_degenerate(&self) -> bool {
        match self.points.split_first() {
            Some((first, rest)) => !rest.is_empty() && rest.iter().all(|p| p == first),
            None => false,
        }
    }

    fn append_to(&self, builder: &mut PathBuilder) {
        let Some(((x, y), rest)) = self.points.split_first() else {
            return;
        };
        builder.move_to(*x, *y);
        for (x, y) in rest {
            builder.line_to(*x, *y);
        }
        if self.closed {
            builder.close();
        }
    }
}

/// Raster drawing surface
pub struct PixmapSurface {
    pixmap: Pixmap,
    anti_alias: bool,
    subpaths: Vec<Subpath>,
    color: Color,
    line_width: f64,
    line_cap: LineCap,
}

impl PixmapSurface {
    /// Create a transparent surface with the default configuration
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_config(width, height, &SurfaceConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: &SurfaceConfig) -> Result<Self> {
        let Some(mut pixmap) = Pixmap::new(width, height) else {
            draw_bail!(SOURCE, Error::BackendError,
                "cannot allocate a {}x{} pixmap", width, height);
        };
        if let Some(background) = config.background {
            pixmap.fill(to_color(background)?);
        }

        Ok(Self {
            pixmap,
            anti_alias: config.anti_alias,
            subpaths: Vec::new(),
            color: to_color(config.style.color)?,
            line_width: config.style.width,
            line_cap: config.line_cap,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Straight (demultiplied) RGBA of a pixel, `None` outside the surface
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
    }

    /// Encode the surface as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap.encode_png().map_err(|e| {
            draw_error!(SOURCE, "PNG encoding failed: {}", e);
            Error::BackendError(format!("PNG encoding failed: {}", e))
        })
    }

    /// Write the surface to a PNG file
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.pixmap.save_png(path).map_err(|e| {
            draw_error!(SOURCE, "cannot write {}: {}", path.display(), e);
            Error::BackendError(format!("cannot write {}: {}", path.display(), e))
        })
    }

    /// Number of bytes `write_bgra` needs
    pub fn bgra_len(&self) -> usize {
        self.pixmap.width() as usize * self.pixmap.height() as usize * 4
    }

    /// Copy the pixels as premultiplied BGRA8 rows (ARGB32 in little-endian
    /// memory order, the layout of most window system buffers).
    pub fn write_bgra(&self, out: &mut [u8]) -> Result<()> {
        let needed = self.bgra_len();
        if out.len() < needed {
            draw_bail!(SOURCE, Error::OutOfRange,
                "BGRA buffer of {} bytes is too small for {}x{} (need {})",
                out.len(), self.pixmap.width(), self.pixmap.height(), needed);
        }
        for (dst, src) in out.chunks_exact_mut(4).zip(self.pixmap.data().chunks_exact(4)) {
            dst[0] = src[2];
            dst[1] = src[1];
            dst[2] = src[0];
            dst[3] = src[3];
        }
        Ok(())
    }

    pub fn to_bgra(&self) -> Vec<u8> {
        let mut out = vec![0; self.bgra_len()];
        for (dst, src) in out.chunks_exact_mut(4).zip(self.pixmap.data().chunks_exact(4)) {
            dst.copy_from_slice(&[src[2], src[1], src[0], src[3]]);
        }
        out
    }

    fn paint(&self) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(self.color);
        paint.anti_alias = self.anti_alias;
        paint
    }

    fn skia_cap(&self) -> tiny_skia::LineCap {
        match self.line_cap {
            LineCap::Butt => tiny_skia::LineCap::Butt,
            LineCap::Round => tiny_skia::LineCap::Round,
            LineCap::Square => tiny_skia::LineCap::Square,
        }
    }

    /// Take the current path, dropping subpaths with non-finite points
    fn take_drawable(&mut self) -> Vec<Subpath> {
        let mut subpaths = std::mem::take(&mut self.subpaths);
        let before = subpaths.len();
        subpaths.retain(|s| s.drawable);
        if subpaths.len() < before {
            draw_warn!(SOURCE, "dropped {} subpath(s) with non-finite points", before - subpaths.len());
        }
        subpaths
    }

    /// Cap-shaped mark for a zero-length subpath
    fn dot(&mut self, (x, y): (f32, f32), paint: &Paint) {
        let half = (self.line_width / 2.0) as f32;
        if half <= 0.0 {
            return;
        }
        match self.line_cap {
            LineCap::Butt => {}
            LineCap::Round => {
                if let Some(circle) = PathBuilder::from_circle(x, y, half) {
                    self.pixmap.fill_path(&circle, paint, FillRule::Winding, Transform::identity(), None);
                }
            }
            LineCap::Square => {
                if let Some(rect) = Rect::from_xywh(x - half, y - half, 2.0 * half, 2.0 * half) {
                    self.pixmap.fill_rect(rect, paint, Transform::identity(), None);
                }
            }
        }
    }
}

impl Surface for PixmapSurface {
    fn move_to(&mut self, p: DVec2) -> Result<()> {
        self.subpaths.push(Subpath::starting_at(p));
        Ok(())
    }

    fn line_to(&mut self, p: DVec2) -> Result<()> {
        match self.subpaths.last_mut() {
            Some(subpath) if !subpath.closed => subpath.push(p),
            Some(closed) => {
                // a closed subpath leaves the pen at its start point
                let mut next = Subpath {
                    points: vec![closed.points[0]],
                    closed: false,
                    drawable: closed.drawable,
                };
                next.push(p);
                self.subpaths.push(next);
            }
            None => self.subpaths.push(Subpath::starting_at(p)),
        }
        Ok(())
    }

    fn close_path(&mut self) -> Result<()> {
        if let Some(subpath) = self.subpaths.last_mut() {
            subpath.closed = true;
        }
        Ok(())
    }

    fn stroke(&mut self) -> Result<()> {
        let subpaths = self.take_drawable();
        let paint = self.paint();

        let mut builder = PathBuilder::new();
        for subpath in &subpaths {
            if subpath.is_degenerate() {
                self.dot(subpath.points[0], &paint);
            } else if subpath.points.len() > 1 {
                subpath.append_to(&mut builder);
            }
        }

        if let Some(path) = builder.finish() {
            let stroke = Stroke {
                width: self.line_width as f32,
                line_cap: self.skia_cap(),
                line_join: LineJoin::Round,
                ..Stroke::default()
            };
            self.pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        let subpaths = self.take_drawable();

        let mut builder = PathBuilder::new();
        for subpath in subpaths.into_iter().filter(|s| s.points.len() > 2) {
            Subpath { closed: true, ..subpath }.append_to(&mut builder);
        }

        if let Some(path) = builder.finish() {
            let paint = self.paint();
            self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        Ok(())
    }

    fn set_color(&mut self, color: Rgba) -> Result<()> {
        self.color = to_color(color)?;
        Ok(())
    }

    fn set_line_width(&mut self, width: f64) -> Result<()> {
        if !width.is_finite() || width < 0.0 {
            draw_bail!(SOURCE, Error::InvalidArgument, "invalid line width {}", width);
        }
        self.line_width = width;
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        if let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) {
            let paint = self.paint();
            self.pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
        Ok(())
    }

    fn set_line_cap(&mut self, cap: LineCap) -> Result<()> {
        self.line_cap = cap;
        Ok(())
    }
}

/// Convert a straight colour, clamping finite components into `[0, 1]`
fn to_color(color: Rgba) -> Result<Color> {
    if !color.is_finite() {
        draw_bail!(SOURCE, Error::InvalidArgument, "non finite colour {:?}", color);
    }
    let c = |v: f64| v.clamp(0.0, 1.0) as f32;
    match Color::from_rgba(c(color.r), c(color.g), c(color.b), c(color.a)) {
        Some(color) => Ok(color),
        None => {
            draw_bail!(SOURCE, Error::InvalidArgument, "colour out of range {:?}", color);
        }
    }
}

#[cfg(test)]
#[path = "pixmap_surface_tests.rs"]
mod tests;
