/// SvgSurface - vector implementation of the drawing3d Surface trait
///
/// Every stroke, fill and rectangle becomes one SVG element appended to the
/// document body; `finish` wraps the body in the `<svg>` root. Subpaths with
/// a point that has no finite `f32` form are dropped, as on `PixmapSurface`.

use std::fmt::Write as _;
use std::path::Path;
use drawing3d::drawing3d::{Error, Result};
use drawing3d::drawing3d::draw_list::Rgba;
use drawing3d::drawing3d::render::{LineCap, Surface};
use drawing3d::glam::DVec2;
use drawing3d::{draw_bail, draw_error, draw_warn};

use crate::config::SurfaceConfig;
use crate::pixmap_surface::surface_point;

const SOURCE: &str = "drawing3d::skia::SvgSurface";

/// Vector drawing surface producing an SVG document
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    anti_alias: bool,
    body: String,
    // path data of finished subpaths, then the open subpath
    path: String,
    subpath: String,
    start: Option<(f32, f32)>,
    drawable: bool,
    closed: bool,
    dropped: usize,
    color: Rgba,
    line_width: f64,
    line_cap: LineCap,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Result<Self> {
        Self::with_config(width, height, &SurfaceConfig::default())
    }

    pub fn with_config(width: f64, height: f64, config: &SurfaceConfig) -> Result<Self> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            draw_bail!(SOURCE, Error::InvalidArgument,
                "invalid SVG size {}x{}", width, height);
        }
        let mut surface = Self {
            width,
            height,
            anti_alias: config.anti_alias,
            body: String::new(),
            path: String::new(),
            subpath: String::new(),
            start: None,
            drawable: true,
            closed: false,
            dropped: 0,
            color: config.style.color,
            line_width: config.style.width,
            line_cap: config.line_cap,
        };
        check_color(config.style.color)?;
        if let Some(background) = config.background {
            check_color(background)?;
            surface.color = background;
            surface.fill_rect(0.0, 0.0, width, height)?;
            surface.color = config.style.color;
        }
        Ok(surface)
    }

    /// Complete SVG document for everything drawn so far
    pub fn finish(&self) -> String {
        let mut svg = String::with_capacity(self.body.len() + 256);
        let _ = write!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"",
            w = num(self.width),
            h = num(self.height),
        );
        if !self.anti_alias {
            svg.push_str(" shape-rendering=\"crispEdges\"");
        }
        svg.push_str(">\n");
        svg.push_str(&self.body);
        svg.push_str("</svg>\n");
        svg
    }

    /// Write the document to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.finish()).map_err(|e| {
            draw_error!(SOURCE, "cannot write {}: {}", path.display(), e);
            Error::BackendError(format!("cannot write {}: {}", path.display(), e))
        })
    }

    /// Number of elements written so far
    pub fn element_count(&self) -> usize {
        self.body.lines().count()
    }

    fn begin_subpath(&mut self, p: DVec2) {
        self.end_subpath();
        let point = surface_point(p);
        self.start = point;
        self.drawable = point.is_some();
        if let Some((x, y)) = point {
            let _ = write!(self.subpath, "M{} {}", num(x as f64), num(y as f64));
        }
    }

    fn extend_subpath(&mut self, p: DVec2) {
        match surface_point(p) {
            Some((x, y)) => {
                let _ = write!(self.subpath, " L{} {}", num(x as f64), num(y as f64));
            }
            None => self.drawable = false,
        }
    }

    fn end_subpath(&mut self) {
        let subpath = std::mem::take(&mut self.subpath);
        if !self.drawable {
            self.dropped += 1;
        } else if !subpath.is_empty() {
            if !self.path.is_empty() {
                self.path.push(' ');
            }
            self.path.push_str(&subpath);
        }
        self.start = None;
        self.drawable = true;
        self.closed = false;
    }

    fn take_path(&mut self) -> Option<String> {
        self.end_subpath();
        if self.dropped > 0 {
            draw_warn!(SOURCE, "dropped {} subpath(s) with non-finite points", self.dropped);
            self.dropped = 0;
        }
        let path = std::mem::take(&mut self.path);
        if path.is_empty() {
            None
        } else {
            Some(path)
        }
    }
}

impl Surface for SvgSurface {
    fn move_to(&mut self, p: DVec2) -> Result<()> {
        self.begin_subpath(p);
        Ok(())
    }

    fn line_to(&mut self, p: DVec2) -> Result<()> {
        if self.subpath.is_empty() && self.drawable {
            self.begin_subpath(p);
        } else if self.closed {
            // a closed subpath leaves the pen at its start point
            let (start, drawable) = (self.start, self.drawable);
            self.end_subpath();
            self.start = start;
            self.drawable = drawable;
            if let Some((x, y)) = start {
                let _ = write!(self.subpath, "M{} {}", num(x as f64), num(y as f64));
            }
            self.extend_subpath(p);
        } else {
            self.extend_subpath(p);
        }
        Ok(())
    }

    fn close_path(&mut self) -> Result<()> {
        if !self.subpath.is_empty() {
            self.subpath.push_str(" Z");
            self.closed = true;
        }
        Ok(())
    }

    fn stroke(&mut self) -> Result<()> {
        let Some(d) = self.take_path() else {
            return Ok(());
        };
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" stroke-width=\"{}\" stroke-linecap=\"{}\" stroke-linejoin=\"round\"/>",
            d,
            rgb(self.color),
            num(opacity(self.color)),
            num(self.line_width),
            cap_name(self.line_cap),
        );
        Ok(())
    }

    fn fill(&mut self) -> Result<()> {
        let Some(d) = self.take_path() else {
            return Ok(());
        };
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            d,
            rgb(self.color),
            num(opacity(self.color)),
        );
        Ok(())
    }

    fn set_color(&mut self, color: Rgba) -> Result<()> {
        check_color(color)?;
        self.color = color;
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
        if width <= 0.0 || height <= 0.0 {
            return Ok(());
        }
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" fill-opacity=\"{}\"/>",
            num(x),
            num(y),
            num(width),
            num(height),
            rgb(self.color),
            num(opacity(self.color)),
        );
        Ok(())
    }

    fn set_line_cap(&mut self, cap: LineCap) -> Result<()> {
        self.line_cap = cap;
        Ok(())
    }
}

fn check_color(color: Rgba) -> Result<()> {
    if !color.is_finite() {
        draw_bail!(SOURCE, Error::InvalidArgument, "non finite colour {:?}", color);
    }
    Ok(())
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn rgb(color: Rgba) -> String {
    format!("rgb({},{},{})", channel(color.r), channel(color.g), channel(color.b))
}

fn opacity(color: Rgba) -> f64 {
    color.a.clamp(0.0, 1.0)
}

fn cap_name(cap: LineCap) -> &'static str {
    match cap {
        LineCap::Butt => "butt",
        LineCap::Round => "round",
        LineCap::Square => "square",
    }
}

/// Shortest decimal with at most 3 fractional digits
fn num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "svg_surface_tests.rs"]
mod tests;
