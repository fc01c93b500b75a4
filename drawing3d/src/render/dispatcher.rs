/// Render dispatcher — walks draw lists in order, projects vertices through
/// a camera and emits path calls on a surface.
///
/// Nothing is clipped: vertices behind the camera (`w <= 0`) are culled,
/// primitives touching them are degraded (segments skipped, polygons
/// stroked through their visible vertices, polylines broken in pieces).
/// Culled vertices never reach the surface.

use glam::{DMat4, DVec2, DVec3};
use crate::camera::{project_with, Camera, ObjectPose};
use crate::draw_list::{DrawList, Primitive, PrimitiveKind, Style};
use crate::error::Result;
use crate::draw_trace;
use super::surface::{LineCap, Surface};

/// Counters collected during one render call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStats {
    /// Records visited (all kinds)
    pub primitives: usize,
    /// `stroke` calls issued
    pub strokes: usize,
    /// `fill` and `fill_rect` calls issued
    pub fills: usize,
    /// Vertices dropped because they were behind the camera
    pub culled_vertices: usize,
}

/// Render one draw list.
///
/// The camera is updated first. `pose` replaces the camera's object pose
/// for this call only; the camera's own pose is left untouched.
///
/// # Errors
///
/// Returns the first error reported by the surface.
pub fn render<S: Surface + ?Sized>(
    list: &DrawList,
    camera: &mut Camera,
    surface: &mut S,
    pose: Option<&ObjectPose>,
) -> Result<RenderStats> {
    render_layers(&[list], camera, surface, pose)
}

/// Render several lists in order onto the same surface with a single
/// camera update; later lists draw over earlier ones.
pub fn render_layers<S: Surface + ?Sized>(
    lists: &[&DrawList],
    camera: &mut Camera,
    surface: &mut S,
    pose: Option<&ObjectPose>,
) -> Result<RenderStats> {
    camera.update();
    let matrix = match pose {
        Some(pose) => camera.projection_matrix_with(pose),
        None => camera.projection_matrix(),
    };
    let (width, height) = camera.viewport();

    let mut dispatcher = RenderDispatcher {
        surface,
        matrix,
        width,
        height,
        stats: RenderStats::default(),
    };
    dispatcher.surface.set_line_cap(LineCap::Round)?;
    for list in lists {
        for (primitive, values) in list.iter() {
            dispatcher.dispatch(primitive, values)?;
        }
    }

    let stats = dispatcher.stats;
    draw_trace!("drawing3d::RenderDispatcher",
        "rendered {} records in {} layer(s): {} strokes, {} fills, {} culled vertices",
        stats.primitives, lists.len(), stats.strokes, stats.fills, stats.culled_vertices);
    Ok(stats)
}

struct RenderDispatcher<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    matrix: DMat4,
    width: f64,
    height: f64,
    stats: RenderStats,
}

impl<S: Surface + ?Sized> RenderDispatcher<'_, S> {
    fn dispatch(&mut self, primitive: Primitive, values: &[f64]) -> Result<()> {
        self.stats.primitives += 1;
        match primitive.kind {
            PrimitiveKind::Line => self.lines(values),
            PrimitiveKind::Point => self.points(values),
            PrimitiveKind::Polygon => self.polygon(values),
            PrimitiveKind::Polyline => self.polyline(values),
            PrimitiveKind::Style => self.style(values),
            PrimitiveKind::Clear => {
                self.stats.fills += 1;
                self.surface.fill_rect(0.0, 0.0, self.width, self.height)
            }
        }
    }

    /// Project a vertex, counting it as culled when hidden
    fn project(&mut self, v: &[f64]) -> Option<DVec2> {
        let (q, visible) = project_with(&self.matrix, DVec3::new(v[0], v[1], v[2]));
        if visible {
            Some(q)
        } else {
            self.stats.culled_vertices += 1;
            None
        }
    }

    fn stroke(&mut self) -> Result<()> {
        self.stats.strokes += 1;
        self.surface.stroke()
    }

    fn lines(&mut self, values: &[f64]) -> Result<()> {
        for segment in values.chunks_exact(6) {
            let a = self.project(&segment[..3]);
            let b = self.project(&segment[3..]);
            if let (Some(a), Some(b)) = (a, b) {
                self.surface.move_to(a)?;
                self.surface.line_to(b)?;
                self.stroke()?;
            }
        }
        Ok(())
    }

    fn points(&mut self, values: &[f64]) -> Result<()> {
        for v in values.chunks_exact(3) {
            if let Some(p) = self.project(v) {
                // zero-length segment, drawn by the round cap
                self.surface.move_to(p)?;
                self.surface.line_to(p)?;
                self.stroke()?;
            }
        }
        Ok(())
    }

    fn polygon(&mut self, values: &[f64]) -> Result<()> {
        let total = values.len() / 3;
        let visible: Vec<DVec2> = values
            .chunks_exact(3)
            .filter_map(|v| self.project(v))
            .collect();

        let Some((first, rest)) = visible.split_first() else {
            return Ok(());
        };
        self.surface.move_to(*first)?;
        for p in rest {
            self.surface.line_to(*p)?;
        }

        if visible.len() == total {
            self.surface.close_path()?;
            self.stats.fills += 1;
            self.surface.fill()
        } else {
            self.stroke()
        }
    }

    fn polyline(&mut self, values: &[f64]) -> Result<()> {
        let mut pen_down = false;
        for v in values.chunks_exact(3) {
            match self.project(v) {
                Some(p) if pen_down => self.surface.line_to(p)?,
                Some(p) => {
                    self.surface.move_to(p)?;
                    pen_down = true;
                }
                None if pen_down => {
                    self.stroke()?;
                    pen_down = false;
                }
                None => {}
            }
        }
        if pen_down {
            self.stroke()?;
        }
        Ok(())
    }

    fn style(&mut self, values: &[f64]) -> Result<()> {
        if let Some(style) = Style::from_values(values) {
            self.surface.set_color(style.color)?;
            self.surface.set_line_width(style.width)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
