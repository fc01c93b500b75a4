/// Recording surface - stores every draw call instead of rasterizing it

use glam::DVec2;
use crate::error::{Error, Result};
use crate::draw_list::Rgba;
use crate::draw_bail;
use super::surface::{LineCap, Surface};

/// One recorded surface call
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    MoveTo(DVec2),
    LineTo(DVec2),
    ClosePath,
    Stroke,
    Fill,
    SetColor(Rgba),
    SetLineWidth(f64),
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    SetLineCap(LineCap),
}

impl SurfaceCommand {
    /// Point carried by a path command
    pub fn point(&self) -> Option<DVec2> {
        match self {
            SurfaceCommand::MoveTo(p) | SurfaceCommand::LineTo(p) => Some(*p),
            _ => None,
        }
    }
}

/// Surface that records the command stream
///
/// Optionally fails with `BackendError` once a given number of commands
/// has been recorded, to exercise error propagation in callers.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<SurfaceCommand>,
    fail_after: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface that accepts `count` commands, then fails every call
    pub fn failing_after(count: usize) -> Self {
        Self {
            commands: Vec::new(),
            fail_after: Some(count),
        }
    }

    /// Number of recorded commands matching `predicate`
    pub fn count(&self, predicate: impl Fn(&SurfaceCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Points passed to `move_to`/`line_to`, in order
    pub fn path_points(&self) -> Vec<DVec2> {
        self.commands.iter().filter_map(SurfaceCommand::point).collect()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    fn record(&mut self, command: SurfaceCommand) -> Result<()> {
        if let Some(limit) = self.fail_after {
            if self.commands.len() >= limit {
                draw_bail!("drawing3d::RecordingSurface", Error::BackendError,
                    "recording limit of {} commands reached at {:?}", limit, command);
            }
        }
        self.commands.push(command);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn move_to(&mut self, p: DVec2) -> Result<()> {
        self.record(SurfaceCommand::MoveTo(p))
    }

    fn line_to(&mut self, p: DVec2) -> Result<()> {
        self.record(SurfaceCommand::LineTo(p))
    }

    fn close_path(&mut self) -> Result<()> {
        self.record(SurfaceCommand::ClosePath)
    }

    fn stroke(&mut self) -> Result<()> {
        self.record(SurfaceCommand::Stroke)
    }

    fn fill(&mut self) -> Result<()> {
        self.record(SurfaceCommand::Fill)
    }

    fn set_color(&mut self, color: Rgba) -> Result<()> {
        self.record(SurfaceCommand::SetColor(color))
    }

    fn set_line_width(&mut self, width: f64) -> Result<()> {
        self.record(SurfaceCommand::SetLineWidth(width))
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<()> {
        self.record(SurfaceCommand::FillRect { x, y, width, height })
    }

    fn set_line_cap(&mut self, cap: LineCap) -> Result<()> {
        self.record(SurfaceCommand::SetLineCap(cap))
    }
}
