/// DrawList — ordered primitive records over a flat `f64` payload.
///
/// Records and payload grow independently (amortized doubling through
/// `Vec`). Storage may move when it grows; callers only ever hold record
/// indices, which stay valid until `reset` or `restore` truncates past them.

use glam::DVec3;
use crate::error::{Error, Result};
use crate::draw_bail;
use super::primitive::{Primitive, PrimitiveKind};
use super::style::Style;

const SOURCE: &str = "drawing3d::DrawList";

/// Saved lengths used by [`DrawList::restore`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Watermark {
    pub records: usize,
    pub values: usize,
}

/// Append-only buffer of primitives with a one-level watermark.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    records: Vec<Primitive>,
    payload: Vec<f64>,
    mark: Watermark,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list with room for `records` records and `values` payload values.
    pub fn with_capacity(records: usize, values: usize) -> Self {
        Self {
            records: Vec::with_capacity(records),
            payload: Vec::with_capacity(values),
            mark: Watermark::default(),
        }
    }

    // ===== QUERIES =====

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of payload values
    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    /// Current watermark (zero until the first `save`)
    pub fn watermark(&self) -> Watermark {
        self.mark
    }

    /// Record at `index`
    pub fn primitive(&self, index: usize) -> Result<Primitive> {
        match self.records.get(index) {
            Some(primitive) => Ok(*primitive),
            None => {
                draw_bail!(SOURCE, Error::OutOfRange,
                    "record index {} out of range (len = {})", index, self.records.len());
            }
        }
    }

    /// Payload of the record at `index`
    pub fn values(&self, index: usize) -> Result<&[f64]> {
        let primitive = self.primitive(index)?;
        Ok(&self.payload[primitive.offset..primitive.offset + primitive.len])
    }

    /// Iterate records in order together with their payload
    pub fn iter(&self) -> impl Iterator<Item = (Primitive, &[f64])> + '_ {
        self.records
            .iter()
            .map(move |p| (*p, &self.payload[p.offset..p.offset + p.len]))
    }

    // ===== LIFECYCLE =====

    /// Drop every record and the watermark. Capacity is kept.
    pub fn reset(&mut self) {
        self.records.clear();
        self.payload.clear();
        self.mark = Watermark::default();
    }

    /// Remember the current lengths. A second call overwrites the first.
    pub fn save(&mut self) {
        self.mark = Watermark {
            records: self.records.len(),
            values: self.payload.len(),
        };
    }

    /// Truncate back to the saved lengths (empty if nothing was saved).
    ///
    /// The watermark is kept, so `restore` can be repeated each frame.
    pub fn restore(&mut self) {
        self.records.truncate(self.mark.records);
        self.payload.truncate(self.mark.values);
    }

    /// Grow storage ahead of a batch of `records` records and `values` values.
    pub fn reserve(&mut self, records: usize, values: usize) {
        self.records.reserve(records);
        self.payload.reserve(values);
    }

    // ===== APPEND =====

    /// Independent points (at least one). Returns the record index.
    pub fn append_points(&mut self, points: &[DVec3]) -> Result<usize> {
        Self::check_count(PrimitiveKind::Point, points.len())?;
        Ok(self.push_vertices(PrimitiveKind::Point, points.iter().copied()))
    }

    pub fn append_point(&mut self, point: DVec3) -> Result<usize> {
        self.append_points(&[point])
    }

    /// Independent segments (at least one).
    pub fn append_lines(&mut self, lines: &[[DVec3; 2]]) -> Result<usize> {
        Self::check_count(PrimitiveKind::Line, lines.len())?;
        Ok(self.push_vertices(PrimitiveKind::Line, lines.iter().flatten().copied()))
    }

    pub fn append_line(&mut self, a: DVec3, b: DVec3) -> Result<usize> {
        self.append_lines(&[[a, b]])
    }

    /// Closed polygon (at least three vertices).
    pub fn append_polygon(&mut self, points: &[DVec3]) -> Result<usize> {
        Self::check_count(PrimitiveKind::Polygon, points.len())?;
        Ok(self.push_vertices(PrimitiveKind::Polygon, points.iter().copied()))
    }

    /// Open strip (at least two vertices).
    pub fn append_polyline(&mut self, points: &[DVec3]) -> Result<usize> {
        Self::check_count(PrimitiveKind::Polyline, points.len())?;
        Ok(self.push_vertices(PrimitiveKind::Polyline, points.iter().copied()))
    }

    /// Style change for every following record.
    pub fn append_style(&mut self, r: f64, g: f64, b: f64, a: f64, width: f64) -> usize {
        self.push(PrimitiveKind::Style, &[r, g, b, a, width])
    }

    /// Same as [`append_style`](Self::append_style) from a `Style` value.
    pub fn append_style_value(&mut self, style: &Style) -> usize {
        self.push(PrimitiveKind::Style, &style.to_values())
    }

    /// Full-surface fill with the current colour.
    pub fn append_clear(&mut self) -> usize {
        self.push(PrimitiveKind::Clear, &[])
    }

    /// Append a pre-flattened payload of the given kind.
    ///
    /// The length must be a multiple of the kind's stride and hold at least
    /// the kind's minimum element count; `Style` takes exactly 5 values and
    /// `Clear` none.
    pub fn append_flat(&mut self, kind: PrimitiveKind, values: &[f64]) -> Result<usize> {
        match kind {
            PrimitiveKind::Clear => {
                if !values.is_empty() {
                    draw_bail!(SOURCE, Error::InvalidArgument,
                        "clear record takes no values, got {}", values.len());
                }
            }
            PrimitiveKind::Style => {
                if values.len() != kind.stride() {
                    draw_bail!(SOURCE, Error::InvalidArgument,
                        "style record takes exactly 5 values, got {}", values.len());
                }
            }
            _ => {
                let stride = kind.stride();
                if values.len() % stride != 0 {
                    draw_bail!(SOURCE, Error::InvalidArgument,
                        "{:?} payload of {} values is not a multiple of {}",
                        kind, values.len(), stride);
                }
                Self::check_count(kind, values.len() / stride)?;
            }
        }
        Ok(self.push(kind, values))
    }

    // ===== INTERNAL =====

    fn check_count(kind: PrimitiveKind, count: usize) -> Result<()> {
        let min = kind.min_elements();
        if count < min {
            let unit = if kind == PrimitiveKind::Line { "segment" } else { "vertex" };
            draw_bail!(SOURCE, Error::InvalidArgument,
                "{:?} needs at least {} {}(s), got {}", kind, min, unit, count);
        }
        Ok(())
    }

    fn push_vertices(&mut self, kind: PrimitiveKind, vertices: impl Iterator<Item = DVec3>) -> usize {
        let offset = self.payload.len();
        for v in vertices {
            self.payload.extend_from_slice(&[v.x, v.y, v.z]);
        }
        self.push_record(kind, offset)
    }

    fn push(&mut self, kind: PrimitiveKind, values: &[f64]) -> usize {
        let offset = self.payload.len();
        self.payload.extend_from_slice(values);
        self.push_record(kind, offset)
    }

    fn push_record(&mut self, kind: PrimitiveKind, offset: usize) -> usize {
        let index = self.records.len();
        self.records.push(Primitive {
            kind,
            offset,
            len: self.payload.len() - offset,
        });
        index
    }
}

#[cfg(test)]
#[path = "draw_list_tests.rs"]
mod tests;
