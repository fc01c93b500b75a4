/// Primitive records stored in a `DrawList`

/// Kind of a draw list record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    /// Independent segments, 2 vertices each
    Line,
    /// Independent points
    Point,
    /// Closed filled polygon
    Polygon,
    /// Open connected strip
    Polyline,
    /// Colour and width change, `[r, g, b, a, width]`
    Style,
    /// Fill the whole surface with the current colour
    Clear,
}

impl PrimitiveKind {
    /// Number of payload values making one element of this kind.
    ///
    /// A segment for `Line`, a vertex for the other geometric kinds, the
    /// whole record for `Style` and `Clear`.
    pub fn stride(self) -> usize {
        match self {
            PrimitiveKind::Line => 6,
            PrimitiveKind::Point | PrimitiveKind::Polygon | PrimitiveKind::Polyline => 3,
            PrimitiveKind::Style => 5,
            PrimitiveKind::Clear => 0,
        }
    }

    /// Minimum number of elements (see [`stride`](Self::stride)) a record needs.
    pub fn min_elements(self) -> usize {
        match self {
            PrimitiveKind::Line | PrimitiveKind::Point => 1,
            PrimitiveKind::Polygon => 3,
            PrimitiveKind::Polyline => 2,
            PrimitiveKind::Style => 1,
            PrimitiveKind::Clear => 0,
        }
    }

    /// Whether the record carries 3D vertices to project
    pub fn is_geometry(self) -> bool {
        !matches!(self, PrimitiveKind::Style | PrimitiveKind::Clear)
    }
}

/// One record: a kind plus a slice `[offset, offset + len)` of the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub offset: usize,
    pub len: usize,
}

impl Primitive {
    /// Number of 3D vertices in the record (0 for style/clear)
    pub fn vertex_count(&self) -> usize {
        if self.kind.is_geometry() {
            self.len / 3
        } else {
            0
        }
    }
}
