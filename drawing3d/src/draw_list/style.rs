/// Colour and stroke state carried through a draw list

/// Straight (non premultiplied) colour, components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Whether every component is finite
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::BLACK
    }
}

/// Current drawing style: colour plus line width in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub color: Rgba,
    pub width: f64,
}

impl Style {
    /// Opaque black, 1 px
    pub const DEFAULT: Style = Style { color: Rgba::BLACK, width: 1.0 };

    pub fn new(color: Rgba, width: f64) -> Self {
        Self { color, width }
    }

    /// Decode a style payload `[r, g, b, a, width]`.
    ///
    /// Returns `None` when `values` does not hold exactly 5 entries.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        match values {
            [r, g, b, a, width] => Some(Self {
                color: Rgba::new(*r, *g, *b, *a),
                width: *width,
            }),
            _ => None,
        }
    }

    pub fn to_values(&self) -> [f64; 5] {
        [self.color.r, self.color.g, self.color.b, self.color.a, self.width]
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::DEFAULT
    }
}
