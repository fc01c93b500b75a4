/// Homogeneous 4x4 building blocks for the camera pipeline.
///
/// All helpers take their arguments in row-major order (the way the matrices
/// are written on paper) and return glam column-major `DMat4`s, so
/// `a * b` applies `b` first to a column vector.

use glam::{DMat4, DVec3, DVec4};

/// Build a matrix from rows.
pub fn from_rows(rows: [[f64; 4]; 4]) -> DMat4 {
    DMat4::from_cols_array_2d(&rows).transpose()
}

/// Rows of a matrix, `rows[r][c]`.
pub fn to_rows(m: &DMat4) -> [[f64; 4]; 4] {
    m.transpose().to_cols_array_2d()
}

/// Rotation applying roll (x) first, then pitch (y), then yaw (z).
pub fn rot_xyz(x: f64, y: f64, z: f64) -> DMat4 {
    let (sx, cx) = x.sin_cos();
    let (sy, cy) = y.sin_cos();
    let (sz, cz) = z.sin_cos();

    from_rows([
        [cy * cz, -cy * sz, sy, 0.0],
        [sx * sy * cz + cx * sz, -sx * sy * sz + cx * cz, -sx * cy, 0.0],
        [-cx * sy * cz + sx * sz, cx * sy * sz + sx * cz, cx * cy, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ])
}

/// Translation by `offset`.
pub fn translate(offset: DVec3) -> DMat4 {
    DMat4::from_translation(offset)
}

/// Axis permutation: row `i0` picks x, row `i1` picks y, row `i2` picks z,
/// row `i3` picks w.
pub fn permute(i0: usize, i1: usize, i2: usize, i3: usize) -> DMat4 {
    let mut rows = [[0.0; 4]; 4];
    rows[i0][0] = 1.0;
    rows[i1][1] = 1.0;
    rows[i2][2] = 1.0;
    rows[i3][3] = 1.0;
    from_rows(rows)
}

/// Diagonal scale.
pub fn scale(x: f64, y: f64, z: f64, w: f64) -> DMat4 {
    DMat4::from_diagonal(DVec4::new(x, y, z, w))
}

/// Camera-space convention: depth along world x, screen right along world y,
/// screen up along world z.
pub fn camera_axes() -> DMat4 {
    permute(2, 0, 1, 3)
}

/// Vertical flip so that world-up maps to a top-left-origin surface.
pub fn vertical_flip() -> DMat4 {
    scale(1.0, -1.0, 1.0, 1.0)
}

/// Model transform of an object: rotate about its origin, then translate.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ObjectPose {
    pub position: DVec3,
    pub rotation: DVec3,
}

impl ObjectPose {
    pub fn new(position: DVec3, rotation: DVec3) -> Self {
        Self { position, rotation }
    }

    /// Pose with a translation only
    pub fn at(position: DVec3) -> Self {
        Self { position, rotation: DVec3::ZERO }
    }

    /// `Tw · Rw`
    pub fn matrix(&self) -> DMat4 {
        translate(self.position) * rot_xyz(self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
