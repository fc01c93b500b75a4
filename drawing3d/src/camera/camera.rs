/// Camera — extrinsic pose, orbit offset, intrinsic projection and the
/// composed projection matrix.
///
/// Every parameter mutator recomputes the projection matrix immediately, so
/// `project` always sees a matrix consistent with the current parameters.
/// Recomputation is deterministic: the same parameters always yield the
/// same matrix.

use glam::{DMat4, DVec2, DVec3, DVec4};
use super::transform::{self, ObjectPose};

/// Intrinsic projection model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Pinhole model with horizontal/vertical fields of view (radians)
    Perspective { hfov: f64, vfov: f64 },
    /// Parallel projection, fraction of the viewport per world unit
    Orthographic { scale_x: f64, scale_y: f64 },
}

/// Camera configuration
///
/// Used by [`Camera::from_config`] to build a camera in one step.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraConfig {
    /// Viewport size in pixels (width, height)
    pub viewport: (f64, f64),
    /// Intrinsic model; `None` keeps the identity intrinsic matrix
    pub projection: Option<Projection>,
    pub preserve_ratio: bool,
    pub position: DVec3,
    /// Roll, pitch, yaw in radians
    pub rotation: DVec3,
    /// Orbit distance along the camera forward axis
    pub distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            viewport: (1.0, 1.0),
            projection: None,
            preserve_ratio: true,
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            distance: 0.0,
        }
    }
}

/// Camera state owning its parameters and projection matrix.
#[derive(Debug, Clone)]
pub struct Camera {
    width: f64,
    height: f64,
    // extrinsic
    position: DVec3,
    rotation: DVec3,
    object_pose: ObjectPose,
    distance: f64,
    // intrinsic, homogeneous
    intrinsic: DMat4,
    ratio: f64,
    preserve_ratio: bool,
    projection: DMat4,
    /// Set by `set_projection_matrix`; cleared by the next parameter mutator
    injected: bool,
}

impl Camera {
    /// Create a camera with a 1x1 viewport, identity pose and identity intrinsics.
    pub fn new() -> Self {
        let mut camera = Self {
            width: 1.0,
            height: 1.0,
            position: DVec3::ZERO,
            rotation: DVec3::ZERO,
            object_pose: ObjectPose::default(),
            distance: 0.0,
            intrinsic: DMat4::IDENTITY,
            ratio: 1.0,
            preserve_ratio: true,
            projection: DMat4::IDENTITY,
            injected: false,
        };
        camera.recompute();
        camera
    }

    /// Create a camera from a configuration.
    pub fn from_config(config: &CameraConfig) -> Self {
        let mut camera = Self::new();
        camera.width = config.viewport.0;
        camera.height = config.viewport.1;
        camera.preserve_ratio = config.preserve_ratio;
        camera.position = config.position;
        camera.rotation = config.rotation;
        camera.distance = config.distance;
        match config.projection {
            Some(projection) => camera.set_projection(projection),
            None => camera.recompute(),
        }
        camera
    }

    // ===== GETTERS =====

    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Roll, pitch, yaw in radians.
    pub fn rotation(&self) -> DVec3 {
        self.rotation
    }

    pub fn object_position(&self) -> DVec3 {
        self.object_pose.position
    }

    pub fn object_rotation(&self) -> DVec3 {
        self.object_pose.rotation
    }

    pub fn object_pose(&self) -> ObjectPose {
        self.object_pose
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Viewport (width, height) in pixels.
    pub fn viewport(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn preserve_ratio(&self) -> bool {
        self.preserve_ratio
    }

    /// Target height/width ratio derived from the intrinsic model.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// Unscaled intrinsic matrix.
    pub fn intrinsic_matrix(&self) -> DMat4 {
        self.intrinsic
    }

    /// Current projection matrix (world to homogeneous surface coordinates).
    pub fn projection_matrix(&self) -> DMat4 {
        self.projection
    }

    // ===== EXTRINSIC SETTERS =====

    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.position = DVec3::new(x, y, z);
        self.recompute();
    }

    pub fn add_position(&mut self, x: f64, y: f64, z: f64) {
        self.position += DVec3::new(x, y, z);
        self.recompute();
    }

    /// Move in the horizontal frame of the camera yaw: `x` forward, `y`
    /// sideways, `z` straight up.
    pub fn move_relative(&mut self, x: f64, y: f64, z: f64) {
        let (sz, cz) = self.rotation.z.sin_cos();
        self.position += DVec3::new(x * cz + y * sz, -x * sz + y * cz, z);
        self.recompute();
    }

    pub fn set_rotation(&mut self, x: f64, y: f64, z: f64) {
        self.rotation = DVec3::new(x, y, z);
        self.recompute();
    }

    pub fn add_rotation(&mut self, x: f64, y: f64, z: f64) {
        self.rotation += DVec3::new(x, y, z);
        self.recompute();
    }

    pub fn set_object_position(&mut self, x: f64, y: f64, z: f64) {
        self.object_pose.position = DVec3::new(x, y, z);
        self.recompute();
    }

    pub fn add_object_position(&mut self, x: f64, y: f64, z: f64) {
        self.object_pose.position += DVec3::new(x, y, z);
        self.recompute();
    }

    pub fn set_object_rotation(&mut self, x: f64, y: f64, z: f64) {
        self.object_pose.rotation = DVec3::new(x, y, z);
        self.recompute();
    }

    pub fn add_object_rotation(&mut self, x: f64, y: f64, z: f64) {
        self.object_pose.rotation += DVec3::new(x, y, z);
        self.recompute();
    }

    pub fn set_object_pose(&mut self, pose: ObjectPose) {
        self.object_pose = pose;
        self.recompute();
    }

    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
        self.recompute();
    }

    pub fn add_distance(&mut self, distance: f64) {
        self.distance += distance;
        self.recompute();
    }

    // ===== INTRINSIC SETTERS =====

    pub fn set_viewport(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.recompute();
    }

    pub fn set_preserve_ratio(&mut self, preserve_ratio: bool) {
        self.preserve_ratio = preserve_ratio;
        self.recompute();
    }

    /// Pinhole intrinsics from horizontal and vertical fields of view (radians).
    pub fn set_perspective(&mut self, hfov: f64, vfov: f64) {
        let fx = 0.5 / (hfov / 2.0).tan();
        let fy = 0.5 / (vfov / 2.0).tan();
        let mut rows = [[0.0; 4]; 4];
        rows[0][0] = fx;
        rows[1][1] = fy;
        rows[0][2] = 0.5;
        rows[1][2] = 0.5;
        rows[2][2] = 1.0;
        rows[3][2] = 1.0;
        self.intrinsic = transform::from_rows(rows);
        self.ratio = fy / fx;
        self.recompute();
    }

    /// Parallel intrinsics; `scale_x`/`scale_y` are viewport fractions per world unit.
    pub fn set_orthographic(&mut self, scale_x: f64, scale_y: f64) {
        let mut rows = [[0.0; 4]; 4];
        rows[0][0] = scale_x;
        rows[1][1] = scale_y;
        rows[2][2] = 1.0;
        rows[3][3] = 1.0;
        rows[0][3] = 0.5;
        rows[1][3] = 0.5;
        self.intrinsic = transform::from_rows(rows);
        self.ratio = scale_y / scale_x;
        self.recompute();
    }

    pub fn set_projection(&mut self, projection: Projection) {
        match projection {
            Projection::Perspective { hfov, vfov } => self.set_perspective(hfov, vfov),
            Projection::Orthographic { scale_x, scale_y } => self.set_orthographic(scale_x, scale_y),
        }
    }

    /// Inject a precomputed projection matrix.
    ///
    /// The matrix is used by [`project`](Self::project) until the next
    /// parameter mutator or [`update`](Self::update) recomposes it; rendering
    /// always recomposes.
    pub fn set_projection_matrix(&mut self, matrix: DMat4) {
        self.projection = matrix;
        self.injected = true;
    }

    /// Whether the current matrix was injected rather than composed.
    pub fn has_injected_projection(&self) -> bool {
        self.injected
    }

    // ===== COMPOSITION =====

    /// Recompose the projection matrix from the current parameters,
    /// discarding any injected matrix.
    pub fn update(&mut self) {
        self.recompute();
    }

    /// Projection matrix for the current parameters with `pose` in place of
    /// the stored object pose. The camera itself is not modified.
    pub fn projection_matrix_with(&self, pose: &ObjectPose) -> DMat4 {
        self.compose(pose)
    }

    /// Project a world point. Returns the surface point and whether it lies
    /// in front of the camera (`w > 0`); the point is meaningless when hidden.
    pub fn project(&self, p: DVec3) -> (DVec2, bool) {
        project_with(&self.projection, p)
    }

    fn recompute(&mut self) {
        self.injected = false;
        self.projection = self.compose(&self.object_pose);
    }

    /// `Mi_scaled · S · P · Ts · R · T · Tw · Rw`
    fn compose(&self, pose: &ObjectPose) -> DMat4 {
        let rotation = transform::rot_xyz(self.rotation.x, self.rotation.y, self.rotation.z);
        let extrinsic = rotation * transform::translate(-self.position);
        let orbit = transform::translate(DVec3::new(self.distance, 0.0, 0.0));
        let view = transform::vertical_flip() * transform::camera_axes() * orbit * extrinsic * pose.matrix();

        self.scaled_intrinsic() * view
    }

    fn scaled_intrinsic(&self) -> DMat4 {
        let mut width = self.width;
        let mut height = self.height;
        if self.preserve_ratio {
            if self.height / self.width < self.ratio {
                width = self.height / self.ratio;
            } else {
                height = self.width * self.ratio;
            }
        }

        let mut rows = transform::to_rows(&self.intrinsic);
        rows[0][0] *= width;
        rows[1][1] *= height;
        rows[0][2] *= self.width;
        rows[1][2] *= self.height;
        rows[0][3] *= self.width;
        rows[1][3] *= self.height;
        transform::from_rows(rows)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

/// Project `p` through an arbitrary matrix with the same visibility rule as
/// [`Camera::project`].
pub fn project_with(matrix: &DMat4, p: DVec3) -> (DVec2, bool) {
    let q: DVec4 = *matrix * p.extend(1.0);
    (DVec2::new(q.x / q.w, q.y / q.w), q.w > 0.0)
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
