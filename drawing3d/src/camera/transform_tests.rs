use glam::{DMat4, DVec3, DVec4};
use std::f64::consts::FRAC_PI_2;
use super::*;

const EPS: f64 = 1e-12;

fn apply(m: DMat4, p: DVec3) -> DVec3 {
    (m * p.extend(1.0)).truncate()
}

// ============================================================================
// from_rows / to_rows
// ============================================================================

#[test]
fn test_from_rows_places_translation_in_last_column() {
    let m = from_rows([
        [1.0, 0.0, 0.0, 5.0],
        [0.0, 1.0, 0.0, 6.0],
        [0.0, 0.0, 1.0, 7.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);
    assert_eq!(m, DMat4::from_translation(DVec3::new(5.0, 6.0, 7.0)));
    assert_eq!(to_rows(&m)[1][3], 6.0);
}

// ============================================================================
// rot_xyz
// ============================================================================

#[test]
fn test_rot_xyz_zero_is_identity() {
    assert!(rot_xyz(0.0, 0.0, 0.0).abs_diff_eq(DMat4::IDENTITY, EPS));
}

#[test]
fn test_rot_xyz_yaw_quarter_turn() {
    // Row 0 is (cz, -sz, 0): x' = -y for a +90 degree yaw
    let p = apply(rot_xyz(0.0, 0.0, FRAC_PI_2), DVec3::new(0.0, 1.0, 0.0));
    assert!(p.abs_diff_eq(DVec3::new(-1.0, 0.0, 0.0), EPS));
}

#[test]
fn test_rot_xyz_pitch_quarter_turn() {
    let p = apply(rot_xyz(0.0, FRAC_PI_2, 0.0), DVec3::new(0.0, 0.0, 1.0));
    assert!(p.abs_diff_eq(DVec3::new(1.0, 0.0, 0.0), EPS));
}

#[test]
fn test_rot_xyz_is_orthonormal() {
    let r = rot_xyz(0.3, -1.1, 2.4);
    assert!((r * r.transpose()).abs_diff_eq(DMat4::IDENTITY, 1e-12));
    assert!((r.determinant() - 1.0).abs() < EPS);
}

// ============================================================================
// permute / scale
// ============================================================================

#[test]
fn test_camera_axes_permutation() {
    let p = apply(camera_axes(), DVec3::new(1.0, 2.0, 3.0));
    // depth <- x, right <- y, up <- z
    assert_eq!(p, DVec3::new(2.0, 3.0, 1.0));
}

#[test]
fn test_vertical_flip() {
    let v = vertical_flip() * DVec4::new(1.0, 2.0, 3.0, 1.0);
    assert_eq!(v, DVec4::new(1.0, -2.0, 3.0, 1.0));
}

// ============================================================================
// ObjectPose
// ============================================================================

#[test]
fn test_object_pose_rotates_then_translates() {
    let pose = ObjectPose::new(DVec3::new(10.0, 0.0, 0.0), DVec3::new(0.0, 0.0, FRAC_PI_2));
    let p = apply(pose.matrix(), DVec3::new(0.0, 1.0, 0.0));
    assert!(p.abs_diff_eq(DVec3::new(9.0, 0.0, 0.0), EPS));
}

#[test]
fn test_object_pose_default_is_identity() {
    assert!(ObjectPose::default().matrix().abs_diff_eq(DMat4::IDENTITY, EPS));
    assert_eq!(ObjectPose::at(DVec3::X).rotation, DVec3::ZERO);
}
