//! 4x4 transform builders
//!
//! All matrices are column-major `Mat4` values meant to multiply column
//! vectors, so `translation(..) * rotation_y(..) * scale(..)` scales first and
//! translates last. Entry `(c, r)` below means column `c`, component `r`.

use crate::core::types::{Mat4, Vec3, Vec4};

/// Right-handed perspective projection with depth mapped to [0, 1].
///
/// `(0,0) = cot(fov/2) / aspect`, `(1,1) = cot(fov/2)`,
/// `(2,2) = far / (near - far)`, `(3,2) = far * near / (near - far)` and
/// `(2,3) = -1` so the w component carries the view-space depth.
pub fn perspective_rh(fov_y_radians: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y_radians, aspect, near, far)
}

/// Right-handed look-at view matrix.
///
/// The basis rows are (right, up, -forward) and the translation column holds
/// the negated dot products of that basis with `eye`.
pub fn look_at_rh(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, target, up)
}

pub fn translation(tx: f32, ty: f32, tz: f32) -> Mat4 {
    Mat4::from_translation(Vec3::new(tx, ty, tz))
}

/// Rotation about +Y; positive angles turn +X towards -Z.
pub fn rotation_y(angle_radians: f32) -> Mat4 {
    Mat4::from_rotation_y(angle_radians)
}

pub fn scale(sx: f32, sy: f32, sz: f32) -> Mat4 {
    Mat4::from_diagonal(Vec4::new(sx, sy, sz, 1.0))
}

/// Standard prop placement: scale, then spin about Y, then move to `position`.
pub fn placement(position: Vec3, yaw: f32, size: Vec3) -> Mat4 {
    translation(position.x, position.y, position.z)
        * rotation_y(yaw)
        * scale(size.x, size.y, size.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    const EPS: f32 = 1e-5;

    #[test]
    fn test_perspective_entries() {
        let proj = perspective_rh(PI / 2.0, 1.0, 0.1, 100.0);
        // cot(pi/4) = 1
        assert!((proj.col(0)[0] - 1.0).abs() < EPS);
        assert!((proj.col(1)[1] - 1.0).abs() < EPS);
        assert!((proj.col(2)[2] - (-100.0 / 99.9)).abs() < EPS);
        assert!((proj.col(3)[2] - (-10.0 / 99.9)).abs() < EPS);
        assert_eq!(proj.col(2)[3], -1.0);
        assert_eq!(proj.col(3)[3], 0.0);
    }

    #[test]
    fn test_perspective_aspect() {
        let proj = perspective_rh(PI / 2.0, 2.0, 0.1, 100.0);
        assert!((proj.col(0)[0] - 0.5).abs() < EPS);
        assert!((proj.col(1)[1] - 1.0).abs() < EPS);
    }

    #[test]
    fn test_look_at_translation() {
        let view = look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
        assert!((view.col(3)[2] - (-5.0)).abs() < EPS);

        // The eye lands on the view-space origin
        let eye = view.transform_point3(Vec3::new(0.0, 0.0, 5.0));
        assert!(eye.length() < EPS);

        // The target sits straight ahead, down -Z
        let target = view.transform_point3(Vec3::ZERO);
        assert!((target - Vec3::new(0.0, 0.0, -5.0)).length() < EPS);
    }

    #[test]
    fn test_look_at_basis_is_orthonormal() {
        let view = look_at_rh(Vec3::new(3.0, 2.0, -1.0), Vec3::new(-4.0, 0.5, 6.0), Vec3::Y);
        let r0 = view.row(0).truncate();
        let r1 = view.row(1).truncate();
        let r2 = view.row(2).truncate();
        assert!((r0.length() - 1.0).abs() < EPS);
        assert!((r1.length() - 1.0).abs() < EPS);
        assert!((r2.length() - 1.0).abs() < EPS);
        assert!(r0.dot(r1).abs() < EPS);
        assert!(r1.dot(r2).abs() < EPS);
    }

    #[test]
    fn test_translation() {
        let m = translation(1.0, 2.0, 3.0);
        assert_eq!(m.col(3), Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(m.transform_point3(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0));
        // Directions are unaffected
        assert_eq!(m.transform_vector3(Vec3::X), Vec3::X);
    }

    #[test]
    fn test_scale_is_diagonal() {
        let m = scale(2.0, 3.0, 4.0);
        let expected = [
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 3.0, 0.0, 0.0],
            [0.0, 0.0, 4.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ];
        assert_eq!(m.to_cols_array_2d(), expected);
    }

    #[test]
    fn test_rotation_y() {
        let m = rotation_y(FRAC_PI_2);
        let x = m.transform_vector3(Vec3::X);
        assert!((x - Vec3::new(0.0, 0.0, -1.0)).length() < EPS);

        let c = FRAC_PI_2.cos();
        let s = FRAC_PI_2.sin();
        assert!((m.col(0)[2] - (-s)).abs() < EPS);
        assert!((m.col(2)[0] - s).abs() < EPS);
        assert!((m.col(0)[0] - c).abs() < EPS);
        assert_eq!(m.col(1), Vec4::Y);
    }

    #[test]
    fn test_placement_order() {
        // Scale before translate: the unit X point ends up 2 units out, then shifted
        let m = placement(Vec3::new(10.0, 0.0, 0.0), 0.0, Vec3::splat(2.0));
        let p = m.transform_point3(Vec3::X);
        assert!((p - Vec3::new(12.0, 0.0, 0.0)).length() < EPS);
        assert_eq!(m, translation(10.0, 0.0, 0.0) * scale(2.0, 2.0, 2.0));
    }
}
