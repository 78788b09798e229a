//! Per-frame transforms used by the 3D tutorials.

use std::{f32::consts::PI, time::Duration};

use glam::{Mat4, Vec3};

/// Vertical field of view of every perspective scene, in degrees.
pub const FOV_Y_DEGREES: f32 = 45.0;
/// The perspective aspect ratio is fixed to the initial 800x600 window.
pub const ASPECT: f32 = 800.0 / 600.0;
pub const NEAR: f32 = 1.0;
pub const FAR: f32 = 10.0;

/// Rotation around Z by half a turn per second.
pub fn spin(elapsed: Duration) -> Mat4 {
    Mat4::from_rotation_z(PI * elapsed.as_secs_f32())
}

/// Reflects `model` through the floor plane one unit below it.
pub fn mirror_below(model: Mat4) -> Mat4 {
    model
        * Mat4::from_translation(Vec3::new(0.0, 0.0, -1.0))
        * Mat4::from_scale(Vec3::new(1.0, 1.0, -1.0))
}

/// Right-handed view matrix looking from `eye` at `center`.
pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(eye, center, up)
}

/// The fixed perspective projection.
pub fn projection() -> Mat4 {
    Mat4::perspective_rh_gl(FOV_Y_DEGREES.to_radians(), ASPECT, NEAR, FAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.abs_diff_eq(b, 1e-5)
    }

    #[test]
    fn test_spin_starts_at_identity() {
        assert!(spin(Duration::ZERO).abs_diff_eq(Mat4::IDENTITY, 1e-6));
    }

    #[test]
    fn test_spin_half_turn_per_second() {
        let quarter = spin(Duration::from_millis(500));
        assert!(close(quarter.transform_point3(Vec3::X), Vec3::Y));

        let half = spin(Duration::from_secs(1));
        assert!(close(half.transform_point3(Vec3::X), -Vec3::X));
    }

    #[test]
    fn test_spin_keeps_z() {
        let m = spin(Duration::from_millis(1234));
        assert!(close(m.transform_point3(Vec3::Z), Vec3::Z));
    }

    #[test]
    fn test_mirror_below_flips_through_floor() {
        let m = mirror_below(Mat4::IDENTITY);
        // The cube spans z in [-0.5, 0.5]; the floor sits at z = -0.5.
        assert!(close(m.transform_point3(Vec3::new(0.0, 0.0, 0.5)), Vec3::new(0.0, 0.0, -1.5)));
        assert!(close(m.transform_point3(Vec3::new(0.0, 0.0, -0.5)), Vec3::new(0.0, 0.0, -0.5)));
        assert!(close(m.transform_point3(Vec3::new(0.3, -0.2, 0.0)), Vec3::new(0.3, -0.2, -1.0)));
    }

    #[test]
    fn test_mirror_below_applies_model_last() {
        let model = spin(Duration::from_millis(500));
        let m = mirror_below(model);
        let p = m.transform_point3(Vec3::new(1.0, 0.0, 0.5));
        assert!(close(p, Vec3::new(0.0, 1.0, -1.5)));
    }

    #[test]
    fn test_projection_depth_range() {
        let proj = projection();
        let near = proj.project_point3(Vec3::new(0.0, 0.0, -NEAR));
        let far = proj.project_point3(Vec3::new(0.0, 0.0, -FAR));
        assert!((near.z + 1.0).abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_look_at_maps_eye_to_origin() {
        let eye = Vec3::new(1.2, 1.2, 1.2);
        let view = look_at(eye, Vec3::ZERO, Vec3::Z);
        assert!(close(view.transform_point3(eye), Vec3::ZERO));
        let center = view.transform_point3(Vec3::ZERO);
        assert!(center.z < 0.0);
        assert!(close(Vec3::new(center.x, center.y, 0.0), Vec3::ZERO));
    }
}
