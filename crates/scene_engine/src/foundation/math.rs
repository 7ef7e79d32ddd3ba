//! Math utilities and types
//!
//! Fundamental math types for the viewer, re-exported from nalgebra behind
//! short aliases, plus a small extension trait for the matrix constructors
//! the render path needs.

pub use nalgebra::{Matrix3, Matrix4, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Pi / 2
    pub const HALF_PI: f32 = PI * 0.5;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }

    /// Clamp a value between min and max
    pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
        if value < min {
            min
        } else if value > max {
            max
        } else {
            value
        }
    }
}

/// Extension trait for Mat4 with the constructors the render path uses
pub trait Mat4Ext {
    /// Create a rotation matrix around the Y axis
    fn rotation_y(angle: f32) -> Mat4;

    /// Create a perspective projection matrix (OpenGL depth convention)
    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4;

    /// Create a look-at view matrix (right-handed, Y-up)
    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4;
}

impl Mat4Ext for Mat4 {
    fn rotation_y(angle: f32) -> Mat4 {
        Mat4::from_axis_angle(&Vec3::y_axis(), angle)
    }

    fn perspective(fov_y: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
        // nalgebra's constructor already produces the GL clip-space
        // convention (depth mapped to [-1, 1], Y up)
        Mat4::new_perspective(aspect, fov_y, near, far)
    }

    fn look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
        Mat4::look_at_rh(&Point3::from(eye), &Point3::from(target), &up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn look_at_from_positive_z_maps_forward_to_negative_z() {
        let view = Mat4::look_at(
            Vec3::new(0.0, 0.0, 3.0),
            Vec3::zeros(),
            Vec3::new(0.0, 1.0, 0.0),
        );
        // The target sits straight ahead of the camera: view space -Z
        let target_view = view.transform_point(&Point3::new(0.0, 0.0, 0.0));
        assert_relative_eq!(target_view.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(target_view.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(target_view.z, -3.0, epsilon = 1e-6);
    }

    #[test]
    fn perspective_maps_near_plane_to_front_of_clip_space() {
        let proj = Mat4::perspective(utils::deg_to_rad(45.0), 4.0 / 3.0, 0.1, 100.0);
        let near = proj.transform_point(&Point3::new(0.0, 0.0, -0.1));
        let far = proj.transform_point(&Point3::new(0.0, 0.0, -100.0));
        assert_relative_eq!(near.z, -1.0, epsilon = 1e-4);
        assert_relative_eq!(far.z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn rotation_y_quarter_turn_sends_x_to_negative_z() {
        let rot = Mat4::rotation_y(utils::deg_to_rad(90.0));
        let v = rot.transform_vector(&Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(v.z, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn degree_radian_conversions_round_trip() {
        assert_relative_eq!(utils::rad_to_deg(utils::deg_to_rad(45.0)), 45.0, epsilon = 1e-5);
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = 1e-6);
    }

    #[test]
    fn clamp_bounds_values() {
        assert_eq!(utils::clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(utils::clamp(-2.0, 0.0, 1.0), 0.0);
        assert_eq!(utils::clamp(0.5, 0.0, 1.0), 0.5);
    }
}
