//! Orbit camera: yaw/pitch around the plot plus a free translation.

use glam::{Mat4, Vec2, Vec3};

use crate::params::RenderConfig;

/// Camera state driven by held keys
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    /// Rotation in the XZ plane (`x`) and the YZ plane (`y`), radians
    pub angle: Vec2,

    /// Eye offset subtracted after rotation (world units)
    pub shift: Vec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            angle: Vec2::new(-0.4, 0.4),
            shift: Vec3::new(0.0, 0.2, 2.7),
        }
    }
}

impl OrbitCamera {
    /// World-to-view transform: spin around Y, tilt around X, then step back by `shift`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(-self.shift)
            * Mat4::from_rotation_x(self.angle.y)
            * Mat4::from_rotation_y(-self.angle.x)
    }

    /// Perspective with a 90° horizontal field of view (vertical FOV follows the aspect ratio)
    pub fn projection_matrix(aspect: f32, render_config: &RenderConfig) -> Mat4 {
        let fov_y = 2.0 * (1.0 / aspect).atan();
        Mat4::perspective_rh(
            fov_y,
            aspect,
            render_config.near_plane,
            render_config.far_plane,
        )
    }

    /// Create view-projection matrix for rendering
    pub fn view_proj(&self, aspect: f32, render_config: &RenderConfig) -> Mat4 {
        Self::projection_matrix(aspect, render_config) * self.view_matrix()
    }
}
