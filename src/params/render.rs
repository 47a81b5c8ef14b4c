//! Rendering and control configuration.

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Thickness of an isoline band in normalized height (blue channel) units
    pub isoline_size: f32,

    /// Background color (linear RGB)
    pub clear_color: [f64; 3],
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            near_plane: 0.1,
            far_plane: 10.0,
            isoline_size: 0.005,
            clear_color: [0.2, 0.2, 0.2],
        }
    }
}

impl RenderConfig {
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height as f32
    }
}

/// Keyboard control speeds
#[derive(Debug, Clone)]
pub struct ControlParams {
    /// Camera rotation speed while an arrow key is held (radians per second)
    pub rotate_speed: f32,

    /// Camera translation speed while a movement key is held (world units per second)
    pub move_speed: f32,
}

impl Default for ControlParams {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            move_speed: 1.0,
        }
    }
}
