//! Heightfield grid parameters: world rectangle, resolution and isoline bounds.

use crate::error::ConfigError;

/// Largest grid size whose `(n + 1)²` vertex indices fit a `u32`
pub const MAX_GRID_SIZE: u32 = u16::MAX as u32 - 1;

/// Heightfield grid parameters
#[derive(Debug, Clone)]
pub struct PlotParams {
    /// World rectangle, X axis (world units)
    pub start_x: f32,
    pub end_x: f32,

    /// World rectangle, Z axis (world units)
    pub start_z: f32,
    pub end_z: f32,

    /// Grid resolution bounds (cells per side)
    pub min_grid_size: u32,
    pub max_grid_size: u32,

    /// Grid resolution at construction
    pub initial_grid_size: u32,

    /// Isoline count bounds (passed through to the fragment shader)
    pub min_isoline_count: u32,
    pub max_isoline_count: u32,

    /// Isoline count at construction
    pub initial_isoline_count: u32,

    /// Heights are clamped to `[-cut, cut]` before color mapping
    pub height_cut: f32,
}

impl Default for PlotParams {
    fn default() -> Self {
        Self {
            start_x: -1.0,
            end_x: 1.0,
            start_z: -1.0,
            end_z: 1.0,
            min_grid_size: 10,
            max_grid_size: 60,
            initial_grid_size: 20,
            min_isoline_count: 0,
            max_isoline_count: 20,
            initial_isoline_count: 0,
            height_cut: 0.5,
        }
    }
}

impl PlotParams {
    /// Validate configuration (non-empty rectangle, ordered ranges, initial values in range)
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_axis("x", self.start_x, self.end_x)?;
        check_axis("z", self.start_z, self.end_z)?;

        if self.min_grid_size == 0
            || self.min_grid_size > self.max_grid_size
            || self.max_grid_size > MAX_GRID_SIZE
        {
            return Err(ConfigError::InvalidRange {
                name: "grid size",
                min: self.min_grid_size,
                max: self.max_grid_size,
            });
        }
        check_initial(
            "grid size",
            self.initial_grid_size,
            self.min_grid_size,
            self.max_grid_size,
        )?;

        if self.min_isoline_count > self.max_isoline_count {
            return Err(ConfigError::InvalidRange {
                name: "isoline count",
                min: self.min_isoline_count,
                max: self.max_isoline_count,
            });
        }
        check_initial(
            "isoline count",
            self.initial_isoline_count,
            self.min_isoline_count,
            self.max_isoline_count,
        )?;

        if self.height_cut.is_nan() || self.height_cut <= 0.0 {
            return Err(ConfigError::NonPositiveCut(self.height_cut));
        }
        Ok(())
    }
}

fn check_axis(axis: &'static str, start: f32, end: f32) -> Result<(), ConfigError> {
    if start < end {
        Ok(())
    } else {
        Err(ConfigError::EmptyWorldRect { axis, start, end })
    }
}

fn check_initial(name: &'static str, value: u32, min: u32, max: u32) -> Result<(), ConfigError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InitialOutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}
