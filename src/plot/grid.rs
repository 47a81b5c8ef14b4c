//! Resizable regular grid with per-tick noise heights.
//!
//! Vertex attributes are kept as parallel arrays (x, y, z, color) so the
//! renderer can re-upload only what changed: x/z and the index buffer after a
//! resolution change, y and color every tick.

use log::debug;

use super::{height_to_channel, Color};
use crate::noise::GradientNoise;
use crate::params::{NoiseParams, PlotParams};

/// Heightfield grid over a fixed world rectangle
pub struct HeightfieldPlot {
    params: PlotParams,
    noise: GradientNoise,
    evolution_eps: f32,
    grid_size: u32,
    isoline_count: u32,
    /// Pending re-upload of x/z and indices (`true` for the first upload)
    xz_changed: bool,
    vertices_x: Vec<f32>,
    vertices_y: Vec<f32>,
    vertices_z: Vec<f32>,
    vertices_color: Vec<Color>,
    vertex_indices: Vec<u32>,
}

impl Default for HeightfieldPlot {
    fn default() -> Self {
        Self::new(PlotParams::default(), NoiseParams::default())
    }
}

impl HeightfieldPlot {
    /// Create the plot and lay out its initial grid
    ///
    /// Parameters are expected to have passed `validate()`.
    pub fn new(params: PlotParams, noise_params: NoiseParams) -> Self {
        let mut plot = Self {
            grid_size: params.initial_grid_size,
            isoline_count: params.initial_isoline_count,
            params,
            noise: GradientNoise::from_params(&noise_params),
            evolution_eps: noise_params.evolution_eps,
            xz_changed: true,
            vertices_x: Vec::new(),
            vertices_y: Vec::new(),
            vertices_z: Vec::new(),
            vertices_color: Vec::new(),
            vertex_indices: Vec::new(),
        };
        plot.static_update();
        plot.indices_update();
        plot
    }

    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    pub fn isoline_count(&self) -> u32 {
        self.isoline_count
    }

    pub fn params(&self) -> &PlotParams {
        &self.params
    }

    pub fn noise(&self) -> &GradientNoise {
        &self.noise
    }

    pub fn vertices_x(&self) -> &[f32] {
        &self.vertices_x
    }

    pub fn vertices_y(&self) -> &[f32] {
        &self.vertices_y
    }

    pub fn vertices_z(&self) -> &[f32] {
        &self.vertices_z
    }

    pub fn vertices_color(&self) -> &[Color] {
        &self.vertices_color
    }

    pub fn vertex_indices(&self) -> &[u32] {
        &self.vertex_indices
    }

    /// Vertex count for the current resolution: `(grid_size + 1)²`
    pub fn vertex_count(&self) -> usize {
        let side = self.grid_size as usize + 1;
        side * side
    }

    /// Row-major offset of grid vertex `(w, h)`
    pub fn index_of(&self, w: u32, h: u32) -> u32 {
        w * (self.grid_size + 1) + h
    }

    /// Report whether x/z and indices changed since the last call, clearing the flag
    pub fn is_xz_changed_with_reset(&mut self) -> bool {
        std::mem::replace(&mut self.xz_changed, false)
    }

    /// Increase `grid_size` by one (no-op at the maximum)
    pub fn improve_grid(&mut self) {
        if self.grid_size < self.params.max_grid_size {
            self.resize(self.grid_size + 1);
        }
    }

    /// Decrease `grid_size` by one (no-op at the minimum)
    pub fn degrade_grid(&mut self) {
        if self.grid_size > self.params.min_grid_size {
            self.resize(self.grid_size - 1);
        }
    }

    /// Increase `isoline_count` by one (no-op at the maximum)
    pub fn increase_isoline_count(&mut self) {
        if self.isoline_count < self.params.max_isoline_count {
            self.isoline_count += 1;
            debug!("isoline count: {}", self.isoline_count);
        }
    }

    /// Decrease `isoline_count` by one (no-op at the minimum)
    pub fn decrease_isoline_count(&mut self) {
        if self.isoline_count > self.params.min_isoline_count {
            self.isoline_count -= 1;
            debug!("isoline count: {}", self.isoline_count);
        }
    }

    /// Per-tick update: evolve the lattice (unless frozen), then recompute
    /// every vertex height and color
    pub fn dynamic_update(&mut self, freeze_time: bool) {
        if !freeze_time {
            self.noise.update_angles(self.evolution_eps);
        }

        let count = self.vertex_count();
        self.vertices_y.resize(count, 0.0);
        self.vertices_color.resize(count, Color::default());

        for i in 0..count {
            let (nx, nz) = self.to_noise_domain(self.vertices_x[i], self.vertices_z[i]);
            let y = self.noise.compute_noise(nx, nz);

            self.vertices_y[i] = y;
            self.vertices_color[i] =
                Color::from_channel(height_to_channel(y, self.params.height_cut));
        }
    }

    /// Map `[start, end]` world coordinates onto `[0, tile_size]` noise coordinates
    ///
    /// Untiled noise (tile size 0) gets a one-cell extent instead of collapsing to a point.
    fn to_noise_domain(&self, x: f32, z: f32) -> (f32, f32) {
        let p = &self.params;
        let extent = self.noise.tile_size().max(1) as f32;
        (
            (x - p.start_x) / (p.end_x - p.start_x) * extent,
            (z - p.start_z) / (p.end_z - p.start_z) * extent,
        )
    }

    fn resize(&mut self, grid_size: u32) {
        self.grid_size = grid_size;
        self.static_update();
        self.indices_update();
        self.xz_changed = true;
        debug!(
            "grid size: {} ({} vertices, {} indices)",
            grid_size,
            self.vertex_count(),
            self.vertex_indices.len()
        );
    }

    /// Recompute world x/z for every grid vertex
    fn static_update(&mut self) {
        let count = self.vertex_count();
        self.vertices_x.resize(count, 0.0);
        self.vertices_z.resize(count, 0.0);

        let p = &self.params;
        let n = self.grid_size as f32;
        for w in 0..=self.grid_size {
            let x = p.start_x + w as f32 * (p.end_x - p.start_x) / n;
            for h in 0..=self.grid_size {
                let z = p.start_z + h as f32 * (p.end_z - p.start_z) / n;
                let i = (w * (self.grid_size + 1) + h) as usize;
                self.vertices_x[i] = x;
                self.vertices_z[i] = z;
            }
        }
    }

    /// Rebuild the triangle list: two triangles per cell, same winding everywhere
    fn indices_update(&mut self) {
        self.vertex_indices.clear();
        self.vertex_indices
            .reserve(self.grid_size as usize * self.grid_size as usize * 6);

        for w in 0..self.grid_size {
            for h in 0..self.grid_size {
                let bottom_left = self.index_of(w, h);
                let bottom_right = self.index_of(w + 1, h);
                let top_left = self.index_of(w, h + 1);
                let top_right = self.index_of(w + 1, h + 1);

                self.vertex_indices.extend_from_slice(&[
                    bottom_left,
                    bottom_right,
                    top_left,
                    top_left,
                    bottom_right,
                    top_right,
                ]);
            }
        }
    }
}
