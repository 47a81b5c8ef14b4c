//! Tileable, animatable 2D gradient noise.
//!
//! Gradients live on an integer lattice as angles. Each lattice angle is drawn
//! from the engine's own RNG the first time a query touches it and afterwards
//! only moves through [`GradientNoise::update_angles`], so evolving the lattice
//! deforms the surface continuously instead of re-rolling it.
//!
//! With tiling enabled both the query point and the lattice keys wrap, which
//! makes the surface periodic and continuous across the tile seam.

use std::collections::HashMap;
use std::f32::consts::{SQRT_2, TAU};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::params::{NoiseParams, MAX_OCTAVES};

/// Integer lattice coordinate
pub type LatticePoint = (i32, i32);

/// Multi-octave gradient noise over a lazily populated angle lattice
pub struct GradientNoise {
    tile_size: u32,
    octave_count: u32,
    angles: HashMap<LatticePoint, f32>,
    rng: StdRng,
}

impl GradientNoise {
    /// Create a noise engine with an OS-seeded gradient generator
    pub fn new(tile_size: u32, octave_count: u32) -> Self {
        Self::with_rng(tile_size, octave_count, StdRng::from_os_rng())
    }

    /// Create a noise engine whose lattice is reproducible from `seed`
    pub fn with_seed(tile_size: u32, octave_count: u32, seed: u64) -> Self {
        Self::with_rng(tile_size, octave_count, StdRng::seed_from_u64(seed))
    }

    /// Create a noise engine from (validated) parameters
    pub fn from_params(params: &NoiseParams) -> Self {
        match params.seed {
            Some(seed) => Self::with_seed(params.tile_size, params.octave_count, seed),
            None => Self::new(params.tile_size, params.octave_count),
        }
    }

    fn with_rng(tile_size: u32, octave_count: u32, rng: StdRng) -> Self {
        Self {
            tile_size,
            // Zero octaves would divide by zero, more than MAX_OCTAVES overflow the frequency
            octave_count: octave_count.clamp(1, MAX_OCTAVES),
            angles: HashMap::new(),
            rng,
        }
    }

    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    pub fn octave_count(&self) -> u32 {
        self.octave_count
    }

    /// Number of materialized lattice gradients
    pub fn lattice_len(&self) -> usize {
        self.angles.len()
    }

    /// Materialized lattice gradients as `(point, angle)` pairs, in no particular order
    pub fn angles(&self) -> impl Iterator<Item = (LatticePoint, f32)> + '_ {
        self.angles.iter().map(|(&point, &angle)| (point, angle))
    }

    /// Sample normalized multi-octave noise at `(x, y)`
    ///
    /// Octave `o` samples at `2^o` times the input frequency with `1 / 2^o`
    /// amplitude; the sum is divided by the amplitude total `2 - 2^(1 - octaves)`.
    /// Output stays within roughly `[-1, 1]`.
    ///
    /// Touching a new lattice cell materializes its gradients, hence `&mut self`.
    pub fn compute_noise(&mut self, x: f32, y: f32) -> f32 {
        let mut result = 0.0;
        for octave in 0..self.octave_count {
            let scale = 1u32 << octave;
            let frequency = scale as f32;
            let mut px = x * frequency;
            let mut py = y * frequency;

            let period = if self.tile_size != 0 {
                let period = self.tile_size.saturating_mul(scale).min(i32::MAX as u32);
                px = px.rem_euclid(period as f32);
                py = py.rem_euclid(period as f32);
                Some(period as i32)
            } else {
                None
            };

            result += self.plain_noise(px, py, period) / frequency;
        }
        result / (2.0 - 2f32.powi(1 - self.octave_count as i32))
    }

    /// Advance every materialized gradient angle by `eps * (|sin x * sin y| + 1)`
    ///
    /// The lattice is not grown: only angles that already exist move, and each
    /// stays within `[0, 2π)`.
    pub fn update_angles(&mut self, eps: f32) {
        for (&(x, y), angle) in self.angles.iter_mut() {
            let speed = ((x as f64).sin() * (y as f64).sin()).abs() as f32 + 1.0;
            *angle = wrap_angle(*angle + eps * speed);
        }
    }

    /// Single-octave noise at `(px, py)`, scaled by √2 to span about `[-1, 1]`
    fn plain_noise(&mut self, px: f32, py: f32, period: Option<i32>) -> f32 {
        let x0 = px.floor();
        let y0 = py.floor();
        let (fx, fy) = (px - x0, py - y0);
        // Saturates far from the origin; the lattice then wraps at i32 bounds
        let (xi, yi) = (x0 as i32, y0 as i32);
        let (xj, yj) = (xi.wrapping_add(1), yi.wrapping_add(1));

        let d00 = self.corner_dot((xi, yi), fx, fy, period);
        let d01 = self.corner_dot((xi, yj), fx, fy - 1.0, period);
        let d10 = self.corner_dot((xj, yi), fx - 1.0, fy, period);
        let d11 = self.corner_dot((xj, yj), fx - 1.0, fy - 1.0, period);

        let sy = fade(fy);
        let left = lerp(sy, d00, d01);
        let right = lerp(sy, d10, d11);

        lerp(fade(fx), left, right) * SQRT_2
    }

    /// Dot product of the gradient at `corner` with the offset `(dx, dy)` from it
    fn corner_dot(&mut self, corner: LatticePoint, dx: f32, dy: f32, period: Option<i32>) -> f32 {
        let key = match period {
            Some(p) => (corner.0.rem_euclid(p), corner.1.rem_euclid(p)),
            None => corner,
        };
        let (sin, cos) = self.angle_at(key).sin_cos();
        cos * dx + sin * dy
    }

    fn angle_at(&mut self, point: LatticePoint) -> f32 {
        let rng = &mut self.rng;
        *self
            .angles
            .entry(point)
            .or_insert_with(|| rng.random_range(0.0..TAU))
    }
}

/// Cubic smoothstep `3t² - 2t³`
#[inline]
fn fade(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

/// Wrap into `[0, 2π)`
#[inline]
fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid of a tiny negative value can round up to exactly 2π
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> impl Iterator<Item = (f32, f32)> {
        (0..30).flat_map(|i| (0..30).map(move |j| (i as f32 * 0.1 + 0.013, j as f32 * 0.1 + 0.007)))
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade(0.0), 0.0);
        assert_eq!(fade(1.0), 1.0);
        assert_eq!(fade(0.5), 0.5);
    }

    #[test]
    fn test_lattice_is_lazy_and_persistent() {
        let mut noise = GradientNoise::with_seed(0, 1, 7);
        assert_eq!(noise.lattice_len(), 0);

        let first = noise.compute_noise(0.5, 0.5);
        assert_eq!(noise.lattice_len(), 4);

        // Same cell: no new entries, same value
        let second = noise.compute_noise(0.5, 0.5);
        assert_eq!(noise.lattice_len(), 4);
        assert_eq!(first.to_bits(), second.to_bits());

        // Neighbouring cell shares an edge (2 new corners)
        noise.compute_noise(1.5, 0.5);
        assert_eq!(noise.lattice_len(), 6);
    }

    #[test]
    fn test_lattice_point_value_is_zero() {
        let mut noise = GradientNoise::with_seed(0, 1, 3);
        assert!(noise.compute_noise(2.0, -5.0).abs() < 1e-6);
    }

    #[test]
    fn test_determinism_with_seed() {
        let mut a = GradientNoise::with_seed(3, 4, 42);
        let mut b = GradientNoise::with_seed(3, 4, 42);

        for _ in 0..3 {
            for (x, y) in sample_points() {
                assert_eq!(a.compute_noise(x, y).to_bits(), b.compute_noise(x, y).to_bits());
            }
            a.update_angles(0.05);
            b.update_angles(0.05);
        }
    }

    #[test]
    fn test_periodicity() {
        for octaves in [1, 4] {
            let mut noise = GradientNoise::with_seed(3, octaves, 11);
            for (x, y) in sample_points() {
                let base = noise.compute_noise(x, y);
                let shifted_x = noise.compute_noise(x + 3.0, y);
                let shifted_y = noise.compute_noise(x, y + 3.0);
                assert!((base - shifted_x).abs() < 1e-4, "x period broken at ({x}, {y})");
                assert!((base - shifted_y).abs() < 1e-4, "y period broken at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_continuous_across_tile_seam() {
        let mut noise = GradientNoise::with_seed(3, 1, 5);
        let delta = 1e-4;
        for j in 0..30 {
            let y = j as f32 * 0.1 + 0.05;
            let inside = noise.compute_noise(delta, y);
            let across = noise.compute_noise(-delta, y);
            assert!((inside - across).abs() < 1e-2, "seam at y = {y}");
        }
    }

    #[test]
    fn test_tiled_lattice_keys_stay_in_period() {
        let mut noise = GradientNoise::with_seed(3, 2, 9);
        for (x, y) in sample_points() {
            noise.compute_noise(x - 10.0, y + 25.0);
        }
        // Highest octave period is 3 * 2
        for ((x, y), _) in noise.angles() {
            assert!((0..6).contains(&x) && (0..6).contains(&y), "key ({x}, {y})");
        }
    }

    #[test]
    fn test_untiled_lattice_follows_query() {
        let mut noise = GradientNoise::with_seed(0, 1, 9);
        noise.compute_noise(-10.5, 20.5);
        let mut keys: Vec<_> = noise.angles().map(|(point, _)| point).collect();
        keys.sort();
        assert_eq!(keys, vec![(-11, 20), (-11, 21), (-10, 20), (-10, 21)]);
    }

    #[test]
    fn test_bounded_output() {
        for octaves in 1..=4 {
            let mut noise = GradientNoise::with_seed(3, octaves, 1234);
            for i in 0..120 {
                for j in 0..120 {
                    let value = noise.compute_noise(i as f32 * 0.025, j as f32 * 0.025);
                    assert!(value.abs() <= 1.0 + 1e-3, "|{value}| > 1 with {octaves} octaves");
                }
            }
        }
    }

    #[test]
    fn test_update_angles_wraps_and_never_grows() {
        let mut noise = GradientNoise::with_seed(3, 4, 21);
        for (x, y) in sample_points() {
            noise.compute_noise(x, y);
        }
        let len = noise.lattice_len();

        // Cumulative addition well past 2π
        for _ in 0..200 {
            noise.update_angles(0.5);
        }
        assert_eq!(noise.lattice_len(), len);
        for (_, angle) in noise.angles() {
            assert!((0.0..TAU).contains(&angle), "angle {angle} escaped [0, 2π)");
        }
    }

    #[test]
    fn test_update_angles_speed_depends_on_position() {
        let mut noise = GradientNoise::with_seed(0, 1, 2);
        noise.compute_noise(0.5, 0.5);
        noise.compute_noise(1.5, 1.5);
        let before: HashMap<_, _> = noise.angles().collect();

        noise.update_angles(0.01);
        for (point, angle) in noise.angles() {
            let coefficient = ((point.0 as f64).sin() * (point.1 as f64).sin()).abs() as f32;
            let expected = wrap_angle(before[&point] + 0.01 * (coefficient + 1.0));
            assert!((angle - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_small_evolution_moves_surface_smoothly() {
        let mut noise = GradientNoise::with_seed(3, 4, 77);
        let before: Vec<f32> = sample_points().map(|(x, y)| noise.compute_noise(x, y)).collect();
        noise.update_angles(0.001);
        let after: Vec<f32> = sample_points().map(|(x, y)| noise.compute_noise(x, y)).collect();

        for (a, b) in before.iter().zip(&after) {
            assert!((a - b).abs() < 0.01);
        }
    }

    #[test]
    fn test_octave_count_is_clamped() {
        let noise = GradientNoise::with_seed(3, 0, 1);
        assert_eq!(noise.octave_count(), 1);

        let mut noise = GradientNoise::with_seed(3, MAX_OCTAVES + 2, 1);
        assert_eq!(noise.octave_count(), MAX_OCTAVES);
        assert!(noise.compute_noise(0.5, 0.5).is_finite());
    }

    #[test]
    fn test_far_coordinates_untiled() {
        let mut noise = GradientNoise::with_seed(0, 1, 1);
        for (x, y) in [(3.0e9, 0.5), (-3.0e9, 0.5), (0.5, 3.0e9), (3.0e9, -3.0e9)] {
            let value = noise.compute_noise(x, y);
            assert!(value.is_finite() && value.abs() <= 1.0 + 1e-3, "bad value {value} at ({x}, {y})");
        }
    }
}
