//! Gradient noise parameters.

use crate::error::ConfigError;

/// Highest supported octave count (frequency `2^(octaves - 1)` must fit an `i32`).
pub const MAX_OCTAVES: u32 = 31;

/// Gradient noise engine parameters
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseParams {
    /// Period of octave-0 noise in noise-domain units (0 disables tiling)
    pub tile_size: u32,

    /// Number of summed octaves (each doubles frequency, halves amplitude)
    pub octave_count: u32,

    /// Angle added to every lattice gradient per tick (radians, before the
    /// position-dependent `|sin x * sin y| + 1` factor)
    pub evolution_eps: f32,

    /// RNG seed for lattice gradients (`None` = seeded from the OS)
    pub seed: Option<u64>,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            tile_size: 3,
            octave_count: 4,
            evolution_eps: 0.05,
            seed: None,
        }
    }
}

impl NoiseParams {
    /// Validate configuration (octave count within `[1, MAX_OCTAVES]`)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.octave_count == 0 {
            return Err(ConfigError::NoOctaves);
        }
        if self.octave_count > MAX_OCTAVES {
            return Err(ConfigError::TooManyOctaves(self.octave_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(NoiseParams::default().validate(), Ok(()));
    }

    #[test]
    fn test_octave_bounds() {
        let mut params = NoiseParams::default();
        params.octave_count = 0;
        assert_eq!(params.validate(), Err(ConfigError::NoOctaves));

        params.octave_count = MAX_OCTAVES + 1;
        assert_eq!(
            params.validate(),
            Err(ConfigError::TooManyOctaves(MAX_OCTAVES + 1))
        );

        params.octave_count = MAX_OCTAVES;
        assert!(params.validate().is_ok());
    }
}
