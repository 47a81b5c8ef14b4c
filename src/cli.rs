//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;
use crate::params::{NoiseParams, PlotParams};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "noiseplot")]
#[command(about = "Animated gradient-noise heightfield viewer", long_about = None)]
pub struct Args {
    /// RNG seed for the noise lattice (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Noise tile size in lattice cells (0 disables tiling)
    #[arg(long, value_name = "CELLS", default_value_t = 3)]
    pub tile_size: u32,

    /// Number of noise octaves
    #[arg(long, default_value_t = 4)]
    pub octaves: u32,

    /// Initial grid resolution (cells per side)
    #[arg(long, value_name = "CELLS", default_value_t = 20)]
    pub grid_size: u32,

    /// Start with time frozen (Space toggles)
    #[arg(long)]
    pub freeze: bool,

    /// Render the color field to a PNG without opening a window
    #[arg(long, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Simulation ticks to run before writing the snapshot
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub ticks: u32,
}

impl Args {
    /// Noise parameters with command-line overrides applied
    pub fn noise_params(&self) -> Result<NoiseParams, ConfigError> {
        let params = NoiseParams {
            tile_size: self.tile_size,
            octave_count: self.octaves,
            seed: self.seed,
            ..Default::default()
        };
        params.validate()?;
        Ok(params)
    }

    /// Plot parameters with command-line overrides applied
    pub fn plot_params(&self) -> Result<PlotParams, ConfigError> {
        let params = PlotParams {
            initial_grid_size: self.grid_size,
            ..Default::default()
        };
        params.validate()?;
        Ok(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_params() {
        let args = Args::parse_from(["noiseplot"]);
        let noise = args.noise_params().unwrap();
        let plot = args.plot_params().unwrap();

        assert_eq!(noise.tile_size, NoiseParams::default().tile_size);
        assert_eq!(noise.octave_count, NoiseParams::default().octave_count);
        assert_eq!(noise.seed, None);
        assert_eq!(plot.initial_grid_size, PlotParams::default().initial_grid_size);
        assert!(args.snapshot.is_none());
        assert_eq!(args.ticks, 1);
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "noiseplot",
            "--seed",
            "9",
            "--octaves",
            "2",
            "--grid-size",
            "40",
            "--snapshot",
            "out.png",
            "--ticks",
            "30",
        ]);
        assert_eq!(args.noise_params().unwrap().seed, Some(9));
        assert_eq!(args.noise_params().unwrap().octave_count, 2);
        assert_eq!(args.plot_params().unwrap().initial_grid_size, 40);
        assert_eq!(args.snapshot, Some(PathBuf::from("out.png")));
        assert_eq!(args.ticks, 30);
    }

    #[test]
    fn test_invalid_overrides_rejected() {
        let args = Args::parse_from(["noiseplot", "--octaves", "0"]);
        assert_eq!(args.noise_params(), Err(ConfigError::NoOctaves));

        let args = Args::parse_from(["noiseplot", "--grid-size", "5"]);
        assert!(args.plot_params().is_err());
    }
}
