//! noiseplot library - animated gradient-noise heightfield

pub mod camera;
pub mod cli;
pub mod error;
pub mod fps;
pub mod input;
pub mod noise;
pub mod params;
pub mod plot;
pub mod rendering;
pub mod snapshot;
