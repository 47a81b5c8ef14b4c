//! Parameter definitions with documented units and defaults.
//!
//! All tuning constants live here:
//! - Noise lattice and octave settings
//! - World rectangle and grid/isoline bounds
//! - Window, projection and control speeds

mod noise;
mod plot;
mod render;

// Re-export all types
pub use noise::{NoiseParams, MAX_OCTAVES};
pub use plot::{PlotParams, MAX_GRID_SIZE};
pub use render::{ControlParams, RenderConfig};
