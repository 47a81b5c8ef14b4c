//! Animated heightfield over a fixed world rectangle, colored by height.

mod grid;

// Re-export public types
pub use grid::HeightfieldPlot;

use bytemuck::{Pod, Zeroable};

/// Per-vertex RGBA color (uploaded as `Unorm8x4`)
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Height color for channel value `c` (0 = lowest, 255 = highest)
    ///
    /// Low ground is yellow, high ground blue. The green term uses truncating
    /// division, so `c = 255` gives green 128.
    pub fn from_channel(c: u8) -> Self {
        Self {
            red: 255 - c,
            green: 255 - c / 2,
            blue: c,
            alpha: 255,
        }
    }
}

/// Map a height to a color channel: clamp to `[-cut, cut]`, normalize to
/// `[0, 1]`, round to `[0, 255]`
pub fn height_to_channel(y: f32, cut: f32) -> u8 {
    let y_cut = y.clamp(-cut, cut);
    let y_normalized = (y_cut + cut) / (cut * 2.0);
    (y_normalized * 255.0).round() as u8
}
