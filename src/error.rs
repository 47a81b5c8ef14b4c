//! Error types for configuration and the viewer binary.

use thiserror::Error;

/// A startup parameter set that cannot drive the simulation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// At least one octave is required.
    #[error("octave count must be at least 1")]
    NoOctaves,
    /// The highest octave frequency must fit an `i32` shift.
    #[error("octave count {0} exceeds the maximum of {max}", max = crate::params::MAX_OCTAVES)]
    TooManyOctaves(u32),
    /// The world rectangle has zero or negative extent on some axis.
    #[error("world rectangle is empty on the {axis} axis: [{start}, {end}]")]
    EmptyWorldRect {
        axis: &'static str,
        start: f32,
        end: f32,
    },
    /// A `[min, max]` range is inverted or otherwise unusable.
    #[error("invalid {name} range [{min}, {max}]")]
    InvalidRange {
        name: &'static str,
        min: u32,
        max: u32,
    },
    /// An initial value lies outside its range.
    #[error("initial {name} {value} is outside [{min}, {max}]")]
    InitialOutOfRange {
        name: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    /// The height clamp must be positive.
    #[error("height cut must be positive, got {0}")]
    NonPositiveCut(f32),
}

/// Failures of the interactive viewer and the headless snapshot mode.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("failed to find a suitable GPU adapter")]
    NoAdapter,
    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
    #[error("failed to write snapshot: {0}")]
    Snapshot(#[from] image::ImageError),
}
