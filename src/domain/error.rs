use std::path::PathBuf;
use thiserror::Error;

/// Configuration values that cannot produce a valid simulation.
/// These are rejected before the simulation starts or before an operation proceeds.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid dimensions {width}x{height} must both be at least 1")]
    InvalidDimensions { width: usize, height: usize },
    #[error("kernel radius {0} must be at least 1")]
    InvalidRadius(i32),
    #[error("kernel of radius {radius} has no nonzero weight")]
    ZeroKernelSum { radius: i32 },
    #[error("kernel of radius {radius} needs {expected} weights, got {actual}")]
    KernelShape { radius: i32, expected: usize, actual: usize },
    #[error("kernel weight {weight} at offset ({dx}, {dy}) is invalid")]
    InvalidKernelWeight { dx: i32, dy: i32, weight: f32 },
    #[error("random density {0} must be a positive finite number")]
    InvalidDensity(f32),
    #[error("random density {density} would place {patches} patches on a grid of {cells} cells")]
    TooManyPatches { density: f32, patches: f64, cells: usize },
    #[error("growth width c = {0} is too small or not finite")]
    InvalidGrowthWidth(f32),
    #[error("growth parameter {name} = {value} must be finite")]
    InvalidGrowthParam { name: &'static str, value: f32 },
    #[error("noise factor {0} must be a non-negative finite number")]
    InvalidNoiseFactor(f32),
    #[error("time step dt = {0} must be a positive finite number")]
    InvalidTimeStep(f32),
    #[error("expected {expected} bytes for the grid, found {actual}")]
    DimensionMismatch { expected: u64, actual: u64 },
    #[error("record {index} has {field} = {value}, outside the grid's layout")]
    CorruptRecord { index: usize, field: &'static str, value: f32 },
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    #[error("unknown kernel weighting: {0}")]
    UnknownWeight(String),
}

/// Top-level error for session and persistence operations.
#[derive(Debug, Error)]
pub enum LeniaError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LeniaError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
