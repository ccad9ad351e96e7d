mod cell;
mod config;
mod error;
mod grid;
mod growth;
mod kernel;
mod randomizer;
mod simulator;
mod weights;

pub use cell::Cell;
pub use config::{LeniaConfig, presets};
pub use error::{ConfigError, LeniaError};
pub use grid::{Grid, resolve};
pub use growth::GrowthParams;
pub use kernel::{Kernel, Tap};
pub use randomizer::{patch_count, perturb, reseed};
pub use simulator::{StepMode, neighbour_sum, step, step_parallel};
pub use weights::{RadialWeight, Ring, SmoothBump, all_weights, default_weight, weight_by_name};
