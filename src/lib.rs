// Domain layer - Core automaton logic
pub mod domain;

// Application layer - Session state machine and event handling
pub mod application;

// Infrastructure layer - storage, rendering, input
pub mod input;
pub mod persistence;
pub mod rendering;

// Re-exports for convenience
pub use domain::{
    Cell, ConfigError, Grid, GrowthParams, Kernel, LeniaConfig, LeniaError, StepMode, presets,
};
pub use application::{RunState, Session, SessionEvent};
