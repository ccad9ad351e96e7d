//! One discrete time step of the automaton.
//!
//! Every cell reads only the committed `old_state` of its neighbourhood, so
//! the whole grid advances from the same epoch. The freshly computed values
//! become visible only in the commit pass after all cells are done.

use super::{Grid, GrowthParams, Kernel};
use rayon::prelude::*;

/// Available step implementations
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepMode {
    /// Cell-by-cell on the calling thread
    Serial,
    /// Rows split across the rayon pool
    #[default]
    Parallel,
}

impl StepMode {
    /// Get all available modes
    pub fn all() -> Vec<StepMode> {
        vec![StepMode::Serial, StepMode::Parallel]
    }

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            StepMode::Serial => "Serial",
            StepMode::Parallel => "Parallel",
        }
    }

    /// Advance the grid one step with this mode
    pub fn step(&self, grid: &mut Grid, kernel: &Kernel, growth: &GrowthParams, dt: f32) {
        match self {
            StepMode::Serial => step(grid, kernel, growth, dt),
            StepMode::Parallel => step_parallel(grid, kernel, growth, dt),
        }
    }
}

/// Kernel-weighted average of the committed neighbourhood of `(x, y)`
pub fn neighbour_sum(grid: &Grid, kernel: &Kernel, x: i32, y: i32) -> f32 {
    weighted_sum(grid, kernel, x, y) / kernel.sum()
}

#[inline]
fn weighted_sum(grid: &Grid, kernel: &Kernel, x: i32, y: i32) -> f32 {
    kernel
        .taps()
        .iter()
        .map(|tap| tap.weight * grid.get_wrapped(x + tap.dx, y + tap.dy).old_state)
        .sum()
}

/// Next state of every cell, computed from the committed buffer only
fn next_states_serial(grid: &Grid, kernel: &Kernel, growth: &GrowthParams, dt: f32) -> Vec<f32> {
    let (width, _) = grid.dimensions();
    grid.cells()
        .iter()
        .enumerate()
        .map(|(idx, cell)| {
            let (x, y) = ((idx % width) as i32, (idx / width) as i32);
            growth.apply(cell.old_state, neighbour_sum(grid, kernel, x, y), dt)
        })
        .collect()
}

fn next_states_parallel(grid: &Grid, kernel: &Kernel, growth: &GrowthParams, dt: f32) -> Vec<f32> {
    let (width, _) = grid.dimensions();
    grid.cells()
        .par_iter()
        .enumerate()
        .map(|(idx, cell)| {
            let (x, y) = ((idx % width) as i32, (idx / width) as i32);
            growth.apply(cell.old_state, neighbour_sum(grid, kernel, x, y), dt)
        })
        .collect()
}

/// Write computed states, then commit them as the new epoch
fn commit(grid: &mut Grid, next: Vec<f32>) {
    for (cell, state) in grid.cells_mut().iter_mut().zip(next) {
        cell.state = state;
        cell.commit();
    }
}

/// Advance the grid one step on the calling thread
pub fn step(grid: &mut Grid, kernel: &Kernel, growth: &GrowthParams, dt: f32) {
    let next = next_states_serial(grid, kernel, growth, dt);
    commit(grid, next);
}

/// Advance the grid one step using rayon; results match [`step`] exactly
pub fn step_parallel(grid: &mut Grid, kernel: &Kernel, growth: &GrowthParams, dt: f32) {
    let next = next_states_parallel(grid, kernel, growth, dt);
    commit(grid, next);
}
