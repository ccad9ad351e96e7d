//! Reseeding the grid with random patches.
//!
//! Random generators are always passed in by the caller. A session seeds one
//! generator at start-up and keeps drawing from it, so consecutive reseeds are
//! independent while tests can pin the seed.

use super::{ConfigError, Grid};
use rand::Rng;

/// Number of patches placed by [`reseed`]: `ceil(width / (radius * density))`.
///
/// More patches than grid cells is rejected, so a tiny density cannot turn
/// into an effectively endless reseed.
pub fn patch_count(
    width: usize,
    height: usize,
    radius: i32,
    density: f32,
) -> Result<usize, ConfigError> {
    if radius < 1 {
        return Err(ConfigError::InvalidRadius(radius));
    }
    if !density.is_finite() || density <= 0.0 {
        return Err(ConfigError::InvalidDensity(density));
    }
    let cells = width.saturating_mul(height);
    let patches = (width as f32 / (radius as f32 * density)).ceil();
    if !patches.is_finite() || patches as f64 > cells as f64 {
        return Err(ConfigError::TooManyPatches {
            density,
            patches: patches as f64,
            cells,
        });
    }
    Ok(patches as usize)
}

/// Clear the grid, then fill square patches around random centres with noise.
///
/// Each patch covers the `(2 * radius + 1)^2` window around its centre,
/// wrapping at the edges. Every covered cell draws `state` and `old_state`
/// independently from `[0, 1)`; untouched cells stay at zero. The result is
/// captured as the grid snapshot. Returns the number of patches placed.
pub fn reseed<R: Rng + ?Sized>(
    grid: &mut Grid,
    radius: i32,
    density: f32,
    rng: &mut R,
) -> Result<usize, ConfigError> {
    let (width, height) = grid.dimensions();
    let patches = patch_count(width, height, radius, density)?;

    grid.clear();
    for _ in 0..patches {
        let cx = rng.random_range(0..width) as i32;
        let cy = rng.random_range(0..height) as i32;
        for y in cy - radius..=cy + radius {
            for x in cx - radius..=cx + radius {
                let idx = grid.wrapped_index(x, y);
                let cell = &mut grid.cells_mut()[idx];
                cell.state = rng.random::<f32>();
                cell.old_state = rng.random::<f32>();
            }
        }
    }
    grid.capture_snapshot();

    log::debug!(
        "reseeded {}x{} grid with {} patches of radius {}",
        width,
        height,
        patches,
        radius
    );
    Ok(patches)
}

/// Shake every cell's committed value by up to `noise_factor` either way.
///
/// `state` and `old_state` move together and stay within [0, 1]. The
/// snapshot is left alone, so reset still returns to the unperturbed grid.
pub fn perturb<R: Rng + ?Sized>(
    grid: &mut Grid,
    noise_factor: f32,
    rng: &mut R,
) -> Result<(), ConfigError> {
    if !noise_factor.is_finite() || noise_factor < 0.0 {
        return Err(ConfigError::InvalidNoiseFactor(noise_factor));
    }
    if noise_factor == 0.0 {
        return Ok(());
    }
    for cell in grid.cells_mut() {
        let noise = (rng.random::<f32>() * 2.0 - 1.0) * noise_factor;
        cell.set_both((cell.old_state + noise).clamp(0.0, 1.0));
    }
    Ok(())
}
