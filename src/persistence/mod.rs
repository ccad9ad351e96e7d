//! Raw binary checkpoints of the grid.
//!
//! A file is `width * height` records in row-major order, each four
//! little-endian `f32`s: `x, y, state, old_state`. There is no header, so the
//! reader must already know the grid dimensions.
//!
//! Both directions work on the grid's snapshot buffer: saving writes the
//! snapshot, loading installs the file as the snapshot and resets the live
//! buffer from it.

use crate::domain::{Cell, ConfigError, Grid, LeniaError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Directory used when the caller does not pick one
pub const DEFAULT_SAVE_DIR: &str = "./saves";

/// File extension of checkpoints
pub const EXTENSION: &str = "blob";

/// Path of the checkpoint called `name` inside `dir`
pub fn save_path(dir: impl AsRef<Path>, name: &str) -> PathBuf {
    dir.as_ref().join(format!("{name}.{EXTENSION}"))
}

/// Encode cells as contiguous little-endian records
pub fn encode(cells: &[Cell]) -> Vec<u8> {
    cells.iter().flat_map(|cell| cell.to_le_bytes()).collect()
}

/// Decode exactly `expected_cells` records
pub fn decode(bytes: &[u8], expected_cells: usize) -> Result<Vec<Cell>, ConfigError> {
    let expected = (expected_cells * Cell::BYTES) as u64;
    if bytes.len() as u64 != expected {
        return Err(ConfigError::DimensionMismatch {
            expected,
            actual: bytes.len() as u64,
        });
    }
    Ok(bytes
        .chunks_exact(Cell::BYTES)
        .map(|chunk| {
            let mut record = [0u8; Cell::BYTES];
            record.copy_from_slice(chunk);
            Cell::from_le_bytes(&record)
        })
        .collect())
}

/// Check decoded records against the grid they are meant for.
///
/// Positions must match the grid's fixed layout bit for bit and both values
/// must lie in [0, 1].
pub fn check_records(cells: &[Cell], grid: &Grid) -> Result<(), ConfigError> {
    for (index, (cell, expected)) in cells.iter().zip(grid.snapshot()).enumerate() {
        let corrupt = |field, value| ConfigError::CorruptRecord { index, field, value };
        if cell.x.to_bits() != expected.x.to_bits() {
            return Err(corrupt("x", cell.x));
        }
        if cell.y.to_bits() != expected.y.to_bits() {
            return Err(corrupt("y", cell.y));
        }
        if !(0.0..=1.0).contains(&cell.state) {
            return Err(corrupt("state", cell.state));
        }
        if !(0.0..=1.0).contains(&cell.old_state) {
            return Err(corrupt("old_state", cell.old_state));
        }
    }
    Ok(())
}

/// Write the grid's snapshot to `path`.
///
/// Data goes to a temporary sibling first and is renamed into place, so a
/// failure never leaves a truncated checkpoint behind.
pub fn save(path: impl AsRef<Path>, grid: &Grid) -> Result<(), LeniaError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| LeniaError::io(parent, e))?;
    }

    let tmp = path.with_extension(format!("{EXTENSION}.tmp"));
    let bytes = encode(grid.snapshot());
    let written = fs::File::create(&tmp)
        .and_then(|mut file| {
            file.write_all(&bytes)?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp, path));

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(LeniaError::io(path, e));
    }

    log::info!("saved {} cells to {}", grid.len(), path.display());
    Ok(())
}

/// Load `path` into an existing grid of matching dimensions.
///
/// Every record is checked with [`check_records`] first. On success the file
/// becomes the snapshot and the live buffer is reset to it. On any failure
/// the grid is left untouched.
pub fn load_into(path: impl AsRef<Path>, grid: &mut Grid) -> Result<(), LeniaError> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| LeniaError::io(path, e))?;
    let cells = decode(&bytes, grid.len())?;
    check_records(&cells, grid)?;

    grid.replace_snapshot(cells);
    grid.reset_to_snapshot();

    log::info!("loaded {} cells from {}", grid.len(), path.display());
    Ok(())
}

/// Load `path` into a fresh grid of the given dimensions
pub fn load(path: impl AsRef<Path>, width: usize, height: usize) -> Result<Grid, LeniaError> {
    let mut grid = Grid::new(width, height)?;
    load_into(path, &mut grid)?;
    Ok(grid)
}
