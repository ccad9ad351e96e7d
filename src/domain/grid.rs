use super::{Cell, ConfigError, Kernel};

/// Wrap `index` onto `[0, len_minus_one]` as if the axis were a ring.
///
/// One past the last slot maps to 0 and one before the first maps to
/// `len_minus_one`; indices further out keep wrapping with period
/// `len_minus_one + 1`.
#[inline]
pub const fn resolve(index: i32, len_minus_one: i32) -> i32 {
    if index > len_minus_one {
        (index - len_minus_one - 1).rem_euclid(len_minus_one + 1)
    } else if index < 0 {
        (len_minus_one + index + 1).rem_euclid(len_minus_one + 1)
    } else {
        index
    }
}

/// Grid owns the cells of the continuous automaton on a torus.
///
/// Cells are stored row-major. Besides the live buffer the grid keeps an
/// initial snapshot, refreshed on reseed and load, which "reset" restores.
#[derive(Clone, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    snapshot: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with every cell at zero
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 || width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        let cells: Vec<Cell> = (0..height)
            .flat_map(|row| (0..width).map(move |col| (col, row)))
            .map(|(col, row)| Cell::at(col, row, width, height))
            .collect();

        Ok(Self {
            width,
            height,
            snapshot: cells.clone(),
            cells,
        })
    }

    /// Grid of side `2R + 1` showing the kernel, normalized to its largest weight
    pub fn paint_kernel(kernel: &Kernel) -> Self {
        let side = kernel.side();
        let radius = kernel.radius();
        let peak = kernel.max_weight();
        let mut grid = Self::new(side, side).expect("kernel side is at least 3");
        for (idx, cell) in grid.cells.iter_mut().enumerate() {
            let dx = (idx % side) as i32 - radius;
            let dy = (idx / side) as i32 - radius;
            cell.set_both(kernel.weight(dx, dy) / peak);
        }
        grid.capture_snapshot();
        grid
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Row-major index of the cell at `(x, y)` after toroidal wrapping
    #[inline]
    pub fn wrapped_index(&self, x: i32, y: i32) -> usize {
        let col = resolve(x, self.width as i32 - 1) as usize;
        let row = resolve(y, self.height as i32 - 1) as usize;
        self.get_index(col, row)
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<&Cell> {
        (x < self.width && y < self.height).then(|| &self.cells[self.get_index(x, y)])
    }

    /// Get cell at any position, wrapping around the torus
    #[inline]
    pub fn get_wrapped(&self, x: i32, y: i32) -> &Cell {
        &self.cells[self.wrapped_index(x, y)]
    }

    /// Set both buffers of the cell at `(x, y)`; out-of-range positions wrap
    pub fn set_value(&mut self, x: i32, y: i32, value: f32) {
        let idx = self.wrapped_index(x, y);
        self.cells[idx].set_both(value);
    }

    /// Live cells in row-major order, ready for bulk upload
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Live cells as raw bytes, `x, y, state, old_state` per cell
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    /// The initial snapshot that reset restores
    pub fn snapshot(&self) -> &[Cell] {
        &self.snapshot
    }

    /// Replace the snapshot; the caller guarantees `cells.len() == self.len()`
    pub(crate) fn replace_snapshot(&mut self, cells: Vec<Cell>) {
        debug_assert_eq!(cells.len(), self.len());
        self.snapshot = cells;
    }

    /// Copy the live buffer into the snapshot
    pub fn capture_snapshot(&mut self) {
        self.snapshot.copy_from_slice(&self.cells);
    }

    /// Copy the snapshot back into the live buffer
    pub fn reset_to_snapshot(&mut self) {
        self.cells.copy_from_slice(&self.snapshot);
    }

    /// Zero both buffers of every live cell; positions are kept
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| cell.set_both(0.0));
    }

    /// Number of cells holding a nonzero value
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Sum of committed values, a cheap measure of total mass
    pub fn mass(&self) -> f32 {
        self.cells.iter().map(|cell| cell.old_state).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_seams() {
        let l = 9;
        assert_eq!(resolve(0, l), 0);
        assert_eq!(resolve(l, l), l);
        assert_eq!(resolve(l + 1, l), 0);
        assert_eq!(resolve(-1, l), l);
        assert_eq!(resolve(-2, l), l - 1);
        assert_eq!(resolve(l + 3, l), 2);
    }

    #[test]
    fn test_resolve_stays_in_range() {
        for len in 1..=12 {
            let l = len - 1;
            for index in -2 * len..=2 * len {
                let wrapped = resolve(index, l);
                assert!((0..=l).contains(&wrapped), "resolve({index}, {l}) = {wrapped}");
                assert_eq!(wrapped, index.rem_euclid(len));
            }
        }
    }

    #[test]
    fn test_resolve_single_column() {
        for index in -3..=3 {
            assert_eq!(resolve(index, 0), 0);
        }
    }

    #[test]
    fn test_rejects_empty_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            ConfigError::InvalidDimensions { width: 0, height: 5 }
        );
        assert!(Grid::new(5, 0).is_err());
    }

    #[test]
    fn test_new_grid_is_row_major() {
        let grid = Grid::new(3, 2).unwrap();
        assert_eq!(grid.len(), 6);
        // second cell sits to the right of the first, same row
        assert!(grid.cells()[1].x > grid.cells()[0].x);
        assert_eq!(grid.cells()[1].y, grid.cells()[0].y);
        // fourth cell starts the next row, lower on screen
        assert_eq!(grid.cells()[3].x, grid.cells()[0].x);
        assert!(grid.cells()[3].y < grid.cells()[0].y);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_wrapped_access() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set_value(-1, -1, 0.5);
        assert_eq!(grid.get(3, 2).unwrap().old_state, 0.5);
        assert_eq!(grid.get_wrapped(7, 5).old_state, 0.5);
        assert!(grid.get(4, 0).is_none());
    }

    #[test]
    fn test_snapshot_reset() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_value(1, 1, 0.75);
        grid.capture_snapshot();
        grid.clear();
        assert_eq!(grid.population(), 0);

        grid.reset_to_snapshot();
        assert_eq!(grid.get(1, 1).unwrap().state, 0.75);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_clear_keeps_positions() {
        let mut grid = Grid::new(5, 5).unwrap();
        let before: Vec<_> = grid.cells().iter().map(|c| (c.x, c.y)).collect();
        grid.set_value(2, 2, 1.0);
        grid.clear();
        let after: Vec<_> = grid.cells().iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_bytes_are_tightly_packed() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.set_value(1, 0, 0.5);
        let bytes = grid.as_bytes();
        assert_eq!(bytes.len(), 4 * Cell::BYTES);
        let state = f32::from_ne_bytes(bytes[16 + 8..16 + 12].try_into().unwrap());
        assert_eq!(state, 0.5);
    }

    #[test]
    fn test_paint_kernel() {
        let kernel = Kernel::moore();
        let grid = Grid::paint_kernel(&kernel);
        assert_eq!(grid.dimensions(), (3, 3));
        assert_eq!(grid.get(1, 1).unwrap().state, 0.0);
        assert_eq!(grid.get(0, 0).unwrap().state, 1.0);
        assert_eq!(grid.population(), 8);
        assert_eq!(grid.snapshot(), grid.cells());
    }
}
