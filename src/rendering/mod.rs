use macroquad::prelude::*;
use crate::application::Session;
use crate::domain::{Cell, Grid};

/// Map a cell to a colour: cyan by state, red channel is `state * old_state`
pub fn cell_color(cell: &Cell) -> Color {
    Color::new(cell.old_state * cell.state, cell.state, cell.state, 1.0)
}

/// Draw every nonzero cell as a square of `cell_size` pixels.
/// Positions come from the cells' normalized device coordinates.
pub fn draw_grid(grid: &Grid, cell_size: f32) {
    let (width, height) = grid.dimensions();
    let pixel_w = width as f32 * cell_size;
    let pixel_h = height as f32 * cell_size;

    for cell in grid.cells().iter().filter(|cell| cell.state > 0.0) {
        // centre of the cell in pixels, then back to its top-left corner
        let cx = (cell.x + 1.0) * 0.5 * pixel_w;
        let cy = (1.0 - cell.y) * 0.5 * pixel_h;
        draw_rectangle(
            cx - cell_size * 0.5,
            cy - cell_size * 0.5,
            cell_size,
            cell_size,
            cell_color(cell),
        );
    }
}

/// Status line in the top-left corner
pub fn draw_status(session: &Session) {
    let status = format!(
        "{} | gen {} | {} {:.1}ms | mass {:.0}",
        if session.run_state().is_running() { "Running" } else { "Paused" },
        session.generation(),
        session.step_mode().name(),
        session.last_step_time_ms(),
        session.grid().mass(),
    );
    draw_text(&status, 6.0, 16.0, 16.0, Color::from_rgba(0, 255, 150, 255));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_cell_is_black() {
        let color = cell_color(&Cell::default());
        assert_eq!((color.r, color.g, color.b), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_settled_cell_is_white() {
        let cell = Cell { x: 0.0, y: 0.0, state: 1.0, old_state: 1.0 };
        let color = cell_color(&cell);
        assert_eq!((color.r, color.g, color.b), (1.0, 1.0, 1.0));
    }
}
