//! Rules module - terminal state detection
//!
//! - **Won**: some tile reached the target magnitude.
//! - **Over**: no empty cell and no pair of equal neighbours anywhere, so no move
//!   can change the grid. Only evaluated while the game is not won.

use crate::grid::Grid;
use crate::types::Tile;

/// True iff any cell is at least `target`
pub fn has_won(grid: &Grid, target: Tile) -> bool {
    grid.cells().iter().any(|&v| v >= target)
}

/// True iff some move could still change the grid.
///
/// Each cell is compared with its neighbour below and to the right only; over a
/// full scan that covers every adjacent pair exactly once.
pub fn has_moves(grid: &Grid) -> bool {
    if grid.cells().contains(&0) {
        return true;
    }

    let n = grid.size();
    let cells = grid.cells();
    for r in 0..n {
        for c in 0..n {
            let v = cells[r * n + c];
            if r + 1 < n && cells[(r + 1) * n + c] == v {
                return true;
            }
            if c + 1 < n && cells[r * n + c + 1] == v {
                return true;
            }
        }
    }
    false
}

/// Terminal flags for a grid: `(won, over)`.
///
/// A win takes precedence, so `over` is never set together with `won`.
pub fn terminal_flags(grid: &Grid, target: Tile) -> (bool, bool) {
    let won = has_won(grid, target);
    let over = !won && !has_moves(grid);
    (won, over)
}
