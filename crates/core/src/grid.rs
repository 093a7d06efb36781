//! Grid module - square board of tile magnitudes
//!
//! The grid is an `n × n` matrix where each cell holds a tile value (`0` = empty).
//! Uses a flat vector in row-major order (`row * size + col`); the size is fixed
//! when the grid is created and never changes afterwards.
//!
//! Every direction reuses the "slide left" rule through two geometric primitives,
//! [`Grid::transpose`] and [`Grid::reverse_rows`]:
//!
//! | Direction | Orient | Restore |
//! |-----------|--------|---------|
//! | Left | identity | identity |
//! | Right | reverse rows | reverse rows |
//! | Up | transpose | transpose |
//! | Down | transpose, reverse rows | reverse rows, transpose |

use std::fmt;

use crate::types::{Direction, Pos, Tile};

/// The game grid - `size` columns x `size` rows using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty `size × size` grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from nested rows.
    ///
    /// Returns `None` unless the rows form a square matrix.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return None;
            }
            cells.extend_from_slice(row);
        }
        Some(Self { size, cells })
    }

    /// Convert to nested rows (transport form)
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    #[inline(always)]
    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.row >= self.size || pos.col >= self.size {
            return None;
        }
        Some(pos.row * self.size + pos.col)
    }

    /// Edge length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Get cell at `pos`, `None` if out of bounds
    pub fn get(&self, pos: Pos) -> Option<Tile> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Set cell at `pos`. Returns false if out of bounds
    pub fn set(&mut self, pos: Pos, value: Tile) -> bool {
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Borrow one row
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        // chunks(0) panics, an empty grid simply has no rows
        self.cells.chunks(self.size.max(1))
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Coordinates of empty cells in row-major scan order.
    ///
    /// The order is part of the determinism contract: spawns index into it.
    pub fn empty_cells(&self) -> Vec<Pos> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(idx, _)| Pos::new(idx / self.size, idx % self.size))
            .collect()
    }

    /// Number of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Swap rows and columns
    pub fn transpose(&self) -> Self {
        let n = self.size;
        let mut out = Self::new(n);
        for r in 0..n {
            for c in 0..n {
                out.cells[c * n + r] = self.cells[r * n + c];
            }
        }
        out
    }

    /// Reverse the order of cells within each row (row order is kept)
    pub fn reverse_rows(&self) -> Self {
        let mut out = self.clone();
        if self.size > 0 {
            for row in out.cells.chunks_mut(self.size) {
                row.reverse();
            }
        }
        out
    }

    /// Re-arrange the grid so that moving in `dir` becomes a move toward index 0
    /// of every row.
    pub fn oriented(&self, dir: Direction) -> Self {
        match dir {
            Direction::Left => self.clone(),
            Direction::Right => self.reverse_rows(),
            Direction::Up => self.transpose(),
            Direction::Down => self.transpose().reverse_rows(),
        }
    }

    /// Inverse of [`Grid::oriented`]
    pub fn restored(&self, dir: Direction) -> Self {
        match dir {
            Direction::Left => self.clone(),
            Direction::Right => self.reverse_rows(),
            Direction::Up => self.transpose(),
            Direction::Down => self.reverse_rows().transpose(),
        }
    }
}

/// Map a cell of a grid oriented for `dir` back to board coordinates.
///
/// `line` is the row index and `index` the column index inside the oriented grid.
pub fn board_pos(dir: Direction, size: usize, line: usize, index: usize) -> Pos {
    let last = size - 1;
    match dir {
        Direction::Left => Pos::new(line, index),
        Direction::Right => Pos::new(line, last - index),
        Direction::Up => Pos::new(index, line),
        Direction::Down => Pos::new(last - index, line),
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for row in self.rows() {
            let mut first = true;
            for v in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                if *v == 0 {
                    write!(f, "{:>width$}", ".", width = width)?;
                } else {
                    write!(f, "{:>width$}", v, width = width)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap()
    }

    #[test]
    fn test_grid_new_is_empty() {
        let g = Grid::new(4);
        assert_eq!(g.size(), 4);
        assert_eq!(g.cells().len(), 16);
        assert_eq!(g.tile_count(), 0);
        assert_eq!(g.empty_cells().len(), 16);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        assert!(Grid::from_rows(&[vec![1, 2], vec![3]]).is_none());
        assert!(Grid::from_rows(&[vec![1, 2, 3], vec![4, 5, 6]]).is_none());
    }

    #[test]
    fn test_index_calculation() {
        let g = Grid::new(4);
        assert_eq!(g.index(Pos::new(0, 0)), Some(0));
        assert_eq!(g.index(Pos::new(0, 3)), Some(3));
        assert_eq!(g.index(Pos::new(1, 0)), Some(4));
        assert_eq!(g.index(Pos::new(3, 3)), Some(15));
        assert_eq!(g.index(Pos::new(4, 0)), None);
        assert_eq!(g.index(Pos::new(0, 4)), None);
    }

    #[test]
    fn test_transpose_and_reverse() {
        let g = sample();
        let transposed = vec![vec![1, 4, 7], vec![2, 5, 8], vec![3, 6, 9]];
        assert_eq!(g.transpose().to_rows(), transposed);
        let reversed = vec![vec![3, 2, 1], vec![6, 5, 4], vec![9, 8, 7]];
        assert_eq!(g.reverse_rows().to_rows(), reversed);
        assert_eq!(g.transpose().transpose(), g);
        assert_eq!(g.reverse_rows().reverse_rows(), g);
    }

    #[test]
    fn test_orientation_round_trip() {
        let g = sample();
        for dir in Direction::ALL {
            assert_eq!(g.oriented(dir).restored(dir), g, "{}", dir);
        }
    }

    #[test]
    fn test_board_pos_matches_orientation() {
        let g = sample();
        for dir in Direction::ALL {
            let o = g.oriented(dir);
            for line in 0..3 {
                for index in 0..3 {
                    let pos = board_pos(dir, 3, line, index);
                    let at = Pos::new(line, index);
                    assert_eq!(o.get(at), g.get(pos), "{} {} {}", dir, line, index);
                }
            }
        }
    }

    #[test]
    fn test_empty_grid_has_no_rows() {
        let g = Grid::new(0);
        assert_eq!(g.rows().count(), 0);
        assert!(g.empty_cells().is_empty());
        assert_eq!(g.transpose(), g);
    }
}
