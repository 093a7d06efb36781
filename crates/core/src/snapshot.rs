use crate::grid::Grid;

/// Everything needed to take back one move.
///
/// Holds its own copy of the pre-move grid; nothing is shared with the live state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Snapshot {
    /// Grid before the move
    pub grid: Grid,
    /// Score before the move
    pub score: u64,
    /// RNG state before the post-move spawn
    pub rng_state: u32,
}

impl Snapshot {
    pub fn new(grid: Grid, score: u64, rng_state: u32) -> Self {
        Self {
            grid,
            score,
            rng_state,
        }
    }
}
