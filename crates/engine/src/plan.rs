use crate::core::{board_pos, slide_and_merge_with, GameState, Grid, LineMotion};
use crate::types::{Direction, Pos, Tile};

/// What a tile does during a planned move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileMotion {
    Slide,
    /// Receives the merged value at its destination
    Survivor { new_value: Tile },
    /// Travels into a survivor and disappears
    MergedAway,
}

impl From<LineMotion> for TileMotion {
    fn from(value: LineMotion) -> Self {
        match value {
            LineMotion::Slide => TileMotion::Slide,
            LineMotion::Survivor { new_value } => TileMotion::Survivor { new_value },
            LineMotion::MergedAway => TileMotion::MergedAway,
        }
    }
}

/// Movement of one tile in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileDiff {
    pub from: Pos,
    pub to: Pos,
    /// Value before the move
    pub value: Tile,
    pub motion: TileMotion,
}

impl TileDiff {
    pub fn moved(&self) -> bool {
        self.from != self.to
    }

    pub fn is_survivor(&self) -> bool {
        matches!(self.motion, TileMotion::Survivor { .. })
    }

    /// Value sitting at `to` once the move completes (absent for merged-away tiles)
    pub fn new_value(&self) -> Option<Tile> {
        match self.motion {
            TileMotion::Slide => Some(self.value),
            TileMotion::Survivor { new_value } => Some(new_value),
            TileMotion::MergedAway => None,
        }
    }
}

/// A cell that received a merged value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeTarget {
    pub pos: Pos,
    pub new_value: Tile,
}

/// Preview of a move, computed without committing anything
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub direction: Direction,
    pub changed: bool,
    pub gained_score: u64,
    /// Grid after sliding and merging, before the spawn
    pub grid_after_move: Grid,
    /// One entry per tile on the board, stationary tiles included
    pub diffs: Vec<TileDiff>,
}

impl MovePlan {
    /// Cells that receive a merged value, each listed once
    pub fn merge_targets(&self) -> Vec<MergeTarget> {
        self.diffs
            .iter()
            .filter_map(|d| match d.motion {
                TileMotion::Survivor { new_value } => Some(MergeTarget {
                    pos: d.to,
                    new_value,
                }),
                _ => None,
            })
            .collect()
    }

    /// Diffs of tiles that actually travel
    pub fn moving(&self) -> impl Iterator<Item = &TileDiff> + '_ {
        self.diffs.iter().filter(|d| d.moved())
    }
}

/// Compute per-tile movement for `dir` without touching score, RNG, or undo state.
pub fn plan_move(state: &GameState, dir: Direction) -> MovePlan {
    plan_grid(state.grid(), dir)
}

/// [`plan_move`] for a bare grid
pub fn plan_grid(grid: &Grid, dir: Direction) -> MovePlan {
    let n = grid.size();
    let view = grid.oriented(dir);
    let mut processed = Grid::new(n);
    let mut gained_score = 0u64;
    let mut diffs = Vec::with_capacity(grid.tile_count());

    for line in 0..n {
        let result = slide_and_merge_with(view.row(line), |m| {
            diffs.push(TileDiff {
                from: board_pos(dir, n, line, m.from),
                to: board_pos(dir, n, line, m.to),
                value: m.value,
                motion: m.motion.into(),
            });
        });
        gained_score += result.gained_score;
        for (c, v) in result.row.into_iter().enumerate() {
            processed.set(Pos::new(line, c), v);
        }
    }

    let grid_after_move = processed.restored(dir);
    MovePlan {
        direction: dir,
        changed: grid_after_move != *grid,
        gained_score,
        grid_after_move,
        diffs,
    }
}

/// First cell (row-major) that is empty in `before` and filled in `after`.
///
/// Diff helper for front-ends that only hold two grids (a replayed save, a
/// remote peer) and need the spawned cell to animate. Live play reads it from
/// [`MoveResult::spawned`](crate::core::MoveResult) instead.
pub fn find_spawn(before: &Grid, after: &Grid) -> Option<Pos> {
    before
        .cells()
        .iter()
        .zip(after.cells())
        .position(|(&b, &a)| b == 0 && a != 0)
        .map(|idx| Pos::new(idx / before.size(), idx % before.size()))
}
