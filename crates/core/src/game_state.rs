//! Game state module - the move/spawn/undo state machine
//!
//! [`GameState`] is a value: [`GameState::try_move`] and [`GameState::undo`] never
//! touch `self`, they return the next state. A move either changes nothing at all
//! (no snapshot, no RNG draw, no spawn) or advances grid, score, RNG state and the
//! undo snapshot together.

use tracing::{debug, trace};

use crate::grid::Grid;
use crate::merge::slide_and_merge;
use crate::rng::{normalize_seed, Mulberry32};
use crate::rules::terminal_flags;
use crate::snapshot::Snapshot;
use crate::types::*;

/// Parameters for [`GameState::new`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewGameParams {
    pub size: usize,
    pub target: Tile,
    /// `None` seeds from the wall clock
    pub seed: Option<u32>,
    /// Best score carried over from earlier sessions
    pub best: u64,
    pub spawn_rule: SpawnRule,
}

impl Default for NewGameParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            target: DEFAULT_TARGET,
            seed: None,
            best: 0,
            spawn_rule: SpawnRule::default(),
        }
    }
}

impl NewGameParams {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_target(mut self, target: Tile) -> Self {
        self.target = target;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_best(mut self, best: u64) -> Self {
        self.best = best;
        self
    }

    pub fn with_spawn_rule(mut self, spawn_rule: SpawnRule) -> Self {
        self.spawn_rule = spawn_rule;
        self
    }
}

/// A tile written by a spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawned {
    pub pos: Pos,
    pub value: Tile,
}

/// Outcome of [`GameState::try_move`]
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    pub next: GameState,
    /// False when the direction could not change the grid; `next` then equals the input
    pub changed: bool,
    /// Score produced by merges in this move
    pub gained_score: u64,
    /// Tile spawned after the move (none for no-op moves or a full board)
    pub spawned: Option<Spawned>,
}

/// Every field of a [`GameState`], for restoring one from external storage
#[derive(Debug, Clone, PartialEq)]
pub struct StateParts {
    pub size: usize,
    pub target: Tile,
    pub grid: Grid,
    pub score: u64,
    pub best: u64,
    pub move_count: u32,
    pub won: bool,
    pub over: bool,
    pub rng_seed: u32,
    pub rng_state: u32,
    pub prev: Option<Snapshot>,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    size: usize,
    target: Tile,
    grid: Grid,
    score: u64,
    /// Highest score observed this session
    best: u64,
    move_count: u32,
    won: bool,
    over: bool,
    /// Seed the game started from (kept for replays)
    rng_seed: u32,
    rng_state: u32,
    /// One level of undo; present iff undo is available
    prev: Option<Snapshot>,
}

impl GameState {
    /// Start a new game and spawn the two opening tiles
    pub fn new(params: NewGameParams) -> Self {
        let rng_seed = normalize_seed(params.seed);
        let mut state = Self {
            size: params.size,
            target: params.target,
            grid: Grid::new(params.size),
            score: 0,
            best: params.best,
            move_count: 0,
            won: false,
            over: false,
            rng_seed,
            rng_state: rng_seed,
            prev: None,
        };

        state.spawn_in_place(&params.spawn_rule);
        state.spawn_in_place(&params.spawn_rule);
        state.refresh_flags();

        debug!(
            size = state.size,
            target = state.target,
            seed = state.rng_seed,
            "new game"
        );
        state
    }

    /// New default-sized game with the given seed
    pub fn with_seed(seed: u32) -> Self {
        Self::new(NewGameParams::default().with_seed(seed))
    }

    /// Fresh state around an existing grid: zero score, no undo, nothing spawned.
    ///
    /// Useful for puzzles and replays that start from a fixed position.
    pub fn from_grid(grid: Grid, target: Tile, seed: u32) -> Self {
        let rng_seed = normalize_seed(Some(seed));
        let mut state = Self {
            size: grid.size(),
            target,
            grid,
            score: 0,
            best: 0,
            move_count: 0,
            won: false,
            over: false,
            rng_seed,
            rng_state: rng_seed,
            prev: None,
        };
        state.refresh_flags();
        state
    }

    /// Rebuild a state from stored fields.
    ///
    /// Flags are taken as stored. Returns `None` when the grid or the snapshot
    /// grid is not `size × size`. Zero RNG values are remapped to the non-zero
    /// replacement.
    pub fn from_parts(parts: StateParts) -> Option<Self> {
        if parts.grid.size() != parts.size {
            return None;
        }
        if let Some(prev) = &parts.prev {
            if prev.grid.size() != parts.size {
                return None;
            }
        }

        Some(Self {
            size: parts.size,
            target: parts.target,
            grid: parts.grid,
            score: parts.score,
            best: parts.best,
            move_count: parts.move_count,
            won: parts.won,
            over: parts.over,
            rng_seed: normalize_seed(Some(parts.rng_seed)),
            rng_state: normalize_seed(Some(parts.rng_state)),
            prev: parts.prev.map(|p| Snapshot {
                rng_state: normalize_seed(Some(p.rng_state)),
                ..p
            }),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn target(&self) -> Tile {
        self.target
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn best(&self) -> u64 {
        self.best
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn rng_seed(&self) -> u32 {
        self.rng_seed
    }

    pub fn rng_state(&self) -> u32 {
        self.rng_state
    }

    pub fn can_undo(&self) -> bool {
        self.prev.is_some()
    }

    pub fn prev(&self) -> Option<&Snapshot> {
        self.prev.as_ref()
    }

    /// Either won or stuck
    pub fn is_terminal(&self) -> bool {
        self.won || self.over
    }

    /// Attempt a move with the default spawn rule
    pub fn try_move(&self, dir: Direction) -> MoveResult {
        self.try_move_with(dir, &SpawnRule::default())
    }

    /// Attempt a move, spawning with `rule` if the grid changes
    pub fn try_move_with(&self, dir: Direction, rule: &SpawnRule) -> MoveResult {
        let (moved, gained_score) = slide_grid(&self.grid, dir);

        if moved == self.grid {
            trace!(direction = %dir, "move changed nothing");
            return MoveResult {
                next: self.clone(),
                changed: false,
                gained_score: 0,
                spawned: None,
            };
        }

        let score = self.score.saturating_add(gained_score);
        let mut next = Self {
            grid: moved,
            score,
            best: self.best.max(score),
            move_count: self.move_count.wrapping_add(1),
            prev: Some(Snapshot::new(self.grid.clone(), self.score, self.rng_state)),
            ..self.clone()
        };

        let spawned = next.spawn_in_place(rule);
        next.refresh_flags();

        debug!(
            direction = %dir,
            gained = gained_score,
            score = next.score,
            spawn = ?spawned.map(|s| s.pos),
            won = next.won,
            over = next.over,
            "move committed"
        );

        MoveResult {
            next,
            changed: true,
            gained_score,
            spawned,
        }
    }

    /// Take back the last move. A no-op when there is nothing to undo.
    ///
    /// Restores grid, score and RNG state; `move_count` and `best` keep their values.
    pub fn undo(&self) -> GameState {
        let Some(prev) = &self.prev else {
            trace!("nothing to undo");
            return self.clone();
        };

        let mut next = Self {
            grid: prev.grid.clone(),
            score: prev.score,
            rng_state: prev.rng_state,
            prev: None,
            ..self.clone()
        };
        next.refresh_flags();

        debug!(score = next.score, "undo");
        next
    }

    /// Spawn one tile into a random empty cell, returning the new state.
    ///
    /// On a full board the state is returned unchanged and no RNG is consumed.
    pub fn spawn_tile(&self, rule: &SpawnRule) -> (GameState, Option<Spawned>) {
        let mut next = self.clone();
        let spawned = next.spawn_in_place(rule);
        (next, spawned)
    }

    /// Draw order is fixed: cell index first, then the 2-or-4 coin flip.
    fn spawn_in_place(&mut self, rule: &SpawnRule) -> Option<Spawned> {
        let empties = self.grid.empty_cells();
        if empties.is_empty() {
            return None;
        }

        let mut rng = Mulberry32::from_state(self.rng_state);
        let pos = empties[rng.next_int(empties.len())];
        let value = if rng.chance(rule.two_prob) {
            SPAWN_LOW
        } else {
            SPAWN_HIGH
        };

        self.grid.set(pos, value);
        self.rng_state = rng.state();
        Some(Spawned { pos, value })
    }

    fn refresh_flags(&mut self) {
        let (won, over) = terminal_flags(&self.grid, self.target);
        self.won = won;
        self.over = over;
    }
}

/// Slide every line of `grid` toward `dir`, returning the new grid and the score
/// gained. Pure: no spawn, no RNG.
pub fn slide_grid(grid: &Grid, dir: Direction) -> (Grid, u64) {
    let view = grid.oriented(dir);
    let mut processed = Grid::new(view.size());
    let mut gained = 0u64;

    for r in 0..view.size() {
        let line = slide_and_merge(view.row(r));
        gained += line.gained_score;
        for (c, v) in line.row.into_iter().enumerate() {
            processed.set(Pos::new(r, c), v);
        }
    }

    (processed.restored(dir), gained)
}
