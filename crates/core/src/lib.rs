//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and transition logic.
//! It has **no dependencies** on rendering, input, storage, or I/O, making it:
//!
//! - **Deterministic**: Same seed and move sequence produce identical grids, scores and spawns
//! - **Testable**: Unit tests for every rule next to the code
//! - **Portable**: Runs in any environment (terminal, GUI, headless, replay tools)
//! - **Value-based**: Transitions return a new [`GameState`]; the input is never mutated
//!
//! # Module Structure
//!
//! - [`grid`]: square grid with transpose/reverse orientation helpers
//! - [`rng`]: Mulberry32 generator with explicit, serializable state
//! - [`merge`]: slide-and-merge rule for a single line
//! - [`game_state`]: new game, moves, spawns, and one level of undo
//! - [`rules`]: win and stalemate detection
//! - [`snapshot`]: the captured pre-move state used by undo
//!
//! # Game Rules
//!
//! - **Slide**: every tile travels as far as it can toward the chosen edge
//! - **Merge**: two equal tiles meeting become one tile of double value; a tile
//!   merges at most once per move
//! - **Spawn**: every move that changes the grid spawns one tile (2 with
//!   probability 0.9, else 4) in a random empty cell
//! - **Undo**: the last effective move can be taken back, once
//! - **End**: won when a tile reaches the target; over when no move can change the grid
//!
//! # Example
//!
//! ```
//! use tile_merge_core::GameState;
//! use tile_merge_types::Direction;
//!
//! // Create a game with a fixed seed
//! let game = GameState::with_seed(12345);
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Moves return the next state
//! let result = game.try_move(Direction::Left);
//! let next = if result.changed { result.next } else { game.try_move(Direction::Right).next };
//! assert!(next.can_undo());
//!
//! // Undo restores the previous grid
//! assert!(!next.undo().can_undo());
//! ```

pub mod game_state;
pub mod grid;
pub mod merge;
pub mod rng;
pub mod rules;
pub mod snapshot;

pub use tile_merge_types as types;

// Re-export commonly used types for convenience
pub use game_state::{slide_grid, GameState, MoveResult, NewGameParams, Spawned, StateParts};
pub use grid::{board_pos, Grid};
pub use merge::{slide_and_merge, slide_and_merge_with, LineMotion, LineMove, LineResult};
pub use rng::{chance, next_int, next_rng, normalize_seed, Mulberry32};
pub use rules::{has_moves, has_won, terminal_flags};
pub use snapshot::Snapshot;
