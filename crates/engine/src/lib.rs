//! Engine module - move planning for front-ends
//!
//! The planner answers "what would happen if the player moved this way" in terms a
//! renderer can animate: where every tile travels, which tiles merge, which cell
//! receives the merged value. Planning never commits anything; the state that is
//! eventually played comes from [`core::GameState::try_move`], whose pre-spawn grid
//! matches [`MovePlan::grid_after_move`].
//!
//! ```
//! use tile_merge_core::GameState;
//! use tile_merge_engine::plan_move;
//! use tile_merge_types::Direction;
//!
//! let state = GameState::with_seed(1);
//! let plan = plan_move(&state, Direction::Up);
//! let result = state.try_move(Direction::Up);
//! assert_eq!(plan.changed, result.changed);
//! ```

pub mod plan;

pub use tile_merge_core as core;
pub use tile_merge_types as types;

pub use plan::{find_spawn, plan_grid, plan_move, MergeTarget, MovePlan, TileDiff, TileMotion};
