//! Tile merge puzzle (workspace facade crate).
//!
//! Re-exports the rules engine crates under `tile_merge::{core,engine,codec,types}` and
//! hosts the configuration of the headless `tile-merge` driver.

pub mod cli;

pub use tile_merge_codec as codec;
pub use tile_merge_core as core;
pub use tile_merge_engine as engine;
pub use tile_merge_types as types;
