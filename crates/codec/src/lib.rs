//! Codec module - lossless save format for a game state
//!
//! This crate turns a [`GameState`] into a transport-neutral, versioned envelope and
//! back. The envelope carries everything needed to continue a game exactly where it
//! stopped, including the RNG state and the one-step undo snapshot.
//!
//! # Envelope
//!
//! ```text
//! { "v": 1, "state": { ...every GameState field..., "prev": { "grid", "score", "rngState" } } }
//! ```
//!
//! See [`payload`] for the field list and the leniency rules.
//!
//! # Failure Model
//!
//! Loading never panics and never yields a half-filled state. [`decode`] and
//! [`from_json`] report the reason as a [`CodecError`]; [`deserialize`] collapses
//! every failure into `None`, meaning "no saved game available".
//!
//! # Example
//!
//! ```
//! use tile_merge_codec::{from_json, to_json};
//! use tile_merge_core::GameState;
//!
//! let game = GameState::with_seed(42);
//! let json = to_json(&game).unwrap();
//! assert_eq!(from_json(&json).unwrap(), game);
//! assert!(from_json(r#"{"v":2,"state":{}}"#).is_err());
//! ```

pub mod error;
pub mod payload;

pub use tile_merge_core as core;
pub use tile_merge_types as types;

pub use error::CodecError;
pub use payload::{SavePayload, SaveVersion, SavedSnapshot, SavedState};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::core::{GameState, Grid, Snapshot, StateParts};

/// Capture the full state in the versioned envelope
pub fn serialize(state: &GameState) -> SavePayload {
    SavePayload {
        v: SaveVersion,
        state: SavedState {
            size: state.size() as u32,
            target: state.target(),
            grid: state.grid().to_rows(),
            score: state.score(),
            best: state.best(),
            move_count: u64::from(state.move_count()),
            won: state.won(),
            over: state.over(),
            rng_seed: state.rng_seed(),
            rng_state: state.rng_state(),
            can_undo: state.can_undo(),
            prev: state.prev().map(|p| SavedSnapshot {
                grid: p.grid.to_rows(),
                score: p.score,
                rng_state: p.rng_state,
            }),
        },
    }
}

/// Restore a state from a structured payload; `None` if it is not a usable save
pub fn deserialize(payload: &Value) -> Option<GameState> {
    match decode(payload) {
        Ok(state) => Some(state),
        Err(e) => {
            debug!(error = %e, "rejected save payload");
            None
        }
    }
}

/// Restore a state from a structured payload
pub fn decode(payload: &Value) -> Result<GameState, CodecError> {
    let saved = SavePayload::deserialize(payload)?;
    restore(saved.state)
}

/// Encode a state as a JSON string
pub fn to_json(state: &GameState) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&serialize(state))?)
}

/// Decode a state from a JSON string
pub fn from_json(json: &str) -> Result<GameState, CodecError> {
    let value: Value = serde_json::from_str(json)?;
    decode(&value)
}

fn restore(saved: SavedState) -> Result<GameState, CodecError> {
    let size = saved.size;
    let shape_err = || CodecError::GridShape { size };

    let grid = Grid::from_rows(saved.grid.as_slice()).ok_or_else(shape_err)?;

    // Undo is available only when flagged and the snapshot is present
    let prev = match saved.prev {
        Some(p) if saved.can_undo => {
            let grid = Grid::from_rows(p.grid.as_slice()).ok_or_else(shape_err)?;
            Some(Snapshot::new(grid, p.score, p.rng_state))
        }
        _ => None,
    };

    GameState::from_parts(StateParts {
        size: size as usize,
        target: saved.target,
        grid,
        score: saved.score,
        best: saved.best,
        move_count: u32::try_from(saved.move_count).unwrap_or(u32::MAX),
        won: saved.won,
        over: saved.over,
        rng_seed: saved.rng_seed,
        rng_state: saved.rng_state,
        prev,
    })
    .ok_or_else(shape_err)
}
