//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, move planner, save codec, front-ends).
//!
//! # Board Geometry
//!
//! The board is a square `n × n` grid. Cells are addressed by [`Pos`] as
//! `(row, col)`, with `(0, 0)` in the top-left corner. Row-major order means
//! top-to-bottom, then left-to-right.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SIZE` | 4 | Board edge length |
//! | `DEFAULT_TARGET` | 2048 | Tile magnitude that wins the game |
//! | `DEFAULT_TWO_PROB` | 0.9 | Probability that a spawned tile is a 2 |
//! | `ZERO_SEED_REPLACEMENT` | `0xA5F1523D` | Substitute for a zero RNG seed |
//! | `SAVE_VERSION` | 1 | Version tag of the save envelope |
//!
//! # Examples
//!
//! ```
//! use tile_merge_types::{Direction, SpawnRule, DEFAULT_SIZE};
//!
//! // Parse a direction (case-insensitive, single letters allowed)
//! assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("u"), Some(Direction::Up));
//!
//! // Opposite directions
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! // Spawn rule defaults to 90% twos
//! assert_eq!(SpawnRule::default().two_prob, 0.9);
//! assert_eq!(DEFAULT_SIZE, 4);
//! ```

use std::fmt;

/// Magnitude of a single cell; `0` is an empty cell.
pub type Tile = u32;

/// Default board edge length
pub const DEFAULT_SIZE: usize = 4;

/// Default winning tile magnitude
pub const DEFAULT_TARGET: Tile = 2048;

/// Default probability of spawning a 2 (otherwise a 4)
pub const DEFAULT_TWO_PROB: f64 = 0.9;

/// Non-zero state used whenever a seed or RNG state masks to zero.
pub const ZERO_SEED_REPLACEMENT: u32 = 0xA5F1_523D;

/// Version tag written into (and required from) save envelopes.
pub const SAVE_VERSION: u32 = 1;

/// Value written by a spawn that wins the coin flip.
pub const SPAWN_LOW: Tile = 2;

/// Value written by a spawn that loses the coin flip.
pub const SPAWN_HIGH: Tile = 4;

/// Supported board sizes when reading user settings.
pub const SETTINGS_SIZE_MIN: usize = 3;
pub const SETTINGS_SIZE_MAX: usize = 6;

/// Supported targets when reading user settings.
pub const SETTINGS_TARGET_MIN: Tile = 256;
pub const SETTINGS_TARGET_MAX: Tile = 8192;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(DEFAULT_SIZE, 4);
        assert_eq!(DEFAULT_TARGET, 2048);
        assert_eq!(DEFAULT_TWO_PROB, 0.9);
        assert_eq!(ZERO_SEED_REPLACEMENT, 0xA5F1523D);
        assert_eq!(SAVE_VERSION, 1);
    }

    #[test]
    fn direction_round_trips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("RIGHT"), Some(Direction::Right));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn axis_classification() {
        assert!(Direction::Left.is_horizontal());
        assert!(Direction::Right.is_horizontal());
        assert!(!Direction::Up.is_horizontal());
        assert!(!Direction::Down.is_horizontal());
    }
}

/// The four move directions
///
/// Tiles slide and merge toward the named edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Every direction, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_merge_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("down"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("R"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// The direction pointing at the opposite edge
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for moves along a row (left/right)
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rule deciding which value a newly spawned tile gets
///
/// A spawn writes a 2 with probability `two_prob` and a 4 otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRule {
    pub two_prob: f64,
}

impl SpawnRule {
    pub const fn new(two_prob: f64) -> Self {
        Self { two_prob }
    }
}

impl Default for SpawnRule {
    fn default() -> Self {
        Self {
            two_prob: DEFAULT_TWO_PROB,
        }
    }
}
