//! RNG module - seeded Mulberry32 generator
//!
//! The whole engine draws randomness from a single `u32` state that travels inside
//! the game state. Every draw returns the advanced state explicitly, so replaying the
//! same calls from the same state reproduces the same outputs on every platform.
//!
//! Algorithm (Mulberry32): the state advances by the constant `0x6D2B79F5`, and the
//! new state is mixed through multiply/xor/shift rounds into a 32-bit output that is
//! normalized to `[0, 1)`.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::ZERO_SEED_REPLACEMENT;

const INCREMENT: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32 generator over an explicit `u32` state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a seed, remapping the degenerate zero seed
    pub fn new(seed: u32) -> Self {
        Self {
            state: normalize_seed(Some(seed)),
        }
    }

    /// Resume from a previously captured state, as-is
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current state (serializable)
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Generate next raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Generate next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// Generate an integer in `[0, max_exclusive)`.
    ///
    /// `max_exclusive` must be positive; for 0 the result is 0.
    pub fn next_int(&mut self, max_exclusive: usize) -> usize {
        (self.next_f64() * max_exclusive as f64).floor() as usize
    }

    /// Biased coin: true with probability `p`
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

/// Turn an optional seed into a valid non-zero state.
///
/// Without a seed the low 32 bits of the wall clock (milliseconds) are used.
pub fn normalize_seed(seed: Option<u32>) -> u32 {
    let s = seed.unwrap_or_else(wall_clock_seed);
    if s == 0 {
        ZERO_SEED_REPLACEMENT
    } else {
        s
    }
}

fn wall_clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(ZERO_SEED_REPLACEMENT)
}

/// Advance `state` one step, returning the value in `[0, 1)` and the next state
pub fn next_rng(state: u32) -> (f64, u32) {
    let mut rng = Mulberry32::from_state(state);
    let value = rng.next_f64();
    (value, rng.state())
}

/// Integer in `[0, max_exclusive)` and the next state
pub fn next_int(state: u32, max_exclusive: usize) -> (usize, u32) {
    let mut rng = Mulberry32::from_state(state);
    let value = rng.next_int(max_exclusive);
    (value, rng.state())
}

/// Whether a draw landed below `p`, and the next state
pub fn chance(state: u32, p: f64) -> (bool, u32) {
    let mut rng = Mulberry32::from_state(state);
    let hit = rng.chance(p);
    (hit, rng.state())
}
