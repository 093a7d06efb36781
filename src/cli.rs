//! Command line configuration for the headless driver.
//!
//! ```text
//! tile-merge [--size N] [--target N] [--seed N] [--two-prob P] [--best N]
//!            [--no-undo] [--load FILE] [MOVE...]
//! ```
//!
//! Moves are `up`/`down`/`left`/`right` (or `u`/`d`/`l`/`r`) and `undo` (or `z`).
//! `TILE_MERGE_SEED` and `TILE_MERGE_UNDO` provide defaults that flags override.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::core::NewGameParams;
use crate::types::{
    Direction, SpawnRule, Tile, SETTINGS_SIZE_MAX, SETTINGS_SIZE_MIN, SETTINGS_TARGET_MAX,
    SETTINGS_TARGET_MIN,
};

/// One token of the move script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Undo,
}

impl Command {
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "undo" | "z" => Some(Command::Undo),
            other => Direction::from_str(other).map(Command::Move),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub params: NewGameParams,
    pub undo_enabled: bool,
    /// Resume from a save file instead of starting a new game
    pub load: Option<PathBuf>,
    pub commands: Vec<Command>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            params: NewGameParams::default(),
            undo_enabled: true,
            load: None,
            commands: Vec::new(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        use std::env;

        let seed = env::var("TILE_MERGE_SEED")
            .ok()
            .and_then(|s| s.trim().parse::<u32>().ok());
        let undo = env::var("TILE_MERGE_UNDO").ok();
        Self::with_overrides(seed, undo.as_deref())
    }

    fn with_overrides(seed: Option<u32>, undo: Option<&str>) -> Self {
        let mut config = Self::default();
        config.params.seed = seed;
        if let Some(v) = undo {
            let v = v.trim().to_ascii_lowercase();
            config.undo_enabled = !matches!(v.as_str(), "0" | "false");
        }
        config
    }
}

/// Parse arguments (program name excluded) on top of `base`.
pub fn parse_args(args: &[String], base: Config) -> Result<Config> {
    let mut config = base;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                let v = value(args, &mut i, "--size")?;
                let n: i64 = parse_number(v, "--size")?;
                let (lo, hi) = (SETTINGS_SIZE_MIN as i64, SETTINGS_SIZE_MAX as i64);
                config.params.size = n.clamp(lo, hi) as usize;
            }
            "--target" => {
                let v = value(args, &mut i, "--target")?;
                let n: i64 = parse_number(v, "--target")?;
                let (lo, hi) = (SETTINGS_TARGET_MIN, SETTINGS_TARGET_MAX);
                config.params.target = n.clamp(i64::from(lo), i64::from(hi)) as Tile;
            }
            "--seed" => {
                let v = value(args, &mut i, "--seed")?;
                config.params.seed = Some(parse_number(v, "--seed")?);
            }
            "--two-prob" => {
                let v = value(args, &mut i, "--two-prob")?;
                let p: f64 = parse_number(v, "--two-prob")?;
                if p.is_nan() {
                    return Err(anyhow!("tile-merge: invalid --two-prob value: {}", v));
                }
                config.params.spawn_rule = SpawnRule::new(p.clamp(0.0, 1.0));
            }
            "--best" => {
                let v = value(args, &mut i, "--best")?;
                config.params.best = parse_number(v, "--best")?;
            }
            "--no-undo" => config.undo_enabled = false,
            "--load" => {
                let v = value(args, &mut i, "--load")?;
                config.load = Some(PathBuf::from(v));
            }
            other if other.starts_with("--") => {
                return Err(anyhow!("tile-merge: unknown argument: {}", other));
            }
            token => {
                let cmd = Command::parse(token)
                    .ok_or_else(|| anyhow!("tile-merge: unknown move: {}", token))?;
                config.commands.push(cmd);
            }
        }
        i += 1;
    }
    Ok(config)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("tile-merge: missing value for {}", flag))
}

fn parse_number<T: std::str::FromStr>(v: &str, flag: &str) -> Result<T> {
    v.trim()
        .parse::<T>()
        .map_err(|_| anyhow!("tile-merge: invalid {} value: {}", flag, v))
}
