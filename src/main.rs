//! Headless tile merge driver (default binary).
//!
//! Starts a game (or resumes one with `--load`), plays the move script given on the
//! command line, and prints the final save payload as JSON on stdout. Logs go to
//! stderr and are filtered with `RUST_LOG`.

use std::fs;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use tile_merge::cli::{parse_args, Command, Config};
use tile_merge::codec::{from_json, to_json};
use tile_merge::core::GameState;

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args, Config::from_env())?;

    let state = run(&config)?;
    println!("{}", to_json(&state).context("encode final state")?);
    Ok(())
}

fn run(config: &Config) -> Result<GameState> {
    let mut state = match &config.load {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("read save file {}", path.display()))?;
            let state = from_json(&json)
                .with_context(|| format!("load save file {}", path.display()))?;
            info!(path = %path.display(), score = state.score(), "resumed game");
            state
        }
        None => GameState::new(config.params),
    };

    for cmd in &config.commands {
        match *cmd {
            Command::Move(dir) => {
                let result = state.try_move_with(dir, &config.params.spawn_rule);
                debug!(
                    direction = %dir,
                    changed = result.changed,
                    gained = result.gained_score,
                    "moved"
                );
                if let Some(spawned) = result.spawned {
                    debug!(pos = %spawned.pos, value = spawned.value, "spawned tile");
                }
                state = result.next;
            }
            Command::Undo if config.undo_enabled => state = state.undo(),
            Command::Undo => warn!("undo is disabled; ignoring"),
        }
    }

    info!(
        score = state.score(),
        best = state.best(),
        moves = state.move_count(),
        won = state.won(),
        over = state.over(),
        "finished"
    );
    Ok(state)
}
