//! Driver configuration tests - argument parsing against the public facade

use tile_merge::cli::{parse_args, Command, Config};
use tile_merge::core::GameState;
use tile_merge::types::Direction;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_script_drives_a_game() {
    let config = parse_args(
        &args(&["--seed", "123", "--size", "3", "l", "u", "undo", "r"]),
        Config::default(),
    )
    .unwrap();

    let mut state = GameState::new(config.params);
    for cmd in &config.commands {
        state = match *cmd {
            Command::Move(dir) => state.try_move_with(dir, &config.params.spawn_rule).next,
            Command::Undo => state.undo(),
        };
    }
    assert_eq!(state.size(), 3);
    assert_eq!(state.rng_seed(), 123);
}

#[test]
fn test_command_tokens() {
    assert_eq!(Command::parse("LEFT"), Some(Command::Move(Direction::Left)));
    assert_eq!(Command::parse("d"), Some(Command::Move(Direction::Down)));
    assert_eq!(Command::parse("Z"), Some(Command::Undo));
    assert_eq!(Command::parse("jump"), None);
}

#[test]
fn test_no_undo_flag() {
    let config = parse_args(&args(&["--no-undo", "undo"]), Config::default()).unwrap();
    assert!(!config.undo_enabled);
    assert_eq!(config.commands, vec![Command::Undo]);
}

#[test]
fn test_error_messages_name_the_flag() {
    let err = parse_args(&args(&["--target"]), Config::default()).unwrap_err();
    assert!(err.to_string().contains("--target"));
    let err = parse_args(&args(&["--best", "-5"]), Config::default()).unwrap_err();
    assert!(err.to_string().contains("--best"));
}
