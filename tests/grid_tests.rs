//! Grid and rule tests - geometry, win and stalemate detection

use tile_merge::core::{has_moves, has_won, terminal_flags, Grid};
use tile_merge::types::{Direction, Pos, Tile};

fn grid4(rows: [[Tile; 4]; 4]) -> Grid {
    Grid::from_rows(&rows).unwrap()
}

const STALEMATE: [[Tile; 4]; 4] = [
    [2, 4, 8, 16],
    [32, 64, 128, 256],
    [2, 4, 8, 16],
    [32, 64, 128, 256],
];

const COUNTING: [[Tile; 4]; 4] = [
    [1, 2, 3, 4],
    [5, 6, 7, 8],
    [9, 10, 11, 12],
    [13, 14, 15, 16],
];

#[test]
fn test_new_grid_is_empty() {
    for size in 3..=6 {
        let g = Grid::new(size);
        assert_eq!(g.size(), size);
        assert_eq!(g.tile_count(), 0);
        assert_eq!(g.empty_cells().len(), size * size);
        assert_eq!(g.max_tile(), 0);
    }
}

#[test]
fn test_from_rows_requires_square() {
    assert!(Grid::from_rows(&[vec![0, 0], vec![0]]).is_none());
    assert!(Grid::from_rows(&[vec![0, 0, 0], vec![0, 0, 0]]).is_none());
    let g = Grid::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
    assert_eq!(g.to_rows(), vec![vec![1, 2], vec![3, 4]]);
}

#[test]
fn test_get_set_bounds() {
    let mut g = Grid::new(3);
    assert!(g.set(Pos::new(2, 1), 8));
    assert_eq!(g.get(Pos::new(2, 1)), Some(8));
    assert!(!g.set(Pos::new(3, 0), 2));
    assert_eq!(g.get(Pos::new(0, 3)), None);
}

#[test]
fn test_empty_cells_row_major() {
    let g = grid4([[2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 0, 2], [2, 2, 2, 2]]);
    assert_eq!(g.empty_cells(), vec![Pos::new(0, 1), Pos::new(2, 2)]);
}

#[test]
fn test_transpose_twice_is_identity() {
    let g = grid4(COUNTING);
    assert_eq!(g.transpose().get(Pos::new(0, 1)), Some(5));
    assert_eq!(g.transpose().transpose(), g);
    assert_eq!(g.reverse_rows().reverse_rows(), g);
}

#[test]
fn test_orientation_round_trips() {
    let g = grid4(COUNTING);
    for dir in Direction::ALL {
        assert_eq!(g.oriented(dir).restored(dir), g, "{}", dir);
    }
    // Row 0 of each view is the line that slides toward the board edge
    assert_eq!(g.oriented(Direction::Left).row(0), &[1, 2, 3, 4]);
    assert_eq!(g.oriented(Direction::Right).row(0), &[4, 3, 2, 1]);
    assert_eq!(g.oriented(Direction::Up).row(0), &[1, 5, 9, 13]);
    assert_eq!(g.oriented(Direction::Down).row(0), &[13, 9, 5, 1]);
}

#[test]
fn test_stalemate_grid_has_no_moves() {
    let g = grid4(STALEMATE);
    assert!(!has_moves(&g));
    assert_eq!(terminal_flags(&g, 2048), (false, true));
}

#[test]
fn test_equal_pair_or_hole_keeps_game_alive() {
    let mut rows = STALEMATE;
    rows[3][3] = 128;
    assert!(has_moves(&grid4(rows)));

    let mut rows = STALEMATE;
    rows[2][0] = 32;
    assert!(has_moves(&grid4(rows)));

    let mut rows = STALEMATE;
    rows[1][1] = 0;
    assert!(has_moves(&grid4(rows)));
}

#[test]
fn test_has_won_threshold() {
    let mut g = Grid::new(4);
    assert!(!has_won(&g, 2048));
    g.set(Pos::new(3, 2), 2048);
    assert!(has_won(&g, 2048));
    assert!(!has_won(&g, 4096));
    g.set(Pos::new(0, 0), 4096);
    assert!(has_won(&g, 4096));
}

#[test]
fn test_win_takes_precedence_over_stalemate() {
    let mut rows = STALEMATE;
    rows[0][0] = 2048;
    let g = grid4(rows);
    assert!(!has_moves(&g));
    assert_eq!(terminal_flags(&g, 2048), (true, false));
}
