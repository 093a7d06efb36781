//! Merge module - the slide-and-merge rule for a single line
//!
//! A line is one row of an oriented grid; tiles always travel toward index 0.
//!
//! 1. Compact: drop empty cells, keep the order of the rest.
//! 2. Scan left to right: two equal neighbours become one tile of double value and
//!    the scan skips past both, so a tile produced by a merge is never merged again
//!    in the same move.
//! 3. Pad with zeros back to the line length.
//!
//! `[2, 2, 2, 0]` therefore becomes `[4, 2, 0, 0]` and `[2, 2, 2, 2]` becomes
//! `[4, 4, 0, 0]`.

use crate::types::Tile;

/// Result of sliding one line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineResult {
    pub row: Vec<Tile>,
    /// Sum of the values produced by merges in this line
    pub gained_score: u64,
}

/// What happened to one tile during a slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineMotion {
    /// Moved (or stayed) without merging
    Slide,
    /// First tile of a merged pair; its destination now holds `new_value`
    Survivor { new_value: Tile },
    /// Second tile of a merged pair; it disappears into the survivor
    MergedAway,
}

/// Movement of one tile inside a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineMove {
    /// Index before the slide
    pub from: usize,
    /// Index after the slide
    pub to: usize,
    /// Value before the slide
    pub value: Tile,
    pub motion: LineMotion,
}

/// Slide and merge one line toward index 0.
pub fn slide_and_merge(line: &[Tile]) -> LineResult {
    slide_and_merge_with(line, |_| {})
}

/// Slide and merge one line, reporting the movement of every tile to `on_move`.
///
/// Tiles are reported in scan order; a merged pair reports the survivor first.
pub fn slide_and_merge_with<F>(line: &[Tile], mut on_move: F) -> LineResult
where
    F: FnMut(LineMove),
{
    let n = line.len();
    let compact: Vec<(usize, Tile)> = line
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, v)| v != 0)
        .collect();

    let mut row = Vec::with_capacity(n);
    let mut gained_score = 0u64;

    let mut i = 0;
    while i < compact.len() {
        let (from, value) = compact[i];
        let to = row.len();
        match compact.get(i + 1) {
            Some(&(next_from, next)) if next == value => {
                let merged = value.saturating_mul(2);
                row.push(merged);
                gained_score += u64::from(merged);
                on_move(LineMove {
                    from,
                    to,
                    value,
                    motion: LineMotion::Survivor { new_value: merged },
                });
                on_move(LineMove {
                    from: next_from,
                    to,
                    value: next,
                    motion: LineMotion::MergedAway,
                });
                // Skip the consumed neighbour: one merge per tile per move
                i += 2;
            }
            _ => {
                row.push(value);
                on_move(LineMove {
                    from,
                    to,
                    value,
                    motion: LineMotion::Slide,
                });
                i += 1;
            }
        }
    }

    row.resize(n, 0);
    LineResult { row, gained_score }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(line: &[Tile]) -> (Vec<Tile>, u64) {
        let r = slide_and_merge(line);
        (r.row, r.gained_score)
    }

    #[test]
    fn test_single_merge_per_tile() {
        assert_eq!(slide(&[2, 0, 2, 2]), (vec![4, 2, 0, 0], 4));
        assert_eq!(slide(&[4, 4, 8, 8]), (vec![8, 16, 0, 0], 24));
        assert_eq!(slide(&[2, 2, 2, 2]), (vec![4, 4, 0, 0], 8));
        assert_eq!(slide(&[0, 0, 0, 2]), (vec![2, 0, 0, 0], 0));
        assert_eq!(slide(&[2, 0, 2, 4]), (vec![4, 4, 0, 0], 4));
    }

    #[test]
    fn test_three_equal_leaves_last_unmerged() {
        assert_eq!(slide(&[2, 2, 2, 0]), (vec![4, 2, 0, 0], 4));
    }

    #[test]
    fn test_merged_tile_not_remerged() {
        // 2+2 makes 4, which must not absorb the following 4
        assert_eq!(slide(&[2, 2, 4, 0]), (vec![4, 4, 0, 0], 4));
    }

    #[test]
    fn test_empty_and_single() {
        assert_eq!(slide(&[0, 0, 0, 0]), (vec![0, 0, 0, 0], 0));
        assert_eq!(slide(&[0, 0, 8, 0]), (vec![8, 0, 0, 0], 0));
        assert_eq!(slide(&[]), (vec![], 0));
    }

    #[test]
    fn test_stable_once_no_pairs_remain() {
        let once = slide_and_merge(&[2, 2, 4, 4, 8, 0]);
        let twice = slide_and_merge(&once.row);
        assert_eq!(once.row, vec![4, 8, 8, 0, 0, 0]);
        // Tiles produced by a merge only combine on a later move
        assert_eq!(twice.row, vec![4, 16, 0, 0, 0, 0]);
        let stable = slide_and_merge(&[2, 4, 8, 0]);
        assert_eq!(slide_and_merge(&stable.row), stable);
    }

    #[test]
    fn test_tracked_moves() {
        let mut moves = Vec::new();
        let r = slide_and_merge_with(&[2, 0, 2, 4], |m| moves.push(m));
        assert_eq!(r.row, vec![4, 4, 0, 0]);
        assert_eq!(
            moves,
            vec![
                LineMove {
                    from: 0,
                    to: 0,
                    value: 2,
                    motion: LineMotion::Survivor { new_value: 4 }
                },
                LineMove {
                    from: 2,
                    to: 0,
                    value: 2,
                    motion: LineMotion::MergedAway
                },
                LineMove {
                    from: 3,
                    to: 1,
                    value: 4,
                    motion: LineMotion::Slide
                },
            ]
        );
    }
}
