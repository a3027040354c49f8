//! Line scanning and five-in-a-row detection
//!
//! Every scan treats the origin cell as if it already held `color`, whatever
//! it actually contains. The same code therefore answers both "did the stone
//! just placed here win?" and "what would a stone here make?".

use crate::board::{Board, Pos, Stone, BOARD_SIZE, WIN_LENGTH};

/// Direction vectors `(dr, dc)` for the four line axes.
/// Each axis is scanned both ways, so one vector per axis is enough.
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (-1, 1), // Diagonal NE
];

/// A five-in-a-row never needs more than four cells on either side of the new stone.
const WIN_REACH: i32 = WIN_LENGTH - 1;

/// Count `color` stones strictly outward from `pos` along `(dr, dc)`,
/// looking at most `reach` cells away.
#[inline]
fn run_length(board: &Board, pos: Pos, color: Stone, (dr, dc): (i32, i32), reach: i32) -> i32 {
    (1..=reach)
        .map_while(|dist| pos.offset(dr, dc, dist))
        .take_while(|&p| board.get(p) == color)
        .count() as i32
}

#[inline]
fn count_line_within(board: &Board, pos: Pos, color: Stone, (dr, dc): (i32, i32), reach: i32) -> i32 {
    1 + run_length(board, pos, color, (dr, dc), reach)
        + run_length(board, pos, color, (-dr, -dc), reach)
}

/// Length of the `color` line through `pos` on the axis `(dr, dc)`.
///
/// The origin counts as one stone, so a lone stone yields 1. Scanning
/// stops at the board edge or the first cell that is not `color`.
pub fn count_line(board: &Board, pos: Pos, color: Stone, dir: (i32, i32)) -> i32 {
    count_line_within(board, pos, color, dir, BOARD_SIZE as i32)
}

/// True iff `pos` sits on a line of five or more `color` stones.
#[inline]
pub fn has_win_at(board: &Board, pos: Pos, color: Stone) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| count_line_within(board, pos, color, dir, WIN_REACH) >= WIN_LENGTH)
}

/// Longest `color` line a stone at `pos` would be part of.
///
/// Not clamped: a cell joining two long runs can report more than five.
pub fn best_line_length(board: &Board, pos: Pos, color: Stone) -> i32 {
    DIRECTIONS
        .iter()
        .map(|&dir| count_line(board, pos, color, dir))
        .max()
        .unwrap_or(1)
}

/// Find five consecutive `color` stones through `pos`, if there are any.
///
/// For an overline the window is chosen so that it still contains `pos`.
pub fn find_win_line(board: &Board, pos: Pos, color: Stone) -> Option<[Pos; 5]> {
    for (dr, dc) in DIRECTIONS {
        let back = run_length(board, pos, color, (-dr, -dc), WIN_REACH);
        let total = 1 + back + run_length(board, pos, color, (dr, dc), WIN_REACH);
        if total < WIN_LENGTH {
            continue;
        }

        let start = back.min(total - WIN_LENGTH);
        let first = pos.offset(-dr, -dc, back - start)?;
        let mut line = [first; 5];
        for (i, cell) in line.iter_mut().enumerate() {
            *cell = first.offset(dr, dc, i as i32)?;
        }
        return Some(line);
    }
    None
}
