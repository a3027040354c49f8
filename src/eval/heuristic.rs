//! Single-cell move scoring
//!
//! A candidate cell is judged by two hypothetical line lengths: the longest
//! line the mover would make by playing there, and the longest line the
//! opponent would make by playing there instead. The pair is mapped to a
//! score through a fixed rule list, checked top to bottom, first match wins:
//!
//! 1. mover reaches five: [`CellScore::WIN`]
//! 2. opponent reaches five: [`CellScore::BLOCK_WIN`]
//! 3. mover reaches exactly four: [`CellScore::MAKE_FOUR`]
//! 4. opponent reaches exactly four: [`CellScore::BLOCK_FOUR`]
//! 5. opponent reaches exactly three: [`CellScore::BLOCK_THREE`]
//! 6. otherwise the weighted sum from [`positional_score`]
//!
//! Overlapping tiers are resolved purely by this order.

use crate::board::{Board, Pos, Stone};
use crate::rules::best_line_length;

use super::patterns::{positional_score, CellScore};

/// Map a `(my, opp)` line-length pair to its priority score.
#[must_use]
pub fn score_potentials(my_potential: i32, opp_potential: i32) -> i32 {
    match (my_potential, opp_potential) {
        (5.., _) => CellScore::WIN,
        (_, 5..) => CellScore::BLOCK_WIN,
        (4, _) => CellScore::MAKE_FOUR,
        (_, 4) => CellScore::BLOCK_FOUR,
        (_, 3) => CellScore::BLOCK_THREE,
        _ => positional_score(my_potential, opp_potential),
    }
}

/// Score the empty cell `pos` for `mover`.
///
/// Only meaningful for empty cells; the caller is responsible for that.
#[must_use]
pub fn score_cell(board: &Board, pos: Pos, mover: Stone) -> i32 {
    debug_assert!(board.is_empty(pos));
    let my_potential = best_line_length(board, pos, mover);
    let opp_potential = best_line_length(board, pos, mover.opponent());
    score_potentials(my_potential, opp_potential)
}
