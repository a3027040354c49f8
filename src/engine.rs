//! Computer player
//!
//! The engine makes one pass over the board: every empty cell is scored with
//! [`score_cell`], the running maximum and every cell that reaches it are
//! kept, and one of those cells is picked uniformly at random. There is no
//! lookahead.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut engine = AIEngine::with_seed(7);
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.select_move(&board, Stone::White).unwrap();
//! assert!(board.is_empty(result.best_move));
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::eval::score_cell;

/// Outcome of one move selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen cell
    pub best_move: Pos,
    /// Score shared by every cell in the maximal set
    pub score: i32,
    /// Size of the maximal set the move was drawn from
    pub candidates: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

/// Heuristic computer player.
///
/// Generic over the random source so tests can pin tie-breaks with a seed.
pub struct AIEngine<R = StdRng> {
    rng: R,
}

impl AIEngine<StdRng> {
    /// Engine seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Engine with reproducible tie-breaks.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for AIEngine<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIEngine<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a move for `mover`.
    ///
    /// Returns [`GameError::NoMoveAvailable`] when the board has no empty
    /// cell; the caller treats that as a draw.
    pub fn select_move(&mut self, board: &Board, mover: Stone) -> Result<MoveResult, GameError> {
        let start = Instant::now();
        let (score, candidates) = best_candidates(board, mover);
        if candidates.is_empty() {
            return Err(GameError::NoMoveAvailable);
        }

        let best_move = candidates[self.rng.random_range(0..candidates.len())];
        let result = MoveResult {
            best_move,
            score,
            candidates: candidates.len(),
            time_ms: start.elapsed().as_millis() as u64,
        };
        tracing::debug!(
            mover = mover.name(),
            %best_move,
            score,
            ties = result.candidates,
            "computer move selected"
        );
        Ok(result)
    }
}

/// Highest cell score for `mover` and every empty cell that reaches it,
/// in row-major order. The list is empty only when the board is full.
pub fn best_candidates(board: &Board, mover: Stone) -> (i32, Vec<Pos>) {
    let mut best_score = i32::MIN;
    let mut candidates = Vec::new();

    for pos in board.empty_cells() {
        let score = score_cell(board, pos, mover);
        if score > best_score {
            best_score = score;
            candidates.clear();
            candidates.push(pos);
        } else if score == best_score {
            candidates.push(pos);
        }
    }

    (best_score, candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};
    use crate::eval::CellScore;

    /// Fill the board, except `hole`, with a pattern that has no five anywhere:
    /// column pairs alternate color and the pattern shifts every row.
    fn drawn_board_without(hole: Option<Pos>) -> Board {
        let mut board = Board::new();
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                if Some(pos) == hole {
                    continue;
                }
                let stone = if ((col / 2) + row) % 2 == 0 { Stone::Black } else { Stone::White };
                board.place(pos, stone).unwrap();
            }
        }
        board
    }

    fn drawn_board() -> Board {
        drawn_board_without(None)
    }

    #[test]
    fn test_empty_board_all_tied() {
        let board = Board::new();
        let (score, candidates) = best_candidates(&board, Stone::White);
        assert_eq!(score, 18);
        assert_eq!(candidates.len(), TOTAL_CELLS);
    }

    #[test]
    fn test_takes_winning_move() {
        let mut board = Board::new();
        for c in 3..7 {
            board.place(Pos::new(4, c), Stone::White).unwrap();
        }
        board.place(Pos::new(4, 2), Stone::Black).unwrap();

        let mut engine = AIEngine::with_seed(1);
        let result = engine.select_move(&board, Stone::White).unwrap();
        assert_eq!(result.best_move, Pos::new(4, 7));
        assert_eq!(result.score, CellScore::WIN);
        assert_eq!(result.candidates, 1);
    }

    #[test]
    fn test_blocks_open_three() {
        let mut board = Board::new();
        for c in 5..8 {
            board.place(Pos::new(5, c), Stone::Black).unwrap();
        }
        board.place(Pos::new(0, 0), Stone::White).unwrap();

        let (score, candidates) = best_candidates(&board, Stone::White);
        assert_eq!(score, CellScore::BLOCK_FOUR);
        assert_eq!(candidates, vec![Pos::new(5, 4), Pos::new(5, 8)]);
    }

    #[test]
    fn test_never_selects_occupied() {
        let mut board = Board::new();
        let mut engine = AIEngine::with_seed(42);
        let mut color = Stone::Black;
        for _ in 0..60 {
            let result = engine.select_move(&board, color).unwrap();
            assert!(board.is_empty(result.best_move));
            board.place(result.best_move, color).unwrap();
            color = color.opponent();
        }
    }

    #[test]
    fn test_single_empty_cell() {
        let hole = Pos::new(9, 4);
        let board = drawn_board_without(Some(hole));

        for seed in 0..10 {
            let mut engine = AIEngine::with_seed(seed);
            let result = engine.select_move(&board, Stone::White).unwrap();
            assert_eq!(result.best_move, hole);
            assert_eq!(result.candidates, 1);
        }
    }

    #[test]
    fn test_full_board_no_move() {
        let board = drawn_board();
        assert!(board.is_full());
        let mut engine = AIEngine::with_seed(0);
        assert_eq!(engine.select_move(&board, Stone::White), Err(GameError::NoMoveAvailable));
        assert!(best_candidates(&board, Stone::Black).1.is_empty());
    }

    #[test]
    fn test_drawn_board_has_no_five() {
        let board = drawn_board();
        for idx in 0..TOTAL_CELLS {
            let pos = Pos::from_index(idx);
            assert!(!crate::rules::has_win_at(&board, pos, board.get(pos)), "five at {}", pos);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let board = Board::new();
        let a = AIEngine::with_seed(99).select_move(&board, Stone::White).unwrap();
        let b = AIEngine::with_seed(99).select_move(&board, Stone::White).unwrap();
        assert_eq!(a.best_move, b.best_move);
    }
}
