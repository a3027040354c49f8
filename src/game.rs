//! Turn order and game lifecycle
//!
//! [`GameController`] owns the only board in a session. The human plays
//! Black, the computer plays White, Black moves first. A game is
//! `InProgress` until a five is made (`Won`) or the computer finds no empty
//! cell (`Draw`). After that only [`GameController::reset`] changes anything.
//!
//! The computer's move is not scheduled here. The presentation layer calls
//! [`GameController::trigger_computer_move`] whenever it wants the computer
//! to play, and the call re-checks the status first, so a trigger that
//! arrives after a reset or a finished game is a rejected no-op.

use rand::rngs::StdRng;
use rand::Rng;
use std::fmt;

use crate::board::{Board, Pos, Stone};
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::{find_win_line, has_win_at};

/// Color played by the human
pub const HUMAN: Stone = Stone::Black;
/// Color played by the computer
pub const COMPUTER: Stone = Stone::White;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Waiting for the given color to move
    InProgress(Stone),
    Won(Stone),
    Draw,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// Status line shown to the player after every transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    PlaceYourStone,
    Turn(Stone),
    Wins(Stone),
    Draw,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::PlaceYourStone => write!(f, "Place your stone"),
            StatusMessage::Turn(color) => write!(f, "{}'s turn", color.name()),
            StatusMessage::Wins(color) => write!(f, "{} wins", color.name()),
            StatusMessage::Draw => write!(f, "Draw"),
        }
    }
}

/// Single-session game state machine
pub struct GameController<R = StdRng> {
    board: Board,
    status: GameStatus,
    engine: AIEngine<R>,
    move_history: Vec<(Pos, Stone)>,
    winning_line: Option<[Pos; 5]>,
    last_ai_result: Option<MoveResult>,
}

impl GameController<StdRng> {
    pub fn new() -> Self {
        Self::with_engine(AIEngine::new())
    }
}

impl Default for GameController<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> GameController<R> {
    pub fn with_engine(engine: AIEngine<R>) -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress(HUMAN),
            engine,
            move_history: Vec::new(),
            winning_line: None,
            last_ai_result: None,
        }
    }

    /// Start a position mid-game (test setups only)
    #[cfg(test)]
    pub(crate) fn with_position(board: Board, turn: Stone, engine: AIEngine<R>) -> Self {
        let mut game = Self::with_engine(engine);
        game.board = board;
        game.status = GameStatus::InProgress(turn);
        game
    }

    /// Back to an empty board with Black to move
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.status = GameStatus::InProgress(HUMAN);
        self.move_history.clear();
        self.winning_line = None;
        self.last_ai_result = None;
        tracing::info!("new game");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Color to move, or `None` once the game is over
    pub fn turn(&self) -> Option<Stone> {
        match self.status {
            GameStatus::InProgress(turn) => Some(turn),
            _ => None,
        }
    }

    pub fn is_human_turn(&self) -> bool {
        self.status == GameStatus::InProgress(HUMAN)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.status == GameStatus::InProgress(COMPUTER)
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().map(|&(pos, _)| pos)
    }

    pub fn move_count(&self) -> usize {
        self.move_history.len()
    }

    pub fn move_history(&self) -> &[(Pos, Stone)] {
        &self.move_history
    }

    /// The five stones to highlight once someone has won
    pub fn winning_line(&self) -> Option<[Pos; 5]> {
        self.winning_line
    }

    pub fn last_ai_result(&self) -> Option<&MoveResult> {
        self.last_ai_result.as_ref()
    }

    pub fn message(&self) -> StatusMessage {
        match self.status {
            GameStatus::InProgress(turn) if turn == HUMAN => StatusMessage::PlaceYourStone,
            GameStatus::InProgress(turn) => StatusMessage::Turn(turn),
            GameStatus::Won(color) => StatusMessage::Wins(color),
            GameStatus::Draw => StatusMessage::Draw,
        }
    }

    /// Human move at `(x, y)`
    pub fn human_move(&mut self, x: i32, y: i32) -> Result<GameStatus, GameError> {
        self.place(x, y, HUMAN)
    }

    /// Place `color` at `(x, y)` if it is that color's turn.
    ///
    /// Any rejection leaves the game untouched.
    pub fn place(&mut self, x: i32, y: i32, color: Stone) -> Result<GameStatus, GameError> {
        if self.status != GameStatus::InProgress(color) {
            return Err(GameError::WrongTurn);
        }
        let pos = Pos::from_xy(x, y)?;
        self.apply(pos, color)
    }

    /// Let the computer play its turn.
    ///
    /// Rejected with [`GameError::WrongTurn`] unless White is to move. A full
    /// board ends the game as a draw and is reported as
    /// [`GameError::NoMoveAvailable`].
    pub fn trigger_computer_move(&mut self) -> Result<Pos, GameError> {
        if !self.is_computer_turn() {
            return Err(GameError::WrongTurn);
        }

        let result = match self.engine.select_move(&self.board, COMPUTER) {
            Ok(result) => result,
            Err(err) => {
                self.status = GameStatus::Draw;
                tracing::info!("board full, game drawn");
                return Err(err);
            }
        };

        let pos = result.best_move;
        self.last_ai_result = Some(result);
        self.apply(pos, COMPUTER)?;
        Ok(pos)
    }

    fn apply(&mut self, pos: Pos, color: Stone) -> Result<GameStatus, GameError> {
        self.board.place(pos, color)?;
        self.move_history.push((pos, color));
        tracing::debug!(color = color.name(), %pos, "stone placed");

        self.status = if has_win_at(&self.board, pos, color) {
            self.winning_line = find_win_line(&self.board, pos, color);
            tracing::info!(winner = color.name(), moves = self.move_history.len(), "game won");
            GameStatus::Won(color)
        } else {
            GameStatus::InProgress(color.opponent())
        };
        Ok(self.status)
    }
}
