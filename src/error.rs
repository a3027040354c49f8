use crate::board::Pos;

/// Reasons a move is rejected. None of these are fatal: every one leaves the
/// game exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("cell {0} is already occupied")]
    CellOccupied(Pos),

    #[error("not your turn")]
    WrongTurn,

    /// Board is full when the computer is asked to move; treated as a draw.
    #[error("no empty cell left")]
    NoMoveAvailable,
}
