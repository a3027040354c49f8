//! Five-in-a-row against a heuristic computer player
//!
//! A 15x15 Gomoku game: the human plays Black, the computer plays White,
//! and the first unbroken line of five or more stones wins. A full board
//! with no five is a draw.
//!
//! # Architecture
//!
//! - [`board`]: grid state, the only place stones are stored
//! - [`rules`]: line counting and five-in-a-row detection
//! - [`eval`]: priority score of a single empty cell
//! - [`engine`]: the computer player (best score, random tie-break)
//! - [`game`]: turn order, win/draw detection, reset
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, GameController, GameStatus, Stone};
//!
//! let mut game = GameController::with_engine(AIEngine::with_seed(1));
//! game.human_move(7, 7).unwrap();
//! assert_eq!(game.status(), GameStatus::InProgress(Stone::White));
//!
//! let reply = game.trigger_computer_move().unwrap();
//! println!("computer plays {}", reply);
//! assert_eq!(game.status(), GameStatus::InProgress(Stone::Black));
//! ```
//!
//! # Computer priorities
//!
//! For every empty cell the engine looks at the longest line it would make
//! for itself and for the human, then ranks cells in this order:
//! 1. Win now
//! 2. Block the human's five
//! 3. Make a four
//! 4. Block the human's four
//! 5. Block the human's three
//! 6. Weighted line lengths

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::AppConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::GameError;
pub use game::{GameController, GameStatus, StatusMessage};
