//! Game rules: five or more in a row wins, no captures, no forbidden moves.

pub mod win;

pub use win::{best_line_length, count_line, find_win_line, has_win_at, DIRECTIONS};
