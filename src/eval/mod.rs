//! Evaluation module: scores candidate cells for the computer player.

pub mod heuristic;
pub mod patterns;

pub use heuristic::{score_cell, score_potentials};
pub use patterns::{positional_score, CellScore};
