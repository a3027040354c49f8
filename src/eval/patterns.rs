//! Priority scores for candidate cells
//!
//! Each named tier outranks everything below it. The positional fallback
//! (`my * MY_WEIGHT + opp * OPP_WEIGHT`) stays far below `BLOCK_THREE` for any
//! line length the board can produce.

/// Scores returned by [`super::score_cell`]
pub struct CellScore;

impl CellScore {
    /// Placing here completes the mover's five
    pub const WIN: i32 = 10_000;
    /// Opponent would complete five here next turn
    pub const BLOCK_WIN: i32 = 9_000;
    /// Placing here makes a four for the mover
    pub const MAKE_FOUR: i32 = 8_500;
    /// Opponent would make a four here
    pub const BLOCK_FOUR: i32 = 8_000;
    /// Opponent would make a three here
    pub const BLOCK_THREE: i32 = 5_000;

    /// Per-stone weight of the mover's own line in the fallback score
    pub const MY_WEIGHT: i32 = 10;
    /// Per-stone weight of the opponent's line in the fallback score
    pub const OPP_WEIGHT: i32 = 8;
}

/// Fallback score for cells that hit none of the named tiers
#[inline]
pub fn positional_score(my_potential: i32, opp_potential: i32) -> i32 {
    my_potential * CellScore::MY_WEIGHT + opp_potential * CellScore::OPP_WEIGHT
}
