#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Depth settings for the searcher.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchParams {
    /// Depth used when the caller does not ask for one
    pub base_depth: u32,
    /// Depth used once the board has thinned out
    pub endgame_depth: u32,
    /// Piece count (kings included) at or below which `endgame_depth` applies
    pub endgame_piece_limit: usize,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            base_depth: 3,
            endgame_depth: 5,
            endgame_piece_limit: 10,
        }
    }
}
