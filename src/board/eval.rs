//! Static evaluation: material plus piece-square bonuses.

use super::pst::{base_value, positional_value};
use super::rules::Rules;
use super::types::Side;

/// Evaluation score. Positive is good for the evaluator's perspective side;
/// mates are the infinities.
pub type Score = f64;

/// Score for mating the opponent.
pub const MATE_SCORE: Score = f64::INFINITY;

/// Scores a position from one fixed side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Evaluator {
    perspective: Side,
}

impl Evaluator {
    #[must_use]
    pub const fn new(perspective: Side) -> Self {
        Evaluator { perspective }
    }

    #[must_use]
    pub const fn perspective(&self) -> Side {
        self.perspective
    }

    /// Evaluate `pos`. Does not modify it.
    ///
    /// Checkmate is `+inf` when the perspective side delivered it and `-inf`
    /// when it is the one mated. Stalemate and insufficient material are
    /// exactly `0.0`.
    pub fn evaluate<R: Rules + ?Sized>(&self, pos: &R) -> Score {
        if pos.is_checkmate() {
            return if pos.side_to_move() == self.perspective {
                -MATE_SCORE
            } else {
                MATE_SCORE
            };
        }

        if pos.is_stalemate() || pos.is_insufficient_material() {
            return 0.0;
        }

        pos.occupancy()
            .into_iter()
            .map(|occ| {
                let sign = if occ.side == self.perspective { 1.0 } else { -1.0 };
                sign * (base_value(occ.kind) + positional_value(occ.kind, occ.square, occ.side))
            })
            .sum()
    }
}
