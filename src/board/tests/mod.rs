//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `make_unmake.rs` - Apply/undo correctness and move input
//! - `draw.rs` - Game results and draw detection
//! - `pst.rs` - Piece-square table layout
//! - `eval.rs` - Static evaluation
//! - `search.rs` - Alpha-beta search behaviour
//! - `proptest.rs` - Property-based tests
//! - `tree.rs` - Search over a hand-built game tree

mod pst;

use super::{Evaluator, Game, Move, Rules, Score, MATE_SCORE};

pub(super) fn game(fen: &str) -> Game {
    Game::from_fen(fen).expect("valid fen")
}

/// Plain minimax without pruning, mirroring the searcher's root rules
/// (immediate mate short-circuit, first move wins ties).
///
/// Returns the chosen move, its score and the number of nodes visited.
pub(super) fn naive_search(
    evaluator: &Evaluator,
    pos: &mut Game,
    depth: u32,
) -> (Option<Move>, Score, u64) {
    fn minimax(
        evaluator: &Evaluator,
        pos: &mut Game,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> Score {
        *nodes += 1;
        if depth == 0 || pos.is_game_over() {
            return evaluator.evaluate(pos);
        }
        let mut best = if maximizing { -MATE_SCORE } else { MATE_SCORE };
        for mv in pos.legal_moves() {
            pos.apply_move(&mv);
            let value = minimax(evaluator, pos, depth - 1, !maximizing, nodes);
            pos.undo_move();
            best = if maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }

    let mut nodes = 0;
    let mut best_move = None;
    let mut best_score = -MATE_SCORE;
    for mv in pos.legal_moves() {
        pos.apply_move(&mv);
        if pos.is_checkmate() {
            pos.undo_move();
            return (Some(mv), MATE_SCORE, nodes);
        }
        let value = minimax(evaluator, pos, depth.saturating_sub(1), false, &mut nodes);
        pos.undo_move();
        if best_move.is_none() || value > best_score {
            best_score = value;
            best_move = Some(mv);
        }
    }
    (best_move, best_score, nodes)
}
