//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! Features:
//! - Adaptive depth: deeper search once few pieces remain
//! - Immediate-mate short-circuit at the root
//! - Stable move choice: the first move reaching the best score wins ties
//! - Node and cutoff counters for diagnostics
//!
//! The position is mutated in place and every applied move is undone before
//! the call that applied it returns, so a search leaves the position exactly
//! as it found it.

mod params;
mod report;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::eval::{Evaluator, Score, MATE_SCORE};
use super::rules::{with_move, Rules};
use super::types::Side;

pub use params::SearchParams;
pub use report::{LogLogger, NullLogger, SearchInfo, SearchLogger};

/// Counters collected during one top-level search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Minimax invocations, leaves included
    pub nodes: u64,
    /// Times a ply stopped early on `beta <= alpha`
    pub cutoffs: u64,
}

impl SearchStats {
    pub fn reset(&mut self) {
        self.nodes = 0;
        self.cutoffs = 0;
    }

    /// Cutoffs as a percentage of nodes visited (0 when nothing was searched).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn prune_percent(&self) -> f64 {
        if self.nodes == 0 {
            0.0
        } else {
            100.0 * self.cutoffs as f64 / self.nodes as f64
        }
    }
}

/// Result of a top-level search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// The chosen move, `None` when the side to move has no legal move
    pub best_move: Option<M>,
    /// Score of the chosen move from the searcher's perspective
    pub score: Score,
    /// Depth actually searched
    pub depth: u32,
    pub stats: SearchStats,
}

/// Chooses moves for one side.
///
/// Each searcher owns its counters. Concurrent searches need one searcher and
/// one position each.
pub struct Searcher {
    evaluator: Evaluator,
    params: SearchParams,
    stats: SearchStats,
    logger: Box<dyn SearchLogger>,
}

impl Searcher {
    /// Searcher scoring positions for `side`, with default depths.
    #[must_use]
    pub fn new(side: Side) -> Self {
        Self::with_params(side, SearchParams::default())
    }

    #[must_use]
    pub fn with_params(side: Side, params: SearchParams) -> Self {
        Searcher {
            evaluator: Evaluator::new(side),
            params,
            stats: SearchStats::default(),
            logger: Box::new(LogLogger),
        }
    }

    /// Replace the diagnostics hook.
    #[must_use]
    pub fn with_logger(mut self, logger: impl SearchLogger + 'static) -> Self {
        self.logger = Box::new(logger);
        self
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.evaluator.perspective()
    }

    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Counters from the most recent search.
    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Pick a move at the configured base depth.
    pub fn choose_move<R: Rules>(&mut self, pos: &mut R) -> Option<R::Move> {
        let depth = self.params.base_depth;
        self.choose_move_with_depth(pos, depth)
    }

    /// Pick a move searching `depth` plies (subject to the endgame override).
    pub fn choose_move_with_depth<R: Rules>(&mut self, pos: &mut R, depth: u32) -> Option<R::Move> {
        self.search(pos, depth).best_move
    }

    /// Depth a search asked for `requested` plies will actually use.
    #[must_use]
    pub fn effective_depth<R: Rules>(&self, pos: &R, requested: u32) -> u32 {
        if pos.piece_count() <= self.params.endgame_piece_limit {
            self.params.endgame_depth
        } else {
            requested
        }
    }

    /// Full top-level search with the endgame depth override.
    pub fn search<R: Rules>(&mut self, pos: &mut R, depth: u32) -> SearchResult<R::Move> {
        let depth = self.effective_depth(pos, depth);
        self.search_fixed_depth(pos, depth)
    }

    /// Top-level search at exactly `depth` plies.
    ///
    /// Depth 0 scores the immediate successors only.
    ///
    /// Only the absence of legal moves yields `None`. A root that is already
    /// drawn by insufficient material, the seventy-five-move rule or
    /// repetition still gets a move; callers check
    /// [`Rules::is_game_over`] first when that matters.
    pub fn search_fixed_depth<R: Rules>(&mut self, pos: &mut R, depth: u32) -> SearchResult<R::Move> {
        self.stats.reset();

        if pos.side_to_move() != self.side() {
            log::warn!(
                "searching for {} while {} is to move",
                self.side(),
                pos.side_to_move()
            );
        }

        let child_depth = depth.saturating_sub(1);
        let mut best_move = None;
        let mut best_score = -MATE_SCORE;
        let mut alpha = -MATE_SCORE;
        let beta = MATE_SCORE;

        for mv in pos.legal_moves() {
            let value = with_move(pos, &mv, |pos| {
                if pos.is_checkmate() {
                    None
                } else {
                    Some(self.minimax(pos, child_depth, alpha, beta, false))
                }
            });

            let Some(value) = value else {
                return self.finish(Some(mv), MATE_SCORE, depth, true);
            };

            if best_move.is_none() || value > best_score {
                best_score = value;
                best_move = Some(mv);
            }
            alpha = alpha.max(value);
        }

        if best_move.is_none() {
            best_score = self.evaluator.evaluate(pos);
        }
        self.finish(best_move, best_score, depth, false)
    }

    fn finish<M>(&self, best_move: Option<M>, score: Score, depth: u32, mate_found: bool) -> SearchResult<M> {
        self.logger.info(&SearchInfo {
            depth,
            nodes: self.stats.nodes,
            cutoffs: self.stats.cutoffs,
            prune_percent: self.stats.prune_percent(),
            score,
            mate_found,
        });
        SearchResult {
            best_move,
            score,
            depth,
            stats: self.stats,
        }
    }

    /// Alpha-beta minimax below the root.
    ///
    /// Returns the same value plain minimax would for every node whose value
    /// lies inside `(alpha, beta)`; pruning only reduces the nodes visited.
    pub fn minimax<R: Rules>(
        &mut self,
        pos: &mut R,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.stats.nodes += 1;

        if depth == 0 || pos.is_game_over() {
            return self.evaluator.evaluate(pos);
        }

        let moves = pos.legal_moves();
        if moves.is_empty() {
            return self.evaluator.evaluate(pos);
        }

        if maximizing {
            let mut best = -MATE_SCORE;
            for mv in &moves {
                let value = with_move(pos, mv, |pos| self.minimax(pos, depth - 1, alpha, beta, false));
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = MATE_SCORE;
            for mv in &moves {
                let value = with_move(pos, mv, |pos| self.minimax(pos, depth - 1, alpha, beta, true));
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }
}
