//! Chess game state, evaluation and move search.
//!
//! The rules of chess come from the `shakmaty` crate behind the [`Rules`]
//! trait; this module adds a material and piece-square evaluator and an
//! alpha-beta searcher on top.
//!
//! # Example
//! ```
//! use chess_ai::board::{Game, Rules, Searcher, Side};
//!
//! let mut game = Game::new();
//! let mut searcher = Searcher::new(Side::White);
//! let mv = searcher.choose_move_with_depth(&mut game, 2);
//! assert!(mv.is_some_and(|mv| game.legal_moves().contains(&mv)));
//! ```

mod error;
mod eval;
mod fen;
mod moves;
pub mod pst;
mod rules;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError};
pub use eval::{Evaluator, Score, MATE_SCORE};
pub use fen::STARTING_FEN;
pub use moves::format_uci;
pub use rules::Rules;
pub use search::{
    LogLogger, NullLogger, SearchInfo, SearchLogger, SearchParams, SearchResult, SearchStats,
    Searcher,
};
pub use shakmaty::Move;
pub use state::{Game, GameResult};
pub use types::{Occupant, PieceKind, Side, Square};
