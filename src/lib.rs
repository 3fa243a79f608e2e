pub mod board;
pub mod engine;

pub use board::{Evaluator, Game, Move, PieceKind, Rules, Searcher, Side, Square};
pub use engine::ComputerPlayer;
