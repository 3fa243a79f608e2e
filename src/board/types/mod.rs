//! Core chess types.
//!
//! - `PieceKind` and `Side` - piece kinds and players
//! - `Square` - (rank, file) board coordinate
//! - `Occupant` - one occupied square as seen by the evaluator

mod piece;
mod square;

pub use piece::{PieceKind, Side};
pub use square::{Occupant, Square};
