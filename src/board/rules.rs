//! The rules-engine contract consumed by evaluation and search.
//!
//! Evaluation and search never look inside a position. Everything they need
//! goes through [`Rules`], so the production [`Game`](super::Game) and any
//! synthetic game tree used in tests drive the same code.

use std::fmt::Debug;

use super::types::{Occupant, Side};

/// Operations a chess-rules collaborator must provide.
///
/// `apply_move` and `undo_move` form a stack: after any balanced sequence of
/// applies and undos the position is exactly what it was before.
pub trait Rules {
    /// Opaque move value; equality is the rules engine's notion of identity.
    type Move: Clone + PartialEq + Debug;

    /// Legal moves in a deterministic order, stable across re-enumeration of
    /// the same unmodified position.
    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Play a legal move on the position.
    fn apply_move(&mut self, mv: &Self::Move);

    /// Take back the last applied move, returning it. `None` if no move is
    /// left to undo.
    fn undo_move(&mut self) -> Option<Self::Move>;

    fn side_to_move(&self) -> Side;

    fn is_checkmate(&self) -> bool;

    fn is_stalemate(&self) -> bool;

    fn is_insufficient_material(&self) -> bool;

    /// Checkmate, stalemate or any draw the rules engine ends the game on.
    fn is_game_over(&self) -> bool;

    /// Every occupied square with the piece standing on it.
    fn occupancy(&self) -> Vec<Occupant>;

    /// Number of pieces on the board, kings included.
    fn piece_count(&self) -> usize;
}

/// Apply `mv`, run `f` on the resulting position, then undo `mv`.
///
/// Keeps apply/undo paired on every exit path of the caller's loop, including
/// early `break` and `return`.
#[inline]
pub(crate) fn with_move<R, T>(pos: &mut R, mv: &R::Move, f: impl FnOnce(&mut R) -> T) -> T
where
    R: Rules + ?Sized,
{
    pos.apply_move(mv);
    let out = f(pos);
    let undone = pos.undo_move();
    debug_assert!(undone.as_ref() == Some(mv), "undo did not pop the applied move");
    out
}
