use std::fmt;

use shakmaty::{Chess, EnPassantMode, Move, Position};

use super::rules::Rules;
use super::types::{Occupant, PieceKind, Side, Square};

/// Halfmove clock value at which the seventy-five-move rule ends the game.
const SEVENTY_FIVE_MOVE_PLIES: u32 = 150;

/// Occurrences of one position that end the game in a draw.
const FIVEFOLD_REPETITION: usize = 5;

/// Final (or current) result of a game in PGN notation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Ongoing,
}

impl GameResult {
    /// Winner of a decided game
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            GameResult::WhiteWins => Some(Side::White),
            GameResult::BlackWins => Some(Side::Black),
            GameResult::Draw | GameResult::Ongoing => None,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Ongoing => "*",
        };
        f.write_str(s)
    }
}

/// A chess game: the current position plus the stack of positions it was
/// reached from, so every applied move can be taken back exactly.
#[derive(Clone, Debug)]
pub struct Game {
    pub(crate) position: Chess,
    pub(crate) history: Vec<(Chess, Move)>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Game at the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        Game {
            position: Chess::default(),
            history: Vec::new(),
        }
    }

    /// Back to the starting position with an empty history.
    pub fn reset(&mut self) {
        *self = Game::new();
    }

    /// The underlying rules-engine position.
    #[must_use]
    pub fn position(&self) -> &Chess {
        &self.position
    }

    #[must_use]
    pub fn turn(&self) -> Side {
        self.position.turn().into()
    }

    #[must_use]
    pub fn is_check(&self) -> bool {
        self.position.is_check()
    }

    /// Number of moves played since the game was created.
    #[must_use]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Last applied move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|(_, mv)| mv)
    }

    /// Piece on `square`, if any.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<(PieceKind, Side)> {
        let sq = to_engine_square(square)?;
        self.position
            .board()
            .piece_at(sq)
            .map(|piece| (piece.role.into(), piece.color.into()))
    }

    pub(crate) fn is_seventy_five_move_draw(&self) -> bool {
        self.position.halfmoves() >= SEVENTY_FIVE_MOVE_PLIES && !self.position.is_checkmate()
    }

    /// How many times the current position has occurred, itself included.
    ///
    /// Positions count as equal when board, side to move, castling rights and
    /// legal en passant square all match. Only positions since the last
    /// capture or pawn move can repeat.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        let reversible = usize::try_from(self.position.halfmoves()).unwrap_or(usize::MAX);
        1 + self
            .history
            .iter()
            .rev()
            .take(reversible)
            .filter(|(earlier, _)| same_position(earlier, &self.position))
            .count()
    }

    pub(crate) fn is_fivefold_repetition(&self) -> bool {
        self.repetitions() >= FIVEFOLD_REPETITION
    }

    /// Result of the game so far.
    #[must_use]
    pub fn result(&self) -> GameResult {
        if self.position.is_checkmate() {
            // The side to move has been mated.
            return match self.turn() {
                Side::White => GameResult::BlackWins,
                Side::Black => GameResult::WhiteWins,
            };
        }
        if self.position.is_stalemate()
            || self.position.is_insufficient_material()
            || self.is_seventy_five_move_draw()
            || self.is_fivefold_repetition()
        {
            return GameResult::Draw;
        }
        GameResult::Ongoing
    }
}

fn same_position(a: &Chess, b: &Chess) -> bool {
    a.turn() == b.turn()
        && a.board() == b.board()
        && a.castles().castling_rights() == b.castles().castling_rights()
        && a.ep_square(EnPassantMode::Legal) == b.ep_square(EnPassantMode::Legal)
}

pub(crate) fn to_engine_square(square: Square) -> Option<shakmaty::Square> {
    if square.rank() >= 8 || square.file() >= 8 {
        return None;
    }
    let idx = u32::try_from(square.rank() * 8 + square.file()).ok()?;
    Some(shakmaty::Square::new(idx))
}

impl Rules for Game {
    type Move = Move;

    fn legal_moves(&self) -> Vec<Move> {
        self.position.legal_moves().into_iter().collect()
    }

    fn apply_move(&mut self, mv: &Move) {
        let previous = self.position.clone();
        self.position.play_unchecked(mv);
        self.history.push((previous, mv.clone()));
    }

    fn undo_move(&mut self) -> Option<Move> {
        let (previous, mv) = self.history.pop()?;
        self.position = previous;
        Some(mv)
    }

    fn side_to_move(&self) -> Side {
        self.turn()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn is_insufficient_material(&self) -> bool {
        self.position.is_insufficient_material()
    }

    fn is_game_over(&self) -> bool {
        self.position.is_game_over()
            || self.is_seventy_five_move_draw()
            || self.is_fivefold_repetition()
    }

    fn occupancy(&self) -> Vec<Occupant> {
        let board = self.position.board();
        board
            .occupied()
            .into_iter()
            .filter_map(|sq| {
                board.piece_at(sq).map(|piece| Occupant {
                    square: sq.into(),
                    kind: piece.role.into(),
                    side: piece.color.into(),
                })
            })
            .collect()
    }

    fn piece_count(&self) -> usize {
        self.position.board().occupied().count()
    }
}

impl fmt::Display for Game {
    /// Text diagram, White at the bottom.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let c = self
                    .piece_at(Square(rank, file))
                    .map_or('.', |(kind, side)| kind.to_fen_char(side));
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
