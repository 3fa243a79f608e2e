//! UCI move input and output for [`Game`].

use shakmaty::uci::Uci;
use shakmaty::{CastlingMode, Move, Position, Rank, Role};

use super::error::MoveParseError;
use super::rules::Rules;
use super::types::Square;
use super::Game;

/// Format a move in UCI notation (e.g. "e2e4", "e7e8q", "e1g1").
#[must_use]
pub fn format_uci(mv: &Move) -> String {
    Uci::from_move(mv, CastlingMode::Standard).to_string()
}

impl Game {
    /// Resolve a UCI move string against the current position.
    ///
    /// A pawn move to the last rank without a promotion letter promotes to a
    /// queen.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        if !(4..=5).contains(&text.len()) {
            return Err(MoveParseError::InvalidLength { len: text.len() });
        }
        let mut uci = Uci::from_ascii(text.as_bytes()).map_err(|_| {
            MoveParseError::InvalidNotation {
                notation: text.to_string(),
            }
        })?;

        if let Uci::Normal { from, to, promotion } = &mut uci {
            let is_pawn = self.position.board().role_at(*from) == Some(Role::Pawn);
            let last_rank = matches!(to.rank(), Rank::First | Rank::Eighth);
            if promotion.is_none() && is_pawn && last_rank {
                *promotion = Some(Role::Queen);
            }
        }

        uci.to_move(&self.position)
            .map_err(|_| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }

    /// Parse and play a UCI move, returning the move that was applied.
    pub fn push_uci(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let mv = self.parse_move(text)?;
        self.apply_move(&mv);
        Ok(mv)
    }

    /// Origin and destination of every legal move, for move highlighting.
    ///
    /// Castling is reported as the king's two-square step.
    #[must_use]
    pub fn legal_move_squares(&self) -> Vec<(Square, Square)> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(|mv| match Uci::from_move(mv, CastlingMode::Standard) {
                Uci::Normal { from, to, .. } => Some((from.into(), to.into())),
                _ => None,
            })
            .collect()
    }
}
