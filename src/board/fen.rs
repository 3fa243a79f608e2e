use std::str::FromStr;

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode};

use super::error::FenError;
use super::Game;

/// FEN of the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Game {
    /// Set up a game from FEN notation.
    ///
    /// Returns an error if the FEN is malformed or the position is not legal
    /// in standard chess.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed: Fen = fen.trim().parse().map_err(|e: shakmaty::fen::ParseFenError| {
            FenError::Syntax {
                fen: fen.to_string(),
                reason: e.to_string(),
            }
        })?;
        let position = parsed.into_position::<Chess>(CastlingMode::Standard).map_err(|e| {
            FenError::IllegalPosition {
                fen: fen.to_string(),
                reason: e.to_string(),
            }
        })?;
        Ok(Game {
            position,
            history: Vec::new(),
        })
    }

    /// Export the current position as FEN.
    #[must_use]
    pub fn to_fen(&self) -> String {
        Fen::from_position(self.position.clone(), EnPassantMode::Legal).to_string()
    }
}

impl FromStr for Game {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Game::from_fen(s)
    }
}
