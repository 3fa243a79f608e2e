//! Error types for game setup and move input.

use std::fmt;

/// Error type for FEN import failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The text is not syntactically valid FEN
    Syntax { fen: String, reason: String },
    /// The FEN parses but does not describe a legal standard chess position
    IllegalPosition { fen: String, reason: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Syntax { fen, reason } => {
                write!(f, "Invalid FEN '{fen}': {reason}")
            }
            FenError::IllegalPosition { fen, reason } => {
                write!(f, "FEN '{fen}' is not a legal position: {reason}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Text is not valid UCI move notation
    InvalidNotation { notation: String },
    /// Move is not legal in the current position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidNotation { notation } => {
                write!(f, "Invalid move notation '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}
