//! Square types and utilities.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{PieceKind, Side};

/// A square on the chess board, represented as (rank, file).
///
/// Rank 0 is White's back rank, file 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (rank, file)

impl Square {
    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }
}

impl From<shakmaty::Square> for Square {
    fn from(sq: shakmaty::Square) -> Self {
        Square(sq.rank() as usize, sq.file() as usize)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Bounds are not enforced by the tuple constructor.
        let file = b"abcdefgh".get(self.1).map_or('?', |&b| b as char);
        let rank = b"12345678".get(self.0).map_or('?', |&b| b as char);
        write!(f, "{file}{rank}")
    }
}

/// A piece standing on a square, as reported by [`Rules::occupancy`](crate::board::Rules::occupancy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub square: Square,
    pub kind: PieceKind,
    pub side: Side,
}
