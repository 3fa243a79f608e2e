//! Material values and piece-square tables.
//!
//! Tables are indexed `[rank][file]` by absolute board rank, so row 0 is
//! White's back rank for both colours. The White tables are written out; each
//! Black table is the vertical mirror of its White counterpart.

use once_cell::sync::Lazy;

use super::types::{PieceKind, Side, Square};

/// Positional bonus per square, `[rank][file]`.
pub type PieceSquareTable = [[f64; 8]; 8];

/// Base material value indexed by `PieceKind::index()`
pub const PIECE_VALUES: [f64; 6] = [10.0, 30.0, 30.0, 50.0, 90.0, 900.0];

#[rustfmt::skip]
const PAWN_WHITE: PieceSquareTable = [
    [0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0],
    [5.0,  5.0,  5.0,  5.0,  5.0,  5.0,  5.0,  5.0],
    [1.0,  1.0,  2.0,  3.0,  3.0,  2.0,  1.0,  1.0],
    [0.5,  0.5,  1.0,  2.5,  2.5,  1.0,  0.5,  0.5],
    [0.0,  0.0,  0.0,  2.0,  2.0,  0.0,  0.0,  0.0],
    [0.5, -0.5, -1.0,  0.0,  0.0, -1.0, -0.5,  0.5],
    [0.5,  1.0,  1.0, -2.0, -2.0,  1.0,  1.0,  0.5],
    [0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0],
];

#[rustfmt::skip]
const KNIGHT_WHITE: PieceSquareTable = [
    [-5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0],
    [-4.0, -2.0,  0.0,  0.5,  0.5,  0.0, -2.0, -4.0],
    [-3.0,  0.5,  1.0,  1.5,  1.5,  1.0,  0.5, -3.0],
    [-3.0,  0.0,  1.5,  2.0,  2.0,  1.5,  0.0, -3.0],
    [-3.0,  0.5,  1.5,  2.0,  2.0,  1.5,  0.5, -3.0],
    [-3.0,  0.0,  1.0,  1.5,  1.5,  1.0,  0.0, -3.0],
    [-4.0, -2.0,  0.0,  0.0,  0.0,  0.0, -2.0, -4.0],
    [-5.0, -4.0, -3.0, -3.0, -3.0, -3.0, -4.0, -5.0],
];

#[rustfmt::skip]
const BISHOP_WHITE: PieceSquareTable = [
    [-2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0],
    [-1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -1.0],
    [-1.0,  0.0,  0.5,  1.0,  1.0,  0.5,  0.0, -1.0],
    [-1.0,  0.5,  0.5,  1.0,  1.0,  0.5,  0.5, -1.0],
    [-1.0,  0.0,  1.0,  1.0,  1.0,  1.0,  0.0, -1.0],
    [-1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0, -1.0],
    [-1.0,  0.5,  0.0,  0.0,  0.0,  0.0,  0.5, -1.0],
    [-2.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -2.0],
];

#[rustfmt::skip]
const ROOK_WHITE: PieceSquareTable = [
    [ 0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0],
    [ 0.5,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  0.5],
    [-0.5,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.5],
    [-0.5,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.5],
    [-0.5,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.5],
    [-0.5,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.5],
    [-0.5,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -0.5],
    [ 0.0,  0.0,  0.0,  0.5,  0.5,  0.0,  0.0,  0.0],
];

#[rustfmt::skip]
const QUEEN_WHITE: PieceSquareTable = [
    [-2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0],
    [-1.0,  0.0,  0.0,  0.0,  0.0,  0.0,  0.0, -1.0],
    [-1.0,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -1.0],
    [-0.5,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -0.5],
    [ 0.0,  0.0,  0.5,  0.5,  0.5,  0.5,  0.0, -0.5],
    [-1.0,  0.5,  0.5,  0.5,  0.5,  0.5,  0.0, -1.0],
    [-1.0,  0.0,  0.5,  0.0,  0.0,  0.0,  0.0, -1.0],
    [-2.0, -1.0, -1.0, -0.5, -0.5, -1.0, -1.0, -2.0],
];

#[rustfmt::skip]
const KING_WHITE: PieceSquareTable = [
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-3.0, -4.0, -4.0, -5.0, -5.0, -4.0, -4.0, -3.0],
    [-2.0, -3.0, -3.0, -4.0, -4.0, -3.0, -3.0, -2.0],
    [-1.0, -2.0, -2.0, -2.0, -2.0, -2.0, -2.0, -1.0],
    [ 2.0,  2.0,  0.0,  0.0,  0.0,  0.0,  2.0,  2.0],
    [ 2.0,  3.0,  1.0,  0.0,  0.0,  1.0,  3.0,  2.0],
];

/// White tables indexed by `PieceKind::index()`
static WHITE_TABLES: [PieceSquareTable; 6] = [
    PAWN_WHITE,
    KNIGHT_WHITE,
    BISHOP_WHITE,
    ROOK_WHITE,
    QUEEN_WHITE,
    KING_WHITE,
];

static BLACK_TABLES: Lazy<[PieceSquareTable; 6]> = Lazy::new(|| WHITE_TABLES.map(mirror));

/// Reverse the row order of a table.
#[must_use]
pub fn mirror(table: PieceSquareTable) -> PieceSquareTable {
    let mut out = table;
    out.reverse();
    out
}

/// Base material value of a piece kind.
#[inline]
#[must_use]
pub fn base_value(kind: PieceKind) -> f64 {
    PIECE_VALUES[kind.index()]
}

/// The table used for `kind` pieces belonging to `side`.
#[must_use]
pub fn table(kind: PieceKind, side: Side) -> &'static PieceSquareTable {
    match side {
        Side::White => &WHITE_TABLES[kind.index()],
        Side::Black => &BLACK_TABLES[kind.index()],
    }
}

/// Positional bonus for a `side` piece of `kind` standing on `square`.
///
/// Squares off the board score zero.
#[inline]
#[must_use]
pub fn positional_value(kind: PieceKind, square: Square, side: Side) -> f64 {
    table(kind, side)
        .get(square.rank())
        .and_then(|row| row.get(square.file()))
        .copied()
        .unwrap_or(0.0)
}
