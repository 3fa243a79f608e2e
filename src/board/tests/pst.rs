//! Piece-square table tests.

use crate::board::pst::{base_value, mirror, positional_value, table};
use crate::board::{PieceKind, Side, Square};

#[test]
fn test_base_values() {
    assert_eq!(base_value(PieceKind::Pawn), 10.0);
    assert_eq!(base_value(PieceKind::Knight), 30.0);
    assert_eq!(base_value(PieceKind::Bishop), 30.0);
    assert_eq!(base_value(PieceKind::Rook), 50.0);
    assert_eq!(base_value(PieceKind::Queen), 90.0);
    assert_eq!(base_value(PieceKind::King), 900.0);
}

#[test]
fn test_black_tables_mirror_white() {
    for kind in PieceKind::ALL {
        let white = table(kind, Side::White);
        let black = table(kind, Side::Black);
        assert_eq!(black, &mirror(*white), "{kind:?}");
        for rank in 0..8 {
            assert_eq!(black[rank], white[7 - rank], "{kind:?} rank {rank}");
        }
    }
}

#[test]
fn test_mirror_is_involution() {
    for kind in PieceKind::ALL {
        let white = *table(kind, Side::White);
        assert_eq!(mirror(mirror(white)), white);
    }
}

#[test]
fn test_tables_use_absolute_rank() {
    // Row 0 is White's back rank in Black's tables too.
    for kind in PieceKind::ALL {
        assert_eq!(table(kind, Side::Black)[0], table(kind, Side::White)[7]);
    }

    // Pawns on their starting rank get the same bonus for either side.
    for file in 0..8 {
        assert_eq!(positional_value(PieceKind::Pawn, Square(1, file), Side::White), 5.0);
        assert_eq!(positional_value(PieceKind::Pawn, Square(6, file), Side::Black), 5.0);
    }
    assert_eq!(positional_value(PieceKind::Knight, Square(3, 3), Side::White), 2.0);
    assert_eq!(positional_value(PieceKind::King, Square(0, 4), Side::White), -5.0);
    assert_eq!(positional_value(PieceKind::King, Square(7, 4), Side::Black), -5.0);
    assert_eq!(positional_value(PieceKind::Rook, Square(7, 3), Side::White), 0.5);
}

#[test]
fn test_off_board_square_scores_zero() {
    assert_eq!(positional_value(PieceKind::Queen, Square(8, 0), Side::White), 0.0);
    assert_eq!(positional_value(PieceKind::Queen, Square(0, 9), Side::Black), 0.0);
}
