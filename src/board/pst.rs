//! Piece-square tables.
//!
//! Six 8x8 tables, one per piece kind, written from White's point of view
//! with rank 8 first (index 0 is a8, index 63 is h1). Black reads them
//! mirrored. Values are percentages added to a piece's material value.
//!
//! A process-wide set can be installed once at startup with
//! [`PieceSquareTables::install`]; until then the standard set is used.

use std::sync::Arc;

use once_cell::sync::{Lazy, OnceCell};

use super::{Color, PieceKind, Square};

#[rustfmt::skip]
const PAWN: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT: [i32; 64] = [
   -50,-40,-30,-30,-30,-30,-40,-50,
   -40,-20,  0,  0,  0,  0,-20,-40,
   -30,  0, 10, 15, 15, 10,  0,-30,
   -30,  5, 15, 20, 20, 15,  5,-30,
   -30,  0, 15, 20, 20, 15,  0,-30,
   -30,  5, 10, 15, 15, 10,  5,-30,
   -40,-20,  0,  5,  5,  0,-20,-40,
   -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP: [i32; 64] = [
   -20,-10,-10,-10,-10,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5, 10, 10,  5,  0,-10,
   -10,  5,  5, 10, 10,  5,  5,-10,
   -10,  0, 10, 10, 10, 10,  0,-10,
   -10, 10, 10, 10, 10, 10, 10,-10,
   -10,  5,  0,  0,  0,  0,  5,-10,
   -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN: [i32; 64] = [
   -20,-10,-10, -5, -5,-10,-10,-20,
   -10,  0,  0,  0,  0,  0,  0,-10,
   -10,  0,  5,  5,  5,  5,  0,-10,
    -5,  0,  5,  5,  5,  5,  0, -5,
     0,  0,  5,  5,  5,  5,  0, -5,
   -10,  5,  5,  5,  5,  5,  0,-10,
   -10,  0,  5,  0,  0,  0,  0,-10,
   -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING: [i32; 64] = [
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -30,-40,-40,-50,-50,-40,-40,-30,
   -20,-30,-30,-40,-40,-30,-30,-20,
   -10,-20,-20,-20,-20,-20,-20,-10,
    20, 20,  0,  0,  0,  0, 20, 20,
    20, 30, 10,  0,  0, 10, 30, 20,
];

static STANDARD: Lazy<Arc<PieceSquareTables>> = Lazy::new(|| {
    Arc::new(PieceSquareTables::new([PAWN, KNIGHT, BISHOP, ROOK, QUEEN, KING]))
});

static INSTALLED: OnceCell<Arc<PieceSquareTables>> = OnceCell::new();

/// Positional tables, one per piece kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceSquareTables {
    tables: [[i32; 64]; 6],
}

impl PieceSquareTables {
    /// Tables ordered Pawn, Knight, Bishop, Rook, Queen, King.
    #[must_use]
    pub const fn new(tables: [[i32; 64]; 6]) -> Self {
        PieceSquareTables { tables }
    }

    /// Built-in tables, shared.
    #[must_use]
    pub fn standard() -> Arc<PieceSquareTables> {
        Arc::clone(&*STANDARD)
    }

    /// Tables used by default evaluators: installed ones if any, otherwise
    /// the built-in set.
    #[must_use]
    pub fn global() -> Arc<PieceSquareTables> {
        INSTALLED.get().map_or_else(Self::standard, Arc::clone)
    }

    /// Install process-wide tables. Only the first call wins; later calls
    /// hand the tables back.
    pub fn install(tables: PieceSquareTables) -> Result<(), PieceSquareTables> {
        INSTALLED
            .set(Arc::new(tables))
            .map_err(Arc::unwrap_or_clone)
    }

    /// Bonus for a piece of `color` and `kind` on `sq`.
    #[inline]
    #[must_use]
    pub fn value(&self, kind: PieceKind, color: Color, sq: Square) -> i32 {
        let sq = match color {
            Color::White => sq,
            Color::Black => sq.flip_vertical(),
        };
        self.tables[kind.index()][sq.as_index()]
    }
}

impl Default for PieceSquareTables {
    fn default() -> Self {
        PieceSquareTables::clone(&STANDARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_reads_mirrored() {
        let pst = PieceSquareTables::standard();
        let e2 = Square(6, 4);
        let e7 = Square(1, 4);
        assert_eq!(
            pst.value(PieceKind::Pawn, Color::White, e2),
            pst.value(PieceKind::Pawn, Color::Black, e7)
        );
        assert_eq!(pst.value(PieceKind::Pawn, Color::White, e2), -20);
    }

    #[test]
    fn test_knight_prefers_center() {
        let pst = PieceSquareTables::standard();
        let corner = pst.value(PieceKind::Knight, Color::White, Square(7, 0));
        let center = pst.value(PieceKind::Knight, Color::White, Square(4, 3));
        assert!(center > corner);
    }

    #[test]
    fn test_custom_tables() {
        let mut raw = [[0; 64]; 6];
        raw[PieceKind::Rook.index()][Square(0, 0).as_index()] = 42;
        let pst = PieceSquareTables::new(raw);
        assert_eq!(pst.value(PieceKind::Rook, Color::White, Square(0, 0)), 42);
        assert_eq!(pst.value(PieceKind::Rook, Color::Black, Square(7, 0)), 42);
        assert_eq!(pst.value(PieceKind::Queen, Color::White, Square(0, 0)), 0);
    }
}
