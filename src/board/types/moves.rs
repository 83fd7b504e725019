//! Move request and move history types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// A request to move `piece` to `to`.
///
/// The piece is a snapshot taken from the board; it is validated against the
/// legal move set before anything is mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub piece: Piece,
    pub to: Square,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(piece: Piece, to: Square) -> Self {
        Move { piece, to }
    }

    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.piece.square
    }

    /// A king moving two columns is a castling move
    #[inline]
    #[must_use]
    pub fn is_castling(&self) -> bool {
        self.piece.kind == PieceKind::King && self.from().col().abs_diff(self.to.col()) == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to)
    }
}

/// An executed move as kept in the board history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn new(kind: PieceKind, from: Square, to: Square) -> Self {
        MoveRecord { kind, from, to }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}{}", self.kind, self.from, self.to)
    }
}
