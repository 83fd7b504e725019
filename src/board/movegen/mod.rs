//! Pseudo-legal move generation.
//!
//! Every generator here ignores whether the move leaves the mover's own king
//! in check. That filtering happens in `legality`.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::CastleSide;

use kings::KING_OFFSETS;
use knights::KNIGHT_OFFSETS;
use sliders::{DIAGONALS, ORTHOGONALS, ROYAL};

use super::{Board, Color, Piece, PieceKind, Square, SquareSet};

impl Board {
    /// Pseudo-legal destinations for `piece`, dispatched on its kind.
    #[must_use]
    pub fn pseudo_legal_moves(&self, piece: &Piece) -> Vec<Square> {
        match piece.kind {
            PieceKind::Pawn => self.pawn_targets(piece),
            PieceKind::Knight => self.step_targets(piece, &KNIGHT_OFFSETS),
            PieceKind::Bishop => self.slider_targets(piece, &DIAGONALS),
            PieceKind::Rook => self.slider_targets(piece, &ORTHOGONALS),
            PieceKind::Queen => self.slider_targets(piece, &ROYAL),
            PieceKind::King => self.step_targets(piece, &KING_OFFSETS),
        }
    }

    /// Squares the pieces of `by` attack.
    ///
    /// Matches the pseudo-legal destinations of every piece except pawns,
    /// which attack both forward diagonals whether or not a victim stands
    /// there and never attack with a push.
    #[must_use]
    pub fn attacked_squares(&self, by: Color) -> SquareSet {
        let mut attacked = SquareSet::EMPTY;
        for piece in self.pieces().filter(|p| p.color == by) {
            if piece.kind == PieceKind::Pawn {
                attacked.extend(self.pawn_attacks(piece));
            } else {
                attacked.extend(self.pseudo_legal_moves(piece));
            }
        }
        attacked
    }

    /// True if any piece of `by` attacks `sq`
    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.pieces().filter(|p| p.color == by).any(|piece| {
            if piece.kind == PieceKind::Pawn {
                self.pawn_attacks(piece).any(|target| target == sq)
            } else {
                self.pseudo_legal_moves(piece).contains(&sq)
            }
        })
    }

    /// Number of pseudo-legal destinations across all pieces of `color`
    #[must_use]
    pub fn pseudo_mobility(&self, color: Color) -> usize {
        self.pieces()
            .filter(|p| p.color == color)
            .map(|p| self.pseudo_legal_moves(p).len())
            .sum()
    }

    /// Empty square or enemy piece: a stepping piece may land here
    #[inline]
    fn can_land(&self, color: Color, sq: Square) -> bool {
        !self.is_friendly_piece(color, sq)
    }
}
