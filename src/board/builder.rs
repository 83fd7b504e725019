//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_core::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .build();
//! assert_eq!(board.piece_count(), 3);
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug, Default)]
pub struct BoardBuilder {
    pieces: Vec<Piece>,
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder { pieces: Vec::new() }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            pieces: Board::new().pieces().copied().collect(),
        }
    }

    /// Place an unmoved piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|p| p.square != square);
        self.pieces.push(Piece::new(kind, color, square));
        self
    }

    /// Place a king or rook that has already moved, so it cannot castle.
    #[must_use]
    pub fn moved_piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|p| p.square != square);
        let mut piece = Piece::new(kind, color, square);
        piece.has_moved = piece.tracks_movement();
        self.pieces.push(piece);
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|p| p.square != square);
        self
    }

    /// Mark every king and rook as moved.
    #[must_use]
    pub fn no_castling_rights(mut self) -> Self {
        for piece in &mut self.pieces {
            if piece.tracks_movement() {
                piece.has_moved = true;
            }
        }
        self
    }

    /// Build the board. The result has an empty history.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for piece in self.pieces {
            board.set_piece(piece);
        }
        board
    }
}
