use std::fmt;

use super::{Color, MoveRecord, Piece, PieceKind, Square};

/// Back rank layout from the a-file to the h-file
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8x8 grid of optional pieces plus the executed move history.
///
/// Pieces are stored by value, so `clone()` is a deep copy: a cloned board
/// never aliases the pieces of the original.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) grid: [[Option<Piece>; 8]; 8],
    pub(crate) history: Vec<MoveRecord>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.set_piece(Piece::new(kind, Color::Black, Square(0, col)));
            board.set_piece(Piece::new(PieceKind::Pawn, Color::Black, Square(1, col)));
            board.set_piece(Piece::new(PieceKind::Pawn, Color::White, Square(6, col)));
            board.set_piece(Piece::new(kind, Color::White, Square(7, col)));
        }
        board
    }

    /// Board with no pieces and no history.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            grid: [[None; 8]; 8],
            history: Vec::new(),
        }
    }

    /// Copy of the position without the move history.
    ///
    /// Search branches and legality probes never look at history, so they
    /// skip copying it.
    #[inline]
    pub(crate) fn branch(&self) -> Board {
        Board {
            grid: self.grid,
            history: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn get_piece(&self, sq: Square) -> Option<Piece> {
        self.grid[sq.0][sq.1]
    }

    #[inline]
    #[must_use]
    pub fn is_square_empty(&self, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_none()
    }

    /// True if `sq` holds a piece of the other color
    #[inline]
    #[must_use]
    pub fn is_opponent_piece(&self, color: Color, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_some_and(|p| p.color != color)
    }

    /// True if `sq` holds a piece of `color`
    #[inline]
    #[must_use]
    pub fn is_friendly_piece(&self, color: Color, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_some_and(|p| p.color == color)
    }

    /// Every piece on the board in row-major order
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.grid.iter().flatten().flatten()
    }

    /// Snapshot of the pieces of one color
    #[must_use]
    pub fn get_pieces(&self, color: Color) -> Vec<Piece> {
        self.pieces().filter(|p| p.color == color).copied().collect()
    }

    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    /// Square of the king of `color`, if it is on the board
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|p| p.kind == PieceKind::King && p.color == color)
            .map(|p| p.square)
    }

    /// Moves executed through `move_piece`, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Alias of [`Board::history`]
    #[inline]
    #[must_use]
    pub fn get_moves(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Put a piece on its own square, replacing whatever stood there.
    pub(crate) fn set_piece(&mut self, piece: Piece) {
        let sq = piece.square;
        self.grid[sq.0][sq.1] = Some(piece);
    }

    pub(crate) fn take_piece(&mut self, sq: Square) -> Option<Piece> {
        self.grid[sq.0][sq.1].take()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = self.grid[row][col].map_or('.', |p| p.kind.to_fen_char(p.color));
                write!(f, "{c} ")?;
            }
            writeln!(f)?;
        }
        write!(f, "  a b c d e f g h")
    }
}
