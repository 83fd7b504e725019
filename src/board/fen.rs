//! FEN piece placement.
//!
//! Only the placement field and the optional castling field carry meaning
//! here. Side to move, en passant and the move counters are accepted and
//! ignored: the board does not track them. The side-to-move field may be
//! left out, so `to_fen` output (placement and castling) parses back.

use super::error::FenError;
use super::movegen::CastleSide;
use super::{Board, Color, Piece, PieceKind, Square};

impl Board {
    /// Parse a position from FEN.
    ///
    /// Without a castling field every king and rook counts as unmoved. With
    /// one, only the kings and rooks it names keep that status.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or(FenError::Empty)?;
        let castling = match parts.next() {
            Some("w" | "b") => parts.next(),
            other => other,
        };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        let mut board = Board::empty();
        for (row, rank) in ranks.iter().enumerate() {
            let mut col = 0;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    col += skip as usize;
                    continue;
                }
                let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if col >= 8 {
                    return Err(FenError::WrongFileCount {
                        rank: 8 - row,
                        files: col + 1,
                    });
                }
                let color = if c.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                board.set_piece(Piece::new(kind, color, Square(row, col)));
                col += 1;
            }
            if col != 8 {
                return Err(FenError::WrongFileCount {
                    rank: 8 - row,
                    files: col,
                });
            }
        }

        if let Some(field) = castling {
            board.apply_castling_field(field)?;
        }
        Ok(board)
    }

    /// Parse a position from FEN.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Placement and castling fields, e.g. `"rnbqkbnr/.../RNBQKBNR KQkq"`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for col in 0..8 {
                match self.grid[row][col] {
                    Some(p) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(p.kind.to_fen_char(p.color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let mut castling = String::new();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.castling_pair_unmoved(color, side) {
                    let c = match side {
                        CastleSide::King => 'k',
                        CastleSide::Queen => 'q',
                    };
                    castling.push(if color == Color::White {
                        c.to_ascii_uppercase()
                    } else {
                        c
                    });
                }
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        format!("{} {castling}", rows.join("/"))
    }

    /// Mark every king and rook moved, then clear the flag on the pairs
    /// the field names.
    fn apply_castling_field(&mut self, field: &str) -> Result<(), FenError> {
        let mut rights = Vec::new();
        for c in field.chars() {
            let right = match c {
                'K' => (Color::White, CastleSide::King),
                'Q' => (Color::White, CastleSide::Queen),
                'k' => (Color::Black, CastleSide::King),
                'q' => (Color::Black, CastleSide::Queen),
                '-' => continue,
                _ => return Err(FenError::InvalidCastling { char: c }),
            };
            rights.push(right);
        }

        for row in self.grid.iter_mut() {
            for piece in row.iter_mut().flatten() {
                if piece.tracks_movement() {
                    piece.has_moved = true;
                }
            }
        }

        for (color, side) in rights {
            let row = color.home_row();
            let king = Square(row, 4);
            let rook = Square(row, side.rook_from_col());
            let pair_present = self.grid[king.0][king.1]
                .is_some_and(|p| p.kind == PieceKind::King && p.color == color)
                && self.grid[rook.0][rook.1]
                    .is_some_and(|p| p.kind == PieceKind::Rook && p.color == color);
            if !pair_present {
                continue;
            }
            for sq in [king, rook] {
                if let Some(piece) = self.grid[sq.0][sq.1].as_mut() {
                    piece.has_moved = false;
                }
            }
        }
        Ok(())
    }

    /// King on e1/e8 and the corner rook of `side`, both unmoved
    fn castling_pair_unmoved(&self, color: Color, side: CastleSide) -> bool {
        let row = color.home_row();
        let unmoved = |sq: Square, kind: PieceKind| {
            self.get_piece(sq)
                .is_some_and(|p| p.kind == kind && p.color == color && !p.has_moved)
        };
        unmoved(Square(row, 4), PieceKind::King)
            && unmoved(Square(row, side.rook_from_col()), PieceKind::Rook)
    }
}
