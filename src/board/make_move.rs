//! Move execution.
//!
//! `try_move_piece` is the only public way to change the pieces on a board.
//! It validates everything first and then mutates, so a rejected request
//! leaves the board exactly as it was.

use log::trace;

use super::error::MoveError;
use super::movegen::CastleSide;
use super::{Board, Move, MoveRecord, Piece, PieceKind, Square};

impl Board {
    /// Execute a move request, returning `false` if it is illegal.
    pub fn move_piece(&mut self, piece: &Piece, dest: Square) -> bool {
        match self.try_move_piece(piece, dest) {
            Ok(()) => true,
            Err(err) => {
                trace!("rejected move request: {err}");
                false
            }
        }
    }

    /// Execute a move request.
    ///
    /// The destination must be in the legal set of the piece currently on
    /// `piece.square`, and that piece must have the requested kind and
    /// color. Castling also relocates the rook; both land or neither does.
    pub fn try_move_piece(&mut self, piece: &Piece, dest: Square) -> Result<(), MoveError> {
        let from = piece.square;
        let current = self
            .get_piece(from)
            .ok_or(MoveError::NoPieceAt { square: from })?;
        if current.kind != piece.kind || current.color != piece.color {
            return Err(MoveError::PieceMismatch {
                square: from,
                found: current.kind,
            });
        }

        if !self.legal_moves_for(&current).contains(&dest) {
            return Err(MoveError::IllegalDestination { from, to: dest });
        }

        self.apply_move(from, dest)?;
        self.history.push(MoveRecord::new(current.kind, from, dest));
        Ok(())
    }

    /// [`Board::try_move_piece`] for a `Move` value
    pub fn make_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        self.try_move_piece(&mv.piece, mv.to)
    }

    /// Apply an already-validated move, returning the captured piece.
    ///
    /// Only castling can still fail here: the rook is checked before the
    /// board is touched.
    pub(crate) fn apply_move(&mut self, from: Square, to: Square) -> Result<Option<Piece>, MoveError> {
        let piece = self
            .get_piece(from)
            .ok_or(MoveError::NoPieceAt { square: from })?;

        let castle = match piece.kind {
            PieceKind::King => CastleSide::from_king_move(from, to),
            _ => None,
        };
        let rook_squares = match castle {
            Some(side) => {
                let rook_from = Square(from.row(), side.rook_from_col());
                let rook_ok = self.get_piece(rook_from).is_some_and(|r| {
                    r.kind == PieceKind::Rook && r.color == piece.color && !r.has_moved
                });
                if !rook_ok {
                    return Err(MoveError::MalformedCastling {
                        king: from,
                        rook: rook_from,
                    });
                }
                Some((rook_from, Square(from.row(), side.rook_to_col())))
            }
            None => None,
        };

        let captured = self.relocate(from, to);
        if let Some((rook_from, rook_to)) = rook_squares {
            self.relocate(rook_from, rook_to);
        }
        Ok(captured)
    }

    /// Move whatever stands on `from` to `to`, no questions asked.
    ///
    /// Keeps the piece's stored square in sync and marks kings and rooks as
    /// moved. Returns the piece previously on `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let mut piece = self.take_piece(from)?;
        let captured = self.take_piece(to);
        piece.square = to;
        if piece.tracks_movement() {
            piece.has_moved = true;
        }
        self.set_piece(piece);
        captured
    }
}
