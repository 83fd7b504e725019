//! Legal move filtering, check detection and game status.
//!
//! A pseudo-legal move is kept only if, simulated on a copy of the board,
//! it leaves the mover's king unattacked. Check detection itself looks at
//! the opponent's *unfiltered* moves; using legal moves there would recurse
//! back into this module forever.

use super::{Board, Color, Move, Piece, PieceKind, Square};

/// Status of one side, from that side's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameStatus {
    /// True when the side has no legal move left
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl Board {
    /// True if the king of `color` stands on a square the opponent attacks.
    ///
    /// A side without a king is never in check.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, color.opponent()))
    }

    /// Legal destinations for a single piece, castling included.
    ///
    /// A king is never captured, even one left in check by an out-of-turn
    /// move; such squares stay in the pseudo-legal set for check detection.
    #[must_use]
    pub fn legal_moves_for(&self, piece: &Piece) -> Vec<Square> {
        let mut moves: Vec<Square> = self
            .pseudo_legal_moves(piece)
            .into_iter()
            .filter(|&to| !self.holds_king(to) && self.leaves_king_safe(piece, to))
            .collect();

        if piece.kind == PieceKind::King && !piece.has_moved {
            moves.extend(self.castling_targets(piece.color));
        }
        moves
    }

    /// Every piece of `color` paired with its legal destinations.
    ///
    /// Pieces without a legal move are listed with an empty vector.
    #[must_use]
    pub fn get_possible_moves(&self, color: Color) -> Vec<(Piece, Vec<Square>)> {
        self.get_pieces(color)
            .into_iter()
            .map(|piece| {
                let moves = self.legal_moves_for(&piece);
                (piece, moves)
            })
            .collect()
    }

    /// Flattened legal move list for `color`
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        self.get_possible_moves(color)
            .into_iter()
            .flat_map(|(piece, targets)| targets.into_iter().map(move |to| Move::new(piece, to)))
            .collect()
    }

    /// True as soon as one legal move for `color` is found
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.pieces().filter(|p| p.color == color).any(|piece| {
            self.pseudo_legal_moves(piece)
                .into_iter()
                .any(|to| !self.holds_king(to) && self.leaves_king_safe(piece, to))
        }) || !self.castling_targets(color).is_empty()
    }

    /// In check with no legal move
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    /// Not in check, yet no legal move
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_legal_move(color)
    }

    #[must_use]
    pub fn game_status(&self, color: Color) -> GameStatus {
        match (self.is_king_in_check(color), self.has_legal_move(color)) {
            (true, true) => GameStatus::Check,
            (true, false) => GameStatus::Checkmate,
            (false, true) => GameStatus::Ongoing,
            (false, false) => GameStatus::Stalemate,
        }
    }

    #[inline]
    fn holds_king(&self, sq: Square) -> bool {
        self.get_piece(sq).is_some_and(|p| p.kind == PieceKind::King)
    }

    /// Simulate `piece` moving to `to` on a copy and test its king.
    pub(crate) fn leaves_king_safe(&self, piece: &Piece, to: Square) -> bool {
        let mut probe = self.branch();
        probe.relocate(piece.square, to);
        !probe.is_king_in_check(piece.color)
    }
}
