use super::super::{Board, Piece, Square};

impl Board {
    /// Pushes onto empty squares, the double push from the start row, and
    /// diagonal captures onto enemy pieces.
    pub(crate) fn pawn_targets(&self, pawn: &Piece) -> Vec<Square> {
        let mut moves = Vec::with_capacity(4);
        let dir = pawn.color.pawn_direction();

        if let Some(one) = pawn.square.offset(dir, 0) {
            if self.is_square_empty(one) {
                moves.push(one);
                if pawn.square.row() == pawn.color.pawn_start_row() {
                    if let Some(two) = pawn.square.offset(2 * dir, 0) {
                        if self.is_square_empty(two) {
                            moves.push(two);
                        }
                    }
                }
            }
        }

        moves.extend(
            self.pawn_attacks(pawn)
                .filter(|&target| self.is_opponent_piece(pawn.color, target)),
        );
        moves
    }

    /// The two forward diagonals, regardless of what stands on them
    pub(crate) fn pawn_attacks(&self, pawn: &Piece) -> impl Iterator<Item = Square> {
        let dir = pawn.color.pawn_direction();
        let from = pawn.square;
        [-1, 1]
            .into_iter()
            .filter_map(move |d_col| from.offset(dir, d_col))
    }
}
