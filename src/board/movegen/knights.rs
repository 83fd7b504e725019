use super::super::{Board, Piece, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    /// Fixed-offset movers (knight, king): every in-bounds offset square not
    /// held by a friendly piece.
    pub(crate) fn step_targets(&self, piece: &Piece, offsets: &[(isize, isize)]) -> Vec<Square> {
        offsets
            .iter()
            .filter_map(|&(d_row, d_col)| piece.square.offset(d_row, d_col))
            .filter(|&to| self.can_land(piece.color, to))
            .collect()
    }
}
