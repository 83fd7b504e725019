use super::super::{Board, Piece, Square};

pub(crate) const DIAGONALS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const ROYAL: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Ray-cast along each direction until the edge or a blocker.
    ///
    /// A friendly blocker is excluded, an enemy blocker is included as a
    /// capture; either way the ray ends there.
    pub(crate) fn slider_targets(&self, piece: &Piece, directions: &[(isize, isize)]) -> Vec<Square> {
        let mut moves = Vec::with_capacity(14);
        for &(d_row, d_col) in directions {
            let mut current = piece.square;
            while let Some(next) = current.offset(d_row, d_col) {
                match self.get_piece(next) {
                    None => moves.push(next),
                    Some(blocker) => {
                        if blocker.color != piece.color {
                            moves.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        moves
    }
}
