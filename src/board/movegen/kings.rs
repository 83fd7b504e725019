use super::super::{Board, Color, PieceKind, Square, SquareSet};

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Which rook a castling move uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub(crate) const BOTH: [CastleSide; 2] = [CastleSide::King, CastleSide::Queen];

    /// Column the rook starts on
    pub(crate) const fn rook_from_col(self) -> usize {
        match self {
            CastleSide::King => 7,
            CastleSide::Queen => 0,
        }
    }

    /// Column the rook lands on
    pub(crate) const fn rook_to_col(self) -> usize {
        match self {
            CastleSide::King => 5,
            CastleSide::Queen => 3,
        }
    }

    /// Column the king lands on
    pub(crate) const fn king_to_col(self) -> usize {
        match self {
            CastleSide::King => 6,
            CastleSide::Queen => 2,
        }
    }

    /// Columns strictly between king and rook
    const fn between(self) -> &'static [usize] {
        match self {
            CastleSide::King => &[5, 6],
            CastleSide::Queen => &[1, 2, 3],
        }
    }

    /// Columns the king stands on or crosses, start and end included
    const fn king_path(self) -> &'static [usize] {
        match self {
            CastleSide::King => &[4, 5, 6],
            CastleSide::Queen => &[4, 3, 2],
        }
    }

    /// Side of a king move that travels two columns
    pub(crate) fn from_king_move(from: Square, to: Square) -> Option<CastleSide> {
        if from.row() != to.row() {
            return None;
        }
        match to.col() as isize - from.col() as isize {
            2 => Some(CastleSide::King),
            -2 => Some(CastleSide::Queen),
            _ => None,
        }
    }
}

impl Board {
    /// Castling destinations currently available to `color`'s king.
    ///
    /// Requires an unmoved king on its home square and not in check, an
    /// unmoved rook of the same color in the corner, empty squares between
    /// them, and no attacked square on the king's path.
    pub(crate) fn castling_targets(&self, color: Color) -> Vec<Square> {
        let row = color.home_row();
        let home = Square(row, 4);
        let king_ready = self
            .get_piece(home)
            .is_some_and(|k| k.kind == PieceKind::King && k.color == color && !k.has_moved);
        if !king_ready {
            return Vec::new();
        }

        let attacked = self.attacked_squares(color.opponent());
        if attacked.contains(home) {
            return Vec::new();
        }

        CastleSide::BOTH
            .into_iter()
            .filter(|&side| self.castle_path_clear(color, side, attacked))
            .map(|side| Square(row, side.king_to_col()))
            .collect()
    }

    /// True if castling on the king side is available
    #[must_use]
    pub fn can_castle_kingside(&self, color: Color) -> bool {
        self.castling_targets(color)
            .contains(&Square(color.home_row(), CastleSide::King.king_to_col()))
    }

    /// True if castling on the queen side is available
    #[must_use]
    pub fn can_castle_queenside(&self, color: Color) -> bool {
        self.castling_targets(color)
            .contains(&Square(color.home_row(), CastleSide::Queen.king_to_col()))
    }

    fn castle_path_clear(&self, color: Color, side: CastleSide, attacked: SquareSet) -> bool {
        let row = color.home_row();
        let rook_ready = self
            .get_piece(Square(row, side.rook_from_col()))
            .is_some_and(|r| r.kind == PieceKind::Rook && r.color == color && !r.has_moved);

        rook_ready
            && side
                .between()
                .iter()
                .all(|&col| self.is_square_empty(Square(row, col)))
            && side
                .king_path()
                .iter()
                .all(|&col| !attacked.contains(Square(row, col)))
    }
}
