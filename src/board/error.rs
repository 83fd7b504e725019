//! Error types for board operations.

use std::fmt;

use super::{PieceKind, Square};

/// Why a move request was rejected.
///
/// A rejected request never mutates the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece stands on the requested source square
    NoPieceAt { square: Square },
    /// The piece on the source square is not the piece the caller named
    PieceMismatch { square: Square, found: PieceKind },
    /// Destination is not in the piece's legal move set
    IllegalDestination { from: Square, to: Square },
    /// Castling rook missing or already moved
    MalformedCastling { king: Square, rook: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAt { square } => write!(f, "No piece on {square}"),
            MoveError::PieceMismatch { square, found } => {
                write!(f, "Piece on {square} is a {found}, not the requested piece")
            }
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
            MoveError::MalformedCastling { king, rook } => {
                write!(f, "Cannot castle king on {king}: no unmoved rook on {rook}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for FEN placement parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Empty input
    Empty,
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Placement does not describe exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly eight files
    WrongFileCount { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty FEN string"),
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::WrongFileCount { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_error_illegal_destination() {
        let err = MoveError::IllegalDestination {
            from: Square(6, 4),
            to: Square(3, 4),
        };
        assert!(err.to_string().contains("e2e5"));
    }

    #[test]
    fn test_move_error_no_piece() {
        let err = MoveError::NoPieceAt {
            square: Square(4, 4),
        };
        assert!(err.to_string().contains("e4"));
    }

    #[test]
    fn test_move_error_castling_names_rook() {
        let err = MoveError::MalformedCastling {
            king: Square(7, 4),
            rook: Square(7, 7),
        };
        let msg = err.to_string();
        assert!(msg.contains("e1"));
        assert!(msg.contains("h1"));
    }

    #[test]
    fn test_square_error_row_bounds() {
        let err = SquareError::RowOutOfBounds { row: 9 };
        assert!(err.to_string().contains('9'));
    }

    #[test]
    fn test_square_error_col_bounds() {
        let err = SquareError::ColOutOfBounds { col: 10 };
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_square_error_invalid_notation() {
        let err = SquareError::InvalidNotation {
            notation: "xyz".to_string(),
        };
        assert!(err.to_string().contains("xyz"));
    }

    #[test]
    fn test_fen_error_wrong_ranks() {
        let err = FenError::WrongRankCount { found: 7 };
        assert!(err.to_string().contains('7'));
    }

    #[test]
    fn test_fen_error_invalid_piece() {
        let err = FenError::InvalidPiece { char: 'z' };
        assert!(err.to_string().contains("'z'"));
    }

    #[test]
    fn test_error_clone() {
        let err = FenError::InvalidCastling { char: 'x' };
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
