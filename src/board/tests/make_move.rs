//! Move execution and rejection.

use super::sq;
use crate::board::{Board, BoardBuilder, Color, MoveError, MoveRecord, Piece, PieceKind};

#[test]
fn test_pawn_push_updates_board_and_history() {
    let mut board = Board::new();
    let pawn = board.get_piece(sq("e2")).unwrap();
    assert!(board.move_piece(&pawn, sq("e4")));

    assert!(board.is_square_empty(sq("e2")));
    let moved = board.get_piece(sq("e4")).unwrap();
    assert_eq!(moved.kind, PieceKind::Pawn);
    assert_eq!(moved.square, sq("e4"));
    assert_eq!(
        board.history(),
        &[MoveRecord::new(PieceKind::Pawn, sq("e2"), sq("e4"))]
    );
    assert_eq!(board.get_moves().len(), 1);
}

#[test]
fn test_capture_removes_victim() {
    let mut board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3");
    let pawn = board.get_piece(sq("e4")).unwrap();
    board.try_move_piece(&pawn, sq("d5")).unwrap();

    assert_eq!(board.get_pieces(Color::Black).len(), 1);
    assert_eq!(board.get_piece(sq("d5")).unwrap().color, Color::White);
}

#[test]
fn test_illegal_destination_rejected() {
    let mut board = Board::new();
    let before = board.clone();
    let pawn = board.get_piece(sq("e2")).unwrap();

    assert_eq!(
        board.try_move_piece(&pawn, sq("e5")),
        Err(MoveError::IllegalDestination {
            from: sq("e2"),
            to: sq("e5"),
        })
    );
    assert!(!board.move_piece(&pawn, sq("e5")));
    assert_eq!(board, before);
}

#[test]
fn test_empty_source_rejected() {
    let mut board = Board::new();
    let ghost = Piece::new(PieceKind::Queen, Color::White, sq("d4"));
    assert_eq!(
        board.try_move_piece(&ghost, sq("d5")),
        Err(MoveError::NoPieceAt { square: sq("d4") })
    );
    assert!(board.history().is_empty());
}

#[test]
fn test_mismatched_piece_rejected() {
    let mut board = Board::new();
    let impostor = Piece::new(PieceKind::Queen, Color::White, sq("e2"));
    assert_eq!(
        board.try_move_piece(&impostor, sq("e4")),
        Err(MoveError::PieceMismatch {
            square: sq("e2"),
            found: PieceKind::Pawn,
        })
    );

    let wrong_color = Piece::new(PieceKind::Pawn, Color::Black, sq("e2"));
    assert!(!board.move_piece(&wrong_color, sq("e3")));
    assert_eq!(board, Board::new());
}

#[test]
fn test_move_leaving_king_in_check_rejected() {
    let mut board = Board::from_fen("k3r3/8/8/8/8/8/4B3/4K3");
    let bishop = board.get_piece(sq("e2")).unwrap();
    assert!(!board.move_piece(&bishop, sq("d3")));
    assert_eq!(board.get_piece(sq("e2")).unwrap().kind, PieceKind::Bishop);
}

#[test]
fn test_kingside_castling_moves_both_pieces() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K2R");
    let king = board.get_piece(sq("e1")).unwrap();
    board.try_move_piece(&king, sq("g1")).unwrap();

    let king = board.get_piece(sq("g1")).unwrap();
    let rook = board.get_piece(sq("f1")).unwrap();
    assert_eq!(king.kind, PieceKind::King);
    assert_eq!(rook.kind, PieceKind::Rook);
    assert!(king.has_moved);
    assert!(rook.has_moved);
    assert!(board.is_square_empty(sq("e1")));
    assert!(board.is_square_empty(sq("h1")));
    // The other rook keeps its status
    assert!(!board.get_piece(sq("a1")).unwrap().has_moved);
    assert_eq!(board.history().len(), 1);
}

#[test]
fn test_queenside_castling_for_black() {
    let mut board = Board::from_fen("r3k3/8/8/8/8/8/8/4K3");
    let king = board.get_piece(sq("e8")).unwrap();
    assert!(board.move_piece(&king, sq("c8")));

    assert_eq!(board.get_piece(sq("c8")).unwrap().kind, PieceKind::King);
    assert_eq!(board.get_piece(sq("d8")).unwrap().kind, PieceKind::Rook);
    assert!(board.is_square_empty(sq("a8")));
    assert!(board.is_square_empty(sq("e8")));
}

#[test]
fn test_castling_without_unmoved_rook_leaves_board_untouched() {
    let mut board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .moved_piece(sq("h1"), Color::White, PieceKind::Rook)
        .build();
    let before = board.clone();

    assert_eq!(
        board.apply_move(sq("e1"), sq("g1")),
        Err(MoveError::MalformedCastling {
            king: sq("e1"),
            rook: sq("h1"),
        })
    );
    assert_eq!(board, before);
}

#[test]
fn test_king_and_rook_marked_moved() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K3");
    let rook = board.get_piece(sq("a1")).unwrap();
    assert!(!rook.has_moved);
    assert!(board.move_piece(&rook, sq("a4")));
    assert!(board.get_piece(sq("a4")).unwrap().has_moved);

    let king = board.get_piece(sq("e1")).unwrap();
    assert!(board.move_piece(&king, sq("e2")));
    assert!(board.get_piece(sq("e2")).unwrap().has_moved);
}

#[test]
fn test_make_move_accepts_legal_move_value() {
    let mut board = Board::new();
    let mv = board.legal_moves(Color::Black)[0];
    board.make_move(&mv).unwrap();
    assert_eq!(board.get_piece(mv.to).unwrap().kind, mv.piece.kind);
    assert_eq!(board.history()[0].from, mv.from());
}

#[test]
fn test_stale_piece_snapshot_is_rejected() {
    let mut board = Board::new();
    let knight = board.get_piece(sq("g1")).unwrap();
    assert!(board.move_piece(&knight, sq("f3")));
    // The snapshot still says g1
    assert!(!board.move_piece(&knight, sq("h3")));
    assert_eq!(board.history().len(), 1);
}
