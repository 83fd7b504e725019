//! Search tests to verify the engine finds correct moves in various positions.

use std::time::Duration;

use chess_core::board::{
    find_best_move, get_best_move, search_with_stats, Board, SearchParams, MATE_SCORE,
};
use chess_core::{Color, PieceKind, Square};

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Test that the engine finds a back rank mate in 1
#[test]
fn finds_mate_in_one_back_rank() {
    // White to move, Qe8# is mate
    let board = Board::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
    let result = find_best_move(&board, Color::White, &SearchParams::fixed_depth(3));

    let mv = result.best_move.expect("Should find a move");
    assert_eq!(mv.to_string(), "e1e8", "Should find Qe8# (back rank mate)");
}

/// Test that the engine finds scholar's mate
#[test]
fn finds_mate_in_one_queen() {
    // White to move, Qxf7# is mate
    let board =
        Board::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 0 4");
    let result = find_best_move(&board, Color::White, &SearchParams::fixed_depth(3));

    let mv = result.best_move.expect("Should find a move");
    assert_eq!(mv.to_string(), "h5f7", "Should find Qxf7# (scholar's mate)");
}

/// Test that the engine captures free material
#[test]
fn captures_free_piece() {
    // Undefended knight on b5, taken with check
    let board = Board::from_fen("4k3/8/8/1n6/8/8/8/4KB2 w - - 0 1");
    let result = find_best_move(&board, Color::White, &SearchParams::fixed_depth(2));
    assert_eq!(result.best_move.map(|m| m.to_string()).as_deref(), Some("f1b5"));
}

/// Test that the tuple API reports the piece and its destination
#[test]
fn get_best_move_returns_piece_and_square() {
    let board = Board::from_fen("k7/8/1K6/8/8/8/8/7R");
    let (piece, to) =
        get_best_move(&board, Color::White, 3, Duration::from_secs(30)).expect("a move");
    assert_eq!(piece.kind, PieceKind::Rook);
    assert_eq!(piece.square, sq("h1"));
    assert_eq!(to, sq("h8"));
}

/// Fool's mate: White has nothing to play
#[test]
fn no_move_in_checkmate() {
    let board = Board::from_fen("rnb1kbnr/pppp1ppp/4p3/8/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 1");
    assert!(board.is_checkmate(Color::White), "Position should be checkmate");

    let result = find_best_move(&board, Color::White, &SearchParams::fixed_depth(2));
    assert!(result.best_move.is_none(), "Should return None for checkmate position");
}

/// Deeper iterations never score worse along a forced mate
#[test]
fn iterative_deepening_never_regresses() {
    // Ra7+ K moves, Rb8#
    let board = Board::from_fen("8/7k/1R6/R7/8/8/8/4K3 w - - 0 1");
    let scores: Vec<i32> = (2..=4)
        .map(|depth| {
            let params = SearchParams::fixed_depth(depth).without_lmr();
            let result = find_best_move(&board, Color::White, &params);
            assert!(board.legal_moves(Color::White).contains(&result.best_move.unwrap()));
            result.score
        })
        .collect();

    assert!(scores.windows(2).all(|w| w[1] >= w[0]), "scores regressed: {scores:?}");
    assert!(scores[0] < MATE_SCORE, "no mate in one here");
    assert!(scores[1] >= MATE_SCORE);
    assert_eq!(scores[1], scores[2]);
}

#[test]
fn search_within_budget_on_wall_clock() {
    let board = Board::new();
    let params = SearchParams::fixed_depth(8).with_time_budget(Duration::from_millis(200));
    let (result, stats) = search_with_stats(&board, Color::White, &params);

    assert!(result.best_move.is_some());
    assert!(stats.nodes > 0);
    assert!(stats.depth_reached < 8, "depth 8 should not finish in 200ms");
}

#[test]
fn search_leaves_input_board_untouched() {
    let board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    let before = board.clone();
    let _ = find_best_move(&board, Color::White, &SearchParams::fixed_depth(2));
    assert_eq!(board, before);
}

#[test]
fn evaluation_material_advantage() {
    let board_white_up = Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    let board_black_up = Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1");

    let eval_white_up = board_white_up.evaluate();
    let eval_black_up = board_black_up.evaluate();
    assert!(eval_white_up > 800, "White up a queen should be very positive (eval: {eval_white_up})");
    assert!(eval_black_up < -800, "Black up a queen should be very negative (eval: {eval_black_up})");
}

/// A short self-play game never produces an illegal move
#[test]
fn self_play_stays_legal() {
    let mut board = Board::new();
    let mut color = Color::White;
    let params = SearchParams::fixed_depth(1);
    for _ in 0..12 {
        let Some(mv) = find_best_move(&board, color, &params).best_move else {
            break;
        };
        board.make_move(&mv).expect("search returned an illegal move");
        color = color.opponent();
    }
    assert!(!board.history().is_empty());
}
