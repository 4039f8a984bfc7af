//! Edge case tests for special chess positions and moves.

use super::{find_move, sq};
use crate::board::{Color, MoveKind, Piece, Position};

fn castles(position: &mut Position) -> Vec<String> {
    position
        .generate_legal()
        .iter()
        .filter(|m| m.is_castling())
        .map(|m| m.to_string())
        .collect()
}

#[test]
fn test_stalemate_position() {
    let mut position = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(position.generate_legal().is_empty());
    assert!(!position.is_in_check(Color::Black));
}

#[test]
fn test_checkmate_back_rank() {
    let mut position = Position::from_fen("3R2k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").unwrap();
    assert!(position.generate_legal().is_empty());
    assert!(position.is_in_check(Color::Black));
}

#[test]
fn test_promotion_emits_four_moves() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let promotions: Vec<_> = position
        .generate_legal()
        .into_iter()
        .filter(|m| m.from() == sq("a7"))
        .collect();

    assert_eq!(promotions.len(), 4);
    for piece in [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight] {
        assert!(promotions.iter().any(|m| m.kind() == MoveKind::Promotion(piece)));
    }
    assert!(promotions
        .iter()
        .all(|m| !m.is_castling() && !m.is_en_passant() && !m.creates_en_passant()));
}

#[test]
fn test_promotion_push_and_capture() {
    let mut position = Position::from_fen("1r6/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let from_a7: Vec<_> = position
        .generate_legal()
        .into_iter()
        .filter(|m| m.from() == sq("a7"))
        .collect();

    assert_eq!(from_a7.len(), 8);
    assert_eq!(from_a7.iter().filter(|m| m.is_capture()).count(), 4);
    assert!(from_a7.iter().all(|m| m.is_promotion()));
}

#[test]
fn test_black_promotion() {
    let mut position = Position::from_fen("k7/8/8/8/8/8/p7/7K b - - 0 1").unwrap();
    let mv = find_move(&mut position, "a2", "a1", Some(Piece::Rook));
    position.apply(&mv);
    assert_eq!(position.piece_at(sq("a1")), Some((Color::Black, Piece::Rook)));
    assert_eq!(position.piece_at(sq("a2")), None);
}

#[test]
fn test_en_passant_window() {
    let mut position = Position::from_fen("4k3/8/8/8/3p4/8/4P3/4K3 w - - 0 1").unwrap();

    let double = find_move(&mut position, "e2", "e4", None);
    assert!(double.creates_en_passant());
    assert_eq!(double.resulting_en_passant(), Some(sq("e3")));
    position.apply(&double);
    assert_eq!(position.en_passant_target(), Some(sq("e3")));

    // Capturable on the very next ply
    let capture = find_move(&mut position, "d4", "e3", None);
    assert!(capture.is_en_passant());
    assert_eq!(capture.captured_piece(), Some((Color::White, Piece::Pawn)));

    // Declined: gone two plies later
    let king_move = find_move(&mut position, "e8", "d7", None);
    position.apply(&king_move);
    assert_eq!(position.en_passant_target(), None);
    let reply = find_move(&mut position, "e1", "d1", None);
    position.apply(&reply);
    assert!(!position.generate_legal().contains_where(|m| m.is_en_passant()));
}

#[test]
fn test_double_push_without_neighbour_sets_no_target() {
    let mut position = Position::new();
    let mv = find_move(&mut position, "e2", "e4", None);
    assert!(!mv.creates_en_passant());
    position.apply(&mv);
    assert_eq!(position.en_passant_target(), None);
}

#[test]
fn test_en_passant_removes_correct_pawn() {
    let mut position = Position::from_fen("4k3/8/8/3Pp3/8/8/8/4K3 w - e6 0 2").unwrap();
    let mv = find_move(&mut position, "d5", "e6", None);
    position.apply(&mv);

    assert_eq!(position.piece_at(sq("e5")), None);
    assert_eq!(position.piece_at(sq("e6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(position.piece_at(sq("d5")), None);
    assert_eq!(position.halfmove_clock(), 0);
}

#[test]
fn test_en_passant_refused_when_it_exposes_king() {
    // Removing both pawns from the fifth rank opens the rook onto the king
    let mut position = Position::from_fen("8/8/8/K2Pp2r/8/8/8/4k3 w - e6 0 2").unwrap();
    assert!(!position.generate_legal().contains_where(|m| m.is_en_passant()));
    assert!(position.generate_pseudo_legal().contains_where(|m| m.is_en_passant()));
}

#[test]
fn test_castling_both_sides_available() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mut found = castles(&mut position);
    found.sort();
    assert_eq!(found, vec!["e1c1", "e1g1"]);
}

#[test]
fn test_castling_blocked_by_check() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/4r3/R3K2R w KQkq - 0 1").unwrap();
    assert!(position.is_in_check(Color::White));
    assert!(castles(&mut position).is_empty());
}

#[test]
fn test_castling_through_attacked_square() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/5r2/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(castles(&mut position), vec!["e1c1"]);
}

#[test]
fn test_castling_into_attacked_square() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/6r1/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(castles(&mut position), vec!["e1c1"]);
}

#[test]
fn test_queenside_castling_ignores_attacked_b_file() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/1r6/R3K2R w KQkq - 0 1").unwrap();
    let mut found = castles(&mut position);
    found.sort();
    assert_eq!(found, vec!["e1c1", "e1g1"]);
}

#[test]
fn test_castling_requires_rook_and_empty_path() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/4K2R w KQkq - 0 1").unwrap();
    assert_eq!(castles(&mut position), vec!["e1g1"]);

    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1").unwrap();
    assert!(castles(&mut position).is_empty());
}

#[test]
fn test_position_five_king_moves() {
    let mut position =
        Position::from_fen("rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8").unwrap();
    let moves = position.generate_legal();

    assert_eq!(moves.len(), 44);
    let kxf2 = find_move(&mut position, "e1", "f2", None);
    assert_eq!(kxf2.captured_piece(), Some((Color::Black, Piece::Knight)));
    assert!(moves.contains_where(|m| m.is_castling() && m.to() == sq("g1")));
    assert!(!moves.contains_where(|m| m.is_castling() && m.to() == sq("c1")));
}

#[test]
fn test_double_check_only_king_can_move() {
    let mut position = Position::from_fen("4k3/8/8/8/1b6/7Q/8/r3K3 w - - 0 1").unwrap();
    let moves = position.generate_legal();

    let mut targets: Vec<String> = moves.iter().map(|m| m.to().to_string()).collect();
    targets.sort();
    assert_eq!(targets, vec!["e2", "f2"]);
    assert!(moves.iter().all(|m| m.moved_piece() == (Color::White, Piece::King)));
}

#[test]
fn test_pinned_knight_cannot_move() {
    let mut position = Position::from_fen("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
    assert!(!position
        .generate_legal()
        .contains_where(|m| m.moved_piece().1 == Piece::Knight));
    assert!(position
        .generate_pseudo_legal()
        .contains_where(|m| m.moved_piece().1 == Piece::Knight));
}

#[test]
fn test_rook_moves_and_captures_clear_castling_rights() {
    let mut position = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();

    let rxa8 = find_move(&mut position, "a1", "a8", None);
    let rights = rxa8.resulting_castling_rights();
    assert!(rights.has(Color::White, true));
    assert!(!rights.has(Color::White, false));
    assert!(rights.has(Color::Black, true));
    assert!(!rights.has(Color::Black, false));

    let rh2 = find_move(&mut position, "h1", "h2", None);
    let rights = rh2.resulting_castling_rights();
    assert!(!rights.has(Color::White, true));
    assert!(rights.has(Color::White, false));
    assert!(rights.has(Color::Black, true));

    let king_step = find_move(&mut position, "e1", "d1", None);
    let rights = king_step.resulting_castling_rights();
    assert!(!rights.has(Color::White, true));
    assert!(!rights.has(Color::White, false));
    assert!(rights.has(Color::Black, false));
}

#[test]
fn test_move_counters() {
    let mut position = Position::new();

    let mv = find_move(&mut position, "g1", "f3", None);
    position.apply(&mv);
    assert_eq!((position.halfmove_clock(), position.fullmove_number()), (1, 1));

    let mv = find_move(&mut position, "g8", "f6", None);
    position.apply(&mv);
    assert_eq!((position.halfmove_clock(), position.fullmove_number()), (2, 2));

    let mv = find_move(&mut position, "e2", "e4", None);
    position.apply(&mv);
    assert_eq!((position.halfmove_clock(), position.fullmove_number()), (0, 2));

    let mv = find_move(&mut position, "f6", "e4", None);
    assert!(mv.is_capture());
    position.apply(&mv);
    assert_eq!((position.halfmove_clock(), position.fullmove_number()), (0, 3));
}

#[test]
fn test_move_display_and_accessors() {
    let mut position = Position::from_fen("8/P7/8/8/8/8/8/K1k5 w - - 0 1").unwrap();
    let mv = find_move(&mut position, "a7", "a8", Some(Piece::Queen));

    assert_eq!(mv.to_string(), "a7a8q");
    assert_eq!(mv.from(), sq("a7"));
    assert_eq!(mv.to(), sq("a8"));
    assert_eq!(mv.promoted_to(), Some(Piece::Queen));
    assert!(!mv.is_capture());
}

#[test]
fn test_crowded_queen_placement_generates_without_overflow() {
    let fen = "k1QQQQQQ/1Q5Q/1Q5Q/Q6Q/Q1Q2Q2/Q6Q/6Q1/QQQQQ1QK w - - 0 1";
    let mut position = Position::from_fen(fen).unwrap();

    let pseudo = position.generate_pseudo_legal();
    assert!(pseudo.len() > 256, "only {} moves", pseudo.len());
    assert!(pseudo.spilled());
    assert_eq!(pseudo.iter().count(), pseudo.len());
    assert_eq!(pseudo.clone().into_iter().len(), pseudo.len());

    let legal = position.generate_legal();
    assert_eq!(position.perft(1), legal.len() as u64);
    assert_eq!(position.perft_parallel(1, 4), legal.len() as u64);
    assert_eq!(position.to_fen(), fen);

    let last = legal[legal.len() - 1];
    assert_eq!(position.parse_move(&last.to_string()), Ok(last));
}
