//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for reference positions
//! - `make_unmake.rs` - Apply/unapply reversibility
//! - `edge_cases.rs` - Castling, en passant, promotion and counters
//! - `fen.rs` - FEN parsing, output and errors
//! - `proptest.rs` - Property-based tests

mod edge_cases;

use crate::board::{Move, Piece, Position, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

/// Find the legal move `from`-`to` (with `promotion`), panicking if absent.
pub(super) fn find_move(
    position: &mut Position,
    from: &str,
    to: &str,
    promotion: Option<Piece>,
) -> Move {
    let (from, to) = (sq(from), sq(to));
    position
        .generate_legal()
        .into_iter()
        .find(|m| m.from() == from && m.to() == to && m.promoted_to() == promotion)
        .unwrap_or_else(|| panic!("expected move {from}{to} not found"))
}
